//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Сумма"
//!     sort_field="amount"
//!     current_sort_field=sort_field
//!     sort_ascending=sort_ascending
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

/// Ячейка заголовка: индикатор сортировки (▲▼) и клик для смены сортировки.
/// Несортируемая колонка рендерится без индикатора и не реагирует на клик.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_field: String,

    /// Текущее поле сортировки
    #[prop(into)]
    current_sort_field: Signal<String>,

    /// Направление сортировки
    #[prop(into)]
    sort_ascending: Signal<bool>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    #[prop(optional, default = true)]
    sortable: bool,

    /// Ширина колонки, px
    #[prop(optional_no_strip)]
    width: Option<u32>,
) -> impl IntoView {
    let style = width
        .map(|w| format!("width: {}px; min-width: {}px;", w, w))
        .unwrap_or_default();

    if !sortable {
        return view! {
            <TableHeaderCell>
                <div class="table__header" style=style>{label}</div>
            </TableHeaderCell>
        }
        .into_any();
    }

    let sort_field_for_click = sort_field.clone();
    let sort_field_for_class = sort_field.clone();

    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style=style
                on:click=move |_| on_sort.run(sort_field_for_click.clone())
            >
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), &sort_field_for_class)>
                    {move || get_sort_indicator(&current_sort_field.get(), &sort_field, sort_ascending.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
    .into_any()
}
