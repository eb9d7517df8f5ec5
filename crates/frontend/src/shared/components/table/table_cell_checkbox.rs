//! Чекбокс в ячейке таблицы для выбора отдельной строки

use contracts::shared::table::RowId;
use leptos::prelude::*;
use thaw::*;

/// Останавливает propagation клика, чтобы не срабатывал клик по строке.
#[component]
pub fn TableCellCheckbox(
    item_id: RowId,
    #[prop(into)]
    checked: Signal<bool>,
    on_toggle: Callback<RowId>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(item_id.clone())
            />
        </TableCell>
    }
}
