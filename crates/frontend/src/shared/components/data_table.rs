//! Таблица поверх [`TableEngine`]: поиск, сортировка по заголовку, пагинация,
//! выбор строк и раскрытие дерева.
//!
//! # Пример
//!
//! ```rust,ignore
//! <DataTable
//!     rows=users
//!     column_source=ColumnSource::Explicit(columns)
//!     settings=TableSettings { track_by_field: Some("id".into()), ..Default::default() }
//!     selectable=true
//!     on_event=Callback::new(move |event| log::info!("{:?}", event))
//! />
//! ```

use contracts::shared::table::{ColumnSource, Row, RowId, TableEvent, TableSettings};
use leptos::prelude::*;
use thaw::*;

use super::emit_events;
use super::pagination_controls::PaginationControls;
use super::table::{CheckboxState, SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::table::format::format_cell;
use crate::shared::table::{TableEngine, ViewRow};

/// Отступ одного уровня дерева, px
const TREE_INDENT_PX: usize = 20;

#[component]
pub fn DataTable(
    /// Исходные строки; при каждом изменении движок пересчитывает представление
    #[prop(into)]
    rows: Signal<Vec<Row>>,
    column_source: ColumnSource,
    #[prop(optional)]
    settings: TableSettings,
    /// Показывать колонку чекбоксов
    #[prop(optional)]
    selectable: bool,
    #[prop(optional)]
    searchable: bool,
    #[prop(optional)]
    on_event: Option<Callback<TableEvent>>,
) -> impl IntoView {
    let engine = match TableEngine::new(column_source, settings) {
        Ok(engine) => engine,
        Err(err) => {
            log::error!("table configuration rejected: {}", err);
            return view! { <div class="table__error">{err.to_string()}</div> }.into_any();
        }
    };
    let page_size_options = engine.settings().page_size_options.clone();
    let pagination_enabled = engine.settings().pagination_enabled;
    let engine = RwSignal::new(engine);

    Effect::new(move |_| {
        let data = rows.get();
        let events = engine.try_update(|e| e.set_rows(data)).unwrap_or_default();
        emit_events(on_event, events);
    });

    let table_view = Memo::new(move |_| engine.with(|e| e.view()));
    let columns = Memo::new(move |_| engine.with(|e| e.columns().to_vec()));
    let search_term = Signal::derive(move || engine.with(|e| e.state().search_term.clone()));
    let sort_field = Signal::derive(move || {
        engine.with(|e| {
            e.state()
                .sort
                .as_ref()
                .map(|s| s.field.clone())
                .unwrap_or_default()
        })
    });
    let sort_ascending = Signal::derive(move || {
        engine.with(|e| {
            e.state()
                .sort
                .as_ref()
                .map(|s| s.direction.is_ascending())
                .unwrap_or(true)
        })
    });
    let header_state = Signal::derive(move || {
        engine.with(|e| CheckboxState::from_flags(e.is_all_selected(), e.is_some_selected()))
    });

    let on_search = Callback::new(move |term: String| {
        let event = engine.try_update(|e| e.set_search(&term));
        emit_events(on_event, event);
    });
    let on_sort = Callback::new(move |field: String| {
        match engine.try_update(|e| e.toggle_sort(&field)) {
            Some(Ok(event)) => emit_events(on_event, event),
            Some(Err(err)) => log::warn!("sort rejected: {}", err),
            None => {}
        }
    });
    let on_page_change = Callback::new(move |page: usize| {
        let event = engine.try_update(|e| e.set_page(page));
        emit_events(on_event, event);
    });
    let on_page_size_change = Callback::new(move |size: usize| {
        match engine.try_update(|e| e.set_page_size(size)) {
            Some(Ok(event)) => emit_events(on_event, Some(event)),
            Some(Err(err)) => log::warn!("page size rejected: {}", err),
            None => {}
        }
    });
    let on_toggle_all = Callback::new(move |_: ()| {
        let event = engine.try_update(|e| e.toggle_all());
        emit_events(on_event, event);
    });
    let on_toggle_row = Callback::new(move |id: RowId| {
        match engine.try_update(|e| e.toggle_row(&id)) {
            Some(Ok(event)) => emit_events(on_event, Some(event)),
            Some(Err(err)) => log::warn!("selection rejected: {}", err),
            None => {}
        }
    });
    let on_toggle_tree = Callback::new(move |id: RowId| {
        let event = engine.try_update(|e| e.toggle_tree_row(&id)).flatten();
        emit_events(on_event, event);
    });

    let render_row = move |view_row: ViewRow| {
        let filter = search_term.get_untracked();
        let cells = columns
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, column)| {
                let text = format_cell(&column, view_row.row.get(&column.field));
                let content = highlight_matches(&text, &filter);
                if index > 0 {
                    return view! { <TableCell>{content}</TableCell> }.into_any();
                }

                // Первая колонка несёт отступ и переключатель дерева
                let indent = format!("padding-left: {}px;", view_row.depth * TREE_INDENT_PX);
                let toggle = if view_row.has_children {
                    let id = view_row.id.clone();
                    let chevron = if view_row.expanded { "chevron-down" } else { "chevron-right" };
                    view! {
                        <button class="tree-toggle" on:click=move |_| on_toggle_tree.run(id.clone())>
                            {icon(chevron)}
                        </button>
                    }
                    .into_any()
                } else {
                    view! { <span class="tree-toggle-placeholder"></span> }.into_any()
                };
                view! {
                    <TableCell>
                        <div class="table__tree-cell" style=indent>
                            {toggle}
                            {content}
                        </div>
                    </TableCell>
                }
                .into_any()
            })
            .collect_view();

        let checkbox = selectable.then(|| {
            let checked = view_row.selected;
            view! {
                <TableCellCheckbox
                    item_id={view_row.id.clone()}
                    checked=Signal::derive(move || checked)
                    on_toggle=on_toggle_row
                />
            }
        });

        let is_selected = view_row.selected;
        view! {
            <TableRow class:table__row--selected=is_selected>
                {checkbox}
                {cells}
            </TableRow>
        }
    };

    view! {
        <div class="data-table">
            <Show when=move || searchable>
                <SearchInput value=search_term on_change=on_search/>
            </Show>
            <Table>
                <TableHeader>
                    <TableRow>
                        <Show when=move || selectable>
                            <TableHeaderCheckbox state=header_state on_toggle=on_toggle_all/>
                        </Show>
                        {move || {
                            columns
                                .get()
                                .into_iter()
                                .map(|column| {
                                    view! {
                                        <SortableHeaderCell
                                            label={column.header.clone()}
                                            sort_field={column.field.clone()}
                                            current_sort_field=sort_field
                                            sort_ascending=sort_ascending
                                            on_sort=on_sort
                                            sortable=column.sortable
                                            width=column.width
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || table_view.get().rows.into_iter().map(render_row).collect_view()}
                </TableBody>
            </Table>
            <Show when=move || pagination_enabled>
                <PaginationControls
                    table_view=table_view
                    page_size=Signal::derive(move || engine.with(|e| e.state().page_size))
                    on_page_change=on_page_change
                    on_page_size_change=on_page_size_change
                    page_size_options={page_size_options.clone()}
                />
            </Show>
        </div>
    }
    .into_any()
}
