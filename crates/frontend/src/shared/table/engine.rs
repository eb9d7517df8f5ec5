use contracts::shared::form_settings::FormSettings;
use contracts::shared::table::{
    Column, ColumnSource, Row, RowId, SortDirection, SortSpec, TableEvent, TableSettings,
};
use std::collections::HashSet;

use super::columns::{infer_columns, resolve_columns};
use super::compare::compare_values;
use super::error::TableError;
use super::search::{apply_search, search_fields};
use super::tree::{find_row, flatten_expanded, track_rows, FlatRow, TrackedRow};

/// Состояние запроса: поиск, сортировка и страница
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub search_term: String,
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub page_size: usize,
    pub pagination_enabled: bool,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort: None,
            page: 0,
            page_size: 50,
            pagination_enabled: true,
        }
    }
}

/// Строка готового представления
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow {
    pub id: RowId,
    /// Уровень вложенности для отступа
    pub depth: usize,
    pub row: Row,
    pub has_children: bool,
    pub expanded: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableView {
    pub rows: Vec<ViewRow>,
    /// Количество строк после поиска, до пагинации
    pub total_count: usize,
    pub total_pages: usize,
    /// Фактическая (ограниченная) страница
    pub page: usize,
}

pub fn validate_page_size(page_size: usize) -> Result<usize, TableError> {
    if page_size == 0 {
        log::warn!("rejected table page size {}", page_size);
        return Err(TableError::InvalidPageSize(page_size));
    }
    Ok(page_size)
}

pub fn validate_settings(settings: &TableSettings) -> Result<(), TableError> {
    validate_page_size(settings.page_size)?;
    for &size in &settings.page_size_options {
        validate_page_size(size)?;
    }
    Ok(())
}

/// Стабильная сортировка по полю
pub fn apply_sort<R: AsRef<Row>>(rows: &mut [R], field: &str, direction: SortDirection) {
    rows.sort_by(|a, b| compare_values(a.as_ref().get(field), b.as_ref().get(field), direction));
}

/// Срез `[page * page_size, page * page_size + page_size)`
pub fn apply_page<T>(rows: Vec<T>, page: usize, page_size: usize) -> Vec<T> {
    rows.into_iter()
        .skip(page.saturating_mul(page_size))
        .take(page_size)
        .collect()
}

/// Количество страниц; пустой список - одна пустая страница
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if total_count == 0 {
        1
    } else {
        total_count.div_ceil(page_size)
    }
}

struct Pipeline<'a> {
    page_rows: Vec<&'a TrackedRow>,
    total_count: usize,
    total_pages: usize,
    page: usize,
}

/// Поиск -> сортировка -> пагинация, строго в этом порядке
fn run_pipeline<'a>(
    rows: &'a [TrackedRow],
    fields: &[String],
    state: &TableState,
    external_sort: bool,
) -> Pipeline<'a> {
    let all: Vec<&TrackedRow> = rows.iter().collect();
    let mut filtered = apply_search(all, fields, &state.search_term);

    if !external_sort {
        if let Some(sort) = &state.sort {
            apply_sort(&mut filtered, &sort.field, sort.direction);
        }
    }

    let total_count = filtered.len();
    if !state.pagination_enabled {
        return Pipeline {
            page_rows: filtered,
            total_count,
            total_pages: 1,
            page: 0,
        };
    }

    let pages = total_pages(total_count, state.page_size);
    let page = state.page.min(pages - 1);
    Pipeline {
        page_rows: apply_page(filtered, page, state.page_size),
        total_count,
        total_pages: pages,
        page,
    }
}

fn to_view_row(flat: FlatRow<'_>, selected: &HashSet<RowId>, expanded: &HashSet<RowId>) -> ViewRow {
    ViewRow {
        id: flat.row.id.clone(),
        depth: flat.depth,
        row: flat.row.row.clone(),
        has_children: flat.row.has_children(),
        expanded: expanded.contains(&flat.row.id),
        selected: selected.contains(&flat.row.id),
    }
}

/// Производное представление без собственного состояния выбора и раскрытия.
pub fn derive_table_view(
    rows: &[Row],
    columns: &[Column],
    state: &TableState,
) -> Result<TableView, TableError> {
    if state.pagination_enabled {
        validate_page_size(state.page_size)?;
    }

    let tracked = track_rows(rows.to_vec(), None);
    let fields = search_fields(columns, None);
    let pipeline = run_pipeline(&tracked, &fields, state, false);
    let none = HashSet::new();

    Ok(TableView {
        rows: pipeline
            .page_rows
            .into_iter()
            .map(|row| to_view_row(FlatRow { row, depth: 0 }, &none, &none))
            .collect(),
        total_count: pipeline.total_count,
        total_pages: pipeline.total_pages,
        page: pipeline.page,
    })
}

/// Состояние одной таблицы: строки, колонки, запрос, выбор и раскрытие.
///
/// Все переходы синхронные и возвращают [`TableEvent`] вместо вызова колбэков.
/// Замена строк не сбрасывает выбор, но исключает из него исчезнувшие строки.
#[derive(Debug, Clone)]
pub struct TableEngine {
    pub(super) settings: TableSettings,
    pub(super) column_source: ColumnSource,
    pub(super) columns: Vec<Column>,
    pub(super) rows: Vec<TrackedRow>,
    /// Следующий синтетический индекс верхнего уровня
    pub(super) next_index: usize,
    pub(super) state: TableState,
    pub(super) selected: HashSet<RowId>,
    pub(super) expanded: HashSet<RowId>,
}

impl TableEngine {
    pub fn new(column_source: ColumnSource, settings: TableSettings) -> Result<Self, TableError> {
        validate_settings(&settings)?;

        let state = TableState {
            search_term: String::new(),
            sort: settings.default_sort.clone(),
            page: 0,
            page_size: settings.page_size,
            pagination_enabled: settings.pagination_enabled,
        };

        Ok(Self {
            columns: resolve_columns(&column_source, &[]),
            column_source,
            settings,
            rows: Vec::new(),
            next_index: 0,
            state,
            selected: HashSet::new(),
            expanded: HashSet::new(),
        })
    }

    pub fn from_form_settings(
        column_source: ColumnSource,
        form: &FormSettings,
    ) -> Result<Self, TableError> {
        let settings = form.table_settings()?;
        Self::new(column_source, settings)
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.set_rows(rows);
        self
    }

    pub fn settings(&self) -> &TableSettings {
        &self.settings
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn selected(&self) -> &HashSet<RowId> {
        &self.selected
    }

    pub fn expanded(&self) -> &HashSet<RowId> {
        &self.expanded
    }

    /// Текущие строки с вложенными `Children` (с учётом правок)
    pub fn rows(&self) -> Vec<Row> {
        self.rows.iter().map(TrackedRow::to_row).collect()
    }

    /// Заменяет исходные строки. Возвращает события, если пришлось
    /// исключить строки из выбора или сдвинуть страницу.
    pub fn set_rows(&mut self, rows: Vec<Row>) -> Vec<TableEvent> {
        if self.column_source == ColumnSource::Inferred {
            self.columns = infer_columns(&rows);
        }
        self.next_index = rows.len();
        self.rows = track_rows(rows, self.settings.track_by_field.as_deref());
        log::debug!("table rows replaced: {} top-level rows", self.rows.len());

        self.settle()
    }

    /// Восстанавливает инварианты после изменения данных
    pub(super) fn settle(&mut self) -> Vec<TableEvent> {
        let mut events = Vec::new();
        if let Some(event) = self.prune_selection() {
            events.push(event);
        }
        if let Some(event) = self.clamp_page() {
            events.push(event);
        }
        events
    }

    pub(super) fn known_ids(&self) -> HashSet<RowId> {
        let mut ids = HashSet::new();
        for row in &self.rows {
            row.collect_ids(&mut ids);
        }
        ids
    }

    fn prune_selection(&mut self) -> Option<TableEvent> {
        let known = self.known_ids();
        let before = self.selected.len();
        self.selected.retain(|id| known.contains(id));
        self.expanded.retain(|id| known.contains(id));

        if self.selected.len() != before {
            log::debug!("evicted {} stale selected rows", before - self.selected.len());
            Some(self.selection_event())
        } else {
            None
        }
    }

    fn clamp_page(&mut self) -> Option<TableEvent> {
        if !self.state.pagination_enabled {
            return None;
        }
        let last = self.pipeline().total_pages - 1;
        if self.state.page > last {
            self.state.page = last;
            Some(TableEvent::PageChanged { page: last })
        } else {
            None
        }
    }

    fn search_fields(&self) -> Vec<String> {
        search_fields(&self.columns, self.settings.search_fields.as_deref())
    }

    fn pipeline(&self) -> Pipeline<'_> {
        run_pipeline(
            &self.rows,
            &self.search_fields(),
            &self.state,
            self.settings.external_sort,
        )
    }

    pub(super) fn selection_event(&self) -> TableEvent {
        let mut ids: Vec<RowId> = self.selected.iter().cloned().collect();
        ids.sort();
        TableEvent::RowsSelected(ids)
    }

    /// Новый поисковый запрос; страница сбрасывается на первую
    pub fn set_search(&mut self, term: &str) -> TableEvent {
        self.state.search_term = term.to_string();
        self.state.page = 0;
        log::debug!("table search: {:?}", term);
        TableEvent::SearchChanged {
            term: term.to_string(),
        }
    }

    /// Клик по заголовку: повторный клик по тому же полю меняет направление,
    /// новое поле сортируется по возрастанию. Несортируемая колонка - `None`.
    pub fn toggle_sort(&mut self, field: &str) -> Result<Option<TableEvent>, TableError> {
        let column = self
            .columns
            .iter()
            .find(|c| c.field == field)
            .ok_or_else(|| TableError::UnknownField(field.to_string()))?;
        if !column.sortable {
            return Ok(None);
        }

        let direction = match &self.state.sort {
            Some(current) if current.field == field => current.direction.toggled(),
            _ => SortDirection::Asc,
        };
        self.state.sort = Some(SortSpec {
            field: field.to_string(),
            direction,
        });
        log::debug!("table sort: {} {:?}", field, direction);

        Ok(Some(TableEvent::SortChanged {
            field: field.to_string(),
            direction,
        }))
    }

    pub fn set_page(&mut self, page: usize) -> TableEvent {
        let last = self.pipeline().total_pages - 1;
        self.state.page = page.min(last);
        TableEvent::PageChanged {
            page: self.state.page,
        }
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<TableEvent, TableError> {
        self.state.page_size = validate_page_size(page_size)?;
        self.clamp_page();
        Ok(TableEvent::PageSizeChanged {
            page_size,
            page: self.state.page,
        })
    }

    /// Идентичности строк верхнего уровня на текущей странице
    pub fn page_ids(&self) -> Vec<RowId> {
        self.pipeline()
            .page_rows
            .iter()
            .map(|row| row.id.clone())
            .collect()
    }

    pub fn toggle_row(&mut self, id: &RowId) -> Result<TableEvent, TableError> {
        if find_row(&self.rows, id).is_none() {
            return Err(TableError::UnknownRow(id.clone()));
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
        }
        Ok(self.selection_event())
    }

    /// "Выбрать все" действует только на текущую страницу: если она выбрана
    /// целиком, снимает выбор с её строк, иначе выбор заменяется её строками.
    pub fn toggle_all(&mut self) -> TableEvent {
        let ids = self.page_ids();
        if self.is_all_selected() {
            for id in &ids {
                self.selected.remove(id);
            }
        } else {
            self.selected = ids.into_iter().collect();
        }
        self.selection_event()
    }

    pub fn is_all_selected(&self) -> bool {
        let ids = self.page_ids();
        !ids.is_empty() && ids.iter().all(|id| self.selected.contains(id))
    }

    pub fn is_some_selected(&self) -> bool {
        let ids = self.page_ids();
        let count = ids.iter().filter(|id| self.selected.contains(*id)).count();
        count > 0 && count < ids.len()
    }

    /// Раскрывает или сворачивает строку дерева. Строка без детей - `None`.
    pub fn toggle_tree_row(&mut self, id: &RowId) -> Option<TableEvent> {
        let has_children = find_row(&self.rows, id)
            .map(TrackedRow::has_children)
            .unwrap_or(false);
        if !has_children {
            return None;
        }

        if self.expanded.remove(id) {
            Some(TableEvent::RowCollapsed(id.clone()))
        } else {
            self.expanded.insert(id.clone());
            Some(TableEvent::RowExpanded(id.clone()))
        }
    }

    pub fn view(&self) -> TableView {
        let pipeline = self.pipeline();

        let mut flat = Vec::new();
        for row in &pipeline.page_rows {
            flatten_expanded(row, 0, &self.expanded, &mut flat);
        }

        TableView {
            rows: flat
                .into_iter()
                .map(|f| to_view_row(f, &self.selected, &self.expanded))
                .collect(),
            total_count: pipeline.total_count,
            total_pages: pipeline.total_pages,
            page: pipeline.page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn people() -> Vec<Row> {
        vec![
            Row::new().with("id", 1).with("name", "Bob"),
            Row::new().with("id", 2).with("name", "Amy"),
        ]
    }

    fn engine(settings: TableSettings) -> TableEngine {
        TableEngine::new(ColumnSource::Inferred, settings).unwrap()
    }

    fn numbered(count: usize) -> Vec<Row> {
        (0..count)
            .map(|i| Row::new().with("id", i as u64).with("name", format!("item{}", i)))
            .collect()
    }

    fn view_names(view: &TableView) -> Vec<String> {
        view.rows
            .iter()
            .map(|r| r.row.get("name").and_then(Value::as_str).unwrap_or("").to_string())
            .collect()
    }

    fn tracked(settings: TableSettings) -> TableSettings {
        TableSettings {
            track_by_field: Some("id".to_string()),
            ..settings
        }
    }

    #[test]
    fn test_sort_toggles_on_repeated_click() {
        let mut table = engine(TableSettings::default()).with_rows(people());

        let event = table.toggle_sort("name").unwrap();
        assert_eq!(
            event,
            Some(TableEvent::SortChanged {
                field: "name".to_string(),
                direction: SortDirection::Asc
            })
        );
        assert_eq!(view_names(&table.view()), vec!["Amy", "Bob"]);

        table.toggle_sort("name").unwrap();
        assert_eq!(view_names(&table.view()), vec!["Bob", "Amy"]);

        table.toggle_sort("id").unwrap();
        assert_eq!(table.state().sort.as_ref().map(|s| s.direction), Some(SortDirection::Asc));
    }

    #[test]
    fn test_unknown_and_unsortable_fields() {
        let columns = vec![
            Column::new("name", "Имя"),
            Column::new("note", "Примечание").sortable(false),
        ];
        let mut table = TableEngine::new(ColumnSource::Explicit(columns), TableSettings::default())
            .unwrap()
            .with_rows(people());

        assert!(matches!(table.toggle_sort("missing"), Err(TableError::UnknownField(_))));
        assert_eq!(table.toggle_sort("note").unwrap(), None);
        assert!(table.state().sort.is_none());
    }

    #[test]
    fn test_nulls_sort_last() {
        let rows = vec![
            Row::new().with("name", "b").with("score", Value::Null),
            Row::new().with("name", "a").with("score", 3),
            Row::new().with("name", "c").with("score", 1),
        ];
        let mut table = engine(TableSettings::default()).with_rows(rows);
        table.toggle_sort("score").unwrap();
        assert_eq!(view_names(&table.view()), vec!["c", "a", "b"]);
        table.toggle_sort("score").unwrap();
        assert_eq!(view_names(&table.view()), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_external_sort_keeps_arrival_order() {
        let settings = TableSettings {
            external_sort: true,
            ..TableSettings::default()
        };
        let mut table = engine(settings).with_rows(people());
        assert!(table.toggle_sort("name").unwrap().is_some());
        assert_eq!(view_names(&table.view()), vec!["Bob", "Amy"]);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let settings = TableSettings {
            page_size: 0,
            ..TableSettings::default()
        };
        assert!(matches!(
            TableEngine::new(ColumnSource::Inferred, settings),
            Err(TableError::InvalidPageSize(0))
        ));

        let mut table = engine(TableSettings::default());
        assert!(table.set_page_size(0).is_err());
        assert_eq!(table.state().page_size, 50);
    }

    #[test]
    fn test_pagination_slices_and_counts() {
        let settings = TableSettings {
            page_size: 10,
            ..TableSettings::default()
        };
        let mut table = engine(settings).with_rows(numbered(25));

        let view = table.view();
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.total_count, 25);
        assert_eq!(view.total_pages, 3);

        table.set_page(2);
        assert_eq!(table.view().rows.len(), 5);

        assert_eq!(table.set_page(99), TableEvent::PageChanged { page: 2 });
    }

    #[test]
    fn test_page_is_clamped_after_data_and_size_change() {
        let settings = TableSettings {
            page_size: 10,
            ..TableSettings::default()
        };
        let mut table = engine(settings).with_rows(numbered(25));
        table.set_page(2);

        let events = table.set_rows(numbered(12));
        assert!(events.contains(&TableEvent::PageChanged { page: 1 }));
        assert_eq!(table.view().rows.len(), 2);

        let event = table.set_page_size(50).unwrap();
        assert_eq!(event, TableEvent::PageSizeChanged { page_size: 50, page: 0 });

        table.set_rows(Vec::new());
        let view = table.view();
        assert_eq!(view.page, 0);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn test_pagination_disabled_returns_everything() {
        let settings = TableSettings {
            page_size: 5,
            pagination_enabled: false,
            ..TableSettings::default()
        };
        let table = engine(settings).with_rows(numbered(12));
        assert_eq!(table.view().rows.len(), 12);
    }

    #[test]
    fn test_search_resets_page() {
        let settings = TableSettings {
            page_size: 2,
            ..TableSettings::default()
        };
        let mut table = engine(settings).with_rows(numbered(12));
        table.set_page(3);
        table.set_search("ITEM1");
        let view = table.view();
        assert_eq!(view.page, 0);
        assert_eq!(view.total_count, 3);
        assert_eq!(view_names(&view), vec!["item1", "item10"]);
    }

    #[test]
    fn test_toggle_row_twice_restores_membership() {
        let mut table = engine(tracked(TableSettings::default())).with_rows(people());
        let id = RowId::key("1");

        table.toggle_row(&id).unwrap();
        assert!(table.selected().contains(&id));
        let event = table.toggle_row(&id).unwrap();
        assert_eq!(event, TableEvent::RowsSelected(vec![]));
        assert!(table.selected().is_empty());

        assert!(matches!(
            table.toggle_row(&RowId::key("404")),
            Err(TableError::UnknownRow(_))
        ));
    }

    #[test]
    fn test_toggle_all_is_scoped_to_current_page() {
        let settings = tracked(TableSettings {
            page_size: 2,
            ..TableSettings::default()
        });
        let mut table = engine(settings).with_rows(numbered(5));

        table.toggle_row(&RowId::key("4")).unwrap();
        table.toggle_all();
        let mut selected: Vec<RowId> = table.selected().iter().cloned().collect();
        selected.sort();
        assert_eq!(selected, vec![RowId::key("0"), RowId::key("1")]);
        assert!(table.is_all_selected());
        assert!(!table.is_some_selected());

        table.toggle_all();
        assert!(table.selected().is_empty());

        table.toggle_row(&RowId::key("0")).unwrap();
        assert!(table.is_some_selected());
    }

    #[test]
    fn test_selection_survives_search_but_not_removal() {
        let mut table = engine(tracked(TableSettings::default())).with_rows(people());
        table.toggle_row(&RowId::key("1")).unwrap();
        table.toggle_row(&RowId::key("2")).unwrap();

        table.set_search("amy");
        assert_eq!(table.selected().len(), 2);

        let events = table.set_rows(vec![Row::new().with("id", 2).with("name", "Amy")]);
        assert_eq!(events, vec![TableEvent::RowsSelected(vec![RowId::key("2")])]);
    }

    #[test]
    fn test_tree_expansion_renders_children_in_order() {
        let rows = vec![Row::new().with("name", "row").with_children(vec![
            Row::new().with("name", "A"),
            Row::new()
                .with("name", "B")
                .with_children(vec![Row::new().with("name", "C")]),
        ])];
        let mut table = engine(TableSettings::default()).with_rows(rows);
        let root = RowId::Path(vec![0]);
        let b = RowId::Path(vec![0, 1]);

        assert_eq!(table.toggle_tree_row(&root), Some(TableEvent::RowExpanded(root.clone())));
        table.toggle_tree_row(&b);
        let view = table.view();
        assert_eq!(view_names(&view), vec!["row", "A", "B", "C"]);
        let depths: Vec<usize> = view.rows.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![0, 1, 1, 2]);

        // Свёрнутый корень скрывает поддерево, раскрытие B сохраняется
        table.toggle_tree_row(&root);
        assert_eq!(table.view().rows.len(), 1);
        assert!(table.expanded().contains(&b));
        table.toggle_tree_row(&root);
        assert_eq!(table.view().rows.len(), 4);

        // Строка без детей - ничего не происходит
        assert_eq!(table.toggle_tree_row(&RowId::Path(vec![0, 0])), None);
    }

    #[test]
    fn test_view_is_idempotent() {
        let mut table = engine(TableSettings::default()).with_rows(people());
        table.toggle_sort("name").unwrap();
        assert_eq!(table.view(), table.view());
    }

    #[test]
    fn test_derive_table_view_pure_function() {
        let state = TableState {
            sort: Some(SortSpec {
                field: "name".to_string(),
                direction: SortDirection::Asc,
            }),
            page_size: 1,
            ..TableState::default()
        };
        let columns = vec![Column::new("name", "Имя")];
        let view = derive_table_view(&people(), &columns, &state).unwrap();
        assert_eq!(view_names(&view), vec!["Amy"]);
        assert_eq!(view.total_pages, 2);

        let empty = derive_table_view(&[], &columns, &state).unwrap();
        assert!(empty.rows.is_empty());
        assert_eq!(empty.total_count, 0);

        let invalid = TableState {
            page_size: 0,
            ..TableState::default()
        };
        assert!(derive_table_view(&people(), &columns, &invalid).is_err());
    }

    #[test]
    fn test_page_length_property() {
        for size in 1..6 {
            for page in 0..5 {
                let rows: Vec<usize> = (0..13).collect();
                let expected = size.min(13usize.saturating_sub(page * size));
                assert_eq!(apply_page(rows, page, size).len(), expected);
            }
        }
    }

    #[test]
    fn test_settings_from_form_json() {
        let form = FormSettings {
            form_key: "users_list".to_string(),
            settings_json: r#"{"page_size": 100, "track_by_field": "id"}"#.to_string(),
        };
        let table = TableEngine::from_form_settings(ColumnSource::Inferred, &form).unwrap();
        assert_eq!(table.state().page_size, 100);
        assert!(table.settings().pagination_enabled);

        let broken = FormSettings {
            form_key: "users_list".to_string(),
            settings_json: "{".to_string(),
        };
        assert!(matches!(
            TableEngine::from_form_settings(ColumnSource::Inferred, &broken),
            Err(TableError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_rows_sharing_a_key_stay_distinct() {
        let mut table = engine(tracked(TableSettings::default())).with_rows(vec![
            Row::new().with("id", 1).with("name", "Bob"),
            Row::new()
                .with("id", 1)
                .with("name", "Bob twin")
                .with_children(vec![Row::new().with("name", "child")]),
        ]);
        let twin = RowId::Path(vec![1]);

        assert_eq!(table.toggle_tree_row(&RowId::key("1")), None);
        assert_eq!(table.toggle_tree_row(&twin), Some(TableEvent::RowExpanded(twin.clone())));
        assert_eq!(view_names(&table.view()), vec!["Bob", "Bob twin", "child"]);

        table.toggle_row(&RowId::key("1")).unwrap();
        let selected: Vec<bool> = table.view().rows.iter().map(|r| r.selected).collect();
        assert_eq!(selected, vec![true, false, false]);
    }
}
