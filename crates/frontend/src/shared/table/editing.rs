//! Операции редактируемой таблицы. Правки применяются к собственной копии
//! строк движка, исходная коллекция вызывающего не меняется.

use contracts::shared::table::{ColumnSource, Row, RowId, TableEvent};
use serde_json::Value;
use std::collections::HashSet;
use uuid::Uuid;

use super::columns::infer_columns;
use super::engine::TableEngine;
use super::error::TableError;
use super::tree::{find_row_mut, remove_rows, row_identity, track_row};

impl TableEngine {
    /// Меняет значение ячейки. Поле отслеживания не редактируется.
    pub fn update_cell(
        &mut self,
        id: &RowId,
        field: &str,
        value: Value,
    ) -> Result<TableEvent, TableError> {
        if self.settings.track_by_field.as_deref() == Some(field) {
            return Err(TableError::ReadOnlyField(field.to_string()));
        }
        if self.column_source != ColumnSource::Inferred
            && !self.columns.iter().any(|c| c.field == field)
        {
            return Err(TableError::UnknownField(field.to_string()));
        }

        let row = find_row_mut(&mut self.rows, id)
            .ok_or_else(|| TableError::UnknownRow(id.clone()))?;
        row.row.values.insert(field.to_string(), value.clone());
        log::debug!("cell edited: {} / {}", id, field);

        if self.column_source == ColumnSource::Inferred {
            self.refresh_inferred_columns();
        }

        Ok(TableEvent::CellEdited {
            id: id.clone(),
            field: field.to_string(),
            value,
        })
    }

    /// Добавляет строку в конец. Если задано поле отслеживания, а в строке
    /// его нет, строке присваивается новый UUID. Ключ, уже занятый другой
    /// строкой, отклоняется.
    pub fn insert_row(&mut self, mut row: Row) -> Result<TableEvent, TableError> {
        let track = self.settings.track_by_field.clone();
        if let Some(field) = &track {
            if row.get(field).is_none() {
                row.values
                    .insert(field.clone(), Value::String(Uuid::new_v4().to_string()));
            }
        }

        let path = vec![self.next_index];
        let mut known = self.known_ids();
        let id = row_identity(&row, track.as_deref(), &path);
        if known.contains(&id) {
            log::warn!("rejected row with duplicate key {}", id);
            return Err(TableError::DuplicateRow(id));
        }

        let tracked = track_row(row, track.as_deref(), path, &mut known);
        self.next_index += 1;
        let id = tracked.id.clone();
        self.rows.push(tracked);

        if self.column_source == ColumnSource::Inferred {
            self.refresh_inferred_columns();
        }
        log::debug!("row inserted: {}", id);
        Ok(TableEvent::RowInserted(id))
    }

    /// Удаляет строки (на любом уровне дерева) вместе с их поддеревьями.
    pub fn remove_rows(&mut self, ids: &[RowId]) -> Vec<TableEvent> {
        let ids: HashSet<RowId> = ids.iter().cloned().collect();
        let removed = remove_rows(&mut self.rows, &ids);
        if removed.is_empty() {
            return Vec::new();
        }
        log::debug!("removed {} rows", removed.len());

        let mut events = vec![TableEvent::RowsRemoved(removed)];
        events.extend(self.settle());
        events
    }

    pub fn remove_selected(&mut self) -> Vec<TableEvent> {
        let ids: Vec<RowId> = self.selected.iter().cloned().collect();
        self.remove_rows(&ids)
    }

    fn refresh_inferred_columns(&mut self) {
        let rows = self.rows();
        self.columns = infer_columns(&rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table::{Column, TableSettings};
    use serde_json::json;

    fn table(columns: ColumnSource, track: Option<&str>) -> TableEngine {
        let settings = TableSettings {
            page_size: 2,
            track_by_field: track.map(str::to_string),
            ..TableSettings::default()
        };
        TableEngine::new(columns, settings).unwrap().with_rows(vec![
            Row::new().with("id", 1).with("name", "Bob"),
            Row::new().with("id", 2).with("name", "Amy"),
            Row::new().with("id", 3).with("name", "Eve"),
        ])
    }

    #[test]
    fn test_update_cell_changes_engine_copy_only() {
        let source = vec![Row::new().with("id", 1).with("name", "Bob")];
        let mut engine = TableEngine::new(ColumnSource::Inferred, TableSettings::default())
            .unwrap()
            .with_rows(source.clone());

        let id = RowId::Path(vec![0]);
        let event = engine.update_cell(&id, "name", json!("Robert")).unwrap();
        assert_eq!(
            event,
            TableEvent::CellEdited {
                id: id.clone(),
                field: "name".to_string(),
                value: json!("Robert"),
            }
        );
        assert_eq!(engine.rows()[0].get("name"), Some(&json!("Robert")));
        assert_eq!(source[0].get("name"), Some(&json!("Bob")));
    }

    #[test]
    fn test_update_cell_errors() {
        let columns = ColumnSource::Explicit(vec![Column::new("name", "Имя")]);
        let mut engine = table(columns, Some("id"));

        assert!(matches!(
            engine.update_cell(&RowId::key("1"), "id", json!(9)),
            Err(TableError::ReadOnlyField(_))
        ));
        assert!(matches!(
            engine.update_cell(&RowId::key("1"), "email", json!("x")),
            Err(TableError::UnknownField(_))
        ));
        assert!(matches!(
            engine.update_cell(&RowId::key("42"), "name", json!("x")),
            Err(TableError::UnknownRow(_))
        ));
    }

    #[test]
    fn test_insert_row_assigns_identity() {
        let mut engine = table(ColumnSource::Inferred, Some("id"));
        let event = engine.insert_row(Row::new().with("name", "Zed")).unwrap();
        let TableEvent::RowInserted(RowId::Key(key)) = &event else {
            panic!("expected a keyed row, got {:?}", event);
        };
        assert!(Uuid::parse_str(key).is_ok());

        let mut synthetic = table(ColumnSource::Inferred, None);
        let event = synthetic
            .insert_row(Row::new().with("name", "Zed").with("role", "admin"))
            .unwrap();
        assert_eq!(event, TableEvent::RowInserted(RowId::Path(vec![3])));
        assert!(synthetic.columns().iter().any(|c| c.field == "role"));
    }

    #[test]
    fn test_insert_row_rejects_taken_key() {
        let mut engine = table(ColumnSource::Inferred, Some("id"));
        assert!(matches!(
            engine.insert_row(Row::new().with("id", 2).with("name", "Twin")),
            Err(TableError::DuplicateRow(RowId::Key(ref key))) if key == "2"
        ));
        assert_eq!(engine.rows().len(), 3);

        let event = engine
            .insert_row(Row::new().with("id", 4).with("name", "Ann"))
            .unwrap();
        assert_eq!(event, TableEvent::RowInserted(RowId::key("4")));
    }

    #[test]
    fn test_update_cell_reaches_duplicate_keyed_row() {
        let mut engine = TableEngine::new(
            ColumnSource::Inferred,
            TableSettings {
                track_by_field: Some("id".to_string()),
                ..TableSettings::default()
            },
        )
        .unwrap()
        .with_rows(vec![
            Row::new().with("id", 1).with("name", "Bob"),
            Row::new().with("id", 1).with("name", "Bob twin"),
        ]);

        engine
            .update_cell(&RowId::Path(vec![1]), "name", json!("Robin"))
            .unwrap();
        let rows = engine.rows();
        assert_eq!(rows[0].get("name"), Some(&json!("Bob")));
        assert_eq!(rows[1].get("name"), Some(&json!("Robin")));
    }

    #[test]
    fn test_remove_selected_evicts_selection_and_clamps_page() {
        let mut engine = table(ColumnSource::Inferred, Some("id"));
        engine.set_page(1);
        engine.toggle_row(&RowId::key("3")).unwrap();

        let events = engine.remove_selected();
        assert_eq!(events[0], TableEvent::RowsRemoved(vec![RowId::key("3")]));
        assert!(events.contains(&TableEvent::RowsSelected(vec![])));
        assert!(events.contains(&TableEvent::PageChanged { page: 0 }));
        assert_eq!(engine.rows().len(), 2);
    }

    #[test]
    fn test_remove_nested_row() {
        let mut engine = TableEngine::new(ColumnSource::Inferred, TableSettings::default())
            .unwrap()
            .with_rows(vec![Row::new().with("name", "parent").with_children(vec![
                Row::new().with("name", "a"),
                Row::new().with("name", "b"),
            ])]);

        let events = engine.remove_rows(&[RowId::Path(vec![0, 0])]);
        assert_eq!(events, vec![TableEvent::RowsRemoved(vec![RowId::Path(vec![0, 0])])]);
        assert_eq!(engine.rows()[0].children.len(), 1);
        assert!(engine.remove_rows(&[RowId::Path(vec![9])]).is_empty());
    }
}
