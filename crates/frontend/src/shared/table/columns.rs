//! Колонки из явного описания или выведенные из полей строк.

use contracts::shared::table::{Column, ColumnSource, Row};

/// Объединение имён полей всех строк в порядке первого появления.
pub fn infer_columns(rows: &[Row]) -> Vec<Column> {
    let mut columns: Vec<Column> = Vec::new();
    for row in rows {
        for field in row.values.keys() {
            if !columns.iter().any(|c| &c.field == field) {
                columns.push(Column::new(field, &humanize(field)));
            }
        }
    }
    columns
}

pub fn resolve_columns(source: &ColumnSource, rows: &[Row]) -> Vec<Column> {
    match source {
        ColumnSource::Explicit(columns) => columns.clone(),
        ColumnSource::Inferred => infer_columns(rows),
    }
}

/// "created_at" -> "Created at"
pub fn humanize(field: &str) -> String {
    let spaced = field.replace(['_', '-'], " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
