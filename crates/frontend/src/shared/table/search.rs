use contracts::shared::table::{Column, Row};

use super::compare::value_to_string;

/// Поля для поиска: явный список, иначе все колонки, не исключённые из поиска.
pub fn search_fields(columns: &[Column], explicit: Option<&[String]>) -> Vec<String> {
    match explicit {
        Some(fields) => fields.to_vec(),
        None => columns
            .iter()
            .filter(|c| c.is_searchable())
            .map(|c| c.field.clone())
            .collect(),
    }
}

/// Проверяет, содержит ли хотя бы одно из полей строки искомую подстроку.
/// `needle` должен быть уже в нижнем регистре.
pub fn row_matches(row: &Row, fields: &[String], needle: &str) -> bool {
    fields.iter().any(|field| {
        row.get(field)
            .map(|value| value_to_string(value).to_lowercase().contains(needle))
            .unwrap_or(false)
    })
}

/// Фильтрует строки по поисковому запросу (без учёта регистра).
/// Пустой запрос возвращает строки без изменений.
pub fn apply_search<R: AsRef<Row>>(rows: Vec<R>, fields: &[String], term: &str) -> Vec<R> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return rows;
    }

    rows.into_iter()
        .filter(|row| row_matches(row.as_ref(), fields, &needle))
        .collect()
}
