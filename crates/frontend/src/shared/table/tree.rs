//! Строки с назначенной идентичностью и разворачивание дерева в плоский список.

use contracts::shared::table::{Row, RowId};
use std::collections::HashSet;

use super::compare::value_to_string;

/// Строка исходных данных вместе с её идентичностью.
/// Дочерние строки вынесены из `row` в `children`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedRow {
    pub id: RowId,
    pub row: Row,
    pub children: Vec<TrackedRow>,
}

impl AsRef<Row> for TrackedRow {
    fn as_ref(&self) -> &Row {
        &self.row
    }
}

impl TrackedRow {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Обратно в `Row` с вложенными `Children`
    pub fn to_row(&self) -> Row {
        let mut row = self.row.clone();
        row.children = self.children.iter().map(TrackedRow::to_row).collect();
        row
    }

    pub fn collect_ids(&self, out: &mut HashSet<RowId>) {
        out.insert(self.id.clone());
        for child in &self.children {
            child.collect_ids(out);
        }
    }
}

/// Идентичность строки: значение поля отслеживания, иначе путь индексов.
pub fn row_identity(row: &Row, track_by_field: Option<&str>, path: &[usize]) -> RowId {
    let key = track_by_field
        .and_then(|field| row.get(field))
        .map(value_to_string)
        .filter(|key| !key.is_empty());
    match key {
        Some(key) => RowId::Key(key),
        None => RowId::Path(path.to_vec()),
    }
}

/// Назначает идентичности всему дереву. Повторный ключ отслеживания
/// не делится между строками: такая строка получает путь индексов.
pub fn track_rows(rows: Vec<Row>, track_by_field: Option<&str>) -> Vec<TrackedRow> {
    let mut seen = HashSet::new();
    track_level(rows, track_by_field, &[], &mut seen)
}

/// `seen` - уже занятые идентичности, пополняется строкой и её потомками
pub(crate) fn track_row(
    mut row: Row,
    track_by_field: Option<&str>,
    path: Vec<usize>,
    seen: &mut HashSet<RowId>,
) -> TrackedRow {
    let children = std::mem::take(&mut row.children);
    let mut id = row_identity(&row, track_by_field, &path);
    if seen.contains(&id) {
        log::warn!("duplicate row key {}, using index path {:?}", id, path);
        id = RowId::Path(path.clone());
    }
    seen.insert(id.clone());

    TrackedRow {
        id,
        children: track_level(children, track_by_field, &path, seen),
        row,
    }
}

fn track_level(
    rows: Vec<Row>,
    track_by_field: Option<&str>,
    parent: &[usize],
    seen: &mut HashSet<RowId>,
) -> Vec<TrackedRow> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            let mut path = parent.to_vec();
            path.push(index);
            track_row(row, track_by_field, path, seen)
        })
        .collect()
}

pub fn find_row<'a>(rows: &'a [TrackedRow], id: &RowId) -> Option<&'a TrackedRow> {
    for row in rows {
        if &row.id == id {
            return Some(row);
        }
        if let Some(found) = find_row(&row.children, id) {
            return Some(found);
        }
    }
    None
}

pub fn find_row_mut<'a>(rows: &'a mut [TrackedRow], id: &RowId) -> Option<&'a mut TrackedRow> {
    for row in rows.iter_mut() {
        if &row.id == id {
            return Some(row);
        }
        if let Some(found) = find_row_mut(&mut row.children, id) {
            return Some(found);
        }
    }
    None
}

/// Удаляет строки с указанными идентичностями на любом уровне.
/// Возвращает идентичности фактически удалённых строк.
pub fn remove_rows(rows: &mut Vec<TrackedRow>, ids: &HashSet<RowId>) -> Vec<RowId> {
    let mut removed = Vec::new();
    rows.retain(|row| {
        if ids.contains(&row.id) {
            removed.push(row.id.clone());
            false
        } else {
            true
        }
    });
    for row in rows.iter_mut() {
        removed.extend(remove_rows(&mut row.children, ids));
    }
    removed
}

/// Строка в развёрнутом виде вместе с уровнем вложенности
pub struct FlatRow<'a> {
    pub row: &'a TrackedRow,
    pub depth: usize,
}

/// Добавляет строку и, если она раскрыта, всё её видимое поддерево.
/// Свёрнутый родитель скрывает поддерево, не сбрасывая раскрытие потомков.
pub fn flatten_expanded<'a>(
    row: &'a TrackedRow,
    depth: usize,
    expanded: &HashSet<RowId>,
    out: &mut Vec<FlatRow<'a>>,
) {
    out.push(FlatRow { row, depth });
    if row.has_children() && expanded.contains(&row.id) {
        for child in &row.children {
            flatten_expanded(child, depth + 1, expanded, out);
        }
    }
}
