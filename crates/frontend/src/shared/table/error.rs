use contracts::shared::table::RowId;
use thiserror::Error;

/// Ошибки движка таблицы
#[derive(Debug, Error)]
pub enum TableError {
    #[error("page size must be positive, got {0}")]
    InvalidPageSize(usize),

    #[error("unknown row: {0}")]
    UnknownRow(RowId),

    #[error("row {0} already exists")]
    DuplicateRow(RowId),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("field {0} identifies rows and cannot be edited")]
    ReadOnlyField(String),

    #[error("invalid table settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}
