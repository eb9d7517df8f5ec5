use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{RowId, SortDirection};

/// События таблицы, возвращаемые вместо вызова колбэков
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableEvent {
    /// Полный набор выбранных строк после изменения
    RowsSelected(Vec<RowId>),
    SortChanged {
        field: String,
        direction: SortDirection,
    },
    PageChanged {
        page: usize,
    },
    PageSizeChanged {
        page_size: usize,
        page: usize,
    },
    SearchChanged {
        term: String,
    },
    RowExpanded(RowId),
    RowCollapsed(RowId),
    CellEdited {
        id: RowId,
        field: String,
        value: Value,
    },
    RowInserted(RowId),
    RowsRemoved(Vec<RowId>),
}
