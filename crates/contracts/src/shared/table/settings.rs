use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

/// Настройки таблицы. Отсутствующие в JSON ключи берутся по умолчанию.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub pagination_enabled: bool,
    /// Сортировка выполняется внешним источником (сервером)
    pub external_sort: bool,
    /// Явный список полей для поиска; `None` - все колонки
    pub search_fields: Option<Vec<String>>,
    pub track_by_field: Option<String>,
    pub default_sort: Option<SortSpec>,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            page_size: 50,
            page_size_options: vec![50, 100, 200, 500],
            pagination_enabled: true,
            external_sort: false,
            search_fields: None,
            track_by_field: None,
            default_sort: None,
        }
    }
}
