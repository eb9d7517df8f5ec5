use serde::{Deserialize, Serialize};

/// Как отображать значение ячейки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CellFormat {
    #[default]
    Text,
    Number { decimals: u8 },
    Integer,
    Money,
    Boolean,
    Date,
    DateTime,
}

/// Описание колонки таблицы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub field: String,
    pub header: String,
    #[serde(default)]
    pub format: CellFormat,
    #[serde(default = "default_sortable")]
    pub sortable: bool,
    #[serde(default)]
    pub width: Option<u32>,
    /// `Some(false)` исключает колонку из поиска по умолчанию
    #[serde(default)]
    pub searchable: Option<bool>,
}

fn default_sortable() -> bool {
    true
}

impl Column {
    pub fn new(field: &str, header: &str) -> Self {
        Self {
            field: field.to_string(),
            header: header.to_string(),
            format: CellFormat::Text,
            sortable: true,
            width: None,
            searchable: None,
        }
    }

    pub fn format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = Some(searchable);
        self
    }

    pub fn is_searchable(&self) -> bool {
        self.searchable != Some(false)
    }
}

/// Источник колонок: либо явный список, либо вывод из формы строк.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnSource {
    Explicit(Vec<Column>),
    Inferred,
}
