use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Ключ вложенных строк в исходных данных
pub const CHILDREN_FIELD: &str = "Children";

/// Строка таблицы: открытый набор полей плюс необязательные дочерние строки.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(flatten)]
    pub values: Map<String, Value>,
    #[serde(rename = "Children", default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Row>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.values.insert(field.to_string(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Row>) -> Self {
        self.children = children;
        self
    }

    /// Значение поля; `null` считается отсутствующим значением
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field).filter(|v| !v.is_null())
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

impl AsRef<Row> for Row {
    fn as_ref(&self) -> &Row {
        self
    }
}

/// Идентичность строки между рендерами, сортировками и страницами.
///
/// `Key` берётся из поля отслеживания (`track_by_field`), `Path` -
/// синтетический путь индексов в исходном дереве строк.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RowId {
    Key(String),
    Path(Vec<usize>),
}

impl RowId {
    pub fn key(s: &str) -> Self {
        Self::Key(s.to_string())
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Key(key) => f.write_str(key),
            RowId::Path(path) => {
                let parts: Vec<String> = path.iter().map(|i| i.to_string()).collect();
                write!(f, "#{}", parts.join("."))
            }
        }
    }
}
