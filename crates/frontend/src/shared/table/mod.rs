//! Движок табличных данных: поиск, сортировка, пагинация, выбор строк и
//! раскрытие дерева. Состояние принадлежит одному экземпляру таблицы.

pub mod columns;
pub mod compare;
pub mod editing;
pub mod engine;
pub mod error;
pub mod format;
pub mod search;
pub mod tree;

pub use engine::{derive_table_view, TableEngine, TableState, TableView, ViewRow};
pub use error::TableError;
