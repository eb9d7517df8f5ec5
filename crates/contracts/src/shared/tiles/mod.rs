use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::table::SortDirection;

// ---------------------------------------------------------------------------
// Input items
// ---------------------------------------------------------------------------

/// Элемент плитки: подпись и значение для графика или списка.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileItem {
    pub label: String,
    /// Сырое значение; нечисловые и отсутствующие значения считаются нулём.
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub color: Option<String>,
    /// `Some(true)` активен, `Some(false)` приглушён, `None` активен по умолчанию.
    #[serde(default)]
    pub selected: Option<bool>,
}

impl TileItem {
    pub fn new(label: &str, value: impl Into<Value>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
            color: None,
            selected: None,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileSortBy {
    /// Порядок поступления
    #[default]
    Original,
    Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileSettings {
    /// Палитра; пустая - используется палитра по умолчанию
    pub colors: Vec<String>,
    pub sort_by: TileSortBy,
    pub sort_direction: SortDirection,
    /// 0 - без ограничения
    pub max_display_items: usize,
    pub show_overlay: bool,
}

impl Default for TileSettings {
    fn default() -> Self {
        Self {
            colors: Vec::new(),
            sort_by: TileSortBy::Original,
            sort_direction: SortDirection::Desc,
            max_display_items: 0,
            show_overlay: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Derived output
// ---------------------------------------------------------------------------

/// Элемент для отображения после назначения цвета, сортировки и усечения.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub label: String,
    pub value: f64,
    pub color: String,
    pub selected: Option<bool>,
    pub is_other: bool,
    /// Индекс в исходном списке; `None` у корзины "Other".
    pub source_index: Option<usize>,
}

impl DisplayItem {
    pub fn is_active(&self) -> bool {
        self.selected != Some(false)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TileView {
    pub display_items: Vec<DisplayItem>,
    /// Элементы, свёрнутые в "Other"
    pub other_items: Vec<DisplayItem>,
    pub total: f64,
    pub has_other: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TileEvent {
    ItemToggled { index: usize, item: TileItem },
    OverlayToggled(bool),
}
