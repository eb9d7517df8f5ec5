use contracts::shared::tiles::{DisplayItem, TileEvent, TileItem, TileSettings, TileSortBy, TileView};
use serde_json::Value;
use std::cmp::Ordering;

use super::palette::{palette_color, OTHER_COLOR, OTHER_LABEL};

/// Числовое значение элемента; нечисловое или отсутствующее - 0
pub fn coerce_value(value: &Value) -> f64 {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };
    if number.is_finite() {
        number
    } else {
        0.0
    }
}

/// Цвета назначаются до сортировки, чтобы цвет элемента не менялся
/// при пересортировке.
pub fn assign_colors(items: &[TileItem], colors: &[String]) -> Vec<DisplayItem> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| DisplayItem {
            label: item.label.clone(),
            value: coerce_value(&item.value),
            color: item
                .color
                .clone()
                .unwrap_or_else(|| palette_color(colors, index)),
            selected: item.selected,
            is_other: false,
            source_index: Some(index),
        })
        .collect()
}

pub fn sort_items(items: &mut [DisplayItem], settings: &TileSettings) {
    if settings.sort_by != TileSortBy::Value {
        return;
    }
    items.sort_by(|a, b| {
        let cmp = a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal);
        if settings.sort_direction.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Первые `max_display_items` элементов плюс синтетический элемент "Other"
/// с суммой остальных. Возвращает (отображаемые, свёрнутые).
pub fn truncate_items(
    items: Vec<DisplayItem>,
    max_display_items: usize,
    show_overlay: bool,
) -> (Vec<DisplayItem>, Vec<DisplayItem>) {
    if show_overlay || max_display_items == 0 || items.len() <= max_display_items {
        return (items, Vec::new());
    }

    let mut display = items;
    let rest = display.split_off(max_display_items);
    display.push(DisplayItem {
        label: OTHER_LABEL.to_string(),
        value: rest.iter().map(|item| item.value).sum(),
        color: OTHER_COLOR.to_string(),
        selected: None,
        is_other: true,
        source_index: None,
    });
    (display, rest)
}

/// Цвета -> сортировка -> итог по всем элементам -> усечение с "Other"
pub fn derive_tile_view(items: &[TileItem], settings: &TileSettings) -> TileView {
    let mut colored = assign_colors(items, &settings.colors);
    sort_items(&mut colored, settings);

    let total: f64 = colored.iter().map(|item| item.value).sum();
    let (display_items, other_items) =
        truncate_items(colored, settings.max_display_items, settings.show_overlay);

    TileView {
        has_other: !other_items.is_empty(),
        display_items,
        other_items,
        total,
    }
}

/// Состояние плитки: элементы и настройки отображения.
/// Представление пересчитывается целиком при каждом изменении.
#[derive(Debug, Clone, Default)]
pub struct TileEngine {
    items: Vec<TileItem>,
    settings: TileSettings,
}

impl TileEngine {
    pub fn new(items: Vec<TileItem>, settings: TileSettings) -> Self {
        Self { items, settings }
    }

    pub fn items(&self) -> &[TileItem] {
        &self.items
    }

    pub fn settings(&self) -> &TileSettings {
        &self.settings
    }

    pub fn set_items(&mut self, items: Vec<TileItem>) {
        log::debug!("tile items replaced: {}", items.len());
        self.items = items;
    }

    pub fn set_settings(&mut self, settings: TileSettings) {
        self.settings = settings;
    }

    pub fn view(&self) -> TileView {
        derive_tile_view(&self.items, &self.settings)
    }

    pub fn toggle_overlay(&mut self) -> TileEvent {
        self.settings.show_overlay = !self.settings.show_overlay;
        TileEvent::OverlayToggled(self.settings.show_overlay)
    }

    /// Клик по элементу представления с индексом `view_index`.
    ///
    /// Обычный элемент инвертирует `selected` (отсутствие флага считается
    /// активным состоянием), клик по "Other" переключает полный список.
    pub fn click(&mut self, view_index: usize) -> Option<TileEvent> {
        let view = self.view();
        let clicked = view.display_items.get(view_index)?;

        if clicked.is_other {
            return Some(self.toggle_overlay());
        }

        let index = clicked.source_index?;
        let item = self.items.get_mut(index)?;
        let active = item.selected != Some(false);
        item.selected = Some(!active);
        log::debug!("tile item {:?} selected={}", item.label, !active);

        Some(TileEvent::ItemToggled {
            index,
            item: item.clone(),
        })
    }
}
