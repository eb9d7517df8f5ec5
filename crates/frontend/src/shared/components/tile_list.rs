//! Список элементов плитки с итогом и корзиной "Other"

use contracts::shared::tiles::{TileEvent, TileItem, TileSettings};
use leptos::prelude::*;

use super::emit_events;
use crate::shared::number_format::format_number_with_decimals;
use crate::shared::tiles::TileEngine;

#[component]
pub fn TileList(
    #[prop(into)]
    items: Signal<Vec<TileItem>>,
    #[prop(optional)]
    settings: TileSettings,
    /// Знаков после запятой в значениях
    #[prop(optional)]
    decimals: u8,
    #[prop(optional)]
    on_event: Option<Callback<TileEvent>>,
) -> impl IntoView {
    let engine = RwSignal::new(TileEngine::new(Vec::new(), settings));

    Effect::new(move |_| {
        let data = items.get();
        engine.update(|e| e.set_items(data));
    });

    let tile_view = Memo::new(move |_| engine.with(|e| e.view()));

    let on_click = move |index: usize| {
        let event = engine.try_update(|e| e.click(index)).flatten();
        emit_events(on_event, event);
    };

    view! {
        <div class="tile-list">
            {move || {
                tile_view
                    .get()
                    .display_items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let swatch = format!("background: {};", item.color);
                        let dimmed = !item.is_active();
                        let is_other = item.is_other;
                        view! {
                            <div
                                class="tile-list__item"
                                class:tile-list__item--dimmed=dimmed
                                class:tile-list__item--other=is_other
                                on:click=move |_| on_click(index)
                            >
                                <span class="tile-list__swatch" style=swatch></span>
                                <span class="tile-list__label">{item.label.clone()}</span>
                                <span class="tile-list__value">
                                    {format_number_with_decimals(item.value, decimals)}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <div class="tile-list__total">
                {move || format_number_with_decimals(tile_view.with(|v| v.total), decimals)}
            </div>
        </div>
    }
}
