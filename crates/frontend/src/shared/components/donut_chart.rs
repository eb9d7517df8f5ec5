//! Кольцевая диаграмма по элементам плитки

use contracts::shared::tiles::{TileEvent, TileItem, TileSettings};
use leptos::prelude::*;

use super::emit_events;
use crate::shared::tiles::arc::{describe_arc, slice_arcs};
use crate::shared::tiles::TileEngine;

const VIEWBOX: f64 = 100.0;

#[component]
pub fn DonutChart(
    #[prop(into)]
    items: Signal<Vec<TileItem>>,
    #[prop(optional)]
    settings: TileSettings,
    /// Толщина кольца в единицах viewBox
    #[prop(default = 14.0)]
    thickness: f64,
    #[prop(optional)]
    on_event: Option<Callback<TileEvent>>,
) -> impl IntoView {
    let engine = RwSignal::new(TileEngine::new(Vec::new(), settings));

    Effect::new(move |_| {
        let data = items.get();
        engine.update(|e| e.set_items(data));
    });

    let tile_view = Memo::new(move |_| engine.with(|e| e.view()));
    let center = VIEWBOX / 2.0;
    let radius = center - thickness / 2.0;

    view! {
        <svg class="donut-chart" viewBox={format!("0 0 {} {}", VIEWBOX, VIEWBOX)}>
            {move || {
                let view = tile_view.get();
                let slices = slice_arcs(&view.display_items);
                let paths = slices
                    .into_iter()
                    .map(|slice| {
                        let item = &view.display_items[slice.index];
                        let index = slice.index;
                        let path = describe_arc(center, center, radius, slice.start_deg, slice.end_deg);
                        let opacity = if item.is_active() { "1" } else { "0.35" };
                        view! {
                            <path
                                d=path
                                fill="none"
                                stroke={item.color.clone()}
                                stroke-width={thickness.to_string()}
                                opacity=opacity
                                on:click=move |_| {
                                    let event = engine.try_update(|e| e.click(index)).flatten();
                                    emit_events(on_event, event);
                                }
                            >
                                <title>{format!("{}: {}", item.label, item.value)}</title>
                            </path>
                        }
                    })
                    .collect_view();
                paths
            }}
        </svg>
    }
}
