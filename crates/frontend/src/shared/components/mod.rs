pub mod data_table;
pub mod donut_chart;
pub mod pagination_controls;
pub mod table;
pub mod tile_list;

pub use data_table::DataTable;
pub use donut_chart::DonutChart;
pub use pagination_controls::PaginationControls;
pub use tile_list::TileList;

use leptos::prelude::*;

/// Передаёт события движка во внешний колбэк, если он задан
pub(crate) fn emit_events<E: 'static>(
    on_event: Option<Callback<E>>,
    events: impl IntoIterator<Item = E>,
) {
    if let Some(callback) = on_event {
        for event in events {
            callback.run(event);
        }
    }
}
