//! Данные для плиток дашборда: цвета, сортировка, корзина "Other" и
//! геометрия сегментов кольцевой диаграммы.

pub mod arc;
pub mod engine;
pub mod palette;

pub use engine::{derive_tile_view, TileEngine};
