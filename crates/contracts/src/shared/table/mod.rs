pub mod column;
pub mod event;
pub mod row;
pub mod settings;

pub use column::*;
pub use event::*;
pub use row::*;
pub use settings::*;
