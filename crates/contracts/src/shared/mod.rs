pub mod form_settings;
pub mod table;
pub mod tiles;
