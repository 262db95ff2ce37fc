pub mod api;
pub mod lookup;
pub mod ui;
