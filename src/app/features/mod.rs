pub mod palette;
pub mod ui;
