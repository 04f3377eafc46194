pub mod app;
pub mod calculator_panel;
pub mod catalog_panel;
pub mod timer_widget;
