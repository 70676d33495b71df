pub mod charts;
pub mod dashboard;
pub mod info_tooltip;
pub mod stock_form;
pub mod tables;
