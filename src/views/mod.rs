pub mod menu;
pub mod report_view;
pub mod tables;
