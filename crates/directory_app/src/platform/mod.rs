pub mod app;
pub mod config;
pub mod effects;
pub mod list;
pub mod logging;
pub mod ui;
