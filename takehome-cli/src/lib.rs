pub mod app;
pub mod cache;
pub mod config;
pub mod csv_loader;
pub mod format;
pub mod logging;
pub mod report;
pub mod utils;
