mod app;
pub mod config;
mod effects;
mod host;
pub mod logging;
mod resources;
mod terminal;
mod theme;
mod ui;

pub use app::run_app;
