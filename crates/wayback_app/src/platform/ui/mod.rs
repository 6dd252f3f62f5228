mod command;
pub mod constants;
pub mod layout;
pub mod render;

pub use command::{AppEvent, ControlId, FlexRule, LayoutRule, PlatformCommand};
