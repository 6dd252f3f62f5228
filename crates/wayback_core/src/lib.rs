//! Wayback infobar core: pure state machine and view-model helpers.
mod effect;
mod element;
mod msg;
mod state;
mod theme;
mod update;
mod view_model;

pub use effect::{Effect, LoadUrlParams, PageTransition};
pub use element::{ElementId, ToggleGroup, AFTER_CHECK_GROUP, BEFORE_CHECK_GROUP};
pub use msg::{LookupOutcome, Msg};
pub use state::{FetchPhase, InfobarState, NotificationState, RequestId};
pub use theme::{Color, ColorId, InfobarColors, ThemeProvider, BRAND_COLOR, PLACEHOLDER_COLOR};
pub use update::update;
pub use view_model::InfobarViewModel;
