use std::io::Write;

use engine_logging::engine_debug;
use wayback_core::LoadUrlParams;

use super::ui::PlatformCommand;

/// The hosting page's navigation controller.
pub trait NavigationController {
    fn load_url(&mut self, params: &LoadUrlParams);
}

/// Whatever holds the bar on screen.
pub trait InfobarContainer {
    /// Create or update the bar's controls.
    fn apply(&mut self, commands: Vec<PlatformCommand>);
    fn remove_infobar(&mut self);
}

/// Terminal stand-in for a browser tab: announces the navigation on stdout.
pub struct TerminalNavigator<W: Write> {
    out: W,
}

impl<W: Write> TerminalNavigator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> NavigationController for TerminalNavigator<W> {
    fn load_url(&mut self, params: &LoadUrlParams) {
        engine_debug!(
            "load_url url={} transition={:?} referrer={:?}",
            params.url,
            params.transition,
            params.referrer
        );
        let _ = writeln!(self.out, "Navigating to {}", params.url);
        let _ = self.out.flush();
    }
}
