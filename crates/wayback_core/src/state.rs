use url::Url;

use crate::{ElementId, InfobarViewModel};

pub type RequestId = u64;

/// Which toggle group of the bar is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationState {
    #[default]
    BeforeCheck,
    AfterCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Pending { request_id: RequestId },
}

/// State of one infobar instance. Nothing is shared between instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfobarState {
    page_url: Url,
    notification: NotificationState,
    fetch: FetchPhase,
    last_request_id: RequestId,
    dismissed: bool,
    needs_restyle: bool,
    dirty: bool,
}

impl InfobarState {
    /// A freshly shown bar for the page that failed to load.
    ///
    /// Starts in `BeforeCheck`, dirty and due for styling so the first render
    /// applies visibility and theme colors.
    pub fn new(page_url: Url) -> Self {
        Self {
            page_url,
            notification: NotificationState::BeforeCheck,
            fetch: FetchPhase::Idle,
            last_request_id: 0,
            dismissed: false,
            needs_restyle: true,
            dirty: true,
        }
    }

    pub fn page_url(&self) -> &Url {
        &self.page_url
    }

    pub fn notification(&self) -> NotificationState {
        self.notification
    }

    pub fn fetch_phase(&self) -> FetchPhase {
        self.fetch
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn view(&self) -> InfobarViewModel {
        let (visible, hidden): (Vec<ElementId>, Vec<ElementId>) = ElementId::ALL
            .into_iter()
            .partition(|id| id.is_visible_in(self.notification));
        InfobarViewModel {
            notification: self.notification,
            visible,
            hidden,
            check_enabled: self.fetch == FetchPhase::Idle,
            restyle: self.needs_restyle,
            dismissed: self.dismissed,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flags.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        self.needs_restyle = false;
        was_dirty
    }

    /// Switch to the "not available" group. Calling it again changes nothing.
    pub fn show_not_available(&mut self) {
        if self.notification != NotificationState::AfterCheck {
            self.notification = NotificationState::AfterCheck;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_lookup(&mut self) -> RequestId {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.fetch = FetchPhase::Pending { request_id };
        self.dirty = true;
        request_id
    }

    /// Returns false for a completion that does not belong to the pending request.
    pub(crate) fn finish_lookup(&mut self, request_id: RequestId) -> bool {
        match self.fetch {
            FetchPhase::Pending { request_id: pending } if pending == request_id => {
                self.fetch = FetchPhase::Idle;
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn dismiss(&mut self) {
        self.fetch = FetchPhase::Idle;
        self.dismissed = true;
        self.dirty = true;
    }

    pub(crate) fn request_restyle(&mut self) {
        self.needs_restyle = true;
        self.dirty = true;
    }
}
