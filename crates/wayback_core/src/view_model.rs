use crate::{ElementId, NotificationState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfobarViewModel {
    pub notification: NotificationState,
    pub visible: Vec<ElementId>,
    pub hidden: Vec<ElementId>,
    /// False while a lookup is in flight.
    pub check_enabled: bool,
    /// Theme colors must be read again in this render pass.
    pub restyle: bool,
    pub dismissed: bool,
    pub dirty: bool,
}

impl InfobarViewModel {
    pub fn is_visible(&self, id: ElementId) -> bool {
        self.visible.contains(&id)
    }
}
