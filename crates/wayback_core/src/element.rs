use crate::NotificationState;

/// Every control the bar owns, in display order.
///
/// The close button is owned by the bar container and is not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    BrandImage,
    Separator,
    PageMissingLabel,
    AskAboutCheckLabel,
    /// Flexible empty view that pushes the check button to the end.
    Spacer,
    NotAvailableLabel,
    SadIcon,
    CheckButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleGroup {
    Always,
    BeforeCheck,
    AfterCheck,
}

pub const BEFORE_CHECK_GROUP: [ElementId; 4] = [
    ElementId::PageMissingLabel,
    ElementId::AskAboutCheckLabel,
    ElementId::Spacer,
    ElementId::CheckButton,
];

pub const AFTER_CHECK_GROUP: [ElementId; 2] = [ElementId::NotAvailableLabel, ElementId::SadIcon];

impl ElementId {
    pub const ALL: [ElementId; 8] = [
        ElementId::BrandImage,
        ElementId::Separator,
        ElementId::PageMissingLabel,
        ElementId::AskAboutCheckLabel,
        ElementId::Spacer,
        ElementId::NotAvailableLabel,
        ElementId::SadIcon,
        ElementId::CheckButton,
    ];

    /// Labels that follow the theme's background and text colors.
    pub const LABELS: [ElementId; 3] = [
        ElementId::PageMissingLabel,
        ElementId::AskAboutCheckLabel,
        ElementId::NotAvailableLabel,
    ];

    pub fn group(self) -> ToggleGroup {
        if BEFORE_CHECK_GROUP.contains(&self) {
            ToggleGroup::BeforeCheck
        } else if AFTER_CHECK_GROUP.contains(&self) {
            ToggleGroup::AfterCheck
        } else {
            ToggleGroup::Always
        }
    }

    pub fn is_visible_in(self, state: NotificationState) -> bool {
        match self.group() {
            ToggleGroup::Always => true,
            ToggleGroup::BeforeCheck => state == NotificationState::BeforeCheck,
            ToggleGroup::AfterCheck => state == NotificationState::AfterCheck,
        }
    }
}
