use wayback_core::Color;

use crate::platform::resources::ImageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(u32);

impl ControlId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexRule {
    /// Keeps its preferred size.
    Fixed,
    /// Shrinks down to its minimum, never grows past preferred.
    ScaleToMinimum { order: u32 },
    /// Takes all leftover space; can shrink to nothing.
    Unbounded { order: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRule {
    pub control_id: ControlId,
    pub flex: FlexRule,
    /// (top, left, bottom, right)
    pub margin: (u16, u16, u16, u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCommand {
    CreateImage {
        control_id: ControlId,
        image: ImageId,
        size: (u32, u32),
        background: Option<Color>,
    },
    CreateSeparator {
        control_id: ControlId,
    },
    CreateLabel {
        control_id: ControlId,
        text: String,
        bold: bool,
        elide_tail: bool,
    },
    CreateSpacer {
        control_id: ControlId,
    },
    CreateButton {
        control_id: ControlId,
        text: String,
    },
    /// Children are laid out left to right in the order given.
    DefineLayout {
        rules: Vec<LayoutRule>,
    },
    SetControlVisible {
        control_id: ControlId,
        visible: bool,
    },
    SetControlEnabled {
        control_id: ControlId,
        enabled: bool,
    },
    SetLabelColors {
        control_id: ControlId,
        background: Color,
        text: Color,
    },
    SetSeparatorColor {
        control_id: ControlId,
        color: Color,
    },
}

/// Input from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ButtonClicked { control_id: ControlId },
    CloseClicked,
    ThemeToggled,
    QuitRequested,
    /// The input source is gone; no further events will arrive.
    InputClosed,
}
