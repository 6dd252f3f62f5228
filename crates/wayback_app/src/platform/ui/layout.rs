use wayback_core::BRAND_COLOR;

use super::constants::*;
use super::{FlexRule, LayoutRule, PlatformCommand};
use crate::platform::resources::{ImageId, MessageId, ResourceProvider};

const LABEL_VERTICAL_MARGIN: u16 = 12;
const CONTROL_VERTICAL_MARGIN: u16 = 8;

/// Creates every control of the bar once, in display order.
///
/// Visibility and colors are left to the first render.
#[allow(clippy::vec_init_then_push)]
pub fn initial_commands(resources: &dyn ResourceProvider) -> Vec<PlatformCommand> {
    let mut commands = Vec::new();

    commands.push(PlatformCommand::CreateImage {
        control_id: IMAGE_BRAND,
        image: ImageId::WaybackLogo,
        size: (100, 20),
        background: Some(BRAND_COLOR),
    });
    commands.push(PlatformCommand::CreateSeparator {
        control_id: SEPARATOR,
    });
    commands.push(PlatformCommand::CreateLabel {
        control_id: LABEL_PAGE_MISSING,
        text: resources.string(MessageId::PageMissing),
        bold: true,
        elide_tail: false,
    });
    commands.push(PlatformCommand::CreateLabel {
        control_id: LABEL_ASK_ABOUT_CHECK,
        text: resources.string(MessageId::AskAboutCheck),
        bold: false,
        elide_tail: true,
    });
    commands.push(PlatformCommand::CreateSpacer { control_id: SPACER });
    commands.push(PlatformCommand::CreateLabel {
        control_id: LABEL_NOT_AVAILABLE,
        text: resources.string(MessageId::NotAvailable),
        bold: false,
        elide_tail: false,
    });
    commands.push(PlatformCommand::CreateImage {
        control_id: IMAGE_SAD,
        image: ImageId::SadFavicon,
        size: (16, 16),
        background: None,
    });
    commands.push(PlatformCommand::CreateButton {
        control_id: BUTTON_CHECK,
        text: resources.string(MessageId::CheckButton),
    });

    commands.push(PlatformCommand::DefineLayout {
        rules: vec![
            LayoutRule {
                control_id: IMAGE_BRAND,
                flex: FlexRule::Fixed,
                margin: (12, 20, 12, 20),
            },
            LayoutRule {
                control_id: SEPARATOR,
                flex: FlexRule::Fixed,
                margin: (12, 0, 12, 20),
            },
            LayoutRule {
                control_id: LABEL_PAGE_MISSING,
                flex: FlexRule::ScaleToMinimum { order: 1 },
                margin: (LABEL_VERTICAL_MARGIN, 0, LABEL_VERTICAL_MARGIN, 0),
            },
            LayoutRule {
                control_id: LABEL_ASK_ABOUT_CHECK,
                flex: FlexRule::ScaleToMinimum { order: 2 },
                margin: (LABEL_VERTICAL_MARGIN, 5, LABEL_VERTICAL_MARGIN, 5),
            },
            // Empty view that pushes the button to the end of the bar.
            LayoutRule {
                control_id: SPACER,
                flex: FlexRule::Unbounded { order: 3 },
                margin: (12, 0, 12, 0),
            },
            LayoutRule {
                control_id: LABEL_NOT_AVAILABLE,
                flex: FlexRule::ScaleToMinimum { order: 1 },
                margin: (LABEL_VERTICAL_MARGIN, 0, LABEL_VERTICAL_MARGIN, 0),
            },
            LayoutRule {
                control_id: IMAGE_SAD,
                flex: FlexRule::Fixed,
                margin: (12, 10, 12, 10),
            },
            LayoutRule {
                control_id: BUTTON_CHECK,
                flex: FlexRule::Fixed,
                margin: (CONTROL_VERTICAL_MARGIN, 0, CONTROL_VERTICAL_MARGIN, 0),
            },
        ],
    });

    commands
}
