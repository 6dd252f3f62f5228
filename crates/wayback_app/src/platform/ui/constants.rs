use wayback_core::ElementId;

use super::ControlId;

pub const IMAGE_BRAND: ControlId = ControlId::new(1001);
pub const SEPARATOR: ControlId = ControlId::new(1002);
pub const LABEL_PAGE_MISSING: ControlId = ControlId::new(2001);
pub const LABEL_ASK_ABOUT_CHECK: ControlId = ControlId::new(2002);
pub const LABEL_NOT_AVAILABLE: ControlId = ControlId::new(2003);
pub const SPACER: ControlId = ControlId::new(3001);
pub const IMAGE_SAD: ControlId = ControlId::new(3002);
pub const BUTTON_CHECK: ControlId = ControlId::new(4001);

pub fn control_for(element: ElementId) -> ControlId {
    match element {
        ElementId::BrandImage => IMAGE_BRAND,
        ElementId::Separator => SEPARATOR,
        ElementId::PageMissingLabel => LABEL_PAGE_MISSING,
        ElementId::AskAboutCheckLabel => LABEL_ASK_ABOUT_CHECK,
        ElementId::Spacer => SPACER,
        ElementId::NotAvailableLabel => LABEL_NOT_AVAILABLE,
        ElementId::SadIcon => IMAGE_SAD,
        ElementId::CheckButton => BUTTON_CHECK,
    }
}
