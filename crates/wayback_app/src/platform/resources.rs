//! Label text and image ids, looked up by fixed identifiers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageId {
    PageMissing,
    AskAboutCheck,
    NotAvailable,
    CheckButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageId {
    WaybackLogo,
    SadFavicon,
}

impl ImageId {
    /// Text stand-in for hosts that cannot draw images.
    pub fn alt_text(self) -> &'static str {
        match self {
            ImageId::WaybackLogo => "[Wayback Machine]",
            ImageId::SadFavicon => ":(",
        }
    }
}

pub trait ResourceProvider {
    fn string(&self, id: MessageId) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishResources;

impl ResourceProvider for EnglishResources {
    fn string(&self, id: MessageId) -> String {
        match id {
            MessageId::PageMissing => "Sorry, that page is missing.",
            MessageId::AskAboutCheck => {
                "Do you want to check if a saved version is available on the Wayback Machine?"
            }
            MessageId::NotAvailable => {
                "Sorry, a saved version of this page is not available on the Wayback Machine."
            }
            MessageId::CheckButton => "Check for saved version",
        }
        .to_string()
    }
}
