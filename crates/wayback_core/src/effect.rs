#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the archive for the closest snapshot of `page_url`.
    LookupArchive {
        request_id: crate::RequestId,
        page_url: String,
    },
    CancelLookup { request_id: crate::RequestId },
    Navigate(LoadUrlParams),
    /// Remove the bar from its container.
    DismissBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageTransition {
    /// The user followed something equivalent to a link.
    #[default]
    Link,
}

/// Arguments handed to the hosting page's navigation controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadUrlParams {
    pub url: String,
    pub referrer: Option<String>,
    pub transition: PageTransition,
    pub extra_headers: String,
}

impl LoadUrlParams {
    /// Link-type navigation with no referrer and no extra headers.
    pub fn link(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            referrer: None,
            transition: PageTransition::Link,
            extra_headers: String::new(),
        }
    }
}
