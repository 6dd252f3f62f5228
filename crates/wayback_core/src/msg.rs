use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User pressed the "check for saved version" button.
    CheckClicked,
    /// Engine finished the archive lookup for a request.
    LookupCompleted {
        request_id: RequestId,
        outcome: LookupOutcome,
    },
    /// User clicked the bar's close button.
    CloseClicked,
    /// The surrounding theme changed; colors must be read again.
    ThemeChanged,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// What the bar needs to know about a finished lookup.
///
/// Transport errors, bad JSON and "no snapshot" all collapse into
/// `NotAvailable`; the user is never shown the difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found { url: String },
    NotAvailable,
}
