use crate::{Effect, FetchPhase, InfobarState, LoadUrlParams, LookupOutcome, Msg, NotificationState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: InfobarState, msg: Msg) -> (InfobarState, Vec<Effect>) {
    // A dismissed bar is on its way out; late completions and clicks are dropped.
    if state.is_dismissed() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::CheckClicked => {
            // The button is hidden after a failed check, and a second press
            // while a lookup is in flight is ignored rather than queued.
            if state.notification() != NotificationState::BeforeCheck
                || state.fetch_phase() != FetchPhase::Idle
            {
                return (state, Vec::new());
            }
            let request_id = state.begin_lookup();
            vec![Effect::LookupArchive {
                request_id,
                page_url: state.page_url().as_str().to_owned(),
            }]
        }
        Msg::LookupCompleted {
            request_id,
            outcome,
        } => {
            if !state.finish_lookup(request_id) {
                return (state, Vec::new());
            }
            match outcome {
                LookupOutcome::Found { url } => {
                    state.dismiss();
                    vec![Effect::Navigate(LoadUrlParams::link(url)), Effect::DismissBar]
                }
                LookupOutcome::NotAvailable => {
                    state.show_not_available();
                    Vec::new()
                }
            }
        }
        Msg::CloseClicked => {
            let mut effects = Vec::with_capacity(2);
            if let FetchPhase::Pending { request_id } = state.fetch_phase() {
                effects.push(Effect::CancelLookup { request_id });
            }
            state.dismiss();
            effects.push(Effect::DismissBar);
            effects
        }
        Msg::ThemeChanged => {
            state.request_restyle();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
