use engine_logging::{engine_info, engine_warn};
use wayback_core::{Effect, LookupOutcome, Msg};
use wayback_engine::{ArchivedSnapshot, EngineEvent, EngineHandle, LookupError, RequestId};

use super::host::{InfobarContainer, NavigationController};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run<N, C>(&self, effects: Vec<Effect>, navigator: &mut N, container: &mut C)
    where
        N: NavigationController,
        C: InfobarContainer,
    {
        for effect in effects {
            match effect {
                Effect::LookupArchive {
                    request_id,
                    page_url,
                } => {
                    engine_info!("LookupArchive request_id={} url={}", request_id, page_url);
                    self.engine.lookup(request_id, page_url);
                }
                Effect::CancelLookup { request_id } => {
                    self.engine.cancel(request_id);
                }
                Effect::Navigate(params) => {
                    engine_info!("Navigate url={}", params.url);
                    navigator.load_url(&params);
                }
                Effect::DismissBar => {
                    container.remove_infobar();
                }
            }
        }
    }

    /// Next engine completion, translated for the core.
    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(|event| match event {
            EngineEvent::LookupCompleted { request_id, result } => Msg::LookupCompleted {
                request_id,
                outcome: outcome_from(request_id, result),
            },
        })
    }
}

fn outcome_from(request_id: RequestId, result: Result<ArchivedSnapshot, LookupError>) -> LookupOutcome {
    match result {
        Ok(snapshot) => LookupOutcome::Found { url: snapshot.url },
        Err(err) => {
            engine_warn!("Lookup {} failed: {}", request_id, err);
            LookupOutcome::NotAvailable
        }
    }
}
