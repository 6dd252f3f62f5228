use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use engine_logging::engine_debug;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{EngineEvent, FailureKind, LookupError, RequestId, WaybackClient};

enum EngineCommand {
    Lookup { request_id: RequestId, page_url: String },
    Cancel { request_id: RequestId },
}

struct InflightLookup {
    token: CancellationToken,
    task: JoinHandle<()>,
}

/// Runs lookups on a background tokio runtime.
///
/// Dropping the handle cancels every lookup still in flight.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    /// Starts the lookup thread. Fails when the tokio runtime cannot be built.
    pub fn new(client: WaybackClient) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let shutdown = CancellationToken::new();
            let mut inflight: HashMap<RequestId, InflightLookup> = HashMap::new();

            while let Ok(command) = cmd_rx.recv() {
                inflight.retain(|_, lookup| !lookup.task.is_finished());
                match command {
                    EngineCommand::Lookup {
                        request_id,
                        page_url,
                    } => {
                        let token = shutdown.child_token();
                        let task = runtime.spawn(run_lookup(
                            client.clone(),
                            request_id,
                            page_url,
                            token.clone(),
                            event_tx.clone(),
                        ));
                        inflight.insert(request_id, InflightLookup { token, task });
                    }
                    EngineCommand::Cancel { request_id } => {
                        if let Some(lookup) = inflight.remove(&request_id) {
                            engine_debug!("cancelling lookup {}", request_id);
                            lookup.token.cancel();
                        }
                    }
                }
            }

            shutdown.cancel();
            runtime.shutdown_background();
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn lookup(&self, request_id: RequestId, page_url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Lookup {
            request_id,
            page_url: page_url.into(),
        });
    }

    pub fn cancel(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { request_id });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn run_lookup(
    client: WaybackClient,
    request_id: RequestId,
    page_url: String,
    token: CancellationToken,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let result = tokio::select! {
        _ = token.cancelled() => Err(LookupError::new(FailureKind::Cancelled, "lookup cancelled")),
        result = client.lookup(&page_url) => result,
    };
    match &result {
        Ok(snapshot) => engine_debug!(
            "lookup {} found {} (captured {:?})",
            request_id,
            snapshot.url,
            snapshot.timestamp
        ),
        Err(err) => engine_debug!("lookup {} failed: {}", request_id, err),
    }
    let _ = event_tx.send(EngineEvent::LookupCompleted { request_id, result });
}
