//! Wayback engine: archive lookups over HTTP and effect execution.
mod client;
mod engine;
mod fetch;
mod snapshot;
mod types;

pub use client::{wayback_query_url, WaybackClient};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, MAX_BODY_BYTES, WAYBACK_QUERY_URL};
pub use snapshot::extract_snapshot;
pub use types::{ArchivedSnapshot, EngineEvent, FailureKind, LookupError, RequestId};
