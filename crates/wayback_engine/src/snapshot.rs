use serde_json::Value;

use crate::{ArchivedSnapshot, FailureKind, LookupError};

const CLOSEST_POINTER: &str = "/archived_snapshots/closest";

/// Pull the closest snapshot out of an availability response.
///
/// Only `archived_snapshots.closest.url` is required, and it must be a string.
pub fn extract_snapshot(body: &[u8]) -> Result<ArchivedSnapshot, LookupError> {
    let json: Value = serde_json::from_slice(body)
        .map_err(|err| LookupError::new(FailureKind::MalformedJson, err.to_string()))?;

    let closest = json.pointer(CLOSEST_POINTER);
    let url = closest
        .and_then(|closest| closest.get("url"))
        .and_then(Value::as_str)
        .ok_or_else(|| {
            LookupError::new(
                FailureKind::SnapshotMissing,
                "archived_snapshots.closest.url not present",
            )
        })?;

    let timestamp = closest
        .and_then(|closest| closest.get("timestamp"))
        .and_then(Value::as_str)
        .map(ToOwned::to_owned);

    Ok(ArchivedSnapshot {
        url: url.to_owned(),
        timestamp,
    })
}
