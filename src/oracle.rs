//! Duplicate/processing oracle interface.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::OracleError;

/// Verdict produced by the oracle for one target event.
///
/// Created once per event, never mutated; owned by the dispatcher for
/// the duration of the receipt callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessedResult {
    /// The event was already seen (repeated delivery).
    pub is_duplicate: bool,
    /// The oracle fully handled the event inline; nothing else should
    /// act on it.
    pub handled_inline: bool,
    /// The remaining work involves fetching a remote resource, so it
    /// belongs on a background path.
    pub requires_background_fetch: bool,
}

impl ProcessedResult {
    /// Whether no further work remains for this event.
    pub fn processed(&self) -> bool {
        self.is_duplicate || self.handled_inline
    }
}

/// Dedup/processing verdict provider, consulted once per target event.
///
/// Must be deterministic across repeated delivery of the same physical
/// event (the oracle owns the consistency of its "seen" set), and fast:
/// the receipt callback runs under a hard wall-clock budget, so
/// implementations must not block on network I/O.
#[async_trait]
pub trait ProcessingOracle: Send + Sync {
    /// Produce a verdict for a raw payload.
    ///
    /// Returns `Ok(None)` when the payload is not a recognized target
    /// payload (the classifier filters most of these already).
    async fn process(
        &self,
        payload: &BTreeMap<String, String>,
    ) -> Result<Option<ProcessedResult>, OracleError>;
}
