//! Dispatch decision engine.
//!
//! Runs once per received event, inside the delivery framework's
//! time-bounded receipt callback. Flow:
//! 1. Classifier — non-target events pass through untouched
//! 2. Oracle — duplicates and inline-handled events suppress delivery
//! 3. Strategy selector — novel events are handed to the background path
//!
//! The propagation decision is committed before the hand-off runs, so a
//! hand-off failure never changes the outcome.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::classifier::Classifier;
use crate::config::DispatcherConfig;
use crate::error::Error;
use crate::event::InboundEvent;
use crate::oracle::ProcessingOracle;
use crate::selector::{SchedulingContext, StrategySelector};
use crate::submit::{BackgroundSubmitter, CapabilityProvider};

// ── Outcome ─────────────────────────────────────────────────────────

/// Result status reported back to the delivery framework.
///
/// [`Abort`](ResultStatus::Abort) additionally instructs the framework
/// to halt delivery to other registered listeners for this event. On
/// frameworks without ordered/abortable delivery the status is advisory
/// and both values read as "success".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStatus {
    Ok,
    Abort,
}

/// Final dispatch decision for one received event. Derived, not
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Whether other listeners should still see this event.
    pub propagate: bool,
    /// Status reported to the delivery framework.
    pub status: ResultStatus,
}

impl DispatchOutcome {
    /// "Not mine" or "accepted": other listeners still see the event.
    pub fn pass_through() -> Self {
        Self {
            propagate: true,
            status: ResultStatus::Ok,
        }
    }

    /// Duplicate or already-handled: stop further delivery.
    pub fn suppress() -> Self {
        Self {
            propagate: false,
            status: ResultStatus::Abort,
        }
    }
}

// ── Dispatcher ──────────────────────────────────────────────────────

/// Receipt-time dispatcher, one per process.
///
/// Holds its collaborators explicitly; no global state. Construct once
/// with the host's oracle, submitter, and capability provider, then
/// call [`decide`](Dispatcher::decide) from the receipt callback.
pub struct Dispatcher {
    classifier: Classifier,
    oracle: Arc<dyn ProcessingOracle>,
    selector: StrategySelector,
    capability: Arc<dyn CapabilityProvider>,
}

impl Dispatcher {
    /// Create a new dispatcher.
    pub fn new(
        config: DispatcherConfig,
        oracle: Arc<dyn ProcessingOracle>,
        submitter: Arc<dyn BackgroundSubmitter>,
        capability: Arc<dyn CapabilityProvider>,
    ) -> Self {
        Self {
            classifier: Classifier::new(&config),
            selector: StrategySelector::new(config, submitter),
            oracle,
            capability,
        }
    }

    /// Decide propagation and hand-off for one received event.
    ///
    /// Called exactly once per event, synchronously within the receipt
    /// window; returns as soon as the decision is committed and any
    /// hand-off submission has been accepted. Never waits for the
    /// background work itself.
    ///
    /// Errors only on an oracle failure, which is fatal for the event.
    pub async fn decide(&self, event: &InboundEvent) -> Result<DispatchOutcome, Error> {
        let classification = self.classifier.classify(event);
        if !classification.is_target {
            // Not ours; other listeners should still see it.
            debug!(id = %event.id, action = %event.action, "Not a target event");
            return Ok(DispatchOutcome::pass_through());
        }

        let Some(verdict) = self.oracle.process(&event.payload).await? else {
            // Oracle did not recognize the payload either.
            debug!(id = %event.id, "Oracle returned no verdict, passing through");
            return Ok(DispatchOutcome::pass_through());
        };

        // Repeated deliveries and inline-handled events must not reach
        // other listeners, and never touch the background path.
        if verdict.processed() {
            info!(
                id = %event.id,
                duplicate = verdict.is_duplicate,
                handled_inline = verdict.handled_inline,
                "Suppressing further delivery"
            );
            return Ok(DispatchOutcome::suppress());
        }

        let context = SchedulingContext {
            priority: event.priority(),
            capability_level: self.capability.capability_level(),
            has_remote_resource: verdict.requires_background_fetch,
        };

        // The outcome is already final; a failed hand-off means a lost
        // event for this delivery, not a changed propagation decision.
        match self.selector.dispatch(event, context).await {
            Ok(submission) => {
                debug!(id = %event.id, ?submission, "Background hand-off accepted");
            }
            Err(e) => {
                error!(id = %event.id, error = %e, "Background hand-off failed, event lost");
            }
        }

        Ok(DispatchOutcome::pass_through())
    }
}
