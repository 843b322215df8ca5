//! Scheduling strategy selection.
//!
//! Decides how an event's remaining work reaches the background
//! subsystem:
//! 1. No remote resource → inline, no scheduling at all
//! 2. Normal priority on a queue-capable tier → managed queue
//! 3. High priority, or no queue tier → immediate worker
//!
//! An immediate submission rejected for missing scheduling permission is
//! retried through the queue when the environment has one; any other
//! failure is returned unchanged.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::DispatcherConfig;
use crate::error::SubmitError;
use crate::event::{InboundEvent, WorkOrder};
use crate::submit::BackgroundSubmitter;

// ── Scheduling context ──────────────────────────────────────────────

/// Read-only snapshot used to pick a strategy.
#[derive(Debug, Clone, Copy)]
pub struct SchedulingContext {
    /// Declared delivery priority of the event.
    pub priority: i64,
    /// Host environment capability tier at decision time.
    pub capability_level: u32,
    /// Whether remaining work fetches a remote resource.
    pub has_remote_resource: bool,
}

/// Terminal state of a hand-off: which path accepted the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Handled inline within the receipt call.
    Inline,
    /// Accepted by the managed job queue.
    Queued,
    /// Accepted by a directly started, keep-alive-holding worker.
    Immediate,
}

// ── Selector ────────────────────────────────────────────────────────

/// Chooses and executes a background hand-off strategy.
pub struct StrategySelector {
    config: DispatcherConfig,
    submitter: Arc<dyn BackgroundSubmitter>,
}

impl StrategySelector {
    /// Create a new selector.
    pub fn new(config: DispatcherConfig, submitter: Arc<dyn BackgroundSubmitter>) -> Self {
        Self { config, submitter }
    }

    /// Hand an event's remaining work to the background subsystem.
    ///
    /// Returns the path that accepted the work, or the submission error
    /// once fallback options are exhausted. Never blocks on the work
    /// itself.
    pub async fn dispatch(
        &self,
        event: &InboundEvent,
        context: SchedulingContext,
    ) -> Result<Submission, SubmitError> {
        let order = WorkOrder::capture(event);

        // Cheap events skip scheduling entirely; a queued job would only
        // add latency.
        if !context.has_remote_resource {
            debug!(id = %event.id, "No remote resources, processing inline");
            self.submitter.submit_inline(order).await?;
            return Ok(Submission::Inline);
        }

        let high_priority = context.priority > self.config.high_priority_cutoff;

        // Queue-preferred tiers cap the number of concurrently
        // schedulable distinct jobs, so high-priority work bypasses the
        // queue even there.
        if !high_priority && context.capability_level >= self.config.queued_preferred_level {
            debug!(
                id = %event.id,
                capability = context.capability_level,
                "Enqueueing into managed job queue"
            );
            self.submitter.submit_queued(order).await?;
            return Ok(Submission::Queued);
        }

        debug!(
            id = %event.id,
            priority = context.priority,
            capability = context.capability_level,
            "Starting immediate background worker"
        );
        match self.submitter.submit_immediate(order.clone()).await {
            Ok(()) => Ok(Submission::Immediate),
            Err(SubmitError::PermissionRejected(reason))
                if context.capability_level >= self.config.queued_min_level =>
            {
                // The process lacked temporary elevated scheduling
                // permission. The queue can still take the work.
                warn!(
                    id = %event.id,
                    reason = %reason,
                    "Immediate submission rejected, falling back to queue"
                );
                self.submitter.submit_queued(order).await?;
                Ok(Submission::Queued)
            }
            Err(e) => Err(e),
        }
    }
}
