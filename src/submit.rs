//! Background submission and environment capability seams.
//!
//! Pure hand-off interfaces, no policy: the strategy choice lives in
//! [`StrategySelector`](crate::selector::StrategySelector).

use async_trait::async_trait;

use crate::error::SubmitError;
use crate::event::WorkOrder;

/// Hands work orders to the background processing subsystem.
///
/// Three entry points, one per scheduling strategy. All are
/// fire-and-forget: success means the order was accepted, not that the
/// work ran. Errors are synchronous submission failures only.
#[async_trait]
pub trait BackgroundSubmitter: Send + Sync {
    /// Run the remaining minimal processing in the current call.
    ///
    /// Used for events with no remote resource to fetch; must return
    /// quickly enough for the receipt callback's time budget.
    async fn submit_inline(&self, order: WorkOrder) -> Result<(), SubmitError>;

    /// Enqueue into the managed, rate-limited background job queue.
    async fn submit_queued(&self, order: WorkOrder) -> Result<(), SubmitError>;

    /// Start a background worker directly, holding a keep-alive
    /// guarantee until it completes. The worker releases the guarantee
    /// exactly once on completion; that obligation lives with the
    /// submitter's host, not here.
    ///
    /// May fail with [`SubmitError::PermissionRejected`] when the
    /// process lacks temporary elevated scheduling permission.
    async fn submit_immediate(&self, order: WorkOrder) -> Result<(), SubmitError>;
}

/// Reports the host environment's scheduling capability tier.
///
/// Read at decision time; cheap, no caching required here.
pub trait CapabilityProvider: Send + Sync {
    /// Current capability level. The host maps its environment onto the
    /// tiers in [`DispatcherConfig`](crate::config::DispatcherConfig):
    /// 0 means no managed queue at all.
    fn capability_level(&self) -> u32;
}
