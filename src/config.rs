//! Configuration types.

/// Dispatcher configuration.
///
/// Protocol constants default to the wire values of the push delivery
/// protocol this dispatcher was built against. Capability tiers are
/// host-defined: the [`CapabilityProvider`](crate::submit::CapabilityProvider)
/// maps its environment onto these levels.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Action identifier carried by deliverable push events.
    pub receive_action: String,
    /// Expected value of the optional `message_type` payload key.
    /// An absent key is accepted for backward compatibility.
    pub expected_message_type: String,
    /// Origin (`from` payload key) used by registration-token refresh
    /// notices. Events from this origin are never targets.
    pub token_refresh_origin: String,
    /// Priority values strictly above this are "high" and bypass the
    /// managed queue.
    pub high_priority_cutoff: i64,
    /// Capability level at or above which the managed job queue is the
    /// preferred background path. Environments at this tier cap the
    /// number of concurrently schedulable distinct jobs.
    pub queued_preferred_level: u32,
    /// Minimum capability level at which the managed queue exists at all
    /// and can absorb a permission-rejection fallback.
    pub queued_min_level: u32,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            receive_action: "com.google.android.c2dm.intent.RECEIVE".to_string(),
            expected_message_type: "gcm".to_string(),
            token_refresh_origin: "google.com/iid".to_string(),
            high_priority_cutoff: 9,
            queued_preferred_level: 2,
            queued_min_level: 1,
        }
    }
}
