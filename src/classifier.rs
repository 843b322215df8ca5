//! Pre-oracle event filter.
//!
//! Runs before any dedup/processing work to short-circuit events that
//! are not ours:
//! - registration-token refresh notices → never targets
//! - wrong action identifier → not a push delivery
//! - explicit unexpected type tag → some other protocol
//!
//! If the classifier rejects an event, the oracle is never consulted.

use tracing::debug;

use crate::config::DispatcherConfig;
use crate::event::InboundEvent;

/// Classification verdict for an inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Whether this event belongs to the target push protocol.
    pub is_target: bool,
    /// The explicit type tag, when one was present and accepted.
    pub subtype: Option<String>,
}

impl Classification {
    fn rejected() -> Self {
        Self {
            is_target: false,
            subtype: None,
        }
    }
}

/// Filters inbound events down to target push deliveries.
///
/// Pure and infallible: every event gets a verdict, identical on
/// repeated calls.
#[derive(Debug, Clone)]
pub struct Classifier {
    receive_action: String,
    expected_message_type: String,
    token_refresh_origin: String,
}

impl Classifier {
    /// Build a classifier from the dispatcher configuration.
    pub fn new(config: &DispatcherConfig) -> Self {
        Self {
            receive_action: config.receive_action.clone(),
            expected_message_type: config.expected_message_type.clone(),
            token_refresh_origin: config.token_refresh_origin.clone(),
        }
    }

    /// Classify an event as target or not.
    pub fn classify(&self, event: &InboundEvent) -> Classification {
        // Token refresh notices are unordered fire-and-forget broadcasts
        // with no result-status expectation. They are never targets,
        // even when the action matches; checked before anything else.
        if event.origin() == Some(self.token_refresh_origin.as_str()) {
            debug!(id = %event.id, "Token refresh notice, not a target event");
            return Classification::rejected();
        }

        if event.action != self.receive_action {
            return Classification::rejected();
        }

        // An absent type tag is accepted: older senders predate the
        // field. An explicit tag must match exactly.
        match event.message_type() {
            None => Classification {
                is_target: true,
                subtype: None,
            },
            Some(t) if t == self.expected_message_type => Classification {
                is_target: true,
                subtype: Some(t.to_string()),
            },
            Some(other) => {
                debug!(
                    id = %event.id,
                    message_type = %other,
                    "Unexpected type tag, not a target event"
                );
                Classification::rejected()
            }
        }
    }
}
