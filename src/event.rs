//! Shared types for inbound push events.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Reserved payload keys ───────────────────────────────────────────

/// Optional protocol type tag (absent on older senders).
pub const MESSAGE_TYPE_KEY: &str = "message_type";

/// Sender origin; used to detect registration-token refresh notices.
pub const ORIGIN_KEY: &str = "from";

/// Numeric delivery priority. Absent or unparseable reads as 0.
pub const PRIORITY_KEY: &str = "pri";

// ── Inbound event ───────────────────────────────────────────────────

/// A single push event as delivered by the messaging gateway.
///
/// The delivery adapter converts its native format into this struct.
/// Immutable once received; consumed synchronously within the receipt
/// callback and discarded after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEvent {
    /// Receipt-scoped ID (generated UUID; the gateway gives us none).
    pub id: Uuid,
    /// Action identifier from the delivery framework.
    pub action: String,
    /// Raw key/value payload. A `BTreeMap` keeps the canonical
    /// serialized form stable across deliveries of the same event.
    pub payload: BTreeMap<String, String>,
    /// When the event was received.
    pub received_at: DateTime<Utc>,
}

impl InboundEvent {
    /// Wrap a raw delivery in an event with a fresh receipt ID.
    pub fn new(action: impl Into<String>, payload: BTreeMap<String, String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            action: action.into(),
            payload,
            received_at: Utc::now(),
        }
    }

    /// Optional protocol type tag.
    pub fn message_type(&self) -> Option<&str> {
        self.payload.get(MESSAGE_TYPE_KEY).map(String::as_str)
    }

    /// Sender origin, if declared.
    pub fn origin(&self) -> Option<&str> {
        self.payload.get(ORIGIN_KEY).map(String::as_str)
    }

    /// Declared delivery priority; 0 when absent or unparseable.
    pub fn priority(&self) -> i64 {
        self.payload
            .get(PRIORITY_KEY)
            .and_then(|p| p.parse().ok())
            .unwrap_or(0)
    }
}

// ── Work order ──────────────────────────────────────────────────────

/// Submission envelope handed to the background worker.
///
/// Carries the two derived fields every submission path attaches: the
/// canonical JSON rendering of the full payload (so the worker can
/// reconstruct context without the live event) and the capture
/// timestamp in epoch seconds, for downstream ordering and audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    /// The event being handed off.
    pub event: InboundEvent,
    /// Canonical serialized form of the full payload.
    pub json_payload: String,
    /// Epoch seconds at submission time.
    pub captured_at: i64,
}

impl WorkOrder {
    /// Capture an event for submission, attaching the derived fields.
    pub fn capture(event: &InboundEvent) -> Self {
        // BTreeMap keys serialize in sorted order, so this form is
        // identical for repeated deliveries of the same payload.
        let json_payload = serde_json::to_string(&event.payload)
            .unwrap_or_else(|_| "{}".to_string());
        Self {
            event: event.clone(),
            json_payload,
            captured_at: Utc::now().timestamp(),
        }
    }
}
