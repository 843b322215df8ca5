//! Push Dispatch — receipt-time dispatcher for inbound push events.

pub mod classifier;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod oracle;
pub mod selector;
pub mod source;
pub mod submit;
