//! Delivery-framework seam: event intake and result reporting.

use async_trait::async_trait;
use tracing::error;

use crate::dispatcher::{DispatchOutcome, Dispatcher};
use crate::event::InboundEvent;

/// Adapter over the host's delivery callback — pure I/O, no decisions.
///
/// The host implementation converts the framework's native delivery into
/// [`InboundEvent`]s and translates each [`DispatchOutcome`] back into
/// whatever its framework expects (result code, abort signal, nothing).
#[async_trait]
pub trait EventSource: Send {
    /// Next delivered event, or `None` once the source is closed.
    async fn next_event(&mut self) -> Option<InboundEvent>;

    /// Report the decision for an event back to the framework.
    async fn report(&mut self, event: &InboundEvent, outcome: &DispatchOutcome);
}

impl Dispatcher {
    /// Pump an event source until it closes, deciding each event and
    /// reporting its outcome.
    ///
    /// An oracle failure loses that event but never suppresses it: the
    /// source is told to propagate so other listeners still see it.
    pub async fn run(&self, source: &mut dyn EventSource) {
        while let Some(event) = source.next_event().await {
            let outcome = match self.decide(&event).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(id = %event.id, error = %e, "Decision failed, event lost");
                    DispatchOutcome::pass_through()
                }
            };
            source.report(&event, &outcome).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::collections::VecDeque;
    use std::sync::Arc;

    use super::*;
    use crate::config::DispatcherConfig;
    use crate::dispatcher::ResultStatus;
    use crate::error::{OracleError, SubmitError};
    use crate::event::WorkOrder;
    use crate::oracle::{ProcessedResult, ProcessingOracle};
    use crate::submit::{BackgroundSubmitter, CapabilityProvider};
    use uuid::Uuid;

    struct VecSource {
        pending: VecDeque<InboundEvent>,
        reports: Vec<(Uuid, DispatchOutcome)>,
    }

    #[async_trait]
    impl EventSource for VecSource {
        async fn next_event(&mut self) -> Option<InboundEvent> {
            self.pending.pop_front()
        }

        async fn report(&mut self, event: &InboundEvent, outcome: &DispatchOutcome) {
            self.reports.push((event.id, *outcome));
        }
    }

    /// Marks every other payload a duplicate, keyed on the `dup` field.
    struct MarkingOracle;

    #[async_trait]
    impl ProcessingOracle for MarkingOracle {
        async fn process(
            &self,
            payload: &BTreeMap<String, String>,
        ) -> Result<Option<ProcessedResult>, OracleError> {
            Ok(Some(ProcessedResult {
                is_duplicate: payload.contains_key("dup"),
                ..Default::default()
            }))
        }
    }

    struct NullSubmitter;

    #[async_trait]
    impl BackgroundSubmitter for NullSubmitter {
        async fn submit_inline(&self, _order: WorkOrder) -> Result<(), SubmitError> {
            Ok(())
        }
        async fn submit_queued(&self, _order: WorkOrder) -> Result<(), SubmitError> {
            Ok(())
        }
        async fn submit_immediate(&self, _order: WorkOrder) -> Result<(), SubmitError> {
            Ok(())
        }
    }

    struct NoQueue;

    impl CapabilityProvider for NoQueue {
        fn capability_level(&self) -> u32 {
            0
        }
    }

    fn event(pairs: &[(&str, &str)]) -> InboundEvent {
        let payload: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        InboundEvent::new("com.google.android.c2dm.intent.RECEIVE", payload)
    }

    #[tokio::test]
    async fn run_reports_one_outcome_per_event() {
        let dispatcher = Dispatcher::new(
            DispatcherConfig::default(),
            Arc::new(MarkingOracle),
            Arc::new(NullSubmitter),
            Arc::new(NoQueue),
        );

        let novel = event(&[("alert", "hi")]);
        let duplicate = event(&[("alert", "hi"), ("dup", "1")]);
        let mut source = VecSource {
            pending: VecDeque::from([novel.clone(), duplicate.clone()]),
            reports: Vec::new(),
        };

        dispatcher.run(&mut source).await;

        assert_eq!(source.reports.len(), 2);
        assert_eq!(source.reports[0].0, novel.id);
        assert!(source.reports[0].1.propagate);
        assert_eq!(source.reports[1].0, duplicate.id);
        assert_eq!(source.reports[1].1.status, ResultStatus::Abort);
    }
}
