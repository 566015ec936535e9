//! EventDispatcher — synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::CovenantEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn CovenantEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn CovenantEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// A panicking handler does not prevent later handlers from running.
    fn emit<F: Fn(&dyn CovenantEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    pub fn emit_run_started(&self, event: &RunStartedEvent) {
        self.emit(|h| h.on_run_started(event));
    }

    pub fn emit_run_complete(&self, event: &RunCompleteEvent) {
        self.emit(|h| h.on_run_complete(event));
    }

    pub fn emit_rule_started(&self, event: &RuleStartedEvent) {
        self.emit(|h| h.on_rule_started(event));
    }

    pub fn emit_rule_evaluated(&self, event: &RuleEvaluatedEvent) {
        self.emit(|h| h.on_rule_evaluated(event));
    }

    pub fn emit_file_skipped(&self, event: &FileSkippedEvent) {
        self.emit(|h| h.on_file_skipped(event));
    }

    pub fn emit_artifact_discovered(&self, event: &ArtifactDiscoveredEvent) {
        self.emit(|h| h.on_artifact_discovered(event));
    }

    pub fn emit_report_written(&self, event: &ReportWrittenEvent) {
        self.emit(|h| h.on_report_written(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
