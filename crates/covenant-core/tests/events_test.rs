//! Tests for the event dispatcher.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use covenant_core::events::types::{RuleEvaluatedEvent, RuleStartedEvent};
use covenant_core::events::{CovenantEventHandler, EventDispatcher};
use covenant_core::{RuleId, RuleResult};

#[derive(Default)]
struct Recorder {
    started: Mutex<Vec<RuleId>>,
    evaluated: AtomicUsize,
}

impl CovenantEventHandler for Recorder {
    fn on_rule_started(&self, event: &RuleStartedEvent) {
        self.started.lock().unwrap().push(event.rule);
    }

    fn on_rule_evaluated(&self, _event: &RuleEvaluatedEvent) {
        self.evaluated.fetch_add(1, Ordering::SeqCst);
    }
}

struct Panicker;

impl CovenantEventHandler for Panicker {
    fn on_rule_started(&self, _event: &RuleStartedEvent) {
        panic!("handler failure");
    }
}

#[test]
fn test_empty_dispatcher_is_noop() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_rule_started(&RuleStartedEvent {
        rule: RuleId::CanonicalImmutability,
    });
}

#[test]
fn test_events_reach_every_handler_in_order() {
    let recorder = Arc::new(Recorder::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(recorder.clone());

    for rule in RuleId::all() {
        dispatcher.emit_rule_started(&RuleStartedEvent { rule: *rule });
        dispatcher.emit_rule_evaluated(&RuleEvaluatedEvent {
            rule: *rule,
            result: RuleResult::compliance("ok"),
            duration_ms: 0,
        });
    }

    assert_eq!(recorder.started.lock().unwrap().as_slice(), RuleId::all());
    assert_eq!(recorder.evaluated.load(Ordering::SeqCst), 4);
}

/// A panicking handler does not stop later handlers.
#[test]
fn test_panicking_handler_isolated() {
    let recorder = Arc::new(Recorder::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(Panicker));
    dispatcher.register(recorder.clone());

    dispatcher.emit_rule_started(&RuleStartedEvent {
        rule: RuleId::PhaseBoundaries,
    });

    assert_eq!(
        recorder.started.lock().unwrap().as_slice(),
        &[RuleId::PhaseBoundaries]
    );
}
