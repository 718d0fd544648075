//! Records drag events seen by handlers.

use dragkit_core::{ElementId, Owned};
use dragkit_foundation::{
    DragEvent, DragEventType, DragHandler, DragResponse, GestureProperties,
};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedEvent {
    pub event: DragEvent,
    pub props: GestureProperties,
}

impl RecordedEvent {
    pub fn kind(&self) -> DragEventType {
        self.event.kind
    }

    pub fn current_target(&self) -> ElementId {
        self.event.current_target
    }
}

/// Shared log that any number of handlers can append to.
#[derive(Clone, Default)]
pub struct Recorder {
    events: Owned<Vec<RecordedEvent>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler that records and lets the gesture continue.
    pub fn handler(&self) -> DragHandler {
        self.handler_with(|_, _| DragResponse::Continue)
    }

    /// Handler that records, then answers with `respond`.
    pub fn handler_with(
        &self,
        respond: impl Fn(&DragEvent, &GestureProperties) -> DragResponse + 'static,
    ) -> DragHandler {
        let events = self.events.clone();
        Rc::new(move |event: &DragEvent, props: &GestureProperties| {
            events.update(|log| {
                log.push(RecordedEvent {
                    event: event.clone(),
                    props: *props,
                })
            });
            respond(event, props)
        })
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.get()
    }

    pub fn kinds(&self) -> Vec<DragEventType> {
        self.events.with(|log| log.iter().map(RecordedEvent::kind).collect())
    }

    /// Event kinds delivered for `element`, in order.
    pub fn kinds_for(&self, element: ElementId) -> Vec<DragEventType> {
        self.events.with(|log| {
            log.iter()
                .filter(|e| e.current_target() == element)
                .map(RecordedEvent::kind)
                .collect()
        })
    }

    pub fn count(&self, kind: DragEventType, element: ElementId) -> usize {
        self.events.with(|log| {
            log.iter()
                .filter(|e| e.kind() == kind && e.current_target() == element)
                .count()
        })
    }

    pub fn last(&self) -> Option<RecordedEvent> {
        self.events.with(|log| log.last().cloned())
    }

    pub fn clear(&self) {
        self.events.update(Vec::clear);
    }

    pub fn is_empty(&self) -> bool {
        self.events.with(Vec::is_empty)
    }
}
