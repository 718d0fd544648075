//! One logical element moving through dragstart, drag and dragend.

use super::properties::GestureProperties;
use super::resolver::HandlerMatch;
use crate::event::{DragEventType, DragResponse};
use crate::host::EventHost;
use crate::nodes::input::PointerEvent;
use dragkit_core::ElementId;

/// Lifecycle wrapper binding a dragged element to its gesture state.
///
/// `start` and `drag` return `false` when a handler cancelled, after the
/// element already received its `dragend`; the session then drops it.
#[derive(Clone, Debug)]
pub struct TrackedElement {
    properties: GestureProperties,
    ended: bool,
}

impl TrackedElement {
    pub fn new<H>(host: &H, press: &PointerEvent, matched: &HandlerMatch, drag_root: ElementId) -> Self
    where
        H: EventHost + ?Sized,
    {
        Self {
            properties: GestureProperties::new(host, press, matched, drag_root),
            ended: false,
        }
    }

    pub fn properties(&self) -> &GestureProperties {
        &self.properties
    }

    pub fn target(&self) -> ElementId {
        self.properties.target
    }

    /// Element later events stand for; `None` before `start` succeeded.
    pub fn proxy(&self) -> Option<ElementId> {
        self.properties.proxy
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn start<H>(&mut self, host: &H, event: &PointerEvent) -> bool
    where
        H: EventHost + ?Sized,
    {
        let response = self
            .properties
            .trigger(host, Some(event), DragEventType::Start);
        let proxy = match response {
            Some(DragResponse::Cancel) => return self.abort(host),
            Some(DragResponse::Targets(targets)) => targets.first().copied(),
            Some(DragResponse::Continue) | None => None,
        };
        self.properties.proxy = Some(proxy.unwrap_or(self.properties.drag_root));
        true
    }

    pub fn drag<H>(&mut self, host: &H, event: &PointerEvent) -> bool
    where
        H: EventHost + ?Sized,
    {
        let response = self
            .properties
            .trigger(host, Some(event), DragEventType::Drag);
        if response.as_ref().is_some_and(DragResponse::is_cancel) {
            return self.abort(host);
        }
        true
    }

    /// Fires `dragend`. Its answer is ignored: termination cannot be vetoed.
    /// Only the first call per element dispatches.
    pub fn end<H>(&mut self, host: &H, event: Option<&PointerEvent>)
    where
        H: EventHost + ?Sized,
    {
        if self.ended {
            return;
        }
        self.ended = true;
        self.properties.trigger(host, event, DragEventType::End);
    }

    /// Ends the element without pointer data. Always returns `false`.
    pub fn abort<H>(&mut self, host: &H) -> bool
    where
        H: EventHost + ?Sized,
    {
        log::debug!("drag element {} aborted", self.properties.target);
        self.end(host, None);
        false
    }
}
