//! Per-element drag state passed to every drag handler.

use super::resolver::HandlerMatch;
use crate::event::{DragEvent, DragEventType, DragResponse};
use crate::host::{ElementTree, EventHost};
use crate::nodes::input::PointerEvent;
use dragkit_core::ElementId;
use dragkit_geometry::Point;

/// Pointer travel and element origin for one dragged element.
///
/// `offset == original + delta` whenever `delta` is known. `delta` stays
/// `None` until the first pointer update carrying a position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureProperties {
    /// Element `draginit` ran for.
    pub drag_root: ElementId,
    /// Element being dragged, `current_target` of every event.
    pub target: ElementId,
    /// Element holding the handlers.
    pub handler_element: ElementId,
    /// Page position of the press.
    pub start: Point,
    /// Origin of `target` at press time.
    pub original: Point,
    pub delta: Option<Point>,
    pub offset: Option<Point>,
    /// Element that `drag` and `dragend` stand for, chosen by `dragstart`.
    pub proxy: Option<ElementId>,
}

impl GestureProperties {
    pub fn new<H>(host: &H, press: &PointerEvent, matched: &HandlerMatch, drag_root: ElementId) -> Self
    where
        H: ElementTree + ?Sized,
    {
        let origin = if matched.options.relative {
            host.position(matched.target_element)
        } else {
            host.offset(matched.target_element)
        };
        Self {
            drag_root,
            target: matched.target_element,
            handler_element: matched.handler_element,
            start: press.page.unwrap_or(Point::ZERO),
            original: origin.unwrap_or(Point::ZERO),
            delta: None,
            offset: None,
            proxy: None,
        }
    }

    /// Payload for an event triggered on `element` outside any gesture.
    pub fn at_rest<H>(host: &H, element: ElementId) -> Self
    where
        H: ElementTree + ?Sized,
    {
        let origin = host.offset(element).unwrap_or(Point::ZERO);
        Self {
            drag_root: element,
            target: element,
            handler_element: element,
            start: origin,
            original: origin,
            delta: None,
            offset: None,
            proxy: None,
        }
    }

    /// Folds a new pointer position into the deltas.
    ///
    /// A release without a position keeps the previous deltas.
    pub fn update(&mut self, event: &PointerEvent) {
        if !event.is_release_without_position() {
            if let Some(page) = event.page {
                self.delta = Some(page - self.start);
            }
        }
        self.offset = self.delta.map(|delta| self.original + delta);
    }

    /// Updates from `source` (if any) and dispatches `kind` on the handler
    /// element, returning what the handler answered.
    pub fn trigger<H>(
        &mut self,
        host: &H,
        source: Option<&PointerEvent>,
        kind: DragEventType,
    ) -> Option<DragResponse>
    where
        H: EventHost + ?Sized,
    {
        if let Some(source) = source {
            self.update(source);
        }
        let event = DragEvent::from_pointer(kind, source, self.target);
        host.dispatch(self.handler_element, &event, self)
    }

    /// Straight-line pointer travel since the press, `0.0` before any update.
    pub fn distance(&self) -> f32 {
        self.delta.map_or(0.0, |delta| delta.length())
    }
}
