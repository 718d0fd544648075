//! Robot-style driver for pointer gestures against a [`TestHost`].
//!
//! The robot plays the part of the platform: every press goes to the
//! dispatcher, while moves and releases are only delivered while some drag
//! session has document listeners installed, the way a real toolkit would
//! only call back subscribed listeners.
//!
//! ```
//! use dragkit_testing::{GestureRobot, TestHost};
//!
//! let host = TestHost::new();
//! let mut robot = GestureRobot::new(&host);
//! robot.press(host.root(), (10.0, 10.0));
//! robot.move_to((20.0, 10.0));
//! robot.release((20.0, 10.0));
//! ```

use crate::host::TestHost;
use dragkit_core::ElementId;
use dragkit_foundation::{
    DragDispatcher, PointerButton, PointerEvent, PointerEventKind, PointerSource,
};
use dragkit_geometry::Point;

pub struct GestureRobot<'a> {
    host: &'a TestHost,
    dispatcher: DragDispatcher,
    pressed: Option<(PointerSource, ElementId)>,
    delivered: usize,
}

impl<'a> GestureRobot<'a> {
    pub fn new(host: &'a TestHost) -> Self {
        Self {
            host,
            dispatcher: DragDispatcher::new(),
            pressed: None,
            delivered: 0,
        }
    }

    pub fn host(&self) -> &TestHost {
        self.host
    }

    pub fn dispatcher(&self) -> &DragDispatcher {
        &self.dispatcher
    }

    /// Moves and releases the dispatcher actually received.
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Primary-button mouse press. Returns whether a session armed.
    pub fn press(&mut self, target: ElementId, at: impl Into<Point>) -> bool {
        self.press_with(PointerEvent::new(PointerEventKind::Down, target, at.into()))
    }

    pub fn press_button(
        &mut self,
        target: ElementId,
        at: impl Into<Point>,
        button: PointerButton,
    ) -> bool {
        self.press_with(
            PointerEvent::new(PointerEventKind::Down, target, at.into()).with_button(button),
        )
    }

    /// Touch start. The returned event tells whether default handling was
    /// suppressed.
    pub fn touch_start(&mut self, target: ElementId, at: impl Into<Point>) -> PointerEvent {
        let event = PointerEvent::touch(PointerEventKind::Down, target, Some(at.into()));
        self.press_with(event.clone());
        event
    }

    pub fn press_with(&mut self, event: PointerEvent) -> bool {
        self.pressed = Some((event.source, event.target));
        self.dispatcher.pointer_down(self.host, &event)
    }

    pub fn move_to(&mut self, at: impl Into<Point>) {
        let (source, target) = self.pressed.unwrap_or((PointerSource::Mouse, self.host.root()));
        let event = match source {
            PointerSource::Mouse => PointerEvent::new(PointerEventKind::Move, target, at.into()),
            PointerSource::Touch => {
                PointerEvent::touch(PointerEventKind::Move, target, Some(at.into()))
            }
        };
        self.deliver(event);
    }

    pub fn release(&mut self, at: impl Into<Point>) {
        let target = self.pressed_target();
        self.deliver(PointerEvent::new(PointerEventKind::Up, target, at.into()));
        self.pressed = None;
    }

    /// Touch end without coordinates.
    pub fn touch_end(&mut self) {
        let target = self.pressed_target();
        self.deliver(PointerEvent::touch(PointerEventKind::Up, target, None));
        self.pressed = None;
    }

    pub fn cancel(&mut self) {
        let target = self.pressed_target();
        let mut event = PointerEvent::new(PointerEventKind::Cancel, target, Point::ZERO);
        event.page = None;
        self.deliver(event);
        self.pressed = None;
    }

    /// Press, move through `path`, release at the last point.
    pub fn drag(&mut self, target: ElementId, from: impl Into<Point>, path: &[Point]) {
        let from = from.into();
        self.press(target, from);
        for point in path {
            self.move_to(*point);
        }
        self.release(path.last().copied().unwrap_or(from));
    }

    fn pressed_target(&self) -> ElementId {
        self.pressed
            .map_or(self.host.root(), |(_, target)| target)
    }

    fn deliver(&mut self, event: PointerEvent) {
        if !self.host.has_document_listeners() {
            return;
        }
        self.delivered += 1;
        self.dispatcher.handle(self.host, &event);
    }
}
