//! Document-level pointer dispatcher.
//!
//! The host feeds every raw pointer event here. A press decides whether a
//! drag session begins; moves and releases only reach the session that is
//! currently active. At most one session occupies the slot at a time.

use super::gestures::{resolve, DragSession, HandlerMatch};
use super::types::{PointerButton, PointerEvent, PointerEventKind};
use crate::host::{ElementTree, EventHost};
use dragkit_core::ElementId;
use std::cell::RefCell;

thread_local! {
    static DOCUMENT_DISPATCHER: RefCell<DragDispatcher> = RefCell::new(DragDispatcher::new());
}

/// Holds the active drag session, if any.
#[derive(Debug, Default)]
pub struct DragDispatcher {
    active: Option<DragSession>,
}

impl DragDispatcher {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn active_session(&self) -> Option<&DragSession> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Routes `event` by kind.
    pub fn handle<H>(&mut self, host: &H, event: &PointerEvent)
    where
        H: EventHost + ?Sized,
    {
        match event.kind {
            PointerEventKind::Down => {
                self.pointer_down(host, event);
            }
            PointerEventKind::Move => self.pointer_move(host, event),
            PointerEventKind::Up => self.pointer_up(host, event),
            PointerEventKind::Cancel => self.pointer_cancel(host, event),
        }
    }

    /// Handles a mouse down or touch start. Returns `true` if a session is
    /// now armed.
    pub fn pointer_down<H>(&mut self, host: &H, event: &PointerEvent) -> bool
    where
        H: EventHost + ?Sized,
    {
        let Some(matched) = resolve(host, event.target) else {
            return false;
        };
        if !accepts_press(host, event, &matched) {
            return false;
        }

        if let Some(mut stale) = self.active.take() {
            log::warn!(
                "pointer down while drag session {} is still active, ending it",
                stale.scope()
            );
            stale.cancel(host, None);
        }

        self.active = DragSession::begin(host, event, matched);
        if event.is_touch() {
            event.consume();
        }
        self.active.is_some()
    }

    pub fn pointer_move<H>(&mut self, host: &H, event: &PointerEvent)
    where
        H: EventHost + ?Sized,
    {
        let Some(session) = self.active.as_mut() else {
            return;
        };
        session.pointer_move(host, event);
        if session.is_finished() {
            self.active = None;
        }
    }

    pub fn pointer_up<H>(&mut self, host: &H, event: &PointerEvent)
    where
        H: EventHost + ?Sized,
    {
        if let Some(mut session) = self.active.take() {
            session.pointer_up(host, event);
        }
    }

    pub fn pointer_cancel<H>(&mut self, host: &H, event: &PointerEvent)
    where
        H: EventHost + ?Sized,
    {
        if let Some(mut session) = self.active.take() {
            session.cancel(host, Some(event));
        }
    }
}

/// Button, exclusion and handle checks for a press.
fn accepts_press<H>(host: &H, event: &PointerEvent, matched: &HandlerMatch) -> bool
where
    H: ElementTree + ?Sized,
{
    let options = &matched.options;

    if !event.is_touch()
        && options.which > 0
        && event.button != PointerButton::from_which(options.which)
    {
        return false;
    }

    if let Some(not) = options.not.as_deref() {
        if host.matches(event.target, not) {
            return false;
        }
    }

    if let Some(handle) = options.handle.as_deref() {
        if !inside_handle(host, event.target, handle, matched.handler_element) {
            return false;
        }
    }

    true
}

/// Whether `target`, or an ancestor up to and including `handler_element`,
/// matches `handle`.
fn inside_handle<H>(host: &H, target: ElementId, handle: &str, handler_element: ElementId) -> bool
where
    H: ElementTree + ?Sized,
{
    let mut current = Some(target);
    while let Some(element) = current {
        if host.matches(element, handle) {
            return true;
        }
        if element == handler_element {
            return false;
        }
        current = host.parent(element);
    }
    false
}

/// Runs `f` with the process-wide dispatcher of the current thread.
///
/// Returns `None` when called re-entrantly from inside a drag handler.
pub fn with_document_dispatcher<R>(f: impl FnOnce(&mut DragDispatcher) -> R) -> Option<R> {
    DOCUMENT_DISPATCHER.with(|dispatcher| match dispatcher.try_borrow_mut() {
        Ok(mut dispatcher) => Some(f(&mut dispatcher)),
        Err(_) => {
            log::warn!("re-entrant pointer dispatch ignored");
            None
        }
    })
}

/// Feeds `event` to the process-wide dispatcher.
pub fn dispatch_document_event<H>(host: &H, event: &PointerEvent)
where
    H: EventHost + ?Sized,
{
    with_document_dispatcher(|dispatcher| dispatcher.handle(host, event));
}
