//! Drag session: one press-to-release interaction.
//!
//! A session is created on pointer down, negotiates `draginit`, then owns the
//! document-level move/up listeners until the release or until every tracked
//! element has been cancelled. While it lives, text selection and native
//! image dragging are switched off.

use super::properties::GestureProperties;
use super::resolver::{resolve, HandlerMatch};
use super::tracked::TrackedElement;
use crate::event::{DragEventType, DragResponse};
use crate::host::EventHost;
use crate::nodes::input::PointerEvent;
use crate::options::Options;
use dragkit_core::{ElementId, ListenerScope};
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Listeners live, distance threshold not reached yet.
    Armed,
    /// `dragstart` has fired; every move fans out `drag`.
    Dragging,
    /// Listeners removed, document state restored.
    Finished,
}

#[derive(Debug)]
pub struct DragSession {
    properties: GestureProperties,
    options: Options,
    tracked: SmallVec<[TrackedElement; 2]>,
    dragging: bool,
    scope: ListenerScope,
    finished: bool,
}

impl DragSession {
    /// Runs `draginit` for `matched` and arms a session, or returns `None`
    /// when the handler cancelled or none of its targets resolves. A session
    /// that is not armed installs nothing.
    pub fn begin<H>(host: &H, press: &PointerEvent, matched: HandlerMatch) -> Option<Self>
    where
        H: EventHost + ?Sized,
    {
        let root = matched.target_element;
        let mut properties = GestureProperties::new(host, press, &matched, root);

        let targets: SmallVec<[ElementId; 2]> =
            match properties.trigger(host, Some(press), DragEventType::Init) {
                Some(DragResponse::Cancel) => {
                    log::debug!("draginit cancelled on element {root}");
                    return None;
                }
                Some(DragResponse::Targets(targets)) => targets,
                Some(DragResponse::Continue) | None => smallvec![root],
            };

        let tracked = targets
            .into_iter()
            .filter_map(|element| match resolve(host, element) {
                Some(element_match) => {
                    Some(TrackedElement::new(host, press, &element_match, root))
                }
                None => {
                    log::debug!("drag target {element} has no handler, skipped");
                    None
                }
            })
            .collect::<SmallVec<[TrackedElement; 2]>>();
        if tracked.is_empty() {
            log::debug!("draginit on element {root} left nothing to drag");
            return None;
        }

        let scope = ListenerScope::next();
        host.listen_document(scope);
        host.set_native_drag(false);
        host.set_text_selection(false);
        log::debug!(
            "drag session {scope} armed on element {root} with {} tracked element(s)",
            tracked.len()
        );

        Some(Self {
            properties,
            options: matched.options,
            tracked,
            dragging: false,
            scope,
            finished: false,
        })
    }

    pub fn state(&self) -> SessionState {
        if self.finished {
            SessionState::Finished
        } else if self.dragging {
            SessionState::Dragging
        } else {
            SessionState::Armed
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// State of the element `draginit` ran for.
    pub fn properties(&self) -> &GestureProperties {
        &self.properties
    }

    pub fn tracked(&self) -> &[TrackedElement] {
        &self.tracked
    }

    pub fn scope(&self) -> ListenerScope {
        self.scope
    }

    pub fn pointer_move<H>(&mut self, host: &H, event: &PointerEvent)
    where
        H: EventHost + ?Sized,
    {
        if self.finished {
            return;
        }
        self.properties.update(event);

        if !self.dragging
            && self.properties.delta.is_some()
            && self.properties.distance() >= self.options.distance
        {
            self.retain_tracked(|element| element.start(host, event));
            self.dragging = true;
            log::debug!("drag session {} started dragging", self.scope);
        }

        if self.dragging {
            self.retain_tracked(|element| element.drag(host, event));
            log::trace!(
                "drag session {} moved, {} element(s) active",
                self.scope,
                self.tracked.len()
            );
        }

        if self.tracked.is_empty() {
            self.finish(host);
        }
    }

    pub fn pointer_up<H>(&mut self, host: &H, event: &PointerEvent)
    where
        H: EventHost + ?Sized,
    {
        if self.finished {
            return;
        }
        self.end_all(host, Some(event));
        if self.dragging && !self.options.click {
            host.suppress_next_click(self.properties.target);
        }
        self.finish(host);
    }

    /// Ends every tracked element and finishes without touching clicks.
    pub fn cancel<H>(&mut self, host: &H, event: Option<&PointerEvent>)
    where
        H: EventHost + ?Sized,
    {
        if self.finished {
            return;
        }
        self.end_all(host, event);
        self.finish(host);
    }

    /// Removes the session's listeners and restores document state. Only the
    /// first call has an effect.
    pub fn finish<H>(&mut self, host: &H)
    where
        H: EventHost + ?Sized,
    {
        if self.finished {
            return;
        }
        self.finished = true;
        host.unlisten_document(self.scope);
        host.set_native_drag(true);
        host.set_text_selection(true);
        log::debug!("drag session {} finished", self.scope);
    }

    fn end_all<H>(&mut self, host: &H, event: Option<&PointerEvent>)
    where
        H: EventHost + ?Sized,
    {
        for element in self.tracked.iter_mut() {
            element.end(host, event);
        }
        self.tracked.clear();
    }

    /// Runs `step` over a snapshot of the tracked elements in creation order
    /// and keeps those returning `true`.
    fn retain_tracked(&mut self, mut step: impl FnMut(&mut TrackedElement) -> bool) {
        let snapshot = std::mem::take(&mut self.tracked);
        self.tracked = snapshot
            .into_iter()
            .filter_map(|mut element| step(&mut element).then_some(element))
            .collect();
    }
}
