//! Host toolkit abstraction.
//!
//! The gesture machinery never walks a real DOM or installs real listeners.
//! Everything it needs from the toolkit goes through these two traits, so the
//! same state machine runs against a browser binding, a native widget tree or
//! the in-memory host used by tests.

use crate::event::{DragEvent, DragEventType, DragHandler, DragResponse};
use crate::nodes::input::gestures::GestureProperties;
use crate::options::PartialOptions;
use dragkit_core::{ElementId, ListenerScope};
use dragkit_geometry::Point;
use smallvec::SmallVec;

/// Read access to the element tree.
pub trait ElementTree {
    /// Parent of `element`, `None` at the root.
    fn parent(&self, element: ElementId) -> Option<ElementId>;

    /// Whether `element` satisfies `selector`.
    fn matches(&self, element: ElementId, selector: &str) -> bool;

    /// Nearest inclusive ancestor of `element` matching `selector`, searching
    /// no further than `within`. `within` itself is never returned.
    fn closest(&self, element: ElementId, selector: &str, within: ElementId) -> Option<ElementId> {
        let mut current = Some(element);
        while let Some(candidate) = current {
            if candidate == within {
                return None;
            }
            if self.matches(candidate, selector) {
                return Some(candidate);
            }
            current = self.parent(candidate);
        }
        None
    }

    /// Page offset of the element's top-left corner.
    fn offset(&self, element: ElementId) -> Option<Point>;

    /// Position relative to the element's offset parent.
    fn position(&self, element: ElementId) -> Option<Point>;
}

/// One handler subscription as seen by option merging.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandlerRegistration {
    /// Delegation selector; `None` binds the handler to the element itself.
    pub selector: Option<String>,
    pub options: PartialOptions,
}

/// Event subscription and dispatch services of the host.
///
/// All methods take `&self`: handlers run synchronously from inside
/// [`EventHost::dispatch`] and are free to call back into the host.
pub trait EventHost: ElementTree {
    /// Registrations of `kind` on `element`, in subscription order.
    fn registrations(&self, element: ElementId, kind: DragEventType)
        -> SmallVec<[HandlerRegistration; 1]>;

    /// Subscribes `handler` to `kind` on `element`.
    fn subscribe(
        &self,
        element: ElementId,
        kind: DragEventType,
        selector: Option<String>,
        options: PartialOptions,
        handler: DragHandler,
    );

    /// Runs the handlers of `event.kind` bound on `element` and returns the
    /// value of the first one, or `None` if none ran.
    fn dispatch(
        &self,
        element: ElementId,
        event: &DragEvent,
        props: &GestureProperties,
    ) -> Option<DragResponse>;

    /// Starts routing document-level pointer move, up and cancel events
    /// (mouse and touch) to the drag dispatcher under `scope`.
    fn listen_document(&self, scope: ListenerScope);

    /// Removes every listener installed under `scope`. Removing an unknown
    /// scope is a no-op.
    fn unlisten_document(&self, scope: ListenerScope);

    /// Enables or disables text selection for the whole document.
    fn set_text_selection(&self, enabled: bool);

    /// Enables or disables the toolkit's native image dragging.
    fn set_native_drag(&self, enabled: bool);

    /// Cancels the next click on `element`.
    ///
    /// The one-shot must run before every click handler on `element`,
    /// including handlers registered before this call. It prevents the
    /// default action, stops further propagation, then removes itself.
    fn suppress_next_click(&self, element: ElementId);
}
