//! Drag gesture recognition and dispatch over a host element tree.
//!
//! The host toolkit reports raw pointer down/move/up events (mouse or touch)
//! to a [`DragDispatcher`]. On a press the dispatcher resolves the nearest
//! element with drag handlers, runs `draginit`, and arms a [`DragSession`]
//! that turns later moves into `dragstart`, `drag` and `dragend` events for
//! every dragged element.
//!
//! ```text
//! pointer down -> resolve -> draginit -> armed
//!     move (distance reached) -> dragstart* -> drag* -> dragging
//!     move -> drag*
//!     up -> dragend* -> finished
//! ```

pub mod event;
pub mod gesture_constants;
pub mod host;
pub mod nodes;
pub mod options;
pub mod registration;

pub use event::{drag_handler, DragEvent, DragEventType, DragHandler, DragResponse};
pub use host::{ElementTree, EventHost, HandlerRegistration};
pub use nodes::input::gestures::{
    resolve, DragSession, GestureProperties, HandlerMatch, SessionState, TrackedElement,
};
pub use nodes::input::{
    dispatch_document_event, with_document_dispatcher, DragDispatcher, PointerButton,
    PointerEvent, PointerEventKind, PointerSource,
};
pub use options::{Options, PartialOptions};
pub use registration::{drag, drag_delegate, trigger, DragError};

pub use dragkit_core::{ElementId, ListenerScope};
pub use dragkit_geometry::Point;

pub mod prelude {
    pub use crate::event::{drag_handler, DragEvent, DragEventType, DragResponse};
    pub use crate::host::{ElementTree, EventHost};
    pub use crate::nodes::input::prelude::*;
    pub use crate::options::{Options, PartialOptions};
    pub use crate::registration::{drag, drag_delegate};
    pub use dragkit_core::ElementId;
    pub use dragkit_geometry::Point;
}
