pub mod dispatcher;
pub mod gestures;
pub mod types;

pub use dispatcher::{dispatch_document_event, with_document_dispatcher, DragDispatcher};
pub use types::{PointerButton, PointerEvent, PointerEventKind, PointerSource};

pub mod prelude {
    pub use super::dispatcher::DragDispatcher;
    pub use super::gestures::{GestureProperties, HandlerMatch, SessionState};
    pub use super::types::{PointerButton, PointerEvent, PointerEventKind, PointerSource};
}
