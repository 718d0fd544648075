pub mod properties;
pub mod resolver;
pub mod session;
pub mod tracked;

pub use properties::GestureProperties;
pub use resolver::{resolve, HandlerMatch};
pub use session::{DragSession, SessionState};
pub use tracked::TrackedElement;
