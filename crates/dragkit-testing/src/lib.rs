//! Testing utilities and harness for Dragkit

pub mod host;
pub mod recorder;
pub mod robot;
pub mod selector;

pub use host::{ClickOutcome, TestHost, TreeError};
pub use recorder::{RecordedEvent, Recorder};
pub use robot::GestureRobot;

pub mod prelude {
    pub use crate::host::{ClickOutcome, TestHost, TreeError};
    pub use crate::recorder::{RecordedEvent, Recorder};
    pub use crate::robot::GestureRobot;
    pub use dragkit_foundation::prelude::*;
}
