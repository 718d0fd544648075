//! Default drag options.
//!
//! Values are in logical pixels where a distance is involved. Every handler
//! registration starts from these and overlays its own options on top.

/// Button identity a drag must start with. `0` accepts any button.
pub const DEFAULT_WHICH: u8 = 1;

/// Pointer travel before a press turns into a drag.
///
/// Zero means the first move confirms the drag. Reaching the distance exactly
/// counts as reached.
pub const DEFAULT_DISTANCE: f32 = 0.0;

/// Elements matching this selector never start a drag.
pub const DEFAULT_NOT: &str = ":input";

/// Whether the click following a completed drag is let through.
pub const DEFAULT_CLICK: bool = false;

/// Reserved. Carried in the options for handlers to read, never acted on.
pub const DEFAULT_DROP: bool = true;
