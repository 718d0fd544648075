//! Drag configuration and field-wise option merging.

use crate::gesture_constants::{
    DEFAULT_CLICK, DEFAULT_DISTANCE, DEFAULT_DROP, DEFAULT_NOT, DEFAULT_WHICH,
};

/// Fully resolved configuration for one drag interaction.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Required button identity (see `PointerButton::which`), `0` for any.
    pub which: u8,
    /// Pointer travel in pixels before the drag is confirmed.
    pub distance: f32,
    /// Selector for elements that must never start a drag.
    pub not: Option<String>,
    /// Selector restricting which descendant may initiate the drag.
    pub handle: Option<String>,
    /// Use the element position relative to its offset parent instead of the
    /// page offset as the origin.
    pub relative: bool,
    /// Reserved.
    pub drop: bool,
    /// Let the click that follows a completed drag through.
    pub click: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            which: DEFAULT_WHICH,
            distance: DEFAULT_DISTANCE,
            not: Some(DEFAULT_NOT.to_string()),
            handle: None,
            relative: false,
            drop: DEFAULT_DROP,
            click: DEFAULT_CLICK,
        }
    }
}

impl Options {
    /// Overwrites every field the overlay sets.
    pub fn merge(&mut self, overlay: &PartialOptions) {
        if let Some(which) = overlay.which {
            self.which = which;
        }
        if let Some(distance) = overlay.distance {
            self.distance = distance;
        }
        if let Some(not) = &overlay.not {
            self.not = not.clone();
        }
        if let Some(handle) = &overlay.handle {
            self.handle = handle.clone();
        }
        if let Some(relative) = overlay.relative {
            self.relative = relative;
        }
        if let Some(drop) = overlay.drop {
            self.drop = drop;
        }
        if let Some(click) = overlay.click {
            self.click = click;
        }
    }

    /// Defaults with every overlay applied in order.
    pub fn merged<'a>(overlays: impl IntoIterator<Item = &'a PartialOptions>) -> Self {
        let mut options = Self::default();
        for overlay in overlays {
            options.merge(overlay);
        }
        options
    }
}

/// Options attached to a single handler registration.
///
/// Unset fields leave the value from defaults or earlier overlays untouched.
/// `not` and `handle` are nullable, so setting them to `Some(None)` clears the
/// selector.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartialOptions {
    pub which: Option<u8>,
    pub distance: Option<f32>,
    pub not: Option<Option<String>>,
    pub handle: Option<Option<String>>,
    pub relative: Option<bool>,
    pub drop: Option<bool>,
    pub click: Option<bool>,
}

impl PartialOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn which(mut self, which: u8) -> Self {
        self.which = Some(which);
        self
    }

    pub fn distance(mut self, distance: f32) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn not(mut self, selector: impl Into<String>) -> Self {
        self.not = Some(Some(selector.into()));
        self
    }

    /// Clears the exclusion selector so that any element may start a drag.
    pub fn allow_all(mut self) -> Self {
        self.not = Some(None);
        self
    }

    pub fn handle(mut self, selector: impl Into<String>) -> Self {
        self.handle = Some(Some(selector.into()));
        self
    }

    pub fn relative(mut self, relative: bool) -> Self {
        self.relative = Some(relative);
        self
    }

    pub fn drop(mut self, drop: bool) -> Self {
        self.drop = Some(drop);
        self
    }

    pub fn click(mut self, click: bool) -> Self {
        self.click = Some(click);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = Options::default();
        assert_eq!(options.which, 1);
        assert_eq!(options.distance, 0.0);
        assert_eq!(options.not.as_deref(), Some(":input"));
        assert_eq!(options.handle, None);
        assert!(!options.relative);
        assert!(options.drop);
        assert!(!options.click);
    }

    #[test]
    fn later_overlays_win() {
        let first = PartialOptions::new().distance(5.0).which(3);
        let second = PartialOptions::new().which(2);
        let options = Options::merged([&first, &second]);
        assert_eq!(options.distance, 5.0);
        assert_eq!(options.which, 2);
        assert_eq!(options.not.as_deref(), Some(":input"));
    }

    #[test]
    fn overlay_can_clear_not_selector() {
        let options = Options::merged([&PartialOptions::new().allow_all()]);
        assert_eq!(options.not, None);
    }

    #[test]
    fn empty_overlay_leaves_defaults() {
        let overlay = PartialOptions::new();
        assert!(overlay.is_empty());
        assert_eq!(Options::merged([&overlay]), Options::default());
    }
}
