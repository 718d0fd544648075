use dragkit_core::ElementId;
use dragkit_geometry::Point;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Physical device that produced a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Back,
    Forward,
}

impl PointerButton {
    /// Classic button identity: 1 primary, 2 middle, 3 secondary.
    ///
    /// `Options::which` is expressed in these numbers, `0` meaning any button.
    pub fn which(self) -> u8 {
        match self {
            PointerButton::Primary => 1,
            PointerButton::Middle => 2,
            PointerButton::Secondary => 3,
            PointerButton::Back => 4,
            PointerButton::Forward => 5,
        }
    }

    /// Button named by a `which` number, `None` for `0` and unknown numbers.
    pub fn from_which(which: u8) -> Option<Self> {
        match which {
            1 => Some(PointerButton::Primary),
            2 => Some(PointerButton::Middle),
            3 => Some(PointerButton::Secondary),
            4 => Some(PointerButton::Back),
            5 => Some(PointerButton::Forward),
            _ => None,
        }
    }
}

/// Raw pointer event as delivered by the host toolkit.
///
/// `page` is absent when the host has no coordinates for the event, which is
/// the normal case for a touch end. Default handling is tracked through a
/// shared flag so that clones observe `consume()` made on any copy.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub source: PointerSource,
    pub target: ElementId,
    pub page: Option<Point>,
    pub button: Option<PointerButton>,
    pub meta_key: bool,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, target: ElementId, page: Point) -> Self {
        Self {
            kind,
            source: PointerSource::Mouse,
            target,
            page: Some(page),
            button: match kind {
                PointerEventKind::Down | PointerEventKind::Up => Some(PointerButton::Primary),
                PointerEventKind::Move | PointerEventKind::Cancel => None,
            },
            meta_key: false,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// A touch event. Touch has no button concept.
    pub fn touch(kind: PointerEventKind, target: ElementId, page: Option<Point>) -> Self {
        Self {
            source: PointerSource::Touch,
            page,
            button: None,
            ..Self::new(kind, target, Point::ZERO)
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = Some(button);
        self
    }

    pub fn with_meta_key(mut self, meta_key: bool) -> Self {
        self.meta_key = meta_key;
        self
    }

    pub fn is_touch(&self) -> bool {
        self.source == PointerSource::Touch
    }

    /// True for a release whose final position is unknown.
    ///
    /// Deltas computed from such an event would be garbage, so gesture state
    /// keeps its previous values instead.
    pub fn is_release_without_position(&self) -> bool {
        self.page.is_none() || (self.is_touch() && self.kind == PointerEventKind::Up)
    }

    /// Mark this event as handled, so the host skips its default action
    /// (scrolling or zooming for a touch start).
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn which_round_trips_for_standard_buttons() {
        assert_eq!(PointerButton::Primary.which(), 1);
        assert_eq!(PointerButton::Middle.which(), 2);
        assert_eq!(PointerButton::Secondary.which(), 3);
        assert_eq!(PointerButton::from_which(0), None);
        assert_eq!(PointerButton::from_which(3), Some(PointerButton::Secondary));
    }

    #[test]
    fn touch_end_is_release_without_position() {
        let end = PointerEvent::touch(PointerEventKind::Up, 1, Some(Point::new(4.0, 4.0)));
        assert!(end.is_release_without_position());

        let mouse_up = PointerEvent::new(PointerEventKind::Up, 1, Point::new(4.0, 4.0));
        assert!(!mouse_up.is_release_without_position());

        let touch_move = PointerEvent::touch(PointerEventKind::Move, 1, Some(Point::ZERO));
        assert!(!touch_move.is_release_without_position());
    }

    #[test]
    fn consumption_is_shared_between_clones() {
        let event = PointerEvent::touch(PointerEventKind::Down, 3, Some(Point::ZERO));
        let copy = event.clone();
        copy.consume();
        assert!(event.is_consumed());
        assert_eq!(event.button, None);
    }
}
