//! Synthetic drag events produced for callers.

use crate::nodes::input::gestures::GestureProperties;
use crate::nodes::input::{PointerButton, PointerEvent};
use dragkit_core::ElementId;
use dragkit_geometry::Point;
use smallvec::SmallVec;
use std::fmt;
use std::rc::Rc;

/// The four drag event types, in dispatch order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DragEventType {
    Init,
    Start,
    Drag,
    End,
}

impl DragEventType {
    pub const ALL: [DragEventType; 4] = [
        DragEventType::Init,
        DragEventType::Start,
        DragEventType::Drag,
        DragEventType::End,
    ];

    /// Types whose registrations make an element a drag handler. `draginit`
    /// only negotiates a session that one of these already claimed.
    pub const RESOLVED: [DragEventType; 3] = [
        DragEventType::Start,
        DragEventType::Drag,
        DragEventType::End,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DragEventType::Init => "draginit",
            DragEventType::Start => "dragstart",
            DragEventType::Drag => "drag",
            DragEventType::End => "dragend",
        }
    }

    /// Parses a registration suffix. Both `"start"` and `"dragstart"` name
    /// the same type; an empty suffix is plain `drag`.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        let name = suffix.strip_prefix("drag").unwrap_or(suffix);
        match name {
            "init" => Some(DragEventType::Init),
            "start" => Some(DragEventType::Start),
            "" => Some(DragEventType::Drag),
            "end" => Some(DragEventType::End),
            _ => None,
        }
    }
}

impl fmt::Display for DragEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event handed to drag handlers.
///
/// Only `target`, `page`, `button` and `meta_key` are copied from the pointer
/// event that caused it. `current_target` is always the tracked element.
#[derive(Clone, Debug, PartialEq)]
pub struct DragEvent {
    pub kind: DragEventType,
    pub target: Option<ElementId>,
    pub page: Option<Point>,
    pub button: Option<PointerButton>,
    pub meta_key: bool,
    pub current_target: ElementId,
}

impl DragEvent {
    pub fn new(kind: DragEventType, current_target: ElementId) -> Self {
        Self {
            kind,
            target: None,
            page: None,
            button: None,
            meta_key: false,
            current_target,
        }
    }

    pub(crate) fn from_pointer(
        kind: DragEventType,
        source: Option<&PointerEvent>,
        current_target: ElementId,
    ) -> Self {
        let mut event = Self::new(kind, current_target);
        if let Some(source) = source {
            event.target = Some(source.target);
            event.page = source.page;
            event.button = source.button;
            event.meta_key = source.meta_key;
        }
        event
    }
}

/// What a drag handler asks the gesture machinery to do next.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragResponse {
    /// Carry on with the defaults.
    #[default]
    Continue,
    /// Stop. From `draginit` this drops the whole session, from `dragstart` or
    /// `drag` it drops only the element the handler ran for.
    Cancel,
    /// From `draginit`: the elements to drag. From `dragstart`: the proxy
    /// element that later events stand for (first entry).
    Targets(SmallVec<[ElementId; 2]>),
}

impl DragResponse {
    pub fn target(element: ElementId) -> Self {
        DragResponse::Targets(smallvec::smallvec![element])
    }

    pub fn targets(elements: impl IntoIterator<Item = ElementId>) -> Self {
        DragResponse::Targets(elements.into_iter().collect())
    }

    pub fn is_cancel(&self) -> bool {
        matches!(self, DragResponse::Cancel)
    }
}

impl From<bool> for DragResponse {
    fn from(keep_going: bool) -> Self {
        if keep_going {
            DragResponse::Continue
        } else {
            DragResponse::Cancel
        }
    }
}

impl From<ElementId> for DragResponse {
    fn from(element: ElementId) -> Self {
        DragResponse::target(element)
    }
}

impl From<()> for DragResponse {
    fn from(_: ()) -> Self {
        DragResponse::Continue
    }
}

pub type DragHandler = Rc<dyn Fn(&DragEvent, &GestureProperties) -> DragResponse>;

/// Wraps a closure as a [`DragHandler`].
pub fn drag_handler<R>(
    handler: impl Fn(&DragEvent, &GestureProperties) -> R + 'static,
) -> DragHandler
where
    R: Into<DragResponse>,
{
    Rc::new(move |event: &DragEvent, props: &GestureProperties| {
        handler(event, props).into()
    })
}
