//! Public registration surface.
//!
//! `drag` either subscribes a handler to one of the drag event types or, with
//! no handler, triggers that event type on the element right away.

use crate::event::{DragEvent, DragEventType, DragHandler, DragResponse};
use crate::host::EventHost;
use crate::nodes::input::gestures::GestureProperties;
use crate::options::PartialOptions;
use dragkit_core::ElementId;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragError {
    UnknownEventType { name: String },
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragError::UnknownEventType { name } => {
                write!(f, "unknown drag event type `{name}`")
            }
        }
    }
}

impl std::error::Error for DragError {}

fn event_type(suffix: Option<&str>) -> Result<DragEventType, DragError> {
    let suffix = suffix.unwrap_or("");
    DragEventType::from_suffix(suffix).ok_or_else(|| DragError::UnknownEventType {
        name: if suffix.starts_with("drag") {
            suffix.to_string()
        } else {
            format!("drag{suffix}")
        },
    })
}

/// Subscribes `handler` to `drag<suffix>` on `element`, or triggers
/// `drag<suffix>` when `handler` is `None`.
///
/// A missing suffix means plain `drag`. Triggering returns the handler's
/// answer; subscribing returns `Ok(None)`.
pub fn drag<H>(
    host: &H,
    element: ElementId,
    suffix: Option<&str>,
    handler: Option<DragHandler>,
    options: PartialOptions,
) -> Result<Option<DragResponse>, DragError>
where
    H: EventHost + ?Sized,
{
    let kind = event_type(suffix)?;
    match handler {
        Some(handler) => {
            host.subscribe(element, kind, None, options, handler);
            Ok(None)
        }
        None => Ok(trigger(host, element, kind)),
    }
}

/// Delegated form of [`drag`]: the handler lives on `element` and applies to
/// descendants matching `selector`.
pub fn drag_delegate<H>(
    host: &H,
    element: ElementId,
    selector: &str,
    suffix: Option<&str>,
    handler: DragHandler,
    options: PartialOptions,
) -> Result<(), DragError>
where
    H: EventHost + ?Sized,
{
    let kind = event_type(suffix)?;
    host.subscribe(element, kind, Some(selector.to_string()), options, handler);
    Ok(())
}

/// Fires `kind` on `element` outside of any gesture.
pub fn trigger<H>(host: &H, element: ElementId, kind: DragEventType) -> Option<DragResponse>
where
    H: EventHost + ?Sized,
{
    let props = GestureProperties::at_rest(host, element);
    host.dispatch(element, &DragEvent::new(kind, element), &props)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_normalizes_to_drag_prefixed_type() {
        assert_eq!(event_type(None), Ok(DragEventType::Drag));
        assert_eq!(event_type(Some("start")), Ok(DragEventType::Start));
        assert_eq!(event_type(Some("dragend")), Ok(DragEventType::End));
    }

    #[test]
    fn unknown_suffix_reports_full_name() {
        let err = event_type(Some("over")).unwrap_err();
        assert_eq!(
            err,
            DragError::UnknownEventType {
                name: "dragover".to_string()
            }
        );
        assert_eq!(err.to_string(), "unknown drag event type `dragover`");
    }
}
