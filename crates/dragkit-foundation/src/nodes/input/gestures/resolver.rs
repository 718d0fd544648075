//! Handler resolution: finds the element whose drag handlers apply to a
//! pointer target and merges their options.

use crate::event::DragEventType;
use crate::host::{EventHost, HandlerRegistration};
use crate::options::{Options, PartialOptions};
use dragkit_core::ElementId;
use smallvec::SmallVec;

/// Outcome of resolving drag handlers for a pointer target.
#[derive(Clone, Debug, PartialEq)]
pub struct HandlerMatch {
    /// Logical element being dragged. For a delegated registration this is
    /// the element matching the delegation selector.
    pub target_element: ElementId,
    /// Element holding the subscription.
    pub handler_element: ElementId,
    /// Defaults overlaid with every matching registration on
    /// `handler_element`, in `dragstart`, `drag`, `dragend` order.
    pub options: Options,
}

/// Walks from `original_target` towards the root and returns the nearest
/// element carrying a drag handler that applies to it.
///
/// Resolution is never cached: registrations may change between presses.
pub fn resolve<H>(host: &H, original_target: ElementId) -> Option<HandlerMatch>
where
    H: EventHost + ?Sized,
{
    let mut current = Some(original_target);
    while let Some(handler_element) = current {
        if let Some(found) = match_at(host, original_target, handler_element) {
            return Some(found);
        }
        current = host.parent(handler_element);
    }
    None
}

fn match_at<H>(host: &H, original_target: ElementId, handler_element: ElementId) -> Option<HandlerMatch>
where
    H: EventHost + ?Sized,
{
    let mut target_element = None;
    let mut overlays: SmallVec<[PartialOptions; 4]> = SmallVec::new();

    for kind in DragEventType::RESOLVED {
        for registration in host.registrations(handler_element, kind) {
            let Some(candidate) =
                registration_target(host, original_target, handler_element, &registration)
            else {
                continue;
            };
            target_element.get_or_insert(candidate);
            overlays.push(registration.options);
        }
    }

    target_element.map(|target_element| HandlerMatch {
        target_element,
        handler_element,
        options: Options::merged(&overlays),
    })
}

/// Element a registration would drag for a press on `original_target`, or
/// `None` if its delegation selector does not match anything between the two.
fn registration_target<H>(
    host: &H,
    original_target: ElementId,
    handler_element: ElementId,
    registration: &HandlerRegistration,
) -> Option<ElementId>
where
    H: EventHost + ?Sized,
{
    match registration.selector.as_deref() {
        None => Some(original_target),
        Some(selector) => host.closest(original_target, selector, handler_element),
    }
}
