//! Registration surface and the process-wide dispatcher.

use dragkit_foundation::{
    dispatch_document_event, drag, drag_handler, resolve, with_document_dispatcher, DragError,
    DragEventType, DragResponse, EventHost, PartialOptions, Point, PointerEvent,
    PointerEventKind,
};
use dragkit_testing::{Recorder, TestHost};

#[test]
fn drag_with_handler_subscribes_with_options() {
    let host = TestHost::new();
    let el = host.append(host.root(), "div").unwrap();
    let recorder = Recorder::new();

    let result = drag(
        &host,
        el,
        Some("start"),
        Some(recorder.handler()),
        PartialOptions::new().distance(3.0),
    );
    assert_eq!(result, Ok(None));

    let registrations = host.registrations(el, DragEventType::Start);
    assert_eq!(registrations.len(), 1);
    assert_eq!(registrations[0].selector, None);
    assert_eq!(registrations[0].options.distance, Some(3.0));
    assert_eq!(resolve(&host, el).unwrap().options.distance, 3.0);
}

#[test]
fn drag_without_suffix_means_plain_drag() {
    let host = TestHost::new();
    let el = host.append(host.root(), "div").unwrap();
    drag(&host, el, None, Some(Recorder::new().handler()), PartialOptions::new()).unwrap();
    assert_eq!(host.registrations(el, DragEventType::Drag).len(), 1);
}

#[test]
fn drag_without_handler_triggers_the_event() {
    let host = TestHost::new();
    let el = host.append(host.root(), "div").unwrap();
    host.place(el, Point::new(7.0, 8.0), Point::ZERO).unwrap();
    let recorder = Recorder::new();
    host.on(
        el,
        DragEventType::End,
        PartialOptions::new(),
        recorder.handler_with(|_, _| DragResponse::Cancel),
    );

    let result = drag(&host, el, Some("dragend"), None, PartialOptions::new());
    assert_eq!(result, Ok(Some(DragResponse::Cancel)));

    let recorded = recorder.last().unwrap();
    assert_eq!(recorded.kind(), DragEventType::End);
    assert_eq!(recorded.current_target(), el);
    assert_eq!(recorded.props.original, Point::new(7.0, 8.0));
    assert_eq!(recorded.props.delta, None);
}

#[test]
fn triggering_without_subscribers_returns_none() {
    let host = TestHost::new();
    let el = host.append(host.root(), "div").unwrap();
    assert_eq!(drag(&host, el, Some("init"), None, PartialOptions::new()), Ok(None));
}

#[test]
fn unknown_suffix_is_rejected() {
    let host = TestHost::new();
    let el = host.append(host.root(), "div").unwrap();
    let err = drag(
        &host,
        el,
        Some("over"),
        Some(drag_handler(|_, _| ())),
        PartialOptions::new(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        DragError::UnknownEventType {
            name: "dragover".to_string()
        }
    );
    assert!(host.registrations(el, DragEventType::Drag).is_empty());
}

#[test]
fn document_dispatcher_runs_a_whole_gesture() {
    let host = TestHost::new();
    let el = host.append(host.root(), "div").unwrap();
    let recorder = Recorder::new();
    for kind in DragEventType::ALL {
        host.on(el, kind, PartialOptions::new(), recorder.handler());
    }

    dispatch_document_event(
        &host,
        &PointerEvent::new(PointerEventKind::Down, el, Point::new(0.0, 0.0)),
    );
    assert_eq!(with_document_dispatcher(|d| d.is_active()), Some(true));

    dispatch_document_event(
        &host,
        &PointerEvent::new(PointerEventKind::Move, el, Point::new(2.0, 2.0)),
    );
    dispatch_document_event(
        &host,
        &PointerEvent::new(PointerEventKind::Up, el, Point::new(2.0, 2.0)),
    );

    use DragEventType::{Drag, End, Init, Start};
    assert_eq!(recorder.kinds(), vec![Init, Start, Drag, End]);
    assert_eq!(with_document_dispatcher(|d| d.is_active()), Some(false));
    assert_eq!(host.document_listener_count(), 0);
}
