//! Handler resolution against an in-memory tree.

use dragkit_foundation::resolve;
use dragkit_testing::prelude::*;

#[test]
fn nearest_ancestor_with_handler_wins() {
    let host = TestHost::new();
    let outer = host.append(host.root(), "section").unwrap();
    let panel = host.append(outer, "div.panel").unwrap();
    let label = host.append(panel, "span").unwrap();
    let recorder = Recorder::new();
    host.on(outer, DragEventType::Start, PartialOptions::new(), recorder.handler());
    host.on(panel, DragEventType::Start, PartialOptions::new(), recorder.handler());

    let found = resolve(&host, label).expect("panel carries a handler");
    assert_eq!(found.handler_element, panel);
    assert_eq!(found.target_element, label);
}

#[test]
fn options_merge_across_handler_types_on_same_element() {
    let host = TestHost::new();
    let a = host.append(host.root(), "div").unwrap();
    let child = host.append(a, "span").unwrap();
    let recorder = Recorder::new();
    host.on(a, DragEventType::Start, PartialOptions::new().distance(5.0), recorder.handler());
    host.on(a, DragEventType::Drag, PartialOptions::new().which(2), recorder.handler());

    let found = resolve(&host, child).unwrap();
    let mut expected = Options::default();
    expected.distance = 5.0;
    expected.which = 2;
    assert_eq!(found.options, expected);
}

#[test]
fn later_handler_types_overwrite_earlier_keys() {
    let host = TestHost::new();
    let a = host.append(host.root(), "div").unwrap();
    let recorder = Recorder::new();
    host.on(a, DragEventType::Start, PartialOptions::new().distance(1.0), recorder.handler());
    host.on(a, DragEventType::End, PartialOptions::new().distance(9.0), recorder.handler());

    assert_eq!(resolve(&host, a).unwrap().options.distance, 9.0);
}

#[test]
fn only_the_winning_ancestor_contributes_options() {
    let host = TestHost::new();
    let outer = host.append(host.root(), "div").unwrap();
    let inner = host.append(outer, "div").unwrap();
    let recorder = Recorder::new();
    host.on(outer, DragEventType::Drag, PartialOptions::new().click(true), recorder.handler());
    host.on(inner, DragEventType::Drag, PartialOptions::new(), recorder.handler());

    let found = resolve(&host, inner).unwrap();
    assert_eq!(found.handler_element, inner);
    assert!(!found.options.click);
}

#[test]
fn delegated_handler_targets_matching_descendant() {
    let host = TestHost::new();
    let list = host.append(host.root(), "ul").unwrap();
    let item = host.append(list, "li.item").unwrap();
    let text = host.append(item, "span").unwrap();
    let recorder = Recorder::new();
    dragkit_foundation::drag_delegate(
        &host,
        list,
        ".item",
        Some("start"),
        recorder.handler(),
        PartialOptions::new(),
    )
    .unwrap();

    let found = resolve(&host, text).unwrap();
    assert_eq!(found.handler_element, list);
    assert_eq!(found.target_element, item);
}

#[test]
fn unmatched_delegation_keeps_walking_up() {
    let host = TestHost::new();
    let page = host.append(host.root(), "main").unwrap();
    let list = host.append(page, "ul").unwrap();
    let header = host.append(list, "li.header").unwrap();
    let recorder = Recorder::new();
    dragkit_foundation::drag_delegate(
        &host,
        list,
        ".item",
        None,
        recorder.handler(),
        PartialOptions::new(),
    )
    .unwrap();
    host.on(page, DragEventType::Drag, PartialOptions::new(), recorder.handler());

    let found = resolve(&host, header).unwrap();
    assert_eq!(found.handler_element, page);
    assert_eq!(found.target_element, header);
}

#[test]
fn draginit_registration_does_not_claim_the_press() {
    let host = TestHost::new();
    let parent = host.append(host.root(), "div").unwrap();
    let child = host.append(parent, "span").unwrap();
    let recorder = Recorder::new();
    host.on(parent, DragEventType::Start, PartialOptions::new().distance(4.0), recorder.handler());
    host.on(
        child,
        DragEventType::Init,
        PartialOptions::new().distance(1.0),
        recorder.handler(),
    );

    let found = resolve(&host, child).unwrap();
    assert_eq!(found.handler_element, parent);
    assert_eq!(found.target_element, child);
    assert_eq!(found.options.distance, 4.0);

    let lone = host.append(host.root(), "div").unwrap();
    host.on(lone, DragEventType::Init, PartialOptions::new(), recorder.handler());
    assert_eq!(resolve(&host, lone), None);
}

#[test]
fn draginit_options_are_not_merged() {
    let host = TestHost::new();
    let a = host.append(host.root(), "div").unwrap();
    let recorder = Recorder::new();
    host.on(a, DragEventType::Drag, PartialOptions::new(), recorder.handler());
    host.on(a, DragEventType::Init, PartialOptions::new().which(3), recorder.handler());

    assert_eq!(resolve(&host, a).unwrap().options.which, 1);
}

#[test]
fn no_handler_anywhere_resolves_to_none() {
    let host = TestHost::new();
    let a = host.append(host.root(), "div").unwrap();
    let b = host.append(a, "span").unwrap();
    assert_eq!(resolve(&host, b), None);
}
