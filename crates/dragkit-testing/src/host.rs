//! In-memory host: an element tree with drag and click handlers.

use crate::selector::{self, SelectorSubject};
use dragkit_core::collections::map::HashSet;
use dragkit_core::{ElementId, ListenerScope};
use dragkit_foundation::{
    DragEvent, DragEventType, DragHandler, DragResponse, ElementTree, EventHost,
    GestureProperties, HandlerRegistration, PartialOptions,
};
use dragkit_geometry::Point;
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    Missing { id: ElementId },
    EmptySpec,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::Missing { id } => write!(f, "element {id} missing"),
            TreeError::EmptySpec => write!(f, "element spec has no tag"),
        }
    }
}

impl std::error::Error for TreeError {}

pub type ClickHandler = Rc<dyn Fn(ElementId)>;

#[derive(Clone)]
enum ClickListener {
    Handler(ClickHandler),
    SuppressOnce,
}

/// What happened to a simulated click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    pub handlers_run: usize,
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

#[derive(Clone)]
struct Subscription {
    selector: Option<String>,
    options: PartialOptions,
    handler: DragHandler,
}

struct ElementNode {
    tag: String,
    id: Option<String>,
    classes: SmallVec<[String; 2]>,
    parent: Option<ElementId>,
    offset: Point,
    position: Point,
    drag_handlers: IndexMap<DragEventType, Vec<Subscription>>,
    click_listeners: Vec<ClickListener>,
}

impl ElementNode {
    fn new(spec: &str, parent: Option<ElementId>) -> Result<Self, TreeError> {
        let (tag, id, classes) = parse_spec(spec)?;
        Ok(Self {
            tag,
            id,
            classes,
            parent,
            offset: Point::ZERO,
            position: Point::ZERO,
            drag_handlers: IndexMap::new(),
            click_listeners: Vec::new(),
        })
    }
}

impl SelectorSubject for ElementNode {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// `tag.class#id` shorthand, in any order after the tag.
fn parse_spec(spec: &str) -> Result<(String, Option<String>, SmallVec<[String; 2]>), TreeError> {
    let tag_len = spec.find(|c: char| c == '.' || c == '#').unwrap_or(spec.len());
    let tag = spec[..tag_len].trim();
    if tag.is_empty() {
        return Err(TreeError::EmptySpec);
    }

    let mut id = None;
    let mut classes = SmallVec::new();
    let mut rest = &spec[tag_len..];
    while let Some(marker) = rest.chars().next() {
        let body = &rest[1..];
        let len = body.find(|c: char| c == '.' || c == '#').unwrap_or(body.len());
        let name = &body[..len];
        if !name.is_empty() {
            if marker == '#' {
                id = Some(name.to_string());
            } else {
                classes.push(name.to_string());
            }
        }
        rest = &body[len..];
    }
    Ok((tag.to_ascii_lowercase(), id, classes))
}

/// Single-threaded element tree implementing the host traits.
///
/// Element `0` is the document root (`html`). Handlers are cloned out of the
/// tree before they run, so they may freely call back into the host.
pub struct TestHost {
    elements: RefCell<Vec<ElementNode>>,
    document_listeners: RefCell<HashSet<ListenerScope>>,
    text_selection: Cell<bool>,
    text_selection_changes: Cell<usize>,
    native_drag: Cell<bool>,
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHost {
    pub fn new() -> Self {
        let root = ElementNode {
            tag: "html".to_string(),
            id: None,
            classes: SmallVec::new(),
            parent: None,
            offset: Point::ZERO,
            position: Point::ZERO,
            drag_handlers: IndexMap::new(),
            click_listeners: Vec::new(),
        };
        Self {
            elements: RefCell::new(vec![root]),
            document_listeners: RefCell::new(HashSet::default()),
            text_selection: Cell::new(true),
            text_selection_changes: Cell::new(0),
            native_drag: Cell::new(true),
        }
    }

    pub fn root(&self) -> ElementId {
        0
    }

    /// Appends a child described by `spec` (for example `"li.item#first"`).
    pub fn append(&self, parent: ElementId, spec: &str) -> Result<ElementId, TreeError> {
        let mut elements = self.elements.borrow_mut();
        if parent >= elements.len() {
            return Err(TreeError::Missing { id: parent });
        }
        let node = ElementNode::new(spec, Some(parent))?;
        elements.push(node);
        Ok(elements.len() - 1)
    }

    /// Sets both the page offset and the position relative to the parent.
    pub fn place(&self, element: ElementId, offset: Point, position: Point) -> Result<(), TreeError> {
        self.with_node(element, |node| {
            node.offset = offset;
            node.position = position;
        })
    }

    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribes a bound (non-delegated) handler.
    pub fn on(
        &self,
        element: ElementId,
        kind: DragEventType,
        options: PartialOptions,
        handler: DragHandler,
    ) {
        self.subscribe(element, kind, None, options, handler);
    }

    pub fn on_click(&self, element: ElementId, handler: impl Fn(ElementId) + 'static) {
        let _ = self.with_node(element, |node| {
            node.click_listeners
                .push(ClickListener::Handler(Rc::new(handler)));
        });
    }

    /// Simulates a click on `element`, bubbling to the root until a listener
    /// stops propagation.
    pub fn click(&self, element: ElementId) -> ClickOutcome {
        let mut outcome = ClickOutcome::default();
        let mut current = Some(element);
        while let Some(node_id) = current {
            let listeners = self.take_click_listeners(node_id);
            for listener in listeners {
                match listener {
                    ClickListener::SuppressOnce => {
                        outcome.default_prevented = true;
                        outcome.propagation_stopped = true;
                        return outcome;
                    }
                    ClickListener::Handler(handler) => {
                        handler(element);
                        outcome.handlers_run += 1;
                    }
                }
            }
            current = self.parent(node_id);
        }
        outcome
    }

    pub fn has_document_listeners(&self) -> bool {
        !self.document_listeners.borrow().is_empty()
    }

    pub fn document_listener_count(&self) -> usize {
        self.document_listeners.borrow().len()
    }

    pub fn text_selection_enabled(&self) -> bool {
        self.text_selection.get()
    }

    /// Number of times text selection was actually toggled.
    pub fn text_selection_changes(&self) -> usize {
        self.text_selection_changes.get()
    }

    pub fn native_drag_enabled(&self) -> bool {
        self.native_drag.get()
    }

    fn with_node<R>(
        &self,
        element: ElementId,
        f: impl FnOnce(&mut ElementNode) -> R,
    ) -> Result<R, TreeError> {
        let mut elements = self.elements.borrow_mut();
        let node = elements
            .get_mut(element)
            .ok_or(TreeError::Missing { id: element })?;
        Ok(f(node))
    }

    /// Clones the click listeners of `element` to run them outside the borrow,
    /// consuming a pending one-shot suppressor.
    fn take_click_listeners(&self, element: ElementId) -> Vec<ClickListener> {
        self.with_node(element, |node| {
            let listeners = node.click_listeners.clone();
            if let Some(index) = node
                .click_listeners
                .iter()
                .position(|l| matches!(l, ClickListener::SuppressOnce))
            {
                node.click_listeners.remove(index);
            }
            listeners
        })
        .unwrap_or_default()
    }

    fn subscriptions(&self, element: ElementId, kind: DragEventType) -> Vec<Subscription> {
        self.elements
            .borrow()
            .get(element)
            .and_then(|node| node.drag_handlers.get(&kind))
            .cloned()
            .unwrap_or_default()
    }
}

impl ElementTree for TestHost {
    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.elements.borrow().get(element).and_then(|node| node.parent)
    }

    fn matches(&self, element: ElementId, selector: &str) -> bool {
        self.elements
            .borrow()
            .get(element)
            .is_some_and(|node| selector::matches(selector, node))
    }

    fn offset(&self, element: ElementId) -> Option<Point> {
        self.elements.borrow().get(element).map(|node| node.offset)
    }

    fn position(&self, element: ElementId) -> Option<Point> {
        self.elements.borrow().get(element).map(|node| node.position)
    }
}

impl EventHost for TestHost {
    fn registrations(
        &self,
        element: ElementId,
        kind: DragEventType,
    ) -> SmallVec<[HandlerRegistration; 1]> {
        self.subscriptions(element, kind)
            .into_iter()
            .map(|sub| HandlerRegistration {
                selector: sub.selector,
                options: sub.options,
            })
            .collect()
    }

    fn subscribe(
        &self,
        element: ElementId,
        kind: DragEventType,
        selector: Option<String>,
        options: PartialOptions,
        handler: DragHandler,
    ) {
        let subscription = Subscription {
            selector,
            options,
            handler,
        };
        if self
            .with_node(element, |node| {
                node.drag_handlers
                    .entry(kind)
                    .or_default()
                    .push(subscription);
            })
            .is_err()
        {
            log::warn!("subscribe on missing element {element}");
        }
    }

    /// Runs bound handlers and delegated handlers whose selector matches the
    /// current target, in subscription order.
    fn dispatch(
        &self,
        element: ElementId,
        event: &DragEvent,
        props: &GestureProperties,
    ) -> Option<DragResponse> {
        let mut first = None;
        for sub in self.subscriptions(element, event.kind) {
            let applies = match sub.selector.as_deref() {
                None => true,
                Some(selector) => self.matches(event.current_target, selector),
            };
            if !applies {
                continue;
            }
            let response = (sub.handler)(event, props);
            first.get_or_insert(response);
        }
        first
    }

    fn listen_document(&self, scope: ListenerScope) {
        self.document_listeners.borrow_mut().insert(scope);
    }

    fn unlisten_document(&self, scope: ListenerScope) {
        self.document_listeners.borrow_mut().remove(&scope);
    }

    fn set_text_selection(&self, enabled: bool) {
        if self.text_selection.replace(enabled) != enabled {
            self.text_selection_changes
                .set(self.text_selection_changes.get() + 1);
        }
    }

    fn set_native_drag(&self, enabled: bool) {
        self.native_drag.set(enabled);
    }

    fn suppress_next_click(&self, element: ElementId) {
        let _ = self.with_node(element, |node| {
            node.click_listeners.insert(0, ClickListener::SuppressOnce);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_shorthand_parses_tag_classes_and_id() {
        let host = TestHost::new();
        let li = host.append(host.root(), "li.item.selected#first").unwrap();
        assert!(host.matches(li, "li"));
        assert!(host.matches(li, ".item.selected"));
        assert!(host.matches(li, "#first"));
        assert_eq!(host.parent(li), Some(host.root()));
    }

    #[test]
    fn append_to_missing_parent_fails() {
        let host = TestHost::new();
        assert_eq!(host.append(42, "div"), Err(TreeError::Missing { id: 42 }));
        assert_eq!(host.append(host.root(), ".x"), Err(TreeError::EmptySpec));
    }

    #[test]
    fn closest_stops_before_context() {
        let host = TestHost::new();
        let list = host.append(host.root(), "ul.list").unwrap();
        let item = host.append(list, "li.item").unwrap();
        let label = host.append(item, "span").unwrap();
        assert_eq!(host.closest(label, ".item", list), Some(item));
        assert_eq!(host.closest(label, ".list", list), None);
    }

    #[test]
    fn click_suppressor_runs_before_existing_handlers_once() {
        let host = TestHost::new();
        let button = host.append(host.root(), "div").unwrap();
        host.on_click(button, |_| {});

        host.suppress_next_click(button);
        let suppressed = host.click(button);
        assert!(suppressed.default_prevented);
        assert!(suppressed.propagation_stopped);
        assert_eq!(suppressed.handlers_run, 0);

        let normal = host.click(button);
        assert!(!normal.default_prevented);
        assert_eq!(normal.handlers_run, 1);
    }

    #[test]
    fn text_selection_changes_count_real_toggles() {
        let host = TestHost::new();
        host.set_text_selection(false);
        host.set_text_selection(false);
        host.set_text_selection(true);
        assert!(host.text_selection_enabled());
        assert_eq!(host.text_selection_changes(), 2);
    }
}
