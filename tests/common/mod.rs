//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use panestack::{
    AddPanelOptions, ComponentRegistry, HostSurface, InitParams, PaneHandle, PanePart, PaneStack,
    PaneStackOptions, Rect,
};

/// Shared call log for asserting renderer lifecycle ordering
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Install an env-filtered subscriber so `RUST_LOG=debug cargo test` shows
/// the crate's tracing output
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Renderer part that records its lifecycle into the shared log.
///
/// Entries have the shape `role:event:panel-id`; the panel id is `?` until
/// `init` has run (layout may legitimately arrive first).
pub struct RecordingPart {
    role: &'static str,
    id: Option<String>,
    state: Option<Value>,
    log: CallLog,
}

impl RecordingPart {
    pub fn new(role: &'static str, log: CallLog) -> Self {
        Self {
            role,
            id: None,
            state: None,
            log,
        }
    }

    fn record(&self, event: &str) {
        let id = self.id.as_deref().unwrap_or("?");
        self.log
            .borrow_mut()
            .push(format!("{}:{}:{}", self.role, event, id));
    }
}

impl PanePart for RecordingPart {
    fn element(&self) -> &dyn Any {
        self
    }

    fn init(&mut self, params: InitParams) {
        self.id = Some(params.id);
        self.state = params.state;
        self.record("init");
    }

    fn layout(&mut self, _width: f32, _height: f32) {
        self.record("layout");
    }

    fn to_json(&self) -> Option<Value> {
        self.state.clone()
    }

    fn dispose(&mut self) {
        self.record("dispose");
    }
}

/// Registry with a `text` body component and a `custom` header component,
/// both recording into `log`
pub fn registry(log: &CallLog) -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    let body_log = Rc::clone(log);
    registry.register_body("text", move || {
        Box::new(RecordingPart::new("body", Rc::clone(&body_log)))
    });
    let header_log = Rc::clone(log);
    registry.register_header("custom", move || {
        Box::new(RecordingPart::new("header", Rc::clone(&header_log)))
    });
    registry
}

pub fn stack(log: &CallLog) -> PaneStack {
    PaneStack::new(PaneStackOptions {
        registry: registry(log),
        ..Default::default()
    })
}

pub fn add(stack: &mut PaneStack, id: &str, title: &str) -> PaneHandle {
    stack
        .add_panel(AddPanelOptions::new(id, "text", title))
        .expect("add_panel should succeed")
}

/// Ids of all panels in visual order
pub fn ids(stack: &PaneStack) -> Vec<String> {
    stack
        .get_panels()
        .iter()
        .map(|handle| handle.id().to_string())
        .collect()
}

/// Only the `init` entries from the log, in recording order
pub fn init_entries(log: &CallLog) -> Vec<String> {
    log.borrow()
        .iter()
        .filter(|entry| entry.contains(":init:"))
        .cloned()
        .collect()
}

/// Host surface with a fixed content rect
pub struct FixedHost(pub Option<Rect>);

impl HostSurface for FixedHost {
    fn content_rect(&self) -> Option<Rect> {
        self.0
    }
}
