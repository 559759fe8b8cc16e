//! Pane wrapper - binds a header and a body renderer into one unit
//!
//! A pane is the addressable unit of the stack: identity, title, caller
//! params, size hints, and the expansion flag live here; the renderer parts
//! only receive them. The pane exclusively owns its renderer instances and
//! their disposal; the stack exclusively owns the pane's membership.

mod header;

pub use header::DefaultHeader;

use std::any::Any;
use std::cell::Cell;
use std::rc::{Rc, Weak};

use serde_json::Value;

use crate::component::{InitParams, PanePart, Params};
use crate::serialization::ViewData;

/// Everything needed to (re)construct a pane, minus the renderer instances
#[derive(Debug, Clone, Default)]
pub struct PaneDescriptor {
    pub id: String,
    pub component: String,
    pub header_component: Option<String>,
    pub title: String,
    pub params: Params,
    pub state: Option<Value>,
    pub is_expanded: bool,
    pub minimum_size: Option<f32>,
    pub maximum_size: Option<f32>,
}

/// Control surface handed to renderers and returned from stack lookups.
///
/// Holds weak references to the pane's shared state cells: once the pane is
/// gone every accessor degrades to a defined no-op or default, which is
/// also what makes stale removal handles harmless.
#[derive(Debug, Clone)]
pub struct PaneHandle {
    id: String,
    expanded: Weak<Cell<bool>>,
    last_layout: Weak<Cell<(f32, f32)>>,
}

impl PaneHandle {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the pane behind this handle still exists
    pub fn is_alive(&self) -> bool {
        self.expanded.strong_count() > 0
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
            .upgrade()
            .map(|cell| cell.get())
            .unwrap_or(false)
    }

    /// Set the expansion flag. Returns whether the pane was still alive.
    pub fn set_expanded(&self, expanded: bool) -> bool {
        match self.expanded.upgrade() {
            Some(cell) => {
                cell.set(expanded);
                true
            }
            None => false,
        }
    }

    /// Negate the expansion flag. Returns whether the pane was still alive.
    pub fn toggle_expanded(&self) -> bool {
        match self.expanded.upgrade() {
            Some(cell) => {
                cell.set(!cell.get());
                true
            }
            None => false,
        }
    }

    /// Latest (width, height) this pane was laid out at, if any yet
    pub fn last_layout(&self) -> Option<(f32, f32)> {
        self.last_layout.upgrade().map(|cell| cell.get())
    }
}

/// One pane in the stack: header part + body part + addressable state
pub struct Pane {
    descriptor: PaneDescriptor,
    expanded: Rc<Cell<bool>>,
    last_layout: Rc<Cell<(f32, f32)>>,
    header: Box<dyn PanePart>,
    body: Box<dyn PanePart>,
    initialized: bool,
    disposed: bool,
}

impl Pane {
    pub(crate) fn new(
        descriptor: PaneDescriptor,
        header: Box<dyn PanePart>,
        body: Box<dyn PanePart>,
    ) -> Self {
        let expanded = Rc::new(Cell::new(descriptor.is_expanded));
        Self {
            descriptor,
            expanded,
            last_layout: Rc::new(Cell::new((0.0, 0.0))),
            header,
            body,
            initialized: false,
            disposed: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.descriptor.id
    }

    pub fn title(&self) -> &str {
        &self.descriptor.title
    }

    pub fn component(&self) -> &str {
        &self.descriptor.component
    }

    pub fn header_component(&self) -> Option<&str> {
        self.descriptor.header_component.as_deref()
    }

    pub fn params(&self) -> &Params {
        &self.descriptor.params
    }

    pub fn minimum_size(&self) -> Option<f32> {
        self.descriptor.minimum_size
    }

    pub fn maximum_size(&self) -> Option<f32> {
        self.descriptor.maximum_size
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded.get()
    }

    pub fn set_expanded(&self, expanded: bool) {
        self.expanded.set(expanded);
    }

    /// Weak control surface for this pane
    pub fn handle(&self) -> PaneHandle {
        PaneHandle {
            id: self.descriptor.id.clone(),
            expanded: Rc::downgrade(&self.expanded),
            last_layout: Rc::downgrade(&self.last_layout),
        }
    }

    /// Root node of the header renderer, for host mounting
    pub fn header_element(&self) -> &dyn Any {
        self.header.element()
    }

    /// Root node of the body renderer, for host mounting
    pub fn body_element(&self) -> &dyn Any {
        self.body.element()
    }

    /// Initialize both renderer parts, header first
    pub(crate) fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        let params = InitParams {
            id: self.descriptor.id.clone(),
            title: self.descriptor.title.clone(),
            params: self.descriptor.params.clone(),
            state: self.descriptor.state.clone(),
            is_expanded: self.expanded.get(),
            minimum_size: self.descriptor.minimum_size,
            maximum_size: self.descriptor.maximum_size,
            handle: self.handle(),
        };
        self.header.init(params.clone());
        self.body.init(params);
        tracing::debug!(id = %self.descriptor.id, "pane initialized");
    }

    pub(crate) fn layout(&mut self, width: f32, height: f32) {
        self.last_layout.set((width, height));
        self.header.layout(width, height);
        self.body.layout(width, height);
    }

    pub(crate) fn update(&mut self, params: Params) {
        self.descriptor.params = params;
        self.header.update(&self.descriptor.params);
        self.body.update(&self.descriptor.params);
    }

    pub(crate) fn click_header(&mut self) {
        self.header.clicked();
    }

    /// Minimal descriptor needed to reconstruct an equivalent pane.
    ///
    /// Renderer state comes from the live body; a body that reports none
    /// falls back to the state this pane was restored from, so serializing
    /// before a deferred init still round-trips losslessly.
    pub(crate) fn view_data(&self) -> ViewData {
        ViewData {
            id: self.descriptor.id.clone(),
            component: self.descriptor.component.clone(),
            title: self.descriptor.title.clone(),
            header_component: self.descriptor.header_component.clone(),
            params: self.descriptor.params.clone(),
            state: self
                .body
                .to_json()
                .or_else(|| self.descriptor.state.clone()),
            extra: Params::new(),
        }
    }

    pub(crate) fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.header.dispose();
        self.body.dispose();
        tracing::debug!(id = %self.descriptor.id, "pane disposed");
    }
}

impl Drop for Pane {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Pane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pane")
            .field("id", &self.descriptor.id)
            .field("component", &self.descriptor.component)
            .field("expanded", &self.expanded.get())
            .field("initialized", &self.initialized)
            .finish()
    }
}
