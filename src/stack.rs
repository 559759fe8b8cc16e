//! Pane stack - the container-level controller
//!
//! Single point of truth for pane membership, ordering, geometry
//! propagation, and serialization. The pane sequence and the split view's
//! view list always have the same length and order; every operation that
//! changes one changes the other within the same call.

use std::any::Any;
use std::collections::HashSet;
use std::fmt;

use crate::component::{ComponentRegistry, Params};
use crate::error::PaneStackError;
use crate::event::{EventEmitter, Subscription};
use crate::geometry::{Orientation, Rect};
use crate::pane::{Pane, PaneDescriptor, PaneHandle};
use crate::serialization::{SerializedPaneStack, SerializedView};
use crate::splitview::{Sizing, SplitView};

/// Payload of [`PaneStack::on_did_layout_change`] notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutChanged;

/// Measurement surface of the element hosting the stack.
///
/// `content_rect` returns `None` while the host is detached from its render
/// tree; [`PaneStack::resize_to_fit`] treats that as a silent no-op.
pub trait HostSurface {
    fn content_rect(&self) -> Option<Rect>;
}

/// Construction-time configuration, captured by value.
///
/// Registry changes after construction require an explicit
/// [`PaneStack::set_registry`] call; they are never picked up implicitly.
#[derive(Default)]
pub struct PaneStackOptions {
    pub orientation: Orientation,
    pub registry: ComponentRegistry,
    pub host: Option<Box<dyn HostSurface>>,
}

/// Descriptor for [`PaneStack::add_panel`]
#[derive(Debug, Clone, Default)]
pub struct AddPanelOptions {
    pub id: String,
    pub component: String,
    pub title: String,
    /// Absence selects the built-in default header
    pub header_component: Option<String>,
    pub params: Params,
    pub is_expanded: bool,
    pub minimum_size: Option<f32>,
    pub maximum_size: Option<f32>,
    /// Explicit pixel size; `None` distributes remaining space evenly
    pub size: Option<f32>,
    /// Insertion index; `None` appends
    pub index: Option<usize>,
}

impl AddPanelOptions {
    pub fn new(
        id: impl Into<String>,
        component: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            component: component.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    fn into_descriptor(self) -> (PaneDescriptor, Option<f32>, Option<usize>) {
        let descriptor = PaneDescriptor {
            id: self.id,
            component: self.component,
            header_component: self.header_component,
            title: self.title,
            params: self.params,
            state: None,
            is_expanded: self.is_expanded,
            minimum_size: self.minimum_size,
            maximum_size: self.maximum_size,
        };
        (descriptor, self.size, self.index)
    }
}

/// An ordered stack of collapsible panes laid out along one axis
pub struct PaneStack {
    orientation: Orientation,
    registry: ComponentRegistry,
    host: Option<Box<dyn HostSurface>>,
    panes: Vec<Pane>,
    split_view: SplitView,
    /// Container (width, height) from the most recent `layout` call
    last_layout: Option<(f32, f32)>,
    /// Pane ids whose init is queued for the next flush, in visual order
    pending_inits: Vec<String>,
    layout_changed: EventEmitter<LayoutChanged>,
    focused: Option<String>,
    disposed: bool,
}

impl PaneStack {
    pub fn new(options: PaneStackOptions) -> Self {
        Self {
            orientation: options.orientation,
            registry: options.registry,
            host: options.host,
            panes: Vec::new(),
            split_view: SplitView::new(options.orientation),
            last_layout: None,
            pending_inits: Vec::new(),
            layout_changed: EventEmitter::new(),
            focused: None,
            disposed: false,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn panel_count(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Sum of all pane minimums along the layout axis
    pub fn minimum_size(&self) -> f32 {
        self.split_view.minimum_size()
    }

    /// Sum of all pane maximums along the layout axis
    pub fn maximum_size(&self) -> f32 {
        self.split_view.maximum_size()
    }

    /// Replace the component registry for subsequent constructions.
    ///
    /// Existing panes keep their renderers; only later `add_panel` and
    /// `from_json` calls resolve against the new registry.
    pub fn set_registry(&mut self, registry: ComponentRegistry) {
        self.registry = registry;
    }

    /// Subscribe to layout-changed notifications (membership, reorder,
    /// resize, and document restore all raise one)
    pub fn on_did_layout_change(
        &mut self,
        listener: impl FnMut(&LayoutChanged) + 'static,
    ) -> Subscription {
        self.layout_changed.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.layout_changed.unsubscribe(subscription);
    }

    /// Construct renderers for a new panel and insert it.
    ///
    /// Both renderers are resolved before any state changes, so a
    /// resolution failure leaves no partially-constructed panel behind.
    /// The returned handle doubles as the disposal handle for
    /// [`Self::remove_panel`].
    pub fn add_panel(&mut self, options: AddPanelOptions) -> Result<PaneHandle, PaneStackError> {
        if self.disposed {
            return Err(PaneStackError::Disposed);
        }
        if self.index_of(&options.id).is_some() {
            return Err(PaneStackError::DuplicateId(options.id));
        }

        let (descriptor, size, index) = options.into_descriptor();
        let body = self
            .registry
            .resolve_body(&descriptor.component, &descriptor.id)?;
        let header = self
            .registry
            .resolve_header(descriptor.header_component.as_deref(), &descriptor.id)?;

        let sizing = match size {
            Some(px) => Sizing::Pixels(px),
            None => Sizing::Distribute,
        };
        let index = self.split_view.add_view(
            sizing,
            descriptor.minimum_size,
            descriptor.maximum_size,
            index,
        );

        let pane = Pane::new(descriptor, header, body);
        let handle = pane.handle();
        self.panes.insert(index, pane);
        self.panes[index].init();

        tracing::debug!(id = handle.id(), index, "panel added");
        self.apply_view_sizes();
        self.layout_changed.emit(&LayoutChanged);
        Ok(handle)
    }

    /// Remove a panel by handle. Removing an already-removed or foreign
    /// panel is silently ignored; membership removal is idempotent.
    pub fn remove_panel(&mut self, handle: &PaneHandle) {
        if self.disposed {
            tracing::warn!(id = handle.id(), "remove_panel on a disposed stack ignored");
            return;
        }
        let Some(index) = self.index_of(handle.id()) else {
            tracing::debug!(id = handle.id(), "remove_panel for unknown panel ignored");
            return;
        };

        self.split_view.remove_view(index);
        let pane = self.panes.remove(index);
        if self.focused.as_deref() == Some(handle.id()) {
            self.focused = None;
        }
        drop(pane);

        tracing::debug!(id = handle.id(), index, "panel removed");
        self.apply_view_sizes();
        self.layout_changed.emit(&LayoutChanged);
    }

    /// Reorder panes: the pane at `from` lands at `to`, identity and
    /// renderer instances untouched. All-or-nothing: out-of-range indices
    /// change nothing.
    pub fn move_panel(&mut self, from: usize, to: usize) {
        if self.disposed {
            return;
        }
        if from >= self.panes.len() || to >= self.panes.len() {
            tracing::warn!(from, to, count = self.panes.len(), "move_panel out of range ignored");
            return;
        }

        self.split_view.move_view(from, to);
        if from != to {
            let pane = self.panes.remove(from);
            self.panes.insert(to, pane);
        }

        tracing::debug!(from, to, "panel moved");
        self.layout_changed.emit(&LayoutChanged);
    }

    /// First panel with the given id, if any
    pub fn get_panel(&self, id: &str) -> Option<PaneHandle> {
        self.panes
            .iter()
            .find(|pane| pane.id() == id)
            .map(Pane::handle)
    }

    /// All panel handles in visual order
    pub fn get_panels(&self) -> Vec<PaneHandle> {
        self.panes.iter().map(Pane::handle).collect()
    }

    /// Apply a container size. This is the only place the orientation maps
    /// (width, height) to the split view's along/across pair.
    pub fn layout(&mut self, width: f32, height: f32) {
        if self.disposed {
            return;
        }
        self.last_layout = Some((width, height));
        let (along, across) = self.orientation.split(width, height);
        self.split_view.layout(along, across);
        self.apply_view_sizes();
        self.layout_changed.emit(&LayoutChanged);
    }

    /// Measure the host surface and re-layout to its content box.
    /// No-op while the stack has no host or the host is detached.
    pub fn resize_to_fit(&mut self) {
        let Some(rect) = self.host.as_ref().and_then(|host| host.content_rect()) else {
            tracing::debug!("resize_to_fit without an attached host ignored");
            return;
        };
        let (width, height) = rect.size();
        self.layout(width, height);
    }

    /// Serialize the stack in visual order. Sizes are queried per-index
    /// from the split view, never cached on the pane.
    pub fn to_json(&self) -> SerializedPaneStack {
        SerializedPaneStack {
            size: self.split_view.size(),
            views: self
                .panes
                .iter()
                .enumerate()
                .map(|(index, pane)| SerializedView {
                    size: self.split_view.get_view_size(index).unwrap_or(0.0),
                    expanded: pane.is_expanded(),
                    minimum_size: pane.minimum_size(),
                    maximum_size: pane.maximum_size(),
                    data: pane.view_data(),
                })
                .collect(),
        }
    }

    /// Replace the whole stack with the panes described by `document`.
    ///
    /// The new generation - renderers, panes, split view - is fully
    /// constructed before the old one is dropped, so a resolution failure
    /// or duplicate id leaves the previous layout live and untouched.
    ///
    /// With `defer_component_layout` the per-pane `init` calls are queued
    /// instead of run synchronously; the host drains them with
    /// [`Self::flush_pending_inits`] on a later scheduler turn, after its
    /// render tree has settled enough for renderers to measure themselves.
    pub fn from_json(
        &mut self,
        document: SerializedPaneStack,
        defer_component_layout: bool,
    ) -> Result<(), PaneStackError> {
        if self.disposed {
            return Err(PaneStackError::Disposed);
        }

        let mut seen = HashSet::new();
        for view in &document.views {
            if !seen.insert(view.data.id.as_str()) {
                return Err(PaneStackError::DuplicateId(view.data.id.clone()));
            }
        }

        let mut new_panes = Vec::with_capacity(document.views.len());
        let mut new_split = SplitView::new(self.orientation);
        for view in &document.views {
            let descriptor = view.to_descriptor();
            let body = self
                .registry
                .resolve_body(&descriptor.component, &descriptor.id)?;
            let header = self
                .registry
                .resolve_header(descriptor.header_component.as_deref(), &descriptor.id)?;
            new_split.add_view(
                Sizing::Pixels(view.size),
                descriptor.minimum_size,
                descriptor.maximum_size,
                None,
            );
            new_panes.push(Pane::new(descriptor, header, body));
        }

        // Generation swap: the previous panes and split view are disposed
        // here, only after the replacement is fully constructed. Any init
        // batch still pending from an earlier deferred restore is stale
        // now and discarded with them.
        self.pending_inits.clear();
        self.focused = None;
        self.panes = new_panes;
        self.split_view = new_split;

        match self.last_layout {
            Some((width, height)) => {
                let (along, across) = self.orientation.split(width, height);
                self.split_view.layout(along, across);
            }
            None => self.split_view.layout(document.size, 0.0),
        }
        self.apply_view_sizes();

        if defer_component_layout {
            self.pending_inits = self.panes.iter().map(|pane| pane.id().to_string()).collect();
        } else {
            for pane in &mut self.panes {
                pane.init();
            }
        }

        tracing::debug!(
            panels = self.panes.len(),
            deferred = defer_component_layout,
            "stack restored from document"
        );
        self.layout_changed.emit(&LayoutChanged);
        Ok(())
    }

    pub fn has_pending_inits(&self) -> bool {
        !self.pending_inits.is_empty()
    }

    /// Run the init batch queued by a deferred `from_json`, in document
    /// order. Panes removed since queueing are skipped.
    pub fn flush_pending_inits(&mut self) {
        if self.pending_inits.is_empty() {
            return;
        }
        let ids = std::mem::take(&mut self.pending_inits);
        for id in ids {
            if let Some(index) = self.index_of(&id) {
                self.panes[index].init();
            }
        }
    }

    /// Discard a queued init batch without running it
    pub fn cancel_pending_inits(&mut self) {
        if !self.pending_inits.is_empty() {
            tracing::debug!(count = self.pending_inits.len(), "pending inits cancelled");
            self.pending_inits.clear();
        }
    }

    /// Re-assert focus on the most recently focused panel, falling back to
    /// the first panel when none was focused yet
    pub fn focus(&mut self) {
        if self.disposed {
            return;
        }
        if self.focused.is_none() {
            self.focused = self.panes.first().map(|pane| pane.id().to_string());
        }
    }

    pub fn focus_panel(&mut self, id: &str) -> bool {
        if self.disposed || self.index_of(id).is_none() {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    pub fn focused_panel(&self) -> Option<PaneHandle> {
        self.focused.as_deref().and_then(|id| self.get_panel(id))
    }

    /// Forward a params change to both renderer parts of a panel
    pub fn update_panel(&mut self, id: &str, params: Params) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.panes[index].update(params);
        true
    }

    /// Deliver a pointer press to a panel's header renderer
    pub fn click_header(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.panes[index].click_header();
        true
    }

    /// Root node of a panel's header renderer, for host mounting
    pub fn header_element(&self, id: &str) -> Option<&dyn Any> {
        self.index_of(id).map(|index| self.panes[index].header_element())
    }

    /// Root node of a panel's body renderer, for host mounting
    pub fn body_element(&self, id: &str) -> Option<&dyn Any> {
        self.index_of(id).map(|index| self.panes[index].body_element())
    }

    /// Terminal teardown: disposes every pane and discards pending inits.
    /// Subsequent operations are ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.pending_inits.clear();
        self.focused = None;
        for pane in &mut self.panes {
            pane.dispose();
        }
        self.panes.clear();
        self.split_view = SplitView::new(self.orientation);
        tracing::debug!("pane stack disposed");
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.panes.iter().position(|pane| pane.id() == id)
    }

    /// Push the split view's current sizes into every pane's renderers
    fn apply_view_sizes(&mut self) {
        let across = self.split_view.orthogonal_size();
        for index in 0..self.panes.len() {
            let along = self.split_view.get_view_size(index).unwrap_or(0.0);
            let (width, height) = self.orientation.join(along, across);
            self.panes[index].layout(width, height);
        }
    }
}

impl fmt::Debug for PaneStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaneStack")
            .field("orientation", &self.orientation)
            .field("panels", &self.panes.len())
            .field("pending_inits", &self.pending_inits.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}
