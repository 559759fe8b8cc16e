//! Fallback header used when a panel supplies no header kind
//!
//! Its only interactive behavior is toggling the pane's expansion flag on
//! click, through the control surface received during `init`. The handle is
//! nullable: the header is constructed before the surface exists and must
//! stay usable (a harmless no-op) if clicked before `init` completes.

use std::any::Any;

use crate::component::{InitParams, PanePart};
use crate::pane::PaneHandle;

#[derive(Debug, Default)]
pub struct DefaultHeader {
    handle: Option<PaneHandle>,
    title: String,
}

impl DefaultHeader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title to render, empty until `init`
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl PanePart for DefaultHeader {
    fn element(&self) -> &dyn Any {
        self
    }

    fn init(&mut self, params: InitParams) {
        self.title = params.title;
        self.handle = Some(params.handle);
    }

    fn clicked(&mut self) {
        if let Some(handle) = &self.handle {
            handle.toggle_expanded();
        }
    }
}
