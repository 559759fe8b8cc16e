//! Renderer contract and component registry
//!
//! A pane is rendered by two parts: a header and a body. Both satisfy the
//! same [`PanePart`] capability set and are produced by factories looked up
//! in a [`ComponentRegistry`] by kind identifier. Resolution failure is a
//! typed [`ResolutionError`], surfaced to the caller of `add_panel` or
//! `from_json`.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::error::ResolutionError;
use crate::pane::{DefaultHeader, PaneHandle};

/// Caller-supplied key/value payload passed through to renderers unchanged
/// and round-tripped through serialization
pub type Params = serde_json::Map<String, Value>;

/// Everything a renderer part receives at initialization
#[derive(Debug, Clone)]
pub struct InitParams {
    /// Owning panel id
    pub id: String,
    /// Display title (headers render it; bodies may ignore it)
    pub title: String,
    /// Caller payload from the add descriptor or the serialized document
    pub params: Params,
    /// Renderer state restored from a serialized document, if any
    pub state: Option<Value>,
    /// Expansion flag at init time
    pub is_expanded: bool,
    /// Pixel bounds forwarded opaquely from the panel descriptor
    pub minimum_size: Option<f32>,
    pub maximum_size: Option<f32>,
    /// Control surface back into the owning container
    pub handle: PaneHandle,
}

/// Capability set of a renderer part (header or body).
///
/// Construction is parameter-less; `init` runs later, possibly on a later
/// scheduler turn (see deferred initialization on the stack). Parts must
/// tolerate `layout` calls before `init`.
pub trait PanePart {
    /// Root node of this part's visual output. The embedding host downcasts
    /// it to its concrete widget type.
    fn element(&self) -> &dyn Any;

    fn init(&mut self, params: InitParams);

    /// The pane's params payload changed
    fn update(&mut self, params: &Params) {
        let _ = params;
    }

    fn layout(&mut self, width: f32, height: f32) {
        let _ = (width, height);
    }

    /// Pointer press on this part
    fn clicked(&mut self) {}

    /// Renderer-specific state to persist alongside the pane descriptor
    fn to_json(&self) -> Option<Value> {
        None
    }

    fn dispose(&mut self) {}
}

type PartFactory = Box<dyn Fn() -> Box<dyn PanePart>>;

/// Typed registry mapping kind identifiers to renderer factories.
///
/// Captured by value at stack construction; later changes require an
/// explicit [`PaneStack::set_registry`](crate::stack::PaneStack::set_registry)
/// call rather than being picked up implicitly.
#[derive(Default)]
pub struct ComponentRegistry {
    bodies: HashMap<String, PartFactory>,
    headers: HashMap<String, PartFactory>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a body component factory under a kind identifier
    pub fn register_body(
        &mut self,
        kind: impl Into<String>,
        factory: impl Fn() -> Box<dyn PanePart> + 'static,
    ) {
        self.bodies.insert(kind.into(), Box::new(factory));
    }

    /// Register a header component factory under a kind identifier
    pub fn register_header(
        &mut self,
        kind: impl Into<String>,
        factory: impl Fn() -> Box<dyn PanePart> + 'static,
    ) {
        self.headers.insert(kind.into(), Box::new(factory));
    }

    pub fn has_body(&self, kind: &str) -> bool {
        self.bodies.contains_key(kind)
    }

    pub fn has_header(&self, kind: &str) -> bool {
        self.headers.contains_key(kind)
    }

    /// Construct a body renderer for `kind`
    pub fn resolve_body(
        &self,
        kind: &str,
        panel_id: &str,
    ) -> Result<Box<dyn PanePart>, ResolutionError> {
        match self.bodies.get(kind) {
            Some(factory) => Ok(factory()),
            None => Err(ResolutionError {
                kind: kind.to_string(),
                panel_id: panel_id.to_string(),
                role: "body",
            }),
        }
    }

    /// Construct a header renderer for `kind`; absence of a kind selects
    /// the built-in [`DefaultHeader`]
    pub fn resolve_header(
        &self,
        kind: Option<&str>,
        panel_id: &str,
    ) -> Result<Box<dyn PanePart>, ResolutionError> {
        match kind {
            None => Ok(Box::new(DefaultHeader::new())),
            Some(kind) => match self.headers.get(kind) {
                Some(factory) => Ok(factory()),
                None => Err(ResolutionError {
                    kind: kind.to_string(),
                    panel_id: panel_id.to_string(),
                    role: "header",
                }),
            },
        }
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("bodies", &self.bodies.keys().collect::<Vec<_>>())
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .finish()
    }
}
