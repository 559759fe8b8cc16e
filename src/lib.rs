//! panestack - a dockable, serializable stack of collapsible panes
//!
//! This crate provides the container-level controller for an ordered stack
//! of panes laid out along one axis: membership (add/remove/move), geometry
//! propagation into pane renderers, and a JSON round trip that reconstructs
//! an equivalent live layout.

pub mod component;
pub mod error;
pub mod event;
pub mod geometry;
pub mod pane;
pub mod serialization;
pub mod splitview;
pub mod stack;

// Re-export commonly used types
pub use component::{ComponentRegistry, InitParams, PanePart, Params};
pub use error::{PaneStackError, ResolutionError};
pub use event::Subscription;
pub use geometry::{Orientation, Rect};
pub use pane::{DefaultHeader, PaneDescriptor, PaneHandle};
pub use serialization::{SerializedPaneStack, SerializedView, ViewData};
pub use splitview::{Sizing, SplitView};
pub use stack::{AddPanelOptions, HostSurface, LayoutChanged, PaneStack, PaneStackOptions};
