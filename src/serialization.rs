//! Serialized layout document schema
//!
//! A compact JSON document describing a whole stack: container size plus
//! one entry per pane in visual order. Re-serializing a just-deserialized
//! document yields an equal document; unknown keys inside `data` are
//! captured by the flattened extras bag and merged into `params` on
//! reconstruction rather than dropped.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::Params;
use crate::pane::PaneDescriptor;

/// Top-level layout document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedPaneStack {
    /// Container size along the layout axis
    pub size: f32,
    /// One entry per pane, array order = visual order
    pub views: Vec<SerializedView>,
}

/// One pane entry in the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedView {
    /// Pixel size along the layout axis at serialization time
    pub size: f32,
    /// Absent means collapsed
    #[serde(default, skip_serializing_if = "is_false")]
    pub expanded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_size: Option<f32>,
    pub data: ViewData,
}

/// The reconstruction descriptor carried inside each view entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewData {
    pub id: String,
    pub component: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_component: Option<String>,
    #[serde(default, skip_serializing_if = "Params::is_empty")]
    pub params: Params,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
    /// Unknown keys land here on deserialization and are merged into
    /// `params` when the pane is rebuilt
    #[serde(flatten)]
    pub extra: Params,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl SerializedView {
    /// Fold the view entry into a pane descriptor, merging unknown extra
    /// keys into the params payload
    pub(crate) fn to_descriptor(&self) -> PaneDescriptor {
        let mut params = self.data.params.clone();
        for (key, value) in &self.data.extra {
            params.insert(key.clone(), value.clone());
        }
        PaneDescriptor {
            id: self.data.id.clone(),
            component: self.data.component.clone(),
            header_component: self.data.header_component.clone(),
            title: self.data.title.clone(),
            params,
            state: self.data.state.clone(),
            is_expanded: self.expanded,
            minimum_size: self.minimum_size,
            maximum_size: self.maximum_size,
        }
    }
}
