//! Layout geometry primitives
//!
//! The orientation enum owns the only width/height to along/across axis
//! mapping in the crate; everything above it is orientation-agnostic.

use serde::{Deserialize, Serialize};

/// Axis a pane stack is laid out along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Panes stacked top-to-bottom
    Vertical,
    /// Panes stacked left-to-right
    Horizontal,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Vertical
    }
}

impl Orientation {
    /// Map container (width, height) to (size along axis, size across axis)
    pub fn split(self, width: f32, height: f32) -> (f32, f32) {
        match self {
            Orientation::Vertical => (height, width),
            Orientation::Horizontal => (width, height),
        }
    }

    /// Map (size along axis, size across axis) back to (width, height)
    pub fn join(self, along: f32, across: f32) -> (f32, f32) {
        match self {
            Orientation::Vertical => (across, along),
            Orientation::Horizontal => (along, across),
        }
    }
}

/// Rectangle for host measurement
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}
