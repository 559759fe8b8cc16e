//! Error types for pane construction and membership operations
//!
//! Not-found conditions (removing an absent pane, looking up an unknown id)
//! are deliberately not errors; membership operations are idempotent and
//! model those as no-ops or absent values.

/// Raised when a component kind matches no registry entry.
///
/// This is a caller-configuration bug: it aborts the whole `add_panel` or
/// `from_json` operation and is never swallowed internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no {role} component registered for kind `{kind}` (panel `{panel_id}`)")]
pub struct ResolutionError {
    /// The unresolvable kind identifier
    pub kind: String,
    /// Id of the panel being constructed
    pub panel_id: String,
    /// Which registry was consulted ("body" or "header")
    pub role: &'static str,
}

/// Errors surfaced by [`PaneStack`](crate::stack::PaneStack) operations
#[derive(Debug, thiserror::Error)]
pub enum PaneStackError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("duplicate panel id `{0}`")]
    DuplicateId(String),

    #[error("pane stack has been disposed")]
    Disposed,
}
