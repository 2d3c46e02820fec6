use thiserror::Error;

/// Errors produced by nodes, converters and the pipeline.
///
/// Every failing call leaves the failing component unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NodeError {
    /// Structurally invalid parameters, raised at construction time only.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A conversion direction which is permanently unimplemented.
    #[error("not supported: {0}")]
    NotSupported(String),

    /// An array of the wrong length was handed to a converter.
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch {
        /// expected number of elements
        expected: usize,
        /// actual number of elements
        actual: usize,
    },

    /// A node name which is already taken in the pipeline.
    #[error("node name {0} already exists")]
    DuplicateName(String),
}
