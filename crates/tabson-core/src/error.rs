//! # Error Types
//!
//! Error handling for snapshot reading and value rendering.
//!
//! Rendering itself almost never fails: a node the renderer does not recognise
//! yields no descriptor rather than an error. The variants below cover the
//! cases where the *input* is broken.

use thiserror::Error;

/// Main error type for tabson operations
///
/// ## Error Categories
///
/// 1. **Graph errors**: ReferenceOutOfRange
/// 2. **Input errors**: InvalidNode, Json
/// 3. **I/O errors**: Io (reading snapshot files)
#[derive(Error, Debug)]
pub enum TabsonError
{
    /// A reference node points past the end of the reference store
    ///
    /// Every reference index in a snapshot must address an entry of that same
    /// snapshot's store. This happens when:
    /// - Nodes from one snapshot are rendered against another snapshot's store
    /// - The snapshot producer truncated the store but not the nodes
    #[error("Reference index {index} out of range (store holds {len} entries)")]
    ReferenceOutOfRange
    {
        /// Index carried by the node
        index: usize,
        /// Number of entries in the store
        len: usize,
    },

    /// A node's payload does not match its tag
    ///
    /// Reported when a snapshot is read, or when a
    /// [`Node::Invalid`](crate::types::Node::Invalid) is rendered. Examples:
    /// - A `literal` whose arg is a JSON array or object
    /// - A `reference` whose arg is not a non-negative integer
    #[error("Invalid node: {0}")]
    InvalidNode(String),

    /// Malformed snapshot JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading a snapshot
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, TabsonError>`
///
/// ```rust
/// use tabson_core::error::Result;
/// fn foo() -> Result<()>
/// {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, TabsonError>;
