//! # tabson-core
//!
//! Converts value snapshots captured from a Lua debuggee into inspector-protocol
//! descriptors.
//!
//! This crate provides:
//! - The snapshot data model (tagged nodes plus a flat reference store)
//! - Printable rendering of byte strings and function placeholders
//! - Structural classification of tables (dict-like, array-like, opaque)
//! - The dispatcher that renders one node as a `RemoteObject`
//! - A shallow previewer for nested contents
//!
//! ## Cycles
//!
//! Snapshots may contain cycles (a table that contains itself, a thread that
//! refers to a table that refers back to the thread). References are stored by
//! index so the data model itself is acyclic, and the dispatcher never
//! recurses: it renders the one node it is given and leaves nested contents to
//! the [`Previewer`].

pub mod classify;
pub mod dispatch;
pub mod error;
pub mod function;
pub mod previewer;
pub mod snapshot;
pub mod strings;
pub mod types;

pub use dispatch::dispatch;
// Re-export commonly used types
pub use error::{Result, TabsonError};
pub use previewer::{PreviewConfig, Previewer, ShallowPreviewer};
pub use snapshot::Snapshot;
pub use types::{Node, Reference, ReferenceStore};
