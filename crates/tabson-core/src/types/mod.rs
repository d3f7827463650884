//! # Types
//!
//! Snapshot data model.
//!
//! A snapshot is a set of root [`Node`]s plus a [`ReferenceStore`]. Nodes are
//! small tagged values; anything heap-allocated in the debuggee (tables,
//! functions, threads, userdata) lives in the store and is referred to by
//! index. All of these are read-only inputs built by the snapshot producer.

pub mod node;
pub mod reference;
pub mod store;

// Re-export all public types
pub use node::{Literal, Node, Number, RefIndex};
pub use reference::{FunctionRef, Reference, ReferenceKind, TableItem, TableRef};
pub use store::ReferenceStore;
