//! # tabson-protocol
//!
//! Value model of inspector-style remote debugging protocols.
//!
//! The types in this crate mirror the `Runtime.RemoteObject` and
//! `Runtime.ObjectPreview` shapes, so a frontend that already speaks the
//! inspector protocol can display values captured from a Lua debuggee without
//! any translation. Everything here serializes to camelCase JSON and skips
//! fields that are not set.
//!
//! ## Example
//!
//! ```rust
//! use tabson_protocol::{RemoteObject, RemoteObjectType};
//!
//! let nil = RemoteObject::new(RemoteObjectType::Undefined).with_description("nil");
//! let json = serde_json::to_value(&nil).unwrap();
//! assert_eq!(json, serde_json::json!({"type": "undefined", "description": "nil"}));
//! ```

pub mod ids;
pub mod preview;
pub mod remote;

pub use ids::{ObjectIdAllocator, RemoteObjectId};
pub use preview::{ObjectPreview, PropertyPreview};
pub use remote::{RemoteObject, RemoteObjectSubtype, RemoteObjectType};
