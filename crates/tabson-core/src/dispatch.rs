//! # Dispatcher
//!
//! Turns one snapshot [`Node`] into one protocol [`RemoteObject`].
//!
//! Each tag has its own handler; [`dispatch`] picks the handler by matching on
//! the node. A node the handlers do not recognise yields `Ok(None)`; callers
//! decide what to show in its place. Errors are reserved for broken input,
//! namely a reference index the store does not hold.
//!
//! ## Identity
//!
//! Reference values receive an `objectId` from the caller-supplied generator.
//! The generator is an `FnOnce`: it is called exactly once for a reference node
//! and never for any other tag. Ids are not cached here, so rendering the same
//! reference twice yields two ids.
//!
//! ## Example
//!
//! ```rust
//! use tabson_core::dispatch::dispatch;
//! use tabson_core::previewer::ShallowPreviewer;
//! use tabson_core::types::{Node, ReferenceStore};
//! use tabson_protocol::ObjectIdAllocator;
//!
//! let refs = ReferenceStore::new();
//! let mut ids = ObjectIdAllocator::new();
//! let object = dispatch(&Node::integer(42), &refs, &ShallowPreviewer::default(), || ids.next_id())
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(
//!     serde_json::to_value(&object).unwrap(),
//!     serde_json::json!({"type": "number", "description": "42", "value": 42})
//! );
//! ```

use tabson_protocol::{RemoteObject, RemoteObjectId, RemoteObjectSubtype, RemoteObjectType};
use tracing::{debug, trace};

use crate::classify::{classify, TableShape};
use crate::error::Result;
use crate::function::function_source;
use crate::previewer::Previewer;
use crate::strings::printable_string;
use crate::types::node::invalid_node;
use crate::types::{Literal, Node, RefIndex, Reference, ReferenceKind, ReferenceStore};

/// Render `node` as a protocol descriptor.
///
/// ## Parameters
///
/// - `node`: the value to render
/// - `refs`: the reference store of the snapshot `node` belongs to
/// - `previewer`: builds previews for threads, userdata and tables
/// - `allocate_id`: produces the `objectId` of a reference value
///
/// ## Returns
///
/// `Ok(None)` for unknown tags, unknown reference variants and unrecognised
/// special numbers.
///
/// ## Errors
///
/// Returns [`TabsonError::ReferenceOutOfRange`](crate::error::TabsonError::ReferenceOutOfRange)
/// if `node` refers to an index past the end of `refs`,
/// [`TabsonError::InvalidNode`](crate::error::TabsonError::InvalidNode) for a
/// [`Node::Invalid`], and propagates any error from the previewer.
pub fn dispatch<P, F>(node: &Node, refs: &ReferenceStore, previewer: &P, allocate_id: F) -> Result<Option<RemoteObject>>
where
    P: Previewer + ?Sized,
    F: FnOnce() -> RemoteObjectId,
{
    trace!(tag = node.tag(), "dispatching node");

    let object = match node {
        Node::Special(arg) => special(arg),
        Node::Literal(literal) => Some(self::literal(literal)),
        Node::Reference(index) => reference(*index, refs, previewer, allocate_id)?,
        Node::LimitDepth(depth) => Some(limit_depth(depth)),
        Node::LimitCount(count) => Some(limit_count(count)),
        Node::Unknown(_) => None,
        Node::Invalid { tag, arg } => return Err(invalid_node(tag, arg)),
    };

    if object.is_none() {
        debug!(tag = node.tag(), "node has no protocol descriptor");
    }
    Ok(object)
}

/// `inf`, `-inf` and `nan`, carried as unserializable numbers.
fn special(arg: &str) -> Option<RemoteObject>
{
    let unserializable = match arg {
        "inf" => "Infinity",
        "-inf" => "-Infinity",
        "nan" => "NaN",
        _ => return None,
    };
    Some(
        RemoteObject::new(RemoteObjectType::Number)
            .with_description(arg)
            .with_unserializable_value(unserializable),
    )
}

fn literal(literal: &Literal) -> RemoteObject
{
    match literal {
        Literal::Number(n) => RemoteObject::new(RemoteObjectType::Number)
            .with_description(n.to_string())
            .with_value(n.to_json()),
        Literal::Boolean(b) => RemoteObject::new(RemoteObjectType::Boolean).with_value(*b),
        Literal::Nil => RemoteObject::new(RemoteObjectType::Undefined).with_description("nil"),
        Literal::String(bytes) => RemoteObject::new(RemoteObjectType::String).with_value(printable_string(bytes)),
    }
}

fn reference<P, F>(index: RefIndex, refs: &ReferenceStore, previewer: &P, allocate_id: F) -> Result<Option<RemoteObject>>
where
    P: Previewer + ?Sized,
    F: FnOnce() -> RemoteObjectId,
{
    let reference = refs.get(index)?;
    let object_id = allocate_id();

    let object = match &reference.kind {
        ReferenceKind::Function(function) => RemoteObject::new(RemoteObjectType::Function)
            .with_class_name("Function")
            .with_description(function_source(function))
            .with_object_id(object_id),
        ReferenceKind::Thread => RemoteObject::new(RemoteObjectType::Object)
            .with_class_name("Object")
            .with_description("Thread")
            .with_object_id(object_id)
            .with_preview(previewer.thread(reference, refs)?),
        ReferenceKind::Userdata => RemoteObject::new(RemoteObjectType::Object)
            .with_class_name("Object")
            .with_description("Userdata")
            .with_object_id(object_id)
            .with_preview(previewer.userdata(reference, refs)?),
        ReferenceKind::Table(table) => table_object(reference, table.items.len(), refs, previewer, object_id)?,
        ReferenceKind::Other => {
            debug!(%index, "reference variant has no protocol descriptor");
            return Ok(None);
        }
    };
    Ok(Some(object))
}

fn table_object<P>(
    reference: &Reference,
    len: usize,
    refs: &ReferenceStore,
    previewer: &P,
    object_id: RemoteObjectId,
) -> Result<RemoteObject>
where
    P: Previewer + ?Sized,
{
    let shape = classify(reference).unwrap_or(TableShape::Opaque);
    let object = match shape {
        TableShape::Dict => {
            let description = shape.describe(len);
            let mut preview = previewer.table_as_object(reference, refs)?;
            preview.description = Some(description.clone());
            RemoteObject::new(RemoteObjectType::Object)
                .with_subtype(RemoteObjectSubtype::Object)
                .with_class_name("Object")
                .with_description(description)
                .with_preview(preview)
        }
        TableShape::Array => {
            let description = shape.describe(len);
            let mut preview = previewer.table_as_array(reference, refs)?;
            preview.description = Some(description.clone());
            RemoteObject::new(RemoteObjectType::Object)
                .with_subtype(RemoteObjectSubtype::Array)
                .with_class_name("Array")
                .with_description(description)
                .with_preview(preview)
        }
        TableShape::Opaque => RemoteObject::new(RemoteObjectType::Object)
            .with_class_name("Object")
            .with_description(shape.describe(len))
            .with_preview(previewer.table_as_object(reference, refs)?),
    };
    Ok(object.with_object_id(object_id))
}

fn limit_depth(depth: &str) -> RemoteObject
{
    RemoteObject::new(RemoteObjectType::Object)
        .with_subtype(RemoteObjectSubtype::Null)
        .with_value(limit_depth_message(depth))
}

fn limit_count(count: &str) -> RemoteObject
{
    RemoteObject::new(RemoteObjectType::Object)
        .with_subtype(RemoteObjectSubtype::Null)
        .with_value(limit_count_message(count))
}

/// Text standing in for a value cut off by the serializer's depth limit.
#[must_use]
pub fn limit_depth_message(depth: &str) -> String
{
    format!("serialize limit depth: \"{depth}\"")
}

/// Text standing in for a value cut off by the serializer's count limit.
#[must_use]
pub fn limit_count_message(count: &str) -> String
{
    format!("serialize limit count: \"{count}\"")
}
