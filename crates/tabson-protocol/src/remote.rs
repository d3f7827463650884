//! Remote object descriptors.

use serde::Serialize;
use serde_json::Value;

use crate::ids::RemoteObjectId;
use crate::preview::ObjectPreview;

/// Primary type of a remote value (`RemoteObject.type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteObjectType
{
    /// Any table, thread, userdata or truncation marker.
    Object,
    /// A Lua function.
    Function,
    /// The `nil` value.
    Undefined,
    /// A Lua string.
    String,
    /// An integer or float, including the unserializable ones.
    Number,
    /// `true` or `false`.
    Boolean,
}

/// Refinement of [`RemoteObjectType::Object`] (`RemoteObject.subtype`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteObjectSubtype
{
    /// Positional table presented as an array.
    Array,
    /// String-keyed table presented as a plain object.
    Object,
    /// Placeholder for a value the serializer did not capture.
    Null,
}

/// Protocol descriptor for one runtime value.
///
/// Only the fields relevant to a given value are populated; the rest are left
/// as `None` and omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteObject
{
    /// Object type.
    #[serde(rename = "type")]
    pub kind: RemoteObjectType,
    /// Object subtype hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<RemoteObjectSubtype>,
    /// Class name for object values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Human readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Primitive value, or a string payload for truncation markers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Spelling of numbers JSON cannot carry (`Infinity`, `-Infinity`, `NaN`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unserializable_value: Option<String>,
    /// Handle the client uses to ask for more detail about this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<RemoteObjectId>,
    /// Shallow summary of the value's contents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<ObjectPreview>,
}

impl RemoteObject
{
    /// Create a descriptor with only `type` set.
    #[must_use]
    pub fn new(kind: RemoteObjectType) -> Self
    {
        Self {
            kind,
            subtype: None,
            class_name: None,
            description: None,
            value: None,
            unserializable_value: None,
            object_id: None,
            preview: None,
        }
    }

    /// Set `subtype`.
    #[must_use]
    pub fn with_subtype(mut self, subtype: RemoteObjectSubtype) -> Self
    {
        self.subtype = Some(subtype);
        self
    }

    /// Set `className`.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self
    {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set `description`.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self
    {
        self.description = Some(description.into());
        self
    }

    /// Set `value`.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self
    {
        self.value = Some(value.into());
        self
    }

    /// Set `unserializableValue`.
    #[must_use]
    pub fn with_unserializable_value(mut self, value: impl Into<String>) -> Self
    {
        self.unserializable_value = Some(value.into());
        self
    }

    /// Set `objectId`.
    #[must_use]
    pub fn with_object_id(mut self, object_id: RemoteObjectId) -> Self
    {
        self.object_id = Some(object_id);
        self
    }

    /// Set `preview`.
    #[must_use]
    pub fn with_preview(mut self, preview: ObjectPreview) -> Self
    {
        self.preview = Some(preview);
        self
    }
}
