//! Object previews.
//!
//! A preview is a bounded, one-level summary nested inside a
//! [`RemoteObject`](crate::RemoteObject). Whoever builds the enclosing
//! descriptor is free to overwrite [`ObjectPreview::description`] afterwards.

use serde::Serialize;

use crate::remote::{RemoteObjectSubtype, RemoteObjectType};

/// Summary of an object's contents (`Runtime.ObjectPreview`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPreview
{
    /// Object type.
    #[serde(rename = "type")]
    pub kind: RemoteObjectType,
    /// Object subtype hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<RemoteObjectSubtype>,
    /// Short description shown in place of the full object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// True if some properties were left out of `properties`.
    pub overflow: bool,
    /// The previewed properties, in source order.
    pub properties: Vec<PropertyPreview>,
}

impl ObjectPreview
{
    /// Create an empty preview of the given type.
    #[must_use]
    pub fn new(kind: RemoteObjectType) -> Self
    {
        Self {
            kind,
            subtype: None,
            description: None,
            overflow: false,
            properties: Vec::new(),
        }
    }

    /// Set `subtype`.
    #[must_use]
    pub fn with_subtype(mut self, subtype: RemoteObjectSubtype) -> Self
    {
        self.subtype = Some(subtype);
        self
    }

    /// Set `description`.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self
    {
        self.description = Some(description.into());
        self
    }
}

/// One property inside an [`ObjectPreview`] (`Runtime.PropertyPreview`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyPreview
{
    /// Property name.
    pub name: String,
    /// Property type.
    #[serde(rename = "type")]
    pub kind: RemoteObjectType,
    /// Abbreviated textual value. Absent for values with no short form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Object subtype hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<RemoteObjectSubtype>,
}

impl PropertyPreview
{
    /// Create a property preview with a textual value.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: RemoteObjectType, value: Option<String>) -> Self
    {
        Self {
            name: name.into(),
            kind,
            value,
            subtype: None,
        }
    }

    /// Set `subtype`.
    #[must_use]
    pub fn with_subtype(mut self, subtype: RemoteObjectSubtype) -> Self
    {
        self.subtype = Some(subtype);
        self
    }
}
