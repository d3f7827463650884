//! Heap values held in a snapshot's reference store.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::node::Node;

/// One entry of the reference store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reference
{
    /// Whether the value has a metatable. The metatable itself is opaque.
    #[serde(default, deserialize_with = "deserialize_presence")]
    pub metatable: bool,
    /// Variant-specific data.
    #[serde(flatten)]
    pub kind: ReferenceKind,
}

/// Variant of a [`Reference`], keyed by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReferenceKind
{
    /// A Lua or C function.
    Function(FunctionRef),
    /// A coroutine.
    Thread,
    /// Full or light userdata.
    Userdata,
    /// A table and its captured entries.
    Table(TableRef),
    /// Any `type` this crate does not know.
    #[serde(other)]
    Other,
}

/// Function reference payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FunctionRef
{
    /// True for C functions, which have no Lua source.
    #[serde(default)]
    pub native: bool,
    /// Chunk name the function was defined in.
    #[serde(default)]
    pub file: String,
    /// First line of the definition.
    #[serde(default)]
    pub line_begin: i64,
    /// Last line of the definition.
    #[serde(default)]
    pub line_end: i64,
}

impl FunctionRef
{
    /// A C function.
    #[must_use]
    pub fn native() -> Self
    {
        Self {
            native: true,
            ..Self::default()
        }
    }

    /// A Lua function defined in `file` between the given lines.
    #[must_use]
    pub fn lua(file: impl Into<String>, line_begin: i64, line_end: i64) -> Self
    {
        Self {
            native: false,
            file: file.into(),
            line_begin,
            line_end,
        }
    }
}

/// Table reference payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TableRef
{
    /// Captured entries in snapshot order.
    #[serde(default)]
    pub items: Vec<TableItem>,
}

/// One key/value pair of a table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableItem
{
    /// Entry key.
    pub key: Node,
    /// Entry value.
    pub value: Node,
}

impl TableItem
{
    /// Create an entry.
    #[must_use]
    pub fn new(key: Node, value: Node) -> Self
    {
        Self { key, value }
    }
}

impl Reference
{
    /// Reference without a metatable.
    #[must_use]
    pub fn new(kind: ReferenceKind) -> Self
    {
        Self { metatable: false, kind }
    }

    /// Table reference without a metatable.
    #[must_use]
    pub fn table(items: Vec<TableItem>) -> Self
    {
        Self::new(ReferenceKind::Table(TableRef { items }))
    }

    /// Function reference.
    #[must_use]
    pub fn function(function: FunctionRef) -> Self
    {
        Self::new(ReferenceKind::Function(function))
    }

    /// Thread reference.
    #[must_use]
    pub fn thread() -> Self
    {
        Self::new(ReferenceKind::Thread)
    }

    /// Userdata reference.
    #[must_use]
    pub fn userdata() -> Self
    {
        Self::new(ReferenceKind::Userdata)
    }

    /// Mark this reference as having a metatable.
    #[must_use]
    pub fn with_metatable(mut self) -> Self
    {
        self.metatable = true;
        self
    }

    /// Table payload, if this is a table.
    #[must_use]
    pub fn as_table(&self) -> Option<&TableRef>
    {
        match &self.kind {
            ReferenceKind::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// `metatable` counts as present unless it is missing, `null` or `false`.
fn deserialize_presence<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(!matches!(Option::<Value>::deserialize(deserializer)?, None | Some(Value::Bool(false))))
}
