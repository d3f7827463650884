//! Structural classification of tables.
//!
//! Lua has a single container type, so the renderer guesses how a table is
//! used from its keys:
//!
//! - **dict-like**: every key is a string literal
//! - **array-like**: keys are exactly `1, 2, ..., n`, in that order
//! - otherwise an opaque table
//!
//! Tables with a metatable, and empty tables, are always opaque: their keys say
//! nothing reliable about how the program treats them.

use std::fmt;

use crate::types::{Literal, Node, Reference, TableRef};

/// Presentation shape chosen for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableShape
{
    /// Presented as an object with `Dict[n]` description.
    Dict,
    /// Presented as an array with `Array[n]` description.
    Array,
    /// Presented as a generic `Table`.
    Opaque,
}

impl fmt::Display for TableShape
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let label = match self {
            TableShape::Dict => "dict",
            TableShape::Array => "array",
            TableShape::Opaque => "table",
        };
        write!(f, "{label}")
    }
}

impl TableShape
{
    /// Description of a table with `len` items presented in this shape.
    ///
    /// ```rust
    /// use tabson_core::classify::TableShape;
    ///
    /// assert_eq!(TableShape::Array.describe(3), "Array[3]");
    /// assert_eq!(TableShape::Dict.describe(2), "Dict[2]");
    /// assert_eq!(TableShape::Opaque.describe(9), "Table");
    /// ```
    #[must_use]
    pub fn describe(self, len: usize) -> String
    {
        match self {
            TableShape::Dict => format!("Dict[{len}]"),
            TableShape::Array => format!("Array[{len}]"),
            TableShape::Opaque => "Table".to_string(),
        }
    }
}

/// True if `reference` is a metatable-free, non-empty table keyed only by strings.
#[must_use]
pub fn is_dict_like(reference: &Reference) -> bool
{
    plain_items(reference).is_some_and(|table| table.items.iter().all(|item| is_string_key(&item.key)))
}

/// True if `reference` is a metatable-free, non-empty table keyed `1..=n` in order.
#[must_use]
pub fn is_array_like(reference: &Reference) -> bool
{
    plain_items(reference).is_some_and(|table| {
        table
            .items
            .iter()
            .enumerate()
            .all(|(i, item)| is_position_key(&item.key, i + 1))
    })
}

/// Pick the presentation shape of a table reference.
///
/// Dict-likeness is checked before array-likeness. Returns `None` if the
/// reference is not a table.
#[must_use]
pub fn classify(reference: &Reference) -> Option<TableShape>
{
    reference.as_table()?;
    let shape = if is_dict_like(reference) {
        TableShape::Dict
    } else if is_array_like(reference) {
        TableShape::Array
    } else {
        TableShape::Opaque
    };
    Some(shape)
}

/// Table payload of a reference that is eligible for a sized shape.
fn plain_items(reference: &Reference) -> Option<&TableRef>
{
    if reference.metatable {
        return None;
    }
    reference.as_table().filter(|table| !table.items.is_empty())
}

fn is_string_key(key: &Node) -> bool
{
    matches!(key, Node::Literal(Literal::String(_)))
}

fn is_position_key(key: &Node, position: usize) -> bool
{
    matches!(key, Node::Literal(Literal::Number(n)) if n.is_position(position))
}
