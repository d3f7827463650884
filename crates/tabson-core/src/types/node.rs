//! Snapshot nodes.
//!
//! A node is one captured value. Its tag decides what its argument is, so each
//! tag is its own [`Node`] variant carrying only the payload that tag allows.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::error::TabsonError;

/// Index of an entry in a [`ReferenceStore`](crate::types::ReferenceStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefIndex(usize);

impl RefIndex
{
    /// Create an index from a raw position.
    #[must_use]
    pub const fn new(index: usize) -> Self
    {
        Self(index)
    }

    /// Raw position in the store.
    #[must_use]
    pub const fn raw(self) -> usize
    {
        self.0
    }
}

impl fmt::Display for RefIndex
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "#{}", self.0)
    }
}

/// Lua number. Integers and floats are distinct subtypes since Lua 5.3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number
{
    /// Integer subtype.
    Integer(i64),
    /// Float subtype.
    Float(f64),
}

impl Number
{
    /// True if this number equals the 1-based table position `position`.
    ///
    /// A float equals a position when its value is exactly that integer, as it
    /// would under the runtime's own `==`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn is_position(self, position: usize) -> bool
    {
        match self {
            Number::Integer(n) => usize::try_from(n).is_ok_and(|n| n == position),
            Number::Float(f) => f == position as f64,
        }
    }

    /// JSON form of the number. Non-finite floats have none and map to `null`.
    #[must_use]
    pub fn to_json(self) -> Value
    {
        match self {
            Number::Integer(n) => Value::from(n),
            Number::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        }
    }
}

/// Formats the way an inspector frontend writes numbers: integral floats drop
/// their fraction, `-0` reads `0`, and magnitudes outside `[1e-6, 1e21)` use
/// exponent notation (`1e+21`, `1.5e-7`).
impl fmt::Display for Number
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Number::Integer(n) => write!(f, "{n}"),
            Number::Float(v) => f.write_str(&float_text(*v)),
        }
    }
}

fn float_text(value: f64) -> String
{
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&value.abs()) {
        return format!("{value}");
    }
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{mantissa}e+{exponent}"),
        _ => text,
    }
}

/// Payload of a `literal` node.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal
{
    /// The runtime's "no value" marker.
    Nil,
    /// `true` / `false`.
    Boolean(bool),
    /// Integer or float.
    Number(Number),
    /// Raw string bytes. The runtime does not promise any text encoding.
    String(Vec<u8>),
}

/// One captured value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawNode")]
pub enum Node
{
    /// A number JSON cannot carry, spelled `inf`, `-inf` or `nan`.
    ///
    /// Any other spelling is kept as is and renders as no descriptor. A
    /// non-string argument is kept as its JSON text.
    Special(String),
    /// A plain value.
    Literal(Literal),
    /// A heap value, stored in the snapshot's reference store.
    Reference(RefIndex),
    /// Serialization stopped here because it reached its depth limit.
    /// Carries the limit as text, whatever JSON type the producer used.
    LimitDepth(String),
    /// Serialization stopped here because it reached its item count limit.
    LimitCount(String),
    /// A tag this crate does not know. Carries the tag name.
    Unknown(String),
    /// A `literal` or `reference` whose argument has the wrong JSON shape.
    ///
    /// Kept so one bad node does not hide where it sits; [`Node::check`]
    /// turns it into [`TabsonError::InvalidNode`].
    Invalid
    {
        /// Tag name.
        tag: String,
        /// Argument as read.
        arg: Value,
    },
}

impl Node
{
    /// `nil` literal.
    #[must_use]
    pub const fn nil() -> Self
    {
        Node::Literal(Literal::Nil)
    }

    /// Boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self
    {
        Node::Literal(Literal::Boolean(value))
    }

    /// Integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Self
    {
        Node::Literal(Literal::Number(Number::Integer(value)))
    }

    /// Float literal.
    #[must_use]
    pub const fn float(value: f64) -> Self
    {
        Node::Literal(Literal::Number(Number::Float(value)))
    }

    /// String literal from raw bytes.
    #[must_use]
    pub fn string(bytes: impl Into<Vec<u8>>) -> Self
    {
        Node::Literal(Literal::String(bytes.into()))
    }

    /// Reference to entry `index` of the store.
    #[must_use]
    pub const fn reference(index: usize) -> Self
    {
        Node::Reference(RefIndex::new(index))
    }

    /// Special number (`inf`, `-inf`, `nan`).
    #[must_use]
    pub fn special(arg: impl Into<String>) -> Self
    {
        Node::Special(arg.into())
    }

    /// Depth limit marker.
    #[must_use]
    pub fn limit_depth(limit: impl fmt::Display) -> Self
    {
        Node::LimitDepth(limit.to_string())
    }

    /// Item count limit marker.
    #[must_use]
    pub fn limit_count(limit: impl fmt::Display) -> Self
    {
        Node::LimitCount(limit.to_string())
    }

    /// Reject [`Node::Invalid`].
    ///
    /// ## Errors
    ///
    /// Returns [`TabsonError::InvalidNode`] naming the tag and argument.
    pub fn check(&self) -> Result<(), TabsonError>
    {
        match self {
            Node::Invalid { tag, arg } => Err(invalid_node(tag, arg)),
            _ => Ok(()),
        }
    }

    /// Wire name of this node's tag.
    #[must_use]
    pub fn tag(&self) -> &str
    {
        match self {
            Node::Special(_) => TAG_SPECIAL,
            Node::Literal(_) => TAG_LITERAL,
            Node::Reference(_) => TAG_REFERENCE,
            Node::LimitDepth(_) => TAG_LIMIT_DEPTH,
            Node::LimitCount(_) => TAG_LIMIT_COUNT,
            Node::Unknown(tag) | Node::Invalid { tag, .. } => tag,
        }
    }
}

/// Wire name of the `special` tag.
pub const TAG_SPECIAL: &str = "special";
/// Wire name of the `literal` tag.
pub const TAG_LITERAL: &str = "literal";
/// Wire name of the `reference` tag.
pub const TAG_REFERENCE: &str = "reference";
/// Wire name of the `limit_depth` tag.
pub const TAG_LIMIT_DEPTH: &str = "limit_depth";
/// Wire name of the `limit_count` tag.
pub const TAG_LIMIT_COUNT: &str = "limit_count";

/// Node as it appears on the wire, before its argument is checked.
#[derive(Debug, Deserialize)]
struct RawNode
{
    tag: String,
    #[serde(default)]
    arg: Value,
}

impl From<RawNode> for Node
{
    fn from(raw: RawNode) -> Self
    {
        let RawNode { tag, arg } = raw;
        match tag.as_str() {
            TAG_SPECIAL => Node::Special(arg_text(&arg)),
            TAG_LITERAL => match literal_from_json(arg) {
                Ok(literal) => Node::Literal(literal),
                Err(arg) => Node::Invalid { tag, arg },
            },
            TAG_REFERENCE => match arg.as_u64().and_then(|n| usize::try_from(n).ok()) {
                Some(index) => Node::Reference(RefIndex::new(index)),
                None => Node::Invalid { tag, arg },
            },
            TAG_LIMIT_DEPTH => Node::LimitDepth(arg_text(&arg)),
            TAG_LIMIT_COUNT => Node::LimitCount(arg_text(&arg)),
            _ => Node::Unknown(tag),
        }
    }
}

/// Literal payload of `arg`, or `arg` back if no literal has that shape.
fn literal_from_json(arg: Value) -> Result<Literal, Value>
{
    let literal = match arg {
        Value::Null => Literal::Nil,
        Value::Bool(b) => Literal::Boolean(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Literal::Number(Number::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Literal::Number(Number::Float(f))
            } else {
                return Err(Value::Number(n));
            }
        }
        Value::String(s) => Literal::String(binary_bytes(&s)),
        other => return Err(other),
    };
    Ok(literal)
}

/// `arg` as text: strings unquoted, numbers in [`Number`] notation.
fn arg_text(arg: &Value) -> String
{
    match arg {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_i64() {
            Some(i) => i.to_string(),
            None => n.as_f64().map_or_else(|| n.to_string(), float_text),
        },
        other => other.to_string(),
    }
}

/// Bytes of a "binary" string: one byte per UTF-16 code unit, low byte kept.
#[allow(clippy::cast_possible_truncation)]
fn binary_bytes(s: &str) -> Vec<u8>
{
    s.encode_utf16().map(|unit| (unit & 0xff) as u8).collect()
}

pub(crate) fn invalid_node(tag: &str, arg: &Value) -> TabsonError
{
    TabsonError::InvalidNode(format!("tag `{tag}` cannot carry arg {arg}"))
}
