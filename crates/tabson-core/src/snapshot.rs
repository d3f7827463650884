//! # Snapshot
//!
//! A captured set of values read from JSON.
//!
//! ```json
//! {
//!   "refs":  [{"type": "table", "items": [{"key": {"tag": "literal", "arg": 1},
//!                                          "value": {"tag": "literal", "arg": "a"}}]}],
//!   "nodes": [{"tag": "reference", "arg": 0}, {"tag": "literal", "arg": 42}]
//! }
//! ```
//!
//! Literal strings are "binary" JSON strings: every code unit is one byte of
//! the raw Lua string.

use std::io::Read;

use serde::Deserialize;
use tabson_protocol::{ObjectIdAllocator, RemoteObject};
use tracing::debug;

use crate::classify::{classify, TableShape};
use crate::dispatch::dispatch;
use crate::error::Result;
use crate::previewer::Previewer;
use crate::types::{Node, RefIndex, ReferenceStore};

/// Root nodes plus the reference store they point into.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Snapshot
{
    /// Heap values, addressed by index.
    #[serde(default)]
    pub refs: ReferenceStore,
    /// Root values to render, in order.
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Snapshot
{
    /// Parse a snapshot from a JSON string.
    ///
    /// ## Errors
    ///
    /// Returns [`TabsonError::Json`](crate::error::TabsonError::Json) for
    /// malformed JSON, and
    /// [`TabsonError::InvalidNode`](crate::error::TabsonError::InvalidNode)
    /// for a root or table-item node whose argument does not fit its tag.
    pub fn from_json(json: &str) -> Result<Self>
    {
        serde_json::from_str::<Snapshot>(json)?.checked()
    }

    /// Parse a snapshot from a reader.
    ///
    /// ## Errors
    ///
    /// Same as [`Snapshot::from_json`]. Read failures of `reader` arrive as
    /// [`TabsonError::Json`](crate::error::TabsonError::Json).
    pub fn from_reader(reader: impl Read) -> Result<Self>
    {
        serde_json::from_reader::<_, Snapshot>(reader)?.checked()
    }

    /// Render every root node, one dispatch call per node.
    ///
    /// Absent descriptors are kept as `None` so positions line up with
    /// [`Snapshot::nodes`].
    ///
    /// ## Errors
    ///
    /// Stops at the first node whose rendering fails.
    pub fn render_all<P>(&self, previewer: &P, ids: &mut ObjectIdAllocator) -> Result<Vec<Option<RemoteObject>>>
    where
        P: Previewer + ?Sized,
    {
        self.nodes
            .iter()
            .map(|node| dispatch(node, &self.refs, previewer, ids.generator()))
            .collect()
    }

    /// Shape of every table in the store, with its item count.
    #[must_use]
    pub fn table_shapes(&self) -> Vec<(RefIndex, TableShape, usize)>
    {
        self.refs
            .iter()
            .filter_map(|(index, reference)| {
                let shape = classify(reference)?;
                let len = reference.as_table().map_or(0, |table| table.items.len());
                Some((index, shape, len))
            })
            .collect()
    }

    fn checked(self) -> Result<Self>
    {
        let items = self
            .refs
            .iter()
            .filter_map(|(_, reference)| reference.as_table())
            .flat_map(|table| table.items.iter().flat_map(|item| [&item.key, &item.value]));
        self.nodes.iter().chain(items).try_for_each(Node::check)?;

        debug!(refs = self.refs.len(), nodes = self.nodes.len(), "snapshot loaded");
        Ok(self)
    }
}
