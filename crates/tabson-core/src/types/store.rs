//! Flat arena of heap values.

use serde::Deserialize;

use super::node::RefIndex;
use super::reference::Reference;
use crate::error::{Result, TabsonError};

/// Ordered, index-addressable collection of [`Reference`] entries.
///
/// Nodes point into the store by [`RefIndex`] instead of owning their targets,
/// which keeps cyclic object graphs representable without shared pointers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ReferenceStore
{
    entries: Vec<Reference>,
}

impl ReferenceStore
{
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self
    {
        Self { entries: Vec::new() }
    }

    /// Look up an entry.
    ///
    /// ## Errors
    ///
    /// Returns [`TabsonError::ReferenceOutOfRange`] if `index` is past the end.
    pub fn get(&self, index: RefIndex) -> Result<&Reference>
    {
        self.entries.get(index.raw()).ok_or(TabsonError::ReferenceOutOfRange {
            index: index.raw(),
            len: self.entries.len(),
        })
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    /// True if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    /// Iterate entries together with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (RefIndex, &Reference)>
    {
        self.entries.iter().enumerate().map(|(i, reference)| (RefIndex::new(i), reference))
    }
}

impl From<Vec<Reference>> for ReferenceStore
{
    fn from(entries: Vec<Reference>) -> Self
    {
        Self { entries }
    }
}
