//! Remote object identities.

use std::fmt;

use serde::Serialize;

/// Opaque handle naming one presented reference value.
///
/// Identities are presentation-scoped: rendering the same underlying reference
/// twice yields two different ids unless the caller reuses the first result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RemoteObjectId(String);

impl RemoteObjectId
{
    /// Borrow the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str
    {
        &self.0
    }
}

impl From<String> for RemoteObjectId
{
    fn from(value: String) -> Self
    {
        Self(value)
    }
}

impl From<&str> for RemoteObjectId
{
    fn from(value: &str) -> Self
    {
        Self(value.to_string())
    }
}

impl fmt::Display for RemoteObjectId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(&self.0)
    }
}

/// Sequential id source: `tabson:1`, `tabson:2`, ...
///
/// ## Example
///
/// ```rust
/// use tabson_protocol::ObjectIdAllocator;
///
/// let mut ids = ObjectIdAllocator::new();
/// assert_eq!(ids.next_id().as_str(), "tabson:1");
/// assert_eq!(ids.next_id().as_str(), "tabson:2");
/// ```
#[derive(Debug, Clone)]
pub struct ObjectIdAllocator
{
    prefix: String,
    next: u64,
}

impl ObjectIdAllocator
{
    /// Prefix used by [`ObjectIdAllocator::new`].
    pub const DEFAULT_PREFIX: &'static str = "tabson:";

    /// Create an allocator with the default prefix.
    #[must_use]
    pub fn new() -> Self
    {
        Self::with_prefix(Self::DEFAULT_PREFIX)
    }

    /// Create an allocator whose ids start with `prefix`.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self
    {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Produce a fresh id.
    pub fn next_id(&mut self) -> RemoteObjectId
    {
        let id = RemoteObjectId(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u64
    {
        self.next - 1
    }

    /// Borrow the allocator as a zero-argument generator closure.
    pub fn generator(&mut self) -> impl FnMut() -> RemoteObjectId + '_
    {
        move || self.next_id()
    }
}

impl Default for ObjectIdAllocator
{
    fn default() -> Self
    {
        Self::new()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_allocator_counts_from_one()
    {
        let mut ids = ObjectIdAllocator::with_prefix("obj-");
        assert_eq!(ids.allocated(), 0);
        assert_eq!(ids.next_id(), RemoteObjectId::from("obj-1"));
        assert_eq!(ids.next_id(), RemoteObjectId::from("obj-2"));
        assert_eq!(ids.allocated(), 2);
    }

    #[test]
    fn test_generator_shares_counter()
    {
        let mut ids = ObjectIdAllocator::new();
        {
            let mut generate = ids.generator();
            assert_eq!(generate().as_str(), "tabson:1");
        }
        assert_eq!(ids.next_id().as_str(), "tabson:2");
    }

    #[test]
    fn test_id_serializes_as_plain_string()
    {
        let id = RemoteObjectId::from("tabson:7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"tabson:7\"");
        assert_eq!(id.to_string(), "tabson:7");
    }
}
