//! One-level previewer.

use tabson_protocol::{ObjectPreview, PropertyPreview, RemoteObjectSubtype, RemoteObjectType};

use super::Previewer;
use crate::classify::{self, TableShape};
use crate::dispatch::{limit_count_message, limit_depth_message};
use crate::error::Result;
use crate::strings::printable_string;
use crate::types::node::invalid_node;
use crate::types::{Literal, Node, Reference, ReferenceKind, ReferenceStore};

/// Limits applied by [`ShallowPreviewer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewConfig
{
    /// Maximum number of properties shown for an object-shaped table.
    pub max_object_properties: usize,
    /// Maximum number of elements shown for an array-shaped table.
    pub max_array_items: usize,
}

impl Default for PreviewConfig
{
    fn default() -> Self
    {
        Self {
            max_object_properties: 5,
            max_array_items: 100,
        }
    }
}

/// Previewer that summarizes a table's direct entries and nothing deeper.
///
/// Nested references are resolved only to label them (`Table`, `Array[3]`,
/// `Function`, ...), so previews stay bounded and cycles are never followed.
#[derive(Debug, Clone, Default)]
pub struct ShallowPreviewer
{
    config: PreviewConfig,
}

impl ShallowPreviewer
{
    /// Create a previewer with the given limits.
    #[must_use]
    pub fn new(config: PreviewConfig) -> Self
    {
        Self { config }
    }

    fn table_preview(
        &self,
        reference: &Reference,
        refs: &ReferenceStore,
        subtype: Option<RemoteObjectSubtype>,
        limit: usize,
    ) -> Result<ObjectPreview>
    {
        let mut preview = ObjectPreview::new(RemoteObjectType::Object).with_description("Table");
        if let Some(subtype) = subtype {
            preview = preview.with_subtype(subtype);
        }

        let Some(table) = reference.as_table() else {
            return Ok(preview);
        };

        preview.overflow = table.items.len() > limit;
        for item in table.items.iter().take(limit) {
            preview.properties.push(property_preview(&item.key, &item.value, refs)?);
        }
        Ok(preview)
    }
}

impl Previewer for ShallowPreviewer
{
    fn thread(&self, _reference: &Reference, _refs: &ReferenceStore) -> Result<ObjectPreview>
    {
        Ok(ObjectPreview::new(RemoteObjectType::Object).with_description("Thread"))
    }

    fn userdata(&self, _reference: &Reference, _refs: &ReferenceStore) -> Result<ObjectPreview>
    {
        Ok(ObjectPreview::new(RemoteObjectType::Object).with_description("Userdata"))
    }

    fn table_as_object(&self, reference: &Reference, refs: &ReferenceStore) -> Result<ObjectPreview>
    {
        self.table_preview(reference, refs, None, self.config.max_object_properties)
    }

    fn table_as_array(&self, reference: &Reference, refs: &ReferenceStore) -> Result<ObjectPreview>
    {
        self.table_preview(
            reference,
            refs,
            Some(RemoteObjectSubtype::Array),
            self.config.max_array_items,
        )
    }
}

/// Short form of a node: type, abbreviated value, subtype.
struct Summary
{
    kind: RemoteObjectType,
    value: Option<String>,
    subtype: Option<RemoteObjectSubtype>,
}

impl Summary
{
    fn new(kind: RemoteObjectType, value: impl Into<String>) -> Self
    {
        Self {
            kind,
            value: Some(value.into()),
            subtype: None,
        }
    }

    fn with_subtype(mut self, subtype: RemoteObjectSubtype) -> Self
    {
        self.subtype = Some(subtype);
        self
    }
}

fn property_preview(key: &Node, value: &Node, refs: &ReferenceStore) -> Result<PropertyPreview>
{
    let name = property_name(key, refs)?;
    let summary = summarize(value, refs)?;
    Ok(PropertyPreview {
        name,
        kind: summary.kind,
        value: summary.value,
        subtype: summary.subtype,
    })
}

/// Display name of a table key. Non-scalar keys are bracketed.
fn property_name(key: &Node, refs: &ReferenceStore) -> Result<String>
{
    let name = match key {
        Node::Literal(Literal::String(bytes)) => printable_string(bytes),
        Node::Literal(Literal::Number(n)) => n.to_string(),
        Node::Literal(Literal::Boolean(b)) => b.to_string(),
        Node::Literal(Literal::Nil) => "nil".to_string(),
        Node::Special(arg) => arg.clone(),
        Node::Invalid { tag, arg } => return Err(invalid_node(tag, arg)),
        Node::Reference(_) | Node::LimitDepth(_) | Node::LimitCount(_) | Node::Unknown(_) => {
            let label = summarize(key, refs)?.value.unwrap_or_else(|| key.tag().to_string());
            format!("[{label}]")
        }
    };
    Ok(name)
}

fn summarize(node: &Node, refs: &ReferenceStore) -> Result<Summary>
{
    let summary = match node {
        Node::Literal(Literal::Nil) => Summary::new(RemoteObjectType::Undefined, "nil"),
        Node::Literal(Literal::Boolean(b)) => Summary::new(RemoteObjectType::Boolean, b.to_string()),
        Node::Literal(Literal::Number(n)) => Summary::new(RemoteObjectType::Number, n.to_string()),
        Node::Literal(Literal::String(bytes)) => Summary::new(RemoteObjectType::String, printable_string(bytes)),
        Node::Special(arg) => Summary::new(RemoteObjectType::Number, arg.clone()),
        Node::Reference(index) => summarize_reference(refs.get(*index)?),
        Node::LimitDepth(depth) => {
            Summary::new(RemoteObjectType::Object, limit_depth_message(depth)).with_subtype(RemoteObjectSubtype::Null)
        }
        Node::LimitCount(count) => {
            Summary::new(RemoteObjectType::Object, limit_count_message(count)).with_subtype(RemoteObjectSubtype::Null)
        }
        Node::Unknown(_) => Summary {
            kind: RemoteObjectType::Object,
            value: None,
            subtype: None,
        },
        Node::Invalid { tag, arg } => return Err(invalid_node(tag, arg)),
    };
    Ok(summary)
}

fn summarize_reference(reference: &Reference) -> Summary
{
    match &reference.kind {
        ReferenceKind::Function(_) => Summary::new(RemoteObjectType::Function, "Function"),
        ReferenceKind::Thread => Summary::new(RemoteObjectType::Object, "Thread"),
        ReferenceKind::Userdata => Summary::new(RemoteObjectType::Object, "Userdata"),
        ReferenceKind::Table(table) => {
            let shape = classify::classify(reference).unwrap_or(TableShape::Opaque);
            let summary = Summary::new(RemoteObjectType::Object, shape.describe(table.items.len()));
            match shape {
                TableShape::Array => summary.with_subtype(RemoteObjectSubtype::Array),
                TableShape::Dict => summary.with_subtype(RemoteObjectSubtype::Object),
                TableShape::Opaque => summary,
            }
        }
        ReferenceKind::Other => Summary::new(RemoteObjectType::Object, "Object"),
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::error::TabsonError;
    use crate::types::{FunctionRef, RefIndex, TableItem};

    fn item(key: Node, value: Node) -> TableItem
    {
        TableItem::new(key, value)
    }

    #[test]
    fn test_object_preview_respects_limit()
    {
        let items = (1..=7).map(|i| item(Node::string(format!("k{i}")), Node::integer(i))).collect();
        let refs = ReferenceStore::from(vec![Reference::table(items)]);
        let previewer = ShallowPreviewer::default();

        let preview = previewer.table_as_object(refs.get(RefIndex::new(0)).unwrap(), &refs).unwrap();
        assert!(preview.overflow);
        assert_eq!(preview.properties.len(), 5);
        assert_eq!(preview.properties[0].name, "k1");
        assert_eq!(preview.properties[0].value.as_deref(), Some("1"));
        assert_eq!(preview.subtype, None);
    }

    #[test]
    fn test_array_preview_has_array_subtype()
    {
        let items = vec![item(Node::integer(1), Node::boolean(true)), item(Node::integer(2), Node::nil())];
        let refs = ReferenceStore::from(vec![Reference::table(items)]);
        let previewer = ShallowPreviewer::new(PreviewConfig {
            max_object_properties: 5,
            max_array_items: 1,
        });

        let preview = previewer.table_as_array(refs.get(RefIndex::new(0)).unwrap(), &refs).unwrap();
        assert_eq!(preview.subtype, Some(RemoteObjectSubtype::Array));
        assert!(preview.overflow);
        assert_eq!(preview.properties, vec![PropertyPreview::new("1", RemoteObjectType::Boolean, Some("true".into()))]);
    }

    #[test]
    fn test_self_referencing_table_is_labelled_not_followed()
    {
        let items = vec![item(Node::string("self"), Node::reference(0))];
        let refs = ReferenceStore::from(vec![Reference::table(items)]);

        let preview = ShallowPreviewer::default()
            .table_as_object(refs.get(RefIndex::new(0)).unwrap(), &refs)
            .unwrap();
        let property = &preview.properties[0];
        assert_eq!(property.name, "self");
        assert_eq!(property.kind, RemoteObjectType::Object);
        assert_eq!(property.value.as_deref(), Some("Dict[1]"));
        assert_eq!(property.subtype, Some(RemoteObjectSubtype::Object));
    }

    #[test]
    fn test_reference_key_is_bracketed()
    {
        let items = vec![item(Node::reference(1), Node::string("v"))];
        let refs = ReferenceStore::from(vec![Reference::table(items), Reference::function(FunctionRef::native())]);

        let preview = ShallowPreviewer::default()
            .table_as_object(refs.get(RefIndex::new(0)).unwrap(), &refs)
            .unwrap();
        assert_eq!(preview.properties[0].name, "[Function]");
        assert_eq!(preview.properties[0].kind, RemoteObjectType::String);
    }

    #[test]
    fn test_dangling_nested_reference_is_an_error()
    {
        let items = vec![item(Node::string("x"), Node::reference(9))];
        let refs = ReferenceStore::from(vec![Reference::table(items)]);

        let result = ShallowPreviewer::default().table_as_object(refs.get(RefIndex::new(0)).unwrap(), &refs);
        assert!(result.is_err());
    }

    #[test]
    fn test_limit_marker_values()
    {
        let items = vec![item(Node::string("deep"), Node::limit_depth(3))];
        let refs = ReferenceStore::from(vec![Reference::table(items)]);

        let preview = ShallowPreviewer::default()
            .table_as_object(refs.get(RefIndex::new(0)).unwrap(), &refs)
            .unwrap();
        assert_eq!(preview.properties[0].subtype, Some(RemoteObjectSubtype::Null));
        assert!(preview.properties[0].value.as_deref().unwrap().contains('3'));
    }

    #[test]
    fn test_invalid_nested_node_is_an_error()
    {
        let invalid = Node::Invalid {
            tag: "literal".to_string(),
            arg: serde_json::json!({}),
        };
        let refs = ReferenceStore::from(vec![
            Reference::table(vec![item(Node::string("x"), invalid.clone())]),
            Reference::table(vec![item(invalid, Node::nil())]),
        ]);
        let previewer = ShallowPreviewer::default();

        for index in 0..2 {
            let result = previewer.table_as_object(refs.get(RefIndex::new(index)).unwrap(), &refs);
            assert!(matches!(result, Err(TabsonError::InvalidNode(_))));
        }
    }

    #[test]
    fn test_thread_and_userdata_have_no_properties()
    {
        let refs = ReferenceStore::new();
        let previewer = ShallowPreviewer::default();
        let thread = previewer.thread(&Reference::thread(), &refs).unwrap();
        assert_eq!(thread.description.as_deref(), Some("Thread"));
        assert!(thread.properties.is_empty());
        let userdata = previewer.userdata(&Reference::userdata(), &refs).unwrap();
        assert_eq!(userdata.description.as_deref(), Some("Userdata"));
    }
}
