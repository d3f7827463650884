//! Tests for table classification

use tabson_core::classify::{classify, is_array_like, is_dict_like, TableShape};
use tabson_core::types::{FunctionRef, Node, Reference, TableItem};

fn table(keys: Vec<Node>) -> Reference
{
    Reference::table(keys.into_iter().map(|key| TableItem::new(key, Node::boolean(true))).collect())
}

#[test]
fn test_string_keys_are_dict_like()
{
    let reference = table(vec![Node::string("name"), Node::string("age")]);
    assert!(is_dict_like(&reference));
    assert!(!is_array_like(&reference));
    assert_eq!(classify(&reference), Some(TableShape::Dict));
}

#[test]
fn test_sequential_keys_are_array_like()
{
    let reference = table(vec![Node::integer(1), Node::integer(2), Node::integer(3)]);
    assert!(is_array_like(&reference));
    assert!(!is_dict_like(&reference));
    assert_eq!(classify(&reference), Some(TableShape::Array));
}

#[test]
fn test_integral_float_keys_are_positions()
{
    let reference = table(vec![Node::float(1.0), Node::integer(2)]);
    assert!(is_array_like(&reference));
}

#[test]
fn test_out_of_order_keys_are_not_array_like()
{
    let reference = table(vec![Node::integer(2), Node::integer(1)]);
    assert!(!is_array_like(&reference));
    assert_eq!(classify(&reference), Some(TableShape::Opaque));
}

#[test]
fn test_keys_with_gap_are_not_array_like()
{
    let reference = table(vec![Node::integer(1), Node::integer(3)]);
    assert!(!is_array_like(&reference));
}

#[test]
fn test_zero_based_keys_are_not_array_like()
{
    let reference = table(vec![Node::integer(0), Node::integer(1)]);
    assert!(!is_array_like(&reference));
}

#[test]
fn test_mixed_keys_are_opaque()
{
    let reference = table(vec![Node::integer(1), Node::string("n")]);
    assert!(!is_dict_like(&reference));
    assert!(!is_array_like(&reference));
    assert_eq!(classify(&reference), Some(TableShape::Opaque));
}

#[test]
fn test_non_literal_keys_are_opaque()
{
    let reference = table(vec![Node::reference(0)]);
    assert_eq!(classify(&reference), Some(TableShape::Opaque));

    let reference = table(vec![Node::special("inf")]);
    assert_eq!(classify(&reference), Some(TableShape::Opaque));
}

#[test]
fn test_empty_table_is_neither()
{
    let reference = table(vec![]);
    assert!(!is_dict_like(&reference));
    assert!(!is_array_like(&reference));
    assert_eq!(classify(&reference), Some(TableShape::Opaque));
}

#[test]
fn test_metatable_disables_both_shapes()
{
    let dict = table(vec![Node::string("a")]).with_metatable();
    assert!(!is_dict_like(&dict));
    assert!(!is_array_like(&dict));

    let array = table(vec![Node::integer(1)]).with_metatable();
    assert!(!is_dict_like(&array));
    assert!(!is_array_like(&array));
    assert_eq!(classify(&array), Some(TableShape::Opaque));
}

#[test]
fn test_shapes_are_exclusive()
{
    let candidates = vec![
        table(vec![Node::string("a")]),
        table(vec![Node::integer(1)]),
        table(vec![Node::integer(1), Node::string("a")]),
        table(vec![]),
        table(vec![Node::boolean(false)]),
    ];
    for reference in &candidates {
        assert!(!(is_dict_like(reference) && is_array_like(reference)));
    }
}

#[test]
fn test_non_tables_are_not_classified()
{
    let function = Reference::function(FunctionRef::native());
    assert!(!is_dict_like(&function));
    assert!(!is_array_like(&function));
    assert_eq!(classify(&function), None);
    assert_eq!(classify(&Reference::thread()), None);
}

#[test]
fn test_shape_display()
{
    assert_eq!(TableShape::Dict.to_string(), "dict");
    assert_eq!(TableShape::Array.to_string(), "array");
    assert_eq!(TableShape::Opaque.to_string(), "table");
}
