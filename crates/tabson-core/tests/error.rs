//! Tests for error handling

use std::io;

use tabson_core::error::{Result, TabsonError};
use tabson_core::types::{RefIndex, ReferenceStore};

#[test]
fn test_reference_out_of_range_display()
{
    let error = TabsonError::ReferenceOutOfRange { index: 7, len: 3 };
    let message = format!("{}", error);
    assert!(message.contains('7'));
    assert!(message.contains('3'));
    assert!(message.contains("out of range"));
}

#[test]
fn test_invalid_node_display()
{
    let error = TabsonError::InvalidNode("bad arg".to_string());
    let message = format!("{}", error);
    assert!(message.contains("Invalid node"));
    assert!(message.contains("bad arg"));
}

#[test]
fn test_io_error_conversion()
{
    let io_err = io::Error::new(io::ErrorKind::NotFound, "snapshot.json");
    let error: TabsonError = io_err.into();

    match error {
        TabsonError::Io(_) => {
            // Expected: io::Error should convert to Io variant
        }
        _ => panic!("Expected Io variant"),
    }
}

#[test]
fn test_json_error_conversion()
{
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: TabsonError = json_err.into();
    assert!(matches!(error, TabsonError::Json(_)));
}

#[test]
fn test_store_lookup_error()
{
    let store = ReferenceStore::new();
    assert!(matches!(
        store.get(RefIndex::new(0)),
        Err(TabsonError::ReferenceOutOfRange { index: 0, len: 0 })
    ));
}

#[test]
fn test_result_type()
{
    // Test that Result type is properly aliased
    let _result: Result<()> = Ok(());
    let _error_result: Result<()> = Err(TabsonError::InvalidNode("x".to_string()));
}
