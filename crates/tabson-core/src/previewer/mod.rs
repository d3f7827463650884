//! # Previewer
//!
//! Builds the nested [`ObjectPreview`] summaries that the dispatcher attaches
//! to thread, userdata and table descriptors.
//!
//! The dispatcher renders exactly one node and never walks into a value's
//! contents; everything below the top level is the previewer's job, including
//! guarding against cycles in the reference graph. Implementations are free
//! to go as deep as they like as long as they terminate.
//!
//! [`ShallowPreviewer`] is the implementation shipped with this crate. It
//! only looks one level down, so it terminates on any graph.

pub mod shallow;

use tabson_protocol::ObjectPreview;

use crate::error::Result;
use crate::types::{Reference, ReferenceStore};

pub use shallow::{PreviewConfig, ShallowPreviewer};

/// Source of previews for reference values.
///
/// Every method receives the reference being previewed plus the full store, so
/// nested references can be resolved. The caller may overwrite the returned
/// preview's `description`.
pub trait Previewer
{
    /// Preview a coroutine.
    ///
    /// ## Errors
    ///
    /// Fails if the preview needs a reference the store does not hold.
    fn thread(&self, reference: &Reference, refs: &ReferenceStore) -> Result<ObjectPreview>;

    /// Preview a userdata value.
    ///
    /// ## Errors
    ///
    /// Fails if the preview needs a reference the store does not hold.
    fn userdata(&self, reference: &Reference, refs: &ReferenceStore) -> Result<ObjectPreview>;

    /// Preview a table as an object with named properties.
    ///
    /// ## Errors
    ///
    /// Fails if the preview needs a reference the store does not hold.
    fn table_as_object(&self, reference: &Reference, refs: &ReferenceStore) -> Result<ObjectPreview>;

    /// Preview a table as an array with indexed elements.
    ///
    /// ## Errors
    ///
    /// Fails if the preview needs a reference the store does not hold.
    fn table_as_array(&self, reference: &Reference, refs: &ReferenceStore) -> Result<ObjectPreview>;
}
