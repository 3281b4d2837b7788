//! Schema builder
//!
//! Pure transformation from a descriptor tree to a schema document tree,
//! one document per descriptor. Kind, name and namespace are copied
//! verbatim; the registry performs no inference. Descriptor validation
//! happens before the builder runs, see the validation module.

use std::sync::Arc;

use crate::descriptor::ResourceDescriptor;
use crate::schema::ResourceSchema;

/// Build the schema document for one descriptor and all of its children
///
/// Deterministic for a given input tree; child documents are attached in
/// descriptor declaration order. A descriptor with no children yields a
/// document with no sub-resources.
pub fn build_document(descriptor: &ResourceDescriptor) -> Arc<ResourceSchema> {
    let subresources = descriptor
        .subresources
        .iter()
        .map(build_document)
        .collect();

    Arc::new(ResourceSchema {
        name: descriptor.name.clone(),
        namespace: descriptor.namespace.clone(),
        kind: descriptor.kind,
        subresources,
    })
}
