//! Subresource index
//!
//! Derived parent-to-children lookup table, built once at collection
//! construction time by a full walk of every root document. The index is
//! keyed by document identity (the address of the document owned by this
//! collection), not by qualified name, so structurally identical documents
//! from two different collections never alias. Documents hold no parent
//! back-pointers.

use std::collections::HashMap;
use std::sync::Arc;

use crate::schema::ResourceSchema;

/// Parent document -> ordered direct children
#[derive(Debug, Default)]
pub struct SubresourceIndex {
    children: HashMap<usize, Vec<Arc<ResourceSchema>>>,
}

impl SubresourceIndex {
    /// Build the index over a forest of root documents
    ///
    /// Only documents with at least one sub-resource get an entry; child
    /// order is the order the builder or loader attached them.
    pub fn build<'a>(roots: impl Iterator<Item = &'a Arc<ResourceSchema>>) -> Self {
        let mut index = Self::default();
        for root in roots {
            index.record(root);
        }
        index
    }

    fn record(&mut self, document: &Arc<ResourceSchema>) {
        if !document.subresources.is_empty() {
            self.children
                .insert(identity(document), document.subresources.clone());
        }
        for child in &document.subresources {
            self.record(child);
        }
    }

    /// Direct children of a document, empty for childless or unknown documents
    pub fn children_of(&self, document: &ResourceSchema) -> &[Arc<ResourceSchema>] {
        self.children
            .get(&(document as *const ResourceSchema as usize))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of parents with at least one child
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check whether no document in the collection has children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

fn identity(document: &Arc<ResourceSchema>) -> usize {
    Arc::as_ptr(document) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ResourceDescriptor;
    use crate::registry::builder::build_document;

    fn widgets() -> Arc<ResourceSchema> {
        build_document(
            &ResourceDescriptor::collection("widgets")
                .with_subresource(ResourceDescriptor::collection("parts"))
                .with_subresource(ResourceDescriptor::action_set("maintenance")),
        )
    }

    #[test]
    fn test_children_in_order() {
        let root = widgets();
        let index = SubresourceIndex::build(std::iter::once(&root));

        let children = index.children_of(&root);
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name, "parts");
        assert_eq!(children[1].name, "maintenance");
    }

    #[test]
    fn test_childless_document_yields_empty_slice() {
        let root = widgets();
        let index = SubresourceIndex::build(std::iter::once(&root));

        let parts = &root.subresources[0];
        assert!(index.children_of(parts).is_empty());
    }

    #[test]
    fn test_nested_parents_are_indexed() {
        let root = build_document(
            &ResourceDescriptor::collection("groups").with_subresource(
                ResourceDescriptor::collection("contacts")
                    .with_subresource(ResourceDescriptor::collection("addresses")),
            ),
        );
        let index = SubresourceIndex::build(std::iter::once(&root));
        assert_eq!(index.len(), 2);

        let contacts = &root.subresources[0];
        let grandchildren = index.children_of(contacts);
        assert_eq!(grandchildren.len(), 1);
        assert_eq!(grandchildren[0].name, "addresses");
    }

    #[test]
    fn test_identity_keying_separates_collections() {
        // Two structurally identical forests; the index of one must not
        // answer for documents of the other.
        let first = widgets();
        let second = widgets();
        let index = SubresourceIndex::build(std::iter::once(&first));

        assert_eq!(index.children_of(&first).len(), 2);
        assert!(index.children_of(&second).is_empty());
    }

    #[test]
    fn test_empty_forest() {
        let index = SubresourceIndex::build(std::iter::empty());
        assert!(index.is_empty());
    }
}
