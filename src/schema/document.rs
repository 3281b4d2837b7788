//! Schema document representation
//!
//! This module contains the `ResourceSchema` struct, the schema-level
//! description of one resource derived either from a live descriptor or
//! from a persisted description file.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::descriptor::ResourceKind;

/// Schema-level description of one API resource
///
/// A document carries exactly one structural kind, an optional namespace
/// and the documents of its direct sub-resources. Documents are owned by
/// the collection that built or loaded them and are never shared across
/// collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceSchema {
    /// Resource name
    pub name: String,

    /// Optional namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Structural kind
    pub kind: ResourceKind,

    /// Nested sub-resource documents, in build order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subresources: Vec<Arc<ResourceSchema>>,
}

impl ResourceSchema {
    /// Check whether the document describes a collection resource
    pub fn has_collection(&self) -> bool {
        self.kind == ResourceKind::Collection
    }

    /// Check whether the document describes an association resource
    pub fn has_association(&self) -> bool {
        self.kind == ResourceKind::Association
    }

    /// Check whether the document describes an action-set resource
    pub fn has_action_set(&self) -> bool {
        self.kind == ResourceKind::ActionSet
    }

    /// Check whether the document carries a namespace
    pub fn has_namespace(&self) -> bool {
        self.namespace.is_some()
    }

    /// Compute the qualified name of this document under a lookup key
    ///
    /// The key is the one used to reach the document: the root map key for
    /// root documents, or the document's own `name` for sub-resources.
    /// Qualified names are computed on demand and never stored.
    pub fn qualified_name(&self, key: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}.{}", namespace, key),
            None => key.to_string(),
        }
    }
}
