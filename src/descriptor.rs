//! Resource descriptor input model
//!
//! This module contains the introspection-side representation of an API
//! resource tree, as handed over by a resource model provider. Descriptors
//! are read-only input to the registry; the registry never mutates them.

use serde::{Deserialize, Serialize};

/// Structural kind of a resource
///
/// Every resource is exactly one of these; the registry copies the kind
/// verbatim and performs no inference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Keyed collection resource
    Collection,

    /// Association resource (compound-key relation)
    Association,

    /// Action-set resource (free-standing actions, no entity key)
    ActionSet,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Collection => write!(f, "collection"),
            ResourceKind::Association => write!(f, "association"),
            ResourceKind::ActionSet => write!(f, "action_set"),
        }
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "collection" => Ok(ResourceKind::Collection),
            "association" => Ok(ResourceKind::Association),
            "action_set" => Ok(ResourceKind::ActionSet),
            _ => Err(format!("Unknown resource kind: {}", s)),
        }
    }
}

/// Introspected description of one API resource and its sub-resources
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Resource name
    pub name: String,

    /// Optional namespace
    pub namespace: Option<String>,

    /// Structural kind
    pub kind: ResourceKind,

    /// Nested sub-resource descriptors, in declaration order
    pub subresources: Vec<ResourceDescriptor>,
}

impl ResourceDescriptor {
    /// Create a new descriptor with no namespace and no sub-resources
    pub fn new(name: &str, kind: ResourceKind) -> Self {
        Self {
            name: name.to_string(),
            namespace: None,
            kind,
            subresources: Vec::new(),
        }
    }

    /// Create a collection descriptor
    pub fn collection(name: &str) -> Self {
        Self::new(name, ResourceKind::Collection)
    }

    /// Create an association descriptor
    pub fn association(name: &str) -> Self {
        Self::new(name, ResourceKind::Association)
    }

    /// Create an action-set descriptor
    pub fn action_set(name: &str) -> Self {
        Self::new(name, ResourceKind::ActionSet)
    }

    /// Set the namespace
    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = Some(namespace.to_string());
        self
    }

    /// Append a sub-resource descriptor
    pub fn with_subresource(mut self, child: ResourceDescriptor) -> Self {
        self.subresources.push(child);
        self
    }
}
