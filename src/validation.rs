//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Construction-time structural validation
//!
//! Descriptors are validated before documents are built; qualified-name
//! uniqueness is checked on the finished document tree. Both checks are
//! fatal for the constructing call, no partial collection is returned.

use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::Arc;

use crate::descriptor::ResourceDescriptor;
use crate::error::{RegistryError, RegistryResult};
use crate::schema::ResourceSchema;

/// Validate one descriptor tree
///
/// A descriptor is malformed when its name is empty or when two of its
/// direct sub-resources share a name. Sub-resources are validated
/// recursively.
pub fn validate_descriptor(descriptor: &ResourceDescriptor) -> RegistryResult<()> {
    if descriptor.name.is_empty() {
        return Err(RegistryError::malformed_descriptor(
            "<unnamed>",
            "resource name is empty",
        ));
    }

    let mut seen = HashSet::new();
    for child in &descriptor.subresources {
        if !seen.insert(child.name.as_str()) {
            return Err(RegistryError::malformed_descriptor(
                &descriptor.name,
                &format!("duplicate sub-resource name '{}'", child.name),
            ));
        }
        validate_descriptor(child)?;
    }

    Ok(())
}

/// Check qualified-name uniqueness across a finished document forest
///
/// Root documents are qualified with their root map key, sub-resources
/// with their own name. A collision is rejected rather than shadowed.
pub fn check_unique_qualified_names(
    roots: &IndexMap<String, Arc<ResourceSchema>>,
) -> RegistryResult<()> {
    let mut seen = HashSet::new();
    for (key, document) in roots {
        check_document(document, key, &mut seen)?;
    }
    Ok(())
}

fn check_document(
    document: &ResourceSchema,
    key: &str,
    seen: &mut HashSet<String>,
) -> RegistryResult<()> {
    let qualified = document.qualified_name(key);
    if !seen.insert(qualified.clone()) {
        return Err(RegistryError::DuplicateQualifiedName(qualified));
    }
    for child in &document.subresources {
        check_document(child, &child.name, seen)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ResourceKind;

    #[test]
    fn test_valid_descriptor() {
        let descriptor = ResourceDescriptor::collection("widgets")
            .with_subresource(ResourceDescriptor::collection("parts"))
            .with_subresource(ResourceDescriptor::action_set("maintenance"));
        assert!(validate_descriptor(&descriptor).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let descriptor = ResourceDescriptor::collection("");
        let result = validate_descriptor(&descriptor);
        assert!(matches!(
            result,
            Err(RegistryError::MalformedDescriptor { .. })
        ));
    }

    #[test]
    fn test_empty_child_name_rejected() {
        let descriptor = ResourceDescriptor::collection("widgets")
            .with_subresource(ResourceDescriptor::collection(""));
        assert!(validate_descriptor(&descriptor).is_err());
    }

    #[test]
    fn test_duplicate_child_names_rejected() {
        let descriptor = ResourceDescriptor::collection("widgets")
            .with_subresource(ResourceDescriptor::collection("parts"))
            .with_subresource(ResourceDescriptor::association("parts"));

        let result = validate_descriptor(&descriptor);
        match result {
            Err(RegistryError::MalformedDescriptor { resource, message }) => {
                assert_eq!(resource, "widgets");
                assert!(message.contains("parts"));
            }
            other => panic!("expected MalformedDescriptor, got {:?}", other),
        }
    }

    fn leaf(name: &str, namespace: Option<&str>) -> Arc<ResourceSchema> {
        Arc::new(ResourceSchema {
            name: name.to_string(),
            namespace: namespace.map(str::to_string),
            kind: ResourceKind::Collection,
            subresources: Vec::new(),
        })
    }

    #[test]
    fn test_unique_qualified_names_accepted() {
        let mut roots = IndexMap::new();
        roots.insert("widgets".to_string(), leaf("widgets", Some("com.acme")));
        // Same local name in another namespace is a distinct qualified name.
        roots.insert("widgets2".to_string(), leaf("widgets", Some("com.other")));
        assert!(check_unique_qualified_names(&roots).is_ok());
    }

    #[test]
    fn test_duplicate_qualified_name_rejected() {
        let child = leaf("widgets", Some("com.acme"));
        let parent = Arc::new(ResourceSchema {
            name: "widgets".to_string(),
            namespace: Some("com.acme".to_string()),
            kind: ResourceKind::Collection,
            subresources: vec![child],
        });

        let mut roots = IndexMap::new();
        roots.insert("widgets".to_string(), parent);

        let result = check_unique_qualified_names(&roots);
        match result {
            Err(RegistryError::DuplicateQualifiedName(name)) => {
                assert_eq!(name, "com.acme.widgets");
            }
            other => panic!("expected DuplicateQualifiedName, got {:?}", other),
        }
    }
}
