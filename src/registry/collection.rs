//! Resource schema collection
//!
//! The immutable registry façade. A collection is constructed once, either
//! from a live descriptor graph or from persisted description files, and is
//! then shared read-only; no operation mutates it and queries perform no
//! I/O. Both construction paths converge on the same shape, so downstream
//! consumers can use them interchangeably.

use indexmap::IndexMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::LoaderConfig;
use crate::descriptor::ResourceDescriptor;
use crate::error::{RegistryError, RegistryResult};
use crate::registry::builder::build_document;
use crate::registry::index::SubresourceIndex;
use crate::schema::{idl, ResourceSchema};
use crate::validation;

/// Immutable registry of root schema documents plus the subresource index
#[derive(Debug)]
pub struct ResourceSchemaCollection {
    /// Root resource name -> root document, in construction order
    roots: IndexMap<String, Arc<ResourceSchema>>,

    /// Parent document -> ordered direct children
    index: SubresourceIndex,
}

impl ResourceSchemaCollection {
    /// Build a collection from an introspected descriptor graph
    ///
    /// Descriptors are validated first; a malformed descriptor aborts the
    /// whole construction. Root iteration order follows the input map.
    pub fn from_descriptors(
        descriptors: &IndexMap<String, ResourceDescriptor>,
    ) -> RegistryResult<Self> {
        let mut roots = IndexMap::with_capacity(descriptors.len());
        for (key, descriptor) in descriptors {
            validation::validate_descriptor(descriptor)?;
            roots.insert(key.clone(), build_document(descriptor));
        }

        tracing::info!(roots = roots.len(), "built schema collection from descriptors");
        Self::assemble(roots)
    }

    /// Load a collection from a set of persisted description files
    ///
    /// Root documents are keyed by their own name field; this path has no
    /// dependency on the resource model provider.
    pub fn load_from_files(paths: &[PathBuf]) -> RegistryResult<Self> {
        let mut roots = IndexMap::with_capacity(paths.len());
        for path in paths {
            let document = idl::read_document(path)?;
            let key = document.name.clone();
            if roots.insert(key, Arc::new(document)).is_some() {
                return Err(RegistryError::malformed_description_file(
                    path,
                    "duplicate root resource name",
                ));
            }
        }

        tracing::info!(roots = roots.len(), "loaded schema collection from description files");
        Self::assemble(roots)
    }

    /// Load a collection from every description file in the configured directory
    ///
    /// Files are taken in path order so the root listing is deterministic
    /// for a given directory content.
    pub fn load_from_dir(config: &LoaderConfig) -> RegistryResult<Self> {
        config.validate().map_err(|e| RegistryError::config(&e))?;

        let suffix = format!(".{}", config.extension);
        let mut paths = Vec::new();
        for entry in fs::read_dir(&config.idl_dir)? {
            let path = entry?.path();
            let is_idl = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(&suffix));
            if path.is_file() && is_idl {
                paths.push(path);
            }
        }
        paths.sort();

        Self::load_from_files(&paths)
    }

    /// Persist every root document as one description file per resource
    ///
    /// Files are named by qualified name plus the configured extension and
    /// can be read back with [`ResourceSchemaCollection::load_from_dir`].
    pub fn persist_to_dir(&self, config: &LoaderConfig) -> RegistryResult<()> {
        config.validate().map_err(|e| RegistryError::config(&e))?;
        fs::create_dir_all(&config.idl_dir)?;

        for (key, document) in &self.roots {
            let file_name = idl::document_file_name(document, key, &config.extension);
            idl::write_document(document, &config.idl_dir.join(file_name))?;
        }

        tracing::info!(
            roots = self.roots.len(),
            dir = %config.idl_dir.display(),
            "persisted schema collection"
        );
        Ok(())
    }

    /// Root-level exact-key lookup
    pub fn resource(&self, name: &str) -> RegistryResult<&Arc<ResourceSchema>> {
        self.roots
            .get(name)
            .ok_or_else(|| RegistryError::ResourceNotFound(name.to_string()))
    }

    /// Full root listing, in construction order
    pub fn resources(&self) -> &IndexMap<String, Arc<ResourceSchema>> {
        &self.roots
    }

    /// Ordered direct sub-resources of a document, empty when it has none
    pub fn subresources(&self, document: &ResourceSchema) -> &[Arc<ResourceSchema>] {
        self.index.children_of(document)
    }

    fn assemble(roots: IndexMap<String, Arc<ResourceSchema>>) -> RegistryResult<Self> {
        validation::check_unique_qualified_names(&roots)?;
        let index = SubresourceIndex::build(roots.values());
        Ok(Self { roots, index })
    }
}
