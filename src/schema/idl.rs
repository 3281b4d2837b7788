//! Serialized IDL form of schema documents
//!
//! One persisted description file encodes one root document as JSON,
//! kind tag, optional namespace and nested sub-resources included. Parsing
//! and file I/O live here; the loader in the registry module only decides
//! which files to read.

use std::fs;
use std::path::Path;

use crate::error::{RegistryError, RegistryResult};
use crate::schema::ResourceSchema;

/// Parse one serialized schema document
///
/// `origin` identifies the document in errors; it is the file path for
/// documents read from disk.
pub fn parse_document(input: &str, origin: &Path) -> RegistryResult<ResourceSchema> {
    serde_json::from_str(input)
        .map_err(|e| RegistryError::malformed_description_file(origin, &e.to_string()))
}

/// Read and parse one description file
pub fn read_document(path: &Path) -> RegistryResult<ResourceSchema> {
    let input = fs::read_to_string(path)?;
    let document = parse_document(&input, path)?;
    tracing::debug!(path = %path.display(), resource = %document.name, "parsed description file");
    Ok(document)
}

/// Write one document as a pretty-printed description file
pub fn write_document(document: &ResourceSchema, path: &Path) -> RegistryResult<()> {
    let mut encoded = serde_json::to_string_pretty(document)?;
    encoded.push('\n');
    fs::write(path, encoded)?;
    tracing::debug!(path = %path.display(), resource = %document.name, "wrote description file");
    Ok(())
}

/// File name for a persisted root document: qualified name plus extension
pub fn document_file_name(document: &ResourceSchema, key: &str, extension: &str) -> String {
    format!("{}.{}", document.qualified_name(key), extension)
}
