//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Error handling for the resource schema registry
//!
//! This module provides error types and result aliases for registry
//! construction and query operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Resource schema registry error types
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A resource descriptor is structurally invalid
    #[error("Malformed descriptor '{resource}': {message}")]
    MalformedDescriptor { resource: String, message: String },

    /// A persisted description file failed to parse or is missing required fields
    #[error("Malformed description file '{path}': {message}")]
    MalformedDescriptionFile { path: PathBuf, message: String },

    /// Root-level lookup key is absent from the collection
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// Two documents in one collection resolve to the same qualified name
    #[error("Duplicate qualified name: {0}")]
    DuplicateQualifiedName(String),

    /// I/O error while reading or writing description files
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Serialization error while writing description files
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl RegistryError {
    /// Create a configuration error
    pub fn config(message: &str) -> Self {
        Self::Config {
            message: message.to_string(),
        }
    }

    /// Create a malformed descriptor error
    pub fn malformed_descriptor(resource: &str, message: &str) -> Self {
        Self::MalformedDescriptor {
            resource: resource.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a malformed description file error
    pub fn malformed_description_file(path: &std::path::Path, message: &str) -> Self {
        Self::MalformedDescriptionFile {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    /// Create an I/O error
    pub fn io(message: &str) -> Self {
        Self::Io {
            message: message.to_string(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: &str) -> Self {
        Self::Serialization {
            message: message.to_string(),
        }
    }

    /// Check whether this error is recoverable for the caller
    ///
    /// Construction-time errors are fatal for the constructing call; only
    /// lookup misses are expected to be handled by querying with a
    /// different key.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ResourceNotFound(_))
    }
}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = RegistryError::config("test error");
        assert!(matches!(error, RegistryError::Config { .. }));

        let error = RegistryError::malformed_descriptor("widgets", "empty name");
        assert!(matches!(error, RegistryError::MalformedDescriptor { .. }));

        let error = RegistryError::io("disk gone");
        assert!(matches!(error, RegistryError::Io { .. }));
    }

    #[test]
    fn test_error_recoverable() {
        let error = RegistryError::ResourceNotFound("widgets".to_string());
        assert!(error.is_recoverable());

        let error = RegistryError::DuplicateQualifiedName("com.acme.widgets".to_string());
        assert!(!error.is_recoverable());

        let error = RegistryError::malformed_descriptor("widgets", "bad");
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let error = RegistryError::ResourceNotFound("widgets".to_string());
        assert_eq!(error.to_string(), "Resource not found: widgets");

        let error = RegistryError::malformed_descriptor("widgets", "empty name");
        assert_eq!(
            error.to_string(),
            "Malformed descriptor 'widgets': empty name"
        );
    }
}
