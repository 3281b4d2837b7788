//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Configuration for the description-file loader
//!
//! This module provides the configuration structure and validation for
//! the persisted-IDL construction path.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Description-file loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Directory holding the persisted description files
    pub idl_dir: PathBuf,

    /// File extension of description files, without the leading dot
    pub extension: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            idl_dir: PathBuf::from("idl"),
            extension: "restspec.json".to_string(),
        }
    }
}

impl LoaderConfig {
    /// Create a configuration for one directory, keeping the default extension
    pub fn for_dir(idl_dir: impl Into<PathBuf>) -> Self {
        Self {
            idl_dir: idl_dir.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.idl_dir.as_os_str().is_empty() {
            return Err("idl_dir must not be empty".to_string());
        }

        if self.extension.is_empty() {
            return Err("extension must not be empty".to_string());
        }

        if self.extension.starts_with('.') {
            return Err("extension must not start with a dot".to_string());
        }

        Ok(())
    }
}
