//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Schema document definitions for the resource schema registry
//!
//! This module provides the externally visible description of a resource
//! and its serialized IDL form.

pub mod document;
pub mod idl;

// Re-export main types for convenience
pub use document::ResourceSchema;
