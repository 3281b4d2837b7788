//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Resource Schema Registry
//!
//! This crate converts a graph of introspected API resource descriptors
//! into a hierarchical, namespace-qualified collection of schema documents
//! and exposes lookup and parent-to-children traversal over it. The same
//! collection shape can alternatively be loaded from persisted description
//! files, so both construction paths are interchangeable for downstream
//! documentation and codegen tooling.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod schema;
pub mod validation;

// Re-export main types
pub use config::LoaderConfig;
pub use descriptor::{ResourceDescriptor, ResourceKind};
pub use error::{RegistryError, RegistryResult};
pub use registry::{ResourceSchemaCollection, SubresourceIndex};
pub use schema::ResourceSchema;

/// Registry version
pub const REGISTRY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Registry name
pub const REGISTRY_NAME: &str = "resource-schema-registry";
