//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Registry construction and query operations
//!
//! This module provides the schema builder, the subresource index and the
//! immutable collection façade over both construction paths.

pub mod builder;
pub mod collection;
pub mod index;

// Re-export main types for convenience
pub use collection::ResourceSchemaCollection;
pub use index::SubresourceIndex;
