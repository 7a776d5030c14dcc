//! Stack Blocks - service catalog and composition engine for DevStack
//!
//! This crate provides the service block model for the DevStack environment
//! builder: the catalog of installable services, default instance creation,
//! composition validation over the dependency/conflict graph, and the
//! advisory suggestion helpers driving the interactive editor.

pub mod blocks;
pub mod compose;
pub mod core;
mod tests;

// Re-export commonly used types
pub use crate::compose::{
    can_enable, missing_requirements, suggested_blocks, BlockInstance, CompositionValidator,
    Diagnostic, EnableCheck, Template, TemplateStore, ValidationReport,
};
pub use crate::core::{
    categories, Catalog, CatalogError, Category, ConfigOption, ConfigValue, ServiceBlock,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
