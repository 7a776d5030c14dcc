//! Core service block abstractions
//!
//! This module defines the fundamental types of the composition engine:
//! config options and values, service block definitions, and the read-only
//! catalog that holds them.

pub mod block;
pub mod catalog;
pub mod config;

pub use self::block::{categories, Category, CategoryInfo, ServiceBlock};
pub use self::catalog::{Catalog, CatalogError};
pub use self::config::{ConfigOption, ConfigValue, OptionKind, SelectChoice};
