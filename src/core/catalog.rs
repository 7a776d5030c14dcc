//! Service catalog - read-only registry of all available service blocks
//!
//! The catalog is built once from the static block tables and never mutated
//! afterwards. It supports:
//! - Block lookup by id
//! - Listing by category (registration order)
//! - Case-insensitive search for the block picker
//! - Data-integrity verification of the dependency/conflict graph

use std::collections::{HashMap, HashSet};

use super::block::{Category, ServiceBlock};

/// Read-only registry of service blocks.
///
/// Entries are kept in registration order (a `Vec`) with a side index for
/// id lookup, so `by_category` listings stay stable without any sorting.
#[derive(Debug, Clone)]
pub struct Catalog {
    blocks: Vec<ServiceBlock>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from a list of block definitions.
    ///
    /// Rejects duplicate ids; the deeper graph checks live in
    /// [`Catalog::integrity_errors`] so a caller can choose between failing
    /// fast and reporting everything at once.
    pub fn from_blocks(blocks: Vec<ServiceBlock>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(blocks.len());
        for (pos, block) in blocks.iter().enumerate() {
            if index.insert(block.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateBlock(block.id.clone()));
            }
        }
        Ok(Self { blocks, index })
    }

    /// Look up a block by id. Absence is a normal outcome — callers decide
    /// whether it becomes a diagnostic or a silent drop.
    pub fn get(&self, id: &str) -> Option<&ServiceBlock> {
        self.index.get(id).map(|&pos| &self.blocks[pos])
    }

    /// Whether a block with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All blocks in a category, in registration order.
    pub fn by_category(&self, category: Category) -> Vec<&ServiceBlock> {
        self.blocks.iter().filter(|b| b.category == category).collect()
    }

    /// Case-insensitive search over id, name and description, for the
    /// block picker. Advisory only.
    pub fn search(&self, query: &str) -> Vec<&ServiceBlock> {
        let query = query.to_lowercase();
        self.blocks
            .iter()
            .filter(|b| {
                b.id.to_lowercase().contains(&query)
                    || b.name.to_lowercase().contains(&query)
                    || b.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Iterate all blocks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ServiceBlock> {
        self.blocks.iter()
    }

    /// Number of registered blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Resolve an id to its display name, falling back to the raw id.
    /// Diagnostics use this so a dangling reference still reads sensibly.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|b| b.name.as_str()).unwrap_or(id)
    }

    /// Verify the graph invariants of the catalog data.
    ///
    /// The catalog is trusted static data; a non-empty result is an
    /// authoring defect to be caught at load time, not a runtime condition.
    /// Dangling `suggested_with` ids are advisory edges and therefore only
    /// logged, not reported as errors.
    pub fn integrity_errors(&self) -> Vec<CatalogError> {
        let mut errors = Vec::new();

        for block in &self.blocks {
            for req in &block.requires {
                if !self.contains(req) {
                    errors.push(CatalogError::DanglingRequires {
                        block: block.id.clone(),
                        target: req.clone(),
                    });
                }
            }
            for inc in &block.incompatible_with {
                if !self.contains(inc) {
                    errors.push(CatalogError::DanglingIncompatibility {
                        block: block.id.clone(),
                        target: inc.clone(),
                    });
                }
            }
            for sug in &block.suggested_with {
                if !self.contains(sug) {
                    log::warn!(
                        "block '{}' suggests unknown block '{}'; suggestion will never surface",
                        block.id,
                        sug
                    );
                }
            }

            match (&block.versions, &block.default_version) {
                (Some(versions), _) if versions.is_empty() => {
                    errors.push(CatalogError::EmptyVersions(block.id.clone()));
                }
                (Some(versions), Some(default)) if !versions.contains(default) => {
                    errors.push(CatalogError::UnknownDefaultVersion {
                        block: block.id.clone(),
                        version: default.clone(),
                    });
                }
                // A default version with no version list is equally dangling.
                (None, Some(default)) => {
                    errors.push(CatalogError::UnknownDefaultVersion {
                        block: block.id.clone(),
                        version: default.clone(),
                    });
                }
                _ => {}
            }

            let mut seen_keys = HashSet::new();
            for opt in &block.config_options {
                if !seen_keys.insert(opt.key.as_str()) {
                    errors.push(CatalogError::DuplicateOptionKey {
                        block: block.id.clone(),
                        key: opt.key.clone(),
                    });
                }
                if !opt.default_matches_kind() {
                    errors.push(CatalogError::BadOptionDefault {
                        block: block.id.clone(),
                        key: opt.key.clone(),
                    });
                }
            }
        }

        errors
    }
}

/// Catalog data-integrity errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two blocks share an id
    #[error("duplicate block id: {0}")]
    DuplicateBlock(String),

    /// A `requires` edge points at a block that does not exist
    #[error("block '{block}' requires unknown block '{target}'")]
    DanglingRequires { block: String, target: String },

    /// An `incompatible_with` edge points at a block that does not exist
    #[error("block '{block}' declares incompatibility with unknown block '{target}'")]
    DanglingIncompatibility { block: String, target: String },

    /// `default_version` is not a member of `versions`
    #[error("block '{block}' defaults to version '{version}' which is not listed")]
    UnknownDefaultVersion { block: String, version: String },

    /// `versions` is present but empty
    #[error("block '{0}' declares an empty version list")]
    EmptyVersions(String),

    /// Two config options of one block share a key
    #[error("block '{block}' declares config option key '{key}' twice")]
    DuplicateOptionKey { block: String, key: String },

    /// A config option default is inconsistent with its kind
    #[error("block '{block}' option '{key}' has a default inconsistent with its kind")]
    BadOptionDefault { block: String, key: String },
}
