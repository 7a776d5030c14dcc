//! Advisory graph helpers
//!
//! Suggestions, the pre-enable conflict gate, and the missing-requirements
//! lookup. These paths prioritize availability over completeness: ids that
//! fail to resolve are dropped (and logged), never surfaced as errors.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::core::{Catalog, ServiceBlock};

/// Blocks related to the enabled set but not yet part of it.
///
/// Unions `suggested_with` over the enabled entries, subtracts the enabled
/// ids, and resolves the rest. First-seen order, duplicates collapsed, so the
/// result is deterministic for identical input.
pub fn suggested_blocks<'a>(catalog: &'a Catalog, enabled_ids: &[&str]) -> Vec<&'a ServiceBlock> {
    let enabled: HashSet<&str> = enabled_ids.iter().copied().collect();

    let mut suggestions: IndexSet<&str> = IndexSet::new();
    for id in enabled_ids {
        let Some(block) = catalog.get(id) else {
            continue;
        };
        for suggested in &block.suggested_with {
            if !enabled.contains(suggested.as_str()) {
                suggestions.insert(suggested.as_str());
            }
        }
    }

    suggestions
        .into_iter()
        .filter_map(|id| {
            let block = catalog.get(id);
            if block.is_none() {
                log::debug!("dropping suggestion for unknown block '{id}'");
            }
            block
        })
        .collect()
}

/// Result of the pre-enable conflict gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnableCheck {
    pub allowed: bool,
    /// Display names of already-enabled blocks the candidate conflicts with.
    pub conflicts: Vec<String>,
}

/// Cheap check whether enabling `block_id` would immediately conflict with
/// the already-enabled set. Used by interactive UIs before mutating state;
/// the full validator remains the authority at save time.
pub fn can_enable(catalog: &Catalog, block_id: &str, enabled_ids: &[&str]) -> EnableCheck {
    let Some(block) = catalog.get(block_id) else {
        return EnableCheck {
            allowed: false,
            conflicts: vec!["Block not found".into()],
        };
    };

    let enabled: HashSet<&str> = enabled_ids.iter().copied().collect();
    let conflicts: Vec<String> = block
        .incompatible_with
        .iter()
        .filter(|inc| enabled.contains(inc.as_str()))
        .map(|inc| catalog.display_name(inc).to_string())
        .collect();

    EnableCheck {
        allowed: conflicts.is_empty(),
        conflicts,
    }
}

/// Requirements of `block_id` not yet in the enabled set, resolved to their
/// catalog entries. Lets a caller offer "auto-enable dependencies".
/// Unresolvable candidate or requirement ids yield nothing.
pub fn missing_requirements<'a>(
    catalog: &'a Catalog,
    block_id: &str,
    enabled_ids: &[&str],
) -> Vec<&'a ServiceBlock> {
    let Some(block) = catalog.get(block_id) else {
        return Vec::new();
    };

    let enabled: HashSet<&str> = enabled_ids.iter().copied().collect();
    block
        .requires
        .iter()
        .filter(|req| !enabled.contains(req.as_str()))
        .filter_map(|req| {
            let target = catalog.get(req);
            if target.is_none() {
                log::debug!("dropping unresolvable requirement '{req}' of block '{block_id}'");
            }
            target
        })
        .collect()
}
