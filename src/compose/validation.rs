//! Composition validation engine
//!
//! Validates the enabled subset of a template's block instances against the
//! catalog's requirement and incompatibility edges. Produces a structured
//! `ValidationReport`; never fails, never panics, so callers can always
//! render diagnostics instead of crashing.

use std::collections::HashSet;

use crate::compose::instance::BlockInstance;
use crate::core::Catalog;

// ── Result types ────────────────────────────────────────────────────────────

/// A single validation finding with optional location and fix hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Block id where the problem was found (if applicable).
    pub block_id: Option<String>,
    /// Human-readable description.
    pub message: String,
    /// Optional suggestion for how to fix it.
    pub suggestion: Option<String>,
}

/// Overall validation result for one composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    fn ok() -> Self {
        Self {
            valid: true,
            diagnostics: Vec::new(),
        }
    }

    fn add(&mut self, block_id: Option<&str>, message: impl Into<String>, suggestion: Option<String>) {
        self.valid = false;
        self.diagnostics.push(Diagnostic {
            block_id: block_id.map(|s| s.to_string()),
            message: message.into(),
            suggestion,
        });
    }

    /// Messages only, for callers that render a flat error list.
    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }
}

// ── Validator ───────────────────────────────────────────────────────────────

/// Validates a set of block instances against the catalog graph.
pub struct CompositionValidator;

impl CompositionValidator {
    /// Run all checks over the given instances.
    ///
    /// Disabled instances are inert. Diagnostics come out in instance order,
    /// and per instance in rule order (missing requirements before
    /// incompatibilities), so identical input always yields an identical
    /// report. The incompatibility check is strictly directional: only edges
    /// declared on the enabled entry itself are consulted, because the
    /// catalog data does not guarantee symmetric declarations.
    pub fn validate(catalog: &Catalog, instances: &[BlockInstance]) -> ValidationReport {
        let mut report = ValidationReport::ok();

        let enabled_ids: HashSet<&str> = instances
            .iter()
            .filter(|i| i.enabled)
            .map(|i| i.block_id.as_str())
            .collect();

        for instance in instances {
            if !instance.enabled {
                continue;
            }

            let Some(block) = catalog.get(&instance.block_id) else {
                report.add(
                    Some(&instance.block_id),
                    format!("Unknown block: {}", instance.block_id),
                    Some("Remove the block from the template or update the catalog".into()),
                );
                continue;
            };

            for req in &block.requires {
                if !enabled_ids.contains(req.as_str()) {
                    report.add(
                        Some(&block.id),
                        format!("{} requires {}", block.name, catalog.display_name(req)),
                        Some(format!("Enable {} or disable {}", catalog.display_name(req), block.name)),
                    );
                }
            }

            for inc in &block.incompatible_with {
                if enabled_ids.contains(inc.as_str()) {
                    report.add(
                        Some(&block.id),
                        format!("{} is incompatible with {}", block.name, catalog.display_name(inc)),
                        Some(format!("Disable either {} or {}", block.name, catalog.display_name(inc))),
                    );
                }
            }
        }

        report
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
