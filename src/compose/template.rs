//! Templates - named, ordered compositions of block instances
//!
//! A template exclusively owns its instance list; instances have no existence
//! outside it. Block order is significant for presentation and provisioning
//! order, never for validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::compose::instance::BlockInstance;
use crate::compose::validation::{CompositionValidator, ValidationReport};
use crate::core::{Catalog, ConfigValue};

/// A named, ordered collection of block instances.
///
/// Presets carry no id or timestamps until persisted; user-authored templates
/// get a UUID and UTC timestamps at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub blocks: Vec<BlockInstance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Template {
    /// New user-authored template with identity and timestamps.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Some(Uuid::new_v4().to_string()),
            name: name.into(),
            description: description.into(),
            blocks: Vec::new(),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Template skeleton without identity, as shipped presets are.
    pub fn preset(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            blocks: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Insert an instance, enforcing at most one instance per block id:
    /// inserting for an already-present block replaces the prior instance in
    /// place, keeping its position in the ordering.
    pub fn upsert(&mut self, instance: BlockInstance) {
        match self.blocks.iter_mut().find(|b| b.block_id == instance.block_id) {
            Some(existing) => *existing = instance,
            None => self.blocks.push(instance),
        }
    }

    /// Remove and return the instance for a block id.
    pub fn remove(&mut self, block_id: &str) -> Option<BlockInstance> {
        let pos = self.blocks.iter().position(|b| b.block_id == block_id)?;
        Some(self.blocks.remove(pos))
    }

    /// The instance for a block id, if present.
    pub fn instance(&self, block_id: &str) -> Option<&BlockInstance> {
        self.blocks.iter().find(|b| b.block_id == block_id)
    }

    pub fn instance_mut(&mut self, block_id: &str) -> Option<&mut BlockInstance> {
        self.blocks.iter_mut().find(|b| b.block_id == block_id)
    }

    /// Toggle an instance. Returns false when the block is not in the
    /// template.
    pub fn set_enabled(&mut self, block_id: &str, enabled: bool) -> bool {
        match self.instance_mut(block_id) {
            Some(instance) => {
                instance.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Select a version for an instance.
    pub fn set_version(&mut self, block_id: &str, version: impl Into<String>) -> bool {
        match self.instance_mut(block_id) {
            Some(instance) => {
                instance.version = Some(version.into());
                true
            }
            None => false,
        }
    }

    /// Set one config value on an instance.
    pub fn set_config_value(
        &mut self,
        block_id: &str,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> bool {
        match self.instance_mut(block_id) {
            Some(instance) => {
                instance.set_config(key, value);
                true
            }
            None => false,
        }
    }

    /// Ids of the enabled instances, in block order.
    pub fn enabled_ids(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter(|b| b.enabled)
            .map(|b| b.block_id.as_str())
            .collect()
    }

    /// Validate the template's composition against a catalog.
    pub fn validate(&self, catalog: &Catalog) -> ValidationReport {
        CompositionValidator::validate(catalog, &self.blocks)
    }

    /// Bump `updated_at`; callers do this after a batch of edits.
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

/// Persistence seam for the template collection.
///
/// The engine defines only the contract: a template round-trips through the
/// store without loss of block id, enabled flag, version, or config values.
/// Storage format and location are the collaborator's business.
pub trait TemplateStore {
    /// Load every stored template.
    fn load_all(&self) -> anyhow::Result<Vec<Template>>;

    /// Persist a template (insert or overwrite by id).
    fn save(&mut self, template: &Template) -> anyhow::Result<()>;

    /// Delete a stored template by id.
    fn remove(&mut self, id: &str) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks;

    fn default_instance(block_id: &str) -> BlockInstance {
        BlockInstance::default_for(blocks::builtin().get(block_id).unwrap())
    }

    #[test]
    fn test_new_template_has_identity() {
        let template = Template::new("My Stack", "Custom composition");
        assert!(template.id.is_some());
        assert!(template.created_at.is_some());
        assert_eq!(template.created_at, template.updated_at);
        assert!(template.blocks.is_empty());
    }

    #[test]
    fn test_preset_template_has_no_identity() {
        let template = Template::preset("Minimal", "Bare minimum");
        assert!(template.id.is_none());
        assert!(template.created_at.is_none());
        assert!(template.updated_at.is_none());
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut template = Template::new("t", "");
        template.upsert(default_instance("nginx"));
        template.upsert(default_instance("mysql"));

        let mut replacement = default_instance("nginx");
        replacement.set_config("port", 8080_i64);
        template.upsert(replacement);

        assert_eq!(template.blocks.len(), 2);
        // nginx kept its position and took the new config.
        assert_eq!(template.blocks[0].block_id, "nginx");
        assert_eq!(template.blocks[0].config_int("port", 80), 8080);
    }

    #[test]
    fn test_remove_and_lookup() {
        let mut template = Template::new("t", "");
        template.upsert(default_instance("redis"));
        assert!(template.instance("redis").is_some());

        let removed = template.remove("redis").unwrap();
        assert_eq!(removed.block_id, "redis");
        assert!(template.instance("redis").is_none());
        assert!(template.remove("redis").is_none());
    }

    #[test]
    fn test_mutators_return_false_for_absent_blocks() {
        let mut template = Template::new("t", "");
        assert!(!template.set_enabled("nginx", true));
        assert!(!template.set_version("nginx", "1.25"));
        assert!(!template.set_config_value("nginx", "port", 8080_i64));
    }

    #[test]
    fn test_enabled_ids_in_block_order() {
        let mut template = Template::new("t", "");
        template.upsert(default_instance("php-fpm")); // default enabled
        template.upsert(default_instance("soketi")); // default disabled
        template.upsert(default_instance("nginx")); // default enabled
        template.set_enabled("soketi", true);

        assert_eq!(template.enabled_ids(), ["php-fpm", "soketi", "nginx"]);
    }

    #[test]
    fn test_validate_delegates_to_validator() {
        let mut template = Template::new("t", "");
        template.upsert(default_instance("nginx"));
        let report = template.validate(blocks::builtin());
        assert!(!report.valid);
        assert_eq!(report.messages(), ["Nginx requires PHP-FPM"]);
    }

    #[test]
    fn test_template_json_round_trip() {
        let mut template = Template::new("My Stack", "Custom composition");
        template.upsert(default_instance("php-fpm"));
        template.upsert(default_instance("mysql"));
        template.set_version("mysql", "5.7");
        template.set_config_value("mysql", "database", "app");

        let json = serde_json::to_string(&template).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"blockId\":\"php-fpm\""));

        let back: Template = serde_json::from_str(&json).unwrap();
        assert_eq!(back, template);
        assert_eq!(back.instance("mysql").unwrap().version.as_deref(), Some("5.7"));
        assert_eq!(back.instance("mysql").unwrap().config_str("database", ""), "app");
    }
}
