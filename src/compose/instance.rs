//! Block instances - configured uses of a catalog block inside a template

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ConfigValue, ServiceBlock};

/// A configured, possibly-disabled use of one service block.
///
/// `block_id` is a lookup key into the catalog, not ownership. Disabled
/// instances are inert for validation. The config map is insertion-ordered so
/// it tracks the block's declared option order, and serde uses the camelCase
/// field names of the historical JSON form (`blockId`), keeping templates
/// round-trippable without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInstance {
    pub block_id: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub config: IndexMap<String, ConfigValue>,
}

impl BlockInstance {
    /// Materialize the default instance of a block: every declared config
    /// option keyed to its default in declaration order, enabled and version
    /// taken from the block definition. Cannot fail.
    pub fn default_for(block: &ServiceBlock) -> Self {
        let config = block
            .config_options
            .iter()
            .map(|opt| (opt.key.clone(), opt.default.clone()))
            .collect();
        Self {
            block_id: block.id.clone(),
            enabled: block.default_enabled,
            version: block.default_version.clone(),
            config,
        }
    }

    /// Set a config value, replacing any previous value for the key.
    pub fn set_config(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.config.insert(key.into(), value.into());
    }

    /// String config value with a caller-supplied fallback. Provisioning
    /// collaborators read config through these rather than matching variants.
    pub fn config_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.config.get(key).and_then(ConfigValue::as_str).unwrap_or(default)
    }

    /// Integer config value with a fallback.
    pub fn config_int(&self, key: &str, default: i64) -> i64 {
        self.config.get(key).and_then(ConfigValue::as_int).unwrap_or(default)
    }

    /// Boolean config value with a fallback.
    pub fn config_bool(&self, key: &str, default: bool) -> bool {
        self.config.get(key).and_then(ConfigValue::as_bool).unwrap_or(default)
    }
}
