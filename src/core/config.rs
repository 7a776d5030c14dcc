//! Config option system for service blocks
//!
//! Every service block declares a list of tunable config options (ports,
//! credentials, memory limits, feature toggles). This module defines the
//! option descriptions, the value variant they produce, and the typed
//! accessors used by provisioning collaborators.

use serde::{Deserialize, Serialize};

/// One selectable choice of a select-style option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectChoice {
    /// Stored value (what ends up in the instance config).
    pub value: String,
    /// Human-readable label.
    pub label: String,
}

impl SelectChoice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The kind of widget/value a config option carries.
///
/// The choice list lives inside the `Select` variant, so an option can only
/// have choices when it is a select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OptionKind {
    /// Single-line text input
    Text,
    /// Numeric input
    Number,
    /// Dropdown over a fixed set of choices
    Select { choices: Vec<SelectChoice> },
    /// Boolean toggle
    Checkbox,
    /// Multi-line text area
    #[serde(rename = "textarea")]
    Multiline,
}

/// A concrete config value held by a block instance.
///
/// Untagged serde representation: a JSON string, integer or boolean
/// round-trips without any wrapper, matching the historical on-disk form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Free or enumerated text (select values are carried as text)
    Text(String),
    /// Integer value
    Integer(i64),
    /// Boolean value
    Boolean(bool),
}

impl ConfigValue {
    /// Try to view the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to view the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to view the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Text(s)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Integer(i)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Boolean(b)
    }
}

impl From<ConfigValue> for serde_json::Value {
    fn from(value: ConfigValue) -> Self {
        match value {
            ConfigValue::Text(s) => serde_json::Value::String(s),
            ConfigValue::Integer(i) => serde_json::Value::Number(i.into()),
            ConfigValue::Boolean(b) => serde_json::Value::Bool(b),
        }
    }
}

impl ConfigValue {
    /// Convert from opaque JSON, for collaborators that store config as
    /// `serde_json::Value`. Floats, nulls, arrays and objects are not config
    /// values and yield `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(ConfigValue::Text(s.clone())),
            serde_json::Value::Number(n) => n.as_i64().map(ConfigValue::Integer),
            serde_json::Value::Bool(b) => Some(ConfigValue::Boolean(*b)),
            _ => None,
        }
    }
}

/// Description of one tunable field of a service block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigOption {
    /// Stable key, unique within the block; used as the config map key.
    pub key: String,
    /// Human-readable name (presentation only).
    pub label: String,
    /// Kind of value this option carries.
    #[serde(flatten)]
    pub kind: OptionKind,
    /// Default value, consistent with `kind`.
    pub default: ConfigValue,
    /// Optional help text (presentation only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ConfigOption {
    /// Single-line text option.
    pub fn text(key: impl Into<String>, label: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: OptionKind::Text,
            default: ConfigValue::Text(default.into()),
            description: None,
        }
    }

    /// Numeric option.
    pub fn number(key: impl Into<String>, label: impl Into<String>, default: i64) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: OptionKind::Number,
            default: ConfigValue::Integer(default),
            description: None,
        }
    }

    /// Boolean toggle.
    pub fn checkbox(key: impl Into<String>, label: impl Into<String>, default: bool) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: OptionKind::Checkbox,
            default: ConfigValue::Boolean(default),
            description: None,
        }
    }

    /// Multi-line text area.
    pub fn multiline(
        key: impl Into<String>,
        label: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: OptionKind::Multiline,
            default: ConfigValue::Text(default.into()),
            description: None,
        }
    }

    /// Dropdown over `(value, label)` choices. The default must be one of the
    /// choice values; the catalog integrity check enforces it.
    pub fn select(
        key: impl Into<String>,
        label: impl Into<String>,
        default: impl Into<String>,
        choices: Vec<SelectChoice>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: OptionKind::Select { choices },
            default: ConfigValue::Text(default.into()),
            description: None,
        }
    }

    /// Attach help text.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether `default` is consistent with `kind` (select defaults must be
    /// one of the declared choice values).
    pub fn default_matches_kind(&self) -> bool {
        match (&self.kind, &self.default) {
            (OptionKind::Text, ConfigValue::Text(_)) => true,
            (OptionKind::Multiline, ConfigValue::Text(_)) => true,
            (OptionKind::Number, ConfigValue::Integer(_)) => true,
            (OptionKind::Checkbox, ConfigValue::Boolean(_)) => true,
            (OptionKind::Select { choices }, ConfigValue::Text(v)) => {
                choices.iter().any(|c| c.value == *v)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_accessors() {
        assert_eq!(ConfigValue::Text("80M".into()).as_str(), Some("80M"));
        assert_eq!(ConfigValue::Integer(3306).as_int(), Some(3306));
        assert_eq!(ConfigValue::Boolean(true).as_bool(), Some(true));
        assert_eq!(ConfigValue::Integer(1).as_str(), None);
        assert_eq!(ConfigValue::Text("x".into()).as_int(), None);
    }

    #[test]
    fn test_value_untagged_serde() {
        let port = ConfigValue::Integer(6379);
        assert_eq!(serde_json::to_value(&port).unwrap(), json!(6379));

        let parsed: ConfigValue = serde_json::from_value(json!("256mb")).unwrap();
        assert_eq!(parsed, ConfigValue::Text("256mb".into()));

        let parsed: ConfigValue = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(parsed, ConfigValue::Boolean(false));
    }

    #[test]
    fn test_json_value_round_trip() {
        for value in [
            ConfigValue::Text("laravel".into()),
            ConfigValue::Integer(8080),
            ConfigValue::Boolean(true),
        ] {
            let json: serde_json::Value = value.clone().into();
            assert_eq!(ConfigValue::from_json(&json), Some(value));
        }
        assert_eq!(ConfigValue::from_json(&json!(null)), None);
        assert_eq!(ConfigValue::from_json(&json!([1, 2])), None);
        assert_eq!(ConfigValue::from_json(&json!(1.5)), None);
    }

    #[test]
    fn test_select_default_must_be_a_choice() {
        let opt = ConfigOption::select(
            "memory_limit",
            "Memory Limit",
            "256M",
            vec![
                SelectChoice::new("128M", "128 MB"),
                SelectChoice::new("256M", "256 MB"),
            ],
        );
        assert!(opt.default_matches_kind());

        let bad = ConfigOption::select(
            "memory_limit",
            "Memory Limit",
            "2G",
            vec![SelectChoice::new("128M", "128 MB")],
        );
        assert!(!bad.default_matches_kind());
    }

    #[test]
    fn test_kind_default_mismatch() {
        let mut opt = ConfigOption::number("port", "Port", 80);
        assert!(opt.default_matches_kind());
        opt.default = ConfigValue::Text("80".into());
        assert!(!opt.default_matches_kind());
    }

    #[test]
    fn test_option_serde_uses_kind_tag() {
        let opt = ConfigOption::select(
            "package_manager",
            "Package Manager",
            "npm",
            vec![
                SelectChoice::new("npm", "NPM"),
                SelectChoice::new("yarn", "Yarn"),
            ],
        );
        let json = serde_json::to_value(&opt).unwrap();
        assert_eq!(json["kind"], "select");
        assert_eq!(json["choices"][1]["value"], "yarn");
        assert_eq!(json["default"], "npm");

        let textarea = ConfigOption::multiline("modules", "Nuxt Modules", "@pinia/nuxt");
        let json = serde_json::to_value(&textarea).unwrap();
        assert_eq!(json["kind"], "textarea");
    }

    #[test]
    fn test_describe_builder() {
        let opt = ConfigOption::multiline("extensions", "PHP Extensions", "pdo_mysql, redis")
            .describe("Comma-separated list of PHP extensions");
        assert_eq!(
            opt.description.as_deref(),
            Some("Comma-separated list of PHP extensions")
        );
    }
}
