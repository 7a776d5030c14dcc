//! Service block definitions
//!
//! A `ServiceBlock` is the immutable description of one installable service
//! type: identity, presentation metadata, config options, selectable versions,
//! and the dependency/conflict/suggestion edges that tie the catalog together.

use serde::{Deserialize, Serialize};

use super::config::ConfigOption;

/// Service category enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Language runtimes and app frameworks (PHP-FPM, Node.js, Astro, …)
    Runtime,
    /// Web servers and reverse proxies
    Webserver,
    /// Relational and document databases
    Database,
    /// In-memory caches
    Cache,
    /// Search engines
    Search,
    /// Message/work queues
    Queue,
    /// Mail catchers for local development
    Mail,
    /// WebSocket servers
    Websocket,
    /// Object storage
    Storage,
    /// Admin and developer tools
    Tools,
}

impl Category {
    /// Human-readable name for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Runtime => "Runtime",
            Category::Webserver => "Web Server",
            Category::Database => "Database",
            Category::Cache => "Cache",
            Category::Search => "Search",
            Category::Queue => "Queue",
            Category::Mail => "Mail",
            Category::Websocket => "WebSocket",
            Category::Storage => "Storage",
            Category::Tools => "Tools",
        }
    }

    /// Icon shown next to the category in pickers.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Runtime => "⚙️",
            Category::Webserver => "🌐",
            Category::Database => "🗄️",
            Category::Cache => "⚡",
            Category::Search => "🔍",
            Category::Queue => "📋",
            Category::Mail => "📧",
            Category::Websocket => "📡",
            Category::Storage => "☁️",
            Category::Tools => "🔧",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the fixed category listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub category: Category,
    pub label: &'static str,
    pub icon: &'static str,
}

/// The hand-authored category listing, in presentation order. Independent of
/// which blocks currently exist — a category may legitimately be empty.
pub fn categories() -> &'static [CategoryInfo] {
    const CATEGORY_ORDER: [Category; 10] = [
        Category::Runtime,
        Category::Webserver,
        Category::Database,
        Category::Cache,
        Category::Search,
        Category::Queue,
        Category::Mail,
        Category::Websocket,
        Category::Storage,
        Category::Tools,
    ];
    static INFOS: once_cell::sync::Lazy<Vec<CategoryInfo>> = once_cell::sync::Lazy::new(|| {
        CATEGORY_ORDER
            .iter()
            .map(|&category| CategoryInfo {
                category,
                label: category.label(),
                icon: category.icon(),
            })
            .collect()
    });
    &INFOS
}

/// Immutable definition of one installable service type.
///
/// `requires` is a hard dependency: every listed id must be enabled whenever
/// this block is. `incompatible_with` is checked strictly in the declared
/// direction — the catalog data does not guarantee symmetry, and the engine
/// never infers it. `suggested_with` is advisory only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBlock {
    /// Globally unique, stable slug; primary key of the catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Icon shown in pickers.
    pub icon: String,
    /// Category the block is listed under.
    pub category: Category,
    /// One-line description.
    pub description: String,
    /// Tunable fields, in declaration order; keys unique within the block.
    pub config_options: Vec<ConfigOption>,
    /// Ids that must be enabled whenever this block is enabled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,
    /// Ids that must not be enabled whenever this block is enabled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incompatible_with: Vec<String>,
    /// Advisory related blocks; no validation effect.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_with: Vec<String>,
    /// Whether a fresh composition includes this block pre-enabled.
    #[serde(default)]
    pub default_enabled: bool,
    /// Selectable version strings, newest first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<String>>,
    /// Default version selection; must be a member of `versions`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_version: Option<String>,
}

impl ServiceBlock {
    /// Start a block definition. The remaining fields are filled in with the
    /// chainable builders below; the catalog data tables read declaratively.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            category,
            description: description.into(),
            config_options: Vec::new(),
            requires: Vec::new(),
            incompatible_with: Vec::new(),
            suggested_with: Vec::new(),
            default_enabled: false,
            versions: None,
            default_version: None,
        }
    }

    /// Mark the block as pre-enabled in fresh compositions.
    pub fn default_enabled(mut self) -> Self {
        self.default_enabled = true;
        self
    }

    /// Declare selectable versions and the default selection.
    pub fn versions<I, S>(mut self, versions: I, default: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.versions = Some(versions.into_iter().map(Into::into).collect());
        self.default_version = Some(default.into());
        self
    }

    /// Declare hard dependencies.
    pub fn requires<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Declare directional incompatibilities.
    pub fn incompatible_with<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.incompatible_with = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Declare advisory companions.
    pub fn suggested_with<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggested_with = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Append a config option.
    pub fn option(mut self, option: ConfigOption) -> Self {
        self.config_options.push(option);
        self
    }
}
