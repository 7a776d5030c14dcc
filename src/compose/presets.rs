//! Built-in preset templates
//!
//! Presets are shipped template skeletons: a list of blocks with explicit
//! enabled/version/config overrides layered on top of factory defaults.
//! Expansion materializes each block through the instance factory, applies
//! the overrides, and validates the result; the report travels with the
//! template so the caller can surface diagnostics alongside it.

use crate::compose::instance::BlockInstance;
use crate::compose::template::Template;
use crate::compose::validation::ValidationReport;
use crate::core::{Catalog, ConfigValue};

/// One block row of a preset definition.
#[derive(Debug, Clone)]
pub struct PresetBlock {
    pub block_id: &'static str,
    pub enabled: bool,
    pub version: Option<&'static str>,
    /// Config keys set explicitly by the preset; everything else keeps the
    /// factory default.
    pub overrides: Vec<(&'static str, ConfigValue)>,
}

impl PresetBlock {
    fn new(block_id: &'static str) -> Self {
        Self {
            block_id,
            enabled: true,
            version: None,
            overrides: Vec::new(),
        }
    }

    fn version(mut self, version: &'static str) -> Self {
        self.version = Some(version);
        self
    }

    fn set(mut self, key: &'static str, value: impl Into<ConfigValue>) -> Self {
        self.overrides.push((key, value.into()));
        self
    }
}

/// A named preset skeleton.
#[derive(Debug, Clone)]
pub struct PresetDef {
    pub name: &'static str,
    pub description: &'static str,
    pub blocks: Vec<PresetBlock>,
}

/// The shipped preset list, in presentation order.
pub fn preset_defs() -> Vec<PresetDef> {
    vec![
        PresetDef {
            name: "Laravel Full Stack",
            description: "Complete Laravel setup with all essentials",
            blocks: vec![
                PresetBlock::new("php-fpm").version("8.4"),
                PresetBlock::new("nginx").set("port", 80_i64),
                PresetBlock::new("mysql")
                    .version("8.0")
                    .set("port", 3306_i64)
                    .set("database", "laravel"),
                PresetBlock::new("redis").version("7.2").set("port", 6379_i64),
                PresetBlock::new("mailhog").set("smtp_port", 1025_i64).set("ui_port", 8025_i64),
                PresetBlock::new("phpmyadmin").set("port", 8080_i64),
                PresetBlock::new("supervisor").set("queue_workers", 2_i64).set("scheduler", true),
            ],
        },
        PresetDef {
            name: "Laravel API",
            description: "Lightweight API-focused setup",
            blocks: vec![
                PresetBlock::new("php-fpm").version("8.4"),
                PresetBlock::new("nginx").set("port", 80_i64),
                PresetBlock::new("postgresql")
                    .version("16")
                    .set("port", 5432_i64)
                    .set("database", "laravel"),
                PresetBlock::new("redis").version("7.2").set("port", 6379_i64),
            ],
        },
        PresetDef {
            name: "Laravel + Meilisearch",
            description: "Full-text search ready setup",
            blocks: vec![
                PresetBlock::new("php-fpm").version("8.4"),
                PresetBlock::new("nginx").set("port", 80_i64),
                PresetBlock::new("mysql")
                    .version("8.0")
                    .set("port", 3306_i64)
                    .set("database", "laravel"),
                PresetBlock::new("redis").version("7.2").set("port", 6379_i64),
                PresetBlock::new("meilisearch").version("1.6").set("port", 7700_i64),
                PresetBlock::new("mailhog").set("smtp_port", 1025_i64).set("ui_port", 8025_i64),
            ],
        },
        PresetDef {
            name: "Laravel + WebSockets",
            description: "Real-time application setup",
            blocks: vec![
                PresetBlock::new("php-fpm").version("8.4"),
                PresetBlock::new("nginx").set("port", 80_i64),
                PresetBlock::new("mysql")
                    .version("8.0")
                    .set("port", 3306_i64)
                    .set("database", "laravel"),
                PresetBlock::new("redis").version("7.2").set("port", 6379_i64),
                PresetBlock::new("soketi").set("port", 6001_i64),
                PresetBlock::new("mailhog").set("smtp_port", 1025_i64).set("ui_port", 8025_i64),
            ],
        },
        PresetDef {
            name: "Minimal",
            description: "Bare minimum for simple projects",
            blocks: vec![
                PresetBlock::new("php-fpm").version("8.4"),
                PresetBlock::new("nginx").set("port", 80_i64),
                PresetBlock::new("mysql")
                    .version("8.0")
                    .set("port", 3306_i64)
                    .set("database", "laravel"),
            ],
        },
        PresetDef {
            name: "Astro Static Site",
            description: "Content-driven static site with Astro",
            blocks: vec![
                PresetBlock::new("nodejs").version("20").set("package_manager", "npm"),
                PresetBlock::new("astro")
                    .version("4.x")
                    .set("port", 4321_i64)
                    .set("output", "static"),
                PresetBlock::new("nginx").set("port", 80_i64),
            ],
        },
        PresetDef {
            name: "Astro + Database",
            description: "Astro with SSR and database backend",
            blocks: vec![
                PresetBlock::new("nodejs").version("20").set("package_manager", "npm"),
                PresetBlock::new("astro")
                    .version("4.x")
                    .set("port", 4321_i64)
                    .set("output", "server"),
                PresetBlock::new("nginx").set("port", 80_i64),
                PresetBlock::new("postgresql")
                    .version("16")
                    .set("port", 5432_i64)
                    .set("database", "astro"),
                PresetBlock::new("redis").version("7.2").set("port", 6379_i64),
            ],
        },
        PresetDef {
            name: "Next.js Full Stack",
            description: "Complete Next.js setup with database",
            blocks: vec![
                PresetBlock::new("nodejs").version("20").set("package_manager", "npm"),
                PresetBlock::new("nextjs")
                    .version("15")
                    .set("port", 3000_i64)
                    .set("app_router", true)
                    .set("typescript", true)
                    .set("tailwind", true),
                PresetBlock::new("nginx").set("port", 80_i64),
                PresetBlock::new("postgresql")
                    .version("16")
                    .set("port", 5432_i64)
                    .set("database", "nextjs"),
                PresetBlock::new("redis").version("7.2").set("port", 6379_i64),
                PresetBlock::new("mailhog").set("smtp_port", 1025_i64).set("ui_port", 8025_i64),
            ],
        },
        PresetDef {
            name: "Next.js Static",
            description: "Next.js for static site generation",
            blocks: vec![
                PresetBlock::new("nodejs").version("20").set("package_manager", "npm"),
                PresetBlock::new("nextjs")
                    .version("15")
                    .set("port", 3000_i64)
                    .set("app_router", true)
                    .set("typescript", true)
                    .set("tailwind", true),
                PresetBlock::new("nginx").set("port", 80_i64),
            ],
        },
        PresetDef {
            name: "Nuxt Full Stack",
            description: "Complete Nuxt 3 setup with database",
            blocks: vec![
                PresetBlock::new("nodejs").version("20").set("package_manager", "npm"),
                PresetBlock::new("nuxt")
                    .version("3.x")
                    .set("port", 3000_i64)
                    .set("ssr", true)
                    .set("typescript", true),
                PresetBlock::new("nginx").set("port", 80_i64),
                PresetBlock::new("postgresql")
                    .version("16")
                    .set("port", 5432_i64)
                    .set("database", "nuxt"),
                PresetBlock::new("redis").version("7.2").set("port", 6379_i64),
                PresetBlock::new("mailhog").set("smtp_port", 1025_i64).set("ui_port", 8025_i64),
            ],
        },
        PresetDef {
            name: "Nuxt Static",
            description: "Nuxt 3 for static site generation",
            blocks: vec![
                PresetBlock::new("nodejs").version("20").set("package_manager", "npm"),
                PresetBlock::new("nuxt")
                    .version("3.x")
                    .set("port", 3000_i64)
                    .set("ssr", false)
                    .set("typescript", true),
                PresetBlock::new("nginx").set("port", 80_i64),
            ],
        },
    ]
}

/// Expand a preset into a template: factory defaults per block, overrides
/// layered on top, then a full validation pass. Rows whose block id does not
/// resolve are dropped with a warning (advisory path).
pub fn expand_preset(catalog: &Catalog, def: &PresetDef) -> (Template, ValidationReport) {
    let mut template = Template::preset(def.name, def.description);

    for row in &def.blocks {
        let Some(block) = catalog.get(row.block_id) else {
            log::warn!("preset '{}' references unknown block '{}'", def.name, row.block_id);
            continue;
        };

        let mut instance = BlockInstance::default_for(block);
        instance.enabled = row.enabled;
        if let Some(version) = row.version {
            instance.version = Some(version.to_string());
        }
        for (key, value) in &row.overrides {
            if !block.config_options.iter().any(|opt| opt.key == *key) {
                log::debug!(
                    "preset '{}' sets undeclared config key '{}' on block '{}'",
                    def.name,
                    key,
                    row.block_id
                );
            }
            instance.set_config(*key, value.clone());
        }
        template.upsert(instance);
    }

    let report = template.validate(catalog);
    (template, report)
}

/// Expand every shipped preset against a catalog.
pub fn preset_templates(catalog: &Catalog) -> Vec<(Template, ValidationReport)> {
    preset_defs().iter().map(|def| expand_preset(catalog, def)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks;

    fn find_preset(name: &str) -> PresetDef {
        preset_defs().into_iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn test_minimal_preset_expands_valid() {
        let catalog = blocks::builtin();
        let (template, report) = expand_preset(catalog, &find_preset("Minimal"));

        assert!(report.valid, "diagnostics: {:?}", report.diagnostics);
        assert_eq!(template.enabled_ids(), ["php-fpm", "nginx", "mysql"]);
        assert!(template.id.is_none());
    }

    #[test]
    fn test_overlay_keeps_untouched_defaults() {
        let catalog = blocks::builtin();
        let (template, _) = expand_preset(catalog, &find_preset("Minimal"));
        let mysql = template.instance("mysql").unwrap();

        // Overridden by the preset.
        assert_eq!(mysql.config_str("database", ""), "laravel");
        assert_eq!(mysql.version.as_deref(), Some("8.0"));
        // Factory defaults the preset never touched.
        assert_eq!(mysql.config_str("username", ""), "laravel");
        assert_eq!(mysql.config_str("root_password", ""), "secret");

        let php = template.instance("php-fpm").unwrap();
        assert_eq!(php.config_str("memory_limit", ""), "256M");
        assert_eq!(php.config_int("max_execution_time", 0), 30);
    }

    #[test]
    fn test_laravel_presets_expand_valid() {
        let catalog = blocks::builtin();
        for name in [
            "Laravel Full Stack",
            "Laravel API",
            "Laravel + Meilisearch",
            "Laravel + WebSockets",
        ] {
            let (_, report) = expand_preset(catalog, &find_preset(name));
            assert!(report.valid, "{name}: {:?}", report.diagnostics);
        }
    }

    #[test]
    fn test_js_presets_report_nginx_requirement() {
        // The JS presets enable nginx without php-fpm; the declared data says
        // nginx requires php-fpm, and expansion reports it faithfully.
        let catalog = blocks::builtin();
        let (_, report) = expand_preset(catalog, &find_preset("Astro Static Site"));
        assert!(!report.valid);
        assert_eq!(report.messages(), ["Nginx requires PHP-FPM"]);
    }

    #[test]
    fn test_unknown_preset_block_is_dropped() {
        let catalog = blocks::builtin();
        let def = PresetDef {
            name: "Broken",
            description: "References a removed block",
            blocks: vec![PresetBlock::new("php-fpm"), PresetBlock::new("ghost")],
        };
        let (template, report) = expand_preset(catalog, &def);
        assert_eq!(template.blocks.len(), 1);
        assert!(report.valid);
    }

    #[test]
    fn test_all_presets_expand_with_every_block_resolved() {
        let catalog = blocks::builtin();
        for (def, (template, _)) in preset_defs().iter().zip(preset_templates(catalog)) {
            assert_eq!(
                template.blocks.len(),
                def.blocks.len(),
                "preset '{}' dropped a block",
                def.name
            );
        }
    }
}
