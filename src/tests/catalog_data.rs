//! Tests over the built-in catalog data.
//!
//! The catalog is trusted static content; these tests are the load-time
//! assertions of its invariants: unique ids, resolvable hard edges,
//! well-formed version and option defaults.

use std::collections::HashSet;

use crate::blocks;
use crate::compose::BlockInstance;
use crate::core::{categories, Category};

#[test]
fn test_builtin_catalog_loads() {
    let catalog = blocks::builtin();
    assert_eq!(catalog.len(), 27);
    assert!(!catalog.is_empty());
}

#[test]
fn test_builtin_catalog_passes_integrity_check() {
    assert_eq!(blocks::builtin().integrity_errors(), vec![]);
}

#[test]
fn test_every_category_in_listing_order() {
    let catalog = blocks::builtin();
    // Every hand-listed category except none should have entries today;
    // the listing itself is fixed regardless.
    assert_eq!(categories().len(), 10);
    for info in categories() {
        assert!(
            !catalog.by_category(info.category).is_empty(),
            "category {:?} has no blocks",
            info.category
        );
    }
}

#[test]
fn test_known_blocks_present_with_expected_edges() {
    let catalog = blocks::builtin();

    let nginx = catalog.get("nginx").unwrap();
    assert_eq!(nginx.requires, ["php-fpm"]);
    assert!(nginx.default_enabled);
    assert!(nginx.incompatible_with.is_empty());

    let caddy = catalog.get("caddy").unwrap();
    assert_eq!(caddy.requires, ["php-fpm"]);
    assert_eq!(caddy.incompatible_with, ["nginx"]);

    let php = catalog.get("php-fpm").unwrap();
    assert!(php.default_enabled);
    assert_eq!(php.suggested_with, ["nginx", "mysql", "redis"]);
    assert_eq!(php.default_version.as_deref(), Some("8.4"));

    let phpmyadmin = catalog.get("phpmyadmin").unwrap();
    assert_eq!(phpmyadmin.requires, ["mysql"]);
}

#[test]
fn test_relational_databases_exclude_each_other_symmetrically() {
    let catalog = blocks::builtin();
    let relational = ["mysql", "mariadb", "postgresql"];
    for id in relational {
        let block = catalog.get(id).unwrap();
        let expected: HashSet<&str> = relational.iter().copied().filter(|&other| other != id).collect();
        let declared: HashSet<&str> = block.incompatible_with.iter().map(String::as_str).collect();
        assert_eq!(declared, expected, "{id} incompatibilities");
    }
    // MongoDB coexists with all of them.
    assert!(catalog.get("mongodb").unwrap().incompatible_with.is_empty());
}

#[test]
fn test_mail_conflict_is_one_directional() {
    let catalog = blocks::builtin();
    assert_eq!(catalog.get("mailpit").unwrap().incompatible_with, ["mailhog"]);
    assert!(catalog.get("mailhog").unwrap().incompatible_with.is_empty());
}

#[test]
fn test_category_assignments() {
    let catalog = blocks::builtin();
    for (id, category) in [
        ("php-fpm", Category::Runtime),
        ("astro", Category::Runtime),
        ("nginx", Category::Webserver),
        ("mongodb", Category::Database),
        ("memcached", Category::Cache),
        ("typesense", Category::Search),
        ("beanstalkd", Category::Queue),
        ("mailpit", Category::Mail),
        ("reverb", Category::Websocket),
        ("minio", Category::Storage),
        ("supervisor", Category::Tools),
    ] {
        assert_eq!(catalog.get(id).unwrap().category, category, "{id}");
    }
}

#[test]
fn test_factory_config_matches_declared_options_for_every_block() {
    // The §4.2 contract, checked exhaustively over the real data.
    for block in blocks::builtin().iter() {
        let instance = BlockInstance::default_for(block);

        let declared: Vec<&str> = block.config_options.iter().map(|o| o.key.as_str()).collect();
        let materialized: Vec<&str> = instance.config.keys().map(String::as_str).collect();
        assert_eq!(materialized, declared, "config keys for {}", block.id);

        for opt in &block.config_options {
            assert_eq!(instance.config[&opt.key], opt.default, "{}::{}", block.id, opt.key);
        }
        assert_eq!(instance.enabled, block.default_enabled, "{}", block.id);
        assert_eq!(instance.version, block.default_version, "{}", block.id);
    }
}

#[test]
fn test_versioned_blocks_default_to_listed_version() {
    for block in blocks::builtin().iter() {
        if let (Some(versions), Some(default)) = (&block.versions, &block.default_version) {
            assert!(versions.contains(default), "{}", block.id);
        }
    }
}

#[test]
fn test_search_finds_blocks_by_description() {
    let catalog = blocks::builtin();
    let hits = catalog.search("typo-tolerant");
    let ids: HashSet<&str> = hits.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, HashSet::from(["meilisearch", "typesense"]));

    assert_eq!(catalog.search("PUSHER").len(), 1);
    assert!(catalog.search("kubernetes").is_empty());
}
