//! Search blocks (Meilisearch, Elasticsearch, Typesense)

use crate::core::{Category, ConfigOption, SelectChoice, ServiceBlock};

pub fn search_blocks() -> Vec<ServiceBlock> {
    vec![
        ServiceBlock::new(
            "meilisearch",
            "Meilisearch",
            "🔍",
            Category::Search,
            "Fast, typo-tolerant search engine for Laravel Scout",
        )
        .versions(["1.6", "1.5"], "1.6")
        .option(ConfigOption::number("port", "Port", 7700))
        .option(ConfigOption::text("master_key", "Master Key", "masterKey")),
        ServiceBlock::new(
            "elasticsearch",
            "Elasticsearch",
            "🔎",
            Category::Search,
            "Distributed search and analytics engine",
        )
        .versions(["8.12", "8.11", "7.17"], "8.12")
        .option(ConfigOption::number("port", "HTTP Port", 9200))
        .option(ConfigOption::select(
            "java_opts",
            "Java Heap Size",
            "-Xms512m -Xmx512m",
            vec![
                SelectChoice::new("-Xms256m -Xmx256m", "256 MB"),
                SelectChoice::new("-Xms512m -Xmx512m", "512 MB"),
                SelectChoice::new("-Xms1g -Xmx1g", "1 GB"),
            ],
        )),
        ServiceBlock::new(
            "typesense",
            "Typesense",
            "⚡",
            Category::Search,
            "Fast, typo-tolerant search engine",
        )
        .versions(["0.25", "0.24"], "0.25")
        .option(ConfigOption::number("port", "Port", 8108))
        .option(ConfigOption::text("api_key", "API Key", "xyz")),
    ]
}
