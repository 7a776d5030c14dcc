//! Cache blocks (Redis, Memcached)

use crate::core::{Category, ConfigOption, SelectChoice, ServiceBlock};

pub fn cache_blocks() -> Vec<ServiceBlock> {
    vec![
        ServiceBlock::new(
            "redis",
            "Redis",
            "⚡",
            Category::Cache,
            "In-memory data store for caching and queues",
        )
        .default_enabled()
        .versions(["7.2", "7.0", "6.2"], "7.2")
        .option(ConfigOption::number("port", "Port", 6379))
        .option(ConfigOption::select(
            "maxmemory",
            "Max Memory",
            "256mb",
            vec![
                SelectChoice::new("64mb", "64 MB"),
                SelectChoice::new("128mb", "128 MB"),
                SelectChoice::new("256mb", "256 MB"),
                SelectChoice::new("512mb", "512 MB"),
            ],
        )),
        ServiceBlock::new(
            "memcached",
            "Memcached",
            "💾",
            Category::Cache,
            "High-performance memory caching system",
        )
        .versions(["1.6"], "1.6")
        .option(ConfigOption::number("port", "Port", 11211))
        .option(ConfigOption::number("memory", "Memory (MB)", 64)),
    ]
}
