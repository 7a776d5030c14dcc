//! Tools blocks (phpMyAdmin, Adminer, Redis Insight, Supervisor)

use crate::core::{Category, ConfigOption, ServiceBlock};

pub fn tools_blocks() -> Vec<ServiceBlock> {
    vec![
        ServiceBlock::new(
            "phpmyadmin",
            "phpMyAdmin",
            "📊",
            Category::Tools,
            "Web-based MySQL/MariaDB administration",
        )
        .default_enabled()
        .requires(["mysql"])
        .option(ConfigOption::number("port", "Port", 8080)),
        ServiceBlock::new(
            "adminer",
            "Adminer",
            "🗃️",
            Category::Tools,
            "Lightweight database management (all databases)",
        )
        .option(ConfigOption::number("port", "Port", 8081)),
        ServiceBlock::new(
            "redisinsight",
            "Redis Insight",
            "📈",
            Category::Tools,
            "Visual Redis management and monitoring",
        )
        .requires(["redis"])
        .option(ConfigOption::number("port", "Port", 8001)),
        ServiceBlock::new(
            "supervisor",
            "Supervisor",
            "🔧",
            Category::Tools,
            "Process manager for queue workers and schedulers",
        )
        .option(ConfigOption::number("queue_workers", "Queue Workers", 2))
        .option(ConfigOption::checkbox("scheduler", "Enable Scheduler", true)),
    ]
}
