//! Database blocks (MySQL, MariaDB, PostgreSQL, MongoDB)
//!
//! The three relational engines exclude each other in both directions;
//! MongoDB coexists with any of them.

use crate::core::{Category, ConfigOption, ServiceBlock};

pub fn database_blocks() -> Vec<ServiceBlock> {
    vec![
        ServiceBlock::new("mysql", "MySQL", "🗄️", Category::Database, "Popular relational database")
            .default_enabled()
            .versions(["8.0", "5.7"], "8.0")
            .incompatible_with(["mariadb", "postgresql"])
            .option(ConfigOption::number("port", "Port", 3306))
            .option(ConfigOption::text("database", "Database Name", "laravel"))
            .option(ConfigOption::text("username", "Username", "laravel"))
            .option(ConfigOption::text("password", "Password", "secret"))
            .option(ConfigOption::text("root_password", "Root Password", "secret")),
        ServiceBlock::new(
            "mariadb",
            "MariaDB",
            "🗄️",
            Category::Database,
            "MySQL-compatible database with extra features",
        )
        .versions(["11.2", "10.11", "10.6"], "10.11")
        .incompatible_with(["mysql", "postgresql"])
        .option(ConfigOption::number("port", "Port", 3306))
        .option(ConfigOption::text("database", "Database Name", "laravel"))
        .option(ConfigOption::text("username", "Username", "laravel"))
        .option(ConfigOption::text("password", "Password", "secret")),
        ServiceBlock::new(
            "postgresql",
            "PostgreSQL",
            "🐘",
            Category::Database,
            "Advanced open-source relational database",
        )
        .versions(["16", "15", "14"], "16")
        .incompatible_with(["mysql", "mariadb"])
        .option(ConfigOption::number("port", "Port", 5432))
        .option(ConfigOption::text("database", "Database Name", "laravel"))
        .option(ConfigOption::text("username", "Username", "laravel"))
        .option(ConfigOption::text("password", "Password", "secret")),
        ServiceBlock::new("mongodb", "MongoDB", "🍃", Category::Database, "NoSQL document database")
            .versions(["7.0", "6.0"], "7.0")
            .option(ConfigOption::number("port", "Port", 27017))
            .option(ConfigOption::text("database", "Database Name", "laravel")),
    ]
}
