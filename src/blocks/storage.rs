//! Storage blocks (MinIO)

use crate::core::{Category, ConfigOption, ServiceBlock};

pub fn storage_blocks() -> Vec<ServiceBlock> {
    vec![ServiceBlock::new(
        "minio",
        "MinIO",
        "☁️",
        Category::Storage,
        "S3-compatible object storage",
    )
    .option(ConfigOption::number("port", "API Port", 9000))
    .option(ConfigOption::number("console_port", "Console Port", 9001))
    .option(ConfigOption::text("root_user", "Root User", "minioadmin"))
    .option(ConfigOption::text("root_password", "Root Password", "minioadmin"))
    .option(ConfigOption::text("default_bucket", "Default Bucket", "laravel"))]
}
