//! Runtime blocks (PHP-FPM, Node.js)

use crate::core::{Category, ConfigOption, SelectChoice, ServiceBlock};

pub fn runtime_blocks() -> Vec<ServiceBlock> {
    vec![
        ServiceBlock::new(
            "php-fpm",
            "PHP-FPM",
            "🐘",
            Category::Runtime,
            "PHP FastCGI Process Manager for Laravel applications",
        )
        .default_enabled()
        .versions(["8.4", "8.3", "8.2", "8.1"], "8.4")
        .suggested_with(["nginx", "mysql", "redis"])
        .option(ConfigOption::select(
            "memory_limit",
            "Memory Limit",
            "256M",
            vec![
                SelectChoice::new("128M", "128 MB"),
                SelectChoice::new("256M", "256 MB"),
                SelectChoice::new("512M", "512 MB"),
                SelectChoice::new("1G", "1 GB"),
            ],
        ))
        .option(ConfigOption::number(
            "max_execution_time",
            "Max Execution Time (seconds)",
            30,
        ))
        .option(ConfigOption::select(
            "upload_max_filesize",
            "Max Upload Size",
            "64M",
            vec![
                SelectChoice::new("2M", "2 MB"),
                SelectChoice::new("8M", "8 MB"),
                SelectChoice::new("64M", "64 MB"),
                SelectChoice::new("128M", "128 MB"),
                SelectChoice::new("256M", "256 MB"),
            ],
        ))
        .option(
            ConfigOption::multiline("extensions", "PHP Extensions", "pdo_mysql, redis, gd, zip, bcmath")
                .describe("Comma-separated list of PHP extensions"),
        ),
        ServiceBlock::new(
            "nodejs",
            "Node.js",
            "⬢",
            Category::Runtime,
            "Node.js for frontend builds and Vite dev server",
        )
        .versions(["22", "20", "18"], "20")
        .option(ConfigOption::select(
            "package_manager",
            "Package Manager",
            "npm",
            vec![
                SelectChoice::new("npm", "NPM"),
                SelectChoice::new("yarn", "Yarn"),
                SelectChoice::new("pnpm", "PNPM"),
                SelectChoice::new("bun", "Bun"),
            ],
        )),
    ]
}
