//! Web server blocks (Nginx, Caddy)

use crate::core::{Category, ConfigOption, SelectChoice, ServiceBlock};

pub fn webserver_blocks() -> Vec<ServiceBlock> {
    vec![
        ServiceBlock::new(
            "nginx",
            "Nginx",
            "🌐",
            Category::Webserver,
            "High-performance web server and reverse proxy",
        )
        .default_enabled()
        .requires(["php-fpm"])
        .option(ConfigOption::number("port", "HTTP Port", 80))
        .option(ConfigOption::select(
            "client_max_body_size",
            "Max Body Size",
            "64M",
            vec![
                SelectChoice::new("8M", "8 MB"),
                SelectChoice::new("64M", "64 MB"),
                SelectChoice::new("128M", "128 MB"),
                SelectChoice::new("256M", "256 MB"),
            ],
        )),
        // Incompatibility is declared on the caddy side only; the check is
        // directional and the data is left as authored.
        ServiceBlock::new(
            "caddy",
            "Caddy",
            "🔒",
            Category::Webserver,
            "Modern web server with automatic HTTPS",
        )
        .requires(["php-fpm"])
        .incompatible_with(["nginx"])
        .option(ConfigOption::number("port", "HTTP Port", 80))
        .option(ConfigOption::number("https_port", "HTTPS Port", 443))
        .option(ConfigOption::checkbox("auto_https", "Auto HTTPS (local)", false)),
    ]
}
