//! WebSocket blocks (Soketi, Laravel Reverb)

use crate::core::{Category, ConfigOption, ServiceBlock};

pub fn websocket_blocks() -> Vec<ServiceBlock> {
    vec![
        ServiceBlock::new(
            "soketi",
            "Soketi",
            "📡",
            Category::Websocket,
            "Open-source WebSocket server (Pusher compatible)",
        )
        .option(ConfigOption::number("port", "WebSocket Port", 6001))
        .option(ConfigOption::text("app_id", "App ID", "app-id"))
        .option(ConfigOption::text("app_key", "App Key", "app-key"))
        .option(ConfigOption::text("app_secret", "App Secret", "app-secret")),
        ServiceBlock::new(
            "reverb",
            "Laravel Reverb",
            "🔊",
            Category::Websocket,
            "Laravel's first-party WebSocket server",
        )
        .requires(["php-fpm"])
        .option(ConfigOption::number("port", "WebSocket Port", 8080)),
    ]
}
