//! Mail blocks (Mailhog, Mailpit)

use crate::core::{Category, ConfigOption, ServiceBlock};

pub fn mail_blocks() -> Vec<ServiceBlock> {
    vec![
        ServiceBlock::new("mailhog", "Mailhog", "📧", Category::Mail, "Email testing tool with web UI")
            .default_enabled()
            .option(ConfigOption::number("smtp_port", "SMTP Port", 1025))
            .option(ConfigOption::number("ui_port", "Web UI Port", 8025)),
        ServiceBlock::new(
            "mailpit",
            "Mailpit",
            "📬",
            Category::Mail,
            "Modern email testing tool (Mailhog alternative)",
        )
        .incompatible_with(["mailhog"])
        .option(ConfigOption::number("smtp_port", "SMTP Port", 1025))
        .option(ConfigOption::number("ui_port", "Web UI Port", 8025)),
    ]
}
