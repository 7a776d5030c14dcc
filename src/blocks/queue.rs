//! Queue blocks (RabbitMQ, Beanstalkd)

use crate::core::{Category, ConfigOption, ServiceBlock};

pub fn queue_blocks() -> Vec<ServiceBlock> {
    vec![
        ServiceBlock::new(
            "rabbitmq",
            "RabbitMQ",
            "🐰",
            Category::Queue,
            "Message broker for queue processing",
        )
        .versions(["3.13", "3.12"], "3.13")
        .option(ConfigOption::number("port", "AMQP Port", 5672))
        .option(ConfigOption::number("management_port", "Management UI Port", 15672))
        .option(ConfigOption::text("username", "Username", "guest"))
        .option(ConfigOption::text("password", "Password", "guest")),
        ServiceBlock::new("beanstalkd", "Beanstalkd", "🫘", Category::Queue, "Simple, fast work queue")
            .option(ConfigOption::number("port", "Port", 11300)),
    ]
}
