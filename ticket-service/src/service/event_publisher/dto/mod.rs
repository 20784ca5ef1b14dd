mod rabbitmq_event_publisher_config;

pub use rabbitmq_event_publisher_config::*;
