mod dto;
mod event_publisher;
mod rabbitmq_event_publisher;

pub use dto::RabbitmqEventPublisherConfig;
pub use event_publisher::*;
pub use rabbitmq_event_publisher::*;
