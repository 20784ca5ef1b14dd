mod rabbitmq_channel_callback;
mod rabbitmq_connection_callback;
mod rabbitmq_failure;

pub use rabbitmq_channel_callback::*;
pub use rabbitmq_connection_callback::*;
pub use rabbitmq_failure::*;
