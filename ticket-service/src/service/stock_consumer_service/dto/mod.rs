mod stock_consumer_service_config;
mod stock_routing_key;

pub use stock_consumer_service_config::*;
pub use stock_routing_key::*;
