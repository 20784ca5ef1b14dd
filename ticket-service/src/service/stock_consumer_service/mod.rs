mod dto;
mod stock_consumer_service;

pub use dto::{StockConsumerServiceConfig, StockRoutingKey};
pub use stock_consumer_service::*;
