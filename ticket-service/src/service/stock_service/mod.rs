mod stock_service;
mod stock_service_impl;

pub use stock_service::*;
pub use stock_service_impl::*;
