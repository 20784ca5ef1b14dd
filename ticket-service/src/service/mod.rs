pub mod event_publisher;
pub mod listing_service;
pub mod online_ticket_rules_service;
pub mod stock_consumer_service;
pub mod stock_service;
