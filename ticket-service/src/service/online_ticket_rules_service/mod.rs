mod dto;
mod online_ticket_rules_service;
mod online_ticket_rules_service_impl;

pub use dto::{OnlineTicketRules, OnlineTicketVerdict};
pub use online_ticket_rules_service::*;
pub use online_ticket_rules_service_impl::*;
