mod online_ticket_rule;
mod online_ticket_rules;
mod online_ticket_verdict;

pub use online_ticket_rule::*;
pub use online_ticket_rules::*;
pub use online_ticket_verdict::*;
