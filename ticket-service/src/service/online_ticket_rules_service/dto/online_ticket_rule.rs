use super::{OnlineTicketRules, OnlineTicketVerdict};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OnlineTicketRulesTable {
    pub rules: Vec<OnlineTicketRule>,
}

///
/// Single row of decision table.
/// Condition that is not set matches any fact
///
#[derive(Debug, Deserialize)]
pub struct OnlineTicketRule {
    pub name: String,
    #[serde(default)]
    pub is_ticket_sold_out: Option<bool>,
    #[serde(default)]
    pub is_ticket_first_sold_out: Option<bool>,
    #[serde(default)]
    pub min_total_seat: Option<i64>,
    #[serde(default)]
    pub max_total_seat: Option<i64>,
    pub verdict: OnlineTicketVerdict,
}

impl OnlineTicketRule {
    pub fn matches(&self, rules: &OnlineTicketRules) -> bool {
        self.is_ticket_sold_out
            .map_or(true, |expected| expected == rules.is_ticket_sold_out)
            && self
                .is_ticket_first_sold_out
                .map_or(true, |expected| expected == rules.is_ticket_first_sold_out)
            && self.min_total_seat.map_or(true, |min| rules.total_seat >= min)
            && self.max_total_seat.map_or(true, |max| rules.total_seat <= max)
    }
}
