use crate::repository::{self, TicketDetail};
use serde::Serialize;
use time::OffsetDateTime;

///
/// Single sellable line item: one tier of one ticket
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticket {
    pub id: i64,
    pub region: String,
    #[serde(with = "time::serde::rfc3339")]
    pub event_date: OffsetDateTime,
    pub level: String,
    pub price: f64,
    pub stock: i64,
    pub is_sold_out: bool,
    pub is_first_sold_out: bool,
}

impl From<(&repository::Ticket, TicketDetail)> for Ticket {
    fn from((ticket, ticket_detail): (&repository::Ticket, TicketDetail)) -> Self {
        Self {
            id: ticket_detail.id,
            region: ticket.region.clone(),
            event_date: ticket.event_date,
            level: ticket_detail.level,
            price: ticket_detail.base_price,
            stock: ticket_detail.stock,
            is_sold_out: false,
            is_first_sold_out: false,
        }
    }
}
