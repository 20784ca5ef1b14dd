use crate::repository::TicketDetail;
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct StockTicket {
    pub stock: i64,
}

impl From<TicketDetail> for StockTicket {
    fn from(value: TicketDetail) -> Self {
        Self { stock: value.stock }
    }
}
