use crate::repository::TicketDetail;
use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
pub struct InquiryTicketAmount {
    pub total_ticket: i64,
    pub total_amount: f64,
}

impl From<(TicketDetail, i64)> for InquiryTicketAmount {
    fn from((ticket_detail, total_ticket): (TicketDetail, i64)) -> Self {
        Self {
            total_ticket,
            total_amount: ticket_detail.base_price * total_ticket as f64,
        }
    }
}
