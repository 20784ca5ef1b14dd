use crate::repository::{Ticket, TicketDetail};

///
/// Whether every tier of the ticket sold at the venue is gone
///
#[derive(Debug, PartialEq, Eq)]
pub struct TicketSoldOut {
    pub venue_name: String,
    pub is_sold_out: bool,
}

impl From<(Ticket, &[TicketDetail])> for TicketSoldOut {
    fn from((ticket, ticket_details): (Ticket, &[TicketDetail])) -> Self {
        let is_sold_out = !ticket_details.is_empty()
            && ticket_details
                .iter()
                .all(|ticket_detail| ticket_detail.stock == 0);

        Self {
            venue_name: ticket.region,
            is_sold_out,
        }
    }
}
