use super::TicketDetail;

///
/// Sold out facts of the ticket sold online
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnlineTicket {
    /// every tier of the ticket has no stock left
    pub is_sold_out: bool,

    /// at least one tier of the ticket has no stock left
    pub is_first_sold_out: bool,
}

impl OnlineTicket {
    pub fn from_ticket_details(ticket_details: &[TicketDetail]) -> Self {
        let is_sold_out = !ticket_details.is_empty()
            && ticket_details
                .iter()
                .all(|ticket_detail| ticket_detail.stock == 0);
        let is_first_sold_out = ticket_details
            .iter()
            .any(|ticket_detail| ticket_detail.stock == 0);

        Self {
            is_sold_out,
            is_first_sold_out,
        }
    }
}
