///
/// Facts about tickets sold in the Online region
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnlineTicketRules {
    pub is_ticket_sold_out: bool,
    pub is_ticket_first_sold_out: bool,
    pub total_seat: i64,
}
