use super::Ticket;
use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
pub struct TicketsPage {
    pub tickets: Vec<Ticket>,
    pub page: u32,
    pub size: u32,
    pub total_count: u64,
    pub total_pages: u64,
}
