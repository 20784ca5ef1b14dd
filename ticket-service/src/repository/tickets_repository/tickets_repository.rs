use crate::repository::{Error, OnlineTicket, Paginated, Ticket, TicketDetail};
use axum::async_trait;

///
/// Storage of tickets and their details.
/// Soft deleted rows are never returned.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    async fn find_ticket_by_region_name(&self, region: &str) -> Result<Option<Ticket>, Error>;

    async fn find_ticket_by_id(&self, id: i64) -> Result<Option<Ticket>, Error>;

    async fn find_ticket_detail(&self, id: i64) -> Result<Option<TicketDetail>, Error>;

    ///
    /// Finds all details of the ticket sorted ascending by id
    ///
    async fn find_ticket_detail_by_ticket_id(
        &self,
        ticket_id: i64,
    ) -> Result<Vec<TicketDetail>, Error>;

    ///
    /// Replaces whole ticket detail row
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when ticket detail does not exist
    ///
    async fn update_ticket_detail(&self, ticket_detail: TicketDetail) -> Result<(), Error>;

    ///
    /// Finds page of tickets sorted ascending by id.
    /// Pages start at 1
    ///
    async fn find_tickets(&self, page: u32, page_size: u32) -> Result<Paginated<Ticket>, Error>;

    ///
    /// Finds page of ticket details sorted ascending by id.
    /// Pages start at 1
    ///
    async fn find_ticket_details(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Paginated<TicketDetail>, Error>;

    ///
    /// Finds sold out facts of the ticket sold in the region
    ///
    async fn find_online_ticket(&self, region: &str) -> Result<Option<OnlineTicket>, Error>;
}
