use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingService: Send + Sync {
    ///
    /// Find all tiers of the ticket sold in region
    ///
    /// ### Returns
    /// one row per ticket detail, empty when ticket has no details
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when
    ///     - there is no ticket in region
    ///
    async fn get_ticket_by_region_name(
        &self,
        region_name: &str,
    ) -> Result<Vec<output::Ticket>, Error>;

    ///
    /// Find page of tickets annotated with Online sold out flags
    ///
    /// ### Errors
    /// - [Error::ProfileNotExist] when
    ///     - user has no profile
    /// - [Error::TicketNotExist] when
    ///     - there is no Online ticket
    /// - [Error::RulesNotMatched] when
    ///     - no online ticket rule matched
    ///
    async fn show_tickets(
        &self,
        pagination: input::Pagination,
        user_id: i64,
    ) -> Result<output::TicketsPage, Error>;
}
