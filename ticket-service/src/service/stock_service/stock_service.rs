use crate::{dto::output, error::Error};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StockService: Send + Sync {
    ///
    /// Take `amount` tickets out of ticket detail stock
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - amount is negative
    /// - [Error::TicketDetailNotExist] when
    ///     - ticket detail with id does not exist
    /// - [Error::StockNotEnough] when
    ///     - amount is greater than current stock
    ///
    async fn decrement_ticket_stock(&self, ticket_detail_id: i64, amount: i64)
        -> Result<(), Error>;

    ///
    /// Put `amount` tickets back into ticket detail stock.
    /// Stock is not limited by ticket capacity
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - amount is negative
    ///     - new stock does not fit in i64
    /// - [Error::TicketDetailNotExist] when
    ///     - ticket detail with id does not exist
    ///
    async fn increment_ticket_stock(&self, ticket_detail_id: i64, amount: i64)
        -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::TicketDetailNotExist] when
    ///     - ticket detail with id does not exist
    ///
    async fn check_stock_ticket(&self, ticket_detail_id: i64)
        -> Result<output::StockTicket, Error>;

    ///
    /// Calculate price of `total_ticket` tickets.
    /// `ticket_id` is used to find ticket detail
    ///
    /// ### Errors
    /// - [Error::TicketDetailNotExist] when
    ///     - ticket detail with id does not exist
    ///
    async fn inquiry_ticket_amount(
        &self,
        ticket_id: i64,
        total_ticket: i64,
    ) -> Result<output::InquiryTicketAmount, Error>;
}
