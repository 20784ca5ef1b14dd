use super::StockService;
use crate::{
    dto::output,
    error::Error,
    repository::{self, TicketDetail, TicketsRepository},
};
use axum::async_trait;
use std::sync::Arc;

pub struct StockServiceImpl {
    repository: Arc<dyn TicketsRepository>,
}

impl StockServiceImpl {
    pub fn new(repository: Arc<dyn TicketsRepository>) -> Self {
        Self { repository }
    }

    fn validate_amount(amount: i64) -> Result<(), Error> {
        if amount < 0 {
            return Err(Error::Validation("amount must not be negative"));
        }

        Ok(())
    }

    async fn find_ticket_detail(&self, ticket_detail_id: i64) -> Result<TicketDetail, Error> {
        self.repository
            .find_ticket_detail(ticket_detail_id)
            .await?
            .ok_or(Error::TicketDetailNotExist)
    }

    ///
    /// Checks whether the venue of the ticket has any tier left
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when
    ///     - ticket with id does not exist
    ///
    pub async fn check_ticket_sold_out(
        &self,
        ticket_id: i64,
    ) -> Result<output::TicketSoldOut, Error> {
        let ticket = self
            .repository
            .find_ticket_by_id(ticket_id)
            .await?
            .ok_or(Error::TicketNotExist)?;
        let ticket_details = self
            .repository
            .find_ticket_detail_by_ticket_id(ticket_id)
            .await?;

        Ok(output::TicketSoldOut::from((ticket, ticket_details.as_slice())))
    }

    async fn update_ticket_detail(&self, ticket_detail: TicketDetail) -> Result<(), Error> {
        self.repository
            .update_ticket_detail(ticket_detail)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::TicketDetailNotExist,
                err => Error::Database(err),
            })
    }
}

#[async_trait]
impl StockService for StockServiceImpl {
    async fn decrement_ticket_stock(
        &self,
        ticket_detail_id: i64,
        amount: i64,
    ) -> Result<(), Error> {
        tracing::info!(ticket_detail_id, amount, "decrementing ticket stock");

        Self::validate_amount(amount)?;

        let mut ticket_detail = self.find_ticket_detail(ticket_detail_id).await?;
        if amount > ticket_detail.stock {
            tracing::info!(stock = ticket_detail.stock, "stock not enough");
            return Err(Error::StockNotEnough);
        }

        ticket_detail.stock -= amount;
        let stock = ticket_detail.stock;
        let ticket_id = ticket_detail.ticket_id;
        self.update_ticket_detail(ticket_detail).await?;

        tracing::info!(stock, "decremented ticket stock");

        // stock is already written, failed check does not fail decrement
        match self.check_ticket_sold_out(ticket_id).await {
            Ok(sold_out) => tracing::info!(
                ticket_id,
                venue_name = %sold_out.venue_name,
                is_sold_out = sold_out.is_sold_out,
                "checked ticket sold out"
            ),
            Err(err) => tracing::warn!(%err, ticket_id, "failed to check ticket sold out"),
        }

        Ok(())
    }

    async fn increment_ticket_stock(
        &self,
        ticket_detail_id: i64,
        amount: i64,
    ) -> Result<(), Error> {
        tracing::info!(ticket_detail_id, amount, "incrementing ticket stock");

        Self::validate_amount(amount)?;

        let mut ticket_detail = self.find_ticket_detail(ticket_detail_id).await?;
        ticket_detail.stock = ticket_detail
            .stock
            .checked_add(amount)
            .ok_or(Error::Validation("amount is too large"))?;

        let stock = ticket_detail.stock;
        self.update_ticket_detail(ticket_detail).await?;

        tracing::info!(stock, "incremented ticket stock");

        Ok(())
    }

    async fn check_stock_ticket(
        &self,
        ticket_detail_id: i64,
    ) -> Result<output::StockTicket, Error> {
        tracing::info!(ticket_detail_id, "checking ticket stock");

        let ticket_detail = self.find_ticket_detail(ticket_detail_id).await?;
        tracing::info!(stock = ticket_detail.stock, "found ticket stock");

        Ok(ticket_detail.into())
    }

    async fn inquiry_ticket_amount(
        &self,
        ticket_id: i64,
        total_ticket: i64,
    ) -> Result<output::InquiryTicketAmount, Error> {
        tracing::info!(ticket_id, total_ticket, "calculating ticket amount");

        let ticket_detail = self.find_ticket_detail(ticket_id).await?;
        let inquiry = output::InquiryTicketAmount::from((ticket_detail, total_ticket));

        tracing::info!(total_amount = inquiry.total_amount, "calculated ticket amount");

        Ok(inquiry)
    }
}
