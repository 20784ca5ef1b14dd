use super::ListingService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::{ProfilesRepository, TicketsRepository},
    service::online_ticket_rules_service::{OnlineTicketRules, OnlineTicketRulesService},
};
use axum::async_trait;
use std::sync::Arc;

const ONLINE_REGION: &str = "Online";

pub struct ListingServiceImpl {
    tickets_repository: Arc<dyn TicketsRepository>,
    profiles_repository: Arc<dyn ProfilesRepository>,
    online_ticket_rules: Arc<dyn OnlineTicketRulesService>,
}

impl ListingServiceImpl {
    pub fn new(
        tickets_repository: Arc<dyn TicketsRepository>,
        profiles_repository: Arc<dyn ProfilesRepository>,
        online_ticket_rules: Arc<dyn OnlineTicketRulesService>,
    ) -> Self {
        Self {
            tickets_repository,
            profiles_repository,
            online_ticket_rules,
        }
    }

    async fn find_online_ticket_rules(&self) -> Result<OnlineTicketRules, Error> {
        let online_ticket = self
            .tickets_repository
            .find_online_ticket(ONLINE_REGION)
            .await?
            .ok_or(Error::TicketNotExist)?;
        let ticket = self
            .tickets_repository
            .find_ticket_by_region_name(ONLINE_REGION)
            .await?
            .ok_or(Error::TicketNotExist)?;

        Ok(OnlineTicketRules {
            is_ticket_sold_out: online_ticket.is_sold_out,
            is_ticket_first_sold_out: online_ticket.is_first_sold_out,
            total_seat: ticket.capacity.into(),
        })
    }
}

#[async_trait]
impl ListingService for ListingServiceImpl {
    async fn get_ticket_by_region_name(
        &self,
        region_name: &str,
    ) -> Result<Vec<output::Ticket>, Error> {
        tracing::info!(region_name, "finding tickets by region");

        let ticket = self
            .tickets_repository
            .find_ticket_by_region_name(region_name)
            .await?
            .ok_or(Error::TicketNotExist)?;
        let ticket_details = self
            .tickets_repository
            .find_ticket_detail_by_ticket_id(ticket.id)
            .await?;
        tracing::info!(count = ticket_details.len(), "found ticket details");

        let tickets = ticket_details
            .into_iter()
            .map(|ticket_detail| output::Ticket::from((&ticket, ticket_detail)))
            .collect();

        Ok(tickets)
    }

    async fn show_tickets(
        &self,
        pagination: input::Pagination,
        user_id: i64,
    ) -> Result<output::TicketsPage, Error> {
        tracing::info!(?pagination, user_id, "showing tickets");

        let tickets = self
            .tickets_repository
            .find_tickets(pagination.page, pagination.size)
            .await?;
        let ticket_details = self
            .tickets_repository
            .find_ticket_details(pagination.page, pagination.size)
            .await?;
        tracing::info!(
            tickets = tickets.items.len(),
            ticket_details = ticket_details.items.len(),
            "found tickets"
        );

        let profile = self
            .profiles_repository
            .find_profile(user_id)
            .await?
            .ok_or(Error::ProfileNotExist)?;
        tracing::debug!(region = %profile.region, "found profile");

        let online_ticket_rules = self.find_online_ticket_rules().await?;
        let verdict = self.online_ticket_rules.evaluate(&online_ticket_rules)?;
        tracing::debug!(?verdict, "evaluated online ticket rules");

        // detail page is not filtered by ticket ids of ticket page
        let mut rows = Vec::new();
        for ticket in tickets.items.iter() {
            let ticket_rows = ticket_details
                .items
                .iter()
                .filter(|ticket_detail| ticket_detail.ticket_id == ticket.id)
                .map(|ticket_detail| output::Ticket {
                    is_sold_out: verdict.is_sold_out,
                    is_first_sold_out: verdict.is_first_sold_out,
                    ..output::Ticket::from((ticket, ticket_detail.clone()))
                });
            rows.extend(ticket_rows);
        }
        tracing::info!(count = rows.len(), "showing tickets");

        Ok(output::TicketsPage {
            tickets: rows,
            page: pagination.page,
            size: pagination.size,
            total_count: tickets.total_count,
            total_pages: tickets.total_pages,
        })
    }
}
