use crate::repository::{
    entity::{TicketDetailEntity, TicketEntity},
    page_skip, Error, OnlineTicket, Paginated, Ticket, TicketDetail, TicketsRepository,
};
use axum::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Collection, Database, IndexModel};
use serde::de::DeserializeOwned;

const TICKETS: &str = "tickets";
const TICKET_DETAILS: &str = "ticket_details";
const INDEX_NAME_TICKET_REGION: &str = "ticket_region";
const INDEX_NAME_TICKET_DETAIL_TICKET_ID: &str = "ticket_detail_ticket_id";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        Self::create_index(&database, TICKETS, INDEX_NAME_TICKET_REGION, doc! { "region": 1 })
            .await?;
        Self::create_index(
            &database,
            TICKET_DETAILS,
            INDEX_NAME_TICKET_DETAIL_TICKET_ID,
            doc! { "ticket_id": 1 },
        )
        .await?;

        Ok(Self { database })
    }

    async fn create_index(
        database: &Database,
        collection: &str,
        index: &str,
        keys: Document,
    ) -> Result<(), mongodb::error::Error> {
        // createIndexes is a no-op when identical index already exists
        database
            .collection::<Document>(collection)
            .create_index(
                IndexModel::builder()
                    .keys(keys)
                    .options(IndexOptions::builder().name(index.to_string()).build())
                    .build(),
            )
            .await?;
        tracing::debug!(collection, index, "created index");

        Ok(())
    }

    fn tickets(&self) -> Collection<TicketEntity> {
        self.database.collection(TICKETS)
    }

    fn ticket_details(&self) -> Collection<TicketDetailEntity> {
        self.database.collection(TICKET_DETAILS)
    }

    async fn find_page<T>(
        collection: Collection<T>,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<T>, u64), Error>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let filter = doc! { "deleted_at": null };

        let total_count = collection.count_documents(filter.clone()).await?;

        // limit(0) means no limit at all
        if page_size == 0 {
            return Ok((Vec::new(), total_count));
        }

        let entities: Vec<T> = collection
            .find(filter)
            .sort(doc! { "_id": 1 })
            .skip(page_skip(page, page_size))
            .limit(i64::from(page_size))
            .await?
            .try_collect()
            .await?;

        Ok((entities, total_count))
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn find_ticket_by_region_name(&self, region: &str) -> Result<Option<Ticket>, Error> {
        let ticket = self
            .tickets()
            .find_one(doc! {
                "region": region,
                "deleted_at": null,
            })
            .await?
            .map(Ticket::from);

        Ok(ticket)
    }

    async fn find_ticket_by_id(&self, id: i64) -> Result<Option<Ticket>, Error> {
        let ticket = self
            .tickets()
            .find_one(doc! {
                "_id": id,
                "deleted_at": null,
            })
            .await?
            .map(Ticket::from);

        Ok(ticket)
    }

    async fn find_ticket_detail(&self, id: i64) -> Result<Option<TicketDetail>, Error> {
        let ticket_detail = self
            .ticket_details()
            .find_one(doc! {
                "_id": id,
                "deleted_at": null,
            })
            .await?
            .map(TicketDetail::from);

        Ok(ticket_detail)
    }

    async fn find_ticket_detail_by_ticket_id(
        &self,
        ticket_id: i64,
    ) -> Result<Vec<TicketDetail>, Error> {
        let ticket_details: Vec<TicketDetail> = self
            .ticket_details()
            .find(doc! {
                "ticket_id": ticket_id,
                "deleted_at": null,
            })
            .sort(doc! { "_id": 1 })
            .await?
            .map_ok(TicketDetail::from)
            .try_collect()
            .await?;

        Ok(ticket_details)
    }

    async fn update_ticket_detail(&self, ticket_detail: TicketDetail) -> Result<(), Error> {
        let id = ticket_detail.id;

        let update_result = self
            .ticket_details()
            .replace_one(
                doc! {
                    "_id": id,
                    "deleted_at": null,
                },
                TicketDetailEntity::from(ticket_detail),
            )
            .await?;

        match update_result.matched_count == 1 {
            true => {
                tracing::debug!(id, "replaced ticket detail");
                Ok(())
            }
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn find_tickets(&self, page: u32, page_size: u32) -> Result<Paginated<Ticket>, Error> {
        let (entities, total_count) = Self::find_page(self.tickets(), page, page_size).await?;
        let tickets = entities.into_iter().map(Ticket::from).collect();

        Ok(Paginated::new(tickets, total_count, page_size))
    }

    async fn find_ticket_details(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Paginated<TicketDetail>, Error> {
        let (entities, total_count) =
            Self::find_page(self.ticket_details(), page, page_size).await?;
        let ticket_details = entities.into_iter().map(TicketDetail::from).collect();

        Ok(Paginated::new(ticket_details, total_count, page_size))
    }

    async fn find_online_ticket(&self, region: &str) -> Result<Option<OnlineTicket>, Error> {
        let Some(ticket) = self.find_ticket_by_region_name(region).await? else {
            return Ok(None);
        };

        let ticket_details = self.find_ticket_detail_by_ticket_id(ticket.id).await?;

        Ok(Some(OnlineTicket::from_ticket_details(&ticket_details)))
    }
}
