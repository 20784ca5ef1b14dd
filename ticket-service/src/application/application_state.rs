use super::ApplicationEnv;
use crate::{
    rabbitmq::{RabbitmqConnectionCallback, RabbitmqFailure},
    repository::{ProfilesRepositoryImpl, TicketsRepositoryImpl},
    service::{
        event_publisher::{RabbitmqEventPublisher, RabbitmqEventPublisherConfig},
        listing_service::{ListingService, ListingServiceImpl},
        online_ticket_rules_service::OnlineTicketRulesServiceImpl,
        stock_consumer_service::{StockConsumerService, StockConsumerServiceConfig},
        stock_service::{StockService, StockServiceImpl},
    },
};
use amqprs::connection::{Connection, OpenConnectionArguments};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub stock_service: Arc<dyn StockService>,
    pub listing_service: Arc<dyn ListingService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
    pub rabbitmq_connection: Connection,
    pub event_publisher: Arc<RabbitmqEventPublisher>,
    pub stock_consumer_service: StockConsumerService,
    pub rabbitmq_failure: RabbitmqFailure,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let tickets_repository = TicketsRepositoryImpl::new(db.clone()).await?;
    let tickets_repository = Arc::new(tickets_repository);
    let profiles_repository = ProfilesRepositoryImpl::new(db).await?;
    let profiles_repository = Arc::new(profiles_repository);

    tracing::info!(path = %env.online_ticket_rules_path, "loading online ticket rules");
    let online_ticket_rules = OnlineTicketRulesServiceImpl::from_file(&env.online_ticket_rules_path)?;
    let online_ticket_rules = Arc::new(online_ticket_rules);

    tracing::info!("connecting to rabbitmq");
    let open_connection_args =
        OpenConnectionArguments::try_from(env.rabbitmq_connection_string.as_str())?;
    let rabbitmq_connection = Connection::open(&open_connection_args).await?;
    let rabbitmq_failure = RabbitmqFailure::new();
    rabbitmq_connection
        .register_callback(RabbitmqConnectionCallback::new(rabbitmq_failure.clone()))
        .await?;

    let connection = rabbitmq_connection.clone();
    let connection_failure = rabbitmq_failure.clone();
    tokio::spawn(async move {
        if connection.listen_network_io_failure().await {
            connection_failure.report("connection broken");
        }
    });

    let config = RabbitmqEventPublisherConfig {
        exchange: env.rabbitmq_events_exchange_name.clone(),
    };
    let event_publisher =
        RabbitmqEventPublisher::new(config, &rabbitmq_connection, rabbitmq_failure.clone())
            .await?;
    let event_publisher = Arc::new(event_publisher);

    tracing::info!("creating services");
    let stock_service = StockServiceImpl::new(tickets_repository.clone());
    let stock_service = Arc::new(stock_service);

    let listing_service =
        ListingServiceImpl::new(tickets_repository, profiles_repository, online_ticket_rules);
    let listing_service = Arc::new(listing_service);

    let config = StockConsumerServiceConfig {
        exchange: env.rabbitmq_stock_exchange_name.clone(),
        queue: env.rabbitmq_stock_queue_name.clone(),
        poisoned_queue_topic: env.rabbitmq_poisoned_queue_topic.clone(),
    };
    let stock_consumer_service = StockConsumerService::new(
        config,
        &rabbitmq_connection,
        rabbitmq_failure.clone(),
        stock_service.clone(),
        event_publisher.clone(),
    )
    .await?;

    Ok((
        ApplicationState {
            stock_service,
            listing_service,
        },
        ApplicationStateToClose {
            db_client,
            rabbitmq_connection,
            event_publisher,
            stock_consumer_service,
            rabbitmq_failure,
        },
    ))
}
