use super::{StockConsumerServiceConfig, StockRoutingKey};
use crate::{
    dto::{input, output},
    rabbitmq::{RabbitmqChannelCallback, RabbitmqFailure},
    service::{event_publisher::EventPublisher, stock_service::StockService},
};
use amqprs::{
    channel::{
        BasicAckArguments, BasicConsumeArguments, Channel, ExchangeDeclareArguments, ExchangeType,
        QueueBindArguments, QueueDeclareArguments,
    },
    connection::Connection,
    consumer::AsyncConsumer,
    BasicProperties, Deliver,
};
use anyhow::anyhow;
use axum::async_trait;
use std::{str::FromStr, sync::Arc};
use strum::IntoEnumIterator;

pub struct StockConsumerService {
    channel: Channel,
}

impl StockConsumerService {
    pub async fn new(
        config: StockConsumerServiceConfig,
        rabbitmq_connection: &Connection,
        rabbitmq_failure: RabbitmqFailure,
        stock_service: Arc<dyn StockService>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> anyhow::Result<Self> {
        tracing::info!("starting stock consumer");

        tracing::info!("opening channel");
        let channel = rabbitmq_connection.open_channel(None).await?;
        channel
            .register_callback(RabbitmqChannelCallback::new(rabbitmq_failure))
            .await?;

        tracing::info!(exchange = %config.exchange, "declaring exchange");
        let exchange_declare_args =
            ExchangeDeclareArguments::of_type(&config.exchange, ExchangeType::Direct)
                .durable(true)
                .finish();
        channel.exchange_declare(exchange_declare_args).await?;

        tracing::info!(queue = %config.queue, "declaring queue");
        let queue_declare_args = QueueDeclareArguments::new(&config.queue)
            .durable(true)
            .finish();
        channel.queue_declare(queue_declare_args).await?;

        tracing::info!("binding queue");
        for routing_key in StockRoutingKey::iter() {
            let queue_bind_args =
                QueueBindArguments::new(&config.queue, &config.exchange, routing_key.as_ref());
            channel.queue_bind(queue_bind_args).await?;
        }

        tracing::info!("consuming");
        let basic_consume_args = BasicConsumeArguments::new(&config.queue, "")
            .auto_ack(false)
            .finish();
        let consumer = Consumer {
            stock_service,
            event_publisher,
            poisoned_queue_topic: config.poisoned_queue_topic,
        };
        channel.basic_consume(consumer, basic_consume_args).await?;

        tracing::info!("stock consumer started");

        Ok(Self { channel })
    }

    pub async fn close(self) {
        tracing::info!("closing stock consumer");

        if let Err(err) = self.channel.close().await {
            tracing::warn!(%err, "closing stock consumer channel failed");
        }

        tracing::info!("stock consumer closed");
    }
}

#[derive(Clone)]
struct Consumer {
    stock_service: Arc<dyn StockService>,
    event_publisher: Arc<dyn EventPublisher>,
    poisoned_queue_topic: String,
}

impl Consumer {
    async fn process(&self, routing_key: &str, content: Vec<u8>) {
        match self.try_consume(routing_key, &content).await {
            Ok(()) => tracing::info!("stock message consumed"),
            Err(err) => {
                tracing::warn!(%err, "failed to consume stock message");
                self.report_poisoned(routing_key, &err, &content).await;
            }
        }
    }

    async fn try_consume(&self, routing_key: &str, content: &[u8]) -> anyhow::Result<()> {
        let routing_key = StockRoutingKey::from_str(routing_key)
            .map_err(|_| anyhow!("unknown routing key: {routing_key}"))?;
        let stock_ticket = serde_json::from_slice::<input::StockTicket>(content)
            .map_err(|err| anyhow!("invalid stock ticket: {err}"))?;
        stock_ticket.validate()?;

        let ticket_detail_id = stock_ticket.ticket_detail_id;
        let amount = stock_ticket.total_tickets;
        match routing_key {
            StockRoutingKey::DecrementTicketStock => {
                self.stock_service
                    .decrement_ticket_stock(ticket_detail_id, amount)
                    .await?
            }
            StockRoutingKey::IncrementTicketStock => {
                self.stock_service
                    .increment_ticket_stock(ticket_detail_id, amount)
                    .await?
            }
        }

        Ok(())
    }

    async fn report_poisoned(&self, routing_key: &str, err: &anyhow::Error, content: &[u8]) {
        let poisoned_queue =
            output::PoisonedQueue::new(routing_key.to_string(), err.to_string(), content);
        let payload = match serde_json::to_vec(&poisoned_queue) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(%err, "failed to encode poisoned message");
                return;
            }
        };

        if let Err(err) = self
            .event_publisher
            .publish(&self.poisoned_queue_topic, payload)
            .await
        {
            tracing::warn!(%err, "failed to report poisoned message");
        }
    }
}

#[async_trait]
impl AsyncConsumer for Consumer {
    #[tracing::instrument(
        name = "Stock Consumer",
        skip_all,
        fields(
            delivery_tag = deliver.delivery_tag(),
            routing_key = %deliver.routing_key(),
        )
    )]
    async fn consume(
        &mut self,
        channel: &Channel,
        deliver: Deliver,
        _basic_properties: BasicProperties,
        content: Vec<u8>,
    ) {
        tracing::info!("processing stock message");

        self.process(deliver.routing_key(), content).await;

        tracing::trace!("sending ack");
        let args = BasicAckArguments::new(deliver.delivery_tag(), false);
        if let Err(err) = channel.basic_ack(args).await {
            tracing::warn!(%err, "failed to ack message");
        }
        tracing::trace!("ack sent");

        tracing::info!("stock message processed");
    }
}
