use super::{EventPublisher, RabbitmqEventPublisherConfig};
use crate::{
    error::Error,
    rabbitmq::{RabbitmqChannelCallback, RabbitmqFailure},
};
use amqprs::{
    channel::{BasicPublishArguments, Channel, ExchangeDeclareArguments, ExchangeType},
    connection::Connection,
    BasicProperties,
};
use axum::async_trait;

pub struct RabbitmqEventPublisher {
    exchange: String,
    channel: Channel,
}

impl RabbitmqEventPublisher {
    pub async fn new(
        config: RabbitmqEventPublisherConfig,
        rabbitmq_connection: &Connection,
        rabbitmq_failure: RabbitmqFailure,
    ) -> anyhow::Result<Self> {
        tracing::info!(exchange = %config.exchange, "starting event publisher");

        let channel = rabbitmq_connection.open_channel(None).await?;
        channel
            .register_callback(RabbitmqChannelCallback::new(rabbitmq_failure))
            .await?;

        let exchange_declare_args =
            ExchangeDeclareArguments::of_type(&config.exchange, ExchangeType::Direct)
                .durable(true)
                .finish();
        channel.exchange_declare(exchange_declare_args).await?;

        tracing::info!("event publisher started");

        Ok(Self {
            exchange: config.exchange,
            channel,
        })
    }

    pub async fn close(&self) {
        tracing::info!("closing event publisher");

        if let Err(err) = self.channel.clone().close().await {
            tracing::warn!(%err, "closing event publisher channel failed");
        }

        tracing::info!("event publisher closed");
    }
}

#[async_trait]
impl EventPublisher for RabbitmqEventPublisher {
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<(), Error> {
        tracing::info!(topic, "publishing event");

        let basic_properties = BasicProperties::default()
            .with_persistence(true)
            .with_content_type("application/json")
            .finish();
        let args = BasicPublishArguments::new(&self.exchange, topic);
        self.channel
            .basic_publish(basic_properties, payload, args)
            .await?;

        tracing::info!(topic, "published event");

        Ok(())
    }
}
