use super::RabbitmqFailure;
use amqprs::{
    callbacks::ChannelCallback, channel::Channel, Ack, BasicProperties, Cancel, CloseChannel, Nack,
    Return,
};
use axum::async_trait;

pub struct RabbitmqChannelCallback {
    rabbitmq_failure: RabbitmqFailure,
}

impl RabbitmqChannelCallback {
    pub fn new(rabbitmq_failure: RabbitmqFailure) -> Self {
        Self { rabbitmq_failure }
    }
}

#[async_trait]
impl ChannelCallback for RabbitmqChannelCallback {
    #[tracing::instrument(name = "RabbitMQ Channel Callback", skip_all)]
    async fn close(
        &mut self,
        _channel: &Channel,
        close: CloseChannel,
    ) -> Result<(), amqprs::error::Error> {
        tracing::error!(
            code = close.reply_code(),
            text = close.reply_text(),
            "received close",
        );

        self.rabbitmq_failure.report("channel closed by broker");

        Ok(())
    }

    #[tracing::instrument(name = "RabbitMQ Channel Callback", skip_all)]
    async fn cancel(
        &mut self,
        _channel: &Channel,
        _cancel: Cancel,
    ) -> Result<(), amqprs::error::Error> {
        tracing::error!("received cancel");

        self.rabbitmq_failure.report("consumer cancelled by broker");

        Ok(())
    }

    async fn flow(
        &mut self,
        _channel: &Channel,
        active: bool,
    ) -> Result<bool, amqprs::error::Error> {
        tracing::info!(active, "received flow");

        Ok(active)
    }

    async fn publish_ack(&mut self, _channel: &Channel, _ack: Ack) {
        // NOP publisher confirms are not enabled
    }

    async fn publish_nack(&mut self, _channel: &Channel, _nack: Nack) {
        // NOP publisher confirms are not enabled
    }

    async fn publish_return(
        &mut self,
        _channel: &Channel,
        _ret: Return,
        _basic_properties: BasicProperties,
        _content: Vec<u8>,
    ) {
        // NOP messages are not published as mandatory
    }
}
