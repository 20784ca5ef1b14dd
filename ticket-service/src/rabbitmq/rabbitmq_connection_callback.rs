use super::RabbitmqFailure;
use amqprs::{callbacks::ConnectionCallback, connection::Connection, Close};
use axum::async_trait;

pub struct RabbitmqConnectionCallback {
    rabbitmq_failure: RabbitmqFailure,
}

impl RabbitmqConnectionCallback {
    pub fn new(rabbitmq_failure: RabbitmqFailure) -> Self {
        Self { rabbitmq_failure }
    }
}

#[async_trait]
impl ConnectionCallback for RabbitmqConnectionCallback {
    #[tracing::instrument(name = "RabbitMQ Connection Callback", skip_all)]
    async fn close(
        &mut self,
        _connection: &Connection,
        close: Close,
    ) -> Result<(), amqprs::error::Error> {
        tracing::warn!(
            code = close.reply_code(),
            text = close.reply_text(),
            "received close",
        );

        self.rabbitmq_failure.report("connection closed by broker");

        Ok(())
    }

    #[tracing::instrument(name = "RabbitMQ Connection Callback", skip_all)]
    async fn blocked(&mut self, _connection: &Connection, reason: String) {
        tracing::warn!(reason, "received blocked");
    }

    #[tracing::instrument(name = "RabbitMQ Connection Callback", skip_all)]
    async fn unblocked(&mut self, _connection: &Connection) {
        tracing::info!("received unblocked");
    }
}
