use crate::error::Error;
use axum::async_trait;

///
/// Service used to report events to any interested party
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPublisher: Send + Sync {
    ///
    /// Publish JSON encoded `payload` under `topic`
    ///
    /// ### Errors
    /// - [Error::Publisher] when
    ///     - broker rejected message
    ///     - channel is closed
    ///
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<(), Error>;
}
