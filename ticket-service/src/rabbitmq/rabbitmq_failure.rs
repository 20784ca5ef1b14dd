use std::sync::Arc;
use tokio::sync::watch;

///
/// Shared flag raised when connection with RabbitMQ or any of its
/// channels is lost. Nothing reopens them, so the application has to stop.
///
#[derive(Clone)]
pub struct RabbitmqFailure {
    failed_tx: Arc<watch::Sender<bool>>,
}

impl RabbitmqFailure {
    pub fn new() -> Self {
        let (failed_tx, _) = watch::channel(false);

        Self {
            failed_tx: Arc::new(failed_tx),
        }
    }

    pub fn report(&self, reason: &str) {
        tracing::error!(reason, "rabbitmq failure");

        self.failed_tx.send_replace(true);
    }

    pub fn has_failed(&self) -> bool {
        *self.failed_tx.borrow()
    }

    ///
    /// Resolves once failure is reported
    ///
    pub async fn wait(&self) {
        let mut failed_rx = self.failed_tx.subscribe();

        // sender lives in self so channel cannot be closed
        let _ = failed_rx.wait_for(|failed| *failed).await;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_not_failed() {
        let rabbitmq_failure = RabbitmqFailure::new();

        assert!(!rabbitmq_failure.has_failed());
    }

    #[test]
    fn report_visible_in_clones() {
        let rabbitmq_failure = RabbitmqFailure::new();
        let clone = rabbitmq_failure.clone();

        clone.report("connection broken");

        assert!(rabbitmq_failure.has_failed());
    }

    #[tokio::test]
    async fn wait_resolves_after_report() {
        let rabbitmq_failure = RabbitmqFailure::new();
        let clone = rabbitmq_failure.clone();

        let waiter = tokio::spawn(async move { clone.wait().await });
        rabbitmq_failure.report("channel closed");

        let result = tokio::time::timeout(Duration::from_secs(1), waiter).await;

        assert!(matches!(result, Ok(Ok(()))));
    }

    #[tokio::test]
    async fn wait_resolves_when_already_failed() {
        let rabbitmq_failure = RabbitmqFailure::new();
        rabbitmq_failure.report("connection broken");

        let result = tokio::time::timeout(Duration::from_secs(1), rabbitmq_failure.wait()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn wait_pending_without_report() {
        let rabbitmq_failure = RabbitmqFailure::new();

        let result =
            tokio::time::timeout(Duration::from_millis(50), rabbitmq_failure.wait()).await;

        assert!(result.is_err());
    }
}
