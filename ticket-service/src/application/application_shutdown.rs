use super::ApplicationStateToClose;
use crate::rabbitmq::RabbitmqFailure;

pub async fn close(state: ApplicationStateToClose) {
    tracing::info!("closing rabbitmq stock consumer");
    state.stock_consumer_service.close().await;

    tracing::info!("closing rabbitmq event publisher");
    state.event_publisher.close().await;

    tracing::info!("closing rabbitmq connection");
    if let Err(err) = state.rabbitmq_connection.close().await {
        tracing::warn!(%err, "closing rabbitmq connection failed");
    }

    tracing::info!("closing connection with database");
    state.db_client.shutdown().await;
}

pub async fn shutdown_signal(rabbitmq_failure: RabbitmqFailure) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
        _ = rabbitmq_failure.wait() => {},
    }

    tracing::info!("starting shutdown");
}
