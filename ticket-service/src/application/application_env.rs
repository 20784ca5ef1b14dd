use crate::auth::{parse_jwt_algorithms, parse_jwt_key};
use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use std::net::SocketAddr;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    /// Algorithms must belong to the same family
    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_key: DecodingKey,

    /// Decision table evaluated when listing tickets
    pub online_ticket_rules_path: String,

    pub rabbitmq_connection_string: String,
    pub rabbitmq_stock_exchange_name: String,
    pub rabbitmq_stock_queue_name: String,
    pub rabbitmq_events_exchange_name: String,
    pub rabbitmq_poisoned_queue_topic: String,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("TICKET_SERVICE_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TICKET_SERVICE_LOG_FILENAME")?;
        let bind_address = Self::env_var("TICKET_SERVICE_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("TICKET_SERVICE_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("TICKET_SERVICE_DB_NAME")?;
        let jwt_algorithms = parse_jwt_algorithms(Self::env_var("TICKET_SERVICE_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "TICKET_SERVICE_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_key = parse_jwt_key(jwt_algorithm, Self::env_var("TICKET_SERVICE_JWT_KEY")?)?;
        let online_ticket_rules_path = Self::env_var("TICKET_SERVICE_ONLINE_TICKET_RULES_PATH")?;
        let rabbitmq_connection_string =
            Self::env_var("TICKET_SERVICE_RABBITMQ_CONNECTION_STRING")?;
        let rabbitmq_stock_exchange_name =
            Self::env_var("TICKET_SERVICE_RABBITMQ_STOCK_EXCHANGE_NAME")?;
        let rabbitmq_stock_queue_name = Self::env_var("TICKET_SERVICE_RABBITMQ_STOCK_QUEUE_NAME")?;
        let rabbitmq_events_exchange_name =
            Self::env_var("TICKET_SERVICE_RABBITMQ_EVENTS_EXCHANGE_NAME")?;
        let rabbitmq_poisoned_queue_topic =
            Self::env_var("TICKET_SERVICE_RABBITMQ_POISONED_QUEUE_TOPIC")?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            jwt_algorithms,
            jwt_key,
            online_ticket_rules_path,
            rabbitmq_connection_string,
            rabbitmq_stock_exchange_name,
            rabbitmq_stock_queue_name,
            rabbitmq_events_exchange_name,
            rabbitmq_poisoned_queue_topic,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
