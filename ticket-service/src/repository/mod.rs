mod dto;
mod entity;
mod error;
mod profiles_repository;
mod tickets_repository;

pub use dto::*;
pub use error::*;
pub use profiles_repository::*;
pub use tickets_repository::*;

#[cfg(test)]
mod test {
    use mongodb::{options::ClientOptions, Client, Database};
    use std::sync::Once;
    use time::OffsetDateTime;

    static INIT_ENV_ONCE: Once = Once::new();

    pub async fn create_test_database() -> Database {
        INIT_ENV_ONCE.call_once(|| {
            let _ = dotenvy::dotenv();
        });

        let db_connection_string = std::env::var("TICKET_SERVICE_DB_CONNECTION_STRING").unwrap();
        let db_name = format!("test_{}", OffsetDateTime::now_utc().unix_timestamp_nanos());

        println!("creating test database: {db_name}");

        let db_client_options = ClientOptions::parse(db_connection_string).await.unwrap();
        let db_client = Client::with_options(db_client_options).unwrap();

        db_client.database(&db_name)
    }

    pub async fn destroy_test_database(database: Database) {
        let _ = database.drop().await;
        database.client().clone().shutdown().await;
    }
}
