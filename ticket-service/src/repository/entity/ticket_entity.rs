use bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct TicketEntity {
    pub _id: i64,
    pub capacity: i32,
    pub region: String,
    pub event_date: DateTime,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
    pub deleted_at: Option<DateTime>,
}
