use crate::repository::TicketDetail;
use bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct TicketDetailEntity {
    pub _id: i64,
    pub ticket_id: i64,
    pub level: String,
    pub stock: i64,
    pub base_price: f64,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
    pub deleted_at: Option<DateTime>,
}

impl From<TicketDetail> for TicketDetailEntity {
    fn from(value: TicketDetail) -> Self {
        Self {
            _id: value.id,
            ticket_id: value.ticket_id,
            level: value.level,
            stock: value.stock,
            base_price: value.base_price,
            created_at: value.created_at.into(),
            updated_at: value.updated_at.map(DateTime::from),
            deleted_at: value.deleted_at.map(DateTime::from),
        }
    }
}
