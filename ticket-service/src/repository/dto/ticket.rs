use crate::repository::entity::TicketEntity;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i64,
    pub capacity: i32,
    pub region: String,
    pub event_date: OffsetDateTime,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
    pub deleted_at: Option<OffsetDateTime>,
}

impl From<TicketEntity> for Ticket {
    fn from(value: TicketEntity) -> Self {
        Self {
            id: value._id,
            capacity: value.capacity,
            region: value.region,
            event_date: value.event_date.into(),
            created_at: value.created_at.into(),
            updated_at: value.updated_at.map(OffsetDateTime::from),
            deleted_at: value.deleted_at.map(OffsetDateTime::from),
        }
    }
}
