use crate::repository::entity::TicketDetailEntity;
use time::OffsetDateTime;

///
/// Single price/seating tier of a [super::Ticket].
///
/// `stock` is never negative
///
#[derive(Debug, Clone, PartialEq)]
pub struct TicketDetail {
    pub id: i64,
    pub ticket_id: i64,
    pub level: String,
    pub stock: i64,
    pub base_price: f64,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
    pub deleted_at: Option<OffsetDateTime>,
}

impl From<TicketDetailEntity> for TicketDetail {
    fn from(value: TicketDetailEntity) -> Self {
        Self {
            id: value._id,
            ticket_id: value.ticket_id,
            level: value.level,
            stock: value.stock,
            base_price: value.base_price,
            created_at: value.created_at.into(),
            updated_at: value.updated_at.map(OffsetDateTime::from),
            deleted_at: value.deleted_at.map(OffsetDateTime::from),
        }
    }
}
