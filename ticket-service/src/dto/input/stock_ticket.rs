use crate::error::Error;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct StockTicket {
    pub ticket_detail_id: i64,
    pub total_tickets: i64,
}

impl StockTicket {
    pub fn validate(&self) -> Result<(), Error> {
        if self.total_tickets == 0 {
            return Err(Error::Validation("total_tickets is required"));
        }

        Ok(())
    }
}
