use crate::error::Error;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct InquiryTicketAmount {
    ///
    /// Despite the name it identifies ticket detail
    ///
    pub ticket_id: i64,
    pub total_ticket: i64,
}

impl InquiryTicketAmount {
    pub fn validate(&self) -> Result<(), Error> {
        if self.total_ticket == 0 {
            return Err(Error::Validation("total_ticket is required"));
        }

        Ok(())
    }
}
