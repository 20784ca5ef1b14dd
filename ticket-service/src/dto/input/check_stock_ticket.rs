use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CheckStockTicket {
    pub ticket_detail_id: i64,
}
