use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct OnlineTicketVerdict {
    pub is_sold_out: bool,
    pub is_first_sold_out: bool,
}
