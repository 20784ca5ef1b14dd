mod check_stock_ticket;
mod inquiry_ticket_amount;
mod pagination;
mod stock_ticket;

pub use check_stock_ticket::*;
pub use inquiry_ticket_amount::*;
pub use pagination::*;
pub use stock_ticket::*;
