mod inquiry_ticket_amount;
mod poisoned_queue;
mod stock_ticket;
mod ticket;
mod ticket_sold_out;
mod tickets_page;

pub use inquiry_ticket_amount::*;
pub use poisoned_queue::*;
pub use stock_ticket::*;
pub use ticket::*;
pub use ticket_sold_out::*;
pub use tickets_page::*;
