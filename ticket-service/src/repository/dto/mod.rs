mod online_ticket;
mod paginated;
mod profile;
mod ticket;
mod ticket_detail;

pub use online_ticket::*;
pub use paginated::*;
pub use profile::*;
pub use ticket::*;
pub use ticket_detail::*;
