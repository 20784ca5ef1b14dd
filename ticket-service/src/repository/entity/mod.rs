mod profile_entity;
mod ticket_detail_entity;
mod ticket_entity;

pub use profile_entity::*;
pub use ticket_detail_entity::*;
pub use ticket_entity::*;
