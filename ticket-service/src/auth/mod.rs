mod dto;
pub(crate) mod jwt_authorization_validator;
mod util;

pub use dto::User;
pub use jwt_authorization_validator::*;
pub use util::*;
