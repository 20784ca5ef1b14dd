use super::{OnlineTicketRules, OnlineTicketVerdict};
use crate::error::Error;

///
/// Business rules deciding how tickets are presented
/// based on the state of Online tickets
///
#[cfg_attr(test, mockall::automock)]
pub trait OnlineTicketRulesService: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::RulesNotMatched] when
    ///     - no rule matches facts
    ///
    fn evaluate(&self, rules: &OnlineTicketRules) -> Result<OnlineTicketVerdict, Error>;
}
