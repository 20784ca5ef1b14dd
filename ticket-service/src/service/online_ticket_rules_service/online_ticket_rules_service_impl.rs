use super::{
    dto::{OnlineTicketRule, OnlineTicketRulesTable},
    OnlineTicketRules, OnlineTicketRulesService, OnlineTicketVerdict,
};
use crate::error::Error;
use anyhow::Context;

///
/// Decision table evaluated with first hit policy
///
pub struct OnlineTicketRulesServiceImpl {
    rules: Vec<OnlineTicketRule>,
}

impl OnlineTicketRulesServiceImpl {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read online ticket rules from {path}"))?;

        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let table = serde_json::from_str::<OnlineTicketRulesTable>(json)
            .context("invalid online ticket rules")?;
        if table.rules.is_empty() {
            anyhow::bail!("online ticket rules are empty");
        }

        Ok(Self { rules: table.rules })
    }
}

impl OnlineTicketRulesService for OnlineTicketRulesServiceImpl {
    fn evaluate(&self, rules: &OnlineTicketRules) -> Result<OnlineTicketVerdict, Error> {
        let rule = self
            .rules
            .iter()
            .find(|rule| rule.matches(rules))
            .ok_or(Error::RulesNotMatched)?;

        tracing::debug!(rule = %rule.name, ?rules, "online ticket rule matched");

        Ok(rule.verdict)
    }
}
