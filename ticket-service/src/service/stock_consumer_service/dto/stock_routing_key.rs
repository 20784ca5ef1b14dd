use strum::{AsRefStr, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum StockRoutingKey {
    DecrementTicketStock,
    IncrementTicketStock,
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn routing_keys() {
        let routing_keys = StockRoutingKey::iter()
            .map(|routing_key| routing_key.as_ref().to_string())
            .collect::<Vec<_>>();

        assert_eq!(
            routing_keys,
            vec!["decrement_ticket_stock", "increment_ticket_stock"]
        );
    }

    #[test]
    fn routing_key_from_str() {
        assert_eq!(
            StockRoutingKey::from_str("increment_ticket_stock"),
            Ok(StockRoutingKey::IncrementTicketStock)
        );
        assert!(StockRoutingKey::from_str("delete_ticket").is_err());
    }
}
