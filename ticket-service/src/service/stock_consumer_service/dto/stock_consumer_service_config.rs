pub struct StockConsumerServiceConfig {
    pub exchange: String,
    pub queue: String,
    ///
    /// Topic under which messages that could not be processed are reported
    ///
    pub poisoned_queue_topic: String,
}
