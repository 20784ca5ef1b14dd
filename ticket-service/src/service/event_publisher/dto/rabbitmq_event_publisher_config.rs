pub struct RabbitmqEventPublisherConfig {
    pub exchange: String,
}
