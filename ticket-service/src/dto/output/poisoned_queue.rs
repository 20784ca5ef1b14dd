use serde::Serialize;
use serde_json::Value;

///
/// Report of the message that could not be processed
///
#[derive(Debug, Serialize)]
pub struct PoisonedQueue {
    pub topic_target: String,
    pub error_msg: String,
    pub payload: Value,
}

impl PoisonedQueue {
    ///
    /// Payload is kept as JSON when possible, otherwise it's passed as lossy UTF-8 string
    ///
    pub fn new(topic_target: String, error_msg: String, payload: &[u8]) -> Self {
        let payload = serde_json::from_slice(payload)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(payload).into_owned()));

        Self {
            topic_target,
            error_msg,
            payload,
        }
    }
}
