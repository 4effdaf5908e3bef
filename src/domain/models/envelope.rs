use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// The fixed wrapper shape every remote response is parsed from. The gateway
/// unwraps it; nothing outside the gateway ever sees one.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub message_code: String,
    #[serde(default)]
    pub current_time: String,
}

impl Envelope {
    pub fn is_failure(&self) -> bool {
        return self.error_code.is_some();
    }
}
