use std::error;
use std::fmt;

pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Unable to reach the server. Check your connection and try again.";
pub const REMOTE_FALLBACK_MESSAGE: &str =
    "The server returned an unexpected response. Please try again later.";

/// The only error shape any caller downstream of the gateway observes. A
/// missing `status` means no response was received at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayError {
    pub message: String,
    pub status: Option<u16>,
}

impl GatewayError {
    /// No response received (timeout, DNS, connection refused).
    pub fn transport() -> GatewayError {
        return GatewayError {
            message: TRANSPORT_FAILURE_MESSAGE.to_string(),
            status: None,
        };
    }

    /// A response with failure semantics. Falls back to a generic message
    /// when the server did not supply one.
    pub fn remote(message: &str, status: u16) -> GatewayError {
        let mut message = message.trim().to_string();
        if message.is_empty() {
            message = REMOTE_FALLBACK_MESSAGE.to_string();
        }

        return GatewayError {
            message,
            status: Some(status),
        };
    }

    /// A response that arrived but could not be decoded into the expected
    /// shape.
    pub fn malformed() -> GatewayError {
        return GatewayError {
            message: REMOTE_FALLBACK_MESSAGE.to_string(),
            status: None,
        };
    }

    pub fn is_unauthorized(&self) -> bool {
        return self.status == Some(401);
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(status) = self.status {
            return write!(f, "{message} (status {status})", message = self.message);
        }

        return write!(f, "{message}", message = self.message);
    }
}

impl error::Error for GatewayError {}
