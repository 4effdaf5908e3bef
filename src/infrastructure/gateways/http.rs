#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Envelope;
use crate::domain::models::Gateway;
use crate::domain::models::GatewayError;
use crate::domain::models::GatewayRequest;
use crate::domain::models::Method;
use crate::domain::models::SessionEvent;
use crate::domain::services::SessionStore;

/// The one component performing outbound remote calls. Attaches the bearer
/// credential when the session holds one, unwraps the response envelope,
/// normalizes every failure to a [`GatewayError`], and tears the session
/// down on a 401 so callers never special-case authorization loss. Failed
/// calls surface immediately; retrying is a caller decision.
pub struct HttpGateway {
    url: String,
    timeout: Duration,
    session: Arc<SessionStore>,
    events: mpsc::UnboundedSender<SessionEvent>,
}

impl HttpGateway {
    pub fn new(
        session: Arc<SessionStore>,
        events: mpsc::UnboundedSender<SessionEvent>,
    ) -> HttpGateway {
        let timeout = Config::get(ConfigKey::GatewayTimeout)
            .parse::<u64>()
            .unwrap_or(10_000);

        return HttpGateway {
            url: Config::get(ConfigKey::GatewayURL),
            timeout: Duration::from_millis(timeout),
            session,
            events,
        };
    }

    fn expire_session(&self) {
        if let Err(err) = self.session.clear() {
            tracing::error!(error = ?err, "Unable to clear session after authorization loss");
        }

        // The receiver may already be gone during shutdown.
        let _ = self.events.send(SessionEvent::Expired);
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn call(&self, request: GatewayRequest) -> Result<Value, GatewayError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = reqwest::Client::new()
            .request(
                method,
                format!("{url}{path}", url = self.url, path = request.path),
            )
            .timeout(self.timeout);

        if let Some(credential) = self.session.credential() {
            builder = builder.header("Authorization", format!("Bearer {credential}"));
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let res = match builder.send().await {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, path = request.path, "Transport failure");
                return Err(GatewayError::transport());
            }
        };

        let status = res.status().as_u16();
        let payload = match res.text().await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(error = ?err, path = request.path, "Failed to read response body");
                return Err(GatewayError::transport());
            }
        };

        let envelope = serde_json::from_str::<Envelope>(&payload);

        if status == 401 {
            tracing::warn!(path = request.path, "Authorization denied, tearing down session");
            self.expire_session();
        }

        if !(200..300).contains(&status) {
            let message = match &envelope {
                Ok(envelope) => envelope.message.clone(),
                Err(_) => "".to_string(),
            };

            return Err(GatewayError::remote(&message, status));
        }

        let envelope = match envelope {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::error!(
                    error = ?err,
                    status = status,
                    path = request.path,
                    "Response is not a valid envelope"
                );
                return Err(GatewayError::remote("", status));
            }
        };

        if envelope.is_failure() {
            return Err(GatewayError::remote(&envelope.message, status));
        }

        return Ok(envelope.data.unwrap_or(Value::Null));
    }
}
