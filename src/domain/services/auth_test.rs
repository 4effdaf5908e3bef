extern crate tempdir;

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use serde_json::Value;
use tempdir::TempDir;

use super::login;
use super::logout;
use crate::domain::models::Gateway;
use crate::domain::models::GatewayError;
use crate::domain::models::GatewayRequest;
use crate::domain::models::Method;
use crate::domain::services::SessionStore;

struct RecordingGateway {
    payload: Value,
    requests: Mutex<Vec<GatewayRequest>>,
}

impl RecordingGateway {
    fn with_payload(payload: Value) -> RecordingGateway {
        return RecordingGateway {
            payload,
            requests: Mutex::new(vec![]),
        };
    }
}

#[async_trait]
impl Gateway for RecordingGateway {
    async fn call(&self, request: GatewayRequest) -> Result<Value, GatewayError> {
        self.requests.lock().unwrap().push(request);

        return Ok(self.payload.clone());
    }
}

fn login_payload() -> Value {
    return json!({
        "access_token": "token-123",
        "user": {
            "id": 1,
            "username": "ada",
            "full_name": "Ada Lovelace",
            "email": "ada@example.com",
            "role": "SUPER_ADMIN",
        },
    });
}

#[tokio::test]
async fn it_stores_the_credential_and_identity_on_login() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let session = SessionStore::new(tmp_dir.path().join("session.json"));
    let gateway = RecordingGateway::with_payload(login_payload());

    let profile = login(&gateway, &session, "ada", "hunter2").await?;

    assert_eq!(profile.username, "ada");
    assert!(session.is_authenticated());
    assert_eq!(session.credential(), Some("token-123".to_string()));
    assert_eq!(session.identity().unwrap().email, "ada@example.com");

    let requests = gateway.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path, "/auth/login");
    assert_eq!(
        requests[0].body,
        Some(json!({ "username": "ada", "password": "hunter2" }))
    );

    return Ok(());
}

#[tokio::test]
async fn it_leaves_the_session_untouched_on_a_rejected_login() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let session = SessionStore::new(tmp_dir.path().join("session.json"));

    struct RejectingGateway {}

    #[async_trait]
    impl Gateway for RejectingGateway {
        async fn call(&self, _request: GatewayRequest) -> Result<Value, GatewayError> {
            return Err(GatewayError::remote("Invalid credentials", 403));
        }
    }

    let res = login(&RejectingGateway {}, &session, "ada", "wrong").await;

    let err = res.unwrap_err().downcast::<GatewayError>()?;
    assert_eq!(err.status, Some(403));
    assert!(!session.is_authenticated());
    assert_eq!(session.identity(), None);

    return Ok(());
}

#[tokio::test]
async fn it_clears_the_session_on_logout() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let session = SessionStore::new(tmp_dir.path().join("session.json"));
    let gateway = RecordingGateway::with_payload(login_payload());

    login(&gateway, &session, "ada", "hunter2").await?;
    logout(&session)?;

    assert!(!session.is_authenticated());
    assert_eq!(session.credential(), None);
    assert_eq!(session.identity(), None);

    return Ok(());
}
