#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use super::remote;
use super::SessionStore;
use crate::domain::models::Gateway;
use crate::domain::models::GatewayRequest;
use crate::domain::models::UserProfile;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct LoginRequest {
    username: String,
    password: String,
}

// The login endpoint also returns a refresh token. There is no refresh flow;
// sessions expire and force a new login, so the field is not modelled.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserProfile,
}

/// Authenticates against the remote service and stores the credential and
/// identity in the session. Returns the signed-in profile.
pub async fn login<G>(
    gateway: &G,
    session: &SessionStore,
    username: &str,
    password: &str,
) -> Result<UserProfile>
where
    G: Gateway + ?Sized,
{
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response = remote::fetch::<LoginResponse, G>(
        gateway,
        GatewayRequest::post("/auth/login").with_body(serde_json::to_value(&request)?),
    )
    .await?;

    session.set_credential(&response.access_token)?;
    session.set_identity(response.user.clone())?;

    tracing::debug!(username = response.user.username, "Signed in");

    return Ok(response.user);
}

/// Clears the persisted session. Client-side only; the credential simply
/// stops being attached to outbound calls.
pub fn logout(session: &SessionStore) -> Result<()> {
    return session.clear();
}
