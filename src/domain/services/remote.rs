use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::models::Gateway;
use crate::domain::models::GatewayError;
use crate::domain::models::GatewayRequest;
use crate::domain::models::Page;

/// Calls the gateway and decodes the unwrapped payload into `T`.
pub async fn fetch<T, G>(gateway: &G, request: GatewayRequest) -> Result<T, GatewayError>
where
    T: DeserializeOwned,
    G: Gateway + ?Sized,
{
    let data = gateway.call(request).await?;

    return decode(data);
}

/// Issues a mutation that reports success or failure only. Status-transition
/// endpoints return no payload worth reading, so any data is ignored.
pub async fn execute<G>(gateway: &G, request: GatewayRequest) -> Result<(), GatewayError>
where
    G: Gateway + ?Sized,
{
    gateway.call(request).await?;

    return Ok(());
}

/// Fetches one page of a list endpoint.
pub async fn fetch_page<T, G>(
    gateway: &G,
    path: &str,
    params: &[(String, String)],
) -> Result<Page<T>, GatewayError>
where
    T: DeserializeOwned,
    G: Gateway + ?Sized,
{
    return fetch(gateway, GatewayRequest::get(path).with_query(params.to_vec())).await;
}

fn decode<T: DeserializeOwned>(data: Value) -> Result<T, GatewayError> {
    return serde_json::from_value::<T>(data).map_err(|err| {
        tracing::error!(error = ?err, "Response payload does not match the expected shape");
        return GatewayError::malformed();
    });
}
