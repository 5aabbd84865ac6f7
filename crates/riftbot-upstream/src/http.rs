//! Shared request plumbing for the adapter clients.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use riftbot::UpstreamError;

/// Issue one GET-style request and decode the JSON body.
///
/// `Ok(None)` is the explicit not-found arm; every other non-success status
/// and any transport error becomes an [`UpstreamError`].
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    service: &'static str,
    request: RequestBuilder,
) -> Result<Option<T>, UpstreamError> {
    let response = request
        .send()
        .await
        .map_err(|e| UpstreamError::Transport(e.to_string()))?;

    let status = response.status();
    debug!(service, status = %status, "upstream response");

    match status {
        StatusCode::NOT_FOUND => Ok(None),
        s if s.is_success() => {
            let payload = response.json::<T>().await.map_err(|e| UpstreamError::Payload {
                service,
                detail: e.to_string(),
            })?;
            Ok(Some(payload))
        }
        s => Err(UpstreamError::Status {
            service,
            status: s.as_u16(),
        }),
    }
}

/// Like [`fetch_json`] but for endpoints where not-found is not a meaningful
/// answer (listings, bulk catalogs): 404 becomes a status error.
pub(crate) async fn fetch_json_required<T: DeserializeOwned>(
    service: &'static str,
    request: RequestBuilder,
) -> Result<T, UpstreamError> {
    fetch_json(service, request)
        .await?
        .ok_or(UpstreamError::Status {
            service,
            status: 404,
        })
}
