// Response handling shared by every endpoint: status check first, then
// JSON decoding with the raw body kept for diagnostics.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Error;

/// Fail with `Error::Status` unless the response is 2xx. Returns the body.
pub(crate) async fn success_body(resp: reqwest::Response) -> Result<String, Error> {
    let status = resp.status();
    let url = resp.url().to_string();
    let body = resp.text().await.map_err(Error::Transport)?;

    if !status.is_success() {
        debug!(%url, status = status.as_u16(), "unsuccessful response");
        return Err(Error::Status {
            url,
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

/// Check the status, then decode the body as `T`.
pub(crate) async fn json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let body = success_body(resp).await?;
    serde_json::from_str(&body).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body,
    })
}
