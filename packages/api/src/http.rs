//! Request plumbing shared by [`crate::Api`] and [`crate::Auth`].

use reqwest::Response;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Result};

/// Parse a configured root, making sure relative joins keep its path.
///
/// `Url::join` drops the last segment unless the base ends with `/`, which
/// would turn `.../v1/cohort-44` + `cards` into `.../v1/cards`.
pub(crate) fn parse_base(base: &str) -> Result<Url> {
    let mut url = Url::parse(base)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Resolve an endpoint path such as `"cards/likes/42"` against a root.
pub(crate) fn endpoint(base: &Url, path: &str) -> Result<Url> {
    Ok(base.join(path.trim_start_matches('/'))?)
}

/// Convert non-2xx responses into [`Error::Http`], keeping the body as message.
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let message = match response.text().await {
        Ok(body) if !body.trim().is_empty() => body,
        _ => status.canonical_reason().unwrap_or("Unknown Error").to_string(),
    };

    Err(Error::Http { status, message })
}

/// Check the status and decode a JSON body.
pub(crate) async fn json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = check_status(response).await?;
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| Error::Decode(e.to_string()))
}
