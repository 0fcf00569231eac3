use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Status { status: u16, message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// True for non-2xx responses that carried an auth failure.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Status { status: 401 | 403, .. })
    }
}

/// Turn a non-2xx response into `ClientError::Status`, pulling the backend's
/// `error` or `message` JSON field when the body has one.
pub(crate) async fn check(
    resp: reqwest::Response,
    fallback: &str,
) -> ClientResult<reqwest::Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let message = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("error")
                .or_else(|| body.get("message"))
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| fallback.to_string());
    Err(ClientError::Status { status, message })
}
