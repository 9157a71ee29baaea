// src/system/fetch.rs

use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Refusing to fetch '{0}': only http and https URLs are supported.")]
    UnsupportedScheme(String),
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("'{url}' returned an empty body.")]
    EmptyBody { url: String },
}

/// Downloads `url` and returns its body as text.
///
/// Non-success HTTP statuses are errors. The content is not verified in any way.
pub fn fetch_text(url: &str) -> Result<String, FetchError> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(FetchError::UnsupportedScheme(url.to_string()));
    }

    let request_error = |source| FetchError::Request {
        url: url.to_string(),
        source,
    };

    log::debug!("Fetching '{}'", url);
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(request_error)?;

    let body = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(request_error)?;

    if body.trim().is_empty() {
        return Err(FetchError::EmptyBody {
            url: url.to_string(),
        });
    }

    log::debug!("Fetched {} bytes from '{}'", body.len(), url);
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_http_urls_are_rejected_before_any_request() {
        assert!(matches!(
            fetch_text("file:///etc/passwd"),
            Err(FetchError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            fetch_text("ftp://example.org/install.sh"),
            Err(FetchError::UnsupportedScheme(_))
        ));
    }
}
