use std::time::Duration;

use engine_logging::{engine_debug, engine_warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use crate::decode::decode_html;
use crate::{FailureKind, FetchError, PageFetchResult, ACCESS_FAILURE_STATUSES};

/// Client knobs. `None` leaves the HTTP client's own default in place.
#[derive(Debug, Clone, Default)]
pub struct FetchSettings {
    pub request_timeout: Option<Duration>,
}

pub trait Fetcher {
    /// Issue one GET and return the decoded page, or why it could not be had.
    fn fetch(&self, url: &str) -> PageFetchResult;
}

/// Blocking fetcher; one client (and its connection pool) serves every URL.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::blocking::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Fetcher for ReqwestFetcher {
    fn fetch(&self, url: &str) -> PageFetchResult {
        let parsed = reqwest::Url::parse(url).map_err(|err| {
            FetchError::new(
                url,
                FailureKind::InvalidUrl,
                format!("Invalid URL '{url}': {err}"),
            )
        })?;
        let response = self
            .client
            .get(parsed)
            .send()
            .map_err(|err| map_reqwest_error(url, err))?;

        let status = response.status();
        if let Some(kind) = classify_status(status) {
            let message = status_message(status, response.url().as_str());
            engine_debug!("GET {} -> {} ({})", url, status, kind);
            return Err(FetchError::new(url, kind, message));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let bytes = response
            .bytes()
            .map_err(|err| map_reqwest_error(url, err))?;
        let decoded = decode_html(&bytes, content_type.as_deref());
        if decoded.had_errors {
            engine_warn!(
                "{} is not valid {}; malformed bytes were replaced",
                url,
                decoded.encoding_label
            );
        }
        engine_debug!(
            "GET {} -> {} ({} bytes, {})",
            url,
            status,
            bytes.len(),
            decoded.encoding_label
        );
        Ok(decoded.html)
    }
}

/// Failure class for a response status, or `None` when the body should be used.
pub(crate) fn classify_status(status: StatusCode) -> Option<FailureKind> {
    let code = status.as_u16();
    if ACCESS_FAILURE_STATUSES.contains(&code) {
        Some(FailureKind::HttpStatus(code))
    } else if status.is_client_error() || status.is_server_error() {
        Some(FailureKind::ErrorStatus(code))
    } else {
        None
    }
}

fn status_message(status: StatusCode, url: &str) -> String {
    let side = if status.is_client_error() {
        "Client"
    } else {
        "Server"
    };
    let reason = status.canonical_reason().unwrap_or("Unknown");
    format!("{} {side} Error: {reason} for url: {url}", status.as_u16())
}

fn map_reqwest_error(url: &str, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(url, FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(url, FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(url, FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{classify_status, status_message};
    use crate::FailureKind;
    use reqwest::StatusCode;

    #[test]
    fn access_statuses_are_singled_out() {
        for code in [401, 403, 404, 500, 503] {
            let status = StatusCode::from_u16(code).unwrap();
            assert_eq!(classify_status(status), Some(FailureKind::HttpStatus(code)));
        }
    }

    #[test]
    fn other_error_statuses_fall_through() {
        for code in [400, 429, 502] {
            let status = StatusCode::from_u16(code).unwrap();
            assert_eq!(classify_status(status), Some(FailureKind::ErrorStatus(code)));
        }
        assert_eq!(classify_status(StatusCode::OK), None);
        assert_eq!(classify_status(StatusCode::NO_CONTENT), None);
    }

    #[test]
    fn status_message_names_side_and_reason() {
        assert_eq!(
            status_message(StatusCode::TOO_MANY_REQUESTS, "http://x/"),
            "429 Client Error: Too Many Requests for url: http://x/"
        );
        assert_eq!(
            status_message(StatusCode::BAD_GATEWAY, "http://x/"),
            "502 Server Error: Bad Gateway for url: http://x/"
        );
    }
}
