//! HTTP JSON fetch stage.
//!
//! Uses async reqwest internally but presents a sync interface; the
//! pipeline is fully sequential, one request per run, no retry and
//! no caching.

use std::sync::LazyLock;

use serde_json::Value;

use crate::config::FetchConfig;
use crate::error::PipelineError;

/// Shared async HTTP client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .build()
        .expect("failed to build HTTP client")
});

/// Get shared HTTP client.
pub fn http_client() -> &'static reqwest::Client {
    &SHARED_CLIENT
}

/// Shared tokio runtime for HTTP operations.
pub static SHARED_RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
});

/// Join endpoint and path with exactly one slash between them.
///
/// Leading and trailing slashes are stripped from each part independently,
/// so `"https://x/"` + `"/y/z/"` becomes `"https://x/y/z"`.
pub fn join_url(endpoint: &str, path: &str) -> String {
    [endpoint, path]
        .iter()
        .map(|part| part.trim_matches('/'))
        .collect::<Vec<_>>()
        .join("/")
}

/// GET the configured URL and parse the response body as JSON.
///
/// A non-2xx status is logged at error level and returned as
/// [`PipelineError::Fetch`] carrying the URL, status code and body text.
pub fn fetch(config: &FetchConfig) -> Result<Value, PipelineError> {
    let url = join_url(&config.api_endpoint, &config.api_path);
    log::debug!("GET {url}");

    let (status, body) = SHARED_RUNTIME.handle().block_on(async {
        let resp = http_client()
            .get(&url)
            .send()
            .await
            .map_err(|e| PipelineError::Fetch {
                url: url.clone(),
                status: e.status().map(|s| s.as_u16()),
                body: e.to_string(),
            })?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| PipelineError::Fetch {
            url: url.clone(),
            status: Some(status.as_u16()),
            body: e.to_string(),
        })?;
        Ok::<_, PipelineError>((status, body))
    })?;

    if !status.is_success() {
        let err = PipelineError::Fetch {
            url,
            status: Some(status.as_u16()),
            body,
        };
        log::error!("{err}");
        return Err(err);
    }

    serde_json::from_str(&body).map_err(|e| PipelineError::Json {
        url,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_strips_surrounding_slashes() {
        assert_eq!(join_url("https://x/", "/y/z/"), "https://x/y/z");
    }

    #[test]
    fn join_url_adds_missing_slash() {
        assert_eq!(
            join_url("http://webapibrt.rio.rj.gov.br/api/v1", "brt"),
            "http://webapibrt.rio.rj.gov.br/api/v1/brt"
        );
    }

    #[test]
    fn join_url_no_duplicate_slash() {
        let url = join_url("https://api.example.com/", "/v1/users");
        assert_eq!(url, "https://api.example.com/v1/users");
        // Everything after the scheme must be single slashes
        assert!(!url["https://".len()..].contains("//"));
    }

    #[test]
    fn join_url_keeps_inner_path_slashes() {
        assert_eq!(join_url("https://x", "a/b/c"), "https://x/a/b/c");
    }
}
