//! Typed errors for the pipeline stages

use std::fmt;

/// Error from a pipeline stage.
///
/// Every variant is fatal: the runner never recovers locally, it aborts
/// the run and surfaces the error to the caller.
#[derive(Debug)]
pub enum PipelineError {
    /// HTTP fetch failed: non-ok status, or transport error (status `None`).
    Fetch {
        url: String,
        status: Option<u16>,
        body: String,
    },
    /// Response body was not valid JSON.
    Json { url: String, message: String },
    /// Configured data key absent from the fetched payload.
    MissingKey { key: String },
    /// Value under the data key is not an array.
    NotAnArray { key: String },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch {
                url,
                status: Some(code),
                body,
            } => write!(f, "Failed to fetch URL {url}: status_code {code}, message \"{body}\""),
            Self::Fetch {
                url,
                status: None,
                body,
            } => write!(f, "Failed to fetch URL {url}: {body}"),
            Self::Json { url, message } => write!(f, "Invalid JSON from {url}: {message}"),
            Self::MissingKey { key } => write!(f, "Key \"{key}\" not found in payload"),
            Self::NotAnArray { key } => write!(f, "Value under key \"{key}\" is not an array"),
        }
    }
}

impl std::error::Error for PipelineError {}
