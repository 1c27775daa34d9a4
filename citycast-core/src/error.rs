use thiserror::Error;

/// Failures of a single search cycle.
///
/// Every variant ends up as the same `Error` view; the distinction only
/// matters for logging.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("request to {service} failed: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} request failed with status {status}: {body}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse {service} JSON: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
