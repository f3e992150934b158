//! Client error types
//!
//! Every failure of a remote call is one of three transport failures:
//! the request never completed, the server answered with a non-2xx status,
//! or the body could not be decoded.

/// Errors returned by [`crate::EventsClient`] implementations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network unreachable, connection reset, timeout
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("{method} {url} returned {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// The response body was not the expected JSON
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The configured base URL cannot be joined with an API path
    #[error("invalid API url: {0}")]
    InvalidUrl(String),

    /// Failure reported by a non-HTTP client (test doubles, alternate backends)
    #[error("{0}")]
    Other(String),
}

/// Result alias for client calls
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ClientError::Status {
            method: "DELETE",
            url: "http://localhost:3000/api/events/4".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "DELETE http://localhost:3000/api/events/4 returned 404"
        );
    }
}
