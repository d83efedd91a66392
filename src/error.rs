use thiserror::Error;

/// Faults that abort an extraction call.
///
/// A page that simply has no recognisable price is not an error; it yields
/// an `ExtractionResult` with both prices absent.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("{0}")]
    Network(String),
}

impl From<reqwest::Error> for ExtractError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ExtractError::Http {
                status: status.as_u16(),
            },
            None => ExtractError::Network(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_fault_message() {
        let err = ExtractError::Http { status: 404 };
        assert_eq!(err.to_string(), "HTTP 404");
    }

    #[test]
    fn test_network_fault_passes_message_through() {
        let err = ExtractError::Network("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");
    }
}
