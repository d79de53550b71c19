use std::error::Error as StdError;

/// Errors returned by the [`Client`](crate::Client) operations.
///
/// The three kinds are never folded into one another: a bad date never
/// reaches the network, and a response body that fails to decode is reported
/// separately from a request that never completed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller input was rejected before any request was issued.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync + 'static>),

    /// The response body is not JSON of the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Transport(err.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_keeps_source_message() {
        let err: Error = anyhow::anyhow!("connection refused").into();
        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(err.to_string(), "request failed: connection refused");
        assert_eq!(err.source().unwrap().to_string(), "connection refused");
    }

    #[test]
    fn decode_error_is_distinct() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Decode(_)));
    }
}
