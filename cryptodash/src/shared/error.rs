use thiserror::Error;

/// All failures of the market data fetch.
///
/// Every variant is a fetch failure: the feed logs it and the dashboard keeps
/// its empty initial state.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FetchError {
    #[error("invalid markets endpoint url: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("HTTP error status: {0}")]
    Status(u16),

    #[error("failed to decode markets payload: {0}")]
    Decode(String),
}

impl FetchError {
    /// Determine if the failure happened before a response was received.
    #[allow(clippy::match_like_matches_macro)]
    pub fn is_transport(&self) -> bool {
        match self {
            FetchError::Http(_) => true,
            _ => false,
        }
    }
}

impl From<url::ParseError> for FetchError {
    fn from(value: url::ParseError) -> Self {
        Self::InvalidUrl(value.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_is_transport() {
        struct TestCase {
            input: FetchError,
            expected: bool,
        }

        let tests = vec![
            TestCase {
                // TC0: connection level failure
                input: FetchError::Http("connection refused".to_string()),
                expected: true,
            },
            TestCase {
                // TC1: server answered with non-2xx
                input: FetchError::Status(429),
                expected: false,
            },
            TestCase {
                // TC2: body was not a list of entries
                input: FetchError::from(serde_json::from_str::<Vec<u8>>("{}").unwrap_err()),
                expected: false,
            },
            TestCase {
                // TC3: base url could not be parsed
                input: FetchError::from(url::Url::parse("not a url").unwrap_err()),
                expected: false,
            },
        ];

        for (index, test) in tests.into_iter().enumerate() {
            let actual = test.input.is_transport();
            assert_eq!(actual, test.expected, "TC{} failed", index);
        }
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::Status(503).to_string(), "HTTP error status: 503");
    }
}
