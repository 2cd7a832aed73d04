use thiserror::Error;

/// Failures of the outbound blog search call. All of them end in demo data.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("네이버 API 오류: {0}")]
    Status(u16),

    #[error("malformed search response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_names_the_code() {
        assert_eq!(SearchError::Status(401).to_string(), "네이버 API 오류: 401");
    }

    #[test]
    fn decode_error_wraps_serde() {
        let err: SearchError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("malformed search response"));
    }
}
