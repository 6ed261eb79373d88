use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error on {endpoint}: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: gloo_net::Error,
    },
    #[error("HTTP error! status: {status} ({endpoint})")]
    Status { endpoint: String, status: u16 },
    #[error("could not decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl ApiError {
    pub fn status(endpoint: &str, status: u16) -> Self {
        ApiError::Status {
            endpoint: endpoint.to_string(),
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please complete all fields.")]
    Incomplete,
    #[error("Enter a valid amount.")]
    InvalidAmount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reads_like_the_console_message() {
        let err = ApiError::status("/budgets/2", 500);
        assert_eq!(err.to_string(), "HTTP error! status: 500 (/budgets/2)");
    }
}
