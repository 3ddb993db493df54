use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("API request for page {page} failed: {source}")]
    Transport {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("API returned HTTP {status} for page {page}")]
    HttpStatus {
        page: u32,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response body for page {page}: {source}")]
    MalformedPage {
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ReportError {
    pub fn is_config_error(&self) -> bool {
        matches!(self, ReportError::InvalidConfigValue { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::Transport { page, .. } => format!(
                "Could not reach the transmitter API while loading page {}. Check your network connection.",
                page
            ),
            ReportError::HttpStatus { page, status } => format!(
                "The transmitter API refused page {} with status {}.",
                page, status
            ),
            ReportError::MalformedPage { page, .. } => format!(
                "The transmitter API sent an unreadable response for page {}.",
                page
            ),
            ReportError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            2
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
