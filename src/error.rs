use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Inventory fetch failed{}: {reason}", status_suffix(.status))]
    Upstream { status: Option<u16>, reason: String },

    #[error("Unknown category id: {0}")]
    UnknownCategory(u8),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({s})")).unwrap_or_default()
}

impl MenuError {
    /// Upstream failure without a status code.
    pub fn upstream(reason: impl Into<String>) -> Self {
        MenuError::Upstream {
            status: None,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
