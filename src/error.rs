use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadyQueueError {
    #[error("Coordination store error at {path}: {message}")]
    Store { path: String, message: String },

    #[error("Malformed counter value {value:?} at {path}")]
    MalformedCounter { path: String, value: String },

    #[error("Invalid job configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Misfire tracker error for job {job_name}: {message}")]
    Misfire { job_name: String, message: String },
}

impl ReadyQueueError {
    /// Build a store error for `path` from any displayable cause.
    pub fn store(path: impl Into<String>, message: impl ToString) -> Self {
        ReadyQueueError::Store {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReadyQueueError>;
