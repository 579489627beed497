//! Analyzer errors

use thiserror::Error;

/// Errors from the log analysis pipeline
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The log file is missing
    #[error("log file {0} not found")]
    LogFileMissing(String),

    /// The log file exists but holds no content
    #[error("log file is empty")]
    LogFileEmpty,

    /// The API key environment variable is not set
    #[error("OPENAI_API_KEY environment variable is not set")]
    MissingApiKey,

    /// The model API call failed
    #[error("model request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The model API answered with a non-success status
    #[error("model API returned {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// The model response carried no choices
    #[error("model response contained no completion")]
    EmptyCompletion,

    /// Filesystem error reading logs or writing the report
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_log_file_message_names_the_path() {
        let err = AnalyzerError::LogFileMissing("logs/application.log".to_string());
        assert!(err.to_string().contains("logs/application.log"));
    }

    #[test]
    fn api_error_message_carries_status() {
        let err = AnalyzerError::Api {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert!(err.to_string().contains("429"));
    }
}
