use crate::AnswerError;

/// Error type for survey operations.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// User interrupted the survey (Ctrl+C).
    #[error("interrupt")]
    Interrupted,

    /// A select prompt was started without options.
    #[error("please provide options to select from")]
    NoOptions,

    /// An ask option rejected its configuration.
    #[error("Invalid ask option: {0}")]
    InvalidOption(String),

    /// The answer could not be written into the sink.
    #[error(transparent)]
    Answer(#[from] AnswerError),

    /// Reading keys or painting failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure.
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl SurveyError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents a user interrupt.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(SurveyError::Interrupted.to_string(), "interrupt");
        assert_eq!(
            SurveyError::NoOptions.to_string(),
            "please provide options to select from"
        );
        let err = SurveyError::from(AnswerError::UnknownField("nope".into()));
        assert_eq!(
            err.to_string(),
            "No field or key named 'nope' to receive the answer"
        );
    }

    #[test]
    fn interrupt_detection() {
        assert!(SurveyError::Interrupted.is_interrupted());
        assert!(!SurveyError::NoOptions.is_interrupted());
    }
}
