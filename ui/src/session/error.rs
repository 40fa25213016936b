use api::GenerateError;
use thiserror::Error;

/// A selected file that can't be submitted. The user has to pick another one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("File size exceeds 3MB limit. Please choose a smaller file.")]
    SizeExceeded { size: u64 },

    #[error("Only .txt, .pdf, .docx, and .pptx files are allowed.")]
    UnsupportedType { name: String },
}

/// A submission that didn't produce a deck. Prior session and history are untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Choose a file before generating flashcards.")]
    NoFile,

    #[error("A file is already being processed.")]
    InFlight,

    #[error("The flashcard service is not configured: {0}")]
    Unconfigured(String),

    #[error("{message}")]
    UpstreamFailure { status: u16, message: String },

    #[error("Could not reach the flashcard service: {0}")]
    NetworkFailure(String),

    #[error("Unexpected response from the flashcard service: {0}")]
    ParseFailure(String),
}

impl SubmitError {
    /// Underlying cause for failures that carry one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            SubmitError::Unconfigured(detail)
            | SubmitError::NetworkFailure(detail)
            | SubmitError::ParseFailure(detail) => Some(detail),
            _ => None,
        }
    }
}

impl From<GenerateError> for SubmitError {
    fn from(error: GenerateError) -> Self {
        match error {
            GenerateError::Upstream { status } => SubmitError::UpstreamFailure {
                status,
                message: error.to_string(),
            },
            GenerateError::Network(detail) => SubmitError::NetworkFailure(detail),
            GenerateError::Parse(detail) => SubmitError::ParseFailure(detail),
            GenerateError::Unconfigured(detail) => SubmitError::Unconfigured(detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SizeExceeded,
    UnsupportedType,
    NoFile,
    InFlight,
    Unconfigured,
    UpstreamFailure,
    NetworkFailure,
    ParseFailure,
}

/// Whatever the error banner is currently showing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::Validation(ValidationError::SizeExceeded { .. }) => ErrorKind::SizeExceeded,
            SessionError::Validation(ValidationError::UnsupportedType { .. }) => {
                ErrorKind::UnsupportedType
            }
            SessionError::Submit(SubmitError::NoFile) => ErrorKind::NoFile,
            SessionError::Submit(SubmitError::InFlight) => ErrorKind::InFlight,
            SessionError::Submit(SubmitError::Unconfigured(_)) => ErrorKind::Unconfigured,
            SessionError::Submit(SubmitError::UpstreamFailure { .. }) => ErrorKind::UpstreamFailure,
            SessionError::Submit(SubmitError::NetworkFailure(_)) => ErrorKind::NetworkFailure,
            SessionError::Submit(SubmitError::ParseFailure(_)) => ErrorKind::ParseFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_message_is_surfaced_verbatim() {
        let err = SubmitError::from(GenerateError::Upstream { status: 503 });
        assert_eq!(
            err.to_string(),
            "Failed to upload file/Backend overloaded, please try again later"
        );
        assert!(!err.to_string().contains("503"));
        assert!(matches!(err, SubmitError::UpstreamFailure { status: 503, .. }));
    }

    #[test]
    fn service_errors_map_to_matching_kinds() {
        let network: SessionError = SubmitError::from(GenerateError::Network("dns".into())).into();
        let parse: SessionError = SubmitError::from(GenerateError::Parse("eof".into())).into();
        assert_eq!(network.kind(), ErrorKind::NetworkFailure);
        assert_eq!(
            network.to_string(),
            "Could not reach the flashcard service: dns"
        );
        assert_eq!(parse.kind(), ErrorKind::ParseFailure);
    }

    #[test]
    fn validation_kinds() {
        let size: SessionError = ValidationError::SizeExceeded { size: 1 }.into();
        assert_eq!(size.kind(), ErrorKind::SizeExceeded);
        assert!(size.to_string().contains("3MB"));
    }
}
