//! Localized banner text. The `Display` impls on the error types stay English
//! for logs; what the user reads comes from the Fluent bundles.

use crate::t;

use super::{ErrorKind, Notice, SessionError};

pub fn error_text(err: &SessionError) -> String {
    let detail = match err {
        SessionError::Submit(submit) => submit.detail().unwrap_or_default().to_string(),
        SessionError::Validation(_) => String::new(),
    };

    match err.kind() {
        ErrorKind::SizeExceeded => t!("error-size-exceeded"),
        ErrorKind::UnsupportedType => t!("error-unsupported-type"),
        ErrorKind::NoFile => t!("error-no-file"),
        ErrorKind::InFlight => t!("error-in-flight"),
        ErrorKind::Unconfigured => t!("error-unconfigured", detail = detail),
        ErrorKind::UpstreamFailure => t!("error-upstream"),
        ErrorKind::NetworkFailure => t!("error-network", detail = detail),
        ErrorKind::ParseFailure => t!("error-parse", detail = detail),
    }
}

/// Extra line under validation errors.
pub fn error_hint(kind: ErrorKind) -> Option<String> {
    match kind {
        ErrorKind::SizeExceeded => Some(t!("error-hint-size")),
        ErrorKind::UnsupportedType => Some(t!("error-hint-types")),
        _ => None,
    }
}

pub fn notice_text(notice: &Notice) -> String {
    match notice {
        Notice::Generated(message) => message.clone(),
        Notice::HistoryLoaded { date } => t!("notice-history-loaded", date = date.clone()),
    }
}
