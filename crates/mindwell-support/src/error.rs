use thiserror::Error;

use crate::counseling::SessionType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SupportError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("message is empty")]
    EmptyMessage,

    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("counselor not found: {0}")]
    CounselorNotFound(String),

    #[error("no sessions on {0}")]
    DateUnavailable(jiff::civil::Date),

    #[error("unknown time slot: {0}")]
    UnknownSlot(String),

    #[error("{counselor} does not offer {} sessions", .session_type.label())]
    SessionTypeUnavailable {
        counselor: String,
        session_type: SessionType,
    },
}
