//! Turning failures into user-facing notifications.

use backend::ApiError;
use drive_core::WizardError;

use crate::error::{
    BookingServiceError, DirectoryServiceError, ReportServiceError, SchoolServiceError,
};

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// One toast shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Fan an API failure out into notices.
///
/// Validation errors yield one notice per message, field by field, in the
/// order the backend sent them. A plain message yields exactly one notice.
/// Anything else collapses into the generic notice.
#[must_use]
pub fn notices_for_error(error: &ApiError) -> Vec<Notice> {
    match error {
        ApiError::Validation(fields) if !fields.is_empty() => {
            fields.messages().map(Notice::error).collect()
        }
        ApiError::Message(message) if !message.trim().is_empty() => {
            vec![Notice::error(message.clone())]
        }
        _ => vec![Notice::error(GENERIC_FAILURE)],
    }
}

/// Errors that can be shown to the user as notices.
pub trait ToNotices {
    fn to_notices(&self) -> Vec<Notice>;
}

impl ToNotices for ApiError {
    fn to_notices(&self) -> Vec<Notice> {
        notices_for_error(self)
    }
}

impl ToNotices for BookingServiceError {
    fn to_notices(&self) -> Vec<Notice> {
        match self {
            BookingServiceError::Api(err) => notices_for_error(err),
            BookingServiceError::Wizard(err) => err.to_notices(),
            BookingServiceError::Rejected(message) => vec![Notice::error(message.clone())],
        }
    }
}

impl ToNotices for WizardError {
    fn to_notices(&self) -> Vec<Notice> {
        vec![Notice::error(capitalize(&self.to_string()))]
    }
}

impl ToNotices for SchoolServiceError {
    fn to_notices(&self) -> Vec<Notice> {
        match self {
            SchoolServiceError::Api(err) => notices_for_error(err),
            SchoolServiceError::School(err) => vec![Notice::error(capitalize(&err.to_string()))],
        }
    }
}

impl ToNotices for DirectoryServiceError {
    fn to_notices(&self) -> Vec<Notice> {
        match self {
            DirectoryServiceError::Api(err) => notices_for_error(err),
        }
    }
}

impl ToNotices for ReportServiceError {
    fn to_notices(&self) -> Vec<Notice> {
        match self {
            ReportServiceError::Api(err) => notices_for_error(err),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
