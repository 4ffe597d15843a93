use backend::ApiError;
use dioxus::prelude::*;
use services::{
    BookingServiceError, DirectoryServiceError, ReportServiceError, SchoolServiceError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    NotFound,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::NotFound => "This record does not exist.",
        }
    }
}

impl From<&ApiError> for ViewError {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::NotFound => ViewError::NotFound,
            _ => ViewError::Unknown,
        }
    }
}

impl From<BookingServiceError> for ViewError {
    fn from(err: BookingServiceError) -> Self {
        match &err {
            BookingServiceError::Api(api) => api.into(),
            _ => ViewError::Unknown,
        }
    }
}

impl From<SchoolServiceError> for ViewError {
    fn from(err: SchoolServiceError) -> Self {
        match &err {
            SchoolServiceError::Api(api) => api.into(),
            _ => ViewError::Unknown,
        }
    }
}

impl From<DirectoryServiceError> for ViewError {
    fn from(err: DirectoryServiceError) -> Self {
        match &err {
            DirectoryServiceError::Api(api) => api.into(),
            _ => ViewError::Unknown,
        }
    }
}

impl From<ReportServiceError> for ViewError {
    fn from(err: ReportServiceError) -> Self {
        match &err {
            ReportServiceError::Api(api) => api.into(),
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
