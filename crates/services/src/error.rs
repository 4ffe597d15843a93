//! Shared error types for the services crate.

use thiserror::Error;

use backend::ApiError;
use drive_core::WizardError;
use drive_core::model::SchoolError;

/// Errors emitted by `DirectoryService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DirectoryServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `BookingService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BookingServiceError {
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The backend answered without an error status but did not accept the booking.
    #[error("booking was not accepted: {0}")]
    Rejected(String),
}

/// Errors emitted by `SchoolService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SchoolServiceError {
    #[error(transparent)]
    School(#[from] SchoolError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `PayoutService` and `DashboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Api(#[from] ApiError),
}
