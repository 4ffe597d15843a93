#![forbid(unsafe_code)]

pub mod app_services;
pub mod booking_service;
pub mod directory_service;
pub mod error;
pub mod notices;
pub mod report_service;
pub mod school_service;
pub mod sequencer;

pub use drive_core::Clock;

pub use app_services::AppServices;
pub use booking_service::BookingService;
pub use directory_service::DirectoryService;
pub use error::{
    AppServicesError, BookingServiceError, DirectoryServiceError, ReportServiceError,
    SchoolServiceError,
};
pub use notices::{GENERIC_FAILURE, Notice, NoticeKind, ToNotices, notices_for_error};
pub use report_service::{DashboardService, PayoutService};
pub use school_service::{SchoolForm, SchoolService};
pub use sequencer::{RequestSequencer, RequestTicket, SEARCH_DEBOUNCE};
