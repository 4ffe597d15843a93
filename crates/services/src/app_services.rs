use std::sync::Arc;

use backend::{Backend, BackendConfig, InMemoryBackend};

use crate::Clock;
use crate::booking_service::BookingService;
use crate::directory_service::DirectoryService;
use crate::error::AppServicesError;
use crate::report_service::{DashboardService, PayoutService};
use crate::school_service::SchoolService;

/// Assembles app-facing services over one backend.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    directory: Arc<DirectoryService>,
    bookings: Arc<BookingService>,
    schools: Arc<SchoolService>,
    payouts: Arc<PayoutService>,
    dashboard: Arc<DashboardService>,
}

impl AppServices {
    #[must_use]
    pub fn new(backend: &Backend, clock: Clock) -> Self {
        Self {
            clock,
            directory: Arc::new(DirectoryService::new(
                Arc::clone(&backend.students),
                Arc::clone(&backend.trainers),
            )),
            bookings: Arc::new(BookingService::new(Arc::clone(&backend.bookings))),
            schools: Arc::new(SchoolService::new(Arc::clone(&backend.schools))),
            payouts: Arc::new(PayoutService::new(Arc::clone(&backend.payouts))),
            dashboard: Arc::new(DashboardService::new(Arc::clone(&backend.stats))),
        }
    }

    /// Build services talking to the REST API.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Api` if the HTTP client cannot be built.
    pub fn http(config: BackendConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let backend = Backend::http(config)?;
        Ok(Self::new(&backend, clock))
    }

    /// Build services over a shared in-memory store.
    #[must_use]
    pub fn in_memory(repo: &InMemoryBackend, clock: Clock) -> Self {
        Self::new(&Backend::from_memory(repo), clock)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn directory(&self) -> Arc<DirectoryService> {
        Arc::clone(&self.directory)
    }

    #[must_use]
    pub fn bookings(&self) -> Arc<BookingService> {
        Arc::clone(&self.bookings)
    }

    #[must_use]
    pub fn schools(&self) -> Arc<SchoolService> {
        Arc::clone(&self.schools)
    }

    #[must_use]
    pub fn payouts(&self) -> Arc<PayoutService> {
        Arc::clone(&self.payouts)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }
}
