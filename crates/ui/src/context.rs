use std::sync::Arc;

use drive_core::Clock;
use drive_core::model::Role;
use services::{
    AppServices, BookingService, DashboardService, DirectoryService, PayoutService, SchoolService,
};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    /// Role of the signed-in user; fixed for the whole session.
    fn role(&self) -> Role;
    fn page_size(&self) -> u32;
    fn services(&self) -> AppServices;
}

#[derive(Clone)]
pub struct AppContext {
    role: Role,
    page_size: u32,
    services: AppServices,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            role: app.role(),
            page_size: app.page_size().max(1),
            services: app.services(),
        }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.services.clock()
    }

    #[must_use]
    pub fn directory(&self) -> Arc<DirectoryService> {
        self.services.directory()
    }

    #[must_use]
    pub fn bookings(&self) -> Arc<BookingService> {
        self.services.bookings()
    }

    #[must_use]
    pub fn schools(&self) -> Arc<SchoolService> {
        self.services.schools()
    }

    #[must_use]
    pub fn payouts(&self) -> Arc<PayoutService> {
        self.services.payouts()
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
