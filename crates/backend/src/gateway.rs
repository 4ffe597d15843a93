use std::sync::Arc;

use async_trait::async_trait;
use drive_core::model::{
    BookingCreated, BookingDecision, BookingDetail, BookingId, BookingSummary, DashboardStats,
    ListQuery, NewBooking, Page, Payout, School, SchoolId, SchoolUpdate, Student, Trainer,
    TrainerPackage, TrainerUserId,
};

use crate::error::ApiError;
use crate::http::{BackendConfig, HttpBackend};
use crate::memory::InMemoryBackend;

/// Read access to student accounts.
#[async_trait]
pub trait StudentGateway: Send + Sync {
    /// Fetch one page of students matching the query.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the backend call fails.
    async fn list_students(&self, query: &ListQuery) -> Result<Page<Student>, ApiError>;
}

#[async_trait]
pub trait TrainerGateway: Send + Sync {
    /// Fetch one page of trainers matching the query.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the backend call fails.
    async fn list_trainers(&self, query: &ListQuery) -> Result<Page<Trainer>, ApiError>;

    /// Fetch the packages a trainer offers.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the backend call fails.
    async fn list_trainer_packages(
        &self,
        trainer: TrainerUserId,
        query: &ListQuery,
    ) -> Result<Page<TrainerPackage>, ApiError>;
}

#[async_trait]
pub trait BookingGateway: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the backend call fails.
    async fn list_bookings(&self, query: &ListQuery) -> Result<Page<BookingSummary>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id, or other backend errors.
    async fn get_booking(&self, id: BookingId) -> Result<BookingDetail, ApiError>;

    /// Submit a new booking.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` when the backend rejects fields, or
    /// other backend errors.
    async fn create_booking(&self, booking: &NewBooking) -> Result<BookingCreated, ApiError>;

    /// Accept or reject a pending booking.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the backend call fails.
    async fn decide_booking(&self, id: BookingId, decision: BookingDecision)
    -> Result<(), ApiError>;
}

#[async_trait]
pub trait SchoolGateway: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the backend call fails.
    async fn list_schools(&self, query: &ListQuery) -> Result<Page<School>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id, or other backend errors.
    async fn get_school(&self, id: SchoolId) -> Result<School, ApiError>;

    /// Persist edited school fields and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the backend call fails.
    async fn update_school(&self, id: SchoolId, update: &SchoolUpdate)
    -> Result<School, ApiError>;
}

#[async_trait]
pub trait PayoutGateway: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the backend call fails.
    async fn list_payouts(&self, query: &ListQuery) -> Result<Page<Payout>, ApiError>;
}

#[async_trait]
pub trait StatsGateway: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the backend call fails.
    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError>;
}

/// Aggregates the gateways behind trait objects so the HTTP backend can be
/// swapped for the in-memory one in tests.
#[derive(Clone)]
pub struct Backend {
    pub students: Arc<dyn StudentGateway>,
    pub trainers: Arc<dyn TrainerGateway>,
    pub bookings: Arc<dyn BookingGateway>,
    pub schools: Arc<dyn SchoolGateway>,
    pub payouts: Arc<dyn PayoutGateway>,
    pub stats: Arc<dyn StatsGateway>,
}

impl Backend {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_memory(&InMemoryBackend::new())
    }

    /// Share one in-memory store across every gateway.
    #[must_use]
    pub fn from_memory(repo: &InMemoryBackend) -> Self {
        Self {
            students: Arc::new(repo.clone()),
            trainers: Arc::new(repo.clone()),
            bookings: Arc::new(repo.clone()),
            schools: Arc::new(repo.clone()),
            payouts: Arc::new(repo.clone()),
            stats: Arc::new(repo.clone()),
        }
    }

    /// Build a `Backend` talking to the REST API.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the HTTP client cannot be constructed.
    pub fn http(config: BackendConfig) -> Result<Self, ApiError> {
        let client = HttpBackend::new(config)?;
        Ok(Self {
            students: Arc::new(client.clone()),
            trainers: Arc::new(client.clone()),
            bookings: Arc::new(client.clone()),
            schools: Arc::new(client.clone()),
            payouts: Arc::new(client.clone()),
            stats: Arc::new(client),
        })
    }
}
