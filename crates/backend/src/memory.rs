use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use drive_core::model::{
    BookingCreated, BookingDecision, BookingDetail, BookingId, BookingStatus, BookingSummary,
    DashboardStats, ListQuery, NewBooking, Page, PaymentStatus, Payout, School, SchoolId,
    SchoolUpdate, Student, Trainer, TrainerPackage, TrainerUserId,
};

use crate::error::ApiError;
use crate::gateway::{
    BookingGateway, PayoutGateway, SchoolGateway, StatsGateway, StudentGateway, TrainerGateway,
};

#[derive(Default)]
struct MemoryState {
    students: Vec<Student>,
    trainers: Vec<Trainer>,
    packages: HashMap<TrainerUserId, Vec<TrainerPackage>>,
    bookings: Vec<BookingDetail>,
    created: Vec<NewBooking>,
    schools: Vec<School>,
    payouts: Vec<Payout>,
    stats: DashboardStats,
    next_create_failure: Option<ApiError>,
    package_requests: Vec<TrainerUserId>,
}

/// Simple in-memory backend for testing and prototyping.
///
/// Mirrors the REST API's filtering and paging closely enough for view and
/// service tests.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, ApiError> {
        self.state
            .lock()
            .map_err(|e| ApiError::Unavailable(e.to_string()))
    }

    fn with_state(&self, f: impl FnOnce(&mut MemoryState)) {
        if let Ok(mut guard) = self.state.lock() {
            f(&mut guard);
        }
    }

    // Seeding

    pub fn add_student(&self, student: Student) {
        self.with_state(|s| s.students.push(student));
    }

    pub fn add_trainer(&self, trainer: Trainer) {
        self.with_state(|s| s.trainers.push(trainer));
    }

    pub fn add_package(&self, trainer: TrainerUserId, package: TrainerPackage) {
        self.with_state(|s| s.packages.entry(trainer).or_default().push(package));
    }

    pub fn add_booking(&self, booking: BookingDetail) {
        self.with_state(|s| s.bookings.push(booking));
    }

    pub fn add_school(&self, school: School) {
        self.with_state(|s| s.schools.push(school));
    }

    pub fn add_payout(&self, payout: Payout) {
        self.with_state(|s| s.payouts.push(payout));
    }

    pub fn set_stats(&self, stats: DashboardStats) {
        self.with_state(|s| s.stats = stats);
    }

    /// Make the next `create_booking` call fail with `error`.
    pub fn fail_next_create(&self, error: ApiError) {
        self.with_state(|s| s.next_create_failure = Some(error));
    }

    // Inspection

    /// Request bodies accepted by `create_booking`, oldest first.
    #[must_use]
    pub fn created_bookings(&self) -> Vec<NewBooking> {
        self.state
            .lock()
            .map(|s| s.created.clone())
            .unwrap_or_default()
    }

    /// Trainers whose package list was requested, in call order.
    #[must_use]
    pub fn package_requests(&self) -> Vec<TrainerUserId> {
        self.state
            .lock()
            .map(|s| s.package_requests.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn booking_status(&self, id: BookingId) -> Option<BookingStatus> {
        let guard = self.state.lock().ok()?;
        guard
            .bookings
            .iter()
            .find(|b| b.summary.id == id)
            .map(|b| b.summary.status.clone())
    }
}

#[async_trait]
impl StudentGateway for InMemoryBackend {
    async fn list_students(&self, query: &ListQuery) -> Result<Page<Student>, ApiError> {
        let guard = self.lock()?;
        let matching: Vec<Student> = guard
            .students
            .iter()
            .filter(|s| s.matches_search(&query.search))
            .cloned()
            .collect();
        Ok(query.paginate(&matching))
    }
}

#[async_trait]
impl TrainerGateway for InMemoryBackend {
    async fn list_trainers(&self, query: &ListQuery) -> Result<Page<Trainer>, ApiError> {
        let guard = self.lock()?;
        let active_only = query.filters.get("is_active").map(String::as_str) == Some("1");
        let matching: Vec<Trainer> = guard
            .trainers
            .iter()
            .filter(|t| t.matches_search(&query.search))
            .filter(|t| !active_only || t.is_active)
            .cloned()
            .collect();
        Ok(query.paginate(&matching))
    }

    async fn list_trainer_packages(
        &self,
        trainer: TrainerUserId,
        query: &ListQuery,
    ) -> Result<Page<TrainerPackage>, ApiError> {
        let mut guard = self.lock()?;
        guard.package_requests.push(trainer);
        let packages = guard.packages.get(&trainer).cloned().unwrap_or_default();
        Ok(query.paginate(&packages))
    }
}

#[async_trait]
impl BookingGateway for InMemoryBackend {
    async fn list_bookings(&self, query: &ListQuery) -> Result<Page<BookingSummary>, ApiError> {
        let guard = self.lock()?;
        let needle = query.search.trim().to_lowercase();
        let status = query.filters.get("status").map(|s| BookingStatus::parse(s));
        let payment = query
            .filters
            .get("payment_status")
            .map(|s| PaymentStatus::parse(s));
        let matching: Vec<BookingSummary> = guard
            .bookings
            .iter()
            .map(|b| &b.summary)
            .filter(|b| {
                needle.is_empty()
                    || b.student_name.to_lowercase().contains(&needle)
                    || b.trainer_name.to_lowercase().contains(&needle)
                    || b
                        .booking_code
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&needle))
            })
            .filter(|b| status.as_ref().is_none_or(|s| &b.status == s))
            .filter(|b| payment.as_ref().is_none_or(|p| &b.payment_status == p))
            .cloned()
            .collect();
        Ok(query.paginate(&matching))
    }

    async fn get_booking(&self, id: BookingId) -> Result<BookingDetail, ApiError> {
        let guard = self.lock()?;
        guard
            .bookings
            .iter()
            .find(|b| b.summary.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn create_booking(&self, booking: &NewBooking) -> Result<BookingCreated, ApiError> {
        let mut guard = self.lock()?;
        if let Some(error) = guard.next_create_failure.take() {
            return Err(error);
        }

        let student = guard
            .students
            .iter()
            .find(|s| s.id == booking.student_id)
            .map(|s| s.name.clone());
        let trainer = guard
            .trainers
            .iter()
            .find(|t| t.user_id == booking.trainer_id)
            .map(|t| t.name.clone());
        let mut missing = Vec::new();
        if student.is_none() {
            missing.push(("student_id", vec!["The selected student id is invalid."]));
        }
        if trainer.is_none() {
            missing.push(("trainer_id", vec!["The selected trainer id is invalid."]));
        }
        if !missing.is_empty() {
            return Err(ApiError::validation(missing));
        }

        let next_id = guard
            .bookings
            .iter()
            .map(|b| b.summary.id.value())
            .max()
            .unwrap_or(0)
            + 1;
        let detail = BookingDetail {
            summary: BookingSummary {
                id: BookingId::new(next_id),
                booking_code: Some(format!("BK-{next_id:05}")),
                student_name: student.unwrap_or_default(),
                trainer_name: trainer.unwrap_or_default(),
                package_name: None,
                status: BookingStatus::Pending,
                payment_status: PaymentStatus::Pending,
                total: None,
                created_at: None,
            },
            sessions: booking.sessions.clone(),
            pickup_address: None,
        };
        guard.bookings.push(detail);
        guard.created.push(booking.clone());

        Ok(BookingCreated {
            status: "success".to_owned(),
            message: Some("Booking created successfully".to_owned()),
        })
    }

    async fn decide_booking(
        &self,
        id: BookingId,
        decision: BookingDecision,
    ) -> Result<(), ApiError> {
        let mut guard = self.lock()?;
        let booking = guard
            .bookings
            .iter_mut()
            .find(|b| b.summary.id == id)
            .ok_or(ApiError::NotFound)?;
        if !booking.summary.status.is_decidable() {
            return Err(ApiError::Message(format!(
                "Booking is already {}",
                booking.summary.status.as_str().to_lowercase()
            )));
        }
        booking.summary.status = decision.resulting_status();
        Ok(())
    }
}

#[async_trait]
impl SchoolGateway for InMemoryBackend {
    async fn list_schools(&self, query: &ListQuery) -> Result<Page<School>, ApiError> {
        let guard = self.lock()?;
        let needle = query.search.trim().to_lowercase();
        let matching: Vec<School> = guard
            .schools
            .iter()
            .filter(|s| needle.is_empty() || s.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(query.paginate(&matching))
    }

    async fn get_school(&self, id: SchoolId) -> Result<School, ApiError> {
        let guard = self.lock()?;
        guard
            .schools
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn update_school(
        &self,
        id: SchoolId,
        update: &SchoolUpdate,
    ) -> Result<School, ApiError> {
        let mut guard = self.lock()?;
        let school = guard
            .schools
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(ApiError::NotFound)?;
        update.apply_to(school);
        Ok(school.clone())
    }
}

#[async_trait]
impl PayoutGateway for InMemoryBackend {
    async fn list_payouts(&self, query: &ListQuery) -> Result<Page<Payout>, ApiError> {
        let guard = self.lock()?;
        let status = query.filters.get("status").map(|s| PaymentStatus::parse(s));
        let matching: Vec<Payout> = guard
            .payouts
            .iter()
            .filter(|p| status.as_ref().is_none_or(|s| &p.status == s))
            .cloned()
            .collect();
        Ok(query.paginate(&matching))
    }
}

#[async_trait]
impl StatsGateway for InMemoryBackend {
    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        Ok(self.lock()?.stats.clone())
    }
}
