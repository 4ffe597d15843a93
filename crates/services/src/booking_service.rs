use std::sync::Arc;

use backend::BookingGateway;
use drive_core::BookingWizard;
use drive_core::model::{
    BookingCreated, BookingDecision, BookingDetail, BookingId, BookingSummary, ListQuery, Page,
};
use tracing::{debug, info, warn};

use crate::error::BookingServiceError;

/// Orchestrates booking creation and review.
#[derive(Clone)]
pub struct BookingService {
    bookings: Arc<dyn BookingGateway>,
}

impl BookingService {
    #[must_use]
    pub fn new(bookings: Arc<dyn BookingGateway>) -> Self {
        Self { bookings }
    }

    /// # Errors
    ///
    /// Returns `BookingServiceError::Api` if the backend call fails.
    pub async fn list_bookings(
        &self,
        query: &ListQuery,
    ) -> Result<Page<BookingSummary>, BookingServiceError> {
        debug!(page = query.page, filters = ?query.filters, "listing bookings");
        Ok(self.bookings.list_bookings(query).await?)
    }

    /// # Errors
    ///
    /// Returns `BookingServiceError::Api` if the backend call fails.
    pub async fn get_booking(&self, id: BookingId) -> Result<BookingDetail, BookingServiceError> {
        Ok(self.bookings.get_booking(id).await?)
    }

    /// Build the request from the wizard and submit it.
    ///
    /// The wizard is left untouched so a failed submission can be corrected
    /// and retried.
    ///
    /// # Errors
    ///
    /// Returns `BookingServiceError::Wizard` when a selection is missing or a
    /// time is malformed, `BookingServiceError::Api` when the backend rejects
    /// the request, and `BookingServiceError::Rejected` when it answers with a
    /// non-success status in the body.
    pub async fn submit(
        &self,
        wizard: &BookingWizard,
    ) -> Result<BookingCreated, BookingServiceError> {
        let request = wizard.build_request()?;
        debug!(
            student = %request.student_id,
            trainer = %request.trainer_id,
            sessions = request.sessions.len(),
            "submitting booking"
        );
        let created = match self.bookings.create_booking(&request).await {
            Ok(created) => created,
            Err(err) => {
                warn!(error = %err, "booking submission failed");
                return Err(err.into());
            }
        };
        if !created.is_success() {
            let message = created
                .message
                .unwrap_or_else(|| format!("Booking returned status {}", created.status));
            return Err(BookingServiceError::Rejected(message));
        }
        info!(student = %request.student_id, "booking submitted");
        Ok(created)
    }

    /// Accept or reject a booking.
    ///
    /// # Errors
    ///
    /// Returns `BookingServiceError::Api` if the backend call fails.
    pub async fn decide(
        &self,
        id: BookingId,
        decision: BookingDecision,
    ) -> Result<(), BookingServiceError> {
        self.bookings.decide_booking(id, decision).await?;
        info!(%id, ?decision, "booking decided");
        Ok(())
    }
}
