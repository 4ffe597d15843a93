use async_trait::async_trait;
use drive_core::model::{
    BookingCreated, BookingDecision, BookingDetail, BookingId, BookingSummary, ListQuery,
    NewBooking, Page,
};
use tracing::info;

use super::{HttpBackend, PageBody};
use crate::error::ApiError;
use crate::gateway::BookingGateway;

#[async_trait]
impl BookingGateway for HttpBackend {
    async fn list_bookings(&self, query: &ListQuery) -> Result<Page<BookingSummary>, ApiError> {
        let body: PageBody<BookingSummary> =
            self.get_json("bookings", &query.to_query_pairs()).await?;
        Ok(body.into_page(query))
    }

    async fn get_booking(&self, id: BookingId) -> Result<BookingDetail, ApiError> {
        self.get_json(&format!("bookings/{id}"), &[]).await
    }

    async fn create_booking(&self, booking: &NewBooking) -> Result<BookingCreated, ApiError> {
        let created: BookingCreated = self.post_json_top_level("bookings", booking).await?;
        info!(
            student = %booking.student_id,
            trainer = %booking.trainer_id,
            sessions = booking.sessions.len(),
            "booking created"
        );
        Ok(created)
    }

    async fn decide_booking(
        &self,
        id: BookingId,
        decision: BookingDecision,
    ) -> Result<(), ApiError> {
        self.post_empty(&format!("bookings/{id}/{}", decision.path_segment()))
            .await
    }
}
