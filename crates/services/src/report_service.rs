use std::sync::Arc;

use backend::{PayoutGateway, StatsGateway};
use drive_core::model::{DashboardStats, ListQuery, Page, Payout};

use crate::error::ReportServiceError;

/// Payout listings for the finance screens.
#[derive(Clone)]
pub struct PayoutService {
    payouts: Arc<dyn PayoutGateway>,
}

impl PayoutService {
    #[must_use]
    pub fn new(payouts: Arc<dyn PayoutGateway>) -> Self {
        Self { payouts }
    }

    /// # Errors
    ///
    /// Returns `ReportServiceError::Api` if the backend call fails.
    pub async fn list_payouts(&self, query: &ListQuery) -> Result<Page<Payout>, ReportServiceError> {
        Ok(self.payouts.list_payouts(query).await?)
    }
}

/// Aggregated counters for the dashboard.
#[derive(Clone)]
pub struct DashboardService {
    stats: Arc<dyn StatsGateway>,
}

impl DashboardService {
    #[must_use]
    pub fn new(stats: Arc<dyn StatsGateway>) -> Self {
        Self { stats }
    }

    /// # Errors
    ///
    /// Returns `ReportServiceError::Api` if the backend call fails.
    pub async fn stats(&self) -> Result<DashboardStats, ReportServiceError> {
        Ok(self.stats.dashboard_stats().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::InMemoryBackend;
    use drive_core::model::{Amount, PaymentStatus, PayoutId};

    #[tokio::test]
    async fn payouts_filter_by_status() {
        let repo = InMemoryBackend::new();
        for (id, status) in [(1, PaymentStatus::Paid), (2, PaymentStatus::Pending)] {
            repo.add_payout(Payout {
                id: PayoutId::new(id),
                trainer_name: "Sami".into(),
                amount: Amount::new(120.0),
                status,
                requested_at: None,
            });
        }
        let service = PayoutService::new(Arc::new(repo));
        let page = service
            .list_payouts(&ListQuery::default().with_filter("status", "PENDING"))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, PayoutId::new(2));
    }

    #[tokio::test]
    async fn stats_come_back_as_seeded() {
        let repo = InMemoryBackend::new();
        repo.set_stats(DashboardStats {
            total_bookings: 12,
            ..DashboardStats::default()
        });
        let stats = DashboardService::new(Arc::new(repo)).stats().await.unwrap();
        assert_eq!(stats.total_bookings, 12);
    }
}
