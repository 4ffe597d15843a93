use async_trait::async_trait;
use drive_core::model::{
    DashboardStats, ListQuery, Page, Payout, School, SchoolId, SchoolUpdate,
};
use reqwest::multipart::Form;

use super::{HttpBackend, PageBody};
use crate::error::ApiError;
use crate::gateway::{PayoutGateway, SchoolGateway, StatsGateway};

#[async_trait]
impl SchoolGateway for HttpBackend {
    async fn list_schools(&self, query: &ListQuery) -> Result<Page<School>, ApiError> {
        let body: PageBody<School> = self.get_json("schools", &query.to_query_pairs()).await?;
        Ok(body.into_page(query))
    }

    async fn get_school(&self, id: SchoolId) -> Result<School, ApiError> {
        self.get_json(&format!("schools/{id}"), &[]).await
    }

    async fn update_school(
        &self,
        id: SchoolId,
        update: &SchoolUpdate,
    ) -> Result<School, ApiError> {
        let form = update
            .to_form_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));
        self.post_form(&format!("schools/{id}"), form).await
    }
}

#[async_trait]
impl PayoutGateway for HttpBackend {
    async fn list_payouts(&self, query: &ListQuery) -> Result<Page<Payout>, ApiError> {
        let body: PageBody<Payout> = self.get_json("payouts", &query.to_query_pairs()).await?;
        Ok(body.into_page(query))
    }
}

#[async_trait]
impl StatsGateway for HttpBackend {
    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("dashboard/stats", &[]).await
    }
}
