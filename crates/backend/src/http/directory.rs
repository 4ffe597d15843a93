use async_trait::async_trait;
use drive_core::model::{ListQuery, Page, Student, Trainer, TrainerPackage, TrainerUserId};

use super::{HttpBackend, PageBody};
use crate::error::ApiError;
use crate::gateway::{StudentGateway, TrainerGateway};

#[async_trait]
impl StudentGateway for HttpBackend {
    async fn list_students(&self, query: &ListQuery) -> Result<Page<Student>, ApiError> {
        let body: PageBody<Student> = self.get_json("students", &query.to_query_pairs()).await?;
        Ok(body.into_page(query))
    }
}

#[async_trait]
impl TrainerGateway for HttpBackend {
    async fn list_trainers(&self, query: &ListQuery) -> Result<Page<Trainer>, ApiError> {
        let body: PageBody<Trainer> = self.get_json("trainers", &query.to_query_pairs()).await?;
        Ok(body.into_page(query))
    }

    async fn list_trainer_packages(
        &self,
        trainer: TrainerUserId,
        query: &ListQuery,
    ) -> Result<Page<TrainerPackage>, ApiError> {
        let path = format!("trainers/{trainer}/packages");
        let body: PageBody<TrainerPackage> =
            self.get_json(&path, &query.to_query_pairs()).await?;
        Ok(body.into_page(query))
    }
}
