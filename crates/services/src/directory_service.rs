use std::sync::Arc;

use backend::{StudentGateway, TrainerGateway};
use drive_core::model::{ListQuery, Page, Student, Trainer, TrainerPackage, TrainerUserId};
use tracing::{debug, warn};

use crate::error::DirectoryServiceError;

/// Read-only access to the people and packages a booking is assembled from.
#[derive(Clone)]
pub struct DirectoryService {
    students: Arc<dyn StudentGateway>,
    trainers: Arc<dyn TrainerGateway>,
}

impl DirectoryService {
    #[must_use]
    pub fn new(students: Arc<dyn StudentGateway>, trainers: Arc<dyn TrainerGateway>) -> Self {
        Self { students, trainers }
    }

    /// # Errors
    ///
    /// Returns `DirectoryServiceError::Api` if the backend call fails.
    pub async fn list_students(
        &self,
        query: &ListQuery,
    ) -> Result<Page<Student>, DirectoryServiceError> {
        debug!(search = %query.search, page = query.page, "listing students");
        self.students.list_students(query).await.map_err(|err| {
            warn!(error = %err, "student list failed");
            err.into()
        })
    }

    /// # Errors
    ///
    /// Returns `DirectoryServiceError::Api` if the backend call fails.
    pub async fn list_trainers(
        &self,
        query: &ListQuery,
    ) -> Result<Page<Trainer>, DirectoryServiceError> {
        debug!(search = %query.search, page = query.page, "listing trainers");
        self.trainers.list_trainers(query).await.map_err(|err| {
            warn!(error = %err, "trainer list failed");
            err.into()
        })
    }

    /// Packages offered by one trainer.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryServiceError::Api` if the backend call fails.
    pub async fn list_trainer_packages(
        &self,
        trainer: TrainerUserId,
        query: &ListQuery,
    ) -> Result<Page<TrainerPackage>, DirectoryServiceError> {
        debug!(%trainer, "listing trainer packages");
        let page = self.trainers.list_trainer_packages(trainer, query).await?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::InMemoryBackend;
    use drive_core::model::{StudentId, TrainerId, TrainerProfile};

    fn service(repo: &InMemoryBackend) -> DirectoryService {
        DirectoryService::new(Arc::new(repo.clone()), Arc::new(repo.clone()))
    }

    #[tokio::test]
    async fn student_search_narrows_the_page() {
        let repo = InMemoryBackend::new();
        for (id, name) in [(1, "Nadia"), (2, "Omar"), (3, "Nour")] {
            repo.add_student(Student {
                id: StudentId::new(id),
                name: name.into(),
                email: format!("{id}@example.com"),
                phone: None,
                photo_url: None,
                user_addresses: Vec::new(),
            });
        }
        let page = service(&repo)
            .list_students(&ListQuery::new(10).with_search("n"))
            .await
            .unwrap();
        let names: Vec<_> = page.items.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Nadia", "Nour"]);
    }

    #[tokio::test]
    async fn inactive_trainers_are_hidden_by_the_active_filter() {
        let repo = InMemoryBackend::new();
        for (id, active) in [(1, true), (2, false)] {
            repo.add_trainer(Trainer {
                id: TrainerId::new(id),
                user_id: TrainerUserId::new(id * 10),
                name: format!("Trainer {id}"),
                email: None,
                is_active: active,
                license_number: None,
                user: TrainerProfile::default(),
            });
        }
        let page = service(&repo)
            .list_trainers(&ListQuery::new(10).with_filter("is_active", "1"))
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert!(page.items[0].is_active);
    }

    #[tokio::test]
    async fn unknown_trainer_has_no_packages() {
        let repo = InMemoryBackend::new();
        let page = service(&repo)
            .list_trainer_packages(TrainerUserId::new(99), &ListQuery::default())
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(repo.package_requests(), vec![TrainerUserId::new(99)]);
    }
}
