use std::sync::Arc;

use backend::SchoolGateway;
use drive_core::model::{ListQuery, Page, School, SchoolId, SchoolUpdate};
use tracing::info;

use crate::error::SchoolServiceError;

/// Raw values of the school edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub is_active: bool,
}

impl SchoolForm {
    #[must_use]
    pub fn from_school(school: &School) -> Self {
        Self {
            name: school.name.clone(),
            email: school.email.clone().unwrap_or_default(),
            phone: school.phone.clone().unwrap_or_default(),
            address: school.address.clone().unwrap_or_default(),
            is_active: school.is_active,
        }
    }
}

#[derive(Clone)]
pub struct SchoolService {
    schools: Arc<dyn SchoolGateway>,
}

impl SchoolService {
    #[must_use]
    pub fn new(schools: Arc<dyn SchoolGateway>) -> Self {
        Self { schools }
    }

    /// # Errors
    ///
    /// Returns `SchoolServiceError::Api` if the backend call fails.
    pub async fn list_schools(&self, query: &ListQuery) -> Result<Page<School>, SchoolServiceError> {
        Ok(self.schools.list_schools(query).await?)
    }

    /// # Errors
    ///
    /// Returns `SchoolServiceError::Api` if the backend call fails.
    pub async fn get_school(&self, id: SchoolId) -> Result<School, SchoolServiceError> {
        Ok(self.schools.get_school(id).await?)
    }

    /// Validate the edit form and persist it.
    ///
    /// # Errors
    ///
    /// Returns `SchoolServiceError::School` for invalid input.
    /// Returns `SchoolServiceError::Api` if the backend call fails.
    pub async fn update_school(
        &self,
        id: SchoolId,
        form: &SchoolForm,
    ) -> Result<School, SchoolServiceError> {
        let update = SchoolUpdate::new(
            &form.name,
            &form.email,
            &form.phone,
            &form.address,
            form.is_active,
        )?;
        let school = self.schools.update_school(id, &update).await?;
        info!(%id, "school updated");
        Ok(school)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::InMemoryBackend;
    use drive_core::model::SchoolError;

    fn seeded() -> (InMemoryBackend, SchoolService) {
        let repo = InMemoryBackend::new();
        repo.add_school(School {
            id: SchoolId::new(3),
            name: "Downtown Driving".into(),
            email: Some("office@downtown.test".into()),
            phone: None,
            address: None,
            is_active: true,
            logo_url: None,
            trainers_count: 4,
        });
        let service = SchoolService::new(Arc::new(repo.clone()));
        (repo, service)
    }

    #[tokio::test]
    async fn update_round_trips_through_the_gateway() {
        let (_repo, service) = seeded();
        let mut form = SchoolForm::from_school(&service.get_school(SchoolId::new(3)).await.unwrap());
        form.name = "  Uptown Driving ".into();
        form.phone = "555-0101".into();
        form.is_active = false;

        let saved = service.update_school(SchoolId::new(3), &form).await.unwrap();
        assert_eq!(saved.name, "Uptown Driving");
        assert_eq!(saved.phone.as_deref(), Some("555-0101"));
        assert!(!saved.is_active);
        assert_eq!(service.get_school(SchoolId::new(3)).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_backend() {
        let (_repo, service) = seeded();
        let form = SchoolForm {
            name: "Downtown".into(),
            email: "not-an-email".into(),
            ..SchoolForm::default()
        };
        let err = service.update_school(SchoolId::new(3), &form).await.unwrap_err();
        assert!(matches!(
            err,
            SchoolServiceError::School(SchoolError::InvalidEmail)
        ));
        let stored = service.get_school(SchoolId::new(3)).await.unwrap();
        assert_eq!(stored.name, "Downtown Driving");
    }
}
