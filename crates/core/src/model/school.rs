use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::SchoolId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchoolError {
    #[error("school name cannot be empty")]
    EmptyName,

    #[error("email address is not valid")]
    InvalidEmail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub trainers_count: u32,
}

/// Editable school fields, submitted as a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolUpdate {
    name: String,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    is_active: bool,
}

impl SchoolUpdate {
    /// Validate raw form input.
    ///
    /// Blank optional fields become `None`.
    ///
    /// # Errors
    ///
    /// Returns `SchoolError::EmptyName` or `SchoolError::InvalidEmail`.
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
        is_active: bool,
    ) -> Result<Self, SchoolError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SchoolError::EmptyName);
        }
        let email = non_blank(email);
        if let Some(email) = email.as_deref()
            && !looks_like_email(email)
        {
            return Err(SchoolError::InvalidEmail);
        }
        Ok(Self {
            name: name.to_owned(),
            email,
            phone: non_blank(phone),
            address: non_blank(address),
            is_active,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field names and values of the multipart body.
    ///
    /// Absent optional fields are sent empty so the backend clears them.
    #[must_use]
    pub fn to_form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone().unwrap_or_default()),
            ("phone", self.phone.clone().unwrap_or_default()),
            ("address", self.address.clone().unwrap_or_default()),
            ("is_active", if self.is_active { "1" } else { "0" }.to_owned()),
        ]
    }

    /// Apply the update to a local copy, mirroring what the backend stores.
    pub fn apply_to(&self, school: &mut School) {
        school.name.clone_from(&self.name);
        school.email.clone_from(&self.email);
        school.phone.clone_from(&self.phone);
        school.address.clone_from(&self.address);
        school.is_active = self.is_active;
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_trims_and_drops_blank_fields() {
        let update = SchoolUpdate::new("  Pro Drive ", " ", "0100", "", true).unwrap();
        assert_eq!(update.name(), "Pro Drive");
        assert_eq!(
            update.to_form_fields(),
            vec![
                ("name", "Pro Drive".to_owned()),
                ("email", String::new()),
                ("phone", "0100".to_owned()),
                ("address", String::new()),
                ("is_active", "1".to_owned()),
            ]
        );
    }

    #[test]
    fn update_rejects_empty_name_and_bad_email() {
        assert_eq!(
            SchoolUpdate::new(" ", "", "", "", false),
            Err(SchoolError::EmptyName)
        );
        assert_eq!(
            SchoolUpdate::new("A", "not-an-email", "", "", false),
            Err(SchoolError::InvalidEmail)
        );
        assert!(SchoolUpdate::new("A", "x@y.io", "", "", false).is_ok());
    }
}
