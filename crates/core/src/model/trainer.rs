use serde::{Deserialize, Serialize};

use crate::model::ids::{TrainerId, TrainerUserId};
use crate::model::student::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GearType {
    Manual,
    Automatic,
    Both,
    #[serde(other)]
    Unknown,
}

impl GearType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GearType::Manual => "Manual",
            GearType::Automatic => "Automatic",
            GearType::Both => "Manual & automatic",
            GearType::Unknown => "Unknown",
        }
    }
}

/// User-account fields nested under a trainer profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainerProfile {
    #[serde(default)]
    pub vehicle_preference: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub gear_type: Option<GearType>,
    /// Where the trainer starts lessons when the student is not picked up.
    #[serde(default)]
    pub default_address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainer {
    pub id: TrainerId,
    pub user_id: TrainerUserId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub user: TrainerProfile,
}

impl Trainer {
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self
                .email
                .as_deref()
                .is_some_and(|email| email.to_lowercase().contains(&needle))
            || self
                .license_number
                .as_deref()
                .is_some_and(|license| license.to_lowercase().contains(&needle))
    }

    #[must_use]
    pub fn languages_label(&self) -> String {
        if self.user.languages.is_empty() {
            "-".to_owned()
        } else {
            self.user.languages.join(", ")
        }
    }
}
