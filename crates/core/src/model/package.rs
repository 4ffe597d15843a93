use serde::{Deserialize, Serialize};

use crate::model::amount::Amount;
use crate::model::ids::PackageId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageTranslation {
    pub locale: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Catalog-level package definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub number_of_sessions: u32,
    #[serde(default)]
    pub translations: Vec<PackageTranslation>,
}

/// A package as offered (and priced) by one trainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerPackage {
    pub package_id: PackageId,
    pub price: Amount,
    pub package: PackageInfo,
}

pub const DEFAULT_LOCALE: &str = "en";

impl TrainerPackage {
    /// Title in `locale`, falling back to English, then to the first translation.
    #[must_use]
    pub fn title(&self, locale: &str) -> String {
        let translations = &self.package.translations;
        translations
            .iter()
            .find(|t| t.locale == locale)
            .or_else(|| translations.iter().find(|t| t.locale == DEFAULT_LOCALE))
            .or_else(|| translations.first())
            .map_or_else(
                || format!("Package #{}", self.package_id),
                |t| t.title.clone(),
            )
    }

    #[must_use]
    pub fn number_of_sessions(&self) -> u32 {
        self.package.number_of_sessions
    }
}
