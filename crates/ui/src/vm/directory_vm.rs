use drive_core::model::{
    Address, PackageId, Student, StudentId, Trainer, TrainerPackage, TrainerUserId,
    DEFAULT_LOCALE,
};

use crate::paths;
use crate::vm::badge_vm::BadgeVm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentRowVm {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub addresses: String,
}

impl From<&Student> for StudentRowVm {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
            email: student.email.clone(),
            phone: student.phone.clone().unwrap_or_else(|| "-".into()),
            addresses: match student.user_addresses.len() {
                0 => "-".into(),
                1 => "1 address".into(),
                n => format!("{n} addresses"),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainerRowVm {
    pub user_id: TrainerUserId,
    pub name: String,
    pub email: String,
    pub license: String,
    pub gear: String,
    pub languages: String,
    pub vehicle: String,
    pub active: BadgeVm,
}

impl From<&Trainer> for TrainerRowVm {
    fn from(trainer: &Trainer) -> Self {
        Self {
            user_id: trainer.user_id,
            name: trainer.name.clone(),
            email: trainer.email.clone().unwrap_or_else(|| "-".into()),
            license: trainer.license_number.clone().unwrap_or_else(|| "-".into()),
            gear: trainer
                .user
                .gear_type
                .map_or_else(|| "-".into(), |g| g.label().to_owned()),
            languages: trainer.languages_label(),
            vehicle: trainer
                .user
                .vehicle_preference
                .clone()
                .unwrap_or_else(|| "-".into()),
            active: BadgeVm::active(trainer.is_active),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageRowVm {
    pub id: PackageId,
    pub title: String,
    pub sessions: u32,
    pub slots: u32,
    pub price: String,
    pub description: String,
    pub href: String,
}

impl PackageRowVm {
    #[must_use]
    pub fn new(trainer: TrainerUserId, package: &TrainerPackage) -> Self {
        let title = package.title(DEFAULT_LOCALE);
        let description = package
            .package
            .translations
            .iter()
            .find(|t| t.title == title)
            .and_then(|t| t.description.clone())
            .unwrap_or_default();
        Self {
            id: package.package_id,
            href: paths::package_details(trainer, package.package_id, &title),
            title,
            sessions: package.number_of_sessions(),
            slots: package.number_of_sessions().div_ceil(2).max(1),
            price: package.price.to_string(),
            description,
        }
    }
}

#[must_use]
pub fn map_package_rows(trainer: TrainerUserId, items: &[TrainerPackage]) -> Vec<PackageRowVm> {
    items
        .iter()
        .map(|package| PackageRowVm::new(trainer, package))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressOptionVm {
    pub id: u64,
    pub label: String,
    pub line: String,
}

impl From<&Address> for AddressOptionVm {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id.value(),
            label: address.label().to_owned(),
            line: address.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drive_core::model::{Amount, PackageInfo, PackageTranslation};

    #[test]
    fn package_row_links_with_slugified_title() {
        let package = TrainerPackage {
            package_id: PackageId::new(8),
            price: Amount::new(99.5),
            package: PackageInfo {
                number_of_sessions: 5,
                translations: vec![PackageTranslation {
                    locale: "en".into(),
                    title: "Highway Basics".into(),
                    description: Some("Two highway runs".into()),
                }],
            },
        };
        let row = PackageRowVm::new(TrainerUserId::new(4), &package);
        assert_eq!(row.href, "/trainers/4/packages/8/highway-basics");
        assert_eq!(row.slots, 3);
        assert_eq!(row.price, "99.50");
        assert_eq!(row.description, "Two highway runs");
    }
}
