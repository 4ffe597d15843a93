use drive_core::model::{BadgeColor, BookingStatus, PaymentStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeVm {
    pub label: String,
    pub class: &'static str,
}

impl BadgeVm {
    #[must_use]
    pub fn new(label: impl Into<String>, color: BadgeColor) -> Self {
        Self {
            label: label.into(),
            class: color.css_class(),
        }
    }

    #[must_use]
    pub fn active(is_active: bool) -> Self {
        if is_active {
            Self::new("Active", BadgeColor::Success)
        } else {
            Self::new("Inactive", BadgeColor::Error)
        }
    }
}

impl From<&BookingStatus> for BadgeVm {
    fn from(status: &BookingStatus) -> Self {
        Self::new(humanize(status.as_str()), status.badge())
    }
}

impl From<&PaymentStatus> for BadgeVm {
    fn from(status: &PaymentStatus) -> Self {
        Self::new(humanize(status.as_str()), status.badge())
    }
}

/// `IN_PROGRESS` becomes `In progress`.
fn humanize(raw: &str) -> String {
    let lower = raw.replace('_', " ").to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
