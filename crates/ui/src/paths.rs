//! Every navigable path, in one place.

use drive_core::model::{BookingId, PackageId, SchoolId, TrainerUserId};

pub const DASHBOARD: &str = "/";
pub const BOOKINGS: &str = "/bookings";
pub const BOOKING_NEW: &str = "/bookings/new";
pub const BOOKING_DETAILS: &str = "/bookings/:id";
pub const STUDENTS: &str = "/students";
pub const TRAINERS: &str = "/trainers";
pub const PACKAGES: &str = "/packages";
pub const PACKAGE_DETAILS: &str = "/trainers/:trainer/packages/:package/:slug";
pub const SCHOOLS: &str = "/schools";
pub const SCHOOL_DETAILS: &str = "/schools/:id";
pub const PAYOUTS: &str = "/payouts";

/// Slug used when a package title has no alphanumerics.
const PACKAGE_SLUG_FALLBACK: &str = "package";

#[must_use]
pub fn booking_details(id: BookingId) -> String {
    format!("{BOOKINGS}/{id}")
}

#[must_use]
pub fn school_details(id: SchoolId) -> String {
    format!("{SCHOOLS}/{id}")
}

#[must_use]
pub fn package_details(trainer: TrainerUserId, package: PackageId, title: &str) -> String {
    let mut slug = slugify(title);
    if slug.is_empty() {
        slug.push_str(PACKAGE_SLUG_FALLBACK);
    }
    format!("{TRAINERS}/{trainer}/packages/{package}/{slug}")
}

/// Lowercase, with every run of non-alphanumerics collapsed into one `-`.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_and_trims_separators() {
        assert_eq!(slugify("  Intensive -- Course (10 Lessons)! "), "intensive-course-10-lessons");
        assert_eq!(slugify("Starter"), "starter");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn builders_interpolate_ids() {
        assert_eq!(booking_details(BookingId::new(42)), "/bookings/42");
        assert_eq!(school_details(SchoolId::new(7)), "/schools/7");
        assert_eq!(
            package_details(TrainerUserId::new(3), PackageId::new(9), "Night Driving"),
            "/trainers/3/packages/9/night-driving"
        );
    }

    #[test]
    fn package_link_never_ends_in_an_empty_segment() {
        assert_eq!(
            package_details(TrainerUserId::new(3), PackageId::new(9), "***"),
            "/trainers/3/packages/9/package"
        );
        assert_eq!(
            package_details(TrainerUserId::new(3), PackageId::new(9), ""),
            "/trainers/3/packages/9/package"
        );
    }
}
