use drive_core::model::{BookingDetail, BookingId, BookingSummary};

use crate::paths;
use crate::vm::badge_vm::BadgeVm;
use crate::vm::time_fmt::format_optional;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingRowVm {
    pub id: BookingId,
    pub code: String,
    pub student: String,
    pub trainer: String,
    pub package: String,
    pub status: BadgeVm,
    pub payment: BadgeVm,
    pub total: String,
    pub created_at: String,
    pub href: String,
}

impl From<&BookingSummary> for BookingRowVm {
    fn from(booking: &BookingSummary) -> Self {
        Self {
            id: booking.id,
            code: booking
                .booking_code
                .clone()
                .unwrap_or_else(|| format!("#{}", booking.id)),
            student: booking.student_name.clone(),
            trainer: booking.trainer_name.clone(),
            package: booking.package_name.clone().unwrap_or_else(|| "-".into()),
            status: BadgeVm::from(&booking.status),
            payment: BadgeVm::from(&booking.payment_status),
            total: booking.total.map_or_else(|| "-".into(), |t| t.to_string()),
            created_at: format_optional(booking.created_at.as_deref()),
            href: paths::booking_details(booking.id),
        }
    }
}

#[must_use]
pub fn map_booking_rows(items: &[BookingSummary]) -> Vec<BookingRowVm> {
    items.iter().map(BookingRowVm::from).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRowVm {
    pub label: String,
    pub start: String,
    pub end: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingDetailVm {
    pub row: BookingRowVm,
    pub sessions: Vec<SessionRowVm>,
    pub pickup: String,
    pub decidable: bool,
}

impl From<&BookingDetail> for BookingDetailVm {
    fn from(detail: &BookingDetail) -> Self {
        let sessions = detail
            .sessions
            .iter()
            .map(|session| SessionRowVm {
                label: format!(
                    "Sessions {} & {}",
                    session.session_no[0], session.session_no[1]
                ),
                start: session.start_time.clone(),
                end: session.end_time.clone(),
            })
            .collect();
        Self {
            row: BookingRowVm::from(&detail.summary),
            sessions,
            pickup: detail
                .pickup_address
                .as_ref()
                .map_or_else(|| "Trainer location".into(), |a| a.address.clone()),
            decidable: detail.summary.status.is_decidable(),
        }
    }
}
