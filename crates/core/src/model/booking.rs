use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::amount::Amount;
use crate::model::ids::{AddressId, BookingId, PackageId, StudentId, TrainerUserId};
use crate::model::session::SessionRequest;
use crate::model::student::Address;

//
// ─── STATUS BADGES ─────────────────────────────────────────────────────────────
//

/// Colour family used to render a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Default,
    Info,
    Success,
    Warning,
    Error,
}

impl BadgeColor {
    /// CSS modifier used by the badge component.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeColor::Default => "badge badge--default",
            BadgeColor::Info => "badge badge--info",
            BadgeColor::Success => "badge badge--success",
            BadgeColor::Warning => "badge badge--warning",
            BadgeColor::Error => "badge badge--error",
        }
    }

    /// Fixed status-string to colour table shared by every status column.
    #[must_use]
    pub fn for_status(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "PENDING" | "REQUESTED" | "PROCESSING" => BadgeColor::Warning,
            "ACCEPTED" | "CONFIRMED" | "PAID" | "COMPLETED" | "ACTIVE" => BadgeColor::Success,
            "REJECTED" | "CANCELLED" | "FAILED" | "INACTIVE" => BadgeColor::Error,
            "REFUNDED" | "IN_PROGRESS" => BadgeColor::Info,
            _ => BadgeColor::Default,
        }
    }
}

macro_rules! status_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            /// A value this build does not know about, kept verbatim.
            Other(String),
        }

        impl $name {
            #[must_use]
            pub fn parse(raw: &str) -> Self {
                match raw.trim().to_ascii_uppercase().as_str() {
                    $($wire => $name::$variant,)+
                    _ => $name::Other(raw.to_owned()),
                }
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Other(raw) => raw,
                }
            }

            #[must_use]
            pub fn badge(&self) -> BadgeColor {
                BadgeColor::for_status(self.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok($name::parse(&raw))
            }
        }
    };
}

status_enum!(
    /// Lifecycle state of a booking.
    BookingStatus {
        Pending => "PENDING",
        Accepted => "ACCEPTED",
        Rejected => "REJECTED",
        Cancelled => "CANCELLED",
        Completed => "COMPLETED",
    }
);

status_enum!(PaymentStatus {
    Pending => "PENDING",
    Paid => "PAID",
    Failed => "FAILED",
    Refunded => "REFUNDED",
});

impl BookingStatus {
    /// Only bookings awaiting a decision can be accepted or rejected.
    #[must_use]
    pub fn is_decidable(&self) -> bool {
        matches!(self, BookingStatus::Pending)
    }
}

//
// ─── PICKUP ────────────────────────────────────────────────────────────────────
//

/// How the student reaches the first lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickupMode {
    /// The trainer picks the student up at one of the student's addresses.
    #[default]
    Pickup,
    /// The student comes to the trainer's default address.
    DriverLocation,
}

/// Selected pickup location. Both variants travel as a bare address id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PickupLocation {
    StudentAddress(AddressId),
    #[serde(skip_deserializing)]
    TrainerAddress(AddressId),
}

impl PickupLocation {
    #[must_use]
    pub fn address_id(self) -> AddressId {
        match self {
            PickupLocation::StudentAddress(id) | PickupLocation::TrainerAddress(id) => id,
        }
    }

    #[must_use]
    pub fn mode(self) -> PickupMode {
        match self {
            PickupLocation::StudentAddress(_) => PickupMode::Pickup,
            PickupLocation::TrainerAddress(_) => PickupMode::DriverLocation,
        }
    }
}

//
// ─── REQUESTS / RESPONSES ──────────────────────────────────────────────────────
//

/// Body of the booking-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub student_id: StudentId,
    pub trainer_id: TrainerUserId,
    pub package_id: PackageId,
    pub pickup_location: Option<PickupLocation>,
    pub sessions: Vec<SessionRequest>,
}

/// Response of the booking-creation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCreated {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl BookingCreated {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}

/// Accept/reject decision for a pending booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingDecision {
    Accept,
    Reject,
}

impl BookingDecision {
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            BookingDecision::Accept => "accept",
            BookingDecision::Reject => "reject",
        }
    }

    #[must_use]
    pub fn resulting_status(self) -> BookingStatus {
        match self {
            BookingDecision::Accept => BookingStatus::Accepted,
            BookingDecision::Reject => BookingStatus::Rejected,
        }
    }
}

/// Row shape of the booking list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub id: BookingId,
    #[serde(default)]
    pub booking_code: Option<String>,
    pub student_name: String,
    pub trainer_name: String,
    #[serde(default)]
    pub package_name: Option<String>,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub total: Option<Amount>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDetail {
    #[serde(flatten)]
    pub summary: BookingSummary,
    #[serde(default)]
    pub sessions: Vec<SessionRequest>,
    #[serde(default)]
    pub pickup_address: Option<Address>,
}
