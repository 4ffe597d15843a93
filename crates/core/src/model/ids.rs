use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            #[must_use]
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the underlying u64 value
            #[must_use]
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u64>()
                    .map($name::new)
                    .map_err(|_| ParseIdError {
                        kind: stringify!($name),
                    })
            }
        }
    };
}

define_id!(
    /// Backend id of a student account.
    StudentId
);
define_id!(
    /// Backend id of a trainer profile row.
    TrainerId
);
define_id!(
    /// User id behind a trainer profile. Bookings reference trainers by this id.
    TrainerUserId
);
define_id!(
    /// Id of a package offered by a trainer.
    PackageId
);
define_id!(
    /// Id of a saved user address.
    AddressId
);
define_id!(BookingId);
define_id!(SchoolId);
define_id!(PayoutId);

// ─── Parse Errors ──────────────────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_id_display() {
        let id = BookingId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_student_id_from_str() {
        let id: StudentId = "123".parse().unwrap();
        assert_eq!(id, StudentId::new(123));
    }

    #[test]
    fn test_trainer_user_id_from_str_invalid() {
        let err = "not-a-number".parse::<TrainerUserId>().unwrap_err();
        assert_eq!(err.to_string(), "failed to parse TrainerUserId from string");
    }

    #[test]
    fn test_id_debug_names_the_kind() {
        assert_eq!(format!("{:?}", SchoolId::new(7)), "SchoolId(7)");
    }

    #[test]
    fn test_id_serializes_as_bare_number() {
        let json = serde_json::to_string(&PackageId::new(9)).unwrap();
        assert_eq!(json, "9");
        let back: PackageId = serde_json::from_str("9").unwrap();
        assert_eq!(back, PackageId::new(9));
    }
}
