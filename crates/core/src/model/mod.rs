mod amount;
mod booking;
mod ids;
mod package;
mod page;
mod payout;
mod role;
mod school;
pub mod session;
mod stats;
mod student;
mod trainer;

pub use amount::Amount;
pub use booking::{
    BadgeColor, BookingCreated, BookingDecision, BookingDetail, BookingStatus, BookingSummary,
    NewBooking, PaymentStatus, PickupLocation, PickupMode,
};
pub use ids::{
    AddressId, BookingId, PackageId, ParseIdError, PayoutId, SchoolId, StudentId, TrainerId,
    TrainerUserId,
};
pub use package::{DEFAULT_LOCALE, PackageInfo, PackageTranslation, TrainerPackage};
pub use page::{DEFAULT_PAGE_SIZE, ListQuery, PAGE_SIZE_OPTIONS, Page, Sort, SortDirection};
pub use payout::Payout;
pub use role::Role;
pub use school::{School, SchoolError, SchoolUpdate};
pub use session::{ScheduleError, SessionRequest, SessionSchedule, SessionSlot};
pub use stats::{DashboardStats, SeriesPoint};
pub use student::{Address, Student};
pub use trainer::{GearType, Trainer, TrainerProfile};
