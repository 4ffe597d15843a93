mod admin_vm;
mod badge_vm;
mod booking_vm;
mod directory_vm;
mod page_vm;
mod time_fmt;
mod wizard_vm;

pub use admin_vm::{
    BarVm, ChartSeriesVm, DashboardVm, PayoutRowVm, SchoolRowVm, StatCardVm,
};
pub use badge_vm::BadgeVm;
pub use booking_vm::{BookingDetailVm, BookingRowVm, SessionRowVm, map_booking_rows};
pub use directory_vm::{
    AddressOptionVm, PackageRowVm, StudentRowVm, TrainerRowVm, map_package_rows,
};
pub use page_vm::PageVm;
pub use time_fmt::{format_optional, format_timestamp};
pub use wizard_vm::{StepState, StepVm, map_steps};
