mod bookings;
mod components;
mod dashboard;
mod directory;
mod not_found;
mod packages;
mod payouts;
mod schools;
mod state;
mod toast;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use bookings::{BookingCreateView, BookingDetailView, BookingListView};
pub use dashboard::DashboardView;
pub use directory::{StudentListView, TrainerListView};
pub use not_found::NotFoundView;
pub use packages::{PackageDetailView, PackageListView};
pub use payouts::PayoutListView;
pub use schools::{SchoolDetailView, SchoolListView};
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use toast::{ToastStack, Toasts};
