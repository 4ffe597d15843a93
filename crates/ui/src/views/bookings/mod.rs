mod create;
mod detail;
mod list;
mod steps;

pub use create::BookingCreateView;
#[cfg(test)]
pub(crate) use create::WizardTestHandles;
pub use detail::BookingDetailView;
pub use list::BookingListView;
