mod detail;
mod form;
mod list;

pub use detail::SchoolDetailView;
pub use list::SchoolListView;
