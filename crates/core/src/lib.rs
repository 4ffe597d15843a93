#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod time;
pub mod wizard;

pub use error::Error;
pub use time::Clock;
pub use wizard::{BookingWizard, WizardError, WizardStep};
