use thiserror::Error;

use crate::model::{ParseIdError, ScheduleError};
use crate::wizard::WizardError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}
