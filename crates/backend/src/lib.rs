#![forbid(unsafe_code)]

pub mod error;
pub mod gateway;
pub mod http;
mod memory;

pub use error::{ApiError, FieldErrors};
pub use gateway::{
    Backend, BookingGateway, PayoutGateway, SchoolGateway, StatsGateway, StudentGateway,
    TrainerGateway,
};
pub use http::{BackendConfig, DEFAULT_API_URL, HttpBackend};
pub use memory::InMemoryBackend;
