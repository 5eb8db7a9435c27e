pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;
mod util;

pub use domain::UserStatus;
pub use error::UnknownStatus;
