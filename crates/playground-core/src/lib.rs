//! Playground Core: records, the PrettyDescription capability, and the driver.

pub mod animal;
pub mod config;
pub mod describe;
pub mod driver;
pub mod error;
pub mod person;

pub use animal::Animal;
pub use config::DriverConfig;
pub use describe::{describe_all, PrettyDescription};
pub use driver::{run, DriverReport};
pub use error::{Error, Result};
pub use person::Person;
