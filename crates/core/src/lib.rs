#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod model;

pub use config::{AppConfig, SourceUrl};
pub use error::Error;
