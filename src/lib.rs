// src/lib.rs
pub mod banner;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;

pub use client::{Grader, GradingClient};
pub use config::{ClientConfig, GradingJob};
pub use errors::{GradeError, Result};
pub use models::{GradingCriteria, GradingResult};
