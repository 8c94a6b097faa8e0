#![forbid(unsafe_code)]

//! Core domain model and business logic for the BMI calculator.
//!
//! This crate provides:
//! - Domain types (input records, history entries, weight categories)
//! - Input validation
//! - The BMI engine (unit conversion, rounding, classification)
//! - Session history and the calculator state container
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod clock;
pub mod timestamp;
pub mod validator;
pub mod engine;
pub mod history;
pub mod state;

// Re-export commonly used types
pub use error::{Error, Result, ValidationError};
pub use types::*;
pub use config::{Config, HistoryOrder, Timezone};
pub use clock::{Clock, FixedClock, SystemClock};
pub use timestamp::format_timestamp;
pub use validator::validate;
pub use engine::{calculate, classify};
pub use history::History;
pub use state::CalculatorState;
