#![forbid(unsafe_code)]

//! Core calculators for the DrugAI health companion.
//!
//! This crate provides:
//! - Validated input types (measurements, half-life, time unit)
//! - BMI calculation
//! - Half-life clearance estimation
//! - Result rendering (text, JSON, CSV)
//! - Configuration and logging

pub mod types;
pub mod error;
pub mod parse;
pub mod format;
pub mod bmi;
pub mod clearance;
pub mod report;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use bmi::{compute_bmi, Bmi};
pub use clearance::{
    compute_clearance_table, ClearanceEstimator, ClearanceOutcome, CLEARANCE_DISCLAIMER,
    CLEARANCE_STEPS,
};
pub use report::{write_bmi, write_clearance, Format};
pub use config::Config;
