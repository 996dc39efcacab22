//! Core domain types for the DrugAI calculators.
//!
//! This module defines the validated values that cross from free-text input
//! into the calculators:
//! - Measurements (height, weight) and half-life durations
//! - Time units for the clearance table
//! - Clearance table rows
//! - The reasons an input can be rejected

use crate::parse::parse_decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Rejection reasons
// ============================================================================

/// Why a calculator input was rejected
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    /// The text had no leading decimal number
    #[error("{field} is not a number")]
    NotNumeric { field: &'static str },

    /// Zero, negative, infinite or NaN
    #[error("{field} must be a finite positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    /// Inputs were accepted but the result overflows or underflows an f64
    #[error("{field} is too large or too small to calculate")]
    OutOfRange { field: &'static str },

    /// Anything other than "hrs" or "days"
    #[error("unknown time unit {0:?} (expected \"hrs\" or \"days\")")]
    UnknownUnit(String),
}

fn positive(field: &'static str, value: f64) -> Result<f64, InvalidInput> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InvalidInput::NotPositive { field, value })
    }
}

fn parse_positive(field: &'static str, text: &str) -> Result<f64, InvalidInput> {
    let value = parse_decimal(text).ok_or(InvalidInput::NotNumeric { field })?;
    positive(field, value)
}

// ============================================================================
// Measurements
// ============================================================================

/// Body height in centimeters (finite, > 0)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Centimeters(f64);

impl Centimeters {
    pub fn new(value: f64) -> Result<Self, InvalidInput> {
        positive("height", value).map(Self)
    }

    pub fn parse(text: &str) -> Result<Self, InvalidInput> {
        parse_positive("height", text).map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn to_meters(self) -> f64 {
        self.0 / 100.0
    }
}

/// Body weight in kilograms (finite, > 0)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Kilograms(f64);

impl Kilograms {
    pub fn new(value: f64) -> Result<Self, InvalidInput> {
        positive("weight", value).map(Self)
    }

    pub fn parse(text: &str) -> Result<Self, InvalidInput> {
        parse_positive("weight", text).map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Drug half-life, expressed in whatever [`TimeUnit`] accompanies it
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct HalfLife(f64);

impl HalfLife {
    pub fn new(value: f64) -> Result<Self, InvalidInput> {
        positive("half-life", value).map(Self)
    }

    pub fn parse(text: &str) -> Result<Self, InvalidInput> {
        parse_positive("half-life", text).map(Self)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

// ============================================================================
// Time units
// ============================================================================

/// Unit attached to a half-life and echoed in every table label
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    #[serde(rename = "hrs")]
    Hours,
    #[serde(rename = "days")]
    Days,
}

impl TimeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Hours => "hrs",
            TimeUnit::Days => "days",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; surrounding whitespace is not stripped.
impl FromStr for TimeUnit {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hrs" => Ok(TimeUnit::Hours),
            "days" => Ok(TimeUnit::Days),
            _ => Err(InvalidInput::UnknownUnit(s.to_string())),
        }
    }
}

// ============================================================================
// Clearance table
// ============================================================================

/// One row of a clearance table
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClearanceEntry {
    /// Percentage of the dose remaining, two decimals (e.g. "50.00")
    pub percentage: String,
    /// Elapsed time label (e.g. "4 hrs")
    pub time: String,
}

/// Ordered clearance rows, step 0 first
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct ClearanceTable(Vec<ClearanceEntry>);

impl ClearanceTable {
    pub(crate) fn from_entries(entries: Vec<ClearanceEntry>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[ClearanceEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClearanceEntry> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ClearanceTable {
    type Item = &'a ClearanceEntry;
    type IntoIter = std::slice::Iter<'a, ClearanceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
