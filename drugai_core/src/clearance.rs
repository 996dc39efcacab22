//! Drug half-life clearance estimation.
//!
//! After each half-life, half of the remaining dose is gone. The table
//! shows the percentage left at 0, 1, ..., 10 half-lives, which takes
//! the dose down to about 0.1%.

use crate::format::{plain_number, to_fixed};
use crate::{ClearanceEntry, ClearanceTable, HalfLife, InvalidInput, TimeUnit};

/// Last step in the table (inclusive)
pub const CLEARANCE_STEPS: u32 = 10;

/// Shown under every clearance table
pub const CLEARANCE_DISCLAIMER: &str = "This is an estimate of how long it will take for a drug to be removed from your body. Actual half-life may vary.";

/// Result of a clearance request
#[derive(Clone, Debug, PartialEq)]
pub enum ClearanceOutcome {
    Computed(ClearanceTable),
    Invalid(InvalidInput),
}

impl ClearanceOutcome {
    pub fn table(&self) -> Option<&ClearanceTable> {
        match self {
            ClearanceOutcome::Computed(table) => Some(table),
            ClearanceOutcome::Invalid(_) => None,
        }
    }

    pub fn into_result(self) -> Result<ClearanceTable, InvalidInput> {
        match self {
            ClearanceOutcome::Computed(table) => Ok(table),
            ClearanceOutcome::Invalid(reason) => Err(reason),
        }
    }
}

impl ClearanceTable {
    /// Build the full table for a validated half-life
    ///
    /// Fails when the last elapsed time overflows to infinity.
    pub fn generate(half_life: HalfLife, unit: TimeUnit) -> Result<Self, InvalidInput> {
        if !(f64::from(CLEARANCE_STEPS) * half_life.value()).is_finite() {
            return Err(InvalidInput::OutOfRange { field: "half-life" });
        }

        let entries = (0..=CLEARANCE_STEPS)
            .map(|step| {
                let elapsed = f64::from(step) * half_life.value();
                let remaining = 100.0 * 0.5f64.powi(step as i32);
                ClearanceEntry {
                    percentage: to_fixed(remaining, 2),
                    time: format!("{} {}", plain_number(elapsed), unit),
                }
            })
            .collect();

        tracing::debug!(
            "Generated clearance table for half-life {} {}",
            half_life.value(),
            unit
        );
        Ok(ClearanceTable::from_entries(entries))
    }
}

/// Compute a clearance table from free-text half-life and unit
///
/// The unit is checked first, then the half-life must be a finite
/// positive number. A half-life of zero is rejected, and so is one large
/// enough that ten half-lives overflow.
pub fn compute_clearance_table(half_life: &str, unit: &str) -> ClearanceOutcome {
    let table = unit.parse::<TimeUnit>().and_then(|unit| {
        let half_life = HalfLife::parse(half_life)?;
        ClearanceTable::generate(half_life, unit)
    });

    match table {
        Ok(table) => ClearanceOutcome::Computed(table),
        Err(reason) => {
            tracing::debug!("Clearance not computed: {}", reason);
            ClearanceOutcome::Invalid(reason)
        }
    }
}

/// Holds the most recently computed table
///
/// Invalid requests leave the current table in place, so whatever is on
/// screen stays on screen until a valid request replaces it.
#[derive(Clone, Debug, Default)]
pub struct ClearanceEstimator {
    table: Option<ClearanceTable>,
}

impl ClearanceEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a request; a computed table replaces the stored one wholesale
    pub fn calculate(&mut self, half_life: &str, unit: &str) -> ClearanceOutcome {
        let outcome = compute_clearance_table(half_life, unit);
        match &outcome {
            ClearanceOutcome::Computed(table) => {
                self.table = Some(table.clone());
            }
            ClearanceOutcome::Invalid(_) => {
                tracing::debug!("Keeping previous clearance table");
            }
        }
        outcome
    }

    pub fn table(&self) -> Option<&ClearanceTable> {
        self.table.as_ref()
    }

    pub fn clear(&mut self) {
        self.table = None;
    }
}
