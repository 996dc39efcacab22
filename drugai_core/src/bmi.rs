//! Body-mass index calculation.
//!
//! BMI = weight_kg / height_m², with height entered in centimeters.

use crate::format::to_fixed;
use crate::{Centimeters, InvalidInput, Kilograms};
use std::fmt;

/// A computed body-mass index
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bmi(f64);

impl Bmi {
    /// Compute BMI from validated measurements
    ///
    /// A height so small that its square underflows to zero, or a result
    /// that overflows to infinity, is rejected as out of range.
    pub fn from_measurements(height: Centimeters, weight: Kilograms) -> Result<Self, InvalidInput> {
        let meters = height.to_meters();
        let squared = meters * meters;
        if squared == 0.0 {
            return Err(InvalidInput::OutOfRange { field: "height" });
        }

        let bmi = weight.value() / squared;
        if !bmi.is_finite() {
            return Err(InvalidInput::OutOfRange { field: "BMI" });
        }
        Ok(Bmi(bmi))
    }

    /// Parse both free-text inputs and compute BMI
    pub fn parse(height_cm: &str, weight_kg: &str) -> Result<Self, InvalidInput> {
        let height = Centimeters::parse(height_cm)?;
        let weight = Kilograms::parse(weight_kg)?;
        Self::from_measurements(height, weight)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Two decimal places, e.g. `24.22`
impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_fixed(self.0, 2))
    }
}

/// Compute BMI from free-text height (cm) and weight (kg)
///
/// Returns the value with two decimals, or an empty string when either
/// input is not a finite positive number. Invalid input is not an error;
/// the caller simply has nothing to show.
pub fn compute_bmi(height_cm: &str, weight_kg: &str) -> String {
    match Bmi::parse(height_cm, weight_kg) {
        Ok(bmi) => bmi.to_string(),
        Err(reason) => {
            tracing::debug!("BMI not computed: {}", reason);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_value() {
        assert_eq!(compute_bmi("170", "70"), "24.22");
    }

    #[test]
    fn test_empty_height_rejected() {
        assert_eq!(compute_bmi("", "70"), "");
    }

    #[test]
    fn test_empty_weight_rejected() {
        assert_eq!(compute_bmi("170", ""), "");
    }

    #[test]
    fn test_zero_weight_rejected() {
        // 0 kg would print "0.00"; treated as missing input instead
        assert_eq!(compute_bmi("170", "0"), "");
    }

    #[test]
    fn test_zero_height_rejected() {
        // Never divides by zero
        assert_eq!(compute_bmi("0", "70"), "");
    }

    #[test]
    fn test_negative_and_garbage_rejected() {
        assert_eq!(compute_bmi("-170", "70"), "");
        assert_eq!(compute_bmi("170", "-70"), "");
        assert_eq!(compute_bmi("tall", "70"), "");
    }

    #[test]
    fn test_units_suffix_tolerated() {
        assert_eq!(compute_bmi("170cm", "70kg"), "24.22");
    }

    #[test]
    fn test_typed_api() {
        crate::logging::init_test();
        let bmi = Bmi::from_measurements(
            Centimeters::new(180.0).unwrap(),
            Kilograms::new(81.0).unwrap(),
        )
        .unwrap();
        assert!((bmi.value() - 25.0).abs() < 1e-9);
        assert_eq!(bmi.to_string(), "25.00");
    }

    #[test]
    fn test_tiny_height_does_not_divide_by_zero() {
        assert_eq!(compute_bmi("1e-200", "70"), "");
        assert_eq!(
            Bmi::parse("1e-200", "70"),
            Err(InvalidInput::OutOfRange { field: "height" })
        );
    }

    #[test]
    fn test_overflowing_result_rejected() {
        // 70 / (1e-160 m)^2 overflows even though the square is not zero
        assert_eq!(
            Bmi::parse("1e-158", "70"),
            Err(InvalidInput::OutOfRange { field: "BMI" })
        );
        assert_eq!(compute_bmi("1e-158", "70"), "");
    }

    #[test]
    fn test_huge_finite_bmi_prints_exponent_form() {
        assert_eq!(compute_bmi("100", "1e307"), "1e+307");

        let huge = compute_bmi("170", "1e308");
        assert!(huge.starts_with("3.46"), "got {}", huge);
        assert!(huge.ends_with("e+307"), "got {}", huge);
    }

    #[test]
    fn test_stored_value_below_half_rounds_down() {
        // 30.7 / 2.0² is stored as 7.67499999...
        assert_eq!(compute_bmi("200", "30.7"), "7.67");
    }

    #[test]
    fn test_parse_reports_first_bad_field() {
        assert_eq!(
            Bmi::parse("", "x"),
            Err(InvalidInput::NotNumeric { field: "height" })
        );
    }
}
