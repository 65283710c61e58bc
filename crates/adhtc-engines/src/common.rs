//! Shared guards for engine input validation and degenerate-value handling.

use adhtc_core::{CoreError, KELVIN_OFFSET, ensure_finite};

use crate::error::EngineResult;

/// Temperature in °C must be finite and above absolute zero.
pub fn check_celsius(t_c: f64, what: &'static str) -> EngineResult<()> {
    ensure_finite(t_c, what)?;
    if t_c <= -KELVIN_OFFSET {
        return Err(CoreError::OutOfRange {
            what,
            value: t_c,
            expected: "> -273.15 °C",
        }
        .into());
    }
    Ok(())
}

/// Efficiency fraction in (0, 1].
pub fn check_fraction(eta: f64, what: &'static str) -> EngineResult<()> {
    ensure_finite(eta, what)?;
    if eta <= 0.0 || eta > 1.0 {
        return Err(CoreError::OutOfRange {
            what,
            value: eta,
            expected: "(0, 1]",
        }
        .into());
    }
    Ok(())
}

/// `numerator / denominator` when the denominator is positive, else 0.
#[inline]
pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Positive and finite; retention times outside this are treated as "no retention".
#[inline]
pub fn is_usable_duration(days: f64) -> bool {
    days > 0.0 && days.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_guard() {
        assert!(check_celsius(25.0, "t").is_ok());
        assert!(check_celsius(-273.15, "t").is_err());
        assert!(check_celsius(f64::NAN, "t").is_err());
    }

    #[test]
    fn fraction_guard() {
        assert!(check_fraction(1.0, "eta").is_ok());
        assert!(check_fraction(0.0, "eta").is_err());
        assert!(check_fraction(1.2, "eta").is_err());
    }

    #[test]
    fn guarded_division() {
        assert_eq!(ratio_or_zero(1.0, 0.0), 0.0);
        assert_eq!(ratio_or_zero(1.0, -2.0), 0.0);
        assert_eq!(ratio_or_zero(1.0, 4.0), 0.25);
    }

    #[test]
    fn duration_guard() {
        assert!(is_usable_duration(3.0));
        assert!(!is_usable_duration(0.0));
        assert!(!is_usable_duration(f64::INFINITY));
        assert!(!is_usable_duration(-1.0));
    }
}
