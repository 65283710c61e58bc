use crate::CoreError;

/// Floating point type used throughout the plant model
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    if a == b {
        // Covers matching infinities.
        return true;
    }
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, CoreError> {
    ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(CoreError::OutOfRange {
            what,
            value: v,
            expected: ">= 0",
        });
    }
    Ok(v)
}

/// Finite and `> 0`.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CoreError> {
    ensure_finite(v, what)?;
    if v <= 0.0 {
        return Err(CoreError::OutOfRange {
            what,
            value: v,
            expected: "> 0",
        });
    }
    Ok(v)
}

/// Finite and inside the closed interval `[lo, hi]`.
pub fn ensure_in_range(
    v: Real,
    lo: Real,
    hi: Real,
    what: &'static str,
    expected: &'static str,
) -> Result<Real, CoreError> {
    ensure_finite(v, what)?;
    if v < lo || v > hi {
        return Err(CoreError::OutOfRange { what, value: v, expected });
    }
    Ok(v)
}

/// `n` evenly spaced samples over `[start, end]`, endpoints included.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as Real;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as Real })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
        assert!(nearly_equal(Real::INFINITY, Real::INFINITY, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn range_checks() {
        assert!(ensure_non_negative(0.0, "flow").is_ok());
        assert!(ensure_non_negative(-1.0, "flow").is_err());
        assert!(ensure_positive(0.0, "capacity").is_err());
        assert!(ensure_in_range(50.0, 0.0, 100.0, "moisture", "[0, 100]").is_ok());
        let err = ensure_in_range(101.0, 0.0, 100.0, "moisture", "[0, 100]").unwrap_err();
        assert!(err.to_string().contains("moisture"));
    }

    #[test]
    fn linspace_endpoints() {
        let v = linspace(0.01, 200.0, 50);
        assert_eq!(v.len(), 50);
        assert_eq!(v[0], 0.01);
        assert_eq!(v[49], 200.0);
        assert!(v.windows(2).all(|w| w[1] > w[0]));
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn linspace_hits_both_ends(start in -1.0e3f64..1.0e3, end in -1.0e3f64..1.0e3, n in 2usize..200) {
                let v = linspace(start, end, n);
                prop_assert_eq!(v.len(), n);
                prop_assert_eq!(v[0], start);
                prop_assert_eq!(v[n - 1], end);
            }
        }
    }
}
