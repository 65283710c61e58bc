//! Points, named series and padded axis ranges.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A named polyline or marker set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Span of `values` widened by `fraction` of that span on each side.
    ///
    /// A zero span is widened by `fallback` instead. `None` if there are no finite values.
    pub fn padded(values: impl IntoIterator<Item = f64>, fraction: f64, fallback: f64) -> Option<Self> {
        let (lo, hi) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })?;

        let mut margin = (hi - lo) * fraction;
        if margin == 0.0 {
            margin = fallback;
        }
        Some(Self {
            min: lo - margin,
            max: hi + margin,
        })
    }

    /// Raise the lower bound to `floor` if it sits below it.
    pub fn floored(self, floor: f64) -> Self {
        Self {
            min: self.min.max(floor),
            max: self.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_is_proportional() {
        let r = AxisRange::padded([0.0, 10.0, 5.0], 0.1, 1.0).unwrap();
        assert!((r.min + 1.0).abs() < 1e-12);
        assert!((r.max - 11.0).abs() < 1e-12);
    }

    #[test]
    fn flat_data_uses_fallback() {
        let r = AxisRange::padded([3.0, 3.0], 0.15, 0.1).unwrap();
        assert!((r.min - 2.9).abs() < 1e-12);
        assert!((r.max - 3.1).abs() < 1e-12);
    }

    #[test]
    fn no_finite_values() {
        assert!(AxisRange::padded([f64::NAN], 0.1, 1.0).is_none());
        assert!(AxisRange::padded(std::iter::empty(), 0.1, 1.0).is_none());
    }

    #[test]
    fn floor() {
        let r = AxisRange { min: -5.0, max: 5.0 }.floored(0.0);
        assert_eq!(r.min, 0.0);
        assert_eq!(r.max, 5.0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn padded_range_contains_values(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..40)) {
                let r = AxisRange::padded(values.iter().copied(), 0.15, 0.1).unwrap();
                prop_assert!(r.min < r.max);
                for v in values {
                    prop_assert!(r.min <= v && v <= r.max);
                }
            }
        }
    }
}
