//! Clamped linear interpolation over rows sorted by a key.
//!
//! Both steam tables reduce to the same two steps: find the pair of rows that brackets
//! the query key, then blend any column between them. Queries outside the key range
//! clamp to the nearest endpoint row; nothing is extrapolated.

/// Position of a query key within a sorted row set.
///
/// `lo == hi` means the query clamped to (or landed exactly on) a single row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub lo: usize,
    pub hi: usize,
    /// Fraction of the way from `lo` to `hi`, in `[0, 1]`.
    pub frac: f64,
}

impl Bracket {
    fn at(index: usize) -> Self {
        Self {
            lo: index,
            hi: index,
            frac: 0.0,
        }
    }

    /// Locate `x` among `rows`, which must be sorted ascending by `key`.
    ///
    /// Returns `None` for an empty slice or a NaN query.
    pub fn locate<R>(rows: &[R], key: impl Fn(&R) -> f64, x: f64) -> Option<Self> {
        if x.is_nan() {
            return None;
        }
        let first = rows.first()?;
        let last = rows.last()?;

        if x <= key(first) {
            return Some(Self::at(0));
        }
        if x >= key(last) {
            return Some(Self::at(rows.len() - 1));
        }

        // key(first) < x < key(last), so 1 <= hi <= len - 1
        let hi = rows.partition_point(|r| key(r) < x);
        let lo = hi - 1;
        let (k_lo, k_hi) = (key(&rows[lo]), key(&rows[hi]));
        let frac = if k_hi > k_lo {
            (x - k_lo) / (k_hi - k_lo)
        } else {
            0.0
        };

        Some(Self { lo, hi, frac })
    }

    /// Blend one column of the bracketing rows.
    pub fn blend<R>(&self, rows: &[R], value: impl Fn(&R) -> f64) -> f64 {
        let a = value(&rows[self.lo]);
        if self.lo == self.hi {
            return a;
        }
        let b = value(&rows[self.hi]);
        a + self.frac * (b - a)
    }
}

/// Single-column convenience over [`Bracket::locate`] + [`Bracket::blend`].
pub fn interpolate_clamped<R>(
    rows: &[R],
    key: impl Fn(&R) -> f64,
    value: impl Fn(&R) -> f64,
    x: f64,
) -> Option<f64> {
    Bracket::locate(rows, key, x).map(|b| b.blend(rows, value))
}
