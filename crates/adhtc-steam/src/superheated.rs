//! Superheated steam / compressed liquid table keyed by (pressure, temperature).

use std::io::Read;
use std::path::Path;

use crate::delimited::{DelimitedTable, number, text};
use crate::error::{SteamError, SteamResult};
use crate::interp::Bracket;
use crate::model::SuperheatedProps;

/// One (pressure, temperature) entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SuperheatedRow {
    pub p_mpa: f64,
    pub t_c: f64,
    /// Specific enthalpy [kJ/kg]
    pub h: f64,
    /// Specific entropy [kJ/(kg·K)]
    pub s: f64,
    /// Normalised phase label ("liquid", "vapor", ...), when present
    pub phase: Option<String>,
}

const COL_P: &str = "Pressure (MPa)";
const COL_T: &str = "Temperature (°C)";
const COL_H: &str = "Specific Enthalpy (kJ/kg)";
const COL_S: &str = "Specific Entropy [kJ/(kg K)]";
const COL_PHASE: &str = "Phase";

fn normalize_phase(raw: &str) -> String {
    raw.trim().to_lowercase().replace('"', "")
}

/// Index of the item whose key is closest to `x`; `None` for NaN or an empty slice.
fn nearest<T>(items: &[T], key: impl Fn(&T) -> f64, x: f64) -> Option<usize> {
    if x.is_nan() {
        return None;
    }
    items
        .iter()
        .enumerate()
        .min_by(|a, b| (key(a.1) - x).abs().total_cmp(&(key(b.1) - x).abs()))
        .map(|(i, _)| i)
}

/// All entries sharing one pressure, sorted by temperature.
#[derive(Debug, Clone)]
pub struct Isobar {
    pub p_mpa: f64,
    /// (t_c, h, s), ascending in temperature
    pub points: Vec<(f64, f64, f64)>,
    /// Phase label of each entry in `points`
    pub phases: Vec<Option<String>>,
}

impl Isobar {
    /// Phase label of the tabulated entry nearest to `t_c`.
    pub fn phase_at(&self, t_c: f64) -> Option<&str> {
        let idx = nearest(&self.points, |p| p.0, t_c)?;
        self.phases.get(idx)?.as_deref()
    }

    /// (h, s) at `t_c`, clamped to this isobar's temperature span.
    fn at(&self, t_c: f64) -> Option<SuperheatedProps> {
        let b = Bracket::locate(&self.points, |p| p.0, t_c)?;
        Some(SuperheatedProps {
            h: b.blend(&self.points, |p| p.1),
            s: b.blend(&self.points, |p| p.2),
        })
    }
}

/// Two-dimensional steam table.
///
/// Lookups first interpolate temperature along the two isobars that bracket the
/// requested pressure, then interpolate linearly across pressure. Pressures outside
/// the table clamp to the nearest isobar.
#[derive(Debug, Clone)]
pub struct SuperheatedTable {
    isobars: Vec<Isobar>,
}

impl SuperheatedTable {
    /// Build from rows in any order. Rows with non-finite numbers are dropped.
    pub fn from_rows(rows: impl IntoIterator<Item = SuperheatedRow>) -> SteamResult<Self> {
        let mut rows: Vec<SuperheatedRow> = rows
            .into_iter()
            .filter(|r| [r.p_mpa, r.t_c, r.h, r.s].iter().all(|v| v.is_finite()))
            .collect();
        if rows.is_empty() {
            return Err(SteamError::Empty {
                table: "superheated",
            });
        }
        rows.sort_by(|a, b| a.p_mpa.total_cmp(&b.p_mpa).then(a.t_c.total_cmp(&b.t_c)));

        let mut isobars: Vec<Isobar> = Vec::new();
        for row in rows {
            match isobars.last_mut() {
                Some(iso) if iso.p_mpa == row.p_mpa => {
                    iso.points.push((row.t_c, row.h, row.s));
                    iso.phases.push(row.phase);
                }
                _ => isobars.push(Isobar {
                    p_mpa: row.p_mpa,
                    points: vec![(row.t_c, row.h, row.s)],
                    phases: vec![row.phase],
                }),
            }
        }

        Ok(Self { isobars })
    }

    /// Parse CSV with the reference headers (`Pressure (MPa)`, `Temperature (°C)`,
    /// `Specific Enthalpy (kJ/kg)`, `Specific Entropy [kJ/(kg K)]`, optional `Phase`).
    /// Extra columns are ignored; non-numeric cells drop their row.
    pub fn from_csv_reader<R: Read>(reader: R, origin: &Path) -> SteamResult<Self> {
        let table = DelimitedTable::read(reader, origin)?;
        let p = table.column(COL_P, origin)?;
        let t = table.column(COL_T, origin)?;
        let h = table.column(COL_H, origin)?;
        let s = table.column(COL_S, origin)?;
        let phase = table.optional_column(COL_PHASE);

        let rows = table.records().iter().filter_map(|r| {
            Some(SuperheatedRow {
                p_mpa: number(r, p)?,
                t_c: number(r, t)?,
                h: number(r, h)?,
                s: number(r, s)?,
                phase: phase
                    .and_then(|i| text(r, i))
                    .map(normalize_phase)
                    .filter(|label| !label.is_empty()),
            })
        });
        Self::from_rows(rows)
    }

    pub fn from_csv_path(path: &Path) -> SteamResult<Self> {
        let file = std::fs::File::open(path).map_err(|source| SteamError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv_reader(file, path)
    }

    pub fn isobars(&self) -> &[Isobar] {
        &self.isobars
    }

    /// Distinct tabulated pressures [MPa], ascending.
    pub fn pressures(&self) -> Vec<f64> {
        self.isobars.iter().map(|i| i.p_mpa).collect()
    }

    /// Phase label of the tabulated entry nearest to (`p_mpa`, `t_c`), when the source
    /// carries a phase column.
    pub fn phase(&self, p_mpa: f64, t_c: f64) -> Option<&str> {
        let idx = nearest(&self.isobars, |i| i.p_mpa, p_mpa)?;
        self.isobars[idx].phase_at(t_c)
    }

    /// (h, s) at (`p_mpa`, `t_c`).
    ///
    /// `None` only for NaN inputs; every finite query lands somewhere in the table.
    pub fn lookup(&self, p_mpa: f64, t_c: f64) -> Option<SuperheatedProps> {
        let b = Bracket::locate(&self.isobars, |i| i.p_mpa, p_mpa)?;
        let lo = self.isobars[b.lo].at(t_c)?;
        if b.lo == b.hi {
            return Some(lo);
        }
        let hi = self.isobars[b.hi].at(t_c)?;
        Some(SuperheatedProps {
            h: lo.h + b.frac * (hi.h - lo.h),
            s: lo.s + b.frac * (hi.s - lo.s),
        })
    }
}
