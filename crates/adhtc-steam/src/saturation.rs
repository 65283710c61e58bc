//! Saturation table keyed by temperature, with inverse lookups by pressure.

use std::io::Read;
use std::path::Path;

use crate::delimited::{DelimitedTable, number};
use crate::error::{SteamError, SteamResult};
use crate::interp::{Bracket, interpolate_clamped};
use crate::model::{SaturationProps, SaturationSource};

/// One row of the saturation table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationRow {
    /// Saturation temperature [°C]
    pub t_c: f64,
    /// Saturation pressure [MPa], when the source provides it
    pub p_mpa: Option<f64>,
    /// Saturated liquid enthalpy [kJ/kg]
    pub h_f: f64,
    /// Enthalpy of vaporization [kJ/kg]
    pub h_fg: f64,
    /// Saturated liquid entropy [kJ/(kg·K)]
    pub s_f: f64,
    /// Saturated vapour entropy [kJ/(kg·K)]
    pub s_g: f64,
}

impl SaturationRow {
    fn is_finite(&self) -> bool {
        [self.t_c, self.h_f, self.h_fg, self.s_f, self.s_g]
            .iter()
            .all(|v| v.is_finite())
    }
}

const COL_T: &str = "T (°C)";
const COL_P: &str = "P (MPa)";
const COL_H_F: &str = "Enthalpy Liquid (kJ/kg)";
const COL_H_FG: &str = "Enthalpy of Vaporization (kJ/kg)";
const COL_S_F: &str = "Entropy Liquid [kJ/(kg K)]";
const COL_S_G: &str = "Entropy Vapor [kJ/(kg K)]";

/// Saturated water/steam properties, linearly interpolated and clamped at the ends.
#[derive(Debug, Clone)]
pub struct SaturationTable {
    /// Sorted ascending by temperature
    rows: Vec<SaturationRow>,
    /// (p_mpa, t_c) pairs sorted ascending by pressure; empty when no pressure column
    by_pressure: Vec<(f64, f64)>,
    /// (t_c, p_mpa) pairs sorted ascending by temperature
    by_temperature: Vec<(f64, f64)>,
}

impl SaturationTable {
    /// Build a table from rows in any order. Rows with non-finite values are dropped.
    pub fn from_rows(rows: impl IntoIterator<Item = SaturationRow>) -> SteamResult<Self> {
        let mut rows: Vec<SaturationRow> = rows.into_iter().filter(|r| r.is_finite()).collect();
        if rows.is_empty() {
            return Err(SteamError::Empty {
                table: "saturation",
            });
        }
        rows.sort_by(|a, b| a.t_c.total_cmp(&b.t_c));

        let mut by_pressure: Vec<(f64, f64)> = rows
            .iter()
            .filter_map(|r| r.p_mpa.filter(|p| p.is_finite()).map(|p| (p, r.t_c)))
            .collect();
        by_pressure.sort_by(|a, b| a.0.total_cmp(&b.0));

        // rows are already in temperature order
        let by_temperature: Vec<(f64, f64)> = rows
            .iter()
            .filter_map(|r| r.p_mpa.filter(|p| p.is_finite()).map(|p| (r.t_c, p)))
            .collect();

        Ok(Self {
            rows,
            by_pressure,
            by_temperature,
        })
    }

    /// Parse CSV with the reference column headers (`T (°C)`, `P (MPa)`,
    /// `Enthalpy Liquid (kJ/kg)`, `Enthalpy of Vaporization (kJ/kg)`,
    /// `Entropy Liquid [kJ/(kg K)]`, `Entropy Vapor [kJ/(kg K)]`).
    ///
    /// Cells that are not numbers drop their row; `origin` is only used in errors.
    pub fn from_csv_reader<R: Read>(reader: R, origin: &Path) -> SteamResult<Self> {
        let table = DelimitedTable::read(reader, origin)?;
        let t = table.column(COL_T, origin)?;
        let p = table.optional_column(COL_P);
        let h_f = table.column(COL_H_F, origin)?;
        let h_fg = table.column(COL_H_FG, origin)?;
        let s_f = table.column(COL_S_F, origin)?;
        let s_g = table.column(COL_S_G, origin)?;

        let rows = table.records().iter().filter_map(|r| {
            Some(SaturationRow {
                t_c: number(r, t)?,
                p_mpa: p.and_then(|i| number(r, i)),
                h_f: number(r, h_f)?,
                h_fg: number(r, h_fg)?,
                s_f: number(r, s_f)?,
                s_g: number(r, s_g)?,
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

    pub fn rows(&self) -> &[SaturationRow] {
        &self.rows
    }

    /// Temperature span covered by the table [°C].
    pub fn temperature_range(&self) -> (f64, f64) {
        // from_rows guarantees at least one row
        let first = self.rows[0].t_c;
        let last = self.rows[self.rows.len() - 1].t_c;
        (first, last)
    }

    fn bracket(&self, t_c: f64) -> Bracket {
        // NaN queries resolve to the first row, same as a below-range query.
        Bracket::locate(&self.rows, |r| r.t_c, t_c).unwrap_or(Bracket {
            lo: 0,
            hi: 0,
            frac: 0.0,
        })
    }

    /// Saturated (h_f, h_g, s_f, s_g) at `t_c` [°C].
    pub fn lookup(&self, t_c: f64) -> SaturationProps {
        let b = self.bracket(t_c);
        let h_f = b.blend(&self.rows, |r| r.h_f);
        let h_fg = b.blend(&self.rows, |r| r.h_fg);
        SaturationProps {
            h_f,
            h_g: h_f + h_fg,
            s_f: b.blend(&self.rows, |r| r.s_f),
            s_g: b.blend(&self.rows, |r| r.s_g),
        }
    }

    /// (h_f, h_fg) at `t_c` [°C].
    pub fn enthalpies(&self, t_c: f64) -> (f64, f64) {
        let b = self.bracket(t_c);
        (
            b.blend(&self.rows, |r| r.h_f),
            b.blend(&self.rows, |r| r.h_fg),
        )
    }

    /// (s_f, s_g) at `t_c` [°C].
    pub fn entropies(&self, t_c: f64) -> (f64, f64) {
        let b = self.bracket(t_c);
        (
            b.blend(&self.rows, |r| r.s_f),
            b.blend(&self.rows, |r| r.s_g),
        )
    }

    /// Saturation temperature [°C] at `p_mpa`. `None` when the table has no pressure column.
    pub fn saturation_temperature(&self, p_mpa: f64) -> Option<f64> {
        interpolate_clamped(&self.by_pressure, |r| r.0, |r| r.1, p_mpa)
    }

    /// Saturation pressure [MPa] at `t_c`. `None` when the table has no pressure column.
    pub fn saturation_pressure(&self, t_c: f64) -> Option<f64> {
        interpolate_clamped(&self.by_temperature, |r| r.0, |r| r.1, t_c)
    }
}

impl SaturationSource for SaturationTable {
    fn name(&self) -> &'static str {
        "saturation-table"
    }

    fn liquid_enthalpy(&self, t_c: f64) -> f64 {
        self.enthalpies(t_c).0
    }

    fn vapor_enthalpy(&self, t_c: f64) -> f64 {
        let (h_f, h_fg) = self.enthalpies(t_c);
        h_f + h_fg
    }
}
