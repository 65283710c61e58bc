//! Minimal built-in saturation data, used when the reference tables are unavailable.

use crate::interp::interpolate_clamped;
use crate::model::SaturationSource;

/// Saturated vapour enthalpy h_g [kJ/kg] by temperature [°C].
pub const STEAM_H_G_TABLE: [(f64, f64); 5] = [
    (100.0, 2676.0),
    (160.0, 2758.0),
    (180.0, 2778.0),
    (200.0, 2793.0),
    (250.0, 2801.0),
];

/// Saturated liquid enthalpy h_f [kJ/kg] by temperature [°C].
pub const STEAM_H_F_TABLE: [(f64, f64); 5] = [
    (100.0, 419.0),
    (160.0, 675.0),
    (180.0, 763.0),
    (200.0, 852.0),
    (250.0, 1085.0),
];

/// Five-point saturation table covering 100–250 °C.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSaturation;

impl BuiltinSaturation {
    pub fn new() -> Self {
        Self
    }

    /// Liquid curve points (T °C, h_f kJ/kg), for diagram rendering.
    pub fn liquid_curve(&self) -> &'static [(f64, f64)] {
        &STEAM_H_F_TABLE
    }

    /// Vapour curve points (T °C, h_g kJ/kg), for diagram rendering.
    pub fn vapor_curve(&self) -> &'static [(f64, f64)] {
        &STEAM_H_G_TABLE
    }
}

fn lookup(table: &[(f64, f64)], t_c: f64) -> f64 {
    // The const tables are non-empty; NaN queries fall back to the first row.
    interpolate_clamped(table, |r| r.0, |r| r.1, t_c).unwrap_or(table[0].1)
}

impl SaturationSource for BuiltinSaturation {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn liquid_enthalpy(&self, t_c: f64) -> f64 {
        lookup(&STEAM_H_F_TABLE, t_c)
    }

    fn vapor_enthalpy(&self, t_c: f64) -> f64 {
        lookup(&STEAM_H_G_TABLE, t_c)
    }
}
