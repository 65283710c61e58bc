//! Enthalpy–entropy diagram of the steam cycle, scaled to the whole water charge.
//!
//! States: 1 initial water, 2 saturated liquid, 3 saturated vapour, 4 superheated,
//! 5 return. Needs both reference tables; without them the diagram is unavailable.

use adhtc_core::c_to_k;
use adhtc_core::constants::{CP_STEAM_KJ_KG_K, CP_WATER_KJ_KG_K};
use adhtc_core::units::KELVIN_OFFSET;
use adhtc_steam::SteamTables;
use serde::Serialize;
use tracing::debug;

use crate::axis::{AxisRange, Point, Series};

pub const DEFAULT_SUPERHEAT_DELTA_C: f64 = 20.0;
const AXIS_PADDING: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsOptions {
    /// Initial water temperature [°C]
    pub initial_temperature_c: f64,
    pub superheat_delta_c: f64,
    /// Return temperature [°C]; the boiling temperature when unset
    pub return_temperature_c: Option<f64>,
}

impl Default for HsOptions {
    fn default() -> Self {
        Self {
            initial_temperature_c: 25.0,
            superheat_delta_c: DEFAULT_SUPERHEAT_DELTA_C,
            return_temperature_c: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HsState {
    pub label: &'static str,
    /// Total entropy [kJ/K]
    pub s_kj_k: f64,
    /// Total enthalpy [kJ]
    pub h_kj: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HsDiagram {
    /// Saturation pressure at the boiling temperature [MPa]
    pub pressure_mpa: f64,
    pub states: Vec<HsState>,
    /// States 1..5 then back to 1
    pub cycle: Vec<Point>,
    pub s_range: AxisRange,
    pub h_range: AxisRange,
}

impl HsDiagram {
    pub fn series(&self) -> Vec<Series> {
        vec![Series::new("steam_cycle", self.cycle.clone())]
    }
}

const LABELS: [&str; 5] = [
    "1 (Initial)",
    "2 (Sat)",
    "3 (Sat.V)",
    "4 (Superheat)",
    "5 (Return)",
];

/// Steam cycle for `water_mass_kg` boiling at `boil_temperature_c`.
///
/// `None` when either reference table is missing or the saturation table has no
/// pressure column.
pub fn hs_diagram(
    water_mass_kg: f64,
    boil_temperature_c: f64,
    options: &HsOptions,
    tables: &SteamTables,
) -> Option<HsDiagram> {
    let sat = tables.saturation()?;
    let sup = tables.superheated()?;

    let t_boil = boil_temperature_c;
    let pressure_mpa = sat.saturation_pressure(t_boil)?;
    let t_super = t_boil + options.superheat_delta_c;
    let t_init = options.initial_temperature_c;
    let t_return = options.return_temperature_c.unwrap_or(t_boil);

    let boil = sat.lookup(t_boil);
    let hf_init = sat.lookup(t_init).h_f;
    let hf_return = sat.lookup(t_return).h_f;
    let sf_return = sat.lookup(t_return).s_f;
    let sf_init = CP_WATER_KJ_KG_K * (c_to_k(t_init) / KELVIN_OFFSET).ln();

    let (h_super, s_super) = match sup.lookup(pressure_mpa, t_super) {
        Some(props) => (props.h, props.s),
        None => (
            boil.h_g + CP_STEAM_KJ_KG_K * (t_super - t_boil),
            boil.s_g + CP_STEAM_KJ_KG_K * (c_to_k(t_super) / c_to_k(t_boil)).ln(),
        ),
    };

    let specific = [
        (sf_init, hf_init),
        (boil.s_f, boil.h_f),
        (boil.s_g, boil.h_g),
        (s_super, h_super),
        (sf_return, hf_return),
    ];
    let states: Vec<HsState> = LABELS
        .iter()
        .zip(specific)
        .map(|(&label, (s, h))| HsState {
            label,
            s_kj_k: s * water_mass_kg,
            h_kj: h * water_mass_kg,
        })
        .collect();

    let mut cycle: Vec<Point> = states.iter().map(|s| Point::new(s.s_kj_k, s.h_kj)).collect();
    cycle.push(cycle[0]);

    let s_range = AxisRange::padded(states.iter().map(|s| s.s_kj_k), AXIS_PADDING, 1.0)?;
    let h_range = AxisRange::padded(states.iter().map(|s| s.h_kj), AXIS_PADDING, 1.0)?.floored(0.0);

    debug!(pressure_mpa, t_boil, t_super, "h-s cycle mapped");

    Some(HsDiagram {
        pressure_mpa,
        states,
        cycle,
        s_range,
        h_range,
    })
}
