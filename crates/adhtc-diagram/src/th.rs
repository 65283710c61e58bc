//! Temperature–enthalpy diagram of the static-charge boiler.
//!
//! The heating path runs from (h_inlet, T_ambient) up the sensible line to
//! (h_f, T_steam), then along the latent plateau to (h_g, T_steam). The progress
//! marker places the energy one day of boiler methane delivers on that path.

use adhtc_core::constants::{CP_WATER_KJ_KG_K, H_WATER_INLET_KJ_KG, LHV_METHANE_KJ_KG};
use adhtc_core::linspace;
use adhtc_engines::{BoilerInput, BoilerResult};
use adhtc_steam::{SaturationSource, SteamTables};
use serde::Serialize;

use crate::axis::{Point, Series};

/// Saturation curves sampled from the full table stop here [°C].
pub const CURVE_MAX_TEMPERATURE_C: f64 = 370.0;
pub const CURVE_LOWEST_TEMPERATURE_C: f64 = 0.01;
pub const CURVE_HEADROOM_C: f64 = 20.0;
pub const CURVE_SAMPLES: usize = 50;
pub const SENSIBLE_SAMPLES: usize = 20;
pub const LATENT_SAMPLES: usize = 15;

/// Where the delivered energy has taken the water charge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressMarker {
    pub h_kj_kg: f64,
    pub t_c: f64,
    /// Steam quality, only on the latent plateau
    pub quality: Option<f64>,
    /// Energy delivered per day by the boiler's methane share [kJ]
    pub q_delivered_kj: f64,
}

/// The heating path of one water charge, in per-kg enthalpy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatingPath {
    pub water_mass_kg: f64,
    pub t_ambient_c: f64,
    pub t_steam_c: f64,
    pub h_inlet_kj_kg: f64,
    pub h_f_kj_kg: f64,
    pub h_g_kj_kg: f64,
    pub q_sensible_kj: f64,
    pub q_latent_kj: f64,
    pub q_startup_kj: f64,
}

impl HeatingPath {
    /// Map delivered energy `q_kj` to (h, T, quality), capped at full start-up energy.
    pub fn progress(&self, q_kj: f64) -> ProgressMarker {
        let marker = |h_kj_kg, t_c, quality| ProgressMarker {
            h_kj_kg,
            t_c,
            quality,
            q_delivered_kj: q_kj,
        };

        if q_kj <= 0.0 || self.water_mass_kg <= 0.0 {
            return marker(self.h_inlet_kj_kg, self.t_ambient_c, None);
        }

        let q = q_kj.min(self.q_startup_kj);
        if q <= self.q_sensible_kj {
            let dq_per_kg = q / self.water_mass_kg;
            return marker(
                self.h_inlet_kj_kg + dq_per_kg,
                self.t_ambient_c + dq_per_kg / CP_WATER_KJ_KG_K,
                None,
            );
        }

        if self.q_latent_kj <= 0.0 {
            return marker(self.h_f_kj_kg, self.t_steam_c, Some(0.0));
        }
        let x = ((q - self.q_sensible_kj) / self.q_latent_kj).clamp(0.0, 1.0);
        marker(
            self.h_f_kj_kg + x * (self.h_g_kj_kg - self.h_f_kj_kg),
            self.t_steam_c,
            Some(x),
        )
    }

    /// Straight line from the inlet state to saturated liquid.
    fn sensible_line(&self) -> Vec<Point> {
        let mut dt = self.t_steam_c - self.t_ambient_c;
        if dt == 0.0 {
            dt = 1.0;
        }
        linspace(self.t_ambient_c, self.t_steam_c, SENSIBLE_SAMPLES)
            .into_iter()
            .map(|t| {
                let h = self.h_inlet_kj_kg
                    + (self.h_f_kj_kg - self.h_inlet_kj_kg) * (t - self.t_ambient_c) / dt;
                Point::new(h, t)
            })
            .collect()
    }

    fn latent_plateau(&self) -> Vec<Point> {
        linspace(self.h_f_kj_kg, self.h_g_kj_kg, LATENT_SAMPLES)
            .into_iter()
            .map(|h| Point::new(h, self.t_steam_c))
            .collect()
    }
}

/// T–H diagram data. Points are (h [kJ/kg], T [°C]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThDiagram {
    pub liquid_curve: Vec<Point>,
    pub vapor_curve: Vec<Point>,
    pub sensible_path: Vec<Point>,
    pub latent_path: Vec<Point>,
    /// x = 0 at the steam temperature
    pub liquid_marker: Point,
    /// x = 1 at the steam temperature
    pub vapor_marker: Point,
    pub progress: ProgressMarker,
    /// True when curves come from the full saturation table
    pub from_tables: bool,
}

impl ThDiagram {
    pub fn series(&self) -> Vec<Series> {
        vec![
            Series::new("saturated_liquid", self.liquid_curve.clone()),
            Series::new("saturated_vapor", self.vapor_curve.clone()),
            Series::new("sensible_heating", self.sensible_path.clone()),
            Series::new("latent_heat", self.latent_path.clone()),
            Series::new("liquid_x0", vec![self.liquid_marker]),
            Series::new("vapor_x1", vec![self.vapor_marker]),
            Series::new(
                "progress",
                vec![Point::new(self.progress.h_kj_kg, self.progress.t_c)],
            ),
        ]
    }
}

/// Build the T–H diagram for a static-charge boiler run.
pub fn th_diagram(input: &BoilerInput, result: &BoilerResult, tables: &SteamTables) -> ThDiagram {
    let t_amb = input.ambient_temperature_c;
    let t_steam = input.steam_temperature_c;

    let (h_inlet, h_f, h_g, liquid_curve, vapor_curve, from_tables) = match tables.saturation() {
        Some(sat) => {
            let h_inlet = sat.liquid_enthalpy(t_amb);
            let at_steam = sat.lookup(t_steam);
            let top = (t_steam + CURVE_HEADROOM_C).min(CURVE_MAX_TEMPERATURE_C);
            let temps = linspace(CURVE_LOWEST_TEMPERATURE_C, top, CURVE_SAMPLES);
            let liquid = temps
                .iter()
                .map(|&t| Point::new(sat.liquid_enthalpy(t), t))
                .collect();
            let vapor = temps
                .iter()
                .map(|&t| Point::new(sat.vapor_enthalpy(t), t))
                .collect();
            (h_inlet, at_steam.h_f, at_steam.h_g, liquid, vapor, true)
        }
        None => {
            let builtin = tables.builtin();
            let curve = |pts: &[(f64, f64)]| -> Vec<Point> {
                pts.iter().map(|&(t, h)| Point::new(h, t)).collect()
            };
            (
                H_WATER_INLET_KJ_KG,
                builtin.liquid_enthalpy(t_steam),
                builtin.vapor_enthalpy(t_steam),
                curve(builtin.liquid_curve()),
                curve(builtin.vapor_curve()),
                false,
            )
        }
    };

    let m = input.water_capacity_kg;
    // Sensible energy measured on the diagram's own enthalpy scale keeps the marker on the path
    let q_sensible_kj = if m > 0.0 {
        m * (h_f - h_inlet)
    } else {
        result.q_sensible_kj
    };

    let path = HeatingPath {
        water_mass_kg: m,
        t_ambient_c: t_amb,
        t_steam_c: t_steam,
        h_inlet_kj_kg: h_inlet,
        h_f_kj_kg: h_f,
        h_g_kj_kg: h_g,
        q_sensible_kj,
        q_latent_kj: result.q_latent_kj,
        q_startup_kj: result.q_startup_kj,
    };

    let q_delivered =
        result.boiler_kg_per_day * LHV_METHANE_KJ_KG * (input.efficiency_pct / 100.0);

    ThDiagram {
        liquid_curve,
        vapor_curve,
        sensible_path: path.sensible_line(),
        latent_path: path.latent_plateau(),
        liquid_marker: Point::new(h_f, t_steam),
        vapor_marker: Point::new(h_g, t_steam),
        progress: path.progress(q_delivered),
        from_tables,
    }
}
