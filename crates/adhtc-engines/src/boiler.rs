//! Boiler thermal balance and methane split between boiler and biogas collector.
//!
//! Two operating modes exist:
//! - **Static charge** (primary): one-time start-up energy to raise a fixed water charge
//!   from ambient to saturated steam, the methane that takes, and the time to steam.
//! - **Continuous flow**: a steady water feed in kg/hr, heat load from the enthalpy rise,
//!   and methane demand per hour.
//!
//! A deployment picks one mode through [`BoilerRequest`].

use adhtc_core::constants::{
    CH4_DENSITY_KG_M3, CP_WATER_KJ_KG_K, H_WATER_INLET_KJ_KG, HOURS_PER_DAY, LHV_METHANE_KJ_KG,
    SECONDS_PER_DAY, SECONDS_PER_HOUR,
};
use adhtc_core::{ensure_finite, ensure_in_range, ensure_non_negative, ensure_positive};
use adhtc_steam::SaturationSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::common::{check_celsius, ratio_or_zero};
use crate::error::EngineResult;

/// Default ambient (feed water) temperature [°C].
pub const DEFAULT_AMBIENT_TEMPERATURE_C: f64 = 25.0;

/// Demand must exceed production by this factor before it counts as insufficient.
pub const INSUFFICIENT_MARGIN: f64 = 1.01;

/// Static-charge boiler parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoilerInput {
    pub water_capacity_kg: f64,
    pub steam_temperature_c: f64,
    pub ambient_temperature_c: f64,
    /// Boiler efficiency [%], 1–99
    pub efficiency_pct: f64,
}

impl BoilerInput {
    /// Charge heated from the default 25 °C ambient.
    pub fn new(water_capacity_kg: f64, steam_temperature_c: f64, efficiency_pct: f64) -> Self {
        Self {
            water_capacity_kg,
            steam_temperature_c,
            ambient_temperature_c: DEFAULT_AMBIENT_TEMPERATURE_C,
            efficiency_pct,
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        ensure_positive(self.water_capacity_kg, "water_capacity_kg")?;
        check_celsius(self.steam_temperature_c, "steam_temperature_c")?;
        check_celsius(self.ambient_temperature_c, "ambient_temperature_c")?;
        ensure_in_range(self.efficiency_pct, 1.0, 99.0, "efficiency_pct", "[1, 99]")?;
        Ok(())
    }
}

/// Continuous-feed boiler parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContinuousBoilerInput {
    pub water_feed_kg_per_hr: f64,
    pub steam_temperature_c: f64,
    /// Boiler efficiency [%], 1–99
    pub efficiency_pct: f64,
    /// Feed water enthalpy [kJ/kg]
    pub feed_water_enthalpy_kj_kg: f64,
}

impl ContinuousBoilerInput {
    pub fn new(water_feed_kg_per_hr: f64, steam_temperature_c: f64, efficiency_pct: f64) -> Self {
        Self {
            water_feed_kg_per_hr,
            steam_temperature_c,
            efficiency_pct,
            feed_water_enthalpy_kj_kg: H_WATER_INLET_KJ_KG,
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        ensure_non_negative(self.water_feed_kg_per_hr, "water_feed_kg_per_hr")?;
        check_celsius(self.steam_temperature_c, "steam_temperature_c")?;
        ensure_in_range(self.efficiency_pct, 1.0, 99.0, "efficiency_pct", "[1, 99]")?;
        ensure_finite(self.feed_water_enthalpy_kj_kg, "feed_water_enthalpy_kj_kg")?;
        Ok(())
    }
}

/// Methane split between the boiler (parasitic) and the collector (available fuel).
///
/// Amounts share whatever unit the caller passed in (kg/day or kg/hr).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MethaneSplit {
    pub boiler: f64,
    pub collector: f64,
    pub boiler_pct: f64,
    pub collector_pct: f64,
    pub insufficient: bool,
}

/// Send up to `demand` of `total` to the boiler and the rest to the collector.
///
/// With no production the split is 0/0 (0 % / 100 %) and `insufficient` is set iff
/// there is any demand. Otherwise `insufficient` needs demand above 101 % of
/// production, which keeps rounding noise from raising the flag.
pub fn partition_methane(total: f64, demand: f64) -> MethaneSplit {
    if total <= 0.0 {
        return MethaneSplit {
            boiler: 0.0,
            collector: 0.0,
            boiler_pct: 0.0,
            collector_pct: 100.0,
            insufficient: demand > 0.0,
        };
    }

    let boiler = demand.min(total);
    let collector = total - boiler;
    MethaneSplit {
        boiler,
        collector,
        boiler_pct: boiler / total * 100.0,
        collector_pct: collector / total * 100.0,
        insufficient: demand > total * INSUFFICIENT_MARGIN,
    }
}

/// Static-charge boiler result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoilerResult {
    /// Saturated liquid enthalpy at the steam temperature [kJ/kg]
    pub h_f_kj_kg: f64,
    /// Saturated vapour enthalpy at the steam temperature [kJ/kg]
    pub h_g_kj_kg: f64,
    pub q_sensible_kj: f64,
    pub q_latent_kj: f64,
    pub q_startup_kj: f64,
    /// One-time methane needed to raise the charge to steam [kg]
    pub methane_needed_kg: f64,
    /// Methane produced by AD per day [kg/day]
    pub methane_per_day_kg: f64,
    pub startup_time_minutes: f64,
    pub boiler_kg_per_day: f64,
    pub collector_kg_per_day: f64,
    pub boiler_pct: f64,
    pub collector_pct: f64,
    pub insufficient: bool,
}

/// Sensible + latent energy to bring the charge to saturated steam [kJ].
pub fn startup_energy_kj(input: &BoilerInput, source: &dyn SaturationSource) -> (f64, f64, f64, f64) {
    let h_f = source.liquid_enthalpy(input.steam_temperature_c);
    let h_g = source.vapor_enthalpy(input.steam_temperature_c);
    let q_sensible = input.water_capacity_kg
        * CP_WATER_KJ_KG_K
        * (input.steam_temperature_c - input.ambient_temperature_c);
    let q_latent = input.water_capacity_kg * (h_g - h_f);
    (h_f, h_g, q_sensible, q_latent)
}

/// Methane mass whose heat, at `efficiency_pct`, delivers `q_kj` [kg].
pub fn methane_for_heat_kg(q_kj: f64, efficiency_pct: f64) -> f64 {
    if efficiency_pct <= 0.0 {
        return 0.0;
    }
    q_kj / (LHV_METHANE_KJ_KG * (efficiency_pct / 100.0))
}

/// Minutes to deliver `q_kj` if the daily methane burns continuously.
pub fn time_to_steam_minutes(q_kj: f64, methane_per_day_kg: f64, efficiency_pct: f64) -> f64 {
    if methane_per_day_kg <= 0.0 || efficiency_pct <= 0.0 {
        return 0.0;
    }
    let methane_kg_s = methane_per_day_kg / SECONDS_PER_DAY;
    let power_kw = methane_kg_s * LHV_METHANE_KJ_KG * (efficiency_pct / 100.0);
    ratio_or_zero(q_kj, power_kw) / 60.0
}

/// Static-charge balance against the AD's average daily methane volume.
pub fn evaluate_boiler(
    input: &BoilerInput,
    avg_daily_methane_m3: f64,
    source: &dyn SaturationSource,
) -> BoilerResult {
    let (h_f, h_g, q_sensible_kj, q_latent_kj) = startup_energy_kj(input, source);
    let q_startup_kj = q_sensible_kj + q_latent_kj;

    let methane_needed_kg = methane_for_heat_kg(q_startup_kj, input.efficiency_pct);
    let methane_per_day_kg = avg_daily_methane_m3 * CH4_DENSITY_KG_M3;
    let startup_time_minutes =
        time_to_steam_minutes(q_startup_kj, methane_per_day_kg, input.efficiency_pct);

    let split = partition_methane(methane_per_day_kg, methane_needed_kg);
    if split.insufficient {
        warn!(
            needed_kg = methane_needed_kg,
            available_kg_per_day = methane_per_day_kg,
            "boiler start-up needs more methane than AD produces per day"
        );
    }

    debug!(
        source = source.name(),
        q_startup_kj, methane_needed_kg, "static-charge boiler evaluated"
    );

    BoilerResult {
        h_f_kj_kg: h_f,
        h_g_kj_kg: h_g,
        q_sensible_kj,
        q_latent_kj,
        q_startup_kj,
        methane_needed_kg,
        methane_per_day_kg,
        startup_time_minutes,
        boiler_kg_per_day: split.boiler,
        collector_kg_per_day: split.collector,
        boiler_pct: split.boiler_pct,
        collector_pct: split.collector_pct,
        insufficient: split.insufficient,
    }
}

/// Continuous-feed boiler result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContinuousBoilerResult {
    pub heat_load_kw: f64,
    pub delta_h_kj_kg: f64,
    pub methane_demand_kg_hr: f64,
    pub total_methane_kg_hr: f64,
    pub boiler_kg_hr: f64,
    pub collector_kg_hr: f64,
    pub boiler_pct: f64,
    pub collector_pct: f64,
    pub insufficient: bool,
}

/// Continuous-feed balance against the AD's average daily methane volume.
pub fn evaluate_continuous_boiler(
    input: &ContinuousBoilerInput,
    avg_daily_methane_m3: f64,
    source: &dyn SaturationSource,
) -> ContinuousBoilerResult {
    let h_steam = source.vapor_enthalpy(input.steam_temperature_c);
    let delta_h_kj_kg = h_steam - input.feed_water_enthalpy_kj_kg;
    let heat_load_kw = input.water_feed_kg_per_hr * delta_h_kj_kg / SECONDS_PER_HOUR;

    let methane_demand_kg_hr =
        methane_for_heat_kg(heat_load_kw * SECONDS_PER_HOUR, input.efficiency_pct);
    let total_methane_kg_hr = avg_daily_methane_m3 * CH4_DENSITY_KG_M3 / HOURS_PER_DAY;

    let split = partition_methane(total_methane_kg_hr, methane_demand_kg_hr);
    if split.insufficient {
        warn!(
            demand_kg_hr = methane_demand_kg_hr,
            production_kg_hr = total_methane_kg_hr,
            "boiler demand exceeds AD methane production"
        );
    }

    debug!(heat_load_kw, methane_demand_kg_hr, "continuous-flow boiler evaluated");

    ContinuousBoilerResult {
        heat_load_kw,
        delta_h_kj_kg,
        methane_demand_kg_hr,
        total_methane_kg_hr,
        boiler_kg_hr: split.boiler,
        collector_kg_hr: split.collector,
        boiler_pct: split.boiler_pct,
        collector_pct: split.collector_pct,
        insufficient: split.insufficient,
    }
}

/// Boiler operating mode selected by a deployment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoilerRequest {
    StaticCharge(BoilerInput),
    ContinuousFlow(ContinuousBoilerInput),
}

impl BoilerRequest {
    pub fn validate(&self) -> EngineResult<()> {
        match self {
            BoilerRequest::StaticCharge(input) => input.validate(),
            BoilerRequest::ContinuousFlow(input) => input.validate(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BoilerOutcome {
    StaticCharge(BoilerResult),
    ContinuousFlow(ContinuousBoilerResult),
}

impl BoilerOutcome {
    pub fn insufficient(&self) -> bool {
        match self {
            BoilerOutcome::StaticCharge(r) => r.insufficient,
            BoilerOutcome::ContinuousFlow(r) => r.insufficient,
        }
    }

    pub fn as_static(&self) -> Option<&BoilerResult> {
        match self {
            BoilerOutcome::StaticCharge(r) => Some(r),
            BoilerOutcome::ContinuousFlow(_) => None,
        }
    }
}

pub fn evaluate_boiler_request(
    request: &BoilerRequest,
    avg_daily_methane_m3: f64,
    source: &dyn SaturationSource,
) -> BoilerOutcome {
    match request {
        BoilerRequest::StaticCharge(input) => {
            BoilerOutcome::StaticCharge(evaluate_boiler(input, avg_daily_methane_m3, source))
        }
        BoilerRequest::ContinuousFlow(input) => BoilerOutcome::ContinuousFlow(
            evaluate_continuous_boiler(input, avg_daily_methane_m3, source),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adhtc_steam::BuiltinSaturation;

    fn scenario_b() -> BoilerInput {
        BoilerInput {
            water_capacity_kg: 200.0,
            steam_temperature_c: 180.0,
            ambient_temperature_c: 25.0,
            efficiency_pct: 85.0,
        }
    }

    #[test]
    fn scenario_b_startup_energy() {
        let r = evaluate_boiler(&scenario_b(), 10.0, &BuiltinSaturation);
        assert!((r.q_sensible_kj - 129_580.0).abs() < 1e-6);
        assert!((r.q_latent_kj - 403_000.0).abs() < 1e-6);
        assert!((r.q_startup_kj - 532_580.0).abs() < 1e-6);
        assert!((r.methane_needed_kg - 532_580.0 / (50_000.0 * 0.85)).abs() < 1e-9);
        assert!((r.methane_needed_kg - 12.53).abs() < 0.01);
    }

    #[test]
    fn daily_split_caps_boiler_share() {
        // 10 m³/day -> 6.57 kg/day, less than the 12.5 kg start-up need
        let r = evaluate_boiler(&scenario_b(), 10.0, &BuiltinSaturation);
        assert!((r.methane_per_day_kg - 6.57).abs() < 1e-9);
        assert_eq!(r.boiler_kg_per_day, r.methane_per_day_kg);
        assert_eq!(r.collector_kg_per_day, 0.0);
        assert_eq!(r.boiler_pct, 100.0);
        assert!(r.insufficient);

        // 100 m³/day -> 65.7 kg/day, plenty
        let r = evaluate_boiler(&scenario_b(), 100.0, &BuiltinSaturation);
        assert_eq!(r.boiler_kg_per_day, r.methane_needed_kg);
        assert!((r.boiler_pct + r.collector_pct - 100.0).abs() < 1e-9);
        assert!(!r.insufficient);
    }

    #[test]
    fn time_to_steam() {
        // 86.4 kg/day = 1 g/s -> 50 kW × 0.85 = 42.5 kW
        let minutes = time_to_steam_minutes(42.5 * 60.0, 86.4, 85.0);
        assert!((minutes - 1.0).abs() < 1e-9);
        assert_eq!(time_to_steam_minutes(1000.0, 0.0, 85.0), 0.0);
        assert_eq!(time_to_steam_minutes(1000.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn no_production_gives_zero_split() {
        let r = evaluate_boiler(&scenario_b(), 0.0, &BuiltinSaturation);
        assert_eq!(r.methane_per_day_kg, 0.0);
        assert_eq!(r.boiler_kg_per_day, 0.0);
        assert_eq!(r.collector_kg_per_day, 0.0);
        assert_eq!(r.boiler_pct, 0.0);
        assert_eq!(r.collector_pct, 100.0);
        assert_eq!(r.startup_time_minutes, 0.0);
        assert!(r.insufficient);
    }

    #[test]
    fn zero_efficiency_needs_no_methane() {
        assert_eq!(methane_for_heat_kg(1000.0, 0.0), 0.0);
    }

    #[test]
    fn scenario_c_partition_without_production() {
        let split = partition_methane(0.0, 2.0);
        assert_eq!(split.boiler, 0.0);
        assert_eq!(split.collector, 0.0);
        assert_eq!(split.collector_pct, 100.0);
        assert!(split.insufficient);

        let split = partition_methane(0.0, 0.0);
        assert!(!split.insufficient);
    }

    #[test]
    fn insufficient_needs_one_percent_margin() {
        assert!(!partition_methane(100.0, 100.5).insufficient);
        assert!(partition_methane(100.0, 101.5).insufficient);
    }

    #[test]
    fn continuous_flow_balance() {
        let input = ContinuousBoilerInput::new(100.0, 180.0, 85.0);
        let r = evaluate_continuous_boiler(&input, 1000.0, &BuiltinSaturation);
        assert!((r.delta_h_kj_kg - (2778.0 - 105.0)).abs() < 1e-9);
        assert!((r.heat_load_kw - 100.0 * 2673.0 / 3600.0).abs() < 1e-9);
        let demand = r.heat_load_kw * 3600.0 / (50_000.0 * 0.85);
        assert!((r.methane_demand_kg_hr - demand).abs() < 1e-12);
        assert!((r.total_methane_kg_hr - 1000.0 * 0.657 / 24.0).abs() < 1e-12);
        assert!(!r.insufficient);
    }

    #[test]
    fn request_dispatches_by_mode() {
        let request = BoilerRequest::ContinuousFlow(ContinuousBoilerInput::new(50.0, 160.0, 80.0));
        assert!(request.validate().is_ok());
        let outcome = evaluate_boiler_request(&request, 0.0, &BuiltinSaturation);
        assert!(outcome.as_static().is_none());
        assert!(outcome.insufficient());

        let request = BoilerRequest::StaticCharge(scenario_b());
        let outcome = evaluate_boiler_request(&request, 100.0, &BuiltinSaturation);
        assert!(outcome.as_static().is_some());
    }

    #[test]
    fn validation_bounds() {
        assert!(scenario_b().validate().is_ok());
        let bad = BoilerInput {
            efficiency_pct: 0.0,
            ..scenario_b()
        };
        assert!(bad.validate().is_err());
        let bad = BoilerInput {
            water_capacity_kg: 0.0,
            ..scenario_b()
        };
        assert!(bad.validate().is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn boiler_share_never_exceeds_production(total in 0.0_f64..1e4, demand in 0.0_f64..1e4) {
            let split = partition_methane(total, demand);
            prop_assert!(split.boiler <= total.max(0.0));
            if total > 0.0 {
                prop_assert!((split.boiler_pct + split.collector_pct - 100.0).abs() < 1e-9);
            }
        }
    }
}
