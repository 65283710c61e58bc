//! Brayton power cycle: compressor, combustor, turbine, generator.

use adhtc_core::{CoreError, c_to_k, ensure_finite, ensure_non_negative, ensure_positive, k_to_c};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::{check_celsius, check_fraction};
use crate::error::EngineResult;

pub const GAMMA_AIR: f64 = 1.4;
pub const GAMMA_GAS: f64 = 1.33;
/// [kJ/(kg·K)]
pub const CP_AIR: f64 = 1.005;
/// [kJ/(kg·K)]
pub const CP_GAS: f64 = 1.15;
/// Biogas energy per unit volume used for the fuel input [kJ/m³].
pub const BIOGAS_ENERGY_KJ_M3: f64 = 21_500.0;
/// Volatile matter energy per unit mass [kJ/kg].
pub const VOLATILE_ENERGY_KJ_KG: f64 = 4_000.0;

/// Gas turbine parameters. Efficiencies are fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerCycleInput {
    pub air_mass_flow_kg_s: f64,
    pub pressure_ratio: f64,
    pub eta_compressor: f64,
    pub eta_turbine: f64,
    pub eta_generator: f64,
    pub ambient_temperature_c: f64,
}

impl Default for PowerCycleInput {
    fn default() -> Self {
        Self {
            air_mass_flow_kg_s: 0.5,
            pressure_ratio: 10.0,
            eta_compressor: 0.75,
            eta_turbine: 0.85,
            eta_generator: 0.94,
            ambient_temperature_c: 25.0,
        }
    }
}

impl PowerCycleInput {
    pub fn validate(&self) -> EngineResult<()> {
        ensure_positive(self.air_mass_flow_kg_s, "air_mass_flow_kg_s")?;
        ensure_finite(self.pressure_ratio, "pressure_ratio")?;
        if self.pressure_ratio <= 1.0 {
            return Err(CoreError::OutOfRange {
                what: "pressure_ratio",
                value: self.pressure_ratio,
                expected: "> 1",
            }
            .into());
        }
        check_fraction(self.eta_compressor, "eta_compressor")?;
        check_fraction(self.eta_turbine, "eta_turbine")?;
        check_fraction(self.eta_generator, "eta_generator")?;
        check_celsius(self.ambient_temperature_c, "ambient_temperature_c")?;
        Ok(())
    }
}

/// Brayton state temperatures and powers. `net_power_kwe` may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerCycleResult {
    pub t1_c: f64,
    pub t2_c: f64,
    pub t3_c: f64,
    pub t4_c: f64,
    pub w_comp_kw: f64,
    pub w_turb_kw: f64,
    pub net_power_kwe: f64,
    pub thermal_input_kw: f64,
    pub pressure_ratio: f64,
}

/// Fuel power from the total biogas volume and volatile mass [kW].
///
/// Spreads the biogas energy over a day in minutes and the volatile energy over an hour
/// in minutes; both are fixed-rate approximations.
pub fn thermal_input_kw(biogas_vol_m3: f64, volatile_mass_kg: f64) -> f64 {
    biogas_vol_m3 * BIOGAS_ENERGY_KJ_M3 / 1440.0 + volatile_mass_kg * VOLATILE_ENERGY_KJ_KG / 60.0
}

pub fn evaluate_power_cycle(
    input: &PowerCycleInput,
    biogas_vol_m3: f64,
    volatile_mass_kg: f64,
) -> PowerCycleResult {
    let m_air = input.air_mass_flow_kg_s;
    let pr = input.pressure_ratio;

    // Compressor
    let t1 = c_to_k(input.ambient_temperature_c);
    let t2s = t1 * pr.powf((GAMMA_AIR - 1.0) / GAMMA_AIR);
    let t2 = t1 + (t2s - t1) / input.eta_compressor;
    let w_comp_kw = m_air * CP_AIR * (t2 - t1);

    // Combustor
    let q_in_kw = thermal_input_kw(biogas_vol_m3, volatile_mass_kg);
    let t3 = t2 + q_in_kw / (m_air * CP_GAS);

    // Turbine
    let t4s = t3 / pr.powf((GAMMA_GAS - 1.0) / GAMMA_GAS);
    let t4 = t3 - input.eta_turbine * (t3 - t4s);
    let w_turb_kw = m_air * CP_GAS * (t3 - t4);

    let net_power_kwe = (w_turb_kw - w_comp_kw) * input.eta_generator;

    debug!(q_in_kw, w_comp_kw, w_turb_kw, net_power_kwe, "power cycle evaluated");

    PowerCycleResult {
        t1_c: input.ambient_temperature_c,
        t2_c: k_to_c(t2),
        t3_c: k_to_c(t3),
        t4_c: k_to_c(t4),
        w_comp_kw,
        w_turb_kw,
        net_power_kwe,
        thermal_input_kw: q_in_kw,
        pressure_ratio: pr,
    }
}

/// Fuel inputs must be non-negative; the pipeline passes kinetics outputs straight in.
pub fn validate_fuel(biogas_vol_m3: f64, volatile_mass_kg: f64) -> EngineResult<()> {
    ensure_non_negative(biogas_vol_m3, "biogas_vol_m3")?;
    ensure_non_negative(volatile_mass_kg, "volatile_mass_kg")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_d_no_fuel_is_parasitic() {
        let input = PowerCycleInput::default();
        input.validate().unwrap();
        let r = evaluate_power_cycle(&input, 0.0, 0.0);

        assert_eq!(r.thermal_input_kw, 0.0);
        assert_eq!(r.t3_c, r.t2_c);
        assert!(r.w_comp_kw > 0.0);
        assert!(r.net_power_kwe < 0.0);
    }

    #[test]
    fn compressor_exit_temperature() {
        let input = PowerCycleInput::default();
        let r = evaluate_power_cycle(&input, 0.0, 0.0);
        let t1 = 298.15;
        let t2s = t1 * 10.0_f64.powf(0.4 / 1.4);
        let t2 = t1 + (t2s - t1) / 0.75;
        assert!((r.t2_c - (t2 - 273.15)).abs() < 1e-9);
        assert!((r.w_comp_kw - 0.5 * 1.005 * (t2 - t1)).abs() < 1e-9);
    }

    #[test]
    fn net_power_identity() {
        let input = PowerCycleInput::default();
        let r = evaluate_power_cycle(&input, 500.0, 20.0);
        let expected = (r.w_turb_kw - r.w_comp_kw) * input.eta_generator;
        assert!((r.net_power_kwe - expected).abs() < 1e-9);
        assert!(r.t3_c > r.t2_c);
        assert!(r.t4_c < r.t3_c);
    }

    #[test]
    fn fuel_power_conversion() {
        assert!((thermal_input_kw(1440.0, 0.0) - 21_500.0).abs() < 1e-9);
        assert!((thermal_input_kw(0.0, 60.0) - 4_000.0).abs() < 1e-9);
    }

    #[test]
    fn more_fuel_means_more_power() {
        let input = PowerCycleInput::default();
        let low = evaluate_power_cycle(&input, 100.0, 0.0);
        let high = evaluate_power_cycle(&input, 1000.0, 0.0);
        assert!(high.net_power_kwe > low.net_power_kwe);
    }

    #[test]
    fn validation_bounds() {
        let bad = PowerCycleInput {
            pressure_ratio: 1.0,
            ..PowerCycleInput::default()
        };
        assert!(bad.validate().is_err());
        let bad = PowerCycleInput {
            air_mass_flow_kg_s: 0.0,
            ..PowerCycleInput::default()
        };
        assert!(bad.validate().is_err());
        let bad = PowerCycleInput {
            eta_turbine: 1.5,
            ..PowerCycleInput::default()
        };
        assert!(bad.validate().is_err());
        assert!(validate_fuel(-1.0, 0.0).is_err());
    }
}
