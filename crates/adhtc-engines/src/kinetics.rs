//! Kinetics & yield engine: water dilution, AD/HTC split, Arrhenius rate, methane yield.

use adhtc_core::constants::{CH4_DENSITY_KG_M3, LHV_BIOGAS_MJ_M3, R_GAS, SECONDS_PER_DAY};
use adhtc_core::{c_to_k, ensure_finite, ensure_in_range, ensure_non_negative};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::{check_celsius, is_usable_duration};
use crate::error::EngineResult;

/// Pre-exponential factor A [1/day].
pub const DEFAULT_PRE_EXPONENTIAL_PER_DAY: f64 = 1e10;
/// Activation energy Ea [J/mol].
pub const DEFAULT_ACTIVATION_ENERGY_J_MOL: f64 = 60_000.0;

/// Fraction of dry matter that is volatile (biodegradable).
pub const VS_FRACTION: f64 = 0.80;
/// Specific methane yield [m³ CH4 per kg VS].
pub const SPECIFIC_METHANE_YIELD_M3_KG: f64 = 0.35;
/// Peak daily production over average daily production at maturity.
pub const PEAK_TO_AVG_FACTOR: f64 = 1.5;
/// Reported, not computed.
pub const DEFAULT_METHANE_PURITY: f64 = 0.60;
/// Final total solids above this risk blocking the digester [%].
pub const HIGH_SOLIDS_WARNING_PCT: f64 = 12.0;
/// Share of AD dry matter released as combustible volatiles.
pub const VOLATILE_YIELD_FRACTION: f64 = 0.3;
/// Retention assumed for the volatile yield when the kinetics give none [days].
pub const FALLBACK_RETENTION_DAYS: f64 = 30.0;

/// Raw feedstock as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedstockInput {
    /// Biomass mass flow [kg/s]
    pub mass_flow_kg_s: f64,
    /// Intrinsic moisture of the biomass [%]
    pub moisture_pct: f64,
    /// kg of water added per kg of biomass
    pub added_water_ratio: f64,
    /// Digester (surrounding) temperature [°C]
    pub temperature_c: f64,
}

impl FeedstockInput {
    /// Dry matter share of the raw biomass [%]; complements `moisture_pct` exactly.
    pub fn dry_matter_pct(&self) -> f64 {
        100.0 - self.moisture_pct
    }

    pub fn validate(&self) -> EngineResult<()> {
        ensure_non_negative(self.mass_flow_kg_s, "mass_flow_kg_s")?;
        ensure_in_range(self.moisture_pct, 0.0, 100.0, "moisture_pct", "[0, 100]")?;
        ensure_non_negative(self.added_water_ratio, "added_water_ratio")?;
        check_celsius(self.temperature_c, "temperature_c")?;
        Ok(())
    }
}

/// Arrhenius parameters for the digestion rate constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrheniusParams {
    /// A [1/day]
    pub pre_exponential_per_day: f64,
    /// Ea [J/mol]
    pub activation_energy_j_per_mol: f64,
}

impl Default for ArrheniusParams {
    fn default() -> Self {
        Self {
            pre_exponential_per_day: DEFAULT_PRE_EXPONENTIAL_PER_DAY,
            activation_energy_j_per_mol: DEFAULT_ACTIVATION_ENERGY_J_MOL,
        }
    }
}

impl ArrheniusParams {
    pub fn validate(&self) -> EngineResult<()> {
        ensure_finite(self.pre_exponential_per_day, "pre_exponential_per_day")?;
        ensure_finite(self.activation_energy_j_per_mol, "activation_energy_j_per_mol")?;
        Ok(())
    }
}

/// Slurry after mixing the feedstock with dilution water.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlurryBalance {
    pub added_water_kg_s: f64,
    pub total_slurry_kg_s: f64,
    pub final_total_solids_pct: f64,
    /// True iff `final_total_solids_pct > 12.0`
    pub high_solids_warning: bool,
}

/// Methane produced by the AD stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MethaneYield {
    pub avg_daily_m3: f64,
    pub peak_daily_m3: f64,
    /// Gas produced over one retention period [m³]
    pub v_total_m3: f64,
    pub methane_mass_kg: f64,
}

/// Everything the kinetics engine derives from one feedstock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KineticsResult {
    pub slurry: SlurryBalance,
    /// Routed to anaerobic digestion
    pub moisture_rich_kg_s: f64,
    /// Routed to hydrothermal carbonization
    pub moisture_lean_kg_s: f64,
    pub k_per_day: f64,
    /// 1/k, or +∞ when k <= 0
    pub days_to_maturity: f64,
    pub reactor_mass_kg: f64,
    pub avg_daily_m3: f64,
    pub peak_daily_m3: f64,
    pub v_total_m3: f64,
    pub methane_mass_kg: f64,
    pub ignition_power_kw: f64,
    pub methane_purity: f64,
    /// Combustible volatiles released over one retention period [kg]
    pub volatile_yield_kg: f64,
}

/// Mix biomass with water at `added_water_ratio` kg water per kg biomass.
///
/// A non-positive slurry flow returns zero added water and the unmodified dry-matter
/// percentage instead of dividing by zero.
pub fn water_dilution_mass_balance(
    mass_flow_kg_s: f64,
    dry_matter_pct: f64,
    added_water_ratio: f64,
) -> SlurryBalance {
    let added_water_kg_s = mass_flow_kg_s * added_water_ratio;
    let total_slurry_kg_s = mass_flow_kg_s + added_water_kg_s;

    if total_slurry_kg_s <= 0.0 {
        return SlurryBalance {
            added_water_kg_s: 0.0,
            total_slurry_kg_s: mass_flow_kg_s,
            final_total_solids_pct: dry_matter_pct,
            high_solids_warning: dry_matter_pct > HIGH_SOLIDS_WARNING_PCT,
        };
    }

    let dry_matter_kg_s = mass_flow_kg_s * (dry_matter_pct / 100.0);
    let final_total_solids_pct = dry_matter_kg_s / total_slurry_kg_s * 100.0;

    SlurryBalance {
        added_water_kg_s,
        total_slurry_kg_s,
        final_total_solids_pct,
        high_solids_warning: final_total_solids_pct > HIGH_SOLIDS_WARNING_PCT,
    }
}

/// Split the raw feedstock (not the slurry) into (AD, HTC) streams by moisture.
pub fn partition_feedstock(mass_flow_kg_s: f64, moisture_pct: f64) -> (f64, f64) {
    let f_moisture = moisture_pct / 100.0;
    let moisture_rich = mass_flow_kg_s * f_moisture;
    let moisture_lean = mass_flow_kg_s * (1.0 - f_moisture);
    (moisture_rich, moisture_lean)
}

/// k = A · exp(-Ea / (R · T)) [1/day].
pub fn rate_constant_per_day(params: &ArrheniusParams, t_k: f64) -> f64 {
    params.pre_exponential_per_day * (-params.activation_energy_j_per_mol / (R_GAS * t_k)).exp()
}

pub fn days_to_maturity(k_per_day: f64) -> f64 {
    if k_per_day <= 0.0 {
        f64::INFINITY
    } else {
        1.0 / k_per_day
    }
}

/// Slurry held in the reactor over one retention period [kg].
pub fn reactor_mass_kg(total_slurry_kg_s: f64, retention_days: f64) -> f64 {
    if !is_usable_duration(retention_days) {
        return 0.0;
    }
    total_slurry_kg_s * retention_days * SECONDS_PER_DAY
}

/// Dry matter -> volatile solids -> methane volume -> methane mass, AD stream only.
pub fn methane_production(
    moisture_rich_kg_s: f64,
    moisture_pct: f64,
    retention_days: f64,
) -> MethaneYield {
    let dry_matter_kg_s = moisture_rich_kg_s * (1.0 - moisture_pct / 100.0);
    let volatile_solids_kg_s = dry_matter_kg_s * VS_FRACTION;
    let avg_daily_m3 = volatile_solids_kg_s * SECONDS_PER_DAY * SPECIFIC_METHANE_YIELD_M3_KG;
    let peak_daily_m3 = avg_daily_m3 * PEAK_TO_AVG_FACTOR;

    let v_total_m3 = if is_usable_duration(retention_days) {
        avg_daily_m3 * retention_days
    } else {
        0.0
    };

    MethaneYield {
        avg_daily_m3,
        peak_daily_m3,
        v_total_m3,
        methane_mass_kg: v_total_m3 * CH4_DENSITY_KG_M3,
    }
}

/// Thermal power of the peak gas flow burned at the biogas LHV [kW].
pub fn ignition_power_kw(peak_daily_m3: f64) -> f64 {
    let peak_m3_per_s = peak_daily_m3 / SECONDS_PER_DAY;
    // m³/s × MJ/m³ = MW
    peak_m3_per_s * LHV_BIOGAS_MJ_M3 * 1000.0
}

/// Combustible volatiles released by the AD dry matter over one retention period [kg].
pub fn volatile_yield_kg(moisture_rich_kg_s: f64, moisture_pct: f64, retention_days: f64) -> f64 {
    let dry_matter_kg_s = moisture_rich_kg_s * (1.0 - moisture_pct / 100.0);
    let days = if retention_days.is_finite() {
        retention_days
    } else {
        FALLBACK_RETENTION_DAYS
    };
    dry_matter_kg_s * days * SECONDS_PER_DAY * VOLATILE_YIELD_FRACTION
}

/// Kinetics with the default Arrhenius parameters.
pub fn evaluate_kinetics(feed: &FeedstockInput) -> KineticsResult {
    evaluate_kinetics_with(feed, &ArrheniusParams::default())
}

/// Full kinetics pass in one eager evaluation.
pub fn evaluate_kinetics_with(feed: &FeedstockInput, params: &ArrheniusParams) -> KineticsResult {
    let slurry = water_dilution_mass_balance(
        feed.mass_flow_kg_s,
        feed.dry_matter_pct(),
        feed.added_water_ratio,
    );
    let (moisture_rich_kg_s, moisture_lean_kg_s) =
        partition_feedstock(feed.mass_flow_kg_s, feed.moisture_pct);

    let k_per_day = rate_constant_per_day(params, c_to_k(feed.temperature_c));
    let days = days_to_maturity(k_per_day);
    let reactor_mass_kg = reactor_mass_kg(slurry.total_slurry_kg_s, days);

    let methane = methane_production(moisture_rich_kg_s, feed.moisture_pct, days);

    let result = KineticsResult {
        slurry,
        moisture_rich_kg_s,
        moisture_lean_kg_s,
        k_per_day,
        days_to_maturity: days,
        reactor_mass_kg,
        avg_daily_m3: methane.avg_daily_m3,
        peak_daily_m3: methane.peak_daily_m3,
        v_total_m3: methane.v_total_m3,
        methane_mass_kg: methane.methane_mass_kg,
        ignition_power_kw: ignition_power_kw(methane.peak_daily_m3),
        methane_purity: DEFAULT_METHANE_PURITY,
        volatile_yield_kg: volatile_yield_kg(moisture_rich_kg_s, feed.moisture_pct, days),
    };

    debug!(
        k_per_day = result.k_per_day,
        days = result.days_to_maturity,
        avg_daily_m3 = result.avg_daily_m3,
        "kinetics evaluated"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use adhtc_core::{Tolerances, nearly_equal};

    fn cattle_60_kg_per_day() -> FeedstockInput {
        FeedstockInput {
            mass_flow_kg_s: 60.0 / 86_400.0,
            moisture_pct: 94.0,
            added_water_ratio: 0.0,
            temperature_c: 25.0,
        }
    }

    #[test]
    fn dilution_adds_water_and_lowers_solids() {
        // Agricultural residue: 85 % dry matter, 1:2 water
        let s = water_dilution_mass_balance(1.0, 85.0, 2.0);
        assert_eq!(s.added_water_kg_s, 2.0);
        assert_eq!(s.total_slurry_kg_s, 3.0);
        assert!((s.final_total_solids_pct - 85.0 / 3.0).abs() < 1e-12);
        assert!(s.high_solids_warning);
    }

    #[test]
    fn dilution_degenerate_flow_keeps_dry_matter() {
        let s = water_dilution_mass_balance(0.0, 6.0, 2.0);
        assert_eq!(s.added_water_kg_s, 0.0);
        assert_eq!(s.total_slurry_kg_s, 0.0);
        assert_eq!(s.final_total_solids_pct, 6.0);
        assert!(!s.high_solids_warning);
    }

    #[test]
    fn high_solids_boundary_is_exclusive() {
        // 12 % dry matter, no dilution -> exactly 12 %
        let s = water_dilution_mass_balance(1.0, 12.0, 0.0);
        assert!((s.final_total_solids_pct - 12.0).abs() < 1e-12);
        assert!(!s.high_solids_warning);

        let s = water_dilution_mass_balance(1.0, 12.5, 0.0);
        assert!(s.high_solids_warning);
    }

    #[test]
    fn partition_ignores_dilution() {
        let feed = FeedstockInput {
            added_water_ratio: 3.0,
            ..cattle_60_kg_per_day()
        };
        let r = evaluate_kinetics(&feed);
        assert!((r.moisture_rich_kg_s - 0.94 * feed.mass_flow_kg_s).abs() < 1e-15);
        assert!(r.slurry.total_slurry_kg_s > feed.mass_flow_kg_s);
    }

    #[test]
    fn scenario_cattle_at_25c() {
        let feed = cattle_60_kg_per_day();
        let r = evaluate_kinetics(&feed);

        let k = 1e10 * (-60_000.0 / (8.314 * 298.15_f64)).exp();
        let tol = Tolerances::default();
        assert!(nearly_equal(r.k_per_day, k, tol));
        assert!(nearly_equal(r.days_to_maturity, 1.0 / k, tol));
        assert!(nearly_equal(r.moisture_rich_kg_s, 0.94 * (60.0 / 86_400.0), tol));
        assert_eq!(r.methane_purity, 0.60);
    }

    #[test]
    fn methane_chain_values() {
        // 60 kg/day of 94 % moisture, all to AD, 10-day retention
        let rich = 60.0 / 86_400.0;
        let y = methane_production(rich, 94.0, 10.0);
        // 60 × 0.06 × 0.8 × 0.35 = 1.008 m³/day
        assert!((y.avg_daily_m3 - 1.008).abs() < 1e-9);
        assert!((y.peak_daily_m3 - 1.512).abs() < 1e-9);
        assert!((y.v_total_m3 - 10.08).abs() < 1e-9);
        assert!((y.methane_mass_kg - 10.08 * 0.657).abs() < 1e-9);
    }

    #[test]
    fn infinite_retention_zeroes_totals() {
        let y = methane_production(1.0, 50.0, f64::INFINITY);
        assert!(y.avg_daily_m3 > 0.0);
        assert_eq!(y.v_total_m3, 0.0);
        assert_eq!(y.methane_mass_kg, 0.0);
        assert_eq!(reactor_mass_kg(1.0, f64::INFINITY), 0.0);
        assert_eq!(reactor_mass_kg(1.0, 0.0), 0.0);
    }

    #[test]
    fn non_positive_rate_means_never_matures() {
        assert_eq!(days_to_maturity(0.0), f64::INFINITY);
        assert_eq!(days_to_maturity(-1.0), f64::INFINITY);
        assert_eq!(days_to_maturity(0.5), 2.0);

        let params = ArrheniusParams {
            pre_exponential_per_day: 0.0,
            ..ArrheniusParams::default()
        };
        let r = evaluate_kinetics_with(&cattle_60_kg_per_day(), &params);
        assert_eq!(r.k_per_day, 0.0);
        assert!(r.days_to_maturity.is_infinite());
        assert_eq!(r.reactor_mass_kg, 0.0);
        assert_eq!(r.v_total_m3, 0.0);
        // Volatile yield falls back to a 30-day retention
        let dm = r.moisture_rich_kg_s * 0.06;
        assert!((r.volatile_yield_kg - dm * 30.0 * 86_400.0 * 0.3).abs() < 1e-9);
    }

    #[test]
    fn ignition_power_from_peak_flow() {
        // 86 400 m³/day = 1 m³/s at 21 MJ/m³ = 21 MW
        assert!((ignition_power_kw(86_400.0) - 21_000.0).abs() < 1e-9);
        assert_eq!(ignition_power_kw(0.0), 0.0);
    }

    #[test]
    fn zero_flow_is_not_a_crash() {
        let feed = FeedstockInput {
            mass_flow_kg_s: 0.0,
            ..cattle_60_kg_per_day()
        };
        let r = evaluate_kinetics(&feed);
        assert_eq!(r.moisture_rich_kg_s, 0.0);
        assert_eq!(r.avg_daily_m3, 0.0);
        assert_eq!(r.reactor_mass_kg, 0.0);
        assert_eq!(r.ignition_power_kw, 0.0);
    }

    #[test]
    fn validation_rejects_structural_errors() {
        assert!(cattle_60_kg_per_day().validate().is_ok());

        let bad = FeedstockInput {
            mass_flow_kg_s: -1.0,
            ..cattle_60_kg_per_day()
        };
        assert!(bad.validate().is_err());

        let bad = FeedstockInput {
            moisture_pct: 101.0,
            ..cattle_60_kg_per_day()
        };
        assert!(bad.validate().is_err());

        let bad = FeedstockInput {
            added_water_ratio: -0.5,
            ..cattle_60_kg_per_day()
        };
        assert!(bad.validate().is_err());

        assert!(ArrheniusParams::default().validate().is_ok());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use adhtc_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    fn feed() -> impl Strategy<Value = FeedstockInput> {
        (0.0_f64..500.0, 0.0_f64..=100.0, 0.0_f64..5.0, -10.0_f64..60.0).prop_map(
            |(mass_flow_kg_s, moisture_pct, added_water_ratio, temperature_c)| FeedstockInput {
                mass_flow_kg_s,
                moisture_pct,
                added_water_ratio,
                temperature_c,
            },
        )
    }

    proptest! {
        #[test]
        fn partition_sums_to_feed(f in feed()) {
            let r = evaluate_kinetics(&f);
            let tol = Tolerances { abs: 1e-12, rel: 1e-9 };
            prop_assert!(nearly_equal(r.moisture_rich_kg_s + r.moisture_lean_kg_s, f.mass_flow_kg_s, tol));
        }

        #[test]
        fn peak_is_one_and_a_half_average(f in feed()) {
            let r = evaluate_kinetics(&f);
            prop_assert_eq!(r.peak_daily_m3, r.avg_daily_m3 * 1.5);
        }

        #[test]
        fn retention_is_reciprocal_rate(f in feed()) {
            let r = evaluate_kinetics(&f);
            if r.k_per_day > 0.0 {
                prop_assert_eq!(r.days_to_maturity, 1.0 / r.k_per_day);
            } else {
                prop_assert!(r.days_to_maturity.is_infinite());
            }
        }

        #[test]
        fn high_solids_flag_matches_threshold(f in feed()) {
            let r = evaluate_kinetics(&f);
            prop_assert_eq!(r.slurry.high_solids_warning, r.slurry.final_total_solids_pct > 12.0);
        }
    }
}
