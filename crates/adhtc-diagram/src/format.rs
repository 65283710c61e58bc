//! Display strings for report fields.

use adhtc_core::constants::SECONDS_PER_HOUR;
use adhtc_engines::{BoilerOutcome, KineticsResult};
use serde::Serialize;

/// Placeholder for missing or non-finite values.
pub const MISSING: &str = "—";
pub const HIGH_SOLIDS_MESSAGE: &str = "High Solid Content – Risk of Blockage";
pub const NO_METHANE_MESSAGE: &str =
    "No methane from AD in this run. Increase biomass input so that methane production is positive.";

/// Flows below this are shown per hour so they do not round to zero [kg/s].
const SMALL_FLOW_KG_S: f64 = 0.01;

fn group_thousands(v: f64, decimals: usize) -> String {
    let raw = format!("{:.*}", decimals, v);
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// `1,234.56`; values of a million or more drop the decimals.
pub fn format_number(v: f64) -> String {
    if !v.is_finite() {
        return MISSING.to_string();
    }
    if v < 1e6 {
        group_thousands(v, 2)
    } else {
        group_thousands(v, 0)
    }
}

pub fn format_optional(v: Option<f64>) -> String {
    v.map_or_else(|| MISSING.to_string(), format_number)
}

/// Flow in kg/s, switching to kg/hr for small non-zero values.
pub fn format_flow_kg_s(v: f64) -> String {
    if !v.is_finite() {
        return MISSING.to_string();
    }
    if v.abs() < SMALL_FLOW_KG_S && v != 0.0 {
        return format!("{} kg/hr", group_thousands(v * SECONDS_PER_HOUR, 2));
    }
    format!("{} kg/s", group_thousands(v, 4))
}

pub fn format_days(days: f64) -> String {
    if days.is_finite() && days < 1e6 {
        format!("{days:.1} days")
    } else {
        MISSING.to_string()
    }
}

/// Kinetics results as display strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayFields {
    pub days_to_maturity: String,
    pub reactor_mass_kg: String,
    pub avg_daily_m3: String,
    pub peak_daily_m3: String,
    pub ignition_power_kw: String,
    pub added_water: String,
    pub total_slurry: String,
    pub final_total_solids_pct: String,
    pub moisture_rich: String,
    pub moisture_lean: String,
    pub k_per_day: String,
    pub v_total_m3: String,
    pub methane_mass_kg: String,
    pub methane_purity: String,
    pub warnings: Vec<String>,
}

impl DisplayFields {
    pub fn from_kinetics(k: &KineticsResult) -> Self {
        let mut warnings = Vec::new();
        if k.slurry.high_solids_warning {
            warnings.push(HIGH_SOLIDS_MESSAGE.to_string());
        }

        Self {
            days_to_maturity: format_days(k.days_to_maturity),
            reactor_mass_kg: format_number(k.reactor_mass_kg),
            avg_daily_m3: format_number(k.avg_daily_m3),
            peak_daily_m3: format_number(k.peak_daily_m3),
            ignition_power_kw: format_number(k.ignition_power_kw),
            added_water: format_flow_kg_s(k.slurry.added_water_kg_s),
            total_slurry: format_flow_kg_s(k.slurry.total_slurry_kg_s),
            final_total_solids_pct: format_number(k.slurry.final_total_solids_pct),
            moisture_rich: format_flow_kg_s(k.moisture_rich_kg_s),
            moisture_lean: format_flow_kg_s(k.moisture_lean_kg_s),
            k_per_day: format_number(k.k_per_day),
            v_total_m3: format_number(k.v_total_m3),
            methane_mass_kg: format_number(k.methane_mass_kg),
            methane_purity: format!("{:.0}%", k.methane_purity * 100.0),
            warnings,
        }
    }
}

/// Warning text for a boiler run that AD cannot fuel, if any.
pub fn insufficient_message(outcome: &BoilerOutcome) -> Option<String> {
    if !outcome.insufficient() {
        return None;
    }
    let message = match outcome {
        BoilerOutcome::StaticCharge(r) if r.methane_per_day_kg <= 0.0 => {
            NO_METHANE_MESSAGE.to_string()
        }
        BoilerOutcome::StaticCharge(r) => format!(
            "Insufficient methane: boiler start-up needs {} kg but AD produces {} kg/day.",
            group_thousands(r.methane_needed_kg, 2),
            group_thousands(r.methane_per_day_kg, 2),
        ),
        BoilerOutcome::ContinuousFlow(r) if r.total_methane_kg_hr <= 0.0 => {
            NO_METHANE_MESSAGE.to_string()
        }
        BoilerOutcome::ContinuousFlow(r) => format!(
            "Insufficient methane: boiler demand ({} kg/hr) exceeds AD production ({} kg/hr). \
             Reduce water feed rate or increase biomass input.",
            group_thousands(r.methane_demand_kg_hr, 2),
            group_thousands(r.total_methane_kg_hr, 2),
        ),
    };
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adhtc_engines::{FeedstockInput, evaluate_kinetics};

    #[test]
    fn numbers() {
        assert_eq!(format_number(0.0), "0.00");
        assert_eq!(format_number(1234.5678), "1,234.57");
        assert_eq!(format_number(999_999.0), "999,999.00");
        assert_eq!(format_number(1_234_567.8), "1,234,568");
        assert_eq!(format_number(-1234.5), "-1,234.50");
        assert_eq!(format_number(f64::INFINITY), MISSING);
        assert_eq!(format_optional(None), MISSING);
    }

    #[test]
    fn flows() {
        assert_eq!(format_flow_kg_s(0.005), "18.00 kg/hr");
        assert_eq!(format_flow_kg_s(0.0), "0.0000 kg/s");
        assert_eq!(format_flow_kg_s(1.5), "1.5000 kg/s");
        assert_eq!(format_flow_kg_s(f64::NAN), MISSING);
    }

    #[test]
    fn days() {
        assert_eq!(format_days(12.34), "12.3 days");
        assert_eq!(format_days(f64::INFINITY), MISSING);
        assert_eq!(format_days(2e6), MISSING);
    }

    #[test]
    fn kinetics_fields() {
        let feed = FeedstockInput {
            mass_flow_kg_s: 60.0 / 86_400.0,
            moisture_pct: 94.0,
            added_water_ratio: 0.0,
            temperature_c: 25.0,
        };
        let fields = DisplayFields::from_kinetics(&evaluate_kinetics(&feed));
        assert_eq!(fields.methane_purity, "60%");
        assert!(fields.moisture_rich.ends_with("kg/hr"));
        assert!(fields.warnings.is_empty());
        assert_eq!(fields.added_water, "0.0000 kg/s");
    }

    #[test]
    fn high_solids_warning_text() {
        let feed = FeedstockInput {
            mass_flow_kg_s: 1.0,
            moisture_pct: 15.0,
            added_water_ratio: 0.0,
            temperature_c: 25.0,
        };
        let fields = DisplayFields::from_kinetics(&evaluate_kinetics(&feed));
        assert_eq!(fields.warnings, vec![HIGH_SOLIDS_MESSAGE.to_string()]);
    }
}
