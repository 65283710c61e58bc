//! Label values for the plant schematic, serialised as JSON for the front end.

use adhtc_engines::{BoilerInput, KineticsResult, PowerCycleResult};
use serde::Serialize;

use crate::format::format_number;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NaturalLabels {
    pub avg_m3_day: String,
    pub power_kw: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoilerLabels {
    pub water_kg: String,
    #[serde(rename = "T_steam_C")]
    pub steam_temperature_c: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerLabels {
    pub net_kwe: String,
}

/// Sections are omitted when the matching stage did not run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchematicData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natural: Option<NaturalLabels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boiler: Option<BoilerLabels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<PowerLabels>,
}

impl SchematicData {
    pub fn new(
        kinetics: Option<&KineticsResult>,
        boiler: Option<&BoilerInput>,
        power: Option<&PowerCycleResult>,
    ) -> Self {
        Self {
            natural: kinetics.map(|k| NaturalLabels {
                avg_m3_day: format_number(k.avg_daily_m3),
                power_kw: format_number(k.ignition_power_kw),
            }),
            boiler: boiler.map(|b| BoilerLabels {
                water_kg: format_number(b.water_capacity_kg),
                steam_temperature_c: format_number(b.steam_temperature_c),
            }),
            power: power.map(|p| PowerLabels {
                net_kwe: format_number(p.net_power_kwe),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boiler_labels() {
        let input = BoilerInput {
            water_capacity_kg: 1500.0,
            steam_temperature_c: 180.0,
            ambient_temperature_c: 25.0,
            efficiency_pct: 85.0,
        };
        let data = SchematicData::new(None, Some(&input), None);
        assert!(data.natural.is_none());
        let boiler = data.boiler.unwrap();
        assert_eq!(boiler.water_kg, "1,500.00");
        assert_eq!(boiler.steam_temperature_c, "180.00");
    }

    #[test]
    fn empty_by_default() {
        let data = SchematicData::default();
        assert!(data.natural.is_none() && data.boiler.is_none() && data.power.is_none());
    }
}
