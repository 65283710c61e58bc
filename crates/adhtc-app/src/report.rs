//! The assembled plant report and its JSON persistence.

use std::path::Path;

use adhtc_diagram::{DisplayFields, HsDiagram, SankeyData, SchematicData, ThDiagram, TsDiagram};
use adhtc_engines::{BoilerOutcome, KineticsResult, PowerCycleResult};
use adhtc_steam::TableAvailability;
use serde::Serialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize)]
pub struct ReportManifest {
    /// RFC 3339, UTC
    pub timestamp: String,
    pub plant_name: String,
    pub tool_version: String,
}

impl ReportManifest {
    pub fn new(plant_name: &str) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            plant_name: plant_name.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Chart data. A diagram is absent when its stage did not run or its tables are missing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiagramSet {
    pub th: Option<ThDiagram>,
    pub hs: Option<HsDiagram>,
    pub ts: Option<TsDiagram>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlantReport {
    pub manifest: ReportManifest,
    pub biomass_label: String,
    pub moisture_pct_used: f64,
    pub added_water_ratio: f64,
    pub kinetics: KineticsResult,
    pub boiler: Option<BoilerOutcome>,
    pub power_cycle: Option<PowerCycleResult>,
    pub steam_tables: TableAvailability,
    /// Which saturation data fed the boiler ("saturation-table" or "builtin")
    pub saturation_source: String,
    pub display: DisplayFields,
    pub boiler_message: Option<String>,
    pub sankey: SankeyData,
    pub schematic: SchematicData,
    pub diagrams: DiagramSet,
}

impl PlantReport {
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write the report as pretty JSON.
pub fn save_report(path: &Path, report: &PlantReport) -> AppResult<()> {
    let content = report.to_json()?;
    std::fs::write(path, content).map_err(|e| AppError::ReportWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read a saved report back as a JSON tree.
///
/// Reports are write-once output; non-finite numbers were stored as `null`, so the
/// typed structures are not rebuilt.
pub fn load_report(path: &Path) -> AppResult<serde_json::Value> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ReportRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_has_rfc3339_timestamp() {
        let m = ReportManifest::new("Farm");
        assert!(chrono::DateTime::parse_from_rfc3339(&m.timestamp).is_ok());
        assert_eq!(m.plant_name, "Farm");
        assert!(!m.tool_version.is_empty());
    }
}
