//! Plant loading, saving, validation and steam table resolution.

use std::path::{Path, PathBuf};

use adhtc_project::{PRESETS, PlantDef};
use adhtc_steam::{SteamTables, TableFiles};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// One row of the biomass preset listing.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PresetSummary {
    pub key: String,
    pub label: String,
    pub moisture_pct: f64,
    pub dry_matter_pct: f64,
    pub water_ratio: f64,
}

/// Load and validate a plant file (YAML, or JSON by extension).
pub fn load_plant(path: &Path) -> AppResult<PlantDef> {
    if !path.exists() {
        return Err(AppError::Plant(format!(
            "plant file not found: {}",
            path.display()
        )));
    }
    let plant = adhtc_project::load_plant(path)?;
    info!(plant = %plant.name, path = %path.display(), "loaded plant");
    Ok(plant)
}

/// Save by extension: `.json` as JSON, anything else as YAML.
pub fn save_plant(path: &Path, plant: &PlantDef) -> AppResult<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => adhtc_project::save_json(path, plant)?,
        _ => adhtc_project::save_yaml(path, plant)?,
    }
    Ok(())
}

pub fn validate_plant(plant: &PlantDef) -> AppResult<()> {
    adhtc_project::validate_plant(plant)?;
    Ok(())
}

pub fn list_presets() -> Vec<PresetSummary> {
    PRESETS
        .iter()
        .map(|p| PresetSummary {
            key: biomass_key(p.biomass),
            label: p.label.to_string(),
            moisture_pct: p.moisture_pct,
            dry_matter_pct: 100.0 - p.moisture_pct,
            water_ratio: p.water_ratio,
        })
        .collect()
}

fn biomass_key(biomass: adhtc_project::BiomassType) -> String {
    // Same spelling as in plant files
    serde_json::to_value(biomass)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("{biomass:?}"))
}

/// Directory searched for the steam tables of a plant loaded from `plant_path`.
pub fn steam_table_dir(plant: &PlantDef, plant_path: Option<&Path>) -> PathBuf {
    let base = plant_path
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_default();
    match plant.steam_tables.as_ref().and_then(|s| s.directory.as_deref()) {
        Some(dir) => base.join(dir),
        None => base,
    }
}

/// Load the reference steam tables for a plant. Missing files degrade, never fail.
pub fn load_steam_tables(plant: &PlantDef, plant_path: Option<&Path>) -> SteamTables {
    let dir = steam_table_dir(plant, plant_path);
    let files = match &plant.steam_tables {
        Some(def) => TableFiles {
            saturation: def.saturation_file.clone(),
            superheated: def.superheated_file.clone(),
        },
        None => TableFiles::default(),
    };

    let tables = SteamTables::load(&dir, &files);
    let availability = tables.availability();
    if !availability.saturation {
        warn!(dir = %dir.display(), "boiler calculations use the built-in 5-point steam table");
    }
    tables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_listed_with_keys() {
        let presets = list_presets();
        assert_eq!(presets.len(), 5);
        assert_eq!(presets[0].key, "cattle");
        assert_eq!(presets[0].dry_matter_pct, 6.0);
        assert!(presets.iter().any(|p| p.key == "agricultural_residue"));
    }

    #[test]
    fn missing_plant_file() {
        let err = load_plant(Path::new("/nonexistent/plant.yaml")).unwrap_err();
        assert!(matches!(err, AppError::Plant(_)));
    }
}
