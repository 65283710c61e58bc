//! Shared application service layer for the AD-HTC plant model.
//!
//! Loads plant definitions and steam tables, turns them into engine inputs, runs the
//! kinetics → boiler → power cycle pipeline, and assembles the report the CLI prints
//! or writes to disk.

pub mod error;
pub mod plant_compile;
pub mod plant_service;
pub mod report;
pub mod run_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use plant_compile::{PlantInputs, compile_plant};
pub use plant_service::{
    PresetSummary, list_presets, load_plant, load_steam_tables, save_plant, validate_plant,
};
pub use report::{DiagramSet, PlantReport, ReportManifest, load_report, save_report};
pub use run_service::{DiagramKind, diagram_series, evaluate_plant, run_plant};
