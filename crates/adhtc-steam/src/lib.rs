//! adhtc-steam: steam property lookup for the AD-HTC plant model.
//!
//! Provides:
//! - A generic "bracket sorted keys, interpolate linearly, clamp at the ends" utility
//! - Saturation table keyed by temperature (and inversely by pressure)
//! - Superheated / compressed-liquid table keyed by (pressure, temperature)
//! - A 5-point built-in saturation table used when the reference files are absent
//! - `SteamTables`, the immutable bundle handed to the engines and diagram mapping
//!
//! # Architecture
//!
//! The boiler engine only needs saturated liquid/vapour enthalpies, so it talks to the
//! `SaturationSource` trait. Both the full `SaturationTable` and `BuiltinSaturation`
//! implement it; `SteamTables::saturation_source` picks the best one available.
//!
//! Tables are built once (from CSV or from in-memory rows) and never mutated, so a
//! single `SteamTables` can be shared freely between evaluations.
//!
//! # Example
//!
//! ```no_run
//! use adhtc_steam::{SaturationSource, SteamTables, TableFiles};
//!
//! let tables = SteamTables::load(std::path::Path::new("data"), &TableFiles::default());
//! let source = tables.saturation_source();
//! let h_fg = source.vapor_enthalpy(180.0) - source.liquid_enthalpy(180.0);
//! println!("Latent heat at 180 °C: {h_fg} kJ/kg");
//! ```

pub mod builtin;
mod delimited;
pub mod error;
pub mod interp;
pub mod model;
pub mod saturation;
pub mod superheated;
pub mod tables;

pub use builtin::BuiltinSaturation;
pub use error::{SteamError, SteamResult};
pub use interp::{Bracket, interpolate_clamped};
pub use model::{SaturationProps, SaturationSource, SuperheatedProps};
pub use saturation::{SaturationRow, SaturationTable};
pub use superheated::{Isobar, SuperheatedRow, SuperheatedTable};
pub use tables::{SteamTables, TableAvailability, TableFiles};
