//! The immutable steam-table bundle shared by the engines and diagram mapping.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::builtin::BuiltinSaturation;
use crate::error::{SteamError, SteamResult};
use crate::model::{SaturationProps, SaturationSource, SuperheatedProps};
use crate::saturation::SaturationTable;
use crate::superheated::SuperheatedTable;

pub const DEFAULT_SATURATION_FILE: &str = "saturated_by_pressure_V1.4.csv";
pub const DEFAULT_SUPERHEATED_FILE: &str = "compressed_liquid_and_superheated_steam_V1.3.csv";

/// File names of the two reference tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFiles {
    pub saturation: String,
    pub superheated: String,
}

impl Default for TableFiles {
    fn default() -> Self {
        Self {
            saturation: DEFAULT_SATURATION_FILE.to_string(),
            superheated: DEFAULT_SUPERHEATED_FILE.to_string(),
        }
    }
}

/// Which reference tables loaded. Reported to callers instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct TableAvailability {
    pub saturation: bool,
    pub superheated: bool,
}

impl TableAvailability {
    /// The h–s cycle diagram needs both tables.
    pub fn supports_hs_diagram(&self) -> bool {
        self.saturation && self.superheated
    }
}

/// Reference steam tables with the built-in fallback always present.
#[derive(Debug, Clone, Default)]
pub struct SteamTables {
    saturation: Option<SaturationTable>,
    superheated: Option<SuperheatedTable>,
    builtin: BuiltinSaturation,
}

impl SteamTables {
    /// Only the 5-point built-in table.
    pub fn builtin_only() -> Self {
        Self::default()
    }

    /// Bundle tables that were built elsewhere (e.g. synthetic tables in tests).
    pub fn from_tables(
        saturation: Option<SaturationTable>,
        superheated: Option<SuperheatedTable>,
    ) -> Self {
        Self {
            saturation,
            superheated,
            builtin: BuiltinSaturation,
        }
    }

    /// Load both tables from `dir` (or `dir/data`).
    ///
    /// A missing or unparseable file is logged and leaves that table absent; the
    /// result always works, possibly with reduced capability.
    pub fn load(dir: &Path, files: &TableFiles) -> Self {
        let saturation = match resolve_table_file(dir, &files.saturation)
            .and_then(|p| SaturationTable::from_csv_path(&p))
        {
            Ok(table) => {
                debug!(rows = table.rows().len(), "loaded saturation table");
                Some(table)
            }
            Err(err) => {
                warn!(error = %err, "saturation table unavailable, using built-in steam data");
                None
            }
        };

        let superheated = match resolve_table_file(dir, &files.superheated)
            .and_then(|p| SuperheatedTable::from_csv_path(&p))
        {
            Ok(table) => {
                debug!(isobars = table.isobars().len(), "loaded superheated table");
                Some(table)
            }
            Err(err) => {
                warn!(error = %err, "superheated table unavailable, h-s diagram disabled");
                None
            }
        };

        Self::from_tables(saturation, superheated)
    }

    pub fn availability(&self) -> TableAvailability {
        TableAvailability {
            saturation: self.saturation.is_some(),
            superheated: self.superheated.is_some(),
        }
    }

    pub fn saturation(&self) -> Option<&SaturationTable> {
        self.saturation.as_ref()
    }

    pub fn superheated(&self) -> Option<&SuperheatedTable> {
        self.superheated.as_ref()
    }

    pub fn builtin(&self) -> &BuiltinSaturation {
        &self.builtin
    }

    /// Full saturation table when loaded, otherwise the built-in fallback.
    pub fn saturation_source(&self) -> &dyn SaturationSource {
        match &self.saturation {
            Some(table) => table as &dyn SaturationSource,
            None => &self.builtin,
        }
    }

    /// (h_f, h_g, s_f, s_g) at `t_c`; `None` without the full saturation table.
    pub fn lookup_saturation(&self, t_c: f64) -> Option<SaturationProps> {
        self.saturation.as_ref().map(|t| t.lookup(t_c))
    }

    /// (h, s) at (`p_mpa`, `t_c`); `None` without the superheated table.
    pub fn lookup_superheated(&self, p_mpa: f64, t_c: f64) -> Option<SuperheatedProps> {
        self.superheated.as_ref().and_then(|t| t.lookup(p_mpa, t_c))
    }
}

/// First existing candidate among `dir/name` and `dir/data/name`.
pub fn resolve_table_file(dir: &Path, name: &str) -> SteamResult<PathBuf> {
    let candidates = [dir.join(name), dir.join("data").join(name)];
    candidates
        .iter()
        .find(|p| p.is_file())
        .cloned()
        .ok_or_else(|| SteamError::NotFound {
            file: name.to_string(),
            searched: candidates.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::saturation::SaturationRow;

    #[test]
    fn builtin_only_reports_no_tables() {
        let tables = SteamTables::builtin_only();
        assert_eq!(tables.availability(), TableAvailability::default());
        assert!(!tables.availability().supports_hs_diagram());
        assert_eq!(tables.saturation_source().name(), "builtin");
        assert!(tables.lookup_saturation(100.0).is_none());
        assert!(tables.lookup_superheated(1.0, 200.0).is_none());
    }

    #[test]
    fn full_table_takes_precedence() {
        let sat = SaturationTable::from_rows([SaturationRow {
            t_c: 180.0,
            p_mpa: Some(1.0028),
            h_f: 763.05,
            h_fg: 2014.2,
            s_f: 2.1392,
            s_g: 6.5857,
        }])
        .unwrap();
        let tables = SteamTables::from_tables(Some(sat), None);
        assert!(tables.availability().saturation);
        assert_eq!(tables.saturation_source().name(), "saturation-table");
        assert!((tables.saturation_source().latent_heat(180.0) - 2014.2).abs() < 1e-9);
    }

    #[test]
    fn missing_directory_degrades_gracefully() {
        let dir = std::env::temp_dir().join("adhtc-steam-does-not-exist");
        let tables = SteamTables::load(&dir, &TableFiles::default());
        assert_eq!(tables.availability(), TableAvailability::default());
        assert_eq!(tables.saturation_source().liquid_enthalpy(180.0), 763.0);
    }

    #[test]
    fn resolve_reports_not_found() {
        let dir = std::env::temp_dir().join("adhtc-steam-missing");
        let err = resolve_table_file(&dir, "x.csv").unwrap_err();
        assert!(matches!(err, SteamError::NotFound { searched: 2, .. }));
    }
}
