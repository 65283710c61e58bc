//! adhtc-diagram: numeric mapping of engine results to charts and display fields.
//!
//! Provides:
//! - T–H boiler diagram (saturation curves, heating path, progress marker)
//! - h–s steam cycle diagram (needs the full steam tables)
//! - Gas T–s Brayton diagram
//! - Feedstock Sankey links and schematic label data
//! - Display formatting for report fields
//!
//! Nothing here draws; every diagram is a set of named point series plus axis ranges.

pub mod axis;
pub mod export;
pub mod format;
pub mod hs;
pub mod sankey;
pub mod schematic;
pub mod th;
pub mod ts;

// Re-exports
pub use axis::{AxisRange, Point, Series};
pub use export::{series_csv, write_series_csv};
pub use format::{
    DisplayFields, format_days, format_flow_kg_s, format_number, format_optional,
    insufficient_message,
};
pub use hs::{HsDiagram, HsOptions, HsState, hs_diagram};
pub use sankey::{SankeyData, SankeyLink, feedstock_sankey};
pub use schematic::SchematicData;
pub use th::{HeatingPath, ProgressMarker, ThDiagram, th_diagram};
pub use ts::{TsDiagram, TsState, gas_ts_diagram, gas_ts_from_cycle};

pub type DiagramResult<T> = Result<T, DiagramError>;

#[derive(thiserror::Error, Debug)]
pub enum DiagramError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
