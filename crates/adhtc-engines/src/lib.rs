//! adhtc-engines: the physical models of the AD-HTC plant.
//!
//! Provides:
//! - Kinetics & yield: water dilution, AD/HTC partitioning, Arrhenius rate, methane yield
//! - Boiler thermal balance: static-charge start-up energy (primary) and continuous feed
//! - Brayton power cycle: compressor, combustor, turbine, generator
//!
//! Every `evaluate_*` function is a pure, total function of its inputs and returns a
//! fresh result struct. Degenerate-but-valid inputs (zero flow, zero efficiency,
//! non-positive rate constant) produce 0 or +∞ sentinels, never errors. Structural
//! input errors are caught beforehand by the `validate()` method on each input type.
//!
//! # Example
//!
//! ```
//! use adhtc_engines::{FeedstockInput, evaluate_kinetics};
//!
//! let feed = FeedstockInput {
//!     mass_flow_kg_s: 60.0 / 86_400.0,
//!     moisture_pct: 94.0,
//!     added_water_ratio: 0.0,
//!     temperature_c: 25.0,
//! };
//! feed.validate().unwrap();
//!
//! let kinetics = evaluate_kinetics(&feed);
//! println!("Retention: {:.1} days", kinetics.days_to_maturity);
//! ```

pub mod boiler;
pub mod common;
pub mod error;
pub mod kinetics;
pub mod power_cycle;

// Re-exports
pub use boiler::{
    BoilerInput, BoilerOutcome, BoilerRequest, BoilerResult, ContinuousBoilerInput,
    ContinuousBoilerResult, MethaneSplit, evaluate_boiler, evaluate_boiler_request,
    evaluate_continuous_boiler, partition_methane,
};
pub use error::{EngineError, EngineResult};
pub use kinetics::{
    ArrheniusParams, FeedstockInput, KineticsResult, MethaneYield, SlurryBalance,
    evaluate_kinetics, evaluate_kinetics_with,
};
pub use power_cycle::{PowerCycleInput, PowerCycleResult, evaluate_power_cycle, validate_fuel};
