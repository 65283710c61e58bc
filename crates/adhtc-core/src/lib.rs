//! adhtc-core: shared foundation for the AD-HTC plant model.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - units (uom mass-rate conversion, temperature offsets)
//! - constants (physical constants shared by the engines)
//! - error (shared error type)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
