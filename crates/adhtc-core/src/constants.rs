//! Physical constants and fixed model coefficients.

/// Universal gas constant [J/(mol·K)].
pub const R_GAS: f64 = 8.314;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const HOURS_PER_DAY: f64 = 24.0;

/// Methane density at standard conditions [kg/m³].
pub const CH4_DENSITY_KG_M3: f64 = 0.657;

/// Lower heating value of pure methane, mass basis [kJ/kg].
pub const LHV_METHANE_KJ_KG: f64 = 50_000.0;

/// Lower heating value of biogas, volume basis [MJ/m³].
pub const LHV_BIOGAS_MJ_M3: f64 = 21.0;

/// Specific heat of liquid water [kJ/(kg·K)].
pub const CP_WATER_KJ_KG_K: f64 = 4.18;

/// Specific heat of steam used for superheat estimates [kJ/(kg·K)].
pub const CP_STEAM_KJ_KG_K: f64 = 2.03;

/// Enthalpy of feed water at 25 °C [kJ/kg].
pub const H_WATER_INLET_KJ_KG: f64 = 105.0;
