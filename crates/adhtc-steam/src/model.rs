//! Property types and the saturation trait consumed by the boiler engine.

/// Saturated liquid and vapour properties at one temperature.
///
/// Enthalpies in kJ/kg, entropies in kJ/(kg·K).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationProps {
    pub h_f: f64,
    pub h_g: f64,
    pub s_f: f64,
    pub s_g: f64,
}

impl SaturationProps {
    /// Latent heat of vaporization [kJ/kg].
    pub fn h_fg(&self) -> f64 {
        self.h_g - self.h_f
    }
}

/// Specific enthalpy [kJ/kg] and entropy [kJ/(kg·K)] at a (pressure, temperature) point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperheatedProps {
    pub h: f64,
    pub s: f64,
}

/// Source of saturated-water enthalpies by temperature.
///
/// Implementations clamp to their own table bounds; they never extrapolate.
pub trait SaturationSource: Send + Sync {
    /// Short label for logs and reports.
    fn name(&self) -> &'static str;

    /// Saturated liquid enthalpy h_f [kJ/kg] at `t_c` [°C].
    fn liquid_enthalpy(&self, t_c: f64) -> f64;

    /// Saturated vapour enthalpy h_g [kJ/kg] at `t_c` [°C].
    fn vapor_enthalpy(&self, t_c: f64) -> f64;

    /// Latent heat h_g - h_f [kJ/kg] at `t_c` [°C].
    fn latent_heat(&self, t_c: f64) -> f64 {
        self.vapor_enthalpy(t_c) - self.liquid_enthalpy(t_c)
    }
}
