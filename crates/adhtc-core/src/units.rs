// adhtc-core/src/units.rs

use uom::si::f64::{Mass as UomMass, MassRate as UomMassRate, Time as UomTime};

// Public canonical unit types (SI, f64)
pub type Mass = UomMass;
pub type MassRate = UomMassRate;
pub type Time = UomTime;

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

#[inline]
pub fn c_to_k(t_c: f64) -> f64 {
    t_c + KELVIN_OFFSET
}

#[inline]
pub fn k_to_c(t_k: f64) -> f64 {
    t_k - KELVIN_OFFSET
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn kg_per_hour(v: f64) -> MassRate {
    use uom::si::{mass::kilogram, time::hour};
    let rate: MassRate = Mass::new::<kilogram>(v) / Time::new::<hour>(1.0);
    rate
}

#[inline]
pub fn kg_per_day(v: f64) -> MassRate {
    use uom::si::{mass::kilogram, time::day};
    let rate: MassRate = Mass::new::<kilogram>(v) / Time::new::<day>(1.0);
    rate
}

/// Value of a mass rate in kg/s.
#[inline]
pub fn as_kgps(rate: MassRate) -> f64 {
    use uom::si::mass_rate::kilogram_per_second;
    rate.get::<kilogram_per_second>()
}
