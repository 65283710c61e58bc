//! Biomass presets: intrinsic moisture and recommended water mixing.

use serde::Serialize;

use crate::schema::BiomassType;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BiomassPreset {
    pub biomass: BiomassType,
    pub label: &'static str,
    pub moisture_pct: f64,
    /// Recommended kg of water per kg of biomass
    pub water_ratio: f64,
}

pub const PRESETS: [BiomassPreset; 5] = [
    BiomassPreset {
        biomass: BiomassType::Cattle,
        label: "Cattle / slurry (dung)",
        moisture_pct: 94.0,
        water_ratio: 0.0,
    },
    BiomassPreset {
        biomass: BiomassType::FoodWaste,
        label: "Food waste",
        moisture_pct: 77.0,
        water_ratio: 1.0,
    },
    BiomassPreset {
        biomass: BiomassType::Manure,
        label: "Manure (Pig/Chicken)",
        moisture_pct: 72.0,
        water_ratio: 1.2,
    },
    BiomassPreset {
        biomass: BiomassType::GrassSilage,
        label: "Grass / silage",
        moisture_pct: 72.0,
        water_ratio: 1.5,
    },
    BiomassPreset {
        biomass: BiomassType::AgriculturalResidue,
        label: "Agricultural residue",
        moisture_pct: 15.0,
        water_ratio: 2.0,
    },
];

impl BiomassType {
    /// Preset values; `None` for `Custom`.
    pub fn preset(self) -> Option<&'static BiomassPreset> {
        PRESETS.iter().find(|p| p.biomass == self)
    }
}
