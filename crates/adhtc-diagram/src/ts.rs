//! Gas-cycle temperature–entropy diagram (Brayton states 1–4).

use adhtc_core::c_to_k;
use adhtc_engines::PowerCycleResult;
use adhtc_engines::power_cycle::{CP_AIR, CP_GAS};
use serde::Serialize;

use crate::axis::{AxisRange, Point, Series};

/// Specific gas constant of air [kJ/(kg·K)].
pub const R_AIR: f64 = 0.287;
const AXIS_PADDING: f64 = 0.15;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TsState {
    pub label: &'static str,
    /// Entropy relative to state 1 [kJ/(kg·K)]
    pub s_kj_kg_k: f64,
    pub t_c: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TsDiagram {
    pub states: Vec<TsState>,
    /// States 1..4 then back to 1
    pub cycle: Vec<Point>,
    pub s_range: AxisRange,
    pub t_range: AxisRange,
}

impl TsDiagram {
    pub fn series(&self) -> Vec<Series> {
        vec![Series::new("brayton_cycle", self.cycle.clone())]
    }
}

/// Map the four Brayton temperatures [°C] to relative entropy.
pub fn gas_ts_diagram(t1_c: f64, t2_c: f64, t3_c: f64, t4_c: f64, pressure_ratio: f64) -> TsDiagram {
    let (t1, t2, t3, t4) = (c_to_k(t1_c), c_to_k(t2_c), c_to_k(t3_c), c_to_k(t4_c));

    let s1 = 0.0;
    let s2 = s1 + CP_AIR * (t2 / t1).ln() - R_AIR * pressure_ratio.ln();
    let s3 = s2 + CP_GAS * (t3 / t2).ln();
    let s4 = s3 + CP_GAS * (t4 / t3).ln() - R_AIR * (1.0 / pressure_ratio).ln();

    let states = vec![
        TsState { label: "1 (Atm)", s_kj_kg_k: s1, t_c: t1_c },
        TsState { label: "2 (Comp)", s_kj_kg_k: s2, t_c: t2_c },
        TsState { label: "3 (Comb)", s_kj_kg_k: s3, t_c: t3_c },
        TsState { label: "4 (Turb)", s_kj_kg_k: s4, t_c: t4_c },
    ];

    let mut cycle: Vec<Point> = states.iter().map(|s| Point::new(s.s_kj_kg_k, s.t_c)).collect();
    cycle.push(cycle[0]);

    // Four finite states always produce a range; the fallbacks only cover NaN input.
    let s_range = AxisRange::padded(cycle.iter().map(|p| p.x), AXIS_PADDING, 0.1)
        .unwrap_or(AxisRange { min: -0.1, max: 0.1 });
    let t_range = AxisRange::padded(cycle.iter().map(|p| p.y), AXIS_PADDING, 10.0)
        .unwrap_or(AxisRange { min: t1_c - 10.0, max: t1_c + 10.0 });

    TsDiagram {
        states,
        cycle,
        s_range,
        t_range,
    }
}

pub fn gas_ts_from_cycle(result: &PowerCycleResult) -> TsDiagram {
    gas_ts_diagram(
        result.t1_c,
        result.t2_c,
        result.t3_c,
        result.t4_c,
        result.pressure_ratio,
    )
}
