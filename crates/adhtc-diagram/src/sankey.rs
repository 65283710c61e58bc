//! Feedstock split between AD and HTC as Sankey links.

use serde::Serialize;

pub const NODE_LABELS: [&str; 3] = ["Biomass Feedstock", "AD (moisture-rich)", "HTC (moisture-lean)"];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SankeyLink {
    pub source: usize,
    pub target: usize,
    /// [kg/s]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyData {
    pub nodes: Vec<&'static str>,
    pub links: Vec<SankeyLink>,
}

/// Biomass (node 0) splits into AD (node 1) and HTC (node 2).
pub fn feedstock_sankey(moisture_rich_kg_s: f64, moisture_lean_kg_s: f64) -> SankeyData {
    SankeyData {
        nodes: NODE_LABELS.to_vec(),
        links: vec![
            SankeyLink {
                source: 0,
                target: 1,
                value: moisture_rich_kg_s,
            },
            SankeyLink {
                source: 0,
                target: 2,
                value: moisture_lean_kg_s,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_links_from_biomass() {
        let d = feedstock_sankey(0.7, 0.3);
        assert_eq!(d.nodes.len(), 3);
        assert!(d.links.iter().all(|l| l.source == 0));
        let total: f64 = d.links.iter().map(|l| l.value).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }
}
