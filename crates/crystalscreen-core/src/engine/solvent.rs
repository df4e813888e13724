//! Solvent screening: Hansen-distance ranking of the solvent catalog.

use crate::core::models::record::AggregateParameterRecord;
use crate::core::models::substance::{IchClass, Solvent, SolventCategory};
use crate::core::tables::solvents;
use crate::engine::hansen::{self, SolubilityBand};
use serde::Serialize;
use tracing::debug;

/// Optional screening filters. The default passes every catalog entry.
#[derive(Debug, Clone, Default)]
pub struct SolventFilter {
    /// ICH classes to exclude (e.g. hide Class 2 solvents late-stage).
    pub exclude_classes: Vec<IchClass>,
    /// When non-empty, only these categories pass.
    pub categories: Vec<SolventCategory>,
    /// Upper Ra bound; candidates above it are dropped from the table.
    pub max_distance: Option<f64>,
}

impl SolventFilter {
    fn admits(&self, solvent: &Solvent, ra: f64) -> bool {
        if self.exclude_classes.contains(&solvent.ich_class) {
            return false;
        }
        if !self.categories.is_empty() && !self.categories.contains(&solvent.category) {
            return false;
        }
        self.max_distance.is_none_or(|ceiling| ra <= ceiling)
    }
}

/// One ranked row of the solvent screening table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolventResult {
    pub solvent: &'static Solvent,
    pub distance: f64,
    pub red: f64,
    pub band: SolubilityBand,
}

/// Candidate counts per solubility band, for the screening summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BandSummary {
    pub excellent: u32,
    pub good: u32,
    pub partial: u32,
    pub poor: u32,
    pub insoluble: u32,
}

impl BandSummary {
    fn record(&mut self, band: SolubilityBand) {
        let slot = match band {
            SolubilityBand::Excellent => &mut self.excellent,
            SolubilityBand::Good => &mut self.good,
            SolubilityBand::Partial => &mut self.partial,
            SolubilityBand::Poor => &mut self.poor,
            SolubilityBand::Insoluble => &mut self.insoluble,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u32 {
        self.excellent + self.good + self.partial + self.poor + self.insoluble
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolventScreening {
    /// Rows sorted ascending by Ra; ties keep catalog order (stable sort).
    pub results: Vec<SolventResult>,
    pub summary: BandSummary,
}

/// Screens the full solvent catalog against an API parameter record.
pub fn screen(record: &AggregateParameterRecord, filter: &SolventFilter) -> SolventScreening {
    let mut results = Vec::with_capacity(solvents::CATALOG.len());
    let mut summary = BandSummary::default();

    for solvent in &solvents::CATALOG {
        let ra = hansen::distance(&record.hsp, &solvent.hsp);
        if !filter.admits(solvent, ra) {
            continue;
        }
        let band = SolubilityBand::from_distance(ra);
        summary.record(band);
        results.push(SolventResult {
            solvent,
            distance: ra,
            red: hansen::red(ra),
            band,
        });
    }

    results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    debug!(
        candidates = results.len(),
        excellent = summary.excellent,
        good = summary.good,
        "solvent screen complete"
    );
    SolventScreening { results, summary }
}
