//! Hansen distance and solubility banding.

use crate::core::constants::{
    INTERACTION_RADIUS, RA_DISPERSION_WEIGHT, RA_EXCELLENT, RA_GOOD, RA_PARTIAL, RA_POOR,
};
use crate::core::models::record::HspTriple;
use serde::Serialize;
use std::fmt;

/// Hansen distance Ra = √(4·Δδd² + Δδp² + Δδh²), rounded to two decimals.
///
/// Symmetric in its arguments and zero exactly when the two triples match.
pub fn distance(a: &HspTriple, b: &HspTriple) -> f64 {
    let ra = (RA_DISPERSION_WEIGHT * (a.dispersion - b.dispersion).powi(2)
        + (a.polar - b.polar).powi(2)
        + (a.hydrogen_bonding - b.hydrogen_bonding).powi(2))
    .sqrt();
    (ra * 100.0).round() / 100.0
}

/// Relative energy difference, Ra over the fixed small-molecule radius.
pub fn red(ra: f64) -> f64 {
    ((ra / INTERACTION_RADIUS) * 100.0).round() / 100.0
}

/// Five ordered solubility bands by fixed Ra thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SolubilityBand {
    Excellent,
    Good,
    Partial,
    Poor,
    Insoluble,
}

impl SolubilityBand {
    pub fn from_distance(ra: f64) -> Self {
        if ra < RA_EXCELLENT {
            SolubilityBand::Excellent
        } else if ra < RA_GOOD {
            SolubilityBand::Good
        } else if ra < RA_PARTIAL {
            SolubilityBand::Partial
        } else if ra < RA_POOR {
            SolubilityBand::Poor
        } else {
            SolubilityBand::Insoluble
        }
    }

    /// Qualitative solubility range associated with the band.
    pub fn prediction(&self) -> &'static str {
        match self {
            SolubilityBand::Excellent => "High solubility predicted (>50 mg/mL likely)",
            SolubilityBand::Good => "Good solubility predicted (5-50 mg/mL range)",
            SolubilityBand::Partial => "Partial solubility / marginal (0.1-5 mg/mL)",
            SolubilityBand::Poor => "Poor solubility (<0.1 mg/mL)",
            SolubilityBand::Insoluble => "Likely insoluble",
        }
    }
}

impl fmt::Display for SolubilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SolubilityBand::Excellent => "Excellent",
            SolubilityBand::Good => "Good",
            SolubilityBand::Partial => "Partial",
            SolubilityBand::Poor => "Poor",
            SolubilityBand::Insoluble => "Insoluble",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric_and_zero_on_identity() {
        let a = HspTriple::new(18.5, 10.5, 7.5);
        let b = HspTriple::new(15.1, 12.3, 22.3);
        assert_eq!(distance(&a, &b), distance(&b, &a));
        assert_eq!(distance(&a, &a), 0.0);
        assert_eq!(SolubilityBand::from_distance(0.0), SolubilityBand::Excellent);
    }

    #[test]
    fn dispersion_differences_are_weighted_four_fold() {
        let a = HspTriple::new(16.0, 0.0, 0.0);
        let b = HspTriple::new(15.0, 0.0, 0.0);
        assert!((distance(&a, &b) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn bands_follow_the_fixed_thresholds() {
        assert_eq!(SolubilityBand::from_distance(4.99), SolubilityBand::Excellent);
        assert_eq!(SolubilityBand::from_distance(5.0), SolubilityBand::Good);
        assert_eq!(SolubilityBand::from_distance(8.0), SolubilityBand::Partial);
        assert_eq!(SolubilityBand::from_distance(10.5), SolubilityBand::Poor);
        assert_eq!(SolubilityBand::from_distance(11.0), SolubilityBand::Insoluble);
    }

    #[test]
    fn red_uses_the_fixed_reference_radius() {
        assert!((red(7.5) - 1.5).abs() < 1e-9);
    }
}
