use super::fragment::IonizationKind;
use serde::Serialize;

/// A Hansen solubility parameter triple, in MPa^0.5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HspTriple {
    pub dispersion: f64,
    pub polar: f64,
    pub hydrogen_bonding: f64,
}

impl HspTriple {
    pub const fn new(dispersion: f64, polar: f64, hydrogen_bonding: f64) -> Self {
        Self {
            dispersion,
            polar,
            hydrogen_bonding,
        }
    }

    /// Euclidean norm δt of the three components.
    pub fn total(&self) -> f64 {
        (self.dispersion.powi(2) + self.polar.powi(2) + self.hydrogen_bonding.powi(2)).sqrt()
    }
}

/// The dominant ionizable group of a molecule, as estimated from its
/// fragments or supplied directly by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IonizationProfile {
    pub pka: f64,
    pub kind: IonizationKind,
    /// Qualitative confidence band of the estimate, in pKa units.
    pub confidence: f64,
}

impl IonizationProfile {
    pub fn is_base(&self) -> bool {
        self.kind.is_basic()
    }
}

/// The aggregate physicochemical parameter record of an API.
///
/// Produced by the estimator (or supplied whole through the manual override
/// path) and consumed read-only by every downstream screening engine.
/// Invariant: `hsp.total() == total` within rounding, and `dispersion` is
/// never below the organic-fragment floor for any non-empty input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateParameterRecord {
    pub hsp: HspTriple,
    /// δt, the Euclidean norm of the HSP triple.
    pub total: f64,
    /// Molar volume in cm³/mol (fallback-substituted, never ≤ 0 for
    /// non-empty inputs).
    pub molar_volume: f64,
    pub logp: f64,
    pub molecular_weight: f64,
    pub donors: u32,
    pub acceptors: u32,
    pub tpsa: f64,
    pub rotatable_bonds: u32,
    /// Joback melting point estimate, in °C.
    pub melting_point: f64,
    /// `None` when no ionizable fragment is present.
    pub ionization: Option<IonizationProfile>,
}

impl AggregateParameterRecord {
    /// The all-zero degenerate record returned for an empty fragment map.
    pub fn zero() -> Self {
        Self {
            hsp: HspTriple::new(0.0, 0.0, 0.0),
            total: 0.0,
            molar_volume: 0.0,
            logp: 0.0,
            molecular_weight: 0.0,
            donors: 0,
            acceptors: 0,
            tpsa: 0.0,
            rotatable_bonds: 0,
            melting_point: 0.0,
            ionization: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsp_total_is_euclidean_norm() {
        let hsp = HspTriple::new(3.0, 4.0, 12.0);
        assert!((hsp.total() - 13.0).abs() < 1e-12);
    }

    #[test]
    fn zero_record_has_no_ionization() {
        let record = AggregateParameterRecord::zero();
        assert_eq!(record.total, 0.0);
        assert!(record.ionization.is_none());
    }
}
