//! Second-order polar corrections (Stefanis-Panayiotou 2008, Table 2).
//!
//! First-order group summation misses intramolecular polarity effects:
//! resonance between aromatic rings and attached polar groups, amide
//! conjugation, ring-current polarization in fused aromatics, and benzylic
//! activation. Each active correction adds its magnitude squared to the
//! aggregate polar energy sum. Corrections are additive and
//! order-independent.

use crate::core::models::fragment::{Fragment, FragmentCounts};
use serde::Serialize;

/// Trigger condition of a second-order correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Applies once per occurrence of the fragment (ring corrections).
    PerOccurrence(Fragment),
    /// Applies once when both fragments occur at least once (conjugation).
    Pairwise(Fragment, Fragment),
    /// Applies once when the first fragment occurs at least twice and the
    /// second at least once (e.g. diarylamine needs two aryl rings).
    PairwiseFirstTwice(Fragment, Fragment),
}

/// The closed set of second-order corrections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Correction {
    NaphthaleneRing,
    PyridineRing,
    ImidazoleRing,
    IndoleRing,
    AromaticCarboxyl,
    PhenolicResonance,
    AmideConjugation,
    PrimaryAmideConjugation,
    BenzylicMethine,
    BenzylicMethylene,
    Dihydropyridine,
    Diarylamine,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionRule {
    pub correction: Correction,
    pub trigger: Trigger,
    /// Fpj, in MPa^0.5 · cm³/mol. Enters the polar sum squared.
    pub magnitude: f64,
}

#[rustfmt::skip]
pub static RULES: [CorrectionRule; 12] = [
    // Fused / heteroaromatic ring-current corrections, one per ring.
    CorrectionRule { correction: Correction::NaphthaleneRing, trigger: Trigger::PerOccurrence(Fragment::Naphthalene), magnitude: 725.0 },
    CorrectionRule { correction: Correction::PyridineRing,    trigger: Trigger::PerOccurrence(Fragment::Pyridine),    magnitude: 650.0 },
    CorrectionRule { correction: Correction::ImidazoleRing,   trigger: Trigger::PerOccurrence(Fragment::Imidazole),   magnitude: 580.0 },
    CorrectionRule { correction: Correction::IndoleRing,      trigger: Trigger::PerOccurrence(Fragment::Indole),      magnitude: 420.0 },
    // Polar groups conjugated with an aromatic ring.
    CorrectionRule { correction: Correction::AromaticCarboxyl,  trigger: Trigger::Pairwise(Fragment::Phenyl, Fragment::CarboxylicAcid),   magnitude: 468.0 },
    CorrectionRule { correction: Correction::PhenolicResonance, trigger: Trigger::Pairwise(Fragment::Phenyl, Fragment::HydroxylPhenolic), magnitude: 919.0 },
    // Amide resonance systems.
    CorrectionRule { correction: Correction::AmideConjugation,        trigger: Trigger::Pairwise(Fragment::Carbonyl, Fragment::AmineSecondary),    magnitude: 402.0 },
    CorrectionRule { correction: Correction::PrimaryAmideConjugation, trigger: Trigger::Pairwise(Fragment::AmidePrimary, Fragment::AminePrimary),  magnitude: 430.0 },
    // Benzylic polarization of sp3 carbons next to the ring.
    CorrectionRule { correction: Correction::BenzylicMethine,   trigger: Trigger::Pairwise(Fragment::Phenyl, Fragment::Methine),   magnitude: 664.0 },
    CorrectionRule { correction: Correction::BenzylicMethylene, trigger: Trigger::Pairwise(Fragment::Phenyl, Fragment::Methylene), magnitude: 580.0 },
    // Special ring systems.
    CorrectionRule { correction: Correction::Dihydropyridine, trigger: Trigger::Pairwise(Fragment::Piperidine, Fragment::Carbonyl),          magnitude: 1785.0 },
    CorrectionRule { correction: Correction::Diarylamine,     trigger: Trigger::PairwiseFirstTwice(Fragment::Phenyl, Fragment::AmineSecondary), magnitude: 1704.0 },
];

impl Trigger {
    /// Number of times the trigger fires for the given count map.
    fn activations(&self, counts: &FragmentCounts) -> u32 {
        match *self {
            Trigger::PerOccurrence(fragment) => counts.count(fragment),
            Trigger::Pairwise(first, second) => {
                u32::from(counts.count(first) >= 1 && counts.count(second) >= 1)
            }
            Trigger::PairwiseFirstTwice(first, second) => {
                u32::from(counts.count(first) >= 2 && counts.count(second) >= 1)
            }
        }
    }
}

/// Corrections active for a count map, with their activation multiplicity.
pub fn active(counts: &FragmentCounts) -> Vec<(Correction, u32)> {
    RULES
        .iter()
        .filter_map(|rule| {
            let n = rule.trigger.activations(counts);
            (n > 0).then_some((rule.correction, n))
        })
        .collect()
}

/// Total Σ Fpj² to add to the aggregate polar energy sum.
pub fn polar_energy_correction(counts: &FragmentCounts) -> f64 {
    RULES
        .iter()
        .map(|rule| {
            f64::from(rule.trigger.activations(counts)) * rule.magnitude * rule.magnitude
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aromatic_carboxyl_fires_once_for_an_ibuprofen_like_map() {
        let counts = FragmentCounts::from_iter([
            (Fragment::Phenyl, 1),
            (Fragment::CarboxylicAcid, 1),
            (Fragment::Methylene, 1),
            (Fragment::Methyl, 1),
        ]);
        let active = active(&counts);
        assert!(active.contains(&(Correction::AromaticCarboxyl, 1)));
        // Benzylic CH2 conjugation is present as well.
        assert!(active.contains(&(Correction::BenzylicMethylene, 1)));
    }

    #[test]
    fn phenolic_resonance_fires_for_a_paracetamol_like_map() {
        // The phenolic hydroxyl only exists on the fragment-map input path;
        // the notation parser emits plain hydroxyls.
        let counts = FragmentCounts::from_iter([
            (Fragment::Phenyl, 1),
            (Fragment::HydroxylPhenolic, 1),
            (Fragment::Methyl, 1),
        ]);
        let active = active(&counts);
        assert!(active.contains(&(Correction::PhenolicResonance, 1)));
        let energy = polar_energy_correction(&counts);
        assert!(energy >= 919.0 * 919.0);
    }

    #[test]
    fn per_occurrence_triggers_scale_with_count() {
        let counts = FragmentCounts::from_iter([(Fragment::Pyridine, 2)]);
        let expected = 2.0 * 650.0 * 650.0;
        assert!((polar_energy_correction(&counts) - expected).abs() < 1e-9);
    }

    #[test]
    fn diarylamine_requires_two_phenyl_rings() {
        let one_ring =
            FragmentCounts::from_iter([(Fragment::Phenyl, 1), (Fragment::AmineSecondary, 1)]);
        assert!(
            !active(&one_ring)
                .iter()
                .any(|(c, _)| *c == Correction::Diarylamine)
        );

        let two_rings =
            FragmentCounts::from_iter([(Fragment::Phenyl, 2), (Fragment::AmineSecondary, 1)]);
        assert!(
            active(&two_rings)
                .iter()
                .any(|(c, _)| *c == Correction::Diarylamine)
        );
    }

    #[test]
    fn correction_total_is_order_independent() {
        let forward = FragmentCounts::from_iter([
            (Fragment::Phenyl, 2),
            (Fragment::CarboxylicAcid, 1),
            (Fragment::AmineSecondary, 1),
            (Fragment::Pyridine, 1),
        ]);
        let reversed = FragmentCounts::from_iter([
            (Fragment::Pyridine, 1),
            (Fragment::AmineSecondary, 1),
            (Fragment::CarboxylicAcid, 1),
            (Fragment::Phenyl, 2),
        ]);
        assert_eq!(
            polar_energy_correction(&forward),
            polar_energy_correction(&reversed)
        );
    }

    #[test]
    fn empty_map_activates_nothing() {
        let counts = FragmentCounts::new();
        assert!(active(&counts).is_empty());
        assert_eq!(polar_energy_correction(&counts), 0.0);
    }
}
