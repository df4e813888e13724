//! Group-contribution parameter estimator.
//!
//! Implements the Stefanis-Panayiotou (2008) two-level Hansen parameter
//! method together with Rekker-style LogP fragment summation and a Joback
//! melting point estimate:
//!
//! ```text
//! δd = (Σ Fd·n) / V
//! δp = √(Σ Fp²·n + Σ Fpj²) / V
//! δh = √(2·Σ Uh·n / V)
//! δt = √(δd² + δp² + δh²)
//! ```
//!
//! The polar sum is over squared contributions per occurrence (not the
//! square of the total), with second-order Fpj² corrections added before the
//! root. Components are rounded to two decimals; the dispersion component is
//! floored at [`DISPERSION_FLOOR`] before δt so the Euclidean invariant
//! holds on the published triple.

use crate::core::constants::{
    AMPHOTERIC_PIVOT_PKA, DISPERSION_FLOOR, MELTING_POINT_BASE, MOLAR_VOLUME_MINIMUM,
    MOLAR_VOLUME_MW_FACTOR, PKA_CONFIDENCE_BAND,
};
use crate::core::models::fragment::FragmentCounts;
use crate::core::models::record::{AggregateParameterRecord, HspTriple, IonizationProfile};
use crate::core::tables::corrections;

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Derives the full aggregate parameter record from a fragment count map.
///
/// An empty map yields the degenerate all-zero record; the dispersion floor
/// and molar volume fallback apply only to non-empty inputs.
pub fn aggregate(counts: &FragmentCounts) -> AggregateParameterRecord {
    if counts.is_empty() {
        return AggregateParameterRecord::zero();
    }

    let mut sum_fd = 0.0;
    let mut sum_fp_sq = 0.0;
    let mut sum_uh = 0.0;
    let mut sum_volume = 0.0;
    let mut sum_logp = 0.0;
    let mut sum_weight = 0.0;
    let mut sum_donors = 0u32;
    let mut sum_acceptors = 0u32;
    let mut sum_tpsa = 0.0;
    let mut sum_rotatable = 0u32;
    let mut sum_melting = 0.0;

    for (fragment, count) in counts.iter() {
        let def = fragment.definition();
        let n = f64::from(count);
        sum_fd += def.dispersion * n;
        sum_fp_sq += def.polar * def.polar * n;
        sum_uh += def.hbond_energy * n;
        sum_volume += def.molar_volume * n;
        sum_logp += def.logp * n;
        sum_weight += def.weight * n;
        sum_donors += def.donors * count;
        sum_acceptors += def.acceptors * count;
        sum_tpsa += def.tpsa * n;
        sum_rotatable += def.rotatable_bonds * count;
        sum_melting += def.melting_point * n;
    }

    sum_fp_sq += corrections::polar_energy_correction(counts);

    // Ring and branching volume corrections can drive the sum non-positive.
    if sum_volume <= 0.0 {
        sum_volume = (sum_weight * MOLAR_VOLUME_MW_FACTOR).max(MOLAR_VOLUME_MINIMUM);
    }

    let dispersion = round2(sum_fd / sum_volume).max(DISPERSION_FLOOR);
    let polar = if sum_fp_sq > 0.0 {
        round2(sum_fp_sq.sqrt() / sum_volume)
    } else {
        0.0
    };
    let hydrogen_bonding = if sum_uh > 0.0 {
        round2((2.0 * sum_uh / sum_volume).sqrt())
    } else {
        0.0
    };
    let hsp = HspTriple::new(dispersion, polar, hydrogen_bonding);

    AggregateParameterRecord {
        hsp,
        total: round2(hsp.total()),
        molar_volume: round1(sum_volume),
        logp: round2(sum_logp),
        molecular_weight: round1(sum_weight),
        donors: sum_donors,
        acceptors: sum_acceptors,
        tpsa: round1(sum_tpsa),
        rotatable_bonds: sum_rotatable,
        melting_point: round1(MELTING_POINT_BASE + sum_melting),
        ionization: estimate_ionization(counts),
    }
}

/// Picks the pharmacologically dominant ionizable group.
///
/// Acid-annotated fragments compete by lowest pKa, base-annotated by
/// highest. Amphoteric molecules resolve to the acid when its pKa sits below
/// the neutral pivot, otherwise to the base.
pub fn estimate_ionization(counts: &FragmentCounts) -> Option<IonizationProfile> {
    let mut strongest_acid: Option<IonizationProfile> = None;
    let mut strongest_base: Option<IonizationProfile> = None;

    for (fragment, _) in counts.iter() {
        let Some(annotation) = fragment.definition().pka else {
            continue;
        };
        let profile = IonizationProfile {
            pka: annotation.value,
            kind: annotation.kind,
            confidence: PKA_CONFIDENCE_BAND,
        };
        if annotation.kind.is_acidic() {
            if strongest_acid.is_none_or(|a| profile.pka < a.pka) {
                strongest_acid = Some(profile);
            }
        } else if strongest_base.is_none_or(|b| profile.pka > b.pka) {
            strongest_base = Some(profile);
        }
    }

    match (strongest_acid, strongest_base) {
        (Some(acid), Some(base)) => {
            if acid.pka < AMPHOTERIC_PIVOT_PKA {
                Some(acid)
            } else {
                Some(base)
            }
        }
        (Some(acid), None) => Some(acid),
        (None, Some(base)) => Some(base),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::fragment::{Fragment, IonizationKind};

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_map_yields_the_zero_record() {
        let record = aggregate(&FragmentCounts::new());
        assert_eq!(record, AggregateParameterRecord::zero());
    }

    #[test]
    fn total_matches_the_clamped_triple_norm() {
        let counts = FragmentCounts::from_iter([
            (Fragment::Phenyl, 1),
            (Fragment::CarboxylicAcid, 1),
            (Fragment::Methyl, 2),
            (Fragment::Methine, 1),
            (Fragment::Methylene, 1),
        ]);
        let record = aggregate(&counts);
        assert_close(record.total, record.hsp.total(), 0.006);
        assert!(record.hsp.dispersion >= 12.0);
    }

    #[test]
    fn dispersion_floor_applies_after_the_volume_fallback() {
        // Tertiary amine alone has a negative volume correction, forcing the
        // molecular-weight fallback and a dispersion value far below the
        // floor.
        let counts = FragmentCounts::from_iter([(Fragment::AmineTertiary, 1)]);
        let record = aggregate(&counts);
        assert_close(record.molar_volume, 50.0, 1e-9);
        assert_close(record.hsp.dispersion, 12.0, 1e-9);
    }

    #[test]
    fn polar_component_sums_squares_per_occurrence() {
        // Two carbonyls: Σ Fp²·n = 2·770², not (2·770)².
        let counts = FragmentCounts::from_iter([(Fragment::Carbonyl, 2)]);
        let record = aggregate(&counts);
        let volume = 2.0 * 10.8;
        let expected = (2.0 * 770.0 * 770.0_f64).sqrt() / volume;
        assert_close(record.hsp.polar, (expected * 100.0).round() / 100.0, 1e-9);
    }

    #[test]
    fn second_order_correction_raises_the_polar_component() {
        let plain = FragmentCounts::from_iter([(Fragment::Methyl, 1)]);
        let with_ring = FragmentCounts::from_iter([(Fragment::Pyridine, 1)]);
        // Pyridine carries both a first-order Fp and the 650 ring correction;
        // the correction term alone adds 650² to the polar sum.
        let record = aggregate(&with_ring);
        let volume = 61.0;
        let expected = ((800.0 * 800.0 + 650.0 * 650.0_f64).sqrt() / volume * 100.0).round()
            / 100.0;
        assert_close(record.hsp.polar, expected, 1e-9);
        assert!(aggregate(&plain).hsp.polar < record.hsp.polar);
    }

    #[test]
    fn descriptor_sums_scale_with_counts() {
        let counts = FragmentCounts::from_iter([
            (Fragment::HydroxylAliphatic, 2),
            (Fragment::Ether, 1),
        ]);
        let record = aggregate(&counts);
        assert_eq!(record.donors, 2);
        assert_eq!(record.acceptors, 3);
    }

    #[test]
    fn single_acid_dominates_ionization() {
        let counts = FragmentCounts::from_iter([
            (Fragment::CarboxylicAcid, 1),
            (Fragment::Methyl, 1),
        ]);
        let profile = estimate_ionization(&counts).unwrap();
        assert_eq!(profile.kind, IonizationKind::Acid);
        assert_close(profile.pka, 4.5, 1e-9);
        assert_close(profile.confidence, 1.5, 1e-9);
    }

    #[test]
    fn amphoteric_resolves_by_the_acid_pka_pivot() {
        // Carboxylic acid (4.5) beats the aliphatic amine: acid pKa < 7.
        let acidic = FragmentCounts::from_iter([
            (Fragment::CarboxylicAcid, 1),
            (Fragment::AminePrimary, 1),
        ]);
        assert_eq!(
            estimate_ionization(&acidic).unwrap().kind,
            IonizationKind::Acid
        );

        // Phenol (10.0) loses to the amine: acid pKa ≥ 7 hands over to the
        // strongest base.
        let basic = FragmentCounts::from_iter([
            (Fragment::HydroxylPhenolic, 1),
            (Fragment::AminePrimary, 1),
        ]);
        let profile = estimate_ionization(&basic).unwrap();
        assert_eq!(profile.kind, IonizationKind::Base);
        assert_close(profile.pka, 10.0, 1e-9);
    }

    #[test]
    fn unannotated_fragments_yield_no_ionization() {
        let counts = FragmentCounts::from_iter([(Fragment::Methyl, 3)]);
        assert!(estimate_ionization(&counts).is_none());
    }
}
