//! Heuristic linear-notation parser.
//!
//! Extracts a fragment count map from a SMILES-like string by substring
//! pattern matching, without building a molecular graph. Accuracy is on the
//! order of ±15-20% on the derived parameters; this is a convenience input
//! path, not a source of truth. Aromaticity is inferred from lower-case atom
//! symbols, ring count from ⌊aromatic C / 6⌋, and amine classes from a crude
//! subtraction partition rather than real adjacency.
//!
//! A string with no recognizable pattern yields an empty map; callers must
//! treat that as "could not parse", not as a zero-fragment molecule.

use crate::core::models::fragment::{Fragment, FragmentCounts};

/// Count of a byte in the input.
fn count_byte(s: &[u8], byte: u8) -> u32 {
    s.iter().filter(|&&b| b == byte).count() as u32
}

/// Count of a byte where the following byte fails a predicate.
fn count_byte_not_before(s: &[u8], byte: u8, excluded: &[u8]) -> u32 {
    s.iter()
        .enumerate()
        .filter(|&(i, &b)| {
            b == byte && s.get(i + 1).is_none_or(|next| !excluded.contains(next))
        })
        .count() as u32
}

/// Non-overlapping substring occurrences.
fn count_substring(s: &[u8], pattern: &str) -> u32 {
    let pattern = pattern.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i + pattern.len() <= s.len() {
        if &s[i..i + pattern.len()] == pattern {
            count += 1;
            i += pattern.len();
        } else {
            i += 1;
        }
    }
    count
}

/// Occurrences of a substring whose next byte is not in `excluded` (end of
/// string counts as a match).
fn count_substring_not_before(s: &[u8], pattern: &str, excluded: &[u8]) -> u32 {
    let pattern = pattern.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i + pattern.len() <= s.len() {
        if &s[i..i + pattern.len()] == pattern {
            if s.get(i + pattern.len()).is_none_or(|next| !excluded.contains(next)) {
                count += 1;
            }
            i += pattern.len();
        } else {
            i += 1;
        }
    }
    count
}

/// Parses a linear notation string into a fragment count map.
pub fn parse(notation: &str) -> FragmentCounts {
    let trimmed = notation.trim();
    if trimmed.is_empty() {
        return FragmentCounts::new();
    }
    let s = trimmed.as_bytes();

    // Atom tallies. Lower case is aromatic; `C` excludes chlorine and `S`
    // excludes silicon.
    let aromatic_c = count_byte(s, b'c');
    let aromatic_n = count_byte(s, b'n');
    let aliphatic_c = count_byte_not_before(s, b'C', b"l");
    let aliphatic_n = count_byte(s, b'N');
    let aliphatic_s = count_byte_not_before(s, b'S', b"i");
    let fluorine = count_byte(s, b'F');
    let chlorine = count_substring(s, "Cl");
    let bromine = count_substring(s, "Br");
    let iodine = s
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'I' && (i == 0 || s[i - 1] != b'B'))
        .count() as u32;

    // Carboxylic acid takes priority over ester and generic carbonyl.
    let mut carboxyl =
        count_substring_not_before(s, "C(=O)O", b"H") + count_substring(s, "C(=O)[OH]");
    if carboxyl == 0 {
        carboxyl =
            (count_substring(s, "OC(=O)") + count_substring(s, "C(=O)O")).min(4);
    }

    // Hydroxyl: oxygens outside a carbonyl context. Only consulted when no
    // carboxyl claimed them.
    let hydroxyl = s
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'O' && (i == 0 || s[i - 1] != b'='))
        .count() as u32;

    let carbonyl_total = count_substring(s, "C(=O)");
    let ester = (count_substring(s, "C(=O)O") + count_substring(s, "OC(=O)"))
        .saturating_sub(carboxyl)
        .min(3);
    let carbonyl = carbonyl_total.saturating_sub(carboxyl + ester);

    // Amine partition by subtraction, not adjacency.
    let primary_amine = count_byte_not_before(s, b'N', b"(cn");
    let secondary_amine = count_substring(s, "[NH]");
    let tertiary_amine =
        i64::from(aliphatic_n) - i64::from(primary_amine) - i64::from(secondary_amine);

    let nitrile = count_substring(s, "C#N");

    // Ring approximation: six aromatic carbons per ring, with a pyridine
    // minimum when any aromatic nitrogen is present.
    let mut aromatic_rings = aromatic_c / 6;
    if aromatic_n > 0 {
        aromatic_rings = aromatic_rings.max(1);
    }

    let mut counts = FragmentCounts::new();
    let pyridine_rings = aromatic_n.min(aromatic_rings);
    counts.add(Fragment::Pyridine, pyridine_rings);
    counts.add(Fragment::Phenyl, aromatic_rings - pyridine_rings);
    counts.add(Fragment::CarboxylicAcid, carboxyl);
    if carboxyl == 0 {
        counts.add(Fragment::HydroxylAliphatic, hydroxyl.min(4));
    }
    counts.add(Fragment::Carbonyl, carbonyl);
    counts.add(Fragment::Ester, ester);
    if primary_amine > 0 {
        if aromatic_c > 0 {
            counts.add(Fragment::AminePrimaryAromatic, primary_amine.min(2));
        } else {
            counts.add(Fragment::AminePrimary, primary_amine.min(2));
        }
    }
    counts.add(Fragment::AmineSecondary, secondary_amine);
    if tertiary_amine > 0 && tertiary_amine < 6 {
        counts.add(Fragment::AmineTertiary, tertiary_amine as u32);
    }
    counts.add(Fragment::Nitrile, nitrile);
    if fluorine >= 3 && aliphatic_c > 0 {
        counts.add(Fragment::Trifluoromethyl, fluorine / 3);
    } else {
        counts.add(Fragment::Fluoro, fluorine);
    }
    counts.add(Fragment::Chloro, chlorine);
    counts.add(Fragment::Bromo, bromine);
    counts.add(Fragment::Iodo, iodine);
    counts.add(Fragment::Thioether, aliphatic_s);

    // Unclaimed aliphatic carbons become one terminal methyl plus chain
    // methylenes (chain approximation, not branching-aware).
    let accounted = counts.count(Fragment::Phenyl) * 6
        + counts.count(Fragment::Pyridine) * 5
        + carboxyl
        + ester
        + carbonyl
        + nitrile;
    let remaining = aliphatic_c.saturating_sub(accounted);
    if remaining > 1 {
        counts.add(Fragment::Methylene, remaining - 1);
        counts.add(Fragment::Methyl, 1);
    } else if remaining == 1 {
        counts.add(Fragment::Methyl, 1);
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_strings_parse_to_an_empty_map() {
        assert!(parse("").is_empty());
        assert!(parse("   ").is_empty());
    }

    #[test]
    fn benzene_parses_to_a_single_aromatic_ring() {
        let counts = parse("c1ccccc1");
        assert_eq!(counts.count(Fragment::Phenyl), 1);
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn aromatic_nitrogen_forces_a_pyridine_ring() {
        let counts = parse("c1ccncc1");
        assert_eq!(counts.count(Fragment::Pyridine), 1);
        assert_eq!(counts.count(Fragment::Phenyl), 0);
    }

    #[test]
    fn acetic_acid_claims_the_carbonyl_for_the_carboxyl() {
        let counts = parse("CC(=O)O");
        assert_eq!(counts.count(Fragment::CarboxylicAcid), 1);
        assert_eq!(counts.count(Fragment::Carbonyl), 0);
        // The carboxyl suppresses the hydroxyl pass entirely.
        assert_eq!(counts.count(Fragment::HydroxylAliphatic), 0);
    }

    #[test]
    fn chlorine_is_not_double_counted_as_aliphatic_carbon() {
        let counts = parse("CCCl");
        assert_eq!(counts.count(Fragment::Chloro), 1);
        assert_eq!(counts.count(Fragment::Methyl), 1);
        assert_eq!(counts.count(Fragment::Methylene), 1);
    }

    #[test]
    fn three_fluorines_on_an_aliphatic_carbon_collapse_to_cf3() {
        let counts = parse("FC(F)(F)C");
        assert_eq!(counts.count(Fragment::Trifluoromethyl), 1);
        assert_eq!(counts.count(Fragment::Fluoro), 0);
    }

    #[test]
    fn lone_fluorine_stays_a_fluoro_fragment() {
        let counts = parse("Fc1ccccc1");
        assert_eq!(counts.count(Fragment::Fluoro), 1);
    }

    #[test]
    fn primary_amine_class_depends_on_aromatic_context() {
        assert_eq!(parse("CCN").count(Fragment::AminePrimary), 1);
        assert_eq!(
            parse("c1ccccc1N").count(Fragment::AminePrimaryAromatic),
            1
        );
    }

    #[test]
    fn chain_carbons_split_into_methyl_and_methylenes() {
        let counts = parse("CCCC");
        assert_eq!(counts.count(Fragment::Methyl), 1);
        assert_eq!(counts.count(Fragment::Methylene), 3);
    }

    #[test]
    fn nitrile_carbon_is_not_recounted_as_chain() {
        let counts = parse("CC#N");
        assert_eq!(counts.count(Fragment::Nitrile), 1);
        assert_eq!(counts.count(Fragment::Methyl), 1);
        assert_eq!(counts.count(Fragment::Methylene), 0);
    }

    #[test]
    fn ibuprofen_like_notation_estimates_an_acidic_api() {
        use crate::core::estimator;
        use crate::core::models::fragment::IonizationKind;

        let counts = parse("CC(C)Cc1ccc(cc1)C(C)C(=O)O");
        assert_eq!(counts.count(Fragment::CarboxylicAcid), 1);
        assert_eq!(counts.count(Fragment::Phenyl), 1);

        let record = estimator::aggregate(&counts);
        let ionization = record.ionization.unwrap();
        assert_eq!(ionization.kind, IonizationKind::Acid);
        assert!((ionization.pka - 4.5).abs() < 1e-9);
        assert!(record.hsp.dispersion >= 12.0);
        assert!(record.molecular_weight > 0.0);
    }
}
