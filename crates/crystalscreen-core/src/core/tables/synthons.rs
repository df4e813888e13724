//! Etter synthon compatibility scores.
//!
//! Scores the hydrogen-bonding motif a candidate offers against the API's
//! primary functional group: 2 for robust heterosynthons (acid–pyridine,
//! acid–amide, acid–base pairs), 1 for homosynthons and weaker donor/acceptor
//! pairs, 0 when no recurring motif is expected. Pairs not listed score 0.

use crate::core::models::substance::{ApiFunctionalGroup, SynthonType};

/// Etter score for an (API group, candidate synthon) pair, in {0, 1, 2}.
pub fn score(api: ApiFunctionalGroup, synthon: SynthonType) -> u8 {
    use ApiFunctionalGroup as Api;
    use SynthonType as Syn;

    match (api, synthon) {
        // Robust heterosynthons.
        (Api::CarboxylicAcid, Syn::PyridineAmide) => 2,
        (Api::CarboxylicAcid, Syn::Amide) => 2,
        (Api::CarboxylicAcid, Syn::Urea) => 2,
        (Api::CarboxylicAcid, Syn::AminoBase) => 2,
        (Api::Amide, Syn::CarboxylicAcid) => 2,
        (Api::Amine, Syn::CarboxylicAcid) => 2,
        (Api::Amine, Syn::SulfonicAcid) => 2,
        (Api::Amine, Syn::MineralAcid) => 2,
        (Api::Pyridine, Syn::CarboxylicAcid) => 2,
        (Api::Pyridine, Syn::SulfonicAcid) => 2,
        (Api::Phenol, Syn::PyridineAmide) => 2,
        (Api::Sulfonamide, Syn::PyridineAmide) => 2,
        (Api::Sulfonamide, Syn::AminoBase) => 2,
        (Api::Hydroxyl, Syn::PyridineAmide) => 2,

        // Homosynthons and weaker pairings.
        (Api::CarboxylicAcid, Syn::CarboxylicAcid) => 1,
        (Api::CarboxylicAcid, Syn::Imide) => 1,
        (Api::CarboxylicAcid, Syn::Hydroxyl) => 1,
        (Api::Amide, Syn::Amide) => 1,
        (Api::Amide, Syn::PyridineAmide) => 1,
        (Api::Amide, Syn::Urea) => 1,
        (Api::Amide, Syn::Imide) => 1,
        (Api::Amine, Syn::Amide) => 1,
        (Api::Amine, Syn::Hydroxyl) => 1,
        (Api::Pyridine, Syn::Urea) => 1,
        (Api::Pyridine, Syn::Hydroxyl) => 1,
        (Api::Phenol, Syn::Amide) => 1,
        (Api::Phenol, Syn::AminoBase) => 1,
        (Api::Phenol, Syn::Urea) => 1,
        (Api::Sulfonamide, Syn::CarboxylicAcid) => 1,
        (Api::Sulfonamide, Syn::Urea) => 1,
        (Api::Hydroxyl, Syn::CarboxylicAcid) => 1,
        (Api::Hydroxyl, Syn::Amide) => 1,
        (Api::Hydroxyl, Syn::Urea) => 1,
        (Api::Hydroxyl, Syn::AminoBase) => 1,

        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ApiFunctionalGroup as Api;
    use SynthonType as Syn;

    #[test]
    fn acid_pyridine_is_a_robust_heterosynthon() {
        assert_eq!(score(Api::CarboxylicAcid, Syn::PyridineAmide), 2);
        assert_eq!(score(Api::Pyridine, Syn::CarboxylicAcid), 2);
    }

    #[test]
    fn acid_dimer_is_a_homosynthon() {
        assert_eq!(score(Api::CarboxylicAcid, Syn::CarboxylicAcid), 1);
    }

    #[test]
    fn absent_pairs_score_zero() {
        assert_eq!(score(Api::Pyridine, Syn::Imide), 0);
        assert_eq!(score(Api::Hydroxyl, Syn::MineralAcid), 0);
    }

    #[test]
    fn polymers_never_score() {
        for api in [
            Api::CarboxylicAcid,
            Api::Amine,
            Api::Pyridine,
            Api::Amide,
            Api::Phenol,
            Api::Sulfonamide,
            Api::Hydroxyl,
        ] {
            assert_eq!(score(api, Syn::None), 0);
        }
    }

    #[test]
    fn scores_never_exceed_two() {
        let synthons = [
            Syn::CarboxylicAcid,
            Syn::Amide,
            Syn::PyridineAmide,
            Syn::Imide,
            Syn::Urea,
            Syn::SulfonicAcid,
            Syn::MineralAcid,
            Syn::AminoBase,
            Syn::Hydroxyl,
            Syn::None,
        ];
        for api in [
            Api::CarboxylicAcid,
            Api::Amine,
            Api::Pyridine,
            Api::Amide,
            Api::Phenol,
            Api::Sulfonamide,
            Api::Hydroxyl,
        ] {
            for synthon in synthons {
                assert!(score(api, synthon) <= 2);
            }
        }
    }
}
