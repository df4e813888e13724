//! Canonical coformer, counterion, and polymer screening set.
//!
//! Three families: pharmaceutically accepted salt-forming acids and bases
//! (GRAS counterions from approved products), neutral cocrystal formers
//! carrying robust supramolecular synthons, and amorphous-dispersion carrier
//! polymers with known glass-transition temperatures. Hansen triples are
//! literature group-contribution values for the pure substances.

use crate::core::models::fragment::{IonizationKind, PkaAnnotation};
use crate::core::models::record::HspTriple;
use crate::core::models::substance::{
    Coformer, CoformerKind, HygroscopicityRisk, SynthonType,
};
use phf::phf_map;

const fn hsp(dispersion: f64, polar: f64, hydrogen_bonding: f64) -> HspTriple {
    HspTriple::new(dispersion, polar, hydrogen_bonding)
}

const fn acid(value: f64) -> Option<PkaAnnotation> {
    Some(PkaAnnotation { value, kind: IonizationKind::Acid })
}

const fn base(value: f64) -> Option<PkaAnnotation> {
    Some(PkaAnnotation { value, kind: IonizationKind::Base })
}

#[rustfmt::skip]
pub static CATALOG: [Coformer; 33] = [
    // Salt-forming acids, strongest first. Screened against basic APIs.
    Coformer { id: "HCl", name: "Hydrochloric acid", kind: CoformerKind::AcidFormer, pka: acid(-7.0), hsp: hsp(17.0, 15.0, 18.0), synthon: SynthonType::MineralAcid, hygroscopicity: HygroscopicityRisk::High, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "H2SO4", name: "Sulfuric acid", kind: CoformerKind::AcidFormer, pka: acid(-3.0), hsp: hsp(18.0, 16.0, 25.0), synthon: SynthonType::MineralAcid, hygroscopicity: HygroscopicityRisk::High, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "MsOH", name: "Methanesulfonic acid", kind: CoformerKind::AcidFormer, pka: acid(-1.9), hsp: hsp(17.5, 15.0, 16.0), synthon: SynthonType::SulfonicAcid, hygroscopicity: HygroscopicityRisk::Medium, genotoxic_alert: true, glass_transition: None },
    Coformer { id: "TsOH", name: "p-Toluenesulfonic acid", kind: CoformerKind::AcidFormer, pka: acid(-1.3), hsp: hsp(19.0, 12.0, 14.0), synthon: SynthonType::SulfonicAcid, hygroscopicity: HygroscopicityRisk::Medium, genotoxic_alert: true, glass_transition: None },
    Coformer { id: "BsOH", name: "Benzenesulfonic acid", kind: CoformerKind::AcidFormer, pka: acid(0.7), hsp: hsp(19.2, 12.5, 14.5), synthon: SynthonType::SulfonicAcid, hygroscopicity: HygroscopicityRisk::Medium, genotoxic_alert: true, glass_transition: None },
    Coformer { id: "Maleic", name: "Maleic acid", kind: CoformerKind::AcidFormer, pka: acid(1.9), hsp: hsp(20.0, 10.5, 17.5), synthon: SynthonType::CarboxylicAcid, hygroscopicity: HygroscopicityRisk::Low, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "H3PO4", name: "Phosphoric acid", kind: CoformerKind::AcidFormer, pka: acid(2.1), hsp: hsp(18.0, 14.0, 28.0), synthon: SynthonType::MineralAcid, hygroscopicity: HygroscopicityRisk::Medium, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "Tartaric", name: "L-Tartaric acid", kind: CoformerKind::AcidFormer, pka: acid(3.0), hsp: hsp(18.2, 12.5, 26.0), synthon: SynthonType::CarboxylicAcid, hygroscopicity: HygroscopicityRisk::Medium, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "Fumaric", name: "Fumaric acid", kind: CoformerKind::AcidFormer, pka: acid(3.0), hsp: hsp(18.5, 8.0, 12.0), synthon: SynthonType::CarboxylicAcid, hygroscopicity: HygroscopicityRisk::Low, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "Citric", name: "Citric acid", kind: CoformerKind::AcidFormer, pka: acid(3.1), hsp: hsp(18.1, 11.2, 24.2), synthon: SynthonType::CarboxylicAcid, hygroscopicity: HygroscopicityRisk::Medium, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "Malic", name: "L-Malic acid", kind: CoformerKind::AcidFormer, pka: acid(3.4), hsp: hsp(18.0, 11.5, 22.0), synthon: SynthonType::CarboxylicAcid, hygroscopicity: HygroscopicityRisk::Medium, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "Succinic", name: "Succinic acid", kind: CoformerKind::AcidFormer, pka: acid(4.2), hsp: hsp(18.0, 8.5, 14.5), synthon: SynthonType::CarboxylicAcid, hygroscopicity: HygroscopicityRisk::Low, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "Benzoic", name: "Benzoic acid", kind: CoformerKind::AcidFormer, pka: acid(4.2), hsp: hsp(18.2, 6.9, 9.8), synthon: SynthonType::CarboxylicAcid, hygroscopicity: HygroscopicityRisk::Low, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "Acetic", name: "Acetic acid", kind: CoformerKind::AcidFormer, pka: acid(4.76), hsp: hsp(14.5, 8.0, 13.5), synthon: SynthonType::CarboxylicAcid, hygroscopicity: HygroscopicityRisk::Low, genotoxic_alert: false, glass_transition: None },
    // Salt-forming bases. Screened against acidic APIs.
    Coformer { id: "Tris", name: "Tromethamine", kind: CoformerKind::BaseFormer, pka: base(8.1), hsp: hsp(17.0, 10.0, 22.0), synthon: SynthonType::AminoBase, hygroscopicity: HygroscopicityRisk::Low, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "DEA", name: "Diethanolamine", kind: CoformerKind::BaseFormer, pka: base(8.9), hsp: hsp(17.2, 10.8, 21.2), synthon: SynthonType::AminoBase, hygroscopicity: HygroscopicityRisk::High, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "Meglumine", name: "Meglumine", kind: CoformerKind::BaseFormer, pka: base(9.6), hsp: hsp(17.5, 11.0, 24.0), synthon: SynthonType::AminoBase, hygroscopicity: HygroscopicityRisk::Medium, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "Lysine", name: "L-Lysine", kind: CoformerKind::BaseFormer, pka: base(10.5), hsp: hsp(17.5, 12.0, 24.0), synthon: SynthonType::AminoBase, hygroscopicity: HygroscopicityRisk::Medium, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "Arginine", name: "L-Arginine", kind: CoformerKind::BaseFormer, pka: base(12.5), hsp: hsp(18.0, 13.0, 26.0), synthon: SynthonType::AminoBase, hygroscopicity: HygroscopicityRisk::Medium, genotoxic_alert: false, glass_transition: None },
    // Neutral cocrystal formers.
    Coformer { id: "Nicotinamide", name: "Nicotinamide", kind: CoformerKind::Coformer, pka: base(3.3), hsp: hsp(19.5, 13.0, 12.5), synthon: SynthonType::PyridineAmide, hygroscopicity: HygroscopicityRisk::Low, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "Isonicotinamide", name: "Isonicotinamide", kind: CoformerKind::Coformer, pka: base(3.6), hsp: hsp(19.5, 13.2, 12.8), synthon: SynthonType::PyridineAmide, hygroscopicity: HygroscopicityRisk::Low, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "Saccharin", name: "Saccharin", kind: CoformerKind::Coformer, pka: acid(1.6), hsp: hsp(20.0, 12.5, 10.5), synthon: SynthonType::Imide, hygroscopicity: HygroscopicityRisk::Low, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "Urea", name: "Urea", kind: CoformerKind::Coformer, pka: base(0.1), hsp: hsp(20.9, 18.7, 26.4), synthon: SynthonType::Urea, hygroscopicity: HygroscopicityRisk::High, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "Caffeine", name: "Caffeine", kind: CoformerKind::Coformer, pka: base(1.4), hsp: hsp(19.5, 10.1, 13.0), synthon: SynthonType::Amide, hygroscopicity: HygroscopicityRisk::Low, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "Glutaric", name: "Glutaric acid", kind: CoformerKind::Coformer, pka: acid(4.3), hsp: hsp(17.8, 8.8, 13.5), synthon: SynthonType::CarboxylicAcid, hygroscopicity: HygroscopicityRisk::Medium, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "Oxalic", name: "Oxalic acid", kind: CoformerKind::Coformer, pka: acid(1.2), hsp: hsp(17.5, 12.0, 21.0), synthon: SynthonType::CarboxylicAcid, hygroscopicity: HygroscopicityRisk::Medium, genotoxic_alert: false, glass_transition: None },
    Coformer { id: "PABA", name: "4-Aminobenzoic acid", kind: CoformerKind::Coformer, pka: acid(4.8), hsp: hsp(18.8, 8.5, 13.5), synthon: SynthonType::CarboxylicAcid, hygroscopicity: HygroscopicityRisk::Low, genotoxic_alert: false, glass_transition: None },
    // Amorphous solid dispersion carrier polymers.
    Coformer { id: "PVP-K30", name: "Povidone K30", kind: CoformerKind::Polymer, pka: None, hsp: hsp(21.4, 11.6, 21.6), synthon: SynthonType::None, hygroscopicity: HygroscopicityRisk::High, genotoxic_alert: false, glass_transition: Some(163.0) },
    Coformer { id: "PVP-VA64", name: "Copovidone VA64", kind: CoformerKind::Polymer, pka: None, hsp: hsp(16.4, 9.2, 11.2), synthon: SynthonType::None, hygroscopicity: HygroscopicityRisk::Medium, genotoxic_alert: false, glass_transition: Some(101.0) },
    Coformer { id: "HPMC", name: "Hypromellose", kind: CoformerKind::Polymer, pka: None, hsp: hsp(18.0, 8.6, 11.9), synthon: SynthonType::None, hygroscopicity: HygroscopicityRisk::Medium, genotoxic_alert: false, glass_transition: Some(172.0) },
    Coformer { id: "HPMC-AS", name: "Hypromellose acetate succinate", kind: CoformerKind::Polymer, pka: None, hsp: hsp(16.9, 10.6, 10.9), synthon: SynthonType::None, hygroscopicity: HygroscopicityRisk::Low, genotoxic_alert: false, glass_transition: Some(122.0) },
    Coformer { id: "Soluplus", name: "Soluplus", kind: CoformerKind::Polymer, pka: None, hsp: hsp(17.5, 7.1, 9.4), synthon: SynthonType::None, hygroscopicity: HygroscopicityRisk::Low, genotoxic_alert: false, glass_transition: Some(70.0) },
    Coformer { id: "PEG-6000", name: "Macrogol 6000", kind: CoformerKind::Polymer, pka: None, hsp: hsp(17.3, 3.0, 9.4), synthon: SynthonType::None, hygroscopicity: HygroscopicityRisk::Medium, genotoxic_alert: false, glass_transition: Some(-20.0) },
];

static BY_ID: phf::Map<&'static str, usize> = phf_map! {
    "HCl" => 0, "H2SO4" => 1, "MsOH" => 2, "TsOH" => 3, "BsOH" => 4,
    "Maleic" => 5, "H3PO4" => 6, "Tartaric" => 7, "Fumaric" => 8,
    "Citric" => 9, "Malic" => 10, "Succinic" => 11, "Benzoic" => 12,
    "Acetic" => 13, "Tris" => 14, "DEA" => 15, "Meglumine" => 16,
    "Lysine" => 17, "Arginine" => 18, "Nicotinamide" => 19,
    "Isonicotinamide" => 20, "Saccharin" => 21, "Urea" => 22,
    "Caffeine" => 23, "Glutaric" => 24, "Oxalic" => 25, "PABA" => 26,
    "PVP-K30" => 27, "PVP-VA64" => 28, "HPMC" => 29, "HPMC-AS" => 30,
    "Soluplus" => 31, "PEG-6000" => 32,
};

/// Looks up a coformer by its catalog identifier.
pub fn by_id(id: &str) -> Option<&'static Coformer> {
    BY_ID.get(id).map(|&index| &CATALOG[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_unique_and_indexed() {
        for (index, coformer) in CATALOG.iter().enumerate() {
            assert_eq!(BY_ID.get(coformer.id), Some(&index), "{}", coformer.id);
        }
        assert_eq!(BY_ID.len(), CATALOG.len());
    }

    #[test]
    fn polymers_carry_a_glass_transition_and_nothing_else_does() {
        for coformer in &CATALOG {
            assert_eq!(
                coformer.glass_transition.is_some(),
                coformer.is_polymer(),
                "{}",
                coformer.id
            );
        }
    }

    #[test]
    fn polymers_have_no_pka() {
        for coformer in CATALOG.iter().filter(|c| c.is_polymer()) {
            assert!(coformer.pka.is_none(), "{}", coformer.id);
        }
    }

    #[test]
    fn ionization_kind_matches_the_former_kind() {
        for coformer in &CATALOG {
            let Some(pka) = coformer.pka else { continue };
            match coformer.kind {
                CoformerKind::AcidFormer => {
                    assert_eq!(pka.kind, IonizationKind::Acid, "{}", coformer.id)
                }
                CoformerKind::BaseFormer => {
                    assert_eq!(pka.kind, IonizationKind::Base, "{}", coformer.id)
                }
                _ => {}
            }
        }
    }

    #[test]
    fn sulfonate_counterions_carry_the_genotoxic_alert() {
        for id in ["MsOH", "TsOH", "BsOH"] {
            assert!(by_id(id).unwrap().genotoxic_alert, "{id}");
        }
        assert!(!by_id("Citric").unwrap().genotoxic_alert);
    }
}
