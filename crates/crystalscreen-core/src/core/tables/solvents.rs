//! Canonical pharmaceutical solvent screening set.
//!
//! Thirty solvents covering the protic/aprotic/ether/ester/halogenated/
//! hydrocarbon space used in early crystallisation screens, each carrying
//! Hansen parameters, physical constants, and its ICH Q3C residual-solvent
//! class. The catalog is immutable and versioned via
//! [`CATALOG_VERSION`](crate::core::constants::CATALOG_VERSION).

use crate::core::models::record::HspTriple;
use crate::core::models::substance::{IchClass, Solvent, SolventCategory};
use phf::phf_map;

const fn hsp(dispersion: f64, polar: f64, hydrogen_bonding: f64) -> HspTriple {
    HspTriple::new(dispersion, polar, hydrogen_bonding)
}

#[rustfmt::skip]
pub static CATALOG: [Solvent; 30] = [
    // Protic alcohols and diols.
    Solvent { id: "MeOH", name: "Methanol", hsp: hsp(15.1, 12.3, 22.3), boiling_point: 64.7, melting_point: -98.0, density: 0.791, viscosity: 0.55, dielectric: 32.7, molecular_weight: 32.0, ich_class: IchClass::Two, ich_ppm: Some(3000), category: SolventCategory::ProticAlcohol, protic: true, water_miscible: true },
    Solvent { id: "EtOH", name: "Ethanol", hsp: hsp(15.8, 8.8, 19.4), boiling_point: 78.4, melting_point: -114.0, density: 0.789, viscosity: 1.08, dielectric: 24.5, molecular_weight: 46.1, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::ProticAlcohol, protic: true, water_miscible: true },
    Solvent { id: "IPA", name: "Isopropanol", hsp: hsp(15.8, 6.1, 16.4), boiling_point: 82.6, melting_point: -89.0, density: 0.786, viscosity: 2.04, dielectric: 17.9, molecular_weight: 60.1, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::ProticAlcohol, protic: true, water_miscible: true },
    Solvent { id: "EthGly", name: "Ethylene Glycol", hsp: hsp(17.0, 11.0, 26.0), boiling_point: 197.0, melting_point: -13.0, density: 1.113, viscosity: 16.1, dielectric: 37.7, molecular_weight: 62.1, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::ProticDiol, protic: true, water_miscible: true },
    Solvent { id: "PropGly", name: "Propylene Glycol", hsp: hsp(16.8, 9.4, 23.3), boiling_point: 188.0, melting_point: -60.0, density: 1.036, viscosity: 40.4, dielectric: 27.5, molecular_weight: 76.1, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::ProticDiol, protic: true, water_miscible: true },
    // Polar aprotics.
    Solvent { id: "ACN", name: "Acetonitrile", hsp: hsp(15.3, 18.0, 6.1), boiling_point: 81.6, melting_point: -46.0, density: 0.786, viscosity: 0.35, dielectric: 37.5, molecular_weight: 41.1, ich_class: IchClass::Two, ich_ppm: Some(410), category: SolventCategory::PolarAprotic, protic: false, water_miscible: true },
    Solvent { id: "Acetone", name: "Acetone", hsp: hsp(15.5, 10.4, 7.0), boiling_point: 56.1, melting_point: -95.0, density: 0.791, viscosity: 0.31, dielectric: 20.7, molecular_weight: 58.1, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::PolarAprotic, protic: false, water_miscible: true },
    Solvent { id: "MEK", name: "2-Butanone", hsp: hsp(16.0, 9.0, 5.1), boiling_point: 79.6, melting_point: -87.0, density: 0.805, viscosity: 0.41, dielectric: 18.5, molecular_weight: 72.1, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::PolarAprotic, protic: false, water_miscible: true },
    Solvent { id: "MIBK", name: "4-Methyl-2-pentanone", hsp: hsp(15.3, 6.1, 4.1), boiling_point: 117.0, melting_point: -85.0, density: 0.796, viscosity: 0.58, dielectric: 13.1, molecular_weight: 100.2, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::PolarAprotic, protic: false, water_miscible: false },
    Solvent { id: "DMF", name: "Dimethylformamide", hsp: hsp(17.4, 13.7, 11.3), boiling_point: 153.0, melting_point: -61.0, density: 0.944, viscosity: 0.90, dielectric: 36.7, molecular_weight: 73.1, ich_class: IchClass::Two, ich_ppm: Some(880), category: SolventCategory::PolarAprotic, protic: false, water_miscible: true },
    Solvent { id: "DMSO", name: "Dimethyl Sulfoxide", hsp: hsp(18.4, 16.4, 10.2), boiling_point: 189.0, melting_point: 18.5, density: 1.100, viscosity: 1.99, dielectric: 46.7, molecular_weight: 78.1, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::PolarAprotic, protic: false, water_miscible: true },
    Solvent { id: "NMP", name: "N-Methyl-2-pyrrolidone", hsp: hsp(18.0, 12.3, 7.2), boiling_point: 202.0, melting_point: -24.0, density: 1.028, viscosity: 1.65, dielectric: 32.0, molecular_weight: 99.1, ich_class: IchClass::Two, ich_ppm: Some(5300), category: SolventCategory::PolarAprotic, protic: false, water_miscible: true },
    Solvent { id: "DMA", name: "Dimethylacetamide", hsp: hsp(16.8, 11.5, 10.2), boiling_point: 165.0, melting_point: -20.0, density: 0.937, viscosity: 0.92, dielectric: 37.8, molecular_weight: 87.1, ich_class: IchClass::Two, ich_ppm: Some(1090), category: SolventCategory::PolarAprotic, protic: false, water_miscible: true },
    Solvent { id: "MeNO2", name: "Nitromethane", hsp: hsp(15.8, 18.8, 5.1), boiling_point: 101.2, melting_point: -29.0, density: 1.138, viscosity: 0.61, dielectric: 35.9, molecular_weight: 61.0, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::PolarAprotic, protic: false, water_miscible: false },
    // Ethers.
    Solvent { id: "THF", name: "Tetrahydrofuran", hsp: hsp(16.8, 5.7, 8.0), boiling_point: 66.0, melting_point: -108.0, density: 0.889, viscosity: 0.48, dielectric: 7.6, molecular_weight: 72.1, ich_class: IchClass::Two, ich_ppm: Some(720), category: SolventCategory::Ether, protic: false, water_miscible: true },
    Solvent { id: "DEE", name: "Diethyl Ether", hsp: hsp(14.5, 2.9, 5.1), boiling_point: 34.6, melting_point: -116.0, density: 0.713, viscosity: 0.22, dielectric: 4.3, molecular_weight: 74.1, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::Ether, protic: false, water_miscible: false },
    Solvent { id: "TBME", name: "tert-Butyl Methyl Ether", hsp: hsp(14.8, 4.3, 5.0), boiling_point: 55.2, melting_point: -109.0, density: 0.741, viscosity: 0.27, dielectric: 4.5, molecular_weight: 88.2, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::Ether, protic: false, water_miscible: false },
    Solvent { id: "Dioxane", name: "1,4-Dioxane", hsp: hsp(17.5, 1.8, 9.0), boiling_point: 101.3, melting_point: 11.8, density: 1.033, viscosity: 1.37, dielectric: 2.2, molecular_weight: 88.1, ich_class: IchClass::Two, ich_ppm: Some(380), category: SolventCategory::CyclicEther, protic: false, water_miscible: true },
    Solvent { id: "2MeTHF", name: "2-Methyltetrahydrofuran", hsp: hsp(16.9, 5.0, 5.0), boiling_point: 80.0, melting_point: -136.0, density: 0.855, viscosity: 0.46, dielectric: 6.9, molecular_weight: 86.1, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::Ether, protic: false, water_miscible: false },
    // Esters.
    Solvent { id: "EtOAc", name: "Ethyl Acetate", hsp: hsp(15.8, 5.3, 7.2), boiling_point: 77.1, melting_point: -84.0, density: 0.902, viscosity: 0.44, dielectric: 6.0, molecular_weight: 88.1, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::Ester, protic: false, water_miscible: false },
    // Halogenated.
    Solvent { id: "DCM", name: "Dichloromethane", hsp: hsp(17.0, 7.3, 7.1), boiling_point: 39.6, melting_point: -97.0, density: 1.325, viscosity: 0.41, dielectric: 8.9, molecular_weight: 84.9, ich_class: IchClass::Two, ich_ppm: Some(600), category: SolventCategory::Halogenated, protic: false, water_miscible: false },
    Solvent { id: "CHCl3", name: "Chloroform", hsp: hsp(17.8, 3.1, 5.7), boiling_point: 61.2, melting_point: -63.0, density: 1.489, viscosity: 0.54, dielectric: 4.8, molecular_weight: 119.4, ich_class: IchClass::Two, ich_ppm: Some(60), category: SolventCategory::Halogenated, protic: false, water_miscible: false },
    // Aromatics.
    Solvent { id: "Toluene", name: "Toluene", hsp: hsp(18.0, 1.4, 2.0), boiling_point: 110.6, melting_point: -93.0, density: 0.867, viscosity: 0.56, dielectric: 2.4, molecular_weight: 92.1, ich_class: IchClass::Two, ich_ppm: Some(890), category: SolventCategory::AromaticHydrocarbon, protic: false, water_miscible: false },
    Solvent { id: "Anisole", name: "Anisole", hsp: hsp(17.8, 4.1, 6.7), boiling_point: 153.7, melting_point: -37.0, density: 0.995, viscosity: 1.0, dielectric: 4.3, molecular_weight: 108.1, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::AromaticHydrocarbon, protic: false, water_miscible: false },
    // Aliphatic and alicyclic hydrocarbons.
    Solvent { id: "Hexane", name: "n-Hexane", hsp: hsp(14.9, 0.0, 0.0), boiling_point: 68.7, melting_point: -95.0, density: 0.659, viscosity: 0.30, dielectric: 1.9, molecular_weight: 86.2, ich_class: IchClass::Two, ich_ppm: Some(290), category: SolventCategory::AliphaticHydrocarbon, protic: false, water_miscible: false },
    Solvent { id: "Pentane", name: "n-Pentane", hsp: hsp(14.5, 0.0, 0.0), boiling_point: 36.1, melting_point: -130.0, density: 0.626, viscosity: 0.22, dielectric: 1.8, molecular_weight: 72.2, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::AliphaticHydrocarbon, protic: false, water_miscible: false },
    Solvent { id: "Heptane", name: "n-Heptane", hsp: hsp(15.3, 0.0, 0.0), boiling_point: 98.4, melting_point: -91.0, density: 0.684, viscosity: 0.41, dielectric: 1.9, molecular_weight: 100.2, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::AliphaticHydrocarbon, protic: false, water_miscible: false },
    Solvent { id: "MeCyclohexane", name: "Methylcyclohexane", hsp: hsp(15.9, 0.0, 1.0), boiling_point: 100.9, melting_point: -126.0, density: 0.769, viscosity: 0.68, dielectric: 2.0, molecular_weight: 98.2, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::AlicyclicHydrocarbon, protic: false, water_miscible: false },
    Solvent { id: "Cyclohexane", name: "Cyclohexane", hsp: hsp(16.8, 0.0, 0.2), boiling_point: 80.7, melting_point: 6.6, density: 0.779, viscosity: 0.89, dielectric: 2.0, molecular_weight: 84.2, ich_class: IchClass::Three, ich_ppm: None, category: SolventCategory::AlicyclicHydrocarbon, protic: false, water_miscible: false },
    // Reference solvent.
    Solvent { id: "Water", name: "Water", hsp: hsp(15.5, 16.0, 42.3), boiling_point: 100.0, melting_point: 0.0, density: 1.000, viscosity: 0.89, dielectric: 80.1, molecular_weight: 18.0, ich_class: IchClass::Unclassified, ich_ppm: None, category: SolventCategory::Aqueous, protic: true, water_miscible: true },
];

static BY_ID: phf::Map<&'static str, usize> = phf_map! {
    "MeOH" => 0, "EtOH" => 1, "IPA" => 2, "EthGly" => 3, "PropGly" => 4,
    "ACN" => 5, "Acetone" => 6, "MEK" => 7, "MIBK" => 8, "DMF" => 9,
    "DMSO" => 10, "NMP" => 11, "DMA" => 12, "MeNO2" => 13, "THF" => 14,
    "DEE" => 15, "TBME" => 16, "Dioxane" => 17, "2MeTHF" => 18, "EtOAc" => 19,
    "DCM" => 20, "CHCl3" => 21, "Toluene" => 22, "Anisole" => 23,
    "Hexane" => 24, "Pentane" => 25, "Heptane" => 26, "MeCyclohexane" => 27,
    "Cyclohexane" => 28, "Water" => 29,
};

/// Looks up a solvent by its catalog identifier.
pub fn by_id(id: &str) -> Option<&'static Solvent> {
    BY_ID.get(id).map(|&index| &CATALOG[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_unique_and_indexed() {
        for (index, solvent) in CATALOG.iter().enumerate() {
            assert_eq!(BY_ID.get(solvent.id), Some(&index), "{}", solvent.id);
        }
        assert_eq!(BY_ID.len(), CATALOG.len());
        assert_eq!(CATALOG.len(), 30);
    }

    #[test]
    fn class_two_solvents_carry_a_ppm_ceiling() {
        for solvent in &CATALOG {
            match solvent.ich_class {
                IchClass::Two => {
                    assert!(solvent.ich_ppm.is_some(), "{} missing ppm", solvent.id)
                }
                _ => assert!(solvent.ich_ppm.is_none(), "{} stray ppm", solvent.id),
            }
        }
    }

    #[test]
    fn water_is_the_hydrogen_bonding_extreme() {
        let water = by_id("Water").unwrap();
        for solvent in &CATALOG {
            assert!(solvent.hsp.hydrogen_bonding <= water.hsp.hydrogen_bonding);
        }
        assert!((water.hsp.total() - 47.8).abs() < 0.1);
    }

    #[test]
    fn unknown_identifier_resolves_to_none() {
        assert!(by_id("Benzene").is_none());
    }
}
