//! First-order group contribution table.
//!
//! Hansen dispersion (Fd) and molar volume values after Hoy (1985) and
//! van Krevelen (1990); polar (Fp) and hydrogen-bond energy (Uh) values
//! recalibrated per Stefanis & Panayiotou (2008); LogP fragments from the
//! Rekker-Mannhold method; TPSA per Ertl; melting point contributions per
//! Joback; pKa estimates from CRC functional-group heuristics.

use crate::core::models::fragment::{Fragment, FragmentDefinition, IonizationKind, PkaAnnotation};
use phf::{Map, phf_map};

const fn acid(value: f64) -> Option<PkaAnnotation> {
    Some(PkaAnnotation {
        value,
        kind: IonizationKind::Acid,
    })
}

const fn base(value: f64) -> Option<PkaAnnotation> {
    Some(PkaAnnotation {
        value,
        kind: IonizationKind::Base,
    })
}

const fn very_weak_acid(value: f64) -> Option<PkaAnnotation> {
    Some(PkaAnnotation {
        value,
        kind: IonizationKind::VeryWeakAcid,
    })
}

const fn def(
    label: &'static str,
    dispersion: f64,
    polar: f64,
    hbond_energy: f64,
    molar_volume: f64,
    logp: f64,
    weight: f64,
    donors: u32,
    acceptors: u32,
    tpsa: f64,
    rotatable_bonds: u32,
    melting_point: f64,
    pka: Option<PkaAnnotation>,
) -> FragmentDefinition {
    FragmentDefinition {
        label,
        dispersion,
        polar,
        hbond_energy,
        molar_volume,
        logp,
        weight,
        donors,
        acceptors,
        tpsa,
        rotatable_bonds,
        melting_point,
        pka,
    }
}

/// Contribution records, indexed by the `Fragment` discriminant.
#[rustfmt::skip]
static DEFINITIONS: [FragmentDefinition; Fragment::COUNT] = [
    // --- Carbon skeleton ---
    def("Methyl (-CH3)",              420.0,    0.0,     0.0,  31.8,  0.53,  15.0,  0, 0,  0.0,  0, -15.5, None),
    def("Methylene (-CH2-)",          272.0,    0.0,     0.0,  16.1,  0.53,  14.0,  0, 0,  0.0,  1,  -7.0, None),
    def("Methine (>CH-)",              57.0,    0.0,     0.0,  -1.0,  0.53,  13.0,  0, 0,  0.0,  0,  -7.0, None),
    def("Quaternary carbon (>C<)",   -190.0,    0.0,     0.0, -19.2,  0.53,  12.0,  0, 0,  0.0,  0,   0.0, None),
    // --- Aromatic and heterocyclic rings ---
    def("Phenyl / benzene ring",     1503.0,  310.0,     0.0,  71.4,  1.56,  76.09, 0, 0,  0.0,  1,  31.5, None),
    def("Naphthalene ring system",   2820.0,  450.0,     0.0, 123.8,  2.84, 126.16, 0, 0,  0.0,  1,  45.0, None),
    def("Pyridine ring",             1050.0,  800.0,  2400.0,  61.0,  0.65,  78.1,  0, 1, 12.9,  1,  25.0, base(5.2)),
    def("Imidazole ring",             820.0,  700.0,  8000.0,  55.0, -0.08,  67.07, 1, 1, 41.82, 1,  35.0, base(6.5)),
    def("Morpholine ring",            950.0,  550.0,  3000.0,  77.5, -0.80,  86.09, 0, 2, 21.26, 0,  15.0, base(8.3)),
    def("Piperidine ring",           1100.0,  280.0,  3100.0,  83.0,  0.14,  84.12, 1, 1, 16.0,  0,  15.0, base(10.5)),
    def("Piperazine ring",           1050.0,  400.0,  4200.0,  86.0, -1.03,  85.11, 2, 2, 24.06, 0,  20.0, base(9.8)),
    def("Pyrrolidine ring",           950.0,  280.0,  3100.0,  71.0,  0.25,  70.09, 1, 1, 16.0,  0,  12.0, base(11.3)),
    def("Thiophene ring",            1100.0,  250.0,  1500.0,  67.0,  1.81,  83.13, 0, 0, 28.24, 1,  28.0, None),
    def("Indole ring system",        1950.0,  500.0,  9000.0, 110.0,  2.14, 116.14, 1, 0, 13.1,  1,  42.0, very_weak_acid(16.0)),
    // --- Oxygen ---
    def("Hydroxyl, aliphatic (-OH)",  210.0,  500.0, 20000.0,  10.0, -0.67,  17.0,  1, 1, 20.2,  0,  44.8, very_weak_acid(16.0)),
    def("Hydroxyl, phenolic (-ArOH)", 198.0,  600.0, 13500.0,  10.0, -0.40,  17.0,  1, 1, 20.2,  0,  55.0, acid(9.5)),
    def("Ether linkage (-O-)",        100.0,  400.0,  3000.0,   3.8, -0.27,  16.0,  0, 1,  9.2,  1, -10.0, None),
    def("Carboxylic acid (-COOH)",    530.0,  820.0, 10900.0,  28.5, -1.09,  45.0,  1, 2, 37.3,  0,  73.0, acid(4.5)),
    def("Ester (-COO-)",              390.0,  490.0,  3350.0,  18.0, -0.27,  44.0,  0, 2, 26.3,  1,  20.0, None),
    def("Carbonyl (-C=O)",            290.0,  770.0,  2000.0,  10.8, -1.03,  28.0,  0, 1, 17.1,  0,  20.0, None),
    // --- Nitrogen ---
    def("Primary aliphatic amine",    226.0,  600.0,  3400.0,  19.2, -1.03,  16.0,  2, 1, 26.0,  0,  30.0, base(10.0)),
    def("Primary aromatic amine",     180.0,  480.0,  5000.0,  14.0, -0.64,  16.0,  2, 0, 26.0,  0,  35.0, base(4.5)),
    def("Secondary amine (-NH-)",     180.0,  300.0,  3100.0,   4.5, -0.94,  15.0,  1, 1, 16.0,  0,  20.0, base(9.5)),
    def("Tertiary amine (>N-)",        20.0,   30.0,   800.0,  -9.0, -0.70,  14.0,  0, 1,  3.2,  0,  10.0, base(8.5)),
    def("Nitrile (-CN)",              430.0, 1100.0,  2500.0,  24.0, -1.28,  26.0,  0, 1, 23.8,  0,  40.0, None),
    def("Primary amide (-CONH2)",     390.0,  620.0,  9000.0,  28.8, -1.71,  44.0,  2, 2, 55.1,  0,  50.0, None),
    def("Secondary amide (-CONH-)",   280.0,  480.0,  8000.0,  14.0, -1.30,  43.0,  1, 1, 29.1,  0,  40.0, None),
    // --- Halogens ---
    def("Fluorine (-F)",              164.0,  450.0,   400.0,  18.0,  0.14,  19.0,  0, 1,  0.0,  0,  22.0, None),
    def("Trifluoromethyl (-CF3)",     426.0,  650.0,  1000.0,  48.0,  1.07,  69.0,  0, 0,  0.0,  0,  25.0, None),
    def("Chlorine (-Cl)",             419.0,  490.0,   400.0,  24.0,  0.60,  35.5,  0, 0,  0.0,  0,  32.0, None),
    def("Bromine (-Br)",              460.0,  330.0,   300.0,  30.0,  1.02,  79.9,  0, 0,  0.0,  0,  35.0, None),
    def("Iodine (-I)",                500.0,  250.0,   200.0,  36.0,  1.35, 126.9,  0, 0,  0.0,  0,  36.0, None),
    // --- Sulfur and phosphorus ---
    def("Thioether (-S-)",            428.0,  160.0,  1000.0,  16.0,  0.15,  32.1,  0, 0, 25.3,  1,  14.0, None),
    def("Thiol (-SH)",                290.0,  200.0,  4000.0,  21.0, -0.08,  33.1,  0, 0, 38.8,  0,  25.0, acid(10.5)),
    def("Sulfonyl (-SO2-)",           428.0, 1300.0,  3200.0,  25.0, -2.67,  64.1,  0, 2, 34.1,  0,  55.0, None),
    def("Sulfonamide (-SO2NH-)",      428.0, 1300.0,  8000.0,  30.0, -2.00,  79.1,  1, 3, 58.2,  0,  70.0, acid(9.5)),
    def("Phosphonic acid (-PO(OH)2)", 520.0, 1400.0, 18000.0,  45.0, -2.82,  97.0,  2, 4, 94.8,  0,  80.0, acid(2.1)),
];

/// Every fragment, in discriminant order.
pub static ALL: [Fragment; Fragment::COUNT] = [
    Fragment::Methyl,
    Fragment::Methylene,
    Fragment::Methine,
    Fragment::QuaternaryCarbon,
    Fragment::Phenyl,
    Fragment::Naphthalene,
    Fragment::Pyridine,
    Fragment::Imidazole,
    Fragment::Morpholine,
    Fragment::Piperidine,
    Fragment::Piperazine,
    Fragment::Pyrrolidine,
    Fragment::Thiophene,
    Fragment::Indole,
    Fragment::HydroxylAliphatic,
    Fragment::HydroxylPhenolic,
    Fragment::Ether,
    Fragment::CarboxylicAcid,
    Fragment::Ester,
    Fragment::Carbonyl,
    Fragment::AminePrimary,
    Fragment::AminePrimaryAromatic,
    Fragment::AmineSecondary,
    Fragment::AmineTertiary,
    Fragment::Nitrile,
    Fragment::AmidePrimary,
    Fragment::AmideSecondary,
    Fragment::Fluoro,
    Fragment::Trifluoromethyl,
    Fragment::Chloro,
    Fragment::Bromo,
    Fragment::Iodo,
    Fragment::Thioether,
    Fragment::Thiol,
    Fragment::Sulfonyl,
    Fragment::Sulfonamide,
    Fragment::PhosphonicAcid,
];

pub fn definition(fragment: Fragment) -> &'static FragmentDefinition {
    &DEFINITIONS[fragment as usize]
}

/// External string vocabulary: normalized label → fragment.
///
/// Includes canonical short keys and common spelled-out aliases. Keys are
/// matched after lowercasing and folding `-`/`.`/space to `_`.
#[rustfmt::skip]
pub static VOCABULARY: Map<&'static str, Fragment> = phf_map! {
    "ch3" => Fragment::Methyl, "methyl" => Fragment::Methyl,
    "ch2" => Fragment::Methylene, "methylene" => Fragment::Methylene,
    "ch" => Fragment::Methine, "methine" => Fragment::Methine,
    "quaternary_c" => Fragment::QuaternaryCarbon, "quaternary_carbon" => Fragment::QuaternaryCarbon,
    "phenyl" => Fragment::Phenyl, "benzene" => Fragment::Phenyl,
    "benzene_ring" => Fragment::Phenyl, "aromatic_ring" => Fragment::Phenyl,
    "naphthalene" => Fragment::Naphthalene, "naphthalene_ring" => Fragment::Naphthalene,
    "pyridine" => Fragment::Pyridine, "pyridine_ring" => Fragment::Pyridine,
    "imidazole" => Fragment::Imidazole, "imidazole_ring" => Fragment::Imidazole,
    "morpholine" => Fragment::Morpholine, "morpholine_ring" => Fragment::Morpholine,
    "piperidine" => Fragment::Piperidine, "piperidine_ring" => Fragment::Piperidine,
    "piperazine" => Fragment::Piperazine, "piperazine_ring" => Fragment::Piperazine,
    "pyrrolidine" => Fragment::Pyrrolidine, "pyrrolidine_ring" => Fragment::Pyrrolidine,
    "thiophene" => Fragment::Thiophene, "thiophene_ring" => Fragment::Thiophene,
    "indole" => Fragment::Indole, "indole_ring" => Fragment::Indole,
    "oh" => Fragment::HydroxylAliphatic, "hydroxyl" => Fragment::HydroxylAliphatic,
    "oh_aliphatic" => Fragment::HydroxylAliphatic,
    "oh_phenolic" => Fragment::HydroxylPhenolic, "phenol" => Fragment::HydroxylPhenolic,
    "phenolic_oh" => Fragment::HydroxylPhenolic,
    "ether" => Fragment::Ether, "o_ether" => Fragment::Ether,
    "cooh" => Fragment::CarboxylicAcid, "carboxyl" => Fragment::CarboxylicAcid,
    "carboxylic_acid" => Fragment::CarboxylicAcid,
    "ester" => Fragment::Ester, "coo" => Fragment::Ester,
    "carbonyl" => Fragment::Carbonyl, "ketone" => Fragment::Carbonyl,
    "aldehyde" => Fragment::Carbonyl, "c_o" => Fragment::Carbonyl,
    "nh2" => Fragment::AminePrimary, "primary_amine" => Fragment::AminePrimary,
    "amine_primary" => Fragment::AminePrimary, "nh2_aliphatic" => Fragment::AminePrimary,
    "nh2_aromatic" => Fragment::AminePrimaryAromatic,
    "aromatic_amine" => Fragment::AminePrimaryAromatic, "aniline" => Fragment::AminePrimaryAromatic,
    "nh" => Fragment::AmineSecondary, "secondary_amine" => Fragment::AmineSecondary,
    "amine_secondary" => Fragment::AmineSecondary,
    "n_tertiary" => Fragment::AmineTertiary, "tertiary_amine" => Fragment::AmineTertiary,
    "amine_tertiary" => Fragment::AmineTertiary,
    "nitrile" => Fragment::Nitrile, "cn" => Fragment::Nitrile,
    "conh2" => Fragment::AmidePrimary, "primary_amide" => Fragment::AmidePrimary,
    "amide_primary" => Fragment::AmidePrimary,
    "conh" => Fragment::AmideSecondary, "secondary_amide" => Fragment::AmideSecondary,
    "amide_secondary" => Fragment::AmideSecondary,
    "f" => Fragment::Fluoro, "fluoro" => Fragment::Fluoro, "fluorine" => Fragment::Fluoro,
    "cf3" => Fragment::Trifluoromethyl, "trifluoromethyl" => Fragment::Trifluoromethyl,
    "cl" => Fragment::Chloro, "chloro" => Fragment::Chloro, "chlorine" => Fragment::Chloro,
    "br" => Fragment::Bromo, "bromo" => Fragment::Bromo, "bromine" => Fragment::Bromo,
    "i" => Fragment::Iodo, "iodo" => Fragment::Iodo, "iodine" => Fragment::Iodo,
    "s_thioether" => Fragment::Thioether, "thioether" => Fragment::Thioether,
    "sh" => Fragment::Thiol, "thiol" => Fragment::Thiol,
    "so2" => Fragment::Sulfonyl, "sulfonyl" => Fragment::Sulfonyl,
    "so2nh" => Fragment::Sulfonamide, "sulfonamide" => Fragment::Sulfonamide,
    "po3h2" => Fragment::PhosphonicAcid, "phosphonic_acid" => Fragment::PhosphonicAcid,
};
