use super::fragment::PkaAnnotation;
use super::record::HspTriple;
use serde::Serialize;

/// ICH Q3C residual-solvent classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IchClass {
    /// Known or strongly suspected human carcinogens, to be avoided.
    One,
    /// Limited by a concentration ceiling (ppm).
    Two,
    /// Low toxic potential, ≤ 50 mg/day acceptable.
    Three,
    /// No adequate toxicological data (includes water).
    Unclassified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolventCategory {
    ProticAlcohol,
    ProticDiol,
    PolarAprotic,
    Ether,
    CyclicEther,
    Ester,
    Halogenated,
    AromaticHydrocarbon,
    AliphaticHydrocarbon,
    AlicyclicHydrocarbon,
    Aqueous,
}

/// One canonical solvent record of the screening set.
///
/// Physical constants: boiling/melting points in °C, density in g/mL,
/// viscosity in mPa·s, HSP in MPa^0.5.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solvent {
    pub id: &'static str,
    pub name: &'static str,
    pub hsp: HspTriple,
    pub boiling_point: f64,
    pub melting_point: f64,
    pub density: f64,
    pub viscosity: f64,
    pub dielectric: f64,
    pub molecular_weight: f64,
    pub ich_class: IchClass,
    /// Concentration ceiling for Class 2 solvents, in ppm.
    pub ich_ppm: Option<u32>,
    pub category: SolventCategory,
    pub protic: bool,
    pub water_miscible: bool,
}

/// Moisture sorption risk tier of a coformer or its typical salt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HygroscopicityRisk {
    Low,
    Medium,
    High,
}

/// The dominant supramolecular hydrogen-bonding motif a candidate offers
/// (Etter's rules vocabulary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SynthonType {
    CarboxylicAcid,
    Amide,
    /// Pyridine N acceptor plus primary amide, e.g. nicotinamide.
    PyridineAmide,
    Imide,
    Urea,
    SulfonicAcid,
    MineralAcid,
    AminoBase,
    Hydroxyl,
    /// Polymers and other candidates without a discrete synthon.
    None,
}

/// The primary functional group of the API used for synthon pairing.
/// Chosen by the caller (it is a structural judgement, not derivable from
/// fragment counts alone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ApiFunctionalGroup {
    CarboxylicAcid,
    Amine,
    Pyridine,
    Amide,
    Phenol,
    Sulfonamide,
    Hydroxyl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CoformerKind {
    /// Acidic counterion for salts of basic APIs.
    AcidFormer,
    /// Basic counterion for salts of acidic APIs.
    BaseFormer,
    /// Neutral small-molecule cocrystal former.
    Coformer,
    /// Amorphous solid dispersion carrier.
    Polymer,
}

/// One canonical coformer/counterion/polymer record of the screening set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coformer {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: CoformerKind,
    /// `None` for polymers (no discrete ionizable group at screening level).
    pub pka: Option<PkaAnnotation>,
    pub hsp: HspTriple,
    pub synthon: SynthonType,
    pub hygroscopicity: HygroscopicityRisk,
    /// Genotoxic-impurity alert (e.g. sulfonate esters with alcohols).
    pub genotoxic_alert: bool,
    /// Glass transition temperature in °C, polymers only.
    pub glass_transition: Option<f64>,
}

impl Coformer {
    pub fn is_polymer(&self) -> bool {
        self.kind == CoformerKind::Polymer
    }

    /// Hydrochloride counterion check for the deliquescence penalty.
    pub fn is_hydrochloride(&self) -> bool {
        self.id == "HCl"
    }
}
