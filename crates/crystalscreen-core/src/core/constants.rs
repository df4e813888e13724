//! Every empirical constant used by the estimator and the screening engines.
//!
//! These values are calibration data, not control flow: each one can be
//! re-fitted against a new reference compound set without touching the
//! algorithms that consume it.

/// Version tag for the bundled reference catalogs (fragments, corrections,
/// solvents, coformers). Bumped whenever any table value changes.
pub const CATALOG_VERSION: &str = "2025.2";

// --- Group-contribution HSP estimation (Stefanis-Panayiotou 2008) ---

/// Physical lower bound for the dispersion parameter of organic fragments,
/// in MPa^0.5. Group sums below this are clamped up.
pub const DISPERSION_FLOOR: f64 = 12.0;

/// Molar volume fallback: when the summed volume contributions are
/// non-positive, substitute `max(MW * factor, minimum)`.
pub const MOLAR_VOLUME_MW_FACTOR: f64 = 0.85;
pub const MOLAR_VOLUME_MINIMUM: f64 = 50.0;

/// Joback melting point estimate base, in °C: MP = base + Σ contributions.
pub const MELTING_POINT_BASE: f64 = 198.0;

/// Fixed qualitative confidence band of the functional-group pKa estimate,
/// in pKa units.
pub const PKA_CONFIDENCE_BAND: f64 = 1.5;

/// Amphoteric tie-break: the acid candidate dominates when its pKa is below
/// this physiological midpoint, otherwise the base candidate is reported.
pub const AMPHOTERIC_PIVOT_PKA: f64 = 7.0;

// --- Hansen distance and solubility banding ---

/// Literature-standard weighting of the dispersion term in Ra.
pub const RA_DISPERSION_WEIGHT: f64 = 4.0;

/// Reference interaction radius R0 for small pharmaceutical molecules,
/// in MPa^0.5. RED = Ra / R0.
pub const INTERACTION_RADIUS: f64 = 5.0;

/// Ra thresholds for the five ordered solubility bands (MPa^0.5).
pub const RA_EXCELLENT: f64 = 5.0;
pub const RA_GOOD: f64 = 7.0;
pub const RA_PARTIAL: f64 = 9.0;
pub const RA_POOR: f64 = 11.0;

// --- Cruz-Cabeza salt/cocrystal formation probability ---

/// Below this ΔpKa the exponential cocrystal-zone tail applies.
pub const CC_COCRYSTAL_BOUNDARY: f64 = -1.0;
/// Above this ΔpKa proton transfer is saturated.
pub const CC_SALT_BOUNDARY: f64 = 6.0;
pub const CC_SALT_PROBABILITY: f64 = 0.99;
/// Tail: p = max(floor, coefficient * exp(ΔpKa + 1)).
pub const CC_TAIL_COEFFICIENT: f64 = 0.05;
pub const CC_TAIL_FLOOR: f64 = 0.02;
/// Logistic inflection point of the continuum zone.
pub const CC_SIGMOID_INFLECTION: f64 = 2.0;
/// Logistic rate, fixed at ln(19)/3 so the continuum curve meets the
/// exponential tail exactly at ΔpKa = -1 (p = 0.05) while keeping
/// p(2.0) = 0.5.
pub const CC_SIGMOID_SLOPE: f64 = 0.981_479_659_722_147;

// --- Interaction-type classification (ΔpKa zones) ---

/// ΔpKa above which proton transfer yields a true salt.
pub const SALT_ZONE_THRESHOLD: f64 = 4.0;
/// Lower bound of the salt-cocrystal continuum zone.
pub const CONTINUUM_LOWER_BOUND: f64 = -1.0;

// --- Miscibility ---

/// Ra below which a small-molecule pair is considered highly miscible.
pub const RA_MISCIBILITY_HIGH: f64 = 7.0;

/// Flory-Huggins: χ = (V_ref / (R * T)) * Σ(Δδ_i)².
pub const FH_REFERENCE_VOLUME: f64 = 100.0; // cm³/mol
pub const GAS_CONSTANT: f64 = 8.314; // J/(mol·K)
pub const FH_TEMPERATURE: f64 = 298.15; // K
pub const CHI_MISCIBLE: f64 = 0.5;
pub const CHI_BORDERLINE: f64 = 1.0;

// --- Gastric survival of salts (disproportionation screen) ---

/// ΔpKa cut-points for salts of basic APIs: Stable / Marginal / Risk.
pub const GASTRIC_BASE_STABLE: f64 = 3.0;
pub const GASTRIC_BASE_MARGINAL: f64 = 2.0;
/// ΔpKa cut-points for salts of acidic APIs.
pub const GASTRIC_ACID_STABLE: f64 = 2.0;
pub const GASTRIC_ACID_MARGINAL: f64 = 1.0;

// --- Supersaturation risk index ---

/// LogP above which fast precipitation raises the supersaturation risk.
pub const SUPERSAT_LOGP_PENALTY_THRESHOLD: f64 = 3.0;
/// ΔpKa band [lower, upper] carrying the extra disproportionation point.
pub const SUPERSAT_DPKA_BAND_LOWER: f64 = 2.0;
pub const SUPERSAT_DPKA_BAND_UPPER: f64 = 4.0;

// --- Composite lead score (fixed weights, sum 100) ---

pub const WEIGHT_DPKA_PROBABILITY: f64 = 30.0;
pub const WEIGHT_SYNTHON: f64 = 20.0;
pub const WEIGHT_MISCIBILITY: f64 = 20.0;
pub const WEIGHT_HYGROSCOPICITY: f64 = 15.0;
pub const WEIGHT_GENOTOXICITY: f64 = 10.0;
pub const WEIGHT_SUPERSATURATION: f64 = 5.0;
pub const COMPOSITE_SCORE_CAP: f64 = 100.0;

/// Miscibility band points: Miscible/High, Borderline, Low, Immiscible.
pub const MISCIBILITY_POINTS_HIGH: f64 = 20.0;
pub const MISCIBILITY_POINTS_BORDERLINE: f64 = 12.0;
pub const MISCIBILITY_POINTS_LOW: f64 = 5.0;
pub const MISCIBILITY_POINTS_NONE: f64 = 0.0;

/// Hygroscopicity penalties by risk tier (High, Medium, Low).
pub const HYGRO_PENALTY_HIGH: f64 = 0.80;
pub const HYGRO_PENALTY_MEDIUM: f64 = 0.40;
pub const HYGRO_PENALTY_LOW: f64 = 0.05;
/// Extra penalty for hydrochlorides of strong bases (deliquescence risk).
pub const HYGRO_HCL_EXTRA_PENALTY: f64 = 0.15;
pub const HYGRO_HCL_BASE_PKA_THRESHOLD: f64 = 8.0;

/// Supersaturation band points: Low, Medium, High.
pub const SUPERSAT_POINTS_LOW: f64 = 5.0;
pub const SUPERSAT_POINTS_MEDIUM: f64 = 2.5;
pub const SUPERSAT_POINTS_HIGH: f64 = 0.0;

// --- Gordon-Taylor / ASD stability ---

pub const CELSIUS_TO_KELVIN: f64 = 273.15;
/// Kauzmann temperature offset below Tg_mix, in K.
pub const KAUZMANN_OFFSET: f64 = 50.0;
/// Storage temperature assumed for the stability margin, in °C.
pub const ASD_STORAGE_TEMPERATURE: f64 = 25.0;
/// (Tg_mix − storage) margins for the three stability bands, in K.
pub const ASD_STABLE_MARGIN: f64 = 50.0;
pub const ASD_BORDERLINE_MARGIN: f64 = 30.0;

// --- Biopharmaceutics ---

/// Yalkowsky general solubility equation: log S0 = a − b·(MP − MP_ref) − logP.
pub const GSE_INTERCEPT: f64 = 0.5;
pub const GSE_MELTING_SLOPE: f64 = 0.01;
pub const GSE_MELTING_REFERENCE: f64 = 25.0;

/// Dose number: D0 = dose / (S(pH) * volume).
pub const GI_VOLUME_ML: f64 = 250.0;
pub const FASSIF_PH: f64 = 6.5;
pub const LOGD_REFERENCE_PH: f64 = 7.4;

/// Default dosing pH set: gastric, duodenal, FaSSIF, plasma.
pub const STANDARD_PH_SET: [f64; 4] = [1.2, 4.5, 6.5, 7.4];

/// BCS proxies: permeability from logP, solubility from the dose number.
pub const BCS_PERMEABILITY_LOGP: f64 = 0.0;
pub const BCS_SOLUBILITY_DOSE_NUMBER: f64 = 1.0;

/// Lipinski rule-of-five limits.
pub const LIPINSKI_MW: f64 = 500.0;
pub const LIPINSKI_LOGP: f64 = 5.0;
pub const LIPINSKI_DONORS: u32 = 5;
pub const LIPINSKI_ACCEPTORS: u32 = 10;

/// Veber oral bioavailability limits.
pub const VEBER_ROTATABLE_BONDS: u32 = 10;
pub const VEBER_TPSA: f64 = 140.0;
