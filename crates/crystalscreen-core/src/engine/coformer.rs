//! Coformer screening: multi-factor ranking of the coformer catalog.
//!
//! Each candidate is scored independently from the shared API record:
//! ΔpKa ionization thermodynamics (Cruz-Cabeza probability and zone
//! classification), Etter synthon compatibility, Hansen or Flory-Huggins
//! miscibility, gastric disproportionation survival, a supersaturation risk
//! index, and hygroscopicity/genotoxicity liabilities, combined into a
//! weighted composite lead score on a 0-100 scale.

use crate::core::constants::{
    CC_COCRYSTAL_BOUNDARY, CC_SALT_BOUNDARY, CC_SALT_PROBABILITY, CC_SIGMOID_INFLECTION,
    CC_SIGMOID_SLOPE, CC_TAIL_COEFFICIENT, CC_TAIL_FLOOR, CHI_BORDERLINE, CHI_MISCIBLE,
    COMPOSITE_SCORE_CAP, CONTINUUM_LOWER_BOUND, FH_REFERENCE_VOLUME, FH_TEMPERATURE,
    GASTRIC_ACID_MARGINAL, GASTRIC_ACID_STABLE, GASTRIC_BASE_MARGINAL, GASTRIC_BASE_STABLE,
    GAS_CONSTANT, HYGRO_HCL_BASE_PKA_THRESHOLD, HYGRO_HCL_EXTRA_PENALTY, HYGRO_PENALTY_HIGH,
    HYGRO_PENALTY_LOW, HYGRO_PENALTY_MEDIUM, MISCIBILITY_POINTS_BORDERLINE,
    MISCIBILITY_POINTS_HIGH, MISCIBILITY_POINTS_LOW, MISCIBILITY_POINTS_NONE,
    RA_MISCIBILITY_HIGH, SALT_ZONE_THRESHOLD, SUPERSAT_DPKA_BAND_LOWER, SUPERSAT_DPKA_BAND_UPPER,
    SUPERSAT_LOGP_PENALTY_THRESHOLD, SUPERSAT_POINTS_HIGH, SUPERSAT_POINTS_LOW,
    SUPERSAT_POINTS_MEDIUM, WEIGHT_DPKA_PROBABILITY, WEIGHT_GENOTOXICITY, WEIGHT_HYGROSCOPICITY,
    WEIGHT_MISCIBILITY, WEIGHT_SUPERSATURATION, WEIGHT_SYNTHON,
};
use crate::core::models::record::{AggregateParameterRecord, HspTriple};
use crate::core::models::substance::{
    ApiFunctionalGroup, Coformer, CoformerKind, HygroscopicityRisk,
};
use crate::core::tables::{coformers, synthons};
use crate::engine::glass::{self, GlassReport};
use crate::engine::hansen;
use serde::Serialize;
use tracing::debug;

/// ΔpKa zone the API-candidate pair falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InteractionType {
    /// ΔpKa > 4: full proton transfer expected.
    Salt,
    /// −1 ≤ ΔpKa ≤ 4: salt-cocrystal continuum, outcome structure-dependent.
    Continuum,
    /// ΔpKa < −1 with a workable synthon.
    Cocrystal,
    Unlikely,
}

/// Miscibility call with the metric it came from: Hansen distance for small
/// molecules, Flory-Huggins χ for polymers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum MiscibilityMetric {
    HansenDistance(f64),
    FloryHuggins(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MiscibilityBand {
    High,
    Borderline,
    Low,
    Immiscible,
}

impl MiscibilityBand {
    fn points(self) -> f64 {
        match self {
            MiscibilityBand::High => MISCIBILITY_POINTS_HIGH,
            MiscibilityBand::Borderline => MISCIBILITY_POINTS_BORDERLINE,
            MiscibilityBand::Low => MISCIBILITY_POINTS_LOW,
            MiscibilityBand::Immiscible => MISCIBILITY_POINTS_NONE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Miscibility {
    pub metric: MiscibilityMetric,
    pub band: MiscibilityBand,
}

/// Salt disproportionation survival in gastric conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GastricStability {
    Stable,
    Marginal,
    Risk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SupersaturationRisk {
    Low,
    Medium,
    High,
}

impl SupersaturationRisk {
    fn points(self) -> f64 {
        match self {
            SupersaturationRisk::Low => SUPERSAT_POINTS_LOW,
            SupersaturationRisk::Medium => SUPERSAT_POINTS_MEDIUM,
            SupersaturationRisk::High => SUPERSAT_POINTS_HIGH,
        }
    }
}

/// Screening inputs beyond the parameter record itself.
#[derive(Debug, Clone)]
pub struct CoformerInputs {
    /// The API's primary functional group for synthon pairing, a structural
    /// judgement supplied by the caller.
    pub api_group: ApiFunctionalGroup,
    /// Amorphous API glass transition in °C, for the polymer Tg model.
    pub api_glass_transition: Option<f64>,
    /// API mass fraction in the dispersion.
    pub drug_loading: f64,
    /// When non-empty, restrict the screen to these candidate kinds.
    pub kinds: Vec<CoformerKind>,
}

impl CoformerInputs {
    pub fn new(api_group: ApiFunctionalGroup) -> Self {
        Self {
            api_group,
            api_glass_transition: None,
            drug_loading: 0.3,
            kinds: Vec::new(),
        }
    }
}

/// One ranked row of the coformer screening table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoformerResult {
    pub coformer: &'static Coformer,
    /// pKa of the base side minus pKa of the acid side (for basic
    /// counterions, candidate minus API); `None` when either side lacks one.
    pub delta_pka: Option<f64>,
    /// Cruz-Cabeza salt formation probability.
    pub probability: Option<f64>,
    pub interaction: Option<InteractionType>,
    pub synthon_score: u8,
    pub miscibility: Miscibility,
    /// Only present for salt-former candidates against an ionizable API.
    pub gastric: Option<GastricStability>,
    /// Only meaningful in the continuum/unlikely zones.
    pub supersaturation: Option<SupersaturationRisk>,
    /// Only present for polymers when the API Tg is known.
    pub glass: Option<GlassReport>,
    /// Composite lead score, 0-100.
    pub score: f64,
}

/// Cruz-Cabeza formation probability as a function of ΔpKa.
///
/// Three pieces: an exponential tail decaying into the cocrystal zone, a
/// logistic continuum centered at ΔpKa = 2, and saturation at 0.99 beyond
/// ΔpKa = 6. Continuous at the tail boundary and monotonically
/// non-decreasing over the whole domain.
pub fn formation_probability(delta_pka: f64) -> f64 {
    if delta_pka < CC_COCRYSTAL_BOUNDARY {
        (CC_TAIL_COEFFICIENT * (delta_pka - CC_COCRYSTAL_BOUNDARY).exp()).max(CC_TAIL_FLOOR)
    } else if delta_pka > CC_SALT_BOUNDARY {
        CC_SALT_PROBABILITY
    } else {
        1.0 / (1.0 + (-CC_SIGMOID_SLOPE * (delta_pka - CC_SIGMOID_INFLECTION)).exp())
    }
}

/// ΔpKa zone classification. The cocrystal call additionally requires a
/// workable synthon.
pub fn classify_interaction(delta_pka: f64, synthon_score: u8) -> InteractionType {
    if delta_pka > SALT_ZONE_THRESHOLD {
        InteractionType::Salt
    } else if delta_pka >= CONTINUUM_LOWER_BOUND {
        InteractionType::Continuum
    } else if synthon_score > 0 {
        InteractionType::Cocrystal
    } else {
        InteractionType::Unlikely
    }
}

fn miscibility(api: &HspTriple, candidate: &Coformer) -> Miscibility {
    if candidate.is_polymer() {
        let chi = flory_huggins(api, &candidate.hsp);
        let band = if chi < CHI_MISCIBLE {
            MiscibilityBand::High
        } else if chi < CHI_BORDERLINE {
            MiscibilityBand::Borderline
        } else {
            MiscibilityBand::Immiscible
        };
        Miscibility {
            metric: MiscibilityMetric::FloryHuggins(chi),
            band,
        }
    } else {
        let ra = hansen::distance(api, &candidate.hsp);
        let band = if ra < RA_MISCIBILITY_HIGH {
            MiscibilityBand::High
        } else {
            MiscibilityBand::Low
        };
        Miscibility {
            metric: MiscibilityMetric::HansenDistance(ra),
            band,
        }
    }
}

/// Flory-Huggins interaction parameter from the HSP triples,
/// χ = (V_ref / RT) · Σ(Δδᵢ)².
pub fn flory_huggins(api: &HspTriple, polymer: &HspTriple) -> f64 {
    let sum = (api.dispersion - polymer.dispersion).powi(2)
        + (api.polar - polymer.polar).powi(2)
        + (api.hydrogen_bonding - polymer.hydrogen_bonding).powi(2);
    FH_REFERENCE_VOLUME / (GAS_CONSTANT * FH_TEMPERATURE) * sum
}

fn gastric_survival(
    delta_pka: f64,
    api_is_base: bool,
    candidate: &Coformer,
) -> Option<GastricStability> {
    let is_counterion = matches!(
        candidate.kind,
        CoformerKind::AcidFormer | CoformerKind::BaseFormer
    );
    if !is_counterion {
        return None;
    }
    let (stable, marginal) = if api_is_base {
        (GASTRIC_BASE_STABLE, GASTRIC_BASE_MARGINAL)
    } else {
        (GASTRIC_ACID_STABLE, GASTRIC_ACID_MARGINAL)
    };
    Some(if delta_pka >= stable {
        GastricStability::Stable
    } else if delta_pka >= marginal {
        GastricStability::Marginal
    } else {
        GastricStability::Risk
    })
}

fn supersaturation(
    interaction: InteractionType,
    delta_pka: f64,
    synthon_score: u8,
    logp: f64,
) -> Option<SupersaturationRisk> {
    if !matches!(
        interaction,
        InteractionType::Continuum | InteractionType::Unlikely
    ) {
        return None;
    }
    let mut points: i32 =
        if (SUPERSAT_DPKA_BAND_LOWER..=SUPERSAT_DPKA_BAND_UPPER).contains(&delta_pka) {
            2
        } else {
            1
        };
    if synthon_score == 2 {
        points -= 1;
    }
    if logp > SUPERSAT_LOGP_PENALTY_THRESHOLD {
        points += 1;
    }
    Some(match points {
        3.. => SupersaturationRisk::High,
        2 => SupersaturationRisk::Medium,
        _ => SupersaturationRisk::Low,
    })
}

fn hygroscopicity_penalty(
    candidate: &Coformer,
    api_is_base: bool,
    api_pka: Option<f64>,
) -> f64 {
    let mut penalty = match candidate.hygroscopicity {
        HygroscopicityRisk::High => HYGRO_PENALTY_HIGH,
        HygroscopicityRisk::Medium => HYGRO_PENALTY_MEDIUM,
        HygroscopicityRisk::Low => HYGRO_PENALTY_LOW,
    };
    // Deliquescence: hydrochlorides of strong bases.
    if candidate.hygroscopicity == HygroscopicityRisk::High
        && candidate.is_hydrochloride()
        && api_is_base
        && api_pka.is_some_and(|pka| pka > HYGRO_HCL_BASE_PKA_THRESHOLD)
    {
        penalty += HYGRO_HCL_EXTRA_PENALTY;
    }
    penalty
}

/// Evaluates one candidate. Pure; the batch screen maps this over the
/// catalog.
pub fn evaluate(
    record: &AggregateParameterRecord,
    inputs: &CoformerInputs,
    candidate: &'static Coformer,
) -> CoformerResult {
    let api_ionization = record.ionization;
    let api_is_base = api_ionization.is_some_and(|i| i.is_base());

    // pKa(base) minus pKa(acid). Against a basic counterion the candidate
    // is the base side, so the difference flips.
    let delta_pka = match (api_ionization, candidate.pka) {
        (Some(api), Some(counterion)) => {
            Some(if candidate.kind == CoformerKind::BaseFormer {
                counterion.value - api.pka
            } else {
                api.pka - counterion.value
            })
        }
        _ => None,
    };
    let probability = delta_pka.map(formation_probability);
    let synthon_score = synthons::score(inputs.api_group, candidate.synthon);
    let interaction = delta_pka.map(|d| classify_interaction(d, synthon_score));
    let miscibility = miscibility(&record.hsp, candidate);
    let gastric =
        delta_pka.and_then(|d| gastric_survival(d, api_is_base, candidate));
    let supersaturation = match (interaction, delta_pka) {
        (Some(kind), Some(d)) => supersaturation(kind, d, synthon_score, record.logp),
        _ => None,
    };
    let glass = match (candidate.glass_transition, inputs.api_glass_transition) {
        (Some(polymer_tg), Some(api_tg)) => {
            Some(glass::report(api_tg, polymer_tg, inputs.drug_loading))
        }
        _ => None,
    };

    let probability_points = probability.unwrap_or(0.0) * WEIGHT_DPKA_PROBABILITY;
    let synthon_points = f64::from(synthon_score) / 2.0 * WEIGHT_SYNTHON;
    let miscibility_points = miscibility.band.points() / MISCIBILITY_POINTS_HIGH
        * WEIGHT_MISCIBILITY;
    let penalty =
        hygroscopicity_penalty(candidate, api_is_base, api_ionization.map(|i| i.pka));
    let hygro_points = (1.0 - penalty).max(0.0) * WEIGHT_HYGROSCOPICITY;
    let genotox_points = if candidate.genotoxic_alert {
        0.0
    } else {
        WEIGHT_GENOTOXICITY
    };
    // Absent risk (salt/cocrystal zones) counts as the full allocation.
    let supersat_points = supersaturation
        .map(SupersaturationRisk::points)
        .unwrap_or(WEIGHT_SUPERSATURATION);

    let score = (probability_points
        + synthon_points
        + miscibility_points
        + hygro_points
        + genotox_points
        + supersat_points)
        .min(COMPOSITE_SCORE_CAP);

    CoformerResult {
        coformer: candidate,
        delta_pka,
        probability,
        interaction,
        synthon_score,
        miscibility,
        gastric,
        supersaturation,
        glass,
        score,
    }
}

/// Screens the coformer catalog, returning rows sorted descending by
/// composite score. Ties keep catalog order (stable sort).
pub fn screen(record: &AggregateParameterRecord, inputs: &CoformerInputs) -> Vec<CoformerResult> {
    let mut results: Vec<CoformerResult> = coformers::CATALOG
        .iter()
        .filter(|candidate| inputs.kinds.is_empty() || inputs.kinds.contains(&candidate.kind))
        .map(|candidate| evaluate(record, inputs, candidate))
        .collect();
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    debug!(candidates = results.len(), "coformer screen complete");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::fragment::IonizationKind;
    use crate::core::models::record::IonizationProfile;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    fn api(kind: IonizationKind, pka: f64, logp: f64) -> AggregateParameterRecord {
        AggregateParameterRecord {
            hsp: HspTriple::new(18.5, 10.5, 7.5),
            total: HspTriple::new(18.5, 10.5, 7.5).total(),
            logp,
            molecular_weight: 300.0,
            melting_point: 150.0,
            ionization: Some(IonizationProfile {
                pka,
                kind,
                confidence: 1.5,
            }),
            ..AggregateParameterRecord::zero()
        }
    }

    #[test]
    fn probability_is_continuous_at_the_tail_boundary() {
        let below = formation_probability(-1.0 - 1e-9);
        let at = formation_probability(-1.0);
        assert_close(below, at, 1e-6);
        assert_close(at, 0.05, 1e-9);
    }

    #[test]
    fn probability_hits_the_fixed_reference_points() {
        assert_close(formation_probability(2.0), 0.5, 1e-12);
        assert_close(formation_probability(6.5), 0.99, 1e-12);
        assert_close(formation_probability(-10.0), 0.02, 1e-12);
    }

    #[test]
    fn probability_is_monotonically_non_decreasing() {
        let mut previous = 0.0;
        let mut delta = -8.0;
        while delta <= 10.0 {
            let p = formation_probability(delta);
            assert!(p >= previous, "decrease at ΔpKa {delta}");
            previous = p;
            delta += 0.05;
        }
    }

    #[test]
    fn strong_base_with_hydrochloride_is_a_salt() {
        let record = api(IonizationKind::Base, 9.0, 1.0);
        let inputs = CoformerInputs::new(ApiFunctionalGroup::Amine);
        let hcl = coformers::by_id("HCl").unwrap();
        let result = evaluate(&record, &inputs, hcl);
        assert_close(result.delta_pka.unwrap(), 16.0, 1e-9);
        assert_close(result.probability.unwrap(), 0.99, 1e-12);
        assert_eq!(result.interaction, Some(InteractionType::Salt));
        assert_eq!(result.gastric, Some(GastricStability::Stable));
        assert!(result.supersaturation.is_none());
    }

    #[test]
    fn acidic_api_with_a_strong_base_former_is_a_salt() {
        let record = api(IonizationKind::Acid, 4.5, 1.0);
        let inputs = CoformerInputs::new(ApiFunctionalGroup::CarboxylicAcid);
        let arginine = coformers::by_id("Arginine").unwrap();
        let result = evaluate(&record, &inputs, arginine);
        // The candidate is the base side here: 12.5 - 4.5, not the reverse.
        assert_close(result.delta_pka.unwrap(), 8.0, 1e-9);
        assert_close(result.probability.unwrap(), 0.99, 1e-12);
        assert_eq!(result.interaction, Some(InteractionType::Salt));
        assert_eq!(result.gastric, Some(GastricStability::Stable));
    }

    #[test]
    fn acid_with_nicotinamide_sits_in_the_continuum() {
        let record = api(IonizationKind::Acid, 5.0, 1.0);
        let inputs = CoformerInputs::new(ApiFunctionalGroup::CarboxylicAcid);
        let nicotinamide = coformers::by_id("Nicotinamide").unwrap();
        let result = evaluate(&record, &inputs, nicotinamide);
        assert_close(result.delta_pka.unwrap(), 1.7, 1e-9);
        assert_eq!(result.interaction, Some(InteractionType::Continuum));
        assert_eq!(result.synthon_score, 2);
        assert!(result.supersaturation.is_some());
    }

    #[test]
    fn lipophilic_api_raises_the_supersaturation_risk() {
        let lean = supersaturation(InteractionType::Continuum, 3.0, 0, 1.0);
        let greasy = supersaturation(InteractionType::Continuum, 3.0, 0, 4.0);
        assert_eq!(lean, Some(SupersaturationRisk::Medium));
        assert_eq!(greasy, Some(SupersaturationRisk::High));
        // A strong synthon pulls the risk back down.
        assert_eq!(
            supersaturation(InteractionType::Continuum, 3.0, 2, 1.0),
            Some(SupersaturationRisk::Low)
        );
    }

    #[test]
    fn hydrochloride_of_a_strong_base_pays_the_deliquescence_penalty() {
        let hcl = coformers::by_id("HCl").unwrap();
        let strong = hygroscopicity_penalty(hcl, true, Some(9.0));
        let weak = hygroscopicity_penalty(hcl, true, Some(6.0));
        assert_close(strong, 0.95, 1e-12);
        assert_close(weak, 0.80, 1e-12);
    }

    #[test]
    fn polymers_score_without_ionization_terms() {
        let record = api(IonizationKind::Base, 9.0, 2.0);
        let mut inputs = CoformerInputs::new(ApiFunctionalGroup::Amine);
        inputs.api_glass_transition = Some(60.0);
        let pvp = coformers::by_id("PVP-K30").unwrap();
        let result = evaluate(&record, &inputs, pvp);
        assert!(result.delta_pka.is_none());
        assert!(result.probability.is_none());
        assert!(result.interaction.is_none());
        assert!(result.glass.is_some());
        assert!(matches!(
            result.miscibility.metric,
            MiscibilityMetric::FloryHuggins(_)
        ));
    }

    #[test]
    fn scores_stay_on_the_scale_and_sort_descending() {
        let record = api(IonizationKind::Base, 9.0, 3.5);
        let inputs = CoformerInputs {
            api_glass_transition: Some(75.0),
            ..CoformerInputs::new(ApiFunctionalGroup::Amine)
        };
        let results = screen(&record, &inputs);
        assert_eq!(results.len(), coformers::CATALOG.len());
        for row in &results {
            assert!(row.score >= 0.0 && row.score <= 100.0, "{}", row.coformer.id);
        }
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn kind_filter_restricts_the_candidate_set() {
        let record = api(IonizationKind::Acid, 4.5, 1.0);
        let inputs = CoformerInputs {
            kinds: vec![CoformerKind::Polymer],
            ..CoformerInputs::new(ApiFunctionalGroup::CarboxylicAcid)
        };
        let results = screen(&record, &inputs);
        assert!(!results.is_empty());
        assert!(results.iter().all(|row| row.coformer.is_polymer()));
    }
}
