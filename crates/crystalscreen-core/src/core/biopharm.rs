//! Biopharmaceutics calculator.
//!
//! Derives the developability picture from an aggregate parameter record:
//! distribution coefficient at plasma pH, Yalkowsky intrinsic solubility,
//! Henderson-Hasselbalch pH-dependent solubility, dose number at FaSSIF
//! conditions, BCS class, and Lipinski/Veber druglikeness.

use crate::core::constants::{
    BCS_PERMEABILITY_LOGP, BCS_SOLUBILITY_DOSE_NUMBER, FASSIF_PH, GI_VOLUME_ML, GSE_INTERCEPT,
    GSE_MELTING_REFERENCE, GSE_MELTING_SLOPE, LIPINSKI_ACCEPTORS, LIPINSKI_DONORS, LIPINSKI_LOGP,
    LIPINSKI_MW, LOGD_REFERENCE_PH, STANDARD_PH_SET, VEBER_ROTATABLE_BONDS, VEBER_TPSA,
};
use crate::core::models::record::{AggregateParameterRecord, IonizationProfile};
use serde::Serialize;

/// Biopharmaceutics Classification System class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BcsClass {
    One,
    Two,
    Three,
    Four,
}

impl BcsClass {
    pub fn description(&self) -> &'static str {
        match self {
            BcsClass::One => "High Permeability / High Solubility",
            BcsClass::Two => "High Permeability / Low Solubility",
            BcsClass::Three => "Low Permeability / High Solubility",
            BcsClass::Four => "Low Permeability / Low Solubility",
        }
    }

    /// Formulation strategy recommended for the class.
    pub fn strategy(&self) -> &'static str {
        match self {
            BcsClass::One => "Conventional solid dosage form. Focus on physical stability.",
            BcsClass::Two => "Salt screening, cocrystals, ASD, nano-sizing, lipid systems.",
            BcsClass::Three => "Permeation enhancers, lipid formulations, or prodrugs.",
            BcsClass::Four => {
                "Complex formulation needed: lipid + absorption enhancers or ASD."
            }
        }
    }
}

/// Solubility at one pH of the dosing set, in mg/mL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolubilityPoint {
    pub ph: f64,
    pub solubility: f64,
}

/// The full developability summary for one parameter record and dose.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiopharmProfile {
    /// LogD at pH 7.4; `None` without an ionizable group.
    pub log_d: Option<f64>,
    /// Yalkowsky intrinsic solubility, mol/L.
    pub intrinsic_solubility_mol: f64,
    /// Yalkowsky intrinsic solubility, mg/mL.
    pub intrinsic_solubility: f64,
    pub ph_profile: Vec<SolubilityPoint>,
    /// Dose number at FaSSIF pH; `None` when solubility underflows to zero.
    pub dose_number: Option<f64>,
    pub bcs: BcsClass,
    pub lipinski_violations: u32,
    pub veber_pass: bool,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Distribution coefficient at the given pH.
///
/// Acid: `logP − log10(1 + 10^(pH − pKa))`; base mirrors the exponent.
/// `None` without an ionizable group (logD equals logP there).
pub fn log_d(logp: f64, ionization: Option<&IonizationProfile>, ph: f64) -> Option<f64> {
    let profile = ionization?;
    let exponent = if profile.is_base() {
        profile.pka - ph
    } else {
        ph - profile.pka
    };
    Some(round2(logp - (1.0 + 10f64.powf(exponent)).log10()))
}

/// Yalkowsky general solubility estimate, returned in mol/L.
pub fn intrinsic_solubility_mol(melting_point: f64, logp: f64) -> f64 {
    let log_s0 =
        GSE_INTERCEPT - GSE_MELTING_SLOPE * (melting_point - GSE_MELTING_REFERENCE) - logp;
    10f64.powf(log_s0)
}

/// Henderson-Hasselbalch solubility at a given pH, in the units of `s0`.
///
/// Bases gain solubility below their pKa, acids above; a non-ionizable
/// molecule keeps its intrinsic value.
pub fn solubility_at_ph(s0: f64, ionization: Option<&IonizationProfile>, ph: f64) -> f64 {
    match ionization {
        Some(profile) => {
            let exponent = if profile.is_base() {
                profile.pka - ph
            } else {
                ph - profile.pka
            };
            s0 * (1.0 + 10f64.powf(exponent))
        }
        None => s0,
    }
}

/// Dose number D0 = dose / (S · 250 mL). `None` when the solubility is zero.
pub fn dose_number(dose_mg: f64, solubility_mg_ml: f64) -> Option<f64> {
    (solubility_mg_ml > 0.0).then(|| round2(dose_mg / (solubility_mg_ml * GI_VOLUME_ML)))
}

/// BCS class from the logP permeability proxy and the dose number
/// solubility proxy. A missing dose number counts as low solubility.
pub fn bcs_classify(logp: f64, dose_number: Option<f64>) -> BcsClass {
    let high_permeability = logp >= BCS_PERMEABILITY_LOGP;
    let high_solubility = dose_number.is_some_and(|d0| d0 <= BCS_SOLUBILITY_DOSE_NUMBER);
    match (high_permeability, high_solubility) {
        (true, true) => BcsClass::One,
        (true, false) => BcsClass::Two,
        (false, true) => BcsClass::Three,
        (false, false) => BcsClass::Four,
    }
}

/// Number of Lipinski rule-of-five violations, 0 to 4.
pub fn lipinski_violations(record: &AggregateParameterRecord) -> u32 {
    u32::from(record.molecular_weight > LIPINSKI_MW)
        + u32::from(record.logp > LIPINSKI_LOGP)
        + u32::from(record.donors > LIPINSKI_DONORS)
        + u32::from(record.acceptors > LIPINSKI_ACCEPTORS)
}

pub fn veber_pass(record: &AggregateParameterRecord) -> bool {
    record.rotatable_bonds <= VEBER_ROTATABLE_BONDS && record.tpsa <= VEBER_TPSA
}

/// Computes the full biopharmaceutics profile at the standard dosing pH set.
pub fn profile(record: &AggregateParameterRecord, dose_mg: f64) -> BiopharmProfile {
    profile_at(record, dose_mg, &STANDARD_PH_SET)
}

/// As [`profile`], over a caller-supplied pH set.
pub fn profile_at(
    record: &AggregateParameterRecord,
    dose_mg: f64,
    ph_set: &[f64],
) -> BiopharmProfile {
    let ionization = record.ionization.as_ref();
    let s0_mol = intrinsic_solubility_mol(record.melting_point, record.logp);
    let s0 = s0_mol * record.molecular_weight;

    let ph_profile = ph_set
        .iter()
        .map(|&ph| SolubilityPoint {
            ph,
            solubility: solubility_at_ph(s0, ionization, ph),
        })
        .collect();

    let s_fassif = solubility_at_ph(s0, ionization, FASSIF_PH);
    let d0 = dose_number(dose_mg, s_fassif);

    BiopharmProfile {
        log_d: log_d(record.logp, ionization, LOGD_REFERENCE_PH),
        intrinsic_solubility_mol: s0_mol,
        intrinsic_solubility: s0,
        ph_profile,
        dose_number: d0,
        bcs: bcs_classify(record.logp, d0),
        lipinski_violations: lipinski_violations(record),
        veber_pass: veber_pass(record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::fragment::IonizationKind;
    use crate::core::models::record::HspTriple;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    fn acid(pka: f64) -> IonizationProfile {
        IonizationProfile {
            pka,
            kind: IonizationKind::Acid,
            confidence: 1.5,
        }
    }

    fn base(pka: f64) -> IonizationProfile {
        IonizationProfile {
            pka,
            kind: IonizationKind::Base,
            confidence: 1.5,
        }
    }

    fn record(logp: f64, melting_point: f64) -> AggregateParameterRecord {
        AggregateParameterRecord {
            hsp: HspTriple::new(18.0, 8.0, 10.0),
            total: 22.0,
            molar_volume: 200.0,
            logp,
            molecular_weight: 250.0,
            donors: 1,
            acceptors: 3,
            tpsa: 60.0,
            rotatable_bonds: 4,
            melting_point,
            ionization: Some(acid(4.5)),
        }
    }

    #[test]
    fn log_d_drops_for_an_ionized_acid_at_plasma_ph() {
        // pKa 4.5 at pH 7.4: logD = logP − log10(1 + 10^2.9).
        let value = log_d(3.0, Some(&acid(4.5)), 7.4).unwrap();
        assert_close(value, 3.0 - (1.0 + 10f64.powf(2.9)).log10(), 0.005);
    }

    #[test]
    fn log_d_is_undefined_without_ionization() {
        assert!(log_d(2.0, None, 7.4).is_none());
    }

    #[test]
    fn gse_reference_point_recovers_the_intercept() {
        // MP at the reference temperature and logP 0: log S0 = 0.5.
        assert_close(intrinsic_solubility_mol(25.0, 0.0), 10f64.powf(0.5), 1e-9);
    }

    #[test]
    fn base_solubility_rises_below_the_pka() {
        let s_gastric = solubility_at_ph(1.0, Some(&base(9.0)), 1.2);
        let s_plasma = solubility_at_ph(1.0, Some(&base(9.0)), 7.4);
        assert!(s_gastric > s_plasma);
        assert_close(s_gastric, 1.0 + 10f64.powf(7.8), 1e-3);
    }

    #[test]
    fn non_ionizable_solubility_is_flat_across_ph() {
        assert_close(solubility_at_ph(0.3, None, 1.2), 0.3, 1e-12);
        assert_close(solubility_at_ph(0.3, None, 7.4), 0.3, 1e-12);
    }

    #[test]
    fn dose_number_is_undefined_at_zero_solubility() {
        assert!(dose_number(100.0, 0.0).is_none());
        assert_close(dose_number(100.0, 0.4).unwrap(), 1.0, 1e-9);
    }

    #[test]
    fn bcs_quadrants() {
        assert_eq!(bcs_classify(2.0, Some(0.5)), BcsClass::One);
        assert_eq!(bcs_classify(2.0, Some(5.0)), BcsClass::Two);
        assert_eq!(bcs_classify(-1.0, Some(0.5)), BcsClass::Three);
        assert_eq!(bcs_classify(-1.0, None), BcsClass::Four);
    }

    #[test]
    fn lipinski_counts_each_violation_once() {
        let mut r = record(6.0, 150.0);
        r.molecular_weight = 600.0;
        r.donors = 6;
        r.acceptors = 11;
        assert_eq!(lipinski_violations(&r), 4);
        assert_eq!(lipinski_violations(&record(1.0, 150.0)), 0);
    }

    #[test]
    fn profile_reports_the_standard_ph_set() {
        let profile = profile(&record(2.0, 150.0), 100.0);
        assert_eq!(profile.ph_profile.len(), 4);
        assert_close(profile.ph_profile[2].ph, 6.5, 1e-12);
        // Acid pKa 4.5: solubility at pH 7.4 exceeds the gastric point.
        assert!(profile.ph_profile[3].solubility > profile.ph_profile[0].solubility);
        assert!(profile.veber_pass);
    }
}
