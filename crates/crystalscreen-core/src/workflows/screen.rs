//! The end-to-end screening workflow.

use crate::core::biopharm::{self, BiopharmProfile};
use crate::core::estimator;
use crate::core::models::fragment::FragmentCounts;
use crate::core::models::record::AggregateParameterRecord;
use crate::core::parser;
use crate::engine::coformer::{self, CoformerInputs, CoformerResult};
use crate::engine::solvent::{self, SolventFilter, SolventScreening};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("structure notation '{0}' contains no recognizable fragments")]
    UnrecognizedStructure(String),
    #[error("fragment map is empty")]
    EmptyFragmentMap,
    #[error("drug loading fraction {0} is outside (0, 1]")]
    InvalidDrugLoading(f64),
    #[error("dose must be positive, got {0} mg")]
    InvalidDose(f64),
}

/// The three supported structure input paths.
#[derive(Debug, Clone)]
pub enum StructureInput {
    /// A fragment count map, e.g. assembled from string labels.
    Fragments(FragmentCounts),
    /// A linear notation string, parsed heuristically.
    Notation(String),
    /// A fully pre-populated record (manual override path).
    Record(AggregateParameterRecord),
}

/// Everything a full screening run needs.
#[derive(Debug, Clone)]
pub struct ScreenRequest {
    pub input: StructureInput,
    /// Dose in mg for the dose-number and BCS computation.
    pub dose: f64,
    pub solvent_filter: SolventFilter,
    /// When absent, the coformer screen is skipped.
    pub coformer_inputs: Option<CoformerInputs>,
}

#[derive(Debug, Clone)]
pub struct ScreenReport {
    pub record: AggregateParameterRecord,
    pub biopharm: BiopharmProfile,
    pub solvents: SolventScreening,
    pub coformers: Vec<CoformerResult>,
}

/// Resolves any structure input into a parameter record.
///
/// An unparseable notation string and an empty fragment map are reported as
/// errors here; the lower layers treat them as degenerate-but-valid inputs.
pub fn resolve_record(input: &StructureInput) -> Result<AggregateParameterRecord, ScreenError> {
    match input {
        StructureInput::Fragments(counts) => {
            if counts.is_empty() {
                return Err(ScreenError::EmptyFragmentMap);
            }
            Ok(estimator::aggregate(counts))
        }
        StructureInput::Notation(notation) => {
            let counts = parser::parse(notation);
            if counts.is_empty() {
                return Err(ScreenError::UnrecognizedStructure(notation.clone()));
            }
            info!(fragments = counts.len(), "parsed structure notation");
            Ok(estimator::aggregate(&counts))
        }
        StructureInput::Record(record) => Ok(record.clone()),
    }
}

fn validate(request: &ScreenRequest) -> Result<(), ScreenError> {
    if request.dose <= 0.0 {
        return Err(ScreenError::InvalidDose(request.dose));
    }
    if let Some(inputs) = &request.coformer_inputs {
        if !(inputs.drug_loading > 0.0 && inputs.drug_loading <= 1.0) {
            return Err(ScreenError::InvalidDrugLoading(inputs.drug_loading));
        }
    }
    Ok(())
}

/// Runs parameter estimation, the biopharmaceutics profile, the solvent
/// screen, and (when requested) the coformer screen.
#[instrument(skip_all, name = "screen_workflow")]
pub fn run(request: &ScreenRequest) -> Result<ScreenReport, ScreenError> {
    validate(request)?;
    let record = resolve_record(&request.input)?;
    info!(
        logp = record.logp,
        molecular_weight = record.molecular_weight,
        "parameter record resolved"
    );

    let biopharm = biopharm::profile(&record, request.dose);
    let solvents = solvent::screen(&record, &request.solvent_filter);
    let coformers = match &request.coformer_inputs {
        Some(inputs) => coformer::screen(&record, inputs),
        None => Vec::new(),
    };

    info!(
        solvents = solvents.results.len(),
        coformers = coformers.len(),
        "screening complete"
    );
    Ok(ScreenReport {
        record,
        biopharm,
        solvents,
        coformers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::fragment::Fragment;
    use crate::core::models::substance::ApiFunctionalGroup;

    fn ibuprofen_like() -> FragmentCounts {
        FragmentCounts::from_iter([
            (Fragment::Phenyl, 1),
            (Fragment::CarboxylicAcid, 1),
            (Fragment::Methylene, 1),
            (Fragment::Methyl, 3),
            (Fragment::Methine, 2),
        ])
    }

    #[test]
    fn full_run_produces_all_report_sections() {
        let request = ScreenRequest {
            input: StructureInput::Fragments(ibuprofen_like()),
            dose: 200.0,
            solvent_filter: SolventFilter::default(),
            coformer_inputs: Some(CoformerInputs::new(ApiFunctionalGroup::CarboxylicAcid)),
        };
        let report = run(&request).unwrap();
        assert!(report.record.ionization.is_some());
        assert!(!report.solvents.results.is_empty());
        assert!(!report.coformers.is_empty());
    }

    #[test]
    fn notation_and_fragment_paths_agree() {
        let via_notation = resolve_record(&StructureInput::Notation("CCCC".into())).unwrap();
        let via_fragments = resolve_record(&StructureInput::Fragments(FragmentCounts::from_iter(
            [(Fragment::Methylene, 3), (Fragment::Methyl, 1)],
        )))
        .unwrap();
        assert_eq!(via_notation, via_fragments);
    }

    #[test]
    fn unparseable_notation_is_an_error() {
        let result = resolve_record(&StructureInput::Notation("@@@@".into()));
        assert!(matches!(
            result,
            Err(ScreenError::UnrecognizedStructure(_))
        ));
    }

    #[test]
    fn invalid_drug_loading_is_rejected() {
        let request = ScreenRequest {
            input: StructureInput::Fragments(ibuprofen_like()),
            dose: 100.0,
            solvent_filter: SolventFilter::default(),
            coformer_inputs: Some(CoformerInputs {
                drug_loading: 1.5,
                ..CoformerInputs::new(ApiFunctionalGroup::CarboxylicAcid)
            }),
        };
        assert!(matches!(
            run(&request),
            Err(ScreenError::InvalidDrugLoading(_))
        ));
    }

    #[test]
    fn coformer_screen_is_opt_in() {
        let request = ScreenRequest {
            input: StructureInput::Fragments(ibuprofen_like()),
            dose: 100.0,
            solvent_filter: SolventFilter::default(),
            coformer_inputs: None,
        };
        let report = run(&request).unwrap();
        assert!(report.coformers.is_empty());
    }
}
