use crate::cli::ScreenArgs;
use crate::error::Result;
use crate::utils::progress::screening_spinner;
use crystalscreen::engine::coformer::CoformerInputs;
use crystalscreen::engine::solvent::SolventFilter;
use crystalscreen::workflows::screen::{self, ScreenRequest};
use tracing::info;

pub fn run(args: ScreenArgs) -> Result<()> {
    let input = super::structure_input(&args.structure)?;
    let request = ScreenRequest {
        input,
        dose: args.dose,
        solvent_filter: SolventFilter {
            exclude_classes: args.exclude_classes.iter().map(|c| (*c).into()).collect(),
            categories: Vec::new(),
            max_distance: args.max_distance,
        },
        coformer_inputs: Some(CoformerInputs {
            api_group: args.api_group.into(),
            api_glass_transition: args.api_glass_transition,
            drug_loading: args.drug_loading,
            kinds: args.kinds.iter().map(|k| (*k).into()).collect(),
        }),
    };

    let spinner = screening_spinner("Running full screen...");
    let report = screen::run(&request)?;
    spinner.finish_and_clear();
    info!(
        solvents = report.solvents.results.len(),
        coformers = report.coformers.len(),
        "full screen complete"
    );

    super::estimate::print_record(&report.record);
    super::estimate::print_profile(&report.biopharm, args.dose);
    println!("\nSolvent screen");
    super::solvents::print_table(&report.solvents);
    println!("\nCoformer screen");
    super::coformers::print_table(&report.coformers);

    Ok(())
}
