pub mod coformers;
pub mod estimate;
pub mod screen;
pub mod solvents;

use crate::cli::StructureArgs;
use crate::error::Result;
use crate::utils::parser::parse_fragment_pairs;
use crystalscreen::workflows::screen::StructureInput;

/// Maps the shared structure flags onto a workflow input. Clap guarantees
/// exactly one of the two paths was given.
pub fn structure_input(args: &StructureArgs) -> Result<StructureInput> {
    if let Some(notation) = &args.notation {
        Ok(StructureInput::Notation(notation.clone()))
    } else {
        let counts = parse_fragment_pairs(&args.fragments)?;
        Ok(StructureInput::Fragments(counts))
    }
}

/// Renders an optional value to two decimals, or a dash when absent.
pub(crate) fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}

