use crate::cli::SolventsArgs;
use crate::error::Result;
use crate::utils::progress::screening_spinner;
use crystalscreen::core::models::substance::IchClass;
use crystalscreen::engine::solvent::{self, SolventFilter, SolventScreening};
use crystalscreen::workflows::screen;
use std::path::Path;
use tracing::info;

pub fn run(args: SolventsArgs) -> Result<()> {
    let input = super::structure_input(&args.structure)?;
    let record = screen::resolve_record(&input)?;

    let filter = SolventFilter {
        exclude_classes: args.exclude_classes.iter().map(|c| (*c).into()).collect(),
        categories: args.categories.iter().map(|c| (*c).into()).collect(),
        max_distance: args.max_distance,
    };

    let spinner = screening_spinner("Ranking solvent catalog...");
    let screening = solvent::screen(&record, &filter);
    spinner.finish_and_clear();
    info!(candidates = screening.results.len(), "solvent screen complete");

    print_table(&screening);

    if let Some(path) = &args.output {
        write_csv(path, &screening)?;
        println!("\nRanked table written to {}", path.display());
    }

    Ok(())
}

fn ich_label(class: IchClass) -> &'static str {
    match class {
        IchClass::One => "1",
        IchClass::Two => "2",
        IchClass::Three => "3",
        IchClass::Unclassified => "-",
    }
}

pub(crate) fn print_table(screening: &SolventScreening) {
    println!(
        "{:<4} {:<20} {:>6} {:>6} {:>6} {:>7} {:>6}  {:<10} {:>5}",
        "Rank", "Solvent", "dD", "dP", "dH", "Ra", "RED", "Band", "ICH"
    );
    for (rank, row) in screening.results.iter().enumerate() {
        println!(
            "{:<4} {:<20} {:>6.1} {:>6.1} {:>6.1} {:>7.2} {:>6.2}  {:<10} {:>5}",
            rank + 1,
            row.solvent.name,
            row.solvent.hsp.dispersion,
            row.solvent.hsp.polar,
            row.solvent.hsp.hydrogen_bonding,
            row.distance,
            row.red,
            row.band.to_string(),
            ich_label(row.solvent.ich_class),
        );
    }

    let summary = &screening.summary;
    println!(
        "\n{} candidates: {} excellent, {} good, {} partial, {} poor, {} insoluble",
        summary.total(),
        summary.excellent,
        summary.good,
        summary.partial,
        summary.poor,
        summary.insoluble
    );
}

fn write_csv(path: &Path, screening: &SolventScreening) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "rank", "id", "name", "dispersion", "polar", "hydrogen_bonding", "distance", "red",
        "band", "ich_class", "ich_limit_ppm", "boiling_point", "water_miscible",
    ])?;

    for (rank, row) in screening.results.iter().enumerate() {
        writer.write_record([
            (rank + 1).to_string(),
            row.solvent.id.to_string(),
            row.solvent.name.to_string(),
            format!("{:.1}", row.solvent.hsp.dispersion),
            format!("{:.1}", row.solvent.hsp.polar),
            format!("{:.1}", row.solvent.hsp.hydrogen_bonding),
            format!("{:.2}", row.distance),
            format!("{:.2}", row.red),
            row.band.to_string(),
            ich_label(row.solvent.ich_class).to_string(),
            row.solvent
                .ich_ppm
                .map_or_else(|| "-".to_string(), |ppm| ppm.to_string()),
            format!("{:.1}", row.solvent.boiling_point),
            row.solvent.water_miscible.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
