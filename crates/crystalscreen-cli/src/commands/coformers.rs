use crate::cli::CoformersArgs;
use crate::error::Result;
use crate::utils::progress::screening_spinner;
use crystalscreen::engine::coformer::{self, CoformerInputs, CoformerResult, MiscibilityMetric};
use crystalscreen::workflows::screen::{self, ScreenError};
use std::path::Path;
use tracing::info;

pub fn run(args: CoformersArgs) -> Result<()> {
    if !(args.drug_loading > 0.0 && args.drug_loading <= 1.0) {
        return Err(ScreenError::InvalidDrugLoading(args.drug_loading).into());
    }

    let input = super::structure_input(&args.structure)?;
    let record = screen::resolve_record(&input)?;

    let inputs = CoformerInputs {
        api_group: args.api_group.into(),
        api_glass_transition: args.api_glass_transition,
        drug_loading: args.drug_loading,
        kinds: args.kinds.iter().map(|k| (*k).into()).collect(),
    };

    let spinner = screening_spinner("Ranking coformer catalog...");
    let results = coformer::screen(&record, &inputs);
    spinner.finish_and_clear();
    info!(candidates = results.len(), "coformer screen complete");

    print_table(&results);

    if let Some(path) = &args.output {
        write_csv(path, &results)?;
        println!("\nRanked table written to {}", path.display());
    }

    Ok(())
}

fn miscibility_label(result: &CoformerResult) -> String {
    match result.miscibility.metric {
        MiscibilityMetric::HansenDistance(ra) => {
            format!("{:?} (Ra {:.2})", result.miscibility.band, ra)
        }
        MiscibilityMetric::FloryHuggins(chi) => {
            format!("{:?} (chi {:.2})", result.miscibility.band, chi)
        }
    }
}

fn flags(result: &CoformerResult) -> String {
    let mut flags = Vec::new();
    if result.coformer.genotoxic_alert {
        flags.push("genotox".to_string());
    }
    if let Some(gastric) = &result.gastric {
        flags.push(format!("gastric:{:?}", gastric));
    }
    if let Some(risk) = &result.supersaturation {
        flags.push(format!("supersat:{:?}", risk));
    }
    if let Some(glass) = &result.glass {
        flags.push(format!("Tg {:.0}C {:?}", glass.tg_mix, glass.stability));
    }
    flags.join(", ")
}

pub(crate) fn print_table(results: &[CoformerResult]) {
    println!(
        "{:<4} {:<18} {:<9} {:>6} {:>5} {:<10} {:>3}  {:<22} {:>6}  {}",
        "Rank", "Candidate", "Kind", "dpKa", "P", "Zone", "Syn", "Miscibility", "Score", "Flags"
    );
    for (rank, row) in results.iter().enumerate() {
        let zone = row
            .interaction
            .map_or_else(|| "-".to_string(), |z| format!("{:?}", z));
        println!(
            "{:<4} {:<18} {:<9} {:>6} {:>5} {:<10} {:>3}  {:<22} {:>6.1}  {}",
            rank + 1,
            row.coformer.name,
            format!("{:?}", row.coformer.kind),
            super::fmt_opt(row.delta_pka),
            row.probability
                .map_or_else(|| "-".to_string(), |p| format!("{:.2}", p)),
            zone,
            row.synthon_score,
            miscibility_label(row),
            row.score,
            flags(row),
        );
    }
}

fn write_csv(path: &Path, results: &[CoformerResult]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "rank",
        "id",
        "name",
        "kind",
        "delta_pka",
        "probability",
        "interaction",
        "synthon_score",
        "miscibility_band",
        "miscibility_metric",
        "gastric",
        "supersaturation",
        "tg_mix",
        "asd_stability",
        "genotoxic_alert",
        "score",
    ])?;

    for (rank, row) in results.iter().enumerate() {
        let (metric_value, band) = match row.miscibility.metric {
            MiscibilityMetric::HansenDistance(ra) => (format!("{:.2}", ra), "hansen"),
            MiscibilityMetric::FloryHuggins(chi) => (format!("{:.2}", chi), "flory_huggins"),
        };
        writer.write_record([
            (rank + 1).to_string(),
            row.coformer.id.to_string(),
            row.coformer.name.to_string(),
            format!("{:?}", row.coformer.kind),
            super::fmt_opt(row.delta_pka),
            row.probability
                .map_or_else(|| "-".to_string(), |p| format!("{:.3}", p)),
            row.interaction
                .map_or_else(|| "-".to_string(), |z| format!("{:?}", z)),
            row.synthon_score.to_string(),
            format!("{:?}", row.miscibility.band),
            format!("{}:{}", band, metric_value),
            row.gastric
                .map_or_else(|| "-".to_string(), |g| format!("{:?}", g)),
            row.supersaturation
                .map_or_else(|| "-".to_string(), |s| format!("{:?}", s)),
            row.glass
                .as_ref()
                .map_or_else(|| "-".to_string(), |g| format!("{:.1}", g.tg_mix)),
            row.glass
                .as_ref()
                .map_or_else(|| "-".to_string(), |g| format!("{:?}", g.stability)),
            row.coformer.genotoxic_alert.to_string(),
            format!("{:.1}", row.score),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
