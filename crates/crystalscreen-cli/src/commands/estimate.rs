use crate::cli::EstimateArgs;
use crate::error::Result;
use crystalscreen::core::biopharm::{self, BiopharmProfile};
use crystalscreen::core::constants::CATALOG_VERSION;
use crystalscreen::core::models::fragment::IonizationKind;
use crystalscreen::core::models::record::AggregateParameterRecord;
use crystalscreen::workflows::screen::{self, ScreenError};
use std::path::Path;
use tracing::info;

pub fn run(args: EstimateArgs) -> Result<()> {
    if args.dose <= 0.0 {
        return Err(ScreenError::InvalidDose(args.dose).into());
    }

    let input = super::structure_input(&args.structure)?;
    let record = screen::resolve_record(&input)?;
    let profile = biopharm::profile(&record, args.dose);
    info!(dose = args.dose, "parameter record resolved");

    print_record(&record);
    print_profile(&profile, args.dose);

    if let Some(path) = &args.output {
        write_csv(path, &record, &profile)?;
        println!("\nParameter table written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn print_record(record: &AggregateParameterRecord) {
    println!("Parameter record (catalog {CATALOG_VERSION})");
    println!(
        "  Hansen parameters   dD {:.2}  dP {:.2}  dH {:.2}  (total {:.2}) MPa^0.5",
        record.hsp.dispersion, record.hsp.polar, record.hsp.hydrogen_bonding, record.total
    );
    println!(
        "  Molar volume        {:.1} cm3/mol    Molecular weight  {:.1} g/mol",
        record.molar_volume, record.molecular_weight
    );
    println!(
        "  LogP                {:.2}            Melting point     {:.1} C",
        record.logp, record.melting_point
    );
    println!(
        "  H-bond donors       {}    acceptors {}    TPSA {:.1} A^2    rotatable bonds {}",
        record.donors, record.acceptors, record.tpsa, record.rotatable_bonds
    );
    match &record.ionization {
        Some(profile) => {
            let kind = match profile.kind {
                IonizationKind::Acid | IonizationKind::VeryWeakAcid => "acidic",
                IonizationKind::Base => "basic",
            };
            println!(
                "  Ionization          {} pKa {:.2} (+/- {:.1})",
                kind, profile.pka, profile.confidence
            );
        }
        None => println!("  Ionization          no ionizable group detected"),
    }
}

pub(crate) fn print_profile(profile: &BiopharmProfile, dose: f64) {
    println!("\nBiopharmaceutics profile ({dose:.0} mg dose)");
    println!("  LogD (pH 7.4)       {}", super::fmt_opt(profile.log_d));
    println!(
        "  Intrinsic solubility {:.4} mg/mL ({:.2e} mol/L)",
        profile.intrinsic_solubility, profile.intrinsic_solubility_mol
    );
    for point in &profile.ph_profile {
        println!("    S at pH {:<4} {:.4} mg/mL", point.ph, point.solubility);
    }
    println!(
        "  Dose number         {}",
        super::fmt_opt(profile.dose_number)
    );
    println!(
        "  BCS class           {:?}: {}",
        profile.bcs,
        profile.bcs.description()
    );
    println!("  Strategy            {}", profile.bcs.strategy());
    println!(
        "  Lipinski violations {}    Veber {}",
        profile.lipinski_violations,
        if profile.veber_pass { "pass" } else { "fail" }
    );
}

fn write_csv(path: &Path, record: &AggregateParameterRecord, profile: &BiopharmProfile) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["parameter", "value"])?;

    let rows = [
        ("dispersion", format!("{:.2}", record.hsp.dispersion)),
        ("polar", format!("{:.2}", record.hsp.polar)),
        ("hydrogen_bonding", format!("{:.2}", record.hsp.hydrogen_bonding)),
        ("total", format!("{:.2}", record.total)),
        ("molar_volume", format!("{:.1}", record.molar_volume)),
        ("molecular_weight", format!("{:.1}", record.molecular_weight)),
        ("logp", format!("{:.2}", record.logp)),
        ("melting_point", format!("{:.1}", record.melting_point)),
        ("donors", record.donors.to_string()),
        ("acceptors", record.acceptors.to_string()),
        ("tpsa", format!("{:.1}", record.tpsa)),
        ("rotatable_bonds", record.rotatable_bonds.to_string()),
        ("log_d_7_4", super::fmt_opt(profile.log_d)),
        ("intrinsic_solubility", format!("{:.4}", profile.intrinsic_solubility)),
        ("dose_number", super::fmt_opt(profile.dose_number)),
        ("bcs_class", format!("{:?}", profile.bcs)),
        ("lipinski_violations", profile.lipinski_violations.to_string()),
        ("veber_pass", profile.veber_pass.to_string()),
    ];
    for (name, value) in rows {
        writer.write_record([name, value.as_str()])?;
    }

    if let Some(ionization) = &record.ionization {
        writer.write_record(["pka".to_string(), format!("{:.2}", ionization.pka)])?;
    }
    for point in &profile.ph_profile {
        writer.write_record([
            format!("solubility_ph_{}", point.ph),
            format!("{:.4}", point.solubility),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
