use clap::{Args, Parser, Subcommand, ValueEnum};
use crystalscreen::core::models::substance::{
    ApiFunctionalGroup, CoformerKind, IchClass, SolventCategory,
};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "CrystalScreen CLI - group-contribution parameter estimation and \
             solvent/coformer compatibility screening for solid-state formulation.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the full parameter record and biopharmaceutics profile.
    Estimate(EstimateArgs),
    /// Rank the solvent catalog by Hansen distance to the API.
    Solvents(SolventsArgs),
    /// Rank the coformer/polymer catalog by composite lead score.
    Coformers(CoformersArgs),
    /// Run the full screen: parameters, biopharmaceutics, solvents and coformers.
    Screen(ScreenArgs),
}

/// Structure input, shared by every subcommand. Exactly one of the two paths
/// must be given.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct StructureArgs {
    /// Linear structure notation (heuristic parser, low fidelity)
    #[arg(short = 'n', long, value_name = "NOTATION")]
    pub notation: Option<String>,

    /// Fragment counts as comma-separated label=count pairs,
    /// e.g. 'aromatic_ring=1,cooh=1,ch3=2'
    #[arg(short = 'f', long, value_name = "LABEL=COUNT", value_delimiter = ',')]
    pub fragments: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub structure: StructureArgs,

    /// Dose in mg, for the dose number and BCS class
    #[arg(short, long, value_name = "MG", default_value_t = 100.0)]
    pub dose: f64,

    /// Write the parameter table to a CSV file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SolventsArgs {
    #[command(flatten)]
    pub structure: StructureArgs,

    /// Exclude solvents of an ICH residual-solvent class (repeatable)
    #[arg(long = "exclude-class", value_enum, value_name = "CLASS")]
    pub exclude_classes: Vec<IchClassArg>,

    /// Only consider solvents of these chemical categories (repeatable)
    #[arg(long = "category", value_enum, value_name = "CATEGORY")]
    pub categories: Vec<CategoryArg>,

    /// Drop candidates with Hansen distance above this ceiling
    #[arg(long, value_name = "RA")]
    pub max_distance: Option<f64>,

    /// Write the ranked table to a CSV file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CoformersArgs {
    #[command(flatten)]
    pub structure: StructureArgs,

    /// The API's primary functional group, for synthon pairing
    #[arg(short = 'g', long = "api-group", value_enum, value_name = "GROUP")]
    pub api_group: ApiGroupArg,

    /// Restrict the screen to one candidate kind (repeatable)
    #[arg(short = 'k', long = "kind", value_enum, value_name = "KIND")]
    pub kinds: Vec<KindArg>,

    /// Amorphous API glass transition in °C, enables the polymer Tg model
    #[arg(long = "api-tg", value_name = "CELSIUS")]
    pub api_glass_transition: Option<f64>,

    /// API mass fraction in the dispersion
    #[arg(long, value_name = "FRACTION", default_value_t = 0.3)]
    pub drug_loading: f64,

    /// Dose in mg, for the dose number and BCS class
    #[arg(short, long, value_name = "MG", default_value_t = 100.0)]
    pub dose: f64,

    /// Write the ranked table to a CSV file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ScreenArgs {
    #[command(flatten)]
    pub structure: StructureArgs,

    /// The API's primary functional group, for synthon pairing
    #[arg(short = 'g', long = "api-group", value_enum, value_name = "GROUP")]
    pub api_group: ApiGroupArg,

    /// Dose in mg, for the dose number and BCS class
    #[arg(short, long, value_name = "MG", default_value_t = 100.0)]
    pub dose: f64,

    /// Restrict the coformer screen to one candidate kind (repeatable)
    #[arg(short = 'k', long = "kind", value_enum, value_name = "KIND")]
    pub kinds: Vec<KindArg>,

    /// Amorphous API glass transition in °C, enables the polymer Tg model
    #[arg(long = "api-tg", value_name = "CELSIUS")]
    pub api_glass_transition: Option<f64>,

    /// API mass fraction in the dispersion
    #[arg(long, value_name = "FRACTION", default_value_t = 0.3)]
    pub drug_loading: f64,

    /// Exclude solvents of an ICH residual-solvent class (repeatable)
    #[arg(long = "exclude-class", value_enum, value_name = "CLASS")]
    pub exclude_classes: Vec<IchClassArg>,

    /// Drop solvents with Hansen distance above this ceiling
    #[arg(long, value_name = "RA")]
    pub max_distance: Option<f64>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum IchClassArg {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
    #[value(name = "3")]
    Three,
    Unclassified,
}

impl From<IchClassArg> for IchClass {
    fn from(arg: IchClassArg) -> Self {
        match arg {
            IchClassArg::One => IchClass::One,
            IchClassArg::Two => IchClass::Two,
            IchClassArg::Three => IchClass::Three,
            IchClassArg::Unclassified => IchClass::Unclassified,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CategoryArg {
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

impl From<CategoryArg> for SolventCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::ProticAlcohol => SolventCategory::ProticAlcohol,
            CategoryArg::ProticDiol => SolventCategory::ProticDiol,
            CategoryArg::PolarAprotic => SolventCategory::PolarAprotic,
            CategoryArg::Ether => SolventCategory::Ether,
            CategoryArg::CyclicEther => SolventCategory::CyclicEther,
            CategoryArg::Ester => SolventCategory::Ester,
            CategoryArg::Halogenated => SolventCategory::Halogenated,
            CategoryArg::AromaticHydrocarbon => SolventCategory::AromaticHydrocarbon,
            CategoryArg::AliphaticHydrocarbon => SolventCategory::AliphaticHydrocarbon,
            CategoryArg::AlicyclicHydrocarbon => SolventCategory::AlicyclicHydrocarbon,
            CategoryArg::Aqueous => SolventCategory::Aqueous,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ApiGroupArg {
    CarboxylicAcid,
    Amine,
    Pyridine,
    Amide,
    Phenol,
    Sulfonamide,
    Hydroxyl,
}

impl From<ApiGroupArg> for ApiFunctionalGroup {
    fn from(arg: ApiGroupArg) -> Self {
        match arg {
            ApiGroupArg::CarboxylicAcid => ApiFunctionalGroup::CarboxylicAcid,
            ApiGroupArg::Amine => ApiFunctionalGroup::Amine,
            ApiGroupArg::Pyridine => ApiFunctionalGroup::Pyridine,
            ApiGroupArg::Amide => ApiFunctionalGroup::Amide,
            ApiGroupArg::Phenol => ApiFunctionalGroup::Phenol,
            ApiGroupArg::Sulfonamide => ApiFunctionalGroup::Sulfonamide,
            ApiGroupArg::Hydroxyl => ApiFunctionalGroup::Hydroxyl,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum KindArg {
    Acid,
    Base,
    Coformer,
    Polymer,
}

impl From<KindArg> for CoformerKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Acid => CoformerKind::AcidFormer,
            KindArg::Base => CoformerKind::BaseFormer,
            KindArg::Coformer => CoformerKind::Coformer,
            KindArg::Polymer => CoformerKind::Polymer,
        }
    }
}
