use crate::utils::parser::ParseError;
use crystalscreen::workflows::screen::ScreenError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Screen(#[from] ScreenError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to write CSV output: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
