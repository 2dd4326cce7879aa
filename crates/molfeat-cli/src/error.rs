use molfeat::core::params::ParamError;
use molfeat::core::reference::ReferenceError;
use molfeat::workflows::load::LoadError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Exit code for structure-file and reference-table failures.
pub const EXIT_STRUCTURE: i32 = 1;
/// Exit code for parameter-file failures.
pub const EXIT_PARAMETERS: i32 = 2;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error(transparent)]
    Parameters(#[from] ParamError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Maps the error class to its process exit code. Parameter-file
    /// failures are distinct from every other failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Parameters(_) => EXIT_PARAMETERS,
            _ => EXIT_STRUCTURE,
        }
    }
}
