use std::io;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    /// Fewer than two words survived loading
    #[error("Not enough words ({found} loaded, at least 2 required)")]
    NotEnoughWords { found: usize },

    /// Candidates could not be written out
    #[error("Failed to write candidates")]
    Output(#[from] io::Error),
}

impl ComposeError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::NotEnoughWords { .. } => ExitCode::from(3),
            Self::Output(_) => ExitCode::FAILURE,
        }
    }
}
