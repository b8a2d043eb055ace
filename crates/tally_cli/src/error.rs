use std::io;
use std::path::PathBuf;

use tally_core::DomainError;

#[derive(thiserror::Error, Debug)]
pub(crate) enum CliError {
    #[error("Read failed: {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("stdout error: {0}")]
    Stdout(#[from] io::Error),
    #[error("{}: {source}", path.display())]
    Domain {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

impl CliError {
    /// 1 for bad input data, 2 for usage and I/O problems.
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            CliError::Domain { .. } => 1,
            CliError::Read { .. } | CliError::Stdout(_) => 2,
        }
    }

    pub(crate) fn is_broken_pipe(&self) -> bool {
        matches!(self, CliError::Stdout(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
