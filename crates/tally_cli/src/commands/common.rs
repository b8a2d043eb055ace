use std::fmt;
use std::io::{StdoutLock, Write};
use std::path::Path;

use serde_json::Value;

use crate::error::CliError;

pub(crate) fn read_input(path: &Path) -> Result<String, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Stdout writer that prints either the plain-text line or its JSON record.
pub(crate) struct Printer {
    out: StdoutLock<'static>,
    json: bool,
}

impl Printer {
    pub(crate) fn new(json: bool) -> Self {
        Self {
            out: std::io::stdout().lock(),
            json,
        }
    }

    pub(crate) fn emit(&mut self, record: Value, text: fmt::Arguments<'_>) -> Result<(), CliError> {
        if self.json {
            writeln!(self.out, "{record}")?;
        } else {
            writeln!(self.out, "{text}")?;
        }
        Ok(())
    }

    /// JSON-only output, for records whose plain form spans several lines.
    pub(crate) fn record(&mut self, record: Value) -> Result<(), CliError> {
        if self.json {
            writeln!(self.out, "{record}")?;
        }
        Ok(())
    }

    /// Plain-text only output, such as headings.
    pub(crate) fn text(&mut self, text: fmt::Arguments<'_>) -> Result<(), CliError> {
        if !self.json {
            writeln!(self.out, "{text}")?;
        }
        Ok(())
    }

    pub(crate) fn finish(mut self) -> Result<(), CliError> {
        self.out.flush()?;
        Ok(())
    }
}
