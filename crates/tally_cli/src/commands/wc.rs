use std::path::PathBuf;

use serde_json::{Value, json};
use tally_text::FileCounts;

use crate::commands::common::{Printer, read_input};
use crate::error::CliError;

pub(crate) fn run(files: &[PathBuf], out: &mut Printer) -> Result<(), CliError> {
    let mut total = FileCounts::default();
    for path in files {
        let c = FileCounts::of(&read_input(path)?);
        let mut record = json!(c);
        record["file"] = json!(path.display().to_string());
        out.emit(
            record,
            format_args!("{} {} {} {}", c.lines, c.words, c.chars, path.display()),
        )?;
        total += c;
    }
    if files.len() > 1 {
        let mut record = json!(total);
        record["file"] = Value::Null;
        out.emit(
            record,
            format_args!("{} {} {} total", total.lines, total.words, total.chars),
        )?;
    }
    Ok(())
}
