use std::path::PathBuf;

use serde_json::json;
use tally_text::long_lines;

use crate::commands::common::{Printer, read_input};
use crate::error::CliError;

pub(crate) fn run(files: &[PathBuf], max_len: usize, out: &mut Printer) -> Result<(), CliError> {
    for path in files {
        let text = read_input(path)?;
        let long = long_lines(&text, max_len);
        let name = path.display();
        if long.is_empty() {
            out.text(format_args!("{name}: no long lines"))?;
            continue;
        }
        out.text(format_args!("{name}:"))?;
        for l in &long {
            let mut record = json!(l);
            record["file"] = json!(name.to_string());
            out.emit(
                record,
                format_args!(
                    "   over {max_len} chars on line {}, {} chars, \"{} ...\"",
                    l.line, l.len, l.preview
                ),
            )?;
        }
    }
    Ok(())
}
