use std::path::Path;

use serde_json::json;
use tally_text::WordCounts;

use crate::commands::common::{Printer, read_input};
use crate::error::CliError;

pub(crate) fn run(path: &Path, n: i64, out: &mut Printer) -> Result<(), CliError> {
    let text = read_input(path)?;
    let counts = WordCounts::from_text(&text);
    log::info!(
        "{}: {} words, {} distinct",
        path.display(),
        counts.total(),
        counts.len()
    );
    for (i, wf) in counts.top(n).iter().enumerate() {
        let rank = i + 1;
        let mut record = json!(wf);
        record["rank"] = json!(rank);
        out.emit(record, format_args!("{rank}. {} ({})", wf.word, wf.count))?;
    }
    Ok(())
}
