use std::path::Path;

use serde_json::json;
use tally_core::{parse_samples, summarize};

use crate::commands::common::{Printer, read_input};
use crate::error::CliError;

pub(crate) fn run(path: &Path, out: &mut Printer) -> Result<(), CliError> {
    let text = read_input(path)?;
    let summary = parse_samples(&text)
        .and_then(|values| summarize(&values))
        .map_err(|source| CliError::Domain {
            path: path.to_path_buf(),
            source,
        })?;

    out.record(json!(summary))?;
    let rows = [
        ("Min", summary.min),
        ("Median", summary.median),
        ("Max", summary.max),
        ("Sum", summary.sum),
        ("Mean", summary.mean),
        ("Std. dev.", summary.std_dev),
    ];
    for (label, value) in rows {
        out.text(format_args!("{label:>9}: {value}"))?;
    }
    Ok(())
}
