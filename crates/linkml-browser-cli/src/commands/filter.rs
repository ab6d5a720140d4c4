//! Filter command - subset and balance an existing data.js.

use std::path::PathBuf;

use colored::Colorize;
use linkml_browser::gallery::{parse_list, read_data_script, write_data_script};
use linkml_browser::{FilterConfig, filter_records};

pub fn run(
    input: PathBuf,
    output: PathBuf,
    status_allow: &str,
    taxon_allow: &str,
    balance_by: &str,
    max_records: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = read_data_script(&input)?;

    let config = FilterConfig::default()
        .with_status_allow(parse_list(status_allow))
        .with_taxon_allow(parse_list(taxon_allow))
        .with_balance_by(balance_by)
        .with_max_records(max_records);
    let filtered = filter_records(&records, &config);

    write_data_script(&output, &filtered)?;

    println!("Input records: {}", records.len());
    println!("Filtered records: {}", filtered.len().to_string().green());
    println!("Wrote {}", output.display());

    Ok(())
}
