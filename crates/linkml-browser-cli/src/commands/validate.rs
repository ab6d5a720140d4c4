//! Validate command - check a browser folder.

use std::path::PathBuf;

use colored::Colorize;
use linkml_browser::validate_gallery;

pub fn run(dir: PathBuf, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let report = validate_gallery(&dir)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.lines() {
            println!("{}", line);
        }
        println!(
            "{} {}",
            "Gallery is valid:".green().bold(),
            dir.display()
        );
    }

    Ok(())
}
