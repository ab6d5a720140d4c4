//! Init-schema command - write an inferred schema for hand-editing.

use std::path::PathBuf;

use colored::Colorize;
use linkml_browser::{SchemaInference, load_json_data, save_schema};

pub fn run(
    data: PathBuf,
    output: PathBuf,
    title: Option<String>,
    description: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = load_json_data(&data)?;
    println!("Loaded {} items from {}", records.len(), data.display());

    let mut inference = SchemaInference::new();
    if let Some(title) = title {
        inference = inference.with_title(title);
    }
    if let Some(description) = description {
        inference = inference.with_description(description);
    }
    let schema = inference.infer(&records)?;
    save_schema(&schema, &output)?;

    println!();
    println!(
        "{} {}",
        "Schema written to:".green().bold(),
        output.display().to_string().white().bold()
    );
    println!("Edit this file to customize facets, search fields, and display options.");
    println!(
        "Then run: {}",
        format!(
            "linkml-browser deploy {} output/ --schema {}",
            data.display(),
            output.display()
        )
        .cyan()
        .bold()
    );

    Ok(())
}
