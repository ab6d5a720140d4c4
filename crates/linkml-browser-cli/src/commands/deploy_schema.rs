//! Deploy-schema command - browse the elements of LinkML schemas.

use std::path::PathBuf;

use colored::Colorize;
use linkml_browser::{BrowserGenerator, extract_linkml_elements, linkml_browser_schema};

pub fn run(
    schemas: Vec<PathBuf>,
    output: PathBuf,
    title: Option<String>,
    description: Option<String>,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = extract_linkml_elements(&schemas)?;
    println!(
        "Extracted {} elements from {} schema file(s)",
        records.len().to_string().white().bold(),
        schemas.len()
    );

    let schema = linkml_browser_schema(title.as_deref(), description.as_deref());
    let generator = BrowserGenerator::with_schema(records, schema);
    generator.generate(&output, force)?;

    println!();
    println!(
        "{} {}",
        "Schema browser deployed to:".green().bold(),
        output.display().to_string().white().bold()
    );
    println!("To view, open: {}", output.join("index.html").display());

    Ok(())
}
