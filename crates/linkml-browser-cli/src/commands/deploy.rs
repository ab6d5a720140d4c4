//! Deploy command - generate a browser folder from JSON data.

use std::path::PathBuf;

use colored::Colorize;
use linkml_browser::{
    BrowserGenerator, SchemaInference, load_json_data_with_metadata, load_schema,
};

pub fn run(
    data: PathBuf,
    output: PathBuf,
    schema: Option<PathBuf>,
    title: Option<String>,
    description: Option<String>,
    force: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (records, metadata) = load_json_data_with_metadata(&data)?;
    println!(
        "Loaded {} items from {}",
        records.len().to_string().white().bold(),
        data.display()
    );
    if verbose {
        println!("  Fields: {}", metadata.field_count);
        println!("  Size:   {} bytes", metadata.size_bytes);
        println!("  Hash:   {}", metadata.hash);
    }

    let schema = match schema {
        Some(path) => {
            let schema = load_schema(&path)?;
            println!("Loaded schema from {}", path.display());
            schema
        }
        None => {
            println!("{}", "No schema provided, inferring from data...".cyan());
            let mut inference = SchemaInference::new();
            if let Some(title) = title {
                inference = inference.with_title(title);
            }
            if let Some(description) = description {
                inference = inference.with_description(description);
            }
            let schema = inference.infer(&records)?;
            println!("Inferred schema with {} facets", schema.facets.len());
            schema
        }
    };

    let generator = BrowserGenerator::with_schema(records, schema);
    let summary = generator.generate(&output, force)?;

    for file in &summary.files {
        println!("  {} {}", "Created".green(), file);
    }
    println!();
    println!(
        "{} {}",
        "Browser deployed to:".green().bold(),
        output.display().to_string().white().bold()
    );
    println!("To view, open: {}", output.join("index.html").display());

    Ok(())
}
