//! Example: Generate a browser folder from a JSON file.
//!
//! Usage:
//!   cargo run --example deploy -- <data.json> <output_dir>
//!
//! Example:
//!   cargo run --example deploy -- books.json books-browser

use std::env;
use std::path::Path;

use linkml_browser::{BrowserGenerator, load_json_data_with_metadata};

fn main() -> linkml_browser::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: cargo run --example deploy -- <data.json> <output_dir>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example deploy -- books.json books-browser");
        std::process::exit(1);
    }

    let data_path = Path::new(&args[1]);
    let output_dir = Path::new(&args[2]);

    if !data_path.exists() {
        eprintln!("Error: File not found: {}", data_path.display());
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Browser for: {}", data_path.display());
    println!("{}", separator);
    println!();

    let (records, source) = load_json_data_with_metadata(data_path)?;

    println!("## Source Metadata");
    println!("  File: {}", source.file);
    println!("  Records: {}", source.record_count);
    println!("  Fields: {}", source.field_count);
    println!("  Hash: {}", source.hash);
    println!();

    let generator = BrowserGenerator::new(records)?;
    let schema = generator.schema();

    println!("## Inferred Schema");
    println!("  Searchable: {}", schema.searchable_fields.join(", "));
    println!("  Facets:");
    for facet in &schema.facets {
        println!("    - {} ({})", facet.label, facet.field_type);
    }
    println!("  Display fields: {}", schema.display_fields.len());
    println!();

    let summary = generator.generate(output_dir, true)?;

    println!("## Output");
    for file in &summary.files {
        println!("  {}", output_dir.join(file).display());
    }

    Ok(())
}
