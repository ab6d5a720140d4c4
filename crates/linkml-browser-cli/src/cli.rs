//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// linkml-browser: generate standalone faceted browsers for JSON data
#[derive(Parser)]
#[command(name = "linkml-browser")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a browser folder from a JSON array of records
    Deploy {
        /// Path to the JSON data file
        #[arg(value_name = "DATA")]
        data: PathBuf,

        /// Output directory for the browser
        #[arg(value_name = "OUTPUT_DIR")]
        output: PathBuf,

        /// Use this schema file instead of inferring one
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Browser title (ignored with --schema)
        #[arg(short, long)]
        title: Option<String>,

        /// Browser description (ignored with --schema)
        #[arg(short, long)]
        description: Option<String>,

        /// Overwrite the output directory if it exists
        #[arg(short, long)]
        force: bool,
    },

    /// Infer a schema from data and write it for hand-editing
    InitSchema {
        /// Path to the JSON data file
        #[arg(value_name = "DATA")]
        data: PathBuf,

        /// Output path for the schema
        #[arg(short, long, default_value = "schema.json")]
        output: PathBuf,

        /// Browser title
        #[arg(short, long)]
        title: Option<String>,

        /// Browser description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Generate a browser over the elements of LinkML schema files
    DeploySchema {
        /// LinkML YAML files; later files only add elements the earlier ones lack
        #[arg(value_name = "SCHEMA", required = true, num_args = 1..)]
        schemas: Vec<PathBuf>,

        /// Output directory for the browser
        #[arg(short, long)]
        output: PathBuf,

        /// Browser title
        #[arg(short, long)]
        title: Option<String>,

        /// Browser description
        #[arg(short, long)]
        description: Option<String>,

        /// Overwrite the output directory if it exists
        #[arg(short, long)]
        force: bool,
    },

    /// Filter and balance the records of an existing data.js
    Filter {
        /// Input data.js
        #[arg(short, long)]
        input: PathBuf,

        /// Output data.js
        #[arg(short, long)]
        output: PathBuf,

        /// Comma-separated status values to keep (case-insensitive)
        #[arg(long, default_value = "")]
        status_allow: String,

        /// Comma-separated taxon ids to keep
        #[arg(long, default_value = "")]
        taxon_allow: String,

        /// Field to balance the sample across
        #[arg(long, default_value = "")]
        balance_by: String,

        /// Maximum records to keep (0 = unlimited)
        #[arg(long, default_value = "0")]
        max_records: usize,
    },

    /// Check that a folder holds a loadable browser
    Validate {
        /// Browser folder
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve a browser folder locally
    Serve {
        /// Browser folder
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Port for web server
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Don't automatically open browser
        #[arg(long)]
        no_open: bool,
    },
}
