//! linkml-browser CLI - generate and maintain standalone faceted browsers.

mod cli;
mod commands;
mod logging;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Deploy {
            data,
            output,
            schema,
            title,
            description,
            force,
        } => commands::deploy::run(data, output, schema, title, description, force, cli.verbose),

        Commands::InitSchema {
            data,
            output,
            title,
            description,
        } => commands::init_schema::run(data, output, title, description),

        Commands::DeploySchema {
            schemas,
            output,
            title,
            description,
            force,
        } => commands::deploy_schema::run(schemas, output, title, description, force),

        Commands::Filter {
            input,
            output,
            status_allow,
            taxon_allow,
            balance_by,
            max_records,
        } => commands::filter::run(
            input,
            output,
            &status_allow,
            &taxon_allow,
            &balance_by,
            max_records,
        ),

        Commands::Validate { dir, json } => commands::validate::run(dir, json),

        Commands::Serve { dir, port, no_open } => commands::serve::run(dir, port, no_open),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
