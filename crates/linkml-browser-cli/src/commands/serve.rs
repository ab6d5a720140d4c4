//! Serve command - preview a browser folder over HTTP.

use std::path::PathBuf;

use colored::Colorize;
use linkml_browser::validate_gallery;

use crate::server::{AppState, app};

pub fn run(dir: PathBuf, port: u16, no_open: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Refuse to serve a folder the browser could not load.
    let report = validate_gallery(&dir)?;

    let state = AppState::new(dir.clone());

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Serving browser at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Folder:  {}", dir.display());
    println!("  Records: {}", report.record_count);
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if !no_open {
        if let Err(e) = open::that(&url) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        app::run_server(state, port).await
    })?;

    Ok(())
}
