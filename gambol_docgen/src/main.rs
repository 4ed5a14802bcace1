#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! CLI entry point for gambol_docgen.
//! Usage: cargo run -p gambol_docgen -- ../engine/src/scripting --out html

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gambol_docgen::{Extractor, HtmlGenerator};

#[derive(Parser)]
#[command(author, version, about = "Generates the Gambol scripting API documentation from the engine sources.")]
struct Cli {
    /// Source files or directories to scan. Defaults to the engine's
    /// scripting sources next to the installed binary.
    paths: Vec<PathBuf>,
    /// Target directory for the generated pages (wiped on every run).
    #[arg(long, value_name = "DIR", default_value = "html")]
    out: PathBuf,
    /// Page template, plain HTML with {{title}} and {{body}} placeholders.
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,
    /// Directory of images to copy into the generated graphics/ directory.
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let paths = if cli.paths.is_empty() {
        vec![default_source_dir()]
    } else {
        cli.paths
    };

    let generator = match &cli.template {
        Some(template) => HtmlGenerator::with_template_file(&cli.out, template)?,
        None => HtmlGenerator::new(&cli.out),
    };

    print!("Creating {}/... directories... ", cli.out.display());
    let _ = io::stdout().flush();
    generator.prepare_target()?;
    println!("Done.");

    if let Some(assets) = &cli.assets {
        print!("Copying graphics... ");
        let _ = io::stdout().flush();
        generator.copy_assets(assets)?;
        println!("Done.");
    }

    println!("Parsing scripting source files.");
    let mut extractor = Extractor::new();
    extractor.progress = true;
    extractor.scan_paths(&paths)?;
    println!();

    println!("=== SUMMARY ===");
    println!("Classes: {}", extractor.classes.len());
    println!("Methods: {}", extractor.methods.len());
    println!();

    generator.generate(&extractor.classes, &extractor.methods)?;
    println!("Finished.");
    Ok(())
}

/// The conventional location of the engine's scripting sources, two levels up
/// from the installed binary. Falls back to a bare relative path when the
/// executable's own location cannot be resolved.
fn default_source_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("../../src/scripting")))
        .unwrap_or_else(|| PathBuf::from("src/scripting"))
}
