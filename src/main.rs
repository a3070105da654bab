//! Refcard - bindings file inspector
//!
//! Resolves a local bindings file against the device and control catalogs
//! and prints the resulting layout, either as a human-readable listing or
//! as JSON for downstream tooling.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use refcard::catalog::{CatalogSet, ControlCatalog, DeviceCatalog};
use refcard::constants::{APP_BINARY_NAME, APP_NAME};
use refcard::display::key_label;
use refcard::models::Warning;
use refcard::resolve_document;

/// Resolve a control-bindings file into a per-device card layout.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the bindings file
    #[arg(value_name = "FILE")]
    bindings_path: PathBuf,

    /// Print the layout model as JSON instead of a listing
    #[arg(long)]
    json: bool,

    /// Load catalogs from a directory containing controls.json and
    /// devices.json instead of the embedded tables
    #[arg(long, value_name = "DIR")]
    catalog_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {:#}", APP_BINARY_NAME, err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let catalogs = match &cli.catalog_dir {
        Some(dir) => CatalogSet {
            controls: ControlCatalog::load_file(&dir.join("controls.json"))?,
            devices: DeviceCatalog::load_file(&dir.join("devices.json"))?,
        },
        None => CatalogSet::embedded()?,
    };

    let bytes = std::fs::read(&cli.bindings_path).with_context(|| {
        format!("failed to read bindings file: {}", cli.bindings_path.display())
    })?;
    let model = resolve_document(&bytes, &catalogs)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
        return Ok(());
    }

    println!("{}: preset '{}'", APP_NAME, model.preset_name);
    for layout in &model.per_device {
        println!();
        println!("{} ({})", layout.display_name, layout.device_id);
        for placement in &layout.placements {
            println!(
                "  {:<16} {:?} @ ({}, {})  {}",
                placement.slot_key,
                placement.kind,
                placement.rect.x,
                placement.rect.y,
                placement.text
            );
        }
    }
    if model.is_template_free() {
        println!();
        println!("No supported device referenced; a textual card will be used.");
    }

    if !model.unsupported.is_empty() {
        println!();
        println!("Unsupported devices:");
        for record in &model.unsupported {
            println!("  {} -> {} {}", record.control_id, record.device_id, record.key);
        }
    }
    if !model.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &model.warnings {
            println!("  {}", describe(warning));
        }
    }
    Ok(())
}

fn describe(warning: &Warning) -> String {
    match warning {
        Warning::MalformedHeader { field } => {
            format!("header field {field} missing or malformed; default used")
        }
        Warning::MissingDevice { control_id } => {
            format!("{control_id}: binding has no Device attribute")
        }
        Warning::EmptyBinding { control_id, device_id } => {
            format!("{control_id}: empty key on {device_id} (unbound)")
        }
        Warning::UnsupportedControl {
            control_id,
            device_id: Some(device_id),
            key: Some(key),
        } => format!(
            "{control_id}: {} is not on the {device_id} template",
            key_label(key)
        ),
        Warning::UnsupportedControl { control_id, .. } => {
            format!("{control_id}: unknown control, not displayed")
        }
        Warning::SlotCollision {
            device_id,
            slot_key,
            labels,
        } => format!(
            "{device_id}/{slot_key}: {} controls share one slot ({})",
            labels.len(),
            labels.join(", ")
        ),
    }
}
