//! # Duct Sizing CLI
//!
//! Terminal front end for `duct_core`. Takes duct parameters as flags or a
//! JSON form file, prints a report and optionally the JSON result.
//!
//! ```text
//! duct_cli size --flow 1000 --shape rectangular --width 12 --height 8 --length 100
//! duct_cli size --input duct.json --json
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use duct_core::input::{DuctForm, FieldValue};
use duct_core::smacna::ComplianceStatus;
use duct_core::{calculate, CalcError, CalcResult, DuctInput, DuctResult, Settings};

#[derive(Parser)]
#[command(name = "duct_cli")]
#[command(about = "Duct sizing calculator - velocity, friction loss and SMACNA construction", long_about = None)]
struct Cli {
    /// Settings file (TOML) with default material, application and pressure class
    #[arg(long, global = true, default_value = "duct.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Size a single duct run
    Size(SizeArgs),
    /// Print the active settings as TOML
    Settings,
}

#[derive(Args)]
struct SizeArgs {
    /// JSON form file; flags below override its fields
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Airflow (CFM)
    #[arg(long)]
    flow: Option<String>,

    /// rectangular or circular
    #[arg(long)]
    shape: Option<String>,

    /// Width (in), rectangular only
    #[arg(long)]
    width: Option<String>,

    /// Height (in), rectangular only
    #[arg(long)]
    height: Option<String>,

    /// Diameter (in), circular only
    #[arg(long)]
    diameter: Option<String>,

    /// Run length (ft)
    #[arg(long)]
    length: Option<String>,

    /// galvanized, stainless or aluminum
    #[arg(long)]
    material: Option<String>,

    /// supply, return or exhaust
    #[arg(long)]
    application: Option<String>,

    /// low, medium or high
    #[arg(long)]
    pressure_class: Option<String>,

    /// Also print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = Settings::load_or_default(&cli.config).and_then(|settings| match cli.command {
        Commands::Size(args) => cmd_size(&args, &settings),
        Commands::Settings => cmd_settings(&settings),
    });

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn cmd_settings(settings: &Settings) -> CalcResult<()> {
    print!("{}", settings.to_toml_string()?);
    Ok(())
}

fn cmd_size(args: &SizeArgs, settings: &Settings) -> CalcResult<()> {
    let mut form = match &args.input {
        Some(path) => read_form(path)?,
        None => DuctForm::default(),
    };
    apply_flags(&mut form, args);

    let input = form.parse(settings)?;
    tracing::info!(shape = ?input.shape, flow_rate_cfm = input.flow_rate_cfm, "sizing duct");
    let result = calculate(&input)?;

    print_report(&input, &result);

    if args.json {
        println!();
        println!("JSON Output:");
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| CalcError::calculation_failed("serialize", e.to_string()))?;
        println!("{}", json);
    }
    Ok(())
}

fn read_form(path: &Path) -> CalcResult<DuctForm> {
    let text = fs::read_to_string(path)
        .map_err(|e| CalcError::invalid_input("input", path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&text)
        .map_err(|e| CalcError::invalid_input("input", path.display().to_string(), e.to_string()))
}

fn apply_flags(form: &mut DuctForm, args: &SizeArgs) {
    let text = |v: &Option<String>| v.as_deref().map(FieldValue::from);

    if let Some(v) = text(&args.flow) {
        form.flow_rate = Some(v);
    }
    if let Some(v) = text(&args.width) {
        form.width = Some(v);
    }
    if let Some(v) = text(&args.height) {
        form.height = Some(v);
    }
    if let Some(v) = text(&args.diameter) {
        form.diameter = Some(v);
    }
    if let Some(v) = text(&args.length) {
        form.length = Some(v);
    }
    if args.shape.is_some() {
        form.shape = args.shape.clone();
    }
    if args.material.is_some() {
        form.material = args.material.clone();
    }
    if args.application.is_some() {
        form.application = args.application.clone();
    }
    if args.pressure_class.is_some() {
        form.pressure_class = args.pressure_class.clone();
    }
}

fn print_report(input: &DuctInput, result: &DuctResult) {
    println!("═══════════════════════════════════════");
    println!("  DUCT SIZING RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Airflow:     {} CFM", input.flow_rate_cfm);
    println!("  Section:     {} ({})", duct_core::summary::shape_description(&input.shape), input.shape.kind());
    println!("  Length:      {} ft", input.length_ft);
    println!("  Material:    {}", input.material);
    println!("  Application: {}", input.application);
    println!("  Pressure:    {}", input.pressure_class);
    println!();
    println!("Geometry:");
    println!("  Area:        {:.3} ft²", result.area_ft2);
    println!("  Perimeter:   {:.2} ft", result.perimeter_ft);
    println!("  Dh:          {:.2} in", result.hydraulic_diameter_in);
    println!();
    println!("Flow:");
    println!("  Velocity:    {:.0} ft/min", result.velocity_fpm);
    println!("  Reynolds:    {:.0} ({})", result.reynolds_number, result.flow_regime);
    println!("  f:           {:.4}", result.friction_factor);
    println!("  Loss:        {:.2}\" w.g.", result.pressure_loss_in_wg);
    println!();
    println!("Construction:");
    println!("  Gauge:       {} ga", result.gauge);
    println!("  Joints:      every {} ft", result.joint_spacing_ft);
    println!("  Hangers:     every {} ft", result.hanger_spacing_ft);
    println!("  Seam:        {}", result.seam_type);
    println!();
    println!("SMACNA Checks:");
    let c = &result.compliance;
    println!("  Velocity:       {}", status_icon(c.velocity_compliant));
    println!("  Pressure loss:  {}", status_icon(c.pressure_compliant));
    println!("  Gauge:          {} (recommend {} ga)", status_icon(c.gauge_compliant), c.gauge_recommendation);
    println!("  Joint spacing:  {}", status_icon(c.joint_spacing_compliant));
    println!("  Hanger spacing: {}", status_icon(c.hanger_spacing_compliant));

    if !result.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for w in &result.warnings {
            println!("  ! {}", w);
        }
    }
    if !c.educational_notes.is_empty() {
        println!();
        println!("Notes:");
        for n in &c.educational_notes {
            println!("  - {}", n);
        }
    }

    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {}", verdict(result.status()));
    println!("  {}", result.snap_summary);
    println!("═══════════════════════════════════════");
}

fn verdict(status: ComplianceStatus) -> &'static str {
    match status {
        ComplianceStatus::Compliant => "COMPLIANT",
        ComplianceStatus::Warning => "COMPLIANT WITH WARNINGS",
        ComplianceStatus::NonCompliant => "NON-COMPLIANT",
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
