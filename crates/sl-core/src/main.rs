//! sl-core: inspect vision-sensor telemetry from recorded table snapshots.

use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use sl_common::{Result, SCHEMA_VERSION};
use sl_config::{config_schema, resolve_config, MountGeometry};
use sl_core::exit_codes::ExitCode;
use sl_core::logging::{init_logging, LogFormat};
use sl_core::{Limelight, TableSnapshot, TargetReading};
use sl_store::MemoryRegistry;
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[command(name = "sl-core", version, about = "Typed access to vision-sensor telemetry")]
struct Cli {
    /// Log line format (logs go to stderr).
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bind to a recorded table snapshot and print every typed reading.
    Read(ReadArgs),
    /// Resolve and validate configuration.
    Check(CheckArgs),
    /// Print the JSON schema of the config file.
    Schema,
}

#[derive(Args, Debug)]
struct ReadArgs {
    /// Snapshot file to replay.
    #[arg(long)]
    snapshot: PathBuf,

    /// Config file (otherwise SWOLIGHT_CONFIG, then the XDG config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Camera lens height; together with the other two, enables distance.
    #[arg(long, requires_all = ["camera_angle", "target_height"])]
    camera_height: Option<f64>,

    /// Camera tilt from horizontal, degrees.
    #[arg(long, requires_all = ["camera_height", "target_height"])]
    camera_angle: Option<f64>,

    /// Target height.
    #[arg(long, requires_all = ["camera_height", "camera_angle"])]
    target_height: Option<f64>,
}

impl ReadArgs {
    fn geometry(&self) -> Option<MountGeometry> {
        Some(MountGeometry::new(
            self.camera_height?,
            self.camera_angle?,
            self.target_height?,
        ))
    }
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Config file (otherwise SWOLIGHT_CONFIG, then the XDG config dir).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
struct ReadOutput {
    schema_version: &'static str,
    generated_at: String,
    table: String,
    reading: TargetReading,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.verbose);

    let code = match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            error!(code = err.code(), "{err}");
            eprintln!("sl-core: {err}");
            ExitCode::from_error(&err)
        }
    };
    std::process::exit(code.as_i32());
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Read(args) => cmd_read(&args),
        Command::Check(args) => cmd_check(&args),
        Command::Schema => {
            print_json(&config_schema()?)?;
            Ok(ExitCode::Clean)
        }
    }
}

fn cmd_read(args: &ReadArgs) -> Result<ExitCode> {
    let resolved = resolve_config(args.config.as_deref())?;
    let snapshot = TableSnapshot::load(&args.snapshot)?;

    let mut sensor = resolved.sensor;
    if sensor.name != snapshot.table {
        debug!(
            configured = %sensor.name,
            recorded = %snapshot.table,
            "binding to the recorded table name"
        );
        sensor.name = snapshot.table.clone();
    }

    let registry = MemoryRegistry::new();
    snapshot.install(&registry);
    let limelight = Limelight::new(&registry, sensor)?;

    let geometry = args.geometry().or(resolved.geometry);
    let output = ReadOutput {
        schema_version: SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        table: limelight.table_name().to_string(),
        reading: limelight.reading(),
        distance: geometry.map(|g| limelight.distance_with(&g)),
    };
    print_json(&output)?;
    Ok(ExitCode::Clean)
}

fn cmd_check(args: &CheckArgs) -> Result<ExitCode> {
    let resolved = resolve_config(args.config.as_deref())?;
    let validation = resolved.sensor.validate();
    let status = if validation.is_ok() { "ok" } else { "invalid" };

    let report = json!({
        "schema_version": SCHEMA_VERSION,
        "status": status,
        "source": &resolved.source,
        "using_defaults": resolved.using_defaults(),
        "sensor": &resolved.sensor,
        "geometry": &resolved.geometry,
        "error": validation.as_ref().err().map(|e| e.to_string()),
    });
    print_json(&report)?;

    Ok(match validation {
        Ok(()) => ExitCode::Clean,
        Err(err) => ExitCode::from_error(&err),
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
