#![deny(unsafe_code)]
//! CLI binary for the driftfield particle system.
//!
//! Subcommands:
//! - `render` — run a simulation N steps, write a PNG of the trails
//! - `list` — print available field modes

mod error;

use clap::{Parser, Subcommand};
use driftfield_core::{FieldMode, SimConfig};
use driftfield_sim::scene::Scene;
use driftfield_sim::Simulation;
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "driftfield", about = "Flow-field particle trail renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a simulation for N steps and write a PNG snapshot of the trails.
    Render {
        /// Field mode (flow, galaxy, vortex, chaos).
        #[arg(short, long, default_value = "flow")]
        mode: String,

        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: usize,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: usize,

        /// Number of simulation steps.
        #[arg(short, long, default_value_t = 600)]
        steps: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Simulation config as a JSON object (missing keys use defaults).
        #[arg(short, long, default_value = "{}")]
        config: String,

        /// Output file path.
        #[arg(short, long, default_value = "trails.png")]
        output: PathBuf,
    },
    /// List available field modes.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let modes = FieldMode::list_names();
            if cli.json {
                let info = serde_json::json!({ "modes": modes });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Modes:");
                for name in modes {
                    println!("  {name}");
                }
            }
        }
        Command::Render {
            mode,
            width,
            height,
            steps,
            seed,
            config,
            output,
        } => {
            let config: SimConfig = serde_json::from_str(&config)
                .map_err(|e| CliError::Input(format!("invalid --config JSON: {e}")))?;
            let mode = FieldMode::from_name(&mode)?;

            let mut scene = Scene::new(mode, width, height, seed);
            scene.config = config;
            scene.steps = steps;

            let mut sim = Simulation::new(&scene)?;
            sim.run(steps);

            driftfield_sim::snapshot::write_png(&sim, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "scene": scene,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} ({width}x{height}, {steps} steps, seed {seed}) -> {}",
                    mode.name(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
