//! tricast CLI - ray-triangle probe
//!
//! Evaluates scene files, single rays and ray batches against triangles.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tricast_math::Vec3;

mod commands;
mod logging;
mod scene;

use commands::{parse_vec3, CastArgs};

#[derive(Parser)]
#[command(name = "tricast")]
#[command(about = "Ray-triangle intersection probe", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one frame of a scene file (.toml or .json)
    Probe {
        /// Scene with 3 triangle corners and 2 ray markers
        scene: PathBuf,
        /// Print the indicator state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Intersect a single ray with a single triangle
    Cast {
        /// Ray origin as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        origin: Vec3,
        /// Ray direction as x,y,z (not normalized)
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        direction: Vec3,
        /// First triangle vertex as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        v0: Vec3,
        /// Second triangle vertex as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        v1: Vec3,
        /// Third triangle vertex as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        v2: Vec3,
        /// Intersection epsilon
        #[arg(long, default_value_t = 1e-6)]
        epsilon: f64,
        /// Report degenerate input as an error instead of a miss
        #[arg(long)]
        checked: bool,
        /// Print the hit as JSON
        #[arg(long)]
        json: bool,
    },
    /// Closest hit for every ray of a JSON batch file
    Batch {
        /// File with "rays" and "triangles" arrays
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let output = match cli.command {
        Commands::Probe { scene, json } => commands::probe_scene(&scene, json)?,
        Commands::Cast {
            origin,
            direction,
            v0,
            v1,
            v2,
            epsilon,
            checked,
            json,
        } => commands::cast(&CastArgs {
            origin,
            direction,
            v0,
            v1,
            v2,
            epsilon,
            checked,
            json,
        })?,
        Commands::Batch { file } => commands::batch_file(&file)?,
    };

    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cast_with_negative_components() {
        let cli = Cli::try_parse_from([
            "tricast", "-vv", "cast", "--origin", "0,0,-1", "--direction", "0,0,1", "--v0",
            "0,1,0", "--v1", "-1,-1,0", "--v2", "1,-1,0",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Cast { origin, v1, epsilon, .. } => {
                assert_eq!(origin, Vec3::new(0.0, 0.0, -1.0));
                assert_eq!(v1, Vec3::new(-1.0, -1.0, 0.0));
                assert_eq!(epsilon, 1e-6);
            }
            _ => panic!("expected cast"),
        }
    }

    #[test]
    fn test_parse_probe() {
        let cli = Cli::try_parse_from(["tricast", "probe", "scene.toml", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Probe { json: true, .. }));
    }
}
