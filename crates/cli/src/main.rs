//! Command-line interface for generating workout missions
//!
//! Usage:
//!   mission [OPTIONS] build [--gear <name>]... [--calisthenics] [--format plain|markup]
//!   mission [OPTIONS] gear [--format plain|markup]
//!
//! Options (accepted before or after the subcommand):
//!   --seed <n>        seed for reproducible missions
//!   --dataset <path>  JSON exercise dataset instead of the built-in catalog
//!   --config <path>   settings file (defaults to $MISSION_CONFIG)
//!   -v...             increase log verbosity

#![warn(clippy::pedantic)]

mod logger;
mod settings;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use log::{debug, info};
use mission_domain::{
    Format, Gear, GearSet, MissionOptions, MissionService, NameError, Service, render,
    render_probe,
};
use mission_storage::{json, memory::Catalog};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "mission")]
#[command(about = "Generate randomized workout missions for the gear at hand")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Settings file (defaults to $MISSION_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON exercise dataset to use instead of the built-in catalog
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Seed for reproducible missions
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a mission
    Build {
        /// Available gear, can be repeated (bodyweight is always available)
        #[arg(short, long, value_parser = parse_gear)]
        gear: Vec<Gear>,

        /// Use the calisthenics template only
        #[arg(short, long)]
        calisthenics: bool,

        /// Output format
        #[arg(short, long, value_parser = parse_format)]
        format: Option<Format>,
    },
    /// List the gear of the dataset and whether it completes a standard mission on its own
    Gear {
        /// Output format
        #[arg(short, long, value_parser = parse_format)]
        format: Option<Format>,
    },
}

fn parse_gear(value: &str) -> Result<Gear, NameError> {
    Gear::new(value)
}

fn parse_format(value: &str) -> Result<Format, mission_domain::FormatError> {
    value.parse()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    logger::init(logger::level(settings.log_level, cli.verbose))
        .context("failed to initialize logger")?;

    print!("{}", run(&cli, &settings)?);
    Ok(())
}

fn run(cli: &Cli, settings: &Settings) -> anyhow::Result<String> {
    let catalog = match cli.dataset.as_ref().or(settings.dataset.as_ref()) {
        Some(path) => json::load(path)
            .with_context(|| format!("failed to load dataset {}", path.display()))?,
        None => Catalog::builtin(),
    };
    debug!("using dataset with {} exercises", catalog.len());

    let service = Service::new(catalog);
    let mut rng = ChaCha8Rng::seed_from_u64(cli.seed.unwrap_or_else(rand::random));

    match &cli.command {
        Command::Build {
            gear,
            calisthenics,
            format,
        } => {
            let format = resolve_format(*format, settings)?;
            let mut gear_set = settings
                .gear
                .iter()
                .map(|g| Gear::new(g))
                .collect::<Result<GearSet, _>>()
                .context("invalid gear in settings")?;
            gear_set.extend(gear.iter().cloned());

            let mission = service.build_mission(
                &MissionOptions {
                    gear: gear_set,
                    calisthenics: *calisthenics,
                },
                &mut rng,
            )?;
            info!(
                "built {} mission with {} exercises",
                mission.resolved_mode().tag(),
                mission.exercises().len()
            );
            Ok(render(&mission, format))
        }
        Command::Gear { format } => {
            let format = resolve_format(*format, settings)?;
            let probes = service.probe_gear_catalog(&mut rng)?;
            Ok(render_probe(&probes, format))
        }
    }
}

fn resolve_format(format: Option<Format>, settings: &Settings) -> anyhow::Result<Format> {
    match format {
        Some(format) => Ok(format),
        None => Ok(settings.format.parse::<Format>()?),
    }
}

#[cfg(test)]
mod tests {
    use mission_domain::{FormatError, MissionError, Mode};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mission").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_build_bodyweight() {
        let output = run(&cli(&["build", "--seed", "1"]), &Settings::default()).unwrap();

        assert_eq!(output.lines().count(), Mode::Calisthenics.template().lines.len());
        assert!(output.starts_with("1. 5 x max: "));
    }

    #[test]
    fn test_build_with_gear() {
        let output = run(
            &cli(&["build", "--seed", "1", "--gear", "Kettlebell"]),
            &Settings::default(),
        )
        .unwrap();

        assert_eq!(output.lines().count(), 4);
        assert!(output.starts_with("1. 5 x 5: "));
    }

    #[test]
    fn test_build_with_gear_from_settings() {
        let settings = Settings {
            gear: vec!["kettlebell".to_string()],
            format: "markup".to_string(),
            ..Settings::default()
        };
        let output = run(&cli(&["build", "--seed", "3"]), &settings).unwrap();

        assert!(output.starts_with("<ol>\n  <li>5 x 5: "));
        assert_eq!(output.matches("<li>").count(), 4);
    }

    #[test]
    fn test_build_calisthenics() {
        let output = run(
            &cli(&["build", "-c", "--seed", "1", "--gear", "kettlebell"]),
            &Settings::default(),
        )
        .unwrap();

        assert_eq!(output.lines().count(), 6);
    }

    #[test]
    fn test_build_is_reproducible() {
        let args = ["build", "--seed", "42", "--gear", "pull up bar", "--gear", "barbell"];
        assert_eq!(
            run(&cli(&args), &Settings::default()).unwrap(),
            run(&cli(&args), &Settings::default()).unwrap()
        );
    }

    #[rstest]
    #[case(&["build", "--format", "html"])]
    #[case(&["gear", "-f", "yaml"])]
    #[case(&["build", "--gear", " "])]
    #[case(&["probe"])]
    fn test_usage_error(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(std::iter::once("mission").chain(args.iter().copied())).is_err());
    }

    #[test]
    fn test_invalid_format_in_settings() {
        let settings = Settings {
            format: "html".to_string(),
            ..Settings::default()
        };
        let err = run(&cli(&["build"]), &settings).unwrap_err();

        assert_eq!(
            err.downcast_ref::<FormatError>(),
            Some(&FormatError::InvalidFormat("html".to_string()))
        );
    }

    #[test]
    fn test_unbuildable() {
        let path = std::env::temp_dir().join(format!("mission-cli-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{"name": "Push Up", "focus": "push-up"}]"#).unwrap();
        let result = run(
            &cli(&["build", "--dataset", path.to_str().unwrap()]),
            &Settings::default(),
        );
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            result.unwrap_err().downcast_ref::<MissionError>(),
            Some(MissionError::Unbuildable {
                requested: Mode::Standard
            })
        ));
    }

    #[test]
    fn test_gear() {
        let output = run(&cli(&["gear", "--seed", "0"]), &Settings::default()).unwrap();

        assert!(output.contains(". kettlebell (can complete standard mission)\n"));
        assert!(output.contains(". ab wheel\n"));
        assert!(!output.contains("none"));
    }
}
