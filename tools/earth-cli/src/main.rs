//! Command-line front end for the earth utility crates.
//!
//! Parses URL hashes into configurations and evaluates color scales, printing
//! JSON on stdout. Logs go to stderr.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use color_scales::{extended_sinebow_color, sinebow_color, wind_intensity_color_scale};
use earth_common::time::{date_to_config, to_local_iso, to_utc_iso};
use earth_common::DeviceClass;
use hash_config::HashParser;
use serde_json::{json, Value};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use config::EarthConfig;

#[derive(Parser, Debug)]
#[command(name = "earth-cli")]
#[command(about = "Parse earth URL hashes and evaluate color scales")]
struct Args {
    /// Configuration file path (YAML)
    #[arg(short, long, env = "EARTH_CONFIG")]
    config: Option<PathBuf>,

    /// User agent used to pick the topology resource
    #[arg(long, env = "EARTH_USER_AGENT", default_value = "")]
    user_agent: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a URL hash into a configuration
    Parse {
        /// The hash, with or without the leading '#'
        hash: String,
    },

    /// Print the configuration used when there is no hash
    Defaults,

    /// Print the wind intensity palette
    WindScale {
        /// Channel increment between palette entries
        #[arg(long, default_value_t = 10)]
        step: u32,

        /// Magnitude mapped to the brightest entry
        #[arg(long, default_value_t = 100.0)]
        max: f64,

        /// Magnitude to look up in the palette
        #[arg(long)]
        magnitude: Option<f64>,
    },

    /// Sample the sinebow spectrum across [0, 1]
    Sinebow {
        /// Use the spectrum that fades to white
        #[arg(long)]
        extended: bool,

        /// Number of intervals; samples + 1 colors are printed
        #[arg(long, default_value_t = 10)]
        samples: usize,

        #[arg(long, default_value_t = 255.0)]
        alpha: f64,
    },

    /// Print the hash date and hour for a moment in time
    Date {
        /// RFC 3339 timestamp; defaults to now
        #[arg(long)]
        at: Option<String>,
    },

    /// Evaluate a named scale from the configuration file
    Scale {
        name: String,
        value: f64,

        #[arg(long, default_value_t = 255.0)]
        alpha: f64,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_tracing(&args.log_level, args.log_json)?;

    let config = EarthConfig::load(args.config.as_deref())?;
    let device = DeviceClass::from_user_agent(&args.user_agent);
    info!(
        device = %device,
        projections = config.projections.len(),
        overlays = config.overlays.len(),
        scales = config.scales.scales.len(),
        "Loaded configuration"
    );

    let output = run(&args.command, &config, device)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

fn run(command: &Command, config: &EarthConfig, device: DeviceClass) -> Result<Value> {
    let parser = HashParser::new(
        config.projections.iter().cloned(),
        config.overlays.iter().cloned(),
        device,
    );

    match command {
        Command::Parse { hash } => {
            let hash = hash.strip_prefix('#').unwrap_or(hash);
            match parser.parse(hash) {
                Some(configuration) => Ok(serde_json::to_value(configuration)?),
                None => {
                    warn!(hash, "Hash does not describe a configuration");
                    Ok(Value::Null)
                }
            }
        }
        Command::Defaults => Ok(serde_json::to_value(parser.build_configuration())?),
        Command::WindScale {
            step,
            max,
            magnitude,
        } => {
            let scale = wind_intensity_color_scale(*step, *max)?;
            let mut output = json!({ "styles": scale.styles() });
            if let Some(m) = magnitude {
                output["index"] = json!(scale.index_for(*m));
                output["style"] = json!(scale.style_for(*m));
            }
            Ok(output)
        }
        Command::Sinebow {
            extended,
            samples,
            alpha,
        } => {
            let n = (*samples).max(1);
            let colors: Vec<Value> = (0..=n)
                .map(|i| {
                    let point = i as f64 / n as f64;
                    let color = if *extended {
                        extended_sinebow_color(point, *alpha)
                    } else {
                        sinebow_color(point, *alpha)
                    };
                    json!({ "point": point, "color": color, "style": color.to_style() })
                })
                .collect();
            Ok(Value::Array(colors))
        }
        Command::Date { at } => {
            let date = match at {
                Some(at) => DateTime::parse_from_rfc3339(at)
                    .with_context(|| format!("Invalid timestamp '{}'", at))?
                    .with_timezone(&Utc),
                None => Utc::now(),
            };
            Ok(json!({
                "config": date_to_config(&date),
                "utc": to_utc_iso(&date),
                "local": to_local_iso(&date),
            }))
        }
        Command::Scale { name, value, alpha } => {
            let scale = config.scales.build(name)?;
            let color = scale.color(*value, *alpha);
            Ok(json!({ "value": value, "color": color, "style": color.to_style() }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(argv: &[&str]) -> Result<Value> {
        let args = Args::try_parse_from(argv)?;
        run(&args.command, &EarthConfig::default(), DeviceClass::Desktop)
    }

    #[test]
    fn test_parse_command_strips_fragment_marker() {
        let output = run_args(&["earth-cli", "parse", "#current/wind/surface/level/grid=on"]).unwrap();
        assert_eq!(output["date"], "current");
        assert_eq!(output["showGridPoints"], true);
        assert_eq!(output["topology"], "/data/earth-topo.json?v2");
    }

    #[test]
    fn test_parse_command_unmatched_is_null() {
        let output = run_args(&["earth-cli", "parse", "not a hash"]).unwrap();
        assert_eq!(output, Value::Null);
    }

    #[test]
    fn test_defaults_command() {
        let output = run_args(&["earth-cli", "defaults"]).unwrap();
        assert_eq!(output["orientation"], "0,0,0");
        assert!(output.get("date").is_none());
    }

    #[test]
    fn test_wind_scale_command() {
        let output =
            run_args(&["earth-cli", "wind-scale", "--step", "10", "--max", "100", "--magnitude", "100"])
                .unwrap();
        assert_eq!(output["styles"].as_array().unwrap().len(), 18);
        assert_eq!(output["index"], 17);
        assert_eq!(output["style"], "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn test_wind_scale_command_rejects_zero_step() {
        assert!(run_args(&["earth-cli", "wind-scale", "--step", "0"]).is_err());
    }

    #[test]
    fn test_sinebow_command() {
        let output = run_args(&["earth-cli", "sinebow", "--extended", "--samples", "4"]).unwrap();
        let colors = output.as_array().unwrap();
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[4]["style"], "rgba(255, 255, 255, 255)");
    }

    #[test]
    fn test_date_command() {
        let output = run_args(&["earth-cli", "date", "--at", "2013-11-14T09:30:00Z"]).unwrap();
        assert_eq!(output["config"]["date"], "2013/11/14");
        assert_eq!(output["config"]["hour"], "0900");
        assert_eq!(output["utc"], "2013-11-14 09:00");
    }

    #[test]
    fn test_date_command_rejects_bad_timestamp() {
        assert!(run_args(&["earth-cli", "date", "--at", "yesterday"]).is_err());
    }

    #[test]
    fn test_scale_command_unknown_name() {
        assert!(run_args(&["earth-cli", "scale", "temp", "280"]).is_err());
    }

    #[test]
    fn test_global_flags_parse() {
        let args = Args::try_parse_from([
            "earth-cli",
            "--user-agent",
            "iPhone",
            "--log-level",
            "debug",
            "defaults",
        ])
        .unwrap();
        assert_eq!(DeviceClass::from_user_agent(&args.user_agent), DeviceClass::Mobile);
        assert_eq!(args.log_level, "debug");
    }
}
