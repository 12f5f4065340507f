//! `graph_gen` — extract the drivable road graph inside a bounding box from
//! a local OSM extract and write it as `{nodes, edges}`.
//!
//! Run with:
//!   cargo run -p graph_gen --release -- --pbf florida-latest.osm.pbf \
//!       --from 31.0,-88.0 --to 24.0,-77.0 -o THEGRAPH.json
//!
//! Without `--from/--to` (and without a region in `--config`) the Florida
//! box is used.  Prints the written path on success.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::info;

use rg_core::Coordinate;
use rg_pipeline::{PipelineConfig, Region};

fn cli() -> Command {
    Command::new("graph_gen")
        .about("Extract a drivable road graph for a bounding box")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML config file; flags below override it")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("First corner as LAT,LON")
                .value_name("LAT,LON")
                .allow_hyphen_values(true)
                .value_parser(clap::value_parser!(Coordinate))
                .requires("to"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Opposite corner as LAT,LON")
                .value_name("LAT,LON")
                .allow_hyphen_values(true)
                .value_parser(clap::value_parser!(Coordinate))
                .requires("from"),
        )
        .arg(
            Arg::new("pbf")
                .long("pbf")
                .help("OSM .pbf extract covering the region")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Destination name inside the output directory [default: graph.json, or graph/ for csv]")
                .value_name("NAME"),
        )
        .arg(
            Arg::new("out-dir")
                .long("out-dir")
                .help("Output directory")
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["json", "csv"]),
        )
        .arg(
            Arg::new("network")
                .long("network")
                .help("Which roads to keep")
                .value_parser(["drive", "drive_service"]),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Indent JSON output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Reject out-of-range coordinates and zero-area boxes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
}

/// Config file (or defaults) with command-line overrides applied.
fn build_config(matches: &ArgMatches) -> Result<PipelineConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => PipelineConfig::from_toml_file(path)?,
        None => PipelineConfig::default(),
    };

    if let (Some(&a), Some(&b)) = (
        matches.get_one::<Coordinate>("from"),
        matches.get_one::<Coordinate>("to"),
    ) {
        config.region = Region::Corners { a, b };
    }
    if let Some(pbf) = matches.get_one::<PathBuf>("pbf") {
        config.pbf = Some(pbf.clone());
    }
    if let Some(name) = matches.get_one::<String>("output") {
        config.destination = Some(name.clone());
    }
    if let Some(dir) = matches.get_one::<PathBuf>("out-dir") {
        config.output_dir = dir.clone();
    }
    if let Some(format) = matches.get_one::<String>("format") {
        config.format = format.parse()?;
    }
    if let Some(network) = matches.get_one::<String>("network") {
        config.network = network.parse().context("--network")?;
    }
    config.pretty |= matches.get_flag("pretty");
    config.strict |= matches.get_flag("strict");
    Ok(config)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let config = build_config(&matches)?;
    info!(
        "region {} ({} network) → {}",
        config.region.bbox(),
        config.network,
        config.output_dir.join(config.destination()).display()
    );

    let provider = config.provider()?;
    let mut sink = config.sink()?;
    let path = rg_pipeline::run(&config, &provider, &mut sink)
        .with_context(|| format!("extracting {}", config.destination()))?;

    println!("{}", path.display());
    Ok(())
}
