//! Command-line interface for the design-system asset generators
//! This binary runs the one-shot build-time transforms: icon SVG parsing
//! and design-token generation.
//!
//! Usage:
//!   nds icons [assets-dir] [--out-dir <dir>]   - Parse icon SVGs, write icons.json + modules
//!   nds tokens [output-dir]                    - Write the token CSS/JS/TS files
//!   nds --config <file> <subcommand>           - Layer a configuration file over the defaults

use std::path::PathBuf;
use std::process;

use clap::{Arg, ArgMatches, Command};
use nds_config::{Loader, NdsConfig};
use nds_icons::IconOutput;

fn main() {
    let matches = Command::new("nds")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build-time asset generators for the design system")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("icons")
                .about("Parse icon SVGs and write icons.json plus the generated modules")
                .arg(
                    Arg::new("assets")
                        .help("Directory containing the icon .svg files")
                        .index(1),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .help("Directory for the generated files (defaults to the assets directory)"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Generate the design-token CSS variables and source constants")
                .arg(
                    Arg::new("out-dir")
                        .help("Output directory for the token files")
                        .index(1),
                ),
        )
        .get_matches();

    let config = load_config(matches.get_one::<String>("config"));

    match matches.subcommand() {
        Some(("icons", sub_matches)) => handle_icons_command(&config, sub_matches),
        Some(("tokens", sub_matches)) => handle_tokens_command(&config, sub_matches),
        _ => unreachable!("subcommand_required guarantees a subcommand"),
    }
}

fn load_config(path: Option<&String>) -> NdsConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    })
}

/// Handle the icons command
fn handle_icons_command(config: &NdsConfig, matches: &ArgMatches) {
    let assets_dir = matches
        .get_one::<String>("assets")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.icons.assets_dir));
    let out_dir = matches
        .get_one::<String>("out-dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| assets_dir.clone());

    let output = IconOutput {
        json: out_dir.join(&config.icons.json_file),
        types: out_dir.join(&config.icons.types_file),
        module: out_dir.join(&config.icons.module_file),
    };

    let count = nds_icons::generate_icon_assets(&assets_dir, &output, &config.icons.package)
        .unwrap_or_else(|e| {
            eprintln!("Icon generation error: {}", e);
            process::exit(1);
        });

    println!("Generated assets for {} icons", count);
}

/// Handle the tokens command
fn handle_tokens_command(config: &NdsConfig, matches: &ArgMatches) {
    let out_dir = matches
        .get_one::<String>("out-dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.tokens.output_dir));

    let groups =
        nds_tokens::generate_tokens(&config.tokens.base_units, &out_dir, &config.tokens.files)
            .unwrap_or_else(|e| {
                eprintln!("Token generation error: {}", e);
                process::exit(1);
            });

    println!("Generated tokens for {}", groups.join(", "));
}
