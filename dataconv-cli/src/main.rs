// Command-line interface for dataconv
//
// Converts a data file between JSON, YAML and XML. Both formats are picked from the file
// suffixes (.json, .yaml/.yml, .xml); there is no way to name them explicitly.
//
// Usage:
//  dataconv <input> <output>                  - Convert input into output
//  dataconv <input> <output> --config <path>  - Same, with a dataconv.toml layered over the defaults
//  dataconv --list-formats                    - List the suffix table
//
// Failures to load the input (unknown suffix, malformed file) and an unknown output suffix are
// reported on stdout and the process still exits successfully. A failure while writing the
// output is fatal.

mod report;

use clap::{Arg, ArgAction, Command, ValueHint};
use dataconv_babel::{Converter, FormatOptions, FormatRegistry};
use dataconv_config::{DataconvConfig, Loader};
use std::path::Path;
use tracing::Level;

fn build_cli() -> Command {
    Command::new("dataconv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert data files between JSON, YAML and XML")
        .long_about(
            "dataconv converts structured data files between JSON, YAML and XML.\n\n\
            Formats are detected from the file suffix:\n  \
            - .json         JSON\n  \
            - .yaml, .yml   YAML\n  \
            - .xml          XML\n\n\
            XML keeps no type information: numbers and booleans come back as text,\n\
            and repeated sibling tags collapse to the last one.\n\n\
            Examples:\n  \
            dataconv config.json config.yaml\n  \
            dataconv data.yml data.xml --config dataconv.toml",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Input file path")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("Output file path (overwritten)")
                .required_unless_present("list-formats")
                .index(2)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a dataconv.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion steps to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List supported file suffixes")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    init_logging(&config, matches.get_flag("verbose"));

    let registry = FormatRegistry::with_options(FormatOptions::from(&config));

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let output = matches
        .get_one::<String>("output")
        .expect("output is required");

    handle_convert_command(Converter::new(registry), input, output);
}

/// Handle the conversion
fn handle_convert_command(converter: Converter, input: &str, output: &str) {
    let outcome = converter
        .convert(Path::new(input), Path::new(output))
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    for line in report::messages(&outcome) {
        println!("{line}");
    }
}

/// Handle the --list-formats flag
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Supported suffixes:\n");
    for (ext, name) in registry.list_suffixes() {
        let description = registry
            .get(&name)
            .map(|format| format.description())
            .unwrap_or_default();
        println!("  .{ext:<6} {name:<6} {description}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> DataconvConfig {
    let loader = Loader::new().with_optional_file("dataconv.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn init_logging(config: &DataconvConfig, verbose: bool) {
    let configured = config.log.level.parse::<Level>();
    let level = if verbose {
        Level::DEBUG
    } else {
        configured.as_ref().copied().unwrap_or(Level::WARN)
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();

    if configured.is_err() {
        tracing::warn!(level = %config.log.level, "unknown log level, using warn");
    }
}
