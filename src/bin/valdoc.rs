//! Command-line interface for valdoc
//! This binary enriches attribute descriptions with the values of their one-of validators.
//!
//! Usage:
//!   valdoc enrich [--description `<text>`] `<fragment>`...   - Enrich a description given inline
//!   valdoc file `<path>` [--format `<format>`]              - Enrich a JSON/YAML request document
//!   valdoc values `<fragment>`                            - Print the values found in a fragment

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::Level;
use valdoc::valdoc::{ConfigError, Description, EnrichConfig, EnrichRequest, Enricher};

fn main() {
    let matches = Command::new("valdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Append one-of validator values to schema attribute descriptions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file (.json, .yaml or .yml)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Log skipped fragments and arguments to stderr (repeat for more)"),
        )
        .subcommand(
            Command::new("enrich")
                .about("Enrich a description with the given validator fragments")
                .arg(
                    Arg::new("description")
                        .long("description")
                        .short('d')
                        .help("Initial description text"),
                )
                .arg(
                    Arg::new("fragments")
                        .help("Validator source text, one argument per validator")
                        .num_args(1..)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("file")
                .about("Enrich the description in a JSON or YAML request document")
                .arg(
                    Arg::new("path")
                        .help("Path to the request document")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("values")
                .about("Print the values extracted from one validator fragment")
                .arg(
                    Arg::new("fragment")
                        .help("Validator source text")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let enricher = load_enricher(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match matches.subcommand() {
        Some(("enrich", enrich_matches)) => handle_enrich_command(&enricher, enrich_matches),
        Some(("file", file_matches)) => handle_file_command(&enricher, file_matches),
        Some(("values", values_matches)) => handle_values_command(&enricher, values_matches),
        _ => unreachable!(),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_enricher(matches: &ArgMatches) -> Result<Enricher, ConfigError> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => EnrichConfig::load(path)?,
        None => EnrichConfig::default(),
    };
    let enricher = Enricher::new(config);
    let config = enricher.config();
    tracing::debug!(package = %config.package, function = %config.function, "using configuration");
    Ok(enricher)
}

/// Handle the enrich command
fn handle_enrich_command(enricher: &Enricher, matches: &ArgMatches) {
    let mut description = Description::new(matches.get_one::<String>("description").cloned());
    let fragments = matches
        .get_many::<String>("fragments")
        .into_iter()
        .flatten();
    description.append_validators_with(enricher, fragments);
    println!("{}", description);
}

/// Handle the file command
fn handle_file_command(enricher: &Enricher, matches: &ArgMatches) {
    let Some(path) = matches.get_one::<String>("path") else {
        unreachable!("path is required");
    };
    let request = EnrichRequest::load(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let description = request.enrich(enricher);

    match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => {
            let output = serde_json::json!({ "description": description });
            println!("{}", output);
        }
        _ => println!("{}", description),
    }
}

/// Handle the values command
fn handle_values_command(enricher: &Enricher, matches: &ArgMatches) {
    let Some(fragment) = matches.get_one::<String>("fragment") else {
        unreachable!("fragment is required");
    };
    let sets = enricher.value_sets(fragment);
    let blocks: Vec<String> = sets.iter().map(|set| set.values().join("\n")).collect();
    if !blocks.is_empty() {
        println!("{}", blocks.join("\n\n"));
    }
}
