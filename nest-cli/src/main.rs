//! Nest CLI - Command-line tool for ordered nested containers
//!
//! This binary provides command-line interfaces for:
//! - copy: deep copy a JSON document, optionally renumbering integer keys per level
//! - get: look up a top-level key with a default fallback
//! - search: collect containers holding a key/value pair, recursively or one level deep
//! - generate: emit a random nested document for test fixtures

mod config;

use clap::{Parser, Subcommand};
use config::{CliError, Config};
use nest_core::json::{from_json, parse_str, to_string};
use nest_core::{
    copy, generate, get_or, search_flat, search_recursive, Container, GeneratorConfig, Key,
    Limits, NestError, Value,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nest")]
#[command(about = "Ordered nested container tool")]
#[command(version)]
struct Cli {
    /// TOML config file with defaults
    #[arg(long, global = true, env = "NEST_CONFIG")]
    config: Option<PathBuf>,
    /// Maximum nesting depth accepted from input documents
    #[arg(long, global = true)]
    max_depth: Option<usize>,
    /// Log debug details to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deep copy a JSON document
    ///
    /// Examples:
    ///   nest copy filters.json --reorder
    ///   cat filters.json | nest copy - -o copied.json
    Copy {
        /// Input file, or "-" / nothing for stdin
        input: Option<PathBuf>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Renumber integer keys 0, 1, 2, ... at every level
        #[arg(long, conflicts_with = "no_reorder")]
        reorder: bool,
        /// Keep integer keys even if the config enables reordering
        #[arg(long)]
        no_reorder: bool,
        /// Emit compact JSON
        #[arg(long)]
        compact: bool,
    },
    /// Look up a top-level key
    ///
    /// Examples:
    ///   nest get doc.json --key name
    ///   nest get doc.json --key 3 --default '"missing"'
    Get {
        /// Input file, or "-" / nothing for stdin
        input: Option<PathBuf>,
        /// Key to look up; canonical integers address integer keys
        #[arg(long)]
        key: String,
        /// JSON value returned when the key is absent (default: null)
        #[arg(long)]
        default: Option<String>,
        /// Emit compact JSON
        #[arg(long)]
        compact: bool,
    },
    /// Collect containers holding KEY with exactly VALUE
    ///
    /// Examples:
    ///   nest search filters.json --key operator --value '">"'
    ///   nest search filters.json --key val --value 58 --flat
    Search {
        /// Input file, or "-" / nothing for stdin
        input: Option<PathBuf>,
        /// Key to match
        #[arg(long)]
        key: String,
        /// JSON value to match strictly
        #[arg(long)]
        value: String,
        /// Only inspect the direct children of the top level
        #[arg(long)]
        flat: bool,
        /// Emit compact JSON
        #[arg(long)]
        compact: bool,
    },
    /// Generate a random nested document
    ///
    /// Examples:
    ///   nest generate --depth 3 --max-len 4 --seed 7
    Generate {
        /// Levels of sub-containers below the top level
        #[arg(long)]
        depth: Option<usize>,
        /// Insertion attempts at the top level
        #[arg(long)]
        max_len: Option<usize>,
        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit compact JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    debug!(?config, "loaded configuration");
    let limits = config.limits(cli.max_depth)?;

    match cli.command {
        Commands::Copy {
            input,
            output,
            reorder,
            no_reorder,
            compact,
        } => {
            let reorder = if reorder {
                true
            } else if no_reorder {
                false
            } else {
                config.reorder
            };
            handle_copy(input.as_deref(), output.as_deref(), reorder, !compact, &limits)?;
        }
        Commands::Get {
            input,
            key,
            default,
            compact,
        } => {
            handle_get(input.as_deref(), &key, default.as_deref(), !compact, &limits)?;
        }
        Commands::Search {
            input,
            key,
            value,
            flat,
            compact,
        } => {
            handle_search(input.as_deref(), &key, &value, flat, !compact, &limits)?;
        }
        Commands::Generate {
            depth,
            max_len,
            seed,
            output,
            compact,
        } => {
            let generator = GeneratorConfig::new(
                depth.unwrap_or(config.generate.depth),
                max_len.unwrap_or(config.generate.max_len),
            );
            let seed = seed.or(config.generate.seed);
            handle_generate(generator, seed, output.as_deref(), !compact, &limits)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("nest=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nest=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_copy(
    input: Option<&Path>,
    output: Option<&Path>,
    reorder: bool,
    pretty: bool,
    limits: &Limits,
) -> Result<(), CliError> {
    let source = read_document(input, limits)?;
    let start = Instant::now();
    let copied = copy(&source, reorder)?;
    info!(
        entries = copied.len(),
        depth = copied.depth(),
        reorder,
        elapsed = ?start.elapsed(),
        "copied document"
    );
    write_document(output, &Value::Container(copied), pretty)
}

fn handle_get(
    input: Option<&Path>,
    key: &str,
    default: Option<&str>,
    pretty: bool,
    limits: &Limits,
) -> Result<(), CliError> {
    let document = read_document(input, limits)?;
    let container = top_level_container(&document)?;
    let default = match default {
        Some(text) => parse_json_arg("default", text)?,
        None => Value::NULL,
    };

    let key = Key::parse(key);
    let found = get_or(container, &key, &default);
    debug!(%key, present = container.contains_key(&key), "looked up key");
    write_document(None, found, pretty)
}

fn handle_search(
    input: Option<&Path>,
    key: &str,
    value: &str,
    flat: bool,
    pretty: bool,
    limits: &Limits,
) -> Result<(), CliError> {
    let document = read_document(input, limits)?;
    let target = parse_json_arg("value", value)?;
    let key = Key::parse(key);

    let matches = if flat {
        search_flat(top_level_container(&document)?, &key, &target)
    } else {
        search_recursive(&document, &key, &target)
    };
    info!(%key, flat, matches = matches.len(), "search finished");

    // Matches are listed under 0..n so they render as a JSON array
    let results: Container = matches
        .into_iter()
        .enumerate()
        .map(|(i, found)| (Key::Int(i as i64), Value::Container(found.clone())))
        .collect();
    write_document(None, &Value::Container(results), pretty)
}

fn handle_generate(
    generator: GeneratorConfig,
    seed: Option<u64>,
    output: Option<&Path>,
    pretty: bool,
    limits: &Limits,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let generated = generate(&mut rng, &generator, limits)?;
    info!(
        seed,
        depth = generator.depth,
        max_len = generator.max_len,
        entries = generated.len(),
        "generated document"
    );
    write_document(output, &Value::Container(generated), pretty)
}

fn top_level_container(document: &Value) -> Result<&Container, NestError> {
    document.as_container().ok_or_else(|| {
        NestError::InvalidInput(format!(
            "expected a container at the top level, found {}",
            document.kind()
        ))
    })
}

fn parse_json_arg(flag: &'static str, text: &str) -> Result<Value, CliError> {
    let json: serde_json::Value =
        serde_json::from_str(text).map_err(|source| CliError::InvalidJsonArg { flag, source })?;
    Ok(from_json(&json))
}

fn read_document(input: Option<&Path>, limits: &Limits) -> Result<Value, CliError> {
    let mut text = String::new();
    match input {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading input file");
            File::open(path)
                .and_then(|mut file| file.read_to_string(&mut text))
                .map_err(NestError::from)?;
        }
        _ => {
            debug!("reading input from stdin");
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(NestError::from)?;
        }
    }
    Ok(parse_str(&text, limits)?)
}

fn write_document(output: Option<&Path>, value: &Value, pretty: bool) -> Result<(), CliError> {
    let text = to_string(value, pretty)?;
    let result = match output {
        Some(path) => {
            debug!(path = %path.display(), bytes = text.len(), "writing output file");
            File::create(path).and_then(|file| {
                let mut writer = BufWriter::new(file);
                writeln!(writer, "{}", text)?;
                writer.flush()
            })
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", text).and_then(|_| handle.flush())
        }
    };
    result.map_err(|err| CliError::Nest(NestError::from(err)))
}
