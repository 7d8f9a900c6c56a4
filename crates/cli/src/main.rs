mod report;

use anyhow::{Context, Result, bail};
use argstore::ArgStore;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt};

use crate::report::{Lookup, TypedValue, render_text};

#[derive(Parser)]
#[command(name = "argstore")]
#[command(version, about = "Show how an argument vector resolves", long_about = None)]
struct Cli {
    /// Output format
    #[arg(
        long,
        global = true,
        env = "ARGSTORE_FORMAT",
        value_enum,
        default_value_t = Format::Text
    )]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every resolved flag and positional argument
    Dump(DumpArgs),

    /// Look up one key with a typed accessor
    Get(GetArgs),

    /// Print every value given for a key
    All(AllArgs),
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    String,
    Int,
    Bool,
}

#[derive(Parser)]
struct DumpArgs {
    /// Arguments to resolve (after `--`)
    #[arg(last = true, value_name = "ARGS")]
    argv: Vec<String>,
}

#[derive(Parser)]
struct GetArgs {
    /// Key to look up, with its leading dash (e.g. `-verbose`)
    #[arg(value_name = "KEY", allow_hyphen_values = true)]
    key: String,

    /// How to read the value
    #[arg(long = "as", value_enum, default_value_t = Kind::String)]
    kind: Kind,

    /// Value returned when the key is absent
    #[arg(long, allow_hyphen_values = true)]
    default: Option<String>,

    /// Arguments to resolve (after `--`)
    #[arg(last = true, value_name = "ARGS")]
    argv: Vec<String>,
}

#[derive(Parser)]
struct AllArgs {
    /// Key to look up, with its leading dash
    #[arg(value_name = "KEY", allow_hyphen_values = true)]
    key: String,

    /// Arguments to resolve (after `--`)
    #[arg(last = true, value_name = "ARGS")]
    argv: Vec<String>,
}

fn main() -> Result<()> {
    // Loaded before tracing so the file can set RUST_LOG; reported after.
    let dotenv = dotenvy::dotenv();
    init_tracing();
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => tracing::warn!("ignoring .env: {err}"),
    }
    let cli = Cli::parse();

    match cli.command {
        Commands::Dump(args) => dump(args, cli.format),
        Commands::Get(args) => get(args, cli.format),
        Commands::All(args) => all(args, cli.format),
    }
}

fn dump(args: DumpArgs, format: Format) -> Result<()> {
    tracing::debug!("executing dump command");

    let store = ArgStore::parse(&args.argv);
    match format {
        Format::Text => print!("{}", render_text(&store)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&store)?),
    }
    Ok(())
}

fn get(args: GetArgs, format: Format) -> Result<()> {
    tracing::debug!(key = %args.key, "executing get command");

    let store = ArgStore::parse(&args.argv);
    let key = args.key.as_str();
    let default = args.default.as_deref();

    let value = match args.kind {
        Kind::String => TypedValue::String(store.get_arg(key, default.unwrap_or(""))),
        Kind::Int => {
            let default = match default {
                Some(d) => d
                    .parse::<i64>()
                    .with_context(|| format!("--default {d:?} is not an integer"))?,
                None => 0,
            };
            TypedValue::Int(store.get_int_arg(key, default))
        }
        Kind::Bool => match default {
            Some(d) => TypedValue::Bool(store.get_bool_arg_or(key, parse_bool(d)?)),
            None => TypedValue::Bool(store.get_bool_arg(key)),
        },
    };

    let lookup = Lookup {
        key: args.key.clone(),
        present: store.is_set(key),
        value,
    };
    match format {
        Format::Text => println!("{}", lookup.value),
        Format::Json => println!("{}", serde_json::to_string_pretty(&lookup)?),
    }
    Ok(())
}

fn all(args: AllArgs, format: Format) -> Result<()> {
    tracing::debug!(key = %args.key, "executing all command");

    let store = ArgStore::parse(&args.argv);
    let values = store.get_all(&args.key);
    if values.is_empty() {
        tracing::debug!(key = %args.key, "key not given");
    }

    match format {
        Format::Text => {
            for value in values {
                println!("{value}");
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(values)?),
    }
    Ok(())
}

fn parse_bool(s: &str) -> Result<bool> {
    match s {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => bail!("--default {s:?} is not a boolean (use true/false or 1/0)"),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
