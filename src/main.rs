use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::borrow::Cow;
use std::io::{self, IsTerminal};

use jsonpick::config::Config;
use jsonpick::document::node::Value;
use jsonpick::document::parser::to_json_string;
use jsonpick::file::loader::{load_json_file, load_json_from_stdin};
use jsonpick::jsonpath::CompiledPath;

/// Result type forced by `--as`.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Coerce {
    #[value(name = "string")]
    Text,
    #[value(name = "number")]
    Number,
    #[value(name = "bool")]
    Boolean,
}

/// jsonpick - pick one value out of a JSON document with a JSONPath-like expression
#[derive(Parser)]
#[command(name = "jsonpick")]
#[command(version)]
#[command(about = "Pick one value out of a JSON document", long_about = None)]
struct Cli {
    /// Path expression, e.g. '$.users[0].name' or '$.items.(length)'
    path: String,

    /// JSON file to read (omit or use '-' to read stdin; .gz is decompressed)
    file: Option<String>,

    /// Print string results without JSON quotes
    #[arg(short, long, overrides_with = "no_raw")]
    raw: bool,

    /// Print string results as JSON even if the config enables raw strings
    #[arg(long, overrides_with = "raw")]
    no_raw: bool,

    /// Print JSON on a single line
    #[arg(short, long, overrides_with = "pretty")]
    compact: bool,

    /// Pretty-print JSON even if the config disables it
    #[arg(long, overrides_with = "compact")]
    pretty: bool,

    /// Never fail on a bad query; print the zero value of this type instead
    #[arg(short = 'a', long = "as", value_enum)]
    coerce: Option<Coerce>,

    /// Print the compiled steps and exit without reading a document
    #[arg(long)]
    explain: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if let Some(err) = config_error {
        log::warn!("ignoring config file: {:#}", err);
    }

    let path = CompiledPath::compile(&cli.path)
        .with_context(|| format!("Invalid path '{}'", cli.path))?;

    if cli.explain {
        println!("$");
        for step in path.steps() {
            println!("{}", step);
        }
        return Ok(());
    }

    let doc = match cli.file.as_deref() {
        Some(file) if file != "-" => load_json_file(file)?,
        _ => {
            if io::stdin().is_terminal() {
                bail!("No input: pass a FILE or pipe JSON into stdin");
            }
            load_json_from_stdin()?
        }
    };

    let result = match cli.coerce {
        Some(Coerce::Text) => Cow::Owned(Value::String(path.query_as_string_or_default(&doc))),
        Some(Coerce::Number) => Cow::Owned(Value::Number(path.query_as_number_or_default(&doc))),
        Some(Coerce::Boolean) => Cow::Owned(Value::Bool(path.query_as_bool_or_default(&doc))),
        None => path
            .query(&doc)
            .with_context(|| format!("Query '{}' failed", cli.path))?,
    };

    let raw = flag_override(cli.raw, cli.no_raw).unwrap_or(config.raw_strings);
    let pretty = flag_override(cli.pretty, cli.compact).unwrap_or(config.pretty);
    println!("{}", render(&result, raw, pretty)?);

    Ok(())
}

fn render(value: &Value, raw: bool, pretty: bool) -> Result<String> {
    match value {
        Value::String(s) if raw => Ok(s.clone()),
        _ => to_json_string(value, pretty),
    }
}

/// `Some(true)` or `Some(false)` when either flag was given, `None` to defer
/// to the config.
fn flag_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
