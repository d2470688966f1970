use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};

use pricelang::interpreter::RValue;

/// Tokenize, check, format and evaluate pricing formula documents
#[derive(Debug, Parser)]
#[command(name = "pricelang", version, about)]
pub struct Cli {
    /// Emit debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the token stream of a document
    Tokens(FileArgs),
    /// Validate a document and print its diagnostics
    Check(FileArgs),
    /// Pretty print a document
    Fmt(FileArgs),
    /// Evaluate terms of a document
    Eval(EvalArgs),
    /// Price a batch of items against registered schemas
    Price(PriceArgs),
}

#[derive(Debug, Args)]
pub struct FileArgs {
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct EvalArgs {
    pub file: PathBuf,

    /// Terms to evaluate, in order
    #[arg(required = true)]
    pub terms: Vec<String>,

    /// Seed a value, e.g. `--set base_price=12.5`
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, RValue)>,

    /// JSON object of values to seed
    #[arg(long)]
    pub values: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PriceArgs {
    /// Schema document, e.g. `--schema chair=chair.price`
    #[arg(long = "schema", value_name = "NAME=PATH", value_parser = parse_schema, required = true)]
    pub schemas: Vec<(String, PathBuf)>,

    /// JSON pricing request with `items`, `terms` and `values`
    #[arg(long)]
    pub request: PathBuf,
}

fn split_assignment(raw: &str) -> Result<(&str, &str), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value.trim())),
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

fn parse_assignment(raw: &str) -> Result<(String, RValue), String> {
    let (name, value) = split_assignment(raw)?;
    let Ok(value) = RValue::from_str(value);
    Ok((name.to_string(), value))
}

fn parse_schema(raw: &str) -> Result<(String, PathBuf), String> {
    let (name, path) = split_assignment(raw)?;
    Ok((name.to_string(), PathBuf::from(path)))
}
