//! `pricelang` -- command line front end for formula documents.
//!
//! Parses arguments with clap, sets up logging and dispatches to one handler
//! per subcommand. Handlers return `anyhow::Result`; errors are printed and
//! turn into exit code 1.

mod cli;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, EvalArgs, PriceArgs};
use pricelang::ast::Program;
use pricelang::interpreter::{Evaluator, Overrides};
use pricelang::lexer::tokenize;
use pricelang::parser::parse_source;
use pricelang::pricing::{PriceRequest, SchemaRegistry, price};
use pricelang::validate::validate;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "pricelang=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Tokens(args) => run_tokens(&args.file, cli.json),
        Commands::Check(args) => run_check(&args.file, cli.json),
        Commands::Fmt(args) => run_fmt(&args.file),
        Commands::Eval(args) => run_eval(args, cli.json),
        Commands::Price(args) => run_price(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_program(path: &Path) -> Result<Program> {
    let source = read_source(path)?;
    parse_source(&source).with_context(|| format!("failed to parse {}", path.display()))
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_tokens(path: &Path, json: bool) -> Result<ExitCode> {
    let source = read_source(path)?;
    let tokens = tokenize(&source)?;

    if json {
        print_json(&tokens)?;
    } else {
        for token in &tokens {
            println!("{} {} {}", token.location, token.kind, token.text);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_check(path: &Path, json: bool) -> Result<ExitCode> {
    let program = load_program(path)?;
    let diagnostics = validate(&program);

    if json {
        print_json(&diagnostics)?;
    } else {
        for diagnostic in &diagnostics {
            println!("{diagnostic}");
        }
    }

    if diagnostics.iter().any(|d| d.is_error()) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_fmt(path: &Path) -> Result<ExitCode> {
    let program = load_program(path)?;
    print!("{program}");
    Ok(ExitCode::SUCCESS)
}

fn run_eval(args: &EvalArgs, json: bool) -> Result<ExitCode> {
    let program = load_program(&args.file)?;

    let mut overrides = match &args.values {
        Some(path) => serde_json::from_str::<Overrides>(&read_source(path)?)
            .with_context(|| format!("invalid values file {}", path.display()))?,
        None => Overrides::new(),
    };
    overrides.extend(args.set.iter().cloned());
    debug!(seeded = overrides.len(), "seeded evaluation session");

    let evaluator = Evaluator::new(&program);
    let mut results = BTreeMap::new();
    for term in &args.terms {
        let value = evaluator.resolve(term, &mut overrides)?;
        if !json {
            println!("{term} = {value}");
        }
        results.insert(term.as_str(), value);
    }

    if json {
        print_json(&results)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn run_price(args: &PriceArgs) -> Result<ExitCode> {
    let mut registry = SchemaRegistry::new();
    for (schema, path) in &args.schemas {
        registry.register_file(schema.as_str(), path)?;
    }

    let request: PriceRequest = serde_json::from_str(&read_source(&args.request)?)
        .with_context(|| format!("invalid pricing request {}", args.request.display()))?;

    let sheet = price(&registry, &request.priceable, &request.terms, &request.values)?;
    print_json(&sheet)?;
    Ok(ExitCode::SUCCESS)
}
