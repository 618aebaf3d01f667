mod error_formatter;
mod formatter;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use formatter::Formatter;
use microlisp::serializers::from_json;
use microlisp::{tokenize, Engine, Environment, ResourceLimits, Value};
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "microlisp")]
#[command(about = "A tiny S-expression language for embedded rules.")]
#[command(
    long_about = "microlisp evaluates one S-expression against an environment of named values.\nThe CLI lets you inspect how a program is tokenized and parsed, and evaluate it\nwith the standard and fuzzy logic libraries."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the program text comes from
#[derive(Args)]
struct ProgramSource {
    /// Program text, e.g. "(and (env a) (not (env b)))"
    #[arg(value_name = "PROGRAM", required_unless_present = "file")]
    program: Option<String>,
    /// Read the program from a file instead
    #[arg(short = 'f', long = "file", conflicts_with = "program")]
    file: Option<PathBuf>,
}

impl ProgramSource {
    fn read(&self) -> Result<(String, String)> {
        match (&self.program, &self.file) {
            (_, Some(path)) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read program from {}", path.display()))?;
                Ok((path.display().to_string(), text))
            }
            (Some(program), None) => Ok(("<program>".to_string(), program.clone())),
            (None, None) => Err(anyhow::anyhow!("No program given")),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of a program, one per line
    Tokens {
        #[command(flatten)]
        source: ProgramSource,
    },
    /// Parse a program and print its AST
    ///
    /// The AST is printed back as an S-expression, or as JSON with --json.
    Parse {
        #[command(flatten)]
        source: ProgramSource,
        /// Print the AST as JSON
        #[arg(long)]
        json: bool,
        /// Maximum parenthesis nesting depth
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,
    },
    /// Evaluate a program and print the result
    ///
    /// The environment is loaded from a JSON object (--env) and then
    /// overridden with --var assignments. Values given with --var are read
    /// the same way atoms are: true/false, integers, floats, else strings.
    /// An error result is printed to stderr and exits with status 1.
    Eval {
        #[command(flatten)]
        source: ProgramSource,
        /// JSON file holding the environment object
        ///
        /// Nested objects become fuzzy sets: {"temp": {"hot": 0.7, "cold": 0.3}}
        #[arg(short = 'e', long = "env", value_name = "FILE")]
        env: Option<PathBuf>,
        /// Environment entry (format: name=value)
        ///
        /// Examples: door_open=true, level=0.4, count=3
        #[arg(long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Maximum parenthesis nesting depth
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("microlisp=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Tokens { source } => tokens_command(source),
        Commands::Parse {
            source,
            json,
            max_depth,
        } => parse_command(source, *json, *max_depth),
        Commands::Eval {
            source,
            env,
            vars,
            json,
            max_depth,
        } => eval_command(source, env.as_ref(), vars, *json, *max_depth),
    };

    if let Err(e) = result {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn tokens_command(source: &ProgramSource) -> Result<()> {
    let (_, program) = source.read()?;
    let formatter = Formatter::default();
    print!("{}", formatter.format_tokens(&tokenize(&program)));
    Ok(())
}

fn parse_command(source: &ProgramSource, json: bool, max_depth: Option<usize>) -> Result<()> {
    let (source_id, program) = source.read()?;
    let engine = Engine::new().with_limits(limits_for(max_depth));
    let ast = engine
        .parse(&program)
        .map_err(|e| anyhow::anyhow!(error_formatter::format_error(&e, &source_id, &program)))?;

    let formatter = Formatter::default();
    println!("{}", formatter.format_value(&ast, json)?);
    Ok(())
}

fn eval_command(
    source: &ProgramSource,
    env_file: Option<&PathBuf>,
    vars: &[String],
    json: bool,
    max_depth: Option<usize>,
) -> Result<()> {
    let (source_id, program) = source.read()?;

    let engine = Engine::new().with_limits(limits_for(max_depth));

    let env = load_environment(env_file, vars)?;
    debug!(entries = env.len(), "environment loaded");

    let result = engine
        .evaluate(&program, &env)
        .map_err(|e| anyhow::anyhow!(error_formatter::format_error(&e, &source_id, &program)))?;

    let formatter = Formatter::default();
    if let Value::Error(message) = &result {
        eprintln!("{}", formatter.format_eval_error(message));
        std::process::exit(1);
    }
    println!("{}", formatter.format_value(&result, json)?);
    Ok(())
}

/// Default limits with an optional nesting depth override
fn limits_for(max_depth: Option<usize>) -> ResourceLimits {
    let mut limits = ResourceLimits::default();
    if let Some(depth) = max_depth {
        limits.max_expression_depth = depth;
    }
    limits
}

/// Build the environment from an optional JSON file plus name=value overrides
fn load_environment(env_file: Option<&PathBuf>, vars: &[String]) -> Result<Environment> {
    let mut env = match env_file {
        Some(path) => {
            let bytes = fs::read(path)
                .with_context(|| format!("Failed to read environment from {}", path.display()))?;
            from_json(&bytes)
                .with_context(|| format!("Invalid environment file {}", path.display()))?
        }
        None => Environment::new(),
    };

    for var in vars {
        let (name, value) = parse_var(var)?;
        env.insert(name, value);
    }

    Ok(env)
}

/// Parse "name=value"; the value is read like a program atom
fn parse_var(input: &str) -> Result<(String, Value)> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Invalid variable '{}': expected NAME=VALUE", input))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow::anyhow!("Invalid variable '{}': empty name", input));
    }
    Ok((name.to_string(), Value::from_atom(value.trim(), true)))
}
