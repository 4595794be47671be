//! tooldocs CLI - query a catalog file at a chosen detail level.
//!
//! Loads a catalog seed file into a fresh registry, runs one request through
//! the dispatcher and prints the JSON response on stdout.

use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::ExitCode;
use tooldocs::dispatch::{error_body, route_request};
use tooldocs::{Catalog, Config};

#[derive(Debug, Parser)]
#[command(name = "tooldocs", version, about = "Query tiered tool documentation")]
struct Cli {
    /// Catalog seed file (JSON).
    #[arg(long, env = "TOOLDOCS_CATALOG")]
    catalog: PathBuf,

    /// Optional config file (JSON).
    #[arg(long, env = "TOOLDOCS_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Describe a tool.
    Describe {
        tool_id: String,
        /// summary, schema or full.
        #[arg(long, default_value = "summary")]
        level: String,
        /// Cap on full-level examples (0 = configured default).
        #[arg(long, default_value_t = 0)]
        max_examples: usize,
    },
    /// List a tool's examples.
    Examples {
        tool_id: String,
        /// Cap on returned examples (0 = configured default).
        #[arg(long, default_value_t = 0)]
        max: usize,
    },
}

impl Command {
    fn into_request(self) -> (&'static str, Value) {
        match self {
            Command::Describe {
                tool_id,
                level,
                max_examples,
            } => (
                "describe_tool",
                json!({
                    "tool_id": tool_id,
                    "detail_level": level,
                    "max_examples": max_examples,
                }),
            ),
            Command::Examples { tool_id, max } => (
                "list_tool_examples",
                json!({ "tool_id": tool_id, "max": max }),
            ),
        }
    }
}

async fn run(cli: Cli) -> tooldocs::Result<Value> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };
    config.apply_env()?;
    if cli.json_logs {
        config.observability.json_logs = true;
    }

    tooldocs::observability::init_tracing(&config.observability);

    let registry = Catalog::load(&cli.catalog)
        .await?
        .into_registry(&config.registry)?;

    let (method, body) = cli.command.into_request();
    route_request(&registry, method, body).await
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", value),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(response) => {
            print_json(&response);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(code = err.code(), error = %err, "Request failed");
            print_json(&error_body(&err));
            ExitCode::FAILURE
        }
    }
}
