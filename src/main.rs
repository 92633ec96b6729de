//! roster CLI Entry Point
//!
//! Single entry point, no subcommands: all navigation happens through the
//! in-process menu. The flags below only configure connectivity.
//!
//! Logs go to stderr (`RUST_LOG`); the menu and tables go to stdout.

use std::path::PathBuf;

use clap::Parser;

use roster::config::{self, Overrides};
use roster::db::Db;
use roster::menu::{self, SEPARATOR};
use roster::prompt::ConsolePrompter;
use roster::Result;

/// roster - Interactive employee database CLI
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Menu-driven management of departments, roles, and employees in MySQL")]
#[command(version)]
struct Cli {
    /// Database host
    #[arg(long, env = "ROSTER_HOST")]
    host: Option<String>,

    /// Database port
    #[arg(long, env = "ROSTER_PORT")]
    port: Option<u16>,

    /// Database user
    #[arg(long, env = "ROSTER_USER")]
    user: Option<String>,

    /// Database password
    #[arg(long, env = "ROSTER_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Database name
    #[arg(long, env = "ROSTER_DATABASE")]
    database: Option<String>,

    /// Connection pool size
    #[arg(long, env = "ROSTER_POOL_SIZE")]
    pool_size: Option<usize>,

    /// Path to a config file (default: ~/.config/roster/config.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_file_path()?,
    };
    let stored = config::load_stored(&config_path)?;

    let overrides = Overrides {
        host: cli.host,
        port: cli.port,
        user: cli.user,
        password: cli.password,
        database: cli.database,
        pool_size: cli.pool_size,
    };
    let settings = config::resolve(&overrides, &stored)?;

    let db = Db::connect(&settings)?;
    db.verify().await?;

    println!("Welcome to the Employee Management System");
    println!("{SEPARATOR}");

    let prompter = ConsolePrompter::new();
    let outcome = menu::run(&db, &prompter).await;

    db.disconnect().await?;
    outcome
}
