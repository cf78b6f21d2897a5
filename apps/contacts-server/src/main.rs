mod config;
mod logging;
mod server;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use contacts::ContactsModule;

use crate::config::AppConfig;

/// Contacts Server - phone contacts REST API
#[derive(Parser)]
#[command(name = "contacts-server")]
#[command(about = "Contacts Server - phone contacts REST API")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config
        && !Path::new(path).is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // defaults -> YAML -> env (CONTACTS__*) -> CLI
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port)?;

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    logging::init_logging(&config.logging, cli.verbose);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(&config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config.server.socket_addr()?;
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn run_server(config: &AppConfig) -> Result<()> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Contacts Server starting");

    let addr = config.server.socket_addr()?;
    let module = ContactsModule::new(&config.contacts);
    let router = server::build_router(&module, &config.server);

    server::serve(router, addr).await?;
    tracing::info!("Contacts Server stopped");
    Ok(())
}
