//! ezlog main entry point

use clap::Parser;
use ezlog_api::start_server;
use ezlog_config::{default_config_path, Config};
use ezlog_core::Ledger;
use ezlog_parser::DefaultExpenseParser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;

#[derive(Parser, Debug)]
#[command(name = "ezlog")]
#[command(version)]
#[command(about = "Frictionless free-text expense logging over HTTP", long_about = None)]
struct Args {
    /// Configuration file path (optional; defaults are used when missing)
    #[arg(short, long, default_value_os_t = default_config_path())]
    config: PathBuf,

    /// Listening port, overrides PORT and the config file
    #[arg(short, long)]
    port: Option<u16>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config_exists = args.config.exists();
    let mut config = Config::load_or_default(&args.config)?;
    config.apply_env()?;
    if let Some(port) = args.port {
        config.apply_port_override(Some(port.to_string().as_str()))?;
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if config_exists {
        log::info!("Config loaded from {}", args.config.display());
    } else {
        log::warn!("Config file {} not found, using defaults", args.config.display());
    }

    let ledger = Arc::new(RwLock::new(Ledger::new(Arc::new(DefaultExpenseParser))));
    log::warn!("Expenses are kept in memory only and are lost on restart");

    let rt = Runtime::new()?;
    rt.block_on(start_server(config, ledger))
}
