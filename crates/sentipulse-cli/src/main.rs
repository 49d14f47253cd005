use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use sentipulse_app::config::ConfigService;
use sentipulse_client::ApiClient;
use tracing_subscriber::EnvFilter;

mod render;
mod repl;

#[derive(Parser)]
#[command(name = "sentipulse")]
#[command(about = "Terminal client for the Sentipulse sentiment-analysis service", long_about = None)]
struct Cli {
    /// API base URL (overrides the config file)
    #[arg(long, env = "SENTIPULSE_API_BASE")]
    api_base: Option<String>,

    /// Open the admin surface instead of the user dashboard
    #[arg(long)]
    admin: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ConfigService::new().get();
    let base = config.api.resolve_base(cli.api_base.as_deref());
    tracing::debug!("Using API base {base}");
    let api = Arc::new(ApiClient::new(&base)?);

    if cli.admin {
        repl::run_admin(api).await
    } else {
        repl::run_user(api).await
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
