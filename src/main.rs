use clap::Parser;
use tokio::net::TcpListener;

use cir_management_ui::config::Settings;
use cir_management_ui::http::HttpServer;
use cir_management_ui::{observability, startup};

/// Management UI for the collection instrument migration workflow.
#[derive(Parser)]
#[command(name = "cir-management-ui")]
#[command(about = "CIR Management UI web server", long_about = None)]
struct Cli {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind.
    #[arg(long, env = "PORT", default_value_t = 5100)]
    port: u16,

    /// Widen the log filter to debug output.
    #[arg(long, env = "DEBUG", default_value_t = false)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let settings = Settings::from_env();
    observability::logging::init(&settings, cli.debug);

    tracing::info!(
        environment = %settings.environment,
        log_format = %settings.log_format,
        cdn_url = %settings.cdn_url,
        "cir-management-ui starting"
    );

    let state = startup::init(settings)?;

    let listener = TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(state);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
