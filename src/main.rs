use clap::Parser;
use miette::{IntoDiagnostic, Result};
use receipt_points::application::processor::ReceiptProcessor;
use receipt_points::domain::ports::{IdGeneratorBox, ReceiptStoreBox};
use receipt_points::infrastructure::id_generator::TimestampIdGenerator;
use receipt_points::infrastructure::in_memory::InMemoryReceiptStore;
use receipt_points::interfaces::http;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let store: ReceiptStoreBox = Box::new(InMemoryReceiptStore::new());
    let id_generator: IdGeneratorBox = Box::new(TimestampIdGenerator::new());
    let processor = Arc::new(ReceiptProcessor::new(store, id_generator));

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .into_diagnostic()?;
    info!(%addr, "Server is running");

    axum::serve(listener, http::router(processor))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        Err(e) => {
            warn!(error = %e, "Could not listen for Ctrl-C, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
