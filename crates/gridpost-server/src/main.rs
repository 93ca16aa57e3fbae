//! The gridpost server binary.

use std::net::SocketAddr;

use clap::Parser;
use gridpost_server::api;
use log::info;
use tokio::net::TcpListener;

/// HTTP service for checking and solving 9x9 sudoku puzzles.
#[derive(Debug, Parser)]
#[command(name = "gridpost", version, about)]
struct Args {
    /// Socket address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let listener = TcpListener::bind(args.listen).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, api::router()).await
}
