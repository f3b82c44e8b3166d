//! Grocery MCP Server - Main Entry Point
//!
//! This is the main entry point for the grocery MCP server application.
//! The actual implementation is in the `grocery_mcp` library.

use anyhow::Result;
use clap::Parser;
use grocery_mcp::{GroceryServerHandler, SeedSource};
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Grocery MCP Server - shared grocery lists, receipts and friend debts via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with the initial lists (default: built-in sample lists)
    #[arg(long)]
    seed: Option<PathBuf>,
}

/// Log to stderr; stdout carries the MCP protocol
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let seed_source = match &args.seed {
        Some(path) => SeedSource::file(path),
        None => SeedSource::builtin(),
    };
    let handler = GroceryServerHandler::new(&seed_source)?;
    info!("grocery MCP server listening on stdio");
    serve_stdio(handler).await?;
    Ok(())
}
