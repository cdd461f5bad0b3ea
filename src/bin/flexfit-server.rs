// ABOUTME: FlexFit recommendation server binary entry point
// ABOUTME: Loads configuration, initializes logging, and runs the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FlexFit

//! # FlexFit Recommendation Server Binary
//!
//! Starts the HTTP server for AI-assisted workout recommendations backed by
//! the exercise catalog.

use anyhow::Result;
use clap::Parser;
use flexfit_server::{config::ServerConfig, logging, server::ServerResources};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "flexfit-server")]
#[command(about = "FlexFit recommendation server - AI-assisted workout recommendations")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Container environments may pass arguments clap does not recognize
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args { http_port: None }
        }
    };

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::new(config));
    flexfit_server::server::run(resources).await
}
