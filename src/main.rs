//
//  jira-fetcher
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jira_fetcher::api::ApiError;
use jira_fetcher::cli::{Cli, Commands};
use jira_fetcher::config::ConfigError;
use jira_fetcher::exit_codes;
use jira_fetcher::output::OutputWriter;

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            OutputWriter::text().write_error(&format!("{e:#}"));
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("JF_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Issue(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("{} version {}", jira_fetcher::APP_NAME, jira_fetcher::VERSION);
            Ok(())
        }
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ConfigError>().is_some() {
        return exit_codes::AUTH_ERROR;
    }

    match err.downcast_ref::<ApiError>() {
        Some(ApiError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(ApiError::AuthFailed(_)) | Some(ApiError::Forbidden(_)) => exit_codes::AUTH_ERROR,
        Some(ApiError::RateLimited) => exit_codes::RATE_LIMIT,
        _ => exit_codes::ERROR,
    }
}
