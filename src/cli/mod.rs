//
//  jira-fetcher
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod issue;

pub use issue::{parse_field, IssueCommand};

use clap::{Parser, Subcommand};

/// Jira Fetcher - Read Jira issues as plain-text documents
#[derive(Parser, Debug)]
#[command(
    name = "jf",
    version,
    about = "Read Jira issues as plain-text documents",
    long_about = "jf fetches issues from Jira Cloud and Server/Data Center and prints them\n\
                  as normalized documents.\n\n\
                  Configure it with JIRA_URL, JIRA_AUTH_TYPE and the matching credential\n\
                  variables, or with a [jira] table in the settings file.",
    propagate_version = true,
    after_help = "Use 'jf <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read, search and modify issues
    #[command(visible_alias = "i")]
    Issue(IssueCommand),

    /// Print version information
    Version,
}
