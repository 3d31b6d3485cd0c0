//
//  jira-fetcher
//  cli/issue.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Issue commands
//!
//! Every subcommand builds a [`JiraFetcher`] from the environment (with the
//! settings file as fallback), runs one fetcher operation and prints the
//! resulting documents.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use serde_json::{Map, Value};

use crate::fetcher::{JiraFetcher, NewIssue, DEFAULT_COMMENT_LIMIT, DEFAULT_MAX_RESULTS};
use crate::output::{OutputFormat, OutputWriter};
use crate::util::truncate;

use super::GlobalOptions;

/// Read, search and modify issues
#[derive(Args, Debug)]
pub struct IssueCommand {
    #[command(subcommand)]
    pub command: IssueSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum IssueSubcommand {
    /// View an issue with its comments
    View(ViewArgs),

    /// Search issues with JQL
    #[command(visible_alias = "find")]
    Search(SearchArgs),

    /// List a project's issues, newest first
    #[command(visible_alias = "ls")]
    Project(ProjectArgs),

    /// Create a new issue
    Create(CreateArgs),

    /// Update fields of an issue
    #[command(visible_alias = "edit")]
    Update(UpdateArgs),

    /// Delete an issue
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Issue key, e.g. PROJ-123
    pub key: String,

    /// Maximum number of comments to include (0 for none)
    #[arg(long, short = 'c', default_value_t = DEFAULT_COMMENT_LIMIT)]
    pub comments: u32,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// JQL query, e.g. "project = PROJ AND status = Open"
    pub jql: String,

    /// Index of the first result
    #[arg(long, default_value_t = 0)]
    pub start: u32,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value_t = DEFAULT_MAX_RESULTS)]
    pub limit: u32,

    /// Expand directive passed to Jira, e.g. changelog
    #[arg(long)]
    pub expand: Option<String>,
}

#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Project key, e.g. PROJ
    pub key: String,

    /// Index of the first result
    #[arg(long, default_value_t = 0)]
    pub start: u32,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value_t = DEFAULT_MAX_RESULTS)]
    pub limit: u32,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Project key
    #[arg(long, short = 'p')]
    pub project: String,

    /// Issue summary
    #[arg(long, short = 's')]
    pub summary: String,

    /// Issue type, e.g. Task, Bug, Story
    #[arg(long = "type", short = 't')]
    pub issue_type: String,

    /// Issue description
    #[arg(long, short = 'd', conflicts_with = "description_file")]
    pub description: Option<String>,

    /// Read description from file
    #[arg(long, short = 'F')]
    pub description_file: Option<PathBuf>,

    /// Additional field as NAME=JSON (repeatable)
    #[arg(long = "field", short = 'f', value_name = "NAME=JSON", value_parser = parse_field)]
    pub fields: Vec<(String, Value)>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Issue key
    pub key: String,

    /// Field to set as NAME=JSON (repeatable)
    #[arg(
        long = "field",
        short = 'f',
        value_name = "NAME=JSON",
        value_parser = parse_field,
        required = true
    )]
    pub fields: Vec<(String, Value)>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Issue key
    pub key: String,
}

impl IssueCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let fetcher = JiraFetcher::load()?;
        let writer = OutputWriter::new(self.get_format(global));

        match &self.command {
            IssueSubcommand::View(args) => self.view(&fetcher, &writer, args).await,
            IssueSubcommand::Search(args) => self.search(&fetcher, &writer, args).await,
            IssueSubcommand::Project(args) => self.project(&fetcher, &writer, args).await,
            IssueSubcommand::Create(args) => self.create(&fetcher, &writer, args).await,
            IssueSubcommand::Update(args) => self.update(&fetcher, &writer, args).await,
            IssueSubcommand::Delete(args) => self.delete(&fetcher, &writer, args, global).await,
        }
    }

    fn get_format(&self, global: &GlobalOptions) -> OutputFormat {
        if global.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    async fn view(
        &self,
        fetcher: &JiraFetcher,
        writer: &OutputWriter,
        args: &ViewArgs,
    ) -> Result<()> {
        let doc = fetcher.get_issue(&args.key, args.comments).await?;
        writer.write_document(&doc)
    }

    async fn search(
        &self,
        fetcher: &JiraFetcher,
        writer: &OutputWriter,
        args: &SearchArgs,
    ) -> Result<()> {
        let docs = fetcher
            .search_issues(&args.jql, args.start, args.limit, args.expand.as_deref())
            .await?;
        writer.write_documents(&docs)
    }

    async fn project(
        &self,
        fetcher: &JiraFetcher,
        writer: &OutputWriter,
        args: &ProjectArgs,
    ) -> Result<()> {
        let docs = fetcher
            .get_project_issues(&args.key, args.start, args.limit)
            .await?;
        writer.write_documents(&docs)
    }

    async fn create(
        &self,
        fetcher: &JiraFetcher,
        writer: &OutputWriter,
        args: &CreateArgs,
    ) -> Result<()> {
        let description = match &args.description_file {
            Some(path) => Some(
                fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
            ),
            None => args.description.clone(),
        };

        let mut new_issue = NewIssue::new(&args.project, &args.summary, &args.issue_type);
        if let Some(description) = description {
            new_issue = new_issue.description(description);
        }
        for (name, value) in &args.fields {
            new_issue = new_issue.field(name, value.clone());
        }

        let doc = fetcher.create_issue(&new_issue).await?;
        writer.write_success(&format!(
            "Created issue {} ({})",
            doc.meta_str("key").unwrap_or_default(),
            truncate(&args.summary, 60)
        ));
        writer.write_document(&doc)
    }

    async fn update(
        &self,
        fetcher: &JiraFetcher,
        writer: &OutputWriter,
        args: &UpdateArgs,
    ) -> Result<()> {
        let fields: Map<String, Value> = args.fields.iter().cloned().collect();
        let doc = fetcher.update_issue(&args.key, &fields).await?;
        writer.write_success(&format!("Updated issue {}", args.key));
        writer.write_document(&doc)
    }

    async fn delete(
        &self,
        fetcher: &JiraFetcher,
        writer: &OutputWriter,
        args: &DeleteArgs,
        global: &GlobalOptions,
    ) -> Result<()> {
        let deleted = fetcher.delete_issue(&args.key).await?;

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "deleted": deleted,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            writer.write_success(&format!("Deleted issue {}", args.key));
        }

        Ok(())
    }
}

/// Parses a `NAME=JSON` field assignment.
///
/// The value is parsed as JSON when possible, so `labels=["a","b"]` and
/// `priority={"name":"High"}` keep their structure. Anything else is sent as
/// a plain string: `summary=New title`.
pub fn parse_field(raw: &str) -> Result<(String, Value)> {
    let Some((name, value)) = raw.split_once('=') else {
        bail!("Invalid field '{}': expected NAME=JSON", raw);
    };

    let name = name.trim();
    if name.is_empty() {
        bail!("Invalid field '{}': field name is empty", raw);
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_parse_field_json_values() {
        assert_eq!(
            parse_field(r#"labels=["a","b"]"#).unwrap(),
            ("labels".to_string(), json!(["a", "b"]))
        );
        assert_eq!(
            parse_field(r#"priority={"name":"High"}"#).unwrap(),
            ("priority".to_string(), json!({"name": "High"}))
        );
        assert_eq!(
            parse_field("customfield_10010=5").unwrap(),
            ("customfield_10010".to_string(), json!(5))
        );
    }

    #[test]
    fn test_parse_field_plain_strings() {
        assert_eq!(
            parse_field("summary=New title").unwrap(),
            ("summary".to_string(), json!("New title"))
        );
        assert_eq!(
            parse_field("jql=a=b").unwrap(),
            ("jql".to_string(), json!("a=b"))
        );
    }

    #[test]
    fn test_parse_field_rejects_malformed() {
        assert!(parse_field("summary").is_err());
        assert!(parse_field("=value").is_err());
    }

    #[test]
    fn test_view_defaults_to_ten_comments() {
        let cli = Cli::try_parse_from(["jf", "issue", "view", "PROJ-1"]).unwrap();
        let Commands::Issue(IssueCommand {
            command: IssueSubcommand::View(args),
        }) = cli.command
        else {
            panic!("expected issue view");
        };
        assert_eq!(args.key, "PROJ-1");
        assert_eq!(args.comments, DEFAULT_COMMENT_LIMIT);
    }

    #[test]
    fn test_create_collects_fields() {
        let cli = Cli::try_parse_from([
            "jf",
            "issue",
            "create",
            "--project",
            "PROJ",
            "--summary",
            "Test Issue",
            "--type",
            "Task",
            "--field",
            r#"labels=["x"]"#,
            "-f",
            "assignee={\"name\":\"jdoe\"}",
        ])
        .unwrap();
        let Commands::Issue(IssueCommand {
            command: IssueSubcommand::Create(args),
        }) = cli.command
        else {
            panic!("expected issue create");
        };
        assert_eq!(args.issue_type, "Task");
        assert_eq!(args.fields.len(), 2);
        assert_eq!(args.fields[1], ("assignee".to_string(), json!({"name": "jdoe"})));
    }

    #[test]
    fn test_update_requires_a_field() {
        assert!(Cli::try_parse_from(["jf", "issue", "update", "PROJ-1"]).is_err());
    }
}
