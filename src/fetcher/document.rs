//
//  jira-fetcher
//  fetcher/document.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The normalized output unit and the create-request builder.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// A normalized issue: readable text plus structured metadata.
///
/// Metadata keys: `key`, `title`, `type`, `status`, `priority`,
/// `created_date`, `link`. Fields missing on the remote side are `null`.
///
/// # Example
///
/// ```rust
/// use jira_fetcher::fetcher::Document;
/// use serde_json::{Map, Value};
///
/// let mut metadata = Map::new();
/// metadata.insert("key".to_string(), Value::from("PROJ-1"));
/// let doc = Document::new("Issue: PROJ-1", metadata);
/// assert_eq!(doc.meta_str("key"), Some("PROJ-1"));
/// assert_eq!(doc.meta_str("status"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Human-readable rendering of the issue.
    pub content: String,

    /// Structured fields describing the issue.
    pub metadata: Map<String, Value>,
}

impl Document {
    pub fn new(content: impl Into<String>, metadata: Map<String, Value>) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// Returns a metadata value as a string slice, if it is a string.
    pub fn meta_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(Value::as_str)
    }
}

/// Parameters for creating an issue.
///
/// The fields mapping sent to Jira is built from exactly these values:
/// `project.key`, `summary`, `issuetype.name`, `description` when non-empty,
/// then every extra field. Extra fields replace same-named keys.
///
/// # Example
///
/// ```rust
/// use jira_fetcher::fetcher::NewIssue;
/// use serde_json::json;
///
/// let fields = NewIssue::new("PROJ", "Broken login", "Bug")
///     .description("Steps to reproduce...")
///     .field("labels", json!(["auth"]))
///     .to_fields();
///
/// assert_eq!(fields["project"], json!({"key": "PROJ"}));
/// assert_eq!(fields["issuetype"], json!({"name": "Bug"}));
/// assert_eq!(fields["labels"], json!(["auth"]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NewIssue {
    pub project_key: String,
    pub summary: String,
    pub issue_type: String,
    pub description: Option<String>,
    pub extra_fields: Map<String, Value>,
}

impl NewIssue {
    pub fn new(
        project_key: impl Into<String>,
        summary: impl Into<String>,
        issue_type: impl Into<String>,
    ) -> Self {
        Self {
            project_key: project_key.into(),
            summary: summary.into(),
            issue_type: issue_type.into(),
            ..Default::default()
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a pass-through field, e.g. `labels`, `assignee` or a custom field.
    pub fn field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extra_fields.insert(name.into(), value);
        self
    }

    /// Builds the Jira `fields` mapping.
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("project".to_string(), json!({ "key": self.project_key }));
        fields.insert("summary".to_string(), Value::from(self.summary.as_str()));
        fields.insert("issuetype".to_string(), json!({ "name": self.issue_type }));
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            fields.insert("description".to_string(), Value::from(description));
        }
        for (name, value) in &self.extra_fields {
            fields.insert(name.clone(), value.clone());
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_is_omitted() {
        let fields = NewIssue::new("PROJ", "Test Issue", "Task")
            .description("")
            .to_fields();
        assert!(!fields.contains_key("description"));
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_extra_fields_override() {
        let fields = NewIssue::new("PROJ", "Test Issue", "Task")
            .field("summary", json!("Overridden"))
            .field("priority", json!({"name": "High"}))
            .to_fields();
        assert_eq!(fields["summary"], json!("Overridden"));
        assert_eq!(fields["priority"], json!({"name": "High"}));
    }
}
