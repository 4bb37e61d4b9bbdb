use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// What part of the site an edit touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Css,
    Html,
    Js,
    Config,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Css => write!(f, "css"),
            ChangeKind::Html => write!(f, "html"),
            ChangeKind::Js => write!(f, "js"),
            ChangeKind::Config => write!(f, "config"),
        }
    }
}

/// One human-described edit waiting in (or committed from) the staging area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingChange {
    pub id: String,
    pub kind: ChangeKind,
    pub page: Option<String>,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub committed: bool,
}

impl StagingChange {
    pub fn new(kind: ChangeKind, description: impl Into<String>, page: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            page,
            description: description.into(),
            timestamp: Utc::now(),
            committed: false,
        }
    }
}

/// A batch commit. The message lives here, not on the changes it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub change_ids: Vec<String>,
}

impl CommitRecord {
    /// Twelve-character prefix of the commit id for display.
    pub fn short_id(&self) -> &str {
        &self.id[..self.id.len().min(12)]
    }
}
