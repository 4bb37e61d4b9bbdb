use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefKind {
    Branch,
    Tag,
    Commit,
}

/// Branch, tag or commit shown in the editor's source panel.
/// Display data only: the editor selects references, it never creates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitReference {
    pub name: String,
    pub kind: RefKind,
    pub sha: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub author: String,
}

impl GitReference {
    pub fn branch(name: &str, sha: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: RefKind::Branch,
            sha: sha.to_string(),
            message: String::new(),
            author: String::new(),
        }
    }

    /// First seven characters of the sha, as shown in ref pickers.
    pub fn short_sha(&self) -> &str {
        let end = self
            .sha
            .char_indices()
            .nth(7)
            .map(|(i, _)| i)
            .unwrap_or(self.sha.len());
        &self.sha[..end]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitRepository {
    pub url: String,
    pub provider: String,
    pub default_branch: String,
    #[serde(default)]
    pub connected: bool,
}
