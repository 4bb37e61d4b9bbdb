use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::app::domain::change::{ChangeKind, CommitRecord, StagingChange};

/// Append-only list of described edits with a batch commit step.
///
/// Entries are never edited except for the `committed` flag, which flips
/// false -> true for every pending entry on commit. Only pending entries
/// can be discarded.
#[derive(Debug, Default)]
pub struct StagingLog {
    changes: Vec<StagingChange>,
    commits: Vec<CommitRecord>,
}

impl StagingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pending change and return its id.
    pub fn record(&mut self, kind: ChangeKind, description: &str, page: Option<&str>) -> String {
        let change = StagingChange::new(kind, description, page.map(str::to_string));
        let id = change.id.clone();
        tracing::debug!(%kind, page = page.unwrap_or("-"), "staged: {}", description);
        self.changes.push(change);
        id
    }

    /// Mark every pending change committed. Returns `None` when nothing is pending.
    pub fn commit(&mut self, message: &str) -> Option<CommitRecord> {
        let change_ids: Vec<String> = self
            .changes
            .iter()
            .filter(|c| !c.committed)
            .map(|c| c.id.clone())
            .collect();
        if change_ids.is_empty() {
            tracing::debug!("commit skipped: nothing staged");
            return None;
        }

        for change in self.changes.iter_mut().filter(|c| !c.committed) {
            change.committed = true;
        }

        let parent = self.commits.last().map(|c| c.id.as_str());
        let record = CommitRecord {
            id: commit_id(parent, message, &change_ids),
            message: message.to_string(),
            timestamp: Utc::now(),
            change_ids,
        };
        tracing::info!(
            commit = record.short_id(),
            changes = record.change_ids.len(),
            "committed: {}",
            message
        );
        self.commits.push(record.clone());
        Some(record)
    }

    /// Drop one pending change. Unknown or already-committed ids are ignored.
    pub fn discard(&mut self, id: &str) -> bool {
        match self.changes.iter().position(|c| c.id == id && !c.committed) {
            Some(idx) => {
                let change = self.changes.remove(idx);
                tracing::debug!(id, "discarded: {}", change.description);
                true
            }
            None => false,
        }
    }

    /// Drop every pending change. Returns how many were removed.
    pub fn discard_all(&mut self) -> usize {
        let before = self.changes.len();
        self.changes.retain(|c| c.committed);
        before - self.changes.len()
    }

    pub fn get(&self, id: &str) -> Option<&StagingChange> {
        self.changes.iter().find(|c| c.id == id)
    }

    pub fn changes(&self) -> &[StagingChange] {
        &self.changes
    }

    pub fn pending(&self) -> impl Iterator<Item = &StagingChange> {
        self.changes.iter().filter(|c| !c.committed)
    }

    pub fn committed(&self) -> impl Iterator<Item = &StagingChange> {
        self.changes.iter().filter(|c| c.committed)
    }

    pub fn pending_count(&self) -> usize {
        self.pending().count()
    }

    pub fn commits(&self) -> &[CommitRecord] {
        &self.commits
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Forget everything (used when a theme is imported).
    pub fn clear(&mut self) {
        self.changes.clear();
        self.commits.clear();
    }
}

/// Content hash over the parent commit, the message and the change ids.
fn commit_id(parent: Option<&str>, message: &str, change_ids: &[String]) -> String {
    let mut hasher = Sha256::new();
    if let Some(parent) = parent {
        hasher.update(b"parent ");
        hasher.update(parent.as_bytes());
        hasher.update(b"\n");
    }
    hasher.update(b"message ");
    hasher.update(message.as_bytes());
    hasher.update(b"\n");
    for id in change_ids {
        hasher.update(b"change ");
        hasher.update(id.as_bytes());
        hasher.update(b"\n");
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_with_three() -> (StagingLog, Vec<String>) {
        let mut log = StagingLog::new();
        let ids = vec![
            log.record(ChangeKind::Css, "Updated custom CSS", None),
            log.record(ChangeKind::Html, "Added page: Pricing", Some("Pricing")),
            log.record(ChangeKind::Config, "Changed primary color", None),
        ];
        (log, ids)
    }

    #[test]
    fn test_record_appends_pending() {
        let (log, ids) = log_with_three();
        assert_eq!(log.len(), 3);
        assert_eq!(log.pending_count(), 3);
        let pricing = log.get(&ids[1]).unwrap();
        assert_eq!(pricing.page.as_deref(), Some("Pricing"));
        assert_eq!(pricing.kind, ChangeKind::Html);
    }

    #[test]
    fn test_commit_flips_all_pending() {
        let (mut log, ids) = log_with_three();
        let record = log.commit("release").unwrap();
        assert_eq!(record.message, "release");
        assert_eq!(record.change_ids, ids);
        assert_eq!(record.id.len(), 64);
        assert_eq!(record.short_id().len(), 12);
        assert!(log.changes().iter().all(|c| c.committed));
        assert_eq!(log.pending_count(), 0);
        assert_eq!(log.commits().len(), 1);
    }

    #[test]
    fn test_commit_with_nothing_pending_is_noop() {
        let mut log = StagingLog::new();
        assert!(log.commit("empty").is_none());
        assert!(log.commits().is_empty());

        let (mut log, _) = log_with_three();
        log.commit("first");
        assert!(log.commit("second").is_none());
        assert_eq!(log.commits().len(), 1);
    }

    #[test]
    fn test_discard_pending() {
        let (mut log, ids) = log_with_three();
        assert!(log.discard(&ids[0]));
        assert_eq!(log.len(), 2);
        assert!(log.get(&ids[0]).is_none());
    }

    #[test]
    fn test_discard_is_idempotent() {
        let (mut log, ids) = log_with_three();
        assert!(log.discard(&ids[0]));
        assert!(!log.discard(&ids[0]));
        assert!(!log.discard("no-such-id"));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_committed_cannot_be_discarded() {
        let (mut log, ids) = log_with_three();
        log.commit("release");
        for id in &ids {
            assert!(!log.discard(id));
        }
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_second_commit_covers_only_new_changes() {
        let (mut log, _) = log_with_three();
        let first = log.commit("one").unwrap();
        let later = log.record(ChangeKind::Js, "Updated custom JS", None);
        let second = log.commit("two").unwrap();
        assert_eq!(second.change_ids, vec![later]);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_discard_all_keeps_committed() {
        let (mut log, _) = log_with_three();
        log.commit("one");
        log.record(ChangeKind::Js, "a", None);
        log.record(ChangeKind::Js, "b", None);
        assert_eq!(log.discard_all(), 2);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_commit_id_depends_on_parent() {
        let ids = vec!["x".to_string()];
        assert_ne!(commit_id(None, "m", &ids), commit_id(Some("abc"), "m", &ids));
        assert_eq!(commit_id(None, "m", &ids), commit_id(None, "m", &ids));
    }
}
