use crate::app::domain::theme::ThemeConfiguration;

/// Linear undo/redo buffer of full theme snapshots.
///
/// The visible configuration is always `entries[index]`, and
/// `0 <= index < entries.len()` holds at all times. Pushing after an undo
/// drops every entry past the index; there is no redo branching.
pub struct HistoryStack {
    entries: Vec<ThemeConfiguration>,
    index: usize,
    /// Maximum snapshots retained. 0 means unbounded.
    capacity: usize,
}

impl HistoryStack {
    pub fn new(initial: ThemeConfiguration) -> Self {
        Self::with_capacity(initial, 0)
    }

    pub fn with_capacity(initial: ThemeConfiguration, capacity: usize) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
            capacity,
        }
    }

    pub fn current(&self) -> &ThemeConfiguration {
        &self.entries[self.index]
    }

    /// Edit the visible snapshot in place, without a new history entry.
    pub fn current_mut(&mut self) -> &mut ThemeConfiguration {
        &mut self.entries[self.index]
    }

    /// Record a new snapshot, discarding any redo entries.
    pub fn push(&mut self, config: ThemeConfiguration) {
        self.entries.truncate(self.index + 1);
        self.entries.push(config);
        self.index = self.entries.len() - 1;

        if self.capacity > 0 && self.entries.len() > self.capacity {
            let overflow = self.entries.len() - self.capacity;
            self.entries.drain(..overflow);
            self.index -= overflow;
            tracing::debug!(dropped = overflow, "history capacity reached");
        }
        tracing::debug!(index = self.index, len = self.entries.len(), "history push");
    }

    /// Step back one snapshot. Returns `None` (and changes nothing) at the start.
    pub fn undo(&mut self) -> Option<&ThemeConfiguration> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        tracing::debug!(index = self.index, "undo");
        Some(&self.entries[self.index])
    }

    /// Step forward one snapshot. Returns `None` (and changes nothing) at the end.
    pub fn redo(&mut self) -> Option<&ThemeConfiguration> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        tracing::debug!(index = self.index, "redo");
        Some(&self.entries[self.index])
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the stack holds at least the initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Replace all history with a single snapshot (used on import).
    pub fn reset(&mut self, config: ThemeConfiguration) {
        self.entries.clear();
        self.entries.push(config);
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> ThemeConfiguration {
        ThemeConfiguration {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_history_has_single_entry() {
        let history = HistoryStack::new(named("base"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_push_advances_index() {
        let mut history = HistoryStack::new(named("a"));
        history.push(named("b"));
        history.push(named("c"));
        assert_eq!(history.index(), 2);
        assert_eq!(history.current().name, "c");
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let mut history = HistoryStack::new(named("a"));
        assert!(history.undo().is_none());
        assert_eq!(history.index(), 0);
        assert_eq!(history.current().name, "a");
    }

    #[test]
    fn test_redo_at_end_is_noop() {
        let mut history = HistoryStack::new(named("a"));
        history.push(named("b"));
        assert!(history.redo().is_none());
        assert_eq!(history.current().name, "b");
    }

    #[test]
    fn test_undo_then_redo() {
        let mut history = HistoryStack::new(named("a"));
        history.push(named("b"));
        assert_eq!(history.undo().unwrap().name, "a");
        assert!(history.can_redo());
        assert_eq!(history.redo().unwrap().name, "b");
    }

    #[test]
    fn test_push_after_undo_truncates() {
        let mut history = HistoryStack::new(named("a"));
        history.push(named("b"));
        history.push(named("c"));
        history.undo();
        history.undo();
        history.push(named("d"));
        assert_eq!(history.len(), 2);
        assert!(history.redo().is_none());
        assert_eq!(history.current().name, "d");
        assert_eq!(history.undo().unwrap().name, "a");
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = HistoryStack::with_capacity(named("0"), 3);
        for i in 1..=5 {
            history.push(named(&i.to_string()));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.index(), 2);
        assert_eq!(history.current().name, "5");
        history.undo();
        history.undo();
        assert!(history.undo().is_none());
        assert_eq!(history.current().name, "3");
    }

    #[test]
    fn test_reset() {
        let mut history = HistoryStack::new(named("a"));
        history.push(named("b"));
        history.reset(named("z"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), 0);
        assert_eq!(history.current().name, "z");
    }
}
