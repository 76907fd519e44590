//! Selection trackers.
//!
//! Selection is always by item identity, never by reference or list
//! position: a refetch may reorder the collection, but a selected id keeps
//! meaning the same entity.

/// What happens when the currently selected item is selected again.
///
/// The pages are deliberately inconsistent here: the chat contact picker
/// and the course popups keep the selection on re-click, while opt-in
/// pickers clear it. Preserved per page; do not unify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReselectPolicy {
    /// Re-selecting the current item is a no-op.
    #[default]
    Keep,
    /// Re-selecting the current item clears the selection.
    Toggle,
}

/// Single-choice selection tracker.
#[derive(Debug)]
pub struct SingleSelect<K: PartialEq + Clone> {
    selected: Option<K>,
    policy: ReselectPolicy,
}

impl<K: PartialEq + Clone> Default for SingleSelect<K> {
    fn default() -> Self {
        Self {
            selected: None,
            policy: ReselectPolicy::default(),
        }
    }
}

impl<K: PartialEq + Clone> SingleSelect<K> {
    /// Creates an empty tracker with the given re-select policy.
    #[must_use]
    pub fn new(policy: ReselectPolicy) -> Self {
        Self {
            selected: None,
            policy,
        }
    }

    /// Selects `key`, replacing any prior selection.
    ///
    /// Returns `true` when the selection changed (callers clear stale form
    /// feedback exactly then).
    pub fn select(&mut self, key: K) -> bool {
        match &self.selected {
            Some(current) if *current == key => match self.policy {
                ReselectPolicy::Keep => false,
                ReselectPolicy::Toggle => {
                    self.selected = None;
                    true
                }
            },
            _ => {
                self.selected = Some(key);
                true
            }
        }
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The current selection, if any.
    #[must_use]
    pub fn current(&self) -> Option<&K> {
        self.selected.as_ref()
    }

    /// Whether `key` is the current selection.
    #[must_use]
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.as_ref() == Some(key)
    }

    /// Drops the selection unless `known` says its item still exists.
    ///
    /// Called after every refetch so a vanished entity cannot stay selected.
    pub fn retain(&mut self, known: impl Fn(&K) -> bool) {
        if let Some(current) = &self.selected {
            if !known(current) {
                self.selected = None;
            }
        }
    }
}

/// Multi-choice selection tracker.
///
/// Keeps insertion order so the selection can be rendered as a joined
/// list ("Ada, Grace") in the form header.
#[derive(Debug)]
pub struct MultiSelect<K: PartialEq + Clone> {
    selected: Vec<K>,
}

impl<K: PartialEq + Clone> Default for MultiSelect<K> {
    fn default() -> Self {
        Self {
            selected: Vec::new(),
        }
    }
}

impl<K: PartialEq + Clone> MultiSelect<K> {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles `key`: absent is added, present is removed.
    pub fn toggle(&mut self, key: K) {
        if let Some(pos) = self.selected.iter().position(|k| *k == key) {
            self.selected.remove(pos);
        } else {
            self.selected.push(key);
        }
    }

    /// Whether `key` is currently selected.
    #[must_use]
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Selected keys in selection order.
    #[must_use]
    pub fn selected(&self) -> &[K] {
        &self.selected
    }

    /// Number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drops selections whose items vanished from the collection.
    ///
    /// Called after every refetch so a removed contact cannot ride along
    /// into a submission.
    pub fn retain(&mut self, known: impl Fn(&K) -> bool) {
        self.selected.retain(|k| known(k));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_select_replaces_prior() {
        let mut sel = SingleSelect::new(ReselectPolicy::Keep);
        assert!(sel.select("a"));
        assert!(sel.select("b"));
        assert_eq!(sel.current(), Some(&"b"));
    }

    #[test]
    fn single_select_keep_policy_reselect_is_noop() {
        let mut sel = SingleSelect::new(ReselectPolicy::Keep);
        sel.select("a");
        assert!(!sel.select("a"), "re-select must not report a change");
        assert_eq!(sel.current(), Some(&"a"));
    }

    #[test]
    fn single_select_toggle_policy_reselect_clears() {
        let mut sel = SingleSelect::new(ReselectPolicy::Toggle);
        sel.select("a");
        assert!(sel.select("a"));
        assert_eq!(sel.current(), None);
    }

    #[test]
    fn single_select_retain_drops_vanished() {
        let mut sel = SingleSelect::new(ReselectPolicy::Keep);
        sel.select("a");
        sel.retain(|k| *k == "b");
        assert_eq!(sel.current(), None);
    }

    #[test]
    fn multi_select_double_toggle_restores_original() {
        let mut sel = MultiSelect::new();
        sel.toggle("a");
        sel.toggle("b");
        let before: Vec<_> = sel.selected().to_vec();

        sel.toggle("c");
        sel.toggle("c");
        assert_eq!(sel.selected(), before.as_slice());
    }

    #[test]
    fn multi_select_keeps_insertion_order() {
        let mut sel = MultiSelect::new();
        sel.toggle("b");
        sel.toggle("a");
        sel.toggle("c");
        assert_eq!(sel.selected(), ["b", "a", "c"]);
    }

    #[test]
    fn multi_select_toggle_removes_present() {
        let mut sel = MultiSelect::new();
        sel.toggle("a");
        sel.toggle("b");
        sel.toggle("a");
        assert_eq!(sel.selected(), ["b"]);
        assert!(!sel.is_selected(&"a"));
    }

    #[test]
    fn multi_select_retain_prunes_stale_ids() {
        let mut sel = MultiSelect::new();
        sel.toggle("a");
        sel.toggle("b");
        sel.toggle("c");
        let fresh = ["a", "c"];
        sel.retain(|k| fresh.contains(k));
        assert_eq!(sel.selected(), ["a", "c"]);
    }
}
