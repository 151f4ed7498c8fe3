//! Uniqueness-constrained pair selection for multi-step forms.
//!
//! Backs two flows: prerequisite picking (discipline + prerequisite) and
//! the registration wizard's special-need + subcategory list. Insertion
//! order is preserved for display; duplicates are rejected with an error
//! the caller surfaces as a warning.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("this pair has already been added")]
    Duplicate,

    #[error("an item cannot be paired with itself")]
    SelfReference,
}

/// One selected (primary, secondary) pair, with labels for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedPair {
    pub primary_id: String,
    pub secondary_id: String,
    pub primary_label: String,
    pub secondary_label: String,
}

impl SelectedPair {
    pub fn new(
        primary_id: impl Into<String>,
        secondary_id: impl Into<String>,
        primary_label: impl Into<String>,
        secondary_label: impl Into<String>,
    ) -> Self {
        Self {
            primary_id: primary_id.into(),
            secondary_id: secondary_id.into(),
            primary_label: primary_label.into(),
            secondary_label: secondary_label.into(),
        }
    }
}

/// Ordered set of pairs with normalized duplicate rejection.
#[derive(Debug, Clone, Default)]
pub struct PairSelection {
    entries: Vec<SelectedPair>,
    reject_self_pairs: bool,
}

impl PairSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// For selections over a single id space (prerequisites), where a pair
    /// of an item with itself is meaningless.
    pub fn rejecting_self_pairs() -> Self {
        Self {
            entries: Vec::new(),
            reject_self_pairs: true,
        }
    }

    /// Appends a pair unless an entry with the same primary AND secondary
    /// id already exists. Ids compare as trimmed strings, so `"3"` and
    /// `3` coming from different form sources collide as expected.
    pub fn add(&mut self, pair: SelectedPair) -> Result<(), SelectionError> {
        let primary = pair.primary_id.trim();
        let secondary = pair.secondary_id.trim();

        if self.reject_self_pairs && primary == secondary {
            return Err(SelectionError::SelfReference);
        }
        if self
            .entries
            .iter()
            .any(|e| e.primary_id.trim() == primary && e.secondary_id.trim() == secondary)
        {
            return Err(SelectionError::Duplicate);
        }

        self.entries.push(pair);
        Ok(())
    }

    /// Removes by display index.
    pub fn remove(&mut self, index: usize) -> Option<SelectedPair> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn entries(&self) -> &[SelectedPair] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Secondary ids in selection order, parsed as integers where possible.
    /// This is the shape the registration payload wants.
    pub fn secondary_ids(&self) -> Vec<i64> {
        self.entries
            .iter()
            .filter_map(|e| e.secondary_id.trim().parse().ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(primary: &str, secondary: &str) -> SelectedPair {
        SelectedPair::new(primary, secondary, "Need", "Subcategory")
    }

    #[test]
    fn test_duplicate_pair_rejected() {
        let mut selection = PairSelection::new();
        selection.add(pair("1", "2")).unwrap();

        assert_eq!(selection.add(pair("1", "2")), Err(SelectionError::Duplicate));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_same_primary_different_secondary_allowed() {
        let mut selection = PairSelection::new();
        selection.add(pair("1", "2")).unwrap();
        selection.add(pair("1", "3")).unwrap();
        selection.add(pair("2", "2")).unwrap();
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_comparison_is_string_normalized() {
        let mut selection = PairSelection::new();
        selection.add(pair(" 1", "2 ")).unwrap();
        assert_eq!(selection.add(pair("1", "2")), Err(SelectionError::Duplicate));
    }

    #[test]
    fn test_remove_by_index_preserves_order() {
        let mut selection = PairSelection::new();
        selection.add(pair("1", "a")).unwrap();
        selection.add(pair("2", "b")).unwrap();
        selection.add(pair("3", "c")).unwrap();

        let removed = selection.remove(1).unwrap();
        assert_eq!(removed.primary_id, "2");
        let remaining: Vec<&str> = selection
            .entries()
            .iter()
            .map(|e| e.primary_id.as_str())
            .collect();
        assert_eq!(remaining, vec!["1", "3"]);

        assert!(selection.remove(5).is_none());
    }

    #[test]
    fn test_self_pair_rejected_only_when_configured() {
        let mut prerequisites = PairSelection::rejecting_self_pairs();
        assert_eq!(
            prerequisites.add(pair("4", "4")),
            Err(SelectionError::SelfReference)
        );

        // Need/subcategory ids live in different spaces; equal numbers are
        // legitimate there.
        let mut needs = PairSelection::new();
        assert!(needs.add(pair("4", "4")).is_ok());
    }

    #[test]
    fn test_secondary_ids_for_payload() {
        let mut selection = PairSelection::new();
        selection.add(pair("1", "10")).unwrap();
        selection.add(pair("2", "20")).unwrap();
        assert_eq!(selection.secondary_ids(), vec![10, 20]);
    }
}
