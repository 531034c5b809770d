//! Directory filter engine.
//!
//! Narrows a roster (attorneys, practice areas) by a free-text query and a
//! set of selected categories. Both predicates must hold:
//!
//! - **query**: empty, or a case-insensitive substring of the name or category
//! - **category**: no selection, or the entity's category is selected
//!
//! Everything here is pure and cheap enough to run on every keystroke.
//! Missing names or categories match as the empty string, so one bad record
//! never hides the whole directory.

use std::collections::{BTreeSet, HashSet};

// ============================================================================
// Entity
// ============================================================================

/// A record that can be listed in a filterable directory.
pub trait Entity {
    /// Display name, if the record has one.
    fn name(&self) -> Option<&str>;

    /// Category label (role, department), if the record has one.
    fn category(&self) -> Option<&str>;
}

impl<E: Entity + ?Sized> Entity for &E {
    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn category(&self) -> Option<&str> {
        (**self).category()
    }
}

// ============================================================================
// FilterState
// ============================================================================

/// User-controlled filter inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text search, matched case-insensitively.
    pub query: String,
    /// Selected categories. Empty means no restriction.
    pub selected: BTreeSet<String>,
}

impl FilterState {
    /// Creates an empty filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Selects `category` if unselected, deselects it otherwise.
    pub fn toggle(&mut self, category: &str) {
        self.selected = toggle_category(&self.selected, category);
    }

    /// Resets query and selection together.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected.contains(category)
    }

    /// True when either the query or the selection restricts results.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.selected.is_empty()
    }

    /// Checks a single entity against both predicates.
    pub fn matches<E: Entity>(&self, entity: &E) -> bool {
        let needle = self.query.to_lowercase();
        self.matches_lowered(entity, &needle)
    }

    fn matches_lowered<E: Entity>(&self, entity: &E, needle: &str) -> bool {
        let name = entity.name().unwrap_or_default();
        let category = entity.category().unwrap_or_default();

        let query_match = needle.is_empty()
            || name.to_lowercase().contains(needle)
            || category.to_lowercase().contains(needle);

        let category_match = self.selected.is_empty() || self.selected.contains(category);

        query_match && category_match
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Returns the entities matching `filter`, in source order.
pub fn compute_visible<'a, E: Entity>(entities: &'a [E], filter: &FilterState) -> Vec<&'a E> {
    let needle = filter.query.to_lowercase();
    entities
        .iter()
        .filter(|e| filter.matches_lowered(*e, &needle))
        .collect()
}

/// Owned form of [`compute_visible`], for feeding a carousel.
pub fn visible_cloned<E: Entity + Clone>(entities: &[E], filter: &FilterState) -> Vec<E> {
    compute_visible(entities, filter)
        .into_iter()
        .cloned()
        .collect()
}

/// Distinct categories in order of first appearance.
///
/// Records without a category (or with a blank one) contribute nothing.
pub fn unique_categories<E: Entity>(entities: &[E]) -> Vec<String> {
    let mut seen = HashSet::new();
    entities
        .iter()
        .filter_map(|e| e.category())
        .filter(|c| !c.is_empty())
        .filter(|c| seen.insert(*c))
        .map(String::from)
        .collect()
}

/// Returns a copy of `selected` with `category` flipped.
pub fn toggle_category(selected: &BTreeSet<String>, category: &str) -> BTreeSet<String> {
    let mut next = selected.clone();
    if !next.remove(category) {
        next.insert(category.to_string());
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Member {
        name: Option<&'static str>,
        role: Option<&'static str>,
    }

    impl Entity for Member {
        fn name(&self) -> Option<&str> {
            self.name
        }

        fn category(&self) -> Option<&str> {
            self.role
        }
    }

    fn member(name: &'static str, role: &'static str) -> Member {
        Member {
            name: Some(name),
            role: Some(role),
        }
    }

    fn roster() -> Vec<Member> {
        vec![
            member("Jane Doe", "Partner"),
            member("Sam Lee", "Associate"),
            member("Ann Okoth", "Partner"),
            member("Peter Mwangi", "Of Counsel"),
        ]
    }

    fn names(visible: &[&Member]) -> Vec<&'static str> {
        visible.iter().filter_map(|m| m.name).collect()
    }

    #[test]
    fn test_query_matches_name_case_insensitive() {
        let entities = vec![member("Jane Doe", "Partner"), member("Sam Lee", "Associate")];
        let mut filter = FilterState::new();
        filter.set_query("jane");

        let visible = compute_visible(&entities, &filter);
        assert_eq!(names(&visible), vec!["Jane Doe"]);
    }

    #[test]
    fn test_selection_restricts_category() {
        let entities = vec![member("Jane Doe", "Partner"), member("Sam Lee", "Associate")];
        let mut filter = FilterState::new();
        filter.toggle("Associate");

        let visible = compute_visible(&entities, &filter);
        assert_eq!(names(&visible), vec!["Sam Lee"]);
    }

    #[test]
    fn test_query_matches_category_text() {
        let entities = roster();
        let mut filter = FilterState::new();
        filter.set_query("PART");

        let visible = compute_visible(&entities, &filter);
        assert_eq!(names(&visible), vec!["Jane Doe", "Ann Okoth"]);
    }

    #[test]
    fn test_query_and_selection_combine_with_and() {
        let entities = roster();
        let mut filter = FilterState::new();
        filter.set_query("ann");
        filter.toggle("Associate");

        assert!(compute_visible(&entities, &filter).is_empty());

        filter.toggle("Partner");
        let visible = compute_visible(&entities, &filter);
        assert_eq!(names(&visible), vec!["Ann Okoth"]);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let entities = roster();
        let mut filter = FilterState::new();
        filter.set_query(" jane");

        assert!(compute_visible(&entities, &filter).is_empty());
    }

    #[test]
    fn test_visible_cloned_matches_borrowed() {
        let entities = roster();
        let mut filter = FilterState::new();
        filter.toggle("Partner");

        let owned = visible_cloned(&entities, &filter);
        let borrowed: Vec<Member> = compute_visible(&entities, &filter)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(owned, borrowed);
        assert_eq!(owned.len(), 2);
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let entities = roster();
        let visible = compute_visible(&entities, &FilterState::new());
        let expected: Vec<&Member> = entities.iter().collect();
        assert_eq!(visible, expected);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let entities = roster();
        let mut filter = FilterState::new();
        filter.set_query("a");
        filter.toggle("Partner");

        let once = compute_visible(&entities, &filter);
        let twice = compute_visible(&once, &filter);
        let twice: Vec<&Member> = twice.into_iter().copied().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_fields_match_as_empty() {
        let entities = vec![
            Member {
                name: None,
                role: None,
            },
            member("Jane Doe", "Partner"),
        ];

        // An empty filter still lists the broken record.
        assert_eq!(compute_visible(&entities, &FilterState::new()).len(), 2);

        let mut filter = FilterState::new();
        filter.set_query("doe");
        assert_eq!(names(&compute_visible(&entities, &filter)), vec!["Jane Doe"]);
    }

    #[test]
    fn test_unique_categories_first_occurrence_order() {
        let mut entities = roster();
        entities.push(Member {
            name: Some("Nameless"),
            role: None,
        });
        entities.push(member("Blank", ""));

        assert_eq!(
            unique_categories(&entities),
            vec!["Partner", "Associate", "Of Counsel"]
        );
    }

    #[test]
    fn test_toggle_category_is_involution() {
        let original: BTreeSet<String> = ["Partner".to_string()].into_iter().collect();

        let added = toggle_category(&original, "Associate");
        assert!(added.contains("Associate"));
        assert!(original.len() == 1, "input set must not be mutated");

        assert_eq!(toggle_category(&added, "Associate"), original);
        assert_eq!(
            toggle_category(&toggle_category(&original, "Partner"), "Partner"),
            original
        );
    }

    #[test]
    fn test_clear_resets_both_inputs() {
        let mut filter = FilterState::new();
        filter.set_query("jane");
        filter.toggle("Partner");
        assert!(filter.is_active());

        filter.clear();
        assert_eq!(filter, FilterState::new());
        assert!(!filter.is_active());
    }
}
