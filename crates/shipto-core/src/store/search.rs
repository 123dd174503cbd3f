// ── Customer search ──

use crate::model::{Customer, CustomerId};

/// Positions of every customer whose name contains `query`,
/// case-insensitively, in directory order. Empty query matches nothing.
pub fn filter_positions(directory: &[Customer], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    directory
        .iter()
        .enumerate()
        .filter(|(_, c)| c.name_contains(&needle))
        .map(|(pos, _)| pos)
        .collect()
}

/// Query, derived match set, dropdown visibility, and the committed pick.
///
/// Matches are positions into the directory so that a local address append
/// is visible through the match set without copying customers.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    matches: Vec<usize>,
    open: bool,
    committed: Option<CustomerId>,
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn positions(&self) -> &[usize] {
        &self.matches
    }

    /// Dropdown visibility. Open for any non-empty uncommitted query, even
    /// when nothing matches.
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn committed(&self) -> Option<&CustomerId> {
        self.committed.as_ref()
    }

    pub(crate) fn set_query(&mut self, query: String, directory: &[Customer]) {
        self.query = query;
        self.recompute(directory);
    }

    /// Re-derive matches from the current query; drops any commit.
    pub(crate) fn recompute(&mut self, directory: &[Customer]) {
        self.committed = None;
        self.matches = filter_positions(directory, &self.query);
        self.open = !self.query.is_empty();
    }

    /// Narrow to the `nth` current match. Returns `None` when out of range.
    pub(crate) fn commit(&mut self, nth: usize, directory: &[Customer]) -> Option<&CustomerId> {
        let pos = *self.matches.get(nth)?;
        let customer = directory.get(pos)?;
        self.query.clone_from(&customer.name);
        self.matches = vec![pos];
        self.open = false;
        self.committed = Some(customer.id.clone());
        self.committed.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn directory() -> Vec<Customer> {
        vec![
            Customer::new("C1", "Alice", vec![]),
            Customer::new("C2", "Bob", vec![]),
            Customer::new("C3", "Malik", vec![]),
            Customer::new("C4", "alina", vec![]),
        ]
    }

    #[test]
    fn empty_query_matches_nothing() {
        assert!(filter_positions(&directory(), "").is_empty());
    }

    #[test]
    fn case_insensitive_substring_in_directory_order() {
        assert_eq!(filter_positions(&directory(), "ALI"), vec![0, 2, 3]);
        assert_eq!(filter_positions(&directory(), "bo"), vec![1]);
        assert!(filter_positions(&directory(), "zed").is_empty());
    }

    #[test]
    fn dropdown_open_iff_query_non_empty() {
        let dir = directory();
        let mut search = SearchState::default();

        search.set_query("zed".into(), &dir);
        assert!(search.is_open());
        assert!(search.positions().is_empty());

        search.set_query(String::new(), &dir);
        assert!(!search.is_open());
        assert!(search.positions().is_empty());
    }

    #[test]
    fn commit_narrows_to_one_and_closes() {
        let dir = directory();
        let mut search = SearchState::default();
        search.set_query("ali".into(), &dir);

        let id = search.commit(1, &dir).cloned();

        assert_eq!(id, Some(CustomerId::from("C3")));
        assert_eq!(search.query(), "Malik");
        assert_eq!(search.positions(), &[2]);
        assert!(!search.is_open());
    }

    #[test]
    fn commit_out_of_range_is_noop() {
        let dir = directory();
        let mut search = SearchState::default();
        search.set_query("bo".into(), &dir);

        assert!(search.commit(5, &dir).is_none());
        assert!(search.is_open());
        assert!(search.committed().is_none());
    }

    #[test]
    fn editing_after_commit_clears_it() {
        let dir = directory();
        let mut search = SearchState::default();
        search.set_query("ali".into(), &dir);
        search.commit(0, &dir);

        search.set_query("Alic".into(), &dir);

        assert!(search.committed().is_none());
        assert!(search.is_open());
        assert_eq!(search.positions(), &[0]);
    }
}
