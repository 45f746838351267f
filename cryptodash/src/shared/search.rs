//! Search box state: query, filtered suggestions and the keyboard cursor

use super::types::MarketEntry;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Lower-cased query as last typed
    pub query: String,
    /// Entries whose name contains the query, in entry order
    pub suggestions: Vec<MarketEntry>,
    /// Index into `suggestions` of the highlighted row
    pub highlighted: usize,
}

impl SearchState {
    /// Recompute suggestions for a new query.
    ///
    /// An empty query clears the suggestions rather than listing every entry.
    pub fn on_query_change(&mut self, query: &str, entries: &[MarketEntry]) {
        self.query = query.to_lowercase();
        self.highlighted = 0;
        self.suggestions = if self.query.is_empty() {
            Vec::new()
        } else {
            filter_by_name(entries, &self.query)
        };
    }

    /// Forget the query and its suggestions
    pub fn clear(&mut self) {
        self.query.clear();
        self.suggestions.clear();
        self.highlighted = 0;
    }

    pub fn highlight_next(&mut self) {
        if !self.suggestions.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.suggestions.len();
        }
    }

    pub fn highlight_prev(&mut self) {
        if !self.suggestions.is_empty() {
            self.highlighted = self
                .highlighted
                .checked_sub(1)
                .unwrap_or(self.suggestions.len() - 1);
        }
    }

    pub fn highlighted_entry(&self) -> Option<&MarketEntry> {
        self.suggestions.get(self.highlighted)
    }
}

/// Case-insensitive substring match on the display name
fn filter_by_name(entries: &[MarketEntry], lowered_query: &str) -> Vec<MarketEntry> {
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(lowered_query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::test_util::entry;

    fn entries() -> Vec<MarketEntry> {
        vec![
            entry("Bitcoin", 1.0),
            entry("Ethereum", -2.0),
            entry("Bitcoin Cash", -6.0),
            entry("Wrapped Bitcoin", 0.5),
        ]
    }

    fn names(state: &SearchState) -> Vec<&str> {
        state.suggestions.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_has_no_suggestions() {
        let mut state = SearchState::default();
        state.on_query_change("", &entries());
        assert!(state.suggestions.is_empty());
    }

    #[test]
    fn test_query_without_match() {
        let mut state = SearchState::default();
        state.on_query_change("doge", &entries());
        assert!(state.suggestions.is_empty());
        assert_eq!(state.query, "doge");
    }

    #[test]
    fn test_query_matches_substring_case_insensitive() {
        let mut state = SearchState::default();
        state.on_query_change("BiT", &entries());

        assert_eq!(state.query, "bit");
        assert_eq!(names(&state), vec!["Bitcoin", "Bitcoin Cash", "Wrapped Bitcoin"]);
    }

    #[test]
    fn test_clearing_query_clears_suggestions() {
        let mut state = SearchState::default();
        state.on_query_change("eth", &entries());
        assert_eq!(names(&state), vec!["Ethereum"]);

        state.on_query_change("", &entries());
        assert!(state.suggestions.is_empty());
    }

    #[test]
    fn test_query_on_empty_entries() {
        let mut state = SearchState::default();
        state.on_query_change("bit", &[]);
        assert!(state.suggestions.is_empty());
        assert!(state.highlighted_entry().is_none());
    }

    #[test]
    fn test_highlight_wraps() {
        let mut state = SearchState::default();
        state.on_query_change("bit", &entries());
        assert_eq!(state.highlighted_entry().unwrap().name, "Bitcoin");

        state.highlight_prev();
        assert_eq!(state.highlighted_entry().unwrap().name, "Wrapped Bitcoin");

        state.highlight_next();
        state.highlight_next();
        assert_eq!(state.highlighted_entry().unwrap().name, "Bitcoin Cash");

        // New keystroke resets the cursor
        state.on_query_change("bitc", &entries());
        assert_eq!(state.highlighted, 0);
    }

    #[test]
    fn test_highlight_on_empty_is_noop() {
        let mut state = SearchState::default();
        state.highlight_next();
        state.highlight_prev();
        assert_eq!(state.highlighted, 0);
    }
}
