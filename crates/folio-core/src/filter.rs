//! Project search and tag filtering.

/// Chip value that disables tag matching
pub const ALL_TAGS: &str = "all";

/// Current filter selection: one tag chip plus a free-text query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    pub tag: String,
    pub query: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            tag: ALL_TAGS.to_string(),
            query: String::new(),
        }
    }
}

impl ProjectFilter {
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Whether a card with the given tag string and visible text stays shown.
    ///
    /// Matching is case-insensitive substring matching. The query is trimmed;
    /// an empty query matches everything.
    pub fn matches(&self, tags: &str, text: &str) -> bool {
        let tags = tags.to_lowercase();
        let tag = self.tag.to_lowercase();
        let query = self.query.trim().to_lowercase();

        let matches_tag = tag == ALL_TAGS || tags.contains(&tag);
        let matches_query =
            query.is_empty() || tags.contains(&query) || text.to_lowercase().contains(&query);

        matches_tag && matches_query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAGS: &str = "web react node";
    const TEXT: &str = "E-Commerce Website. A shopping platform.";

    #[test]
    fn default_filter_shows_everything() {
        assert!(ProjectFilter::default().matches(TAGS, TEXT));
        assert!(ProjectFilter::default().matches("", ""));
    }

    #[test]
    fn tag_filter_uses_substring_match() {
        assert!(ProjectFilter::default().with_tag("react").matches(TAGS, TEXT));
        assert!(!ProjectFilter::default().with_tag("java").matches(TAGS, TEXT));
    }

    #[test]
    fn query_checks_tags_and_text() {
        let filter = ProjectFilter::default();
        assert!(filter.clone().with_query("node").matches(TAGS, TEXT));
        assert!(filter.clone().with_query("  SHOPPING ").matches(TAGS, TEXT));
        assert!(!filter.with_query("banking").matches(TAGS, TEXT));
    }

    #[test]
    fn tag_and_query_must_both_match() {
        let filter = ProjectFilter::default().with_tag("java").with_query("shopping");
        assert!(!filter.matches(TAGS, TEXT));
    }

    #[test]
    fn whitespace_query_is_empty() {
        assert!(ProjectFilter::default().with_query("   ").matches(TAGS, TEXT));
    }
}
