//! List filters and match highlighting.
//!
//! Filtering is plain case-insensitive substring matching; an empty query
//! matches everything and a query matching nothing yields an empty list, never
//! an error. Highlight ranges come from the Skim fuzzy matcher so the rows
//! that did match show which characters lined up with the query.

use crate::domain::{contains_ignore_case, Conversation, Person, Post, TrendingTag};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// People whose name or handle contains `query`, in input order.
///
/// # Example
///
/// ```
/// use neonfeed::app::filters::filter_people;
/// use neonfeed::dataset::Dataset;
///
/// let dataset = Dataset::builtin().unwrap();
/// assert!(filter_people(dataset.people.iter(), "xyzzy").is_empty());
/// ```
pub fn filter_people<'a>(people: impl IntoIterator<Item = &'a Person>, query: &str) -> Vec<&'a Person> {
    people.into_iter().filter(|p| p.matches(query)).collect()
}

/// Conversations whose name or handle contains `query`.
pub fn filter_conversations<'a>(
    conversations: impl IntoIterator<Item = &'a Conversation>,
    query: &str,
) -> Vec<&'a Conversation> {
    conversations.into_iter().filter(|c| c.matches(query)).collect()
}

/// Posts whose content, author name or handle contains `query`. A query
/// starting with `#` matches hashtags instead.
pub fn filter_posts<'a>(posts: impl IntoIterator<Item = &'a Post>, query: &str) -> Vec<&'a Post> {
    let query = query.trim();
    if let Some(tag) = query.strip_prefix('#') {
        return posts
            .into_iter()
            .filter(|p| p.tags.iter().any(|t| contains_ignore_case(t, tag)))
            .collect();
    }
    posts
        .into_iter()
        .filter(|p| {
            contains_ignore_case(&p.content, query)
                || contains_ignore_case(&p.author, query)
                || contains_ignore_case(&p.username, query)
                || p.tags.iter().any(|t| t.eq_ignore_ascii_case(query))
        })
        .collect()
}

/// Trending tags whose name contains `query` (leading `#` ignored).
pub fn filter_tags<'a>(tags: impl IntoIterator<Item = &'a TrendingTag>, query: &str) -> Vec<&'a TrendingTag> {
    let needle = query.trim().trim_start_matches('#');
    tags.into_iter()
        .filter(|t| contains_ignore_case(&t.tag, needle))
        .collect()
}

/// Character ranges of `text` matched by `query`, coalesced into runs.
///
/// Each range is `(start, end)` in character indices with `end` exclusive.
/// Empty when the query is blank or does not fuzzy-match.
///
/// # Example
///
/// ```
/// use neonfeed::app::filters::highlight_ranges;
///
/// assert_eq!(highlight_ranges("Maya Patel", "pat"), vec![(5, 8)]);
/// assert!(highlight_ranges("Maya Patel", "").is_empty());
/// ```
#[must_use]
pub fn highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let query = query.trim();
    if query.is_empty() {
        return vec![];
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn people_filter_is_case_insensitive_over_name_and_handle() {
        let dataset = Dataset::builtin().unwrap();
        let names: Vec<&str> = filter_people(dataset.people.iter(), "WILSON")
            .iter()
            .map(|p| p.username.as_str())
            .collect();
        assert_eq!(names, vec!["sarahwilson", "jameswilson"]);
    }

    #[test]
    fn five_conversations_with_no_match_yield_empty() {
        let dataset = Dataset::builtin().unwrap();
        assert_eq!(dataset.conversations.len(), 5);
        assert!(filter_conversations(dataset.conversations.iter(), "zzz").is_empty());
    }

    #[test]
    fn empty_query_keeps_everything() {
        let dataset = Dataset::builtin().unwrap();
        assert_eq!(filter_posts(dataset.posts.iter(), "").len(), dataset.posts.len());
        assert_eq!(filter_tags(dataset.tags.iter(), "").len(), dataset.tags.len());
    }

    #[test]
    fn hash_query_matches_post_tags() {
        let dataset = Dataset::builtin().unwrap();
        let ids: Vec<u64> = filter_posts(dataset.posts.iter(), "#glass").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);
        assert_eq!(filter_tags(dataset.tags.iter(), "#dark").len(), 1);
    }

    #[test]
    fn highlight_runs_are_coalesced() {
        assert_eq!(highlight_ranges("davidlee", "vl"), vec![(2, 3), (5, 6)]);
        assert!(highlight_ranges("davidlee", "xyz").is_empty());
    }
}
