//! Category derivation and the channel filter.
//!
//! Category matching is exact and case-sensitive against the authored tags,
//! while text matching is a case-insensitive substring test on name and
//! description. Results always keep catalog order.

use std::fmt;

use crate::catalog::{Catalog, ChannelRecord};

/// Label of the category control that disables the category predicate.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    pub fn admits(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two user-controlled inputs of the filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QueryState {
    pub search_text: String,
    pub selected_category: CategoryFilter,
}

impl QueryState {
    pub fn new(search_text: impl Into<String>, selected_category: CategoryFilter) -> Self {
        Self {
            search_text: search_text.into(),
            selected_category,
        }
    }
}

/// `"All"` followed by each distinct category in first-occurrence order.
///
/// A record filed under `"All"` itself adds no label; `Catalog::check`
/// rejects such tables.
pub fn categories(catalog: Catalog<'_>) -> Vec<&str> {
    let mut labels = Vec::with_capacity(catalog.len() + 1);
    labels.push(ALL_CATEGORIES);
    for channel in catalog.channels() {
        if !labels.contains(&channel.category) {
            labels.push(channel.category);
        }
    }
    labels
}

/// Returns the channels admitted by both predicates, in catalog order.
pub fn filter_channels<'a>(catalog: Catalog<'a>, query: &QueryState) -> Vec<&'a ChannelRecord> {
    let channels = catalog.channels();
    matching_positions(catalog, query)
        .map(|position| &channels[position])
        .collect()
}

/// Catalog positions of the channels admitted by `query`, ascending.
fn matching_positions<'c>(
    catalog: Catalog<'c>,
    query: &QueryState,
) -> impl Iterator<Item = usize> + 'c {
    let needle = fold_case(&query.search_text);
    let filter = query.selected_category.clone();
    catalog
        .channels()
        .iter()
        .enumerate()
        .filter(move |(_, channel)| {
            filter.admits(channel.category) && text_matches(channel, &needle)
        })
        .map(|(position, _)| position)
}

/// `needle` must already be folded.
fn text_matches(channel: &ChannelRecord, needle: &str) -> bool {
    needle.is_empty()
        || fold_case(channel.name).contains(needle)
        || fold_case(channel.description).contains(needle)
}

/// Lowercases one `char` at a time. Unlike `str::to_lowercase` there is no
/// final-sigma rule, so folding a prefix always yields a prefix of the fold.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Memo of the last filter result, keyed by the query that produced it.
///
/// The catalog is not part of the key: a cache is tied to the single
/// catalog its owner was built with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryCache {
    key: Option<QueryState>,
    positions: Vec<usize>,
    hits: u64,
    misses: u64,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes only when `query` differs from the cached key.
    pub fn refresh(&mut self, catalog: Catalog<'_>, query: &QueryState) {
        if self.key.as_ref() == Some(query) {
            self.hits += 1;
            return;
        }
        self.misses += 1;
        self.positions = matching_positions(catalog, query).collect();
        self.key = Some(query.clone());
    }

    /// Channels of the last refresh; empty before the first one.
    pub fn results<'a>(&self, catalog: Catalog<'a>) -> Vec<&'a ChannelRecord> {
        let channels = catalog.channels();
        self.positions
            .iter()
            .filter_map(|&position| channels.get(position))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
