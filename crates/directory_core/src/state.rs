use crate::catalog::{Catalog, ChannelId, ChannelRecord};
use crate::query::{categories, CategoryFilter, QueryCache, QueryState};
use crate::view_model::{AppViewModel, CategoryChip, ChannelCard, EMPTY_RESULTS_MESSAGE};

/// Directory view state: the query inputs plus the memoized result.
///
/// The cache is refreshed eagerly on every query mutation, so `view` never
/// has to recompute the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    catalog: Catalog<'static>,
    query: QueryState,
    cache: QueryCache,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_catalog(Catalog::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog<'static>) -> Self {
        let query = QueryState::default();
        let mut cache = QueryCache::new();
        cache.refresh(catalog, &query);
        Self {
            catalog,
            query,
            cache,
            dirty: false,
        }
    }

    pub fn catalog(&self) -> Catalog<'static> {
        self.catalog
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn view(&self) -> AppViewModel {
        let selected = self.query.selected_category.label();
        let chips = categories(self.catalog)
            .into_iter()
            .map(|label| CategoryChip {
                label: label.to_string(),
                selected: label == selected,
            })
            .collect();
        let cards: Vec<ChannelCard> = self
            .visible_channels()
            .into_iter()
            .map(|channel| ChannelCard {
                id: channel.id,
                name: channel.name.to_string(),
                url: channel.url.to_string(),
                category: channel.category.to_string(),
                description: channel.description.to_string(),
            })
            .collect();
        let empty_message = cards.is_empty().then_some(EMPTY_RESULTS_MESSAGE);

        AppViewModel {
            search_text: self.query.search_text.clone(),
            selected_category: selected.to_string(),
            categories: chips,
            cards,
            total_channels: self.catalog.len(),
            empty_message,
            dirty: self.dirty,
        }
    }

    pub fn visible_channels(&self) -> Vec<&'static ChannelRecord> {
        self.cache.results(self.catalog)
    }

    pub fn visible_channel(&self, id: ChannelId) -> Option<&'static ChannelRecord> {
        self.visible_channels()
            .into_iter()
            .find(|channel| channel.id == id)
    }

    /// Returns the current dirty flag and clears it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_search_text(&mut self, text: String) -> bool {
        if self.query.search_text == text {
            return false;
        }
        self.query.search_text = text;
        self.refresh();
        true
    }

    /// Accepts `"All"` or a label from the derived category list.
    pub(crate) fn select_category(&mut self, label: &str) -> bool {
        if !categories(self.catalog).iter().any(|known| *known == label) {
            return false;
        }
        let filter = CategoryFilter::from_label(label);
        if self.query.selected_category == filter {
            return false;
        }
        self.query.selected_category = filter;
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        self.cache.refresh(self.catalog, &self.query);
        self.dirty = true;
    }
}
