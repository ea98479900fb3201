use crate::ChannelId;

/// Shown in place of the card grid when the filter admits nothing.
pub const EMPTY_RESULTS_MESSAGE: &str = "No channels found matching your criteria";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search_text: String,
    pub selected_category: String,
    pub categories: Vec<CategoryChip>,
    pub cards: Vec<ChannelCard>,
    pub total_channels: usize,
    pub empty_message: Option<&'static str>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelCard {
    pub id: ChannelId,
    pub name: String,
    pub url: String,
    pub category: String,
    pub description: String,
}
