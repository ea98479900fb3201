//! Directory core: channel catalog, filter engine, and the pure view state machine.
mod catalog;
mod effect;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use catalog::{Catalog, CatalogError, ChannelId, ChannelRecord, NEWS_CHANNELS};
pub use effect::Effect;
pub use msg::Msg;
pub use query::{
    categories, filter_channels, CategoryFilter, QueryCache, QueryState, ALL_CATEGORIES,
};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, CategoryChip, ChannelCard, EMPTY_RESULTS_MESSAGE};
