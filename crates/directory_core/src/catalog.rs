//! The fixed list of news channels and its authoring checks.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::query::ALL_CATEGORIES;

pub type ChannelId = u32;

/// One entry in the directory.
///
/// `url` is an opaque navigation target; nothing in the workspace parses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChannelRecord {
    pub id: ChannelId,
    pub name: &'static str,
    pub url: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog has no channels")]
    Empty,
    #[error("channel id {id} is used by both {first:?} and {second:?}")]
    DuplicateId {
        id: ChannelId,
        first: &'static str,
        second: &'static str,
    },
    #[error("channel {id} ({name:?}) uses the reserved category label \"All\"")]
    ReservedCategory { id: ChannelId, name: &'static str },
}

/// Borrowed view over an authored channel table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog<'a> {
    channels: &'a [ChannelRecord],
}

impl<'a> Catalog<'a> {
    pub const fn new(channels: &'a [ChannelRecord]) -> Self {
        Self { channels }
    }

    pub fn channels(&self) -> &'a [ChannelRecord] {
        self.channels
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn get(&self, id: ChannelId) -> Option<&'a ChannelRecord> {
        self.channels.iter().find(|channel| channel.id == id)
    }

    /// Reports authoring defects. A well-formed table always passes.
    pub fn check(&self) -> Result<(), CatalogError> {
        if self.channels.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen: HashSet<ChannelId> = HashSet::with_capacity(self.channels.len());
        for channel in self.channels {
            if channel.category == ALL_CATEGORIES {
                return Err(CatalogError::ReservedCategory {
                    id: channel.id,
                    name: channel.name,
                });
            }
            if !seen.insert(channel.id) {
                let first = self
                    .channels
                    .iter()
                    .find(|other| other.id == channel.id)
                    .map_or("", |other| other.name);
                return Err(CatalogError::DuplicateId {
                    id: channel.id,
                    first,
                    second: channel.name,
                });
            }
        }
        Ok(())
    }
}

impl Default for Catalog<'static> {
    fn default() -> Self {
        Self::new(NEWS_CHANNELS)
    }
}

const fn channel(
    id: ChannelId,
    name: &'static str,
    url: &'static str,
    category: &'static str,
    description: &'static str,
) -> ChannelRecord {
    ChannelRecord {
        id,
        name,
        url,
        category,
        description,
    }
}

/// The directory as shipped, in display order.
pub static NEWS_CHANNELS: &[ChannelRecord] = &[
    channel(1, "CNN", "https://www.cnn.com", "Global", "Breaking news and analysis"),
    channel(2, "BBC News", "https://www.bbc.com/news", "Global", "World news coverage"),
    channel(3, "Reuters", "https://www.reuters.com", "Global", "International news agency"),
    channel(4, "Al Jazeera", "https://www.aljazeera.com", "Global", "Middle East perspectives"),
    channel(5, "The Guardian", "https://www.theguardian.com", "Global", "Independent journalism"),
    channel(6, "Fox News", "https://www.foxnews.com", "US", "American news network"),
    channel(7, "NBC News", "https://www.nbcnews.com", "US", "Breaking US news"),
    channel(8, "ABC News", "https://abcnews.go.com", "US", "National and world news"),
    channel(9, "CBS News", "https://www.cbsnews.com", "US", "American news reporting"),
    channel(10, "NPR", "https://www.npr.org", "US", "Public radio journalism"),
    channel(11, "Sky News", "https://news.sky.com", "UK", "British news channel"),
    channel(12, "Financial Times", "https://www.ft.com", "Business", "Global business news"),
    channel(13, "Bloomberg", "https://www.bloomberg.com", "Business", "Financial markets coverage"),
    channel(14, "CNBC", "https://www.cnbc.com", "Business", "Business news network"),
    channel(15, "Associated Press", "https://apnews.com", "Global", "Independent news organization"),
    channel(16, "France 24", "https://www.france24.com", "Global", "International news"),
    channel(17, "DW News", "https://www.dw.com", "Global", "German international broadcaster"),
    channel(18, "NHK World", "https://www3.nhk.or.jp/nhkworld/", "Global", "Japan broadcasting"),
];
