use std::path::{Path, PathBuf};

use directory_core::{categories, Catalog, CatalogError, ChannelRecord};
use directory_logging::{directory_debug, directory_info};
use serde::Serialize;

use crate::page::{render_page, PageOptions};
use crate::persist::{AtomicFileWriter, PersistError};

#[derive(Debug, Clone)]
pub struct SiteOptions {
    pub page: PageOptions,
    pub index_filename: String,
    pub manifest_filename: Option<String>,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            page: PageOptions::default(),
            index_filename: "index.html".to_string(),
            manifest_filename: Some("channels.json".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    pub channel_count: usize,
    pub category_count: usize,
    pub index_path: PathBuf,
    pub manifest_path: Option<PathBuf>,
    pub bytes_written: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("catalog rejected: {0}")]
    Catalog(#[from] CatalogError),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
    #[error("manifest serialization failed: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("page template failed: {0}")]
    Template(#[from] minijinja::Error),
}

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    channel_count: usize,
    categories: Vec<&'a str>,
    channels: &'a [ChannelRecord],
}

/// Writes the directory page, and the JSON manifest when configured, into
/// `output_dir`.
pub fn build_site(
    output_dir: &Path,
    catalog: Catalog<'_>,
    options: &SiteOptions,
) -> Result<SiteSummary, SiteError> {
    catalog.check()?;

    let writer = AtomicFileWriter::new(output_dir.to_path_buf());
    let labels = categories(catalog);
    // The leading "All" control is not a category.
    let category_count = labels.len() - 1;

    let page = render_page(catalog, &options.page)?;
    let index = writer.write(&options.index_filename, &page)?;
    let mut bytes_written = index.bytes;

    let manifest_path = match &options.manifest_filename {
        Some(name) => {
            let manifest = Manifest {
                channel_count: catalog.len(),
                categories: labels[1..].to_vec(),
                channels: catalog.channels(),
            };
            let content = serde_json::to_string_pretty(&manifest)?;
            let written = writer.write(name, &content)?;
            bytes_written += written.bytes;
            Some(written.path)
        }
        None => {
            directory_debug!("manifest disabled; only {:?} written", index.path);
            None
        }
    };

    directory_info!(
        "built site in {:?}: {} channels, {} categories, {} bytes",
        writer.dir(),
        catalog.len(),
        category_count,
        bytes_written
    );

    Ok(SiteSummary {
        channel_count: catalog.len(),
        category_count,
        index_path: index.path,
        manifest_path,
        bytes_written,
    })
}
