//! Directory site: renders the catalog to a static single page and writes it out.
mod export;
mod page;
mod persist;

pub use export::{build_site, SiteError, SiteOptions, SiteSummary};
pub use page::{render_page, PageOptions};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError, WrittenFile};
