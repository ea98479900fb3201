//! Single-page HTML rendering of the directory.
//!
//! Every card and category button is rendered up front, and the catalog is
//! embedded as JSON. A short inline script filters that JSON on each `input`
//! event and button click, applying the same predicates as
//! `directory_core::filter_channels`, and hides the cards that drop out.

use directory_core::{categories, Catalog, ALL_CATEGORIES, EMPTY_RESULTS_MESSAGE};
use minijinja::{context, Environment};
use serde::{Deserialize, Serialize};

use crate::export::SiteError;

/// Page copy. Defaults match the published directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageOptions {
    pub title: String,
    pub tagline: String,
    pub footer: String,
    pub search_placeholder: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "News Directory".to_string(),
            tagline: "Your gateway to trusted news sources from around the world".to_string(),
            footer: "Providing quick access to trusted news sources worldwide".to_string(),
            search_placeholder: "Search news channels...".to_string(),
        }
    }
}

// The `.html` suffix turns on HTML auto-escaping for every interpolation.
const TEMPLATE_NAME: &str = "index.html";

/// Renders the complete document with `"All"` selected and an empty search.
pub fn render_page(catalog: Catalog<'_>, options: &PageOptions) -> Result<String, SiteError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template(TEMPLATE_NAME, HTML_TEMPLATE)?;

    let template = env.get_template(TEMPLATE_NAME)?;
    let html = template.render(context! {
        page => options,
        categories => categories(catalog),
        channels => catalog.channels(),
        all_label => ALL_CATEGORIES,
        empty_message => EMPTY_RESULTS_MESSAGE,
        css_styles => CSS_STYLES,
        script => SCRIPT,
    })?;
    Ok(html)
}

const HTML_TEMPLATE: &str = include_str!("page.html.jinja");
const CSS_STYLES: &str = include_str!("page.css");
const SCRIPT: &str = include_str!("page.js");
