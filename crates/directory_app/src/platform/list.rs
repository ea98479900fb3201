use std::io::Write;

use anyhow::{bail, Context, Result};
use directory_core::{update, AppState, AppViewModel, ChannelId, Msg};
use directory_logging::directory_info;

/// Applies a query through the same update path the browser uses.
///
/// Fails when `category` is neither `"All"` nor one of the derived labels.
pub fn query_state(search: &str, category: &str) -> Result<AppState> {
    let (state, _) = update(AppState::new(), Msg::SearchChanged(search.to_string()));
    let (state, _) = update(state, Msg::CategorySelected(category.to_string()));
    if state.query().selected_category.label() != category {
        let known: Vec<String> = state
            .view()
            .categories
            .into_iter()
            .map(|chip| chip.label)
            .collect();
        bail!(
            "unknown category {:?}; expected one of: {}",
            category,
            known.join(", ")
        );
    }
    Ok(state)
}

pub fn query_view(search: &str, category: &str) -> Result<AppViewModel> {
    Ok(query_state(search, category)?.view())
}

pub fn write_text(out: &mut impl Write, view: &AppViewModel) -> Result<()> {
    if let Some(message) = view.empty_message {
        writeln!(out, "{message}")?;
        return Ok(());
    }
    for card in &view.cards {
        writeln!(out, "{:>3}  {} [{}]", card.id, card.name, card.category)?;
        writeln!(out, "     {}", card.description)?;
        writeln!(out, "     {}", card.url)?;
    }
    writeln!(
        out,
        "{} of {} channels",
        view.cards.len(),
        view.total_channels
    )?;
    Ok(())
}

#[derive(serde::Serialize)]
struct JsonCard<'a> {
    id: ChannelId,
    name: &'a str,
    url: &'a str,
    category: &'a str,
    description: &'a str,
}

pub fn write_json(out: &mut impl Write, view: &AppViewModel) -> Result<()> {
    let cards: Vec<JsonCard<'_>> = view
        .cards
        .iter()
        .map(|card| JsonCard {
            id: card.id,
            name: &card.name,
            url: &card.url,
            category: &card.category,
            description: &card.description,
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &cards).context("serializing listing")?;
    writeln!(out)?;
    Ok(())
}

pub fn run(search: &str, category: &str, json: bool) -> Result<()> {
    let view = query_view(search, category)?;
    directory_info!(
        "list search={:?} category={:?} matches={}",
        search,
        category,
        view.cards.len()
    );
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        write_json(&mut out, &view)
    } else {
        write_text(&mut out, &view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render_text(search: &str, category: &str) -> String {
        let view = query_view(search, category).unwrap();
        let mut buf = Vec::new();
        write_text(&mut buf, &view).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_listing_shows_matches_and_count() {
        let text = render_text("public", "US");
        assert_eq!(
            text,
            " 10  NPR [US]\n     Public radio journalism\n     https://www.npr.org\n1 of 18 channels\n"
        );
    }

    #[test]
    fn text_listing_shows_empty_state() {
        assert_eq!(
            render_text("zzz-no-match", "All"),
            "No channels found matching your criteria\n"
        );
    }

    #[test]
    fn json_listing_is_an_array_of_records() {
        let view = query_view("", "Business").unwrap();
        let mut buf = Vec::new();
        write_json(&mut buf, &view).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let names: Vec<&str> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|card| card["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Financial Times", "Bloomberg", "CNBC"]);
    }

    #[test]
    fn unknown_category_is_an_error() {
        let err = query_view("", "Sports").unwrap_err();
        assert!(err.to_string().contains("Global, US, UK, Business"));
        assert!(query_view("", "business").is_err());
    }
}
