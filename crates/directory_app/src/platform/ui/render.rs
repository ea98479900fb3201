use directory_core::{AppViewModel, ChannelCard};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::constants::*;
use super::layout;
use crate::platform::app::App;
use crate::platform::effects::UrlOpener;

/// Render the entire UI
pub fn render<O: UrlOpener>(frame: &mut Frame, app: &mut App<O>) {
    let areas = layout::split(frame.area());

    render_header(frame, app, areas.header);
    render_search_input(frame, app, areas.search);
    frame.render_widget(Paragraph::new(category_line(app.view())), areas.categories);
    render_cards(frame, app, areas.cards);
    render_status_bar(frame, app, areas.status);
}

fn render_header<O: UrlOpener>(frame: &mut Frame, app: &App<O>, area: Rect) {
    let page = app.page();
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            page.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            page.tagline.as_str(),
            Style::default().fg(MUTED),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn render_search_input<O: UrlOpener>(frame: &mut Frame, app: &App<O>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Search ");

    let text = &app.view().search_text;
    let content = if text.is_empty() {
        Line::from(Span::styled(
            app.page().search_placeholder.as_str(),
            Style::default().fg(MUTED),
        ))
    } else {
        Line::from(text.as_str())
    };
    frame.render_widget(Paragraph::new(content).block(block), area);

    let typed = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let max_x = area.x + area.width.saturating_sub(2);
    let cursor_x = area.x.saturating_add(1).saturating_add(typed).min(max_x);
    frame.set_cursor_position((cursor_x, area.y + 1));
}

/// One span per category control; the selected one is reversed.
pub fn category_line(view: &AppViewModel) -> Line<'_> {
    let mut spans = Vec::with_capacity(view.categories.len() * 2);
    for chip in &view.categories {
        let style = if chip.selected {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {} ", chip.label), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans).alignment(Alignment::Center)
}

fn render_cards<O: UrlOpener>(frame: &mut Frame, app: &mut App<O>, area: Rect) {
    let title = format!(
        " Channels [{}/{}] ",
        app.view().cards.len(),
        app.view().total_channels
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(title);

    if let Some(message) = app.view().empty_message {
        let empty = Paragraph::new(Line::from(Span::styled(message, Style::default().fg(MUTED))))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Disjoint field borrows: the list reads the view while the state scrolls.
    let items: Vec<ListItem> = app.view.cards.iter().map(card_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

pub fn card_item(card: &ChannelCard) -> ListItem<'_> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                card.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  [{}]", card.category), Style::default().fg(ACCENT)),
        ]),
        Line::from(vec![
            Span::raw(card.description.as_str()),
            Span::styled(format!("  {}", card.url), Style::default().fg(MUTED)),
        ]),
    ])
}

fn render_status_bar<O: UrlOpener>(frame: &mut Frame, app: &App<O>, area: Rect) {
    let text = match app.status() {
        Some(status) => format!(" {status}"),
        None => format!(" {KEY_HINTS}"),
    };
    let status = Paragraph::new(text).style(Style::default().fg(MUTED));
    frame.render_widget(status, area);
}
