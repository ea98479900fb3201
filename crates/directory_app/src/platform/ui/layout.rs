use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub header: Rect,
    pub search: Rect,
    pub categories: Rect,
    pub cards: Rect,
    pub status: Rect,
}

pub fn split(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + tagline
            Constraint::Length(3), // Search input
            Constraint::Length(1), // Category selector
            Constraint::Min(4),    // Cards
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    Areas {
        header: chunks[0],
        search: chunks[1],
        categories: chunks[2],
        cards: chunks[3],
        status: chunks[4],
    }
}
