//! Interactive terminal browser for the directory.
//!
//! Every key press is translated into a `Msg` and applied synchronously with
//! `directory_core::update` before the next event is read, so the card list
//! always reflects the latest keystroke.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use directory_core::{update, AppState, AppViewModel, ChannelCard, Msg};
use directory_logging::{directory_info, directory_trace};
use directory_site::PageOptions;
use ratatui::{backend::CrosstermBackend, widgets::ListState, Terminal};

use super::effects::{EffectRunner, UrlOpener};
use super::ui;

pub struct App<O: UrlOpener> {
    /// Only `None` while `dispatch` has handed the state to `update`.
    state: Option<AppState>,
    pub(crate) view: AppViewModel,
    pub(crate) list_state: ListState,
    page: PageOptions,
    effects: EffectRunner<O>,
    status: Option<String>,
    should_quit: bool,
}

impl<O: UrlOpener> App<O> {
    pub fn new(state: AppState, opener: O, page: PageOptions) -> Self {
        let view = state.view();
        let mut app = Self {
            state: Some(state),
            view,
            list_state: ListState::default(),
            page,
            effects: EffectRunner::new(opener),
            status: None,
            should_quit: false,
        };
        app.reset_selection();
        app
    }

    pub fn view(&self) -> &AppViewModel {
        &self.view
    }

    pub fn page(&self) -> &PageOptions {
        &self.page
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn selected_card(&self) -> Option<&ChannelCard> {
        self.list_state
            .selected()
            .and_then(|index| self.view.cards.get(index))
    }

    /// Applies `msg`, runs the resulting effects, and refreshes the view when
    /// the state changed.
    pub fn dispatch(&mut self, msg: Msg) {
        directory_trace!("dispatch {:?}", msg);
        let Some(state) = self.state.take() else {
            return;
        };
        let (mut state, effects) = update(state, msg);

        if !effects.is_empty() {
            if let Some(notice) = self.effects.run(effects).pop() {
                self.status = Some(notice);
            }
        }

        if state.consume_dirty() {
            self.view = state.view();
            self.reset_selection();
            self.status = None;
        }
        self.state = Some(state);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.should_quit = true,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => self.should_quit = true,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.dispatch(Msg::SearchCleared),
            (KeyCode::Tab, _) => self.cycle_category(true),
            (KeyCode::BackTab, _) => self.cycle_category(false),
            (KeyCode::Up, _) => self.select_prev(),
            (KeyCode::Down, _) => self.select_next(),
            (KeyCode::Enter, _) => {
                if let Some(id) = self.selected_card().map(|card| card.id) {
                    self.dispatch(Msg::ChannelActivated { id });
                }
            }
            (KeyCode::Backspace, _) => {
                let mut text = self.view.search_text.clone();
                if text.pop().is_some() {
                    self.dispatch(Msg::SearchChanged(text));
                }
            }
            (KeyCode::Char(ch), modifiers)
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut text = self.view.search_text.clone();
                text.push(ch);
                self.dispatch(Msg::SearchChanged(text));
            }
            _ => {}
        }
    }

    fn cycle_category(&mut self, forward: bool) {
        let chips = &self.view.categories;
        if chips.is_empty() {
            return;
        }
        let current = chips.iter().position(|chip| chip.selected).unwrap_or(0);
        let next = if forward {
            (current + 1) % chips.len()
        } else {
            (current + chips.len() - 1) % chips.len()
        };
        let label = chips[next].label.clone();
        self.dispatch(Msg::CategorySelected(label));
    }

    fn select_prev(&mut self) {
        if let Some(current) = self.list_state.selected() {
            if current > 0 {
                self.list_state.select(Some(current - 1));
            }
        }
    }

    fn select_next(&mut self) {
        if let Some(current) = self.list_state.selected() {
            if current + 1 < self.view.cards.len() {
                self.list_state.select(Some(current + 1));
            }
        }
    }

    fn reset_selection(&mut self) {
        let first = (!self.view.cards.is_empty()).then_some(0);
        self.list_state.select(first);
    }
}

/// Run the terminal browser until the user quits.
pub fn run<O: UrlOpener>(state: AppState, opener: O, page: PageOptions) -> Result<()> {
    enable_raw_mode().context("enabling raw terminal mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(state, opener, page);
    directory_info!("browser started with {} channels", app.view().total_channels);

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    directory_info!("browser closed");
    result
}

fn run_loop<O: UrlOpener>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<O>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render::render(f, app))?;

        if event::poll(Duration::from_millis(ui::constants::POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        } else {
            app.dispatch(Msg::Tick);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
