use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchChanged(text) => {
            state.set_search_text(text);
            Vec::new()
        }
        Msg::SearchCleared => {
            state.set_search_text(String::new());
            Vec::new()
        }
        Msg::CategorySelected(label) => {
            // Labels outside the derived list leave the selection untouched.
            state.select_category(&label);
            Vec::new()
        }
        Msg::ChannelActivated { id } => match state.visible_channel(id) {
            Some(channel) => vec![Effect::OpenUrl {
                url: channel.url.to_string(),
            }],
            None => Vec::new(),
        },
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
