#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search box. Sent on every keystroke, not debounced.
    SearchChanged(String),
    /// User cleared the search box in one action.
    SearchCleared,
    /// User activated a category control; carries the control's label.
    CategorySelected(String),
    /// User activated a channel card.
    ChannelActivated { id: crate::ChannelId },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
