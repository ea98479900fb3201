/// Side effects requested by `update`, executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open `url` in a new browsing context that holds no reference back to
    /// the directory.
    OpenUrl { url: String },
}
