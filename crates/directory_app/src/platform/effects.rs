use std::io;

use directory_core::Effect;
use directory_logging::{directory_info, directory_warn};

/// Launches URLs outside the terminal.
pub trait UrlOpener {
    fn open(&mut self, url: &str) -> io::Result<()>;
}

/// Hands URLs to the platform's default browser as a detached process, so the
/// browser window holds no handle back to the directory.
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&mut self, url: &str) -> io::Result<()> {
        open::that_detached(url)
    }
}

pub struct EffectRunner<O: UrlOpener> {
    opener: O,
}

impl<O: UrlOpener> EffectRunner<O> {
    pub fn new(opener: O) -> Self {
        Self { opener }
    }

    /// Executes `effects` in order and returns one status line per effect.
    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<String> {
        let mut notices = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                Effect::OpenUrl { url } => match self.opener.open(&url) {
                    Ok(()) => {
                        directory_info!("OpenUrl url={}", url);
                        notices.push(format!("Opened {url}"));
                    }
                    Err(err) => {
                        directory_warn!("OpenUrl failed url={} err={}", url, err);
                        notices.push(format!("Could not open {url}: {err}"));
                    }
                },
            }
        }
        notices
    }

    #[cfg(test)]
    pub fn opener(&self) -> &O {
        &self.opener
    }
}
