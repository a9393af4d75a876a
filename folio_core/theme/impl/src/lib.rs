use std::sync::Arc;

use folio_core_theme_contracts::ThemeService;
use folio_models::theme::Theme;
use tokio::sync::watch;
use tracing::debug;

/// Holds the single current theme. Clones share the same value.
#[derive(Debug, Clone)]
pub struct ThemeServiceImpl {
    theme: Arc<watch::Sender<Theme>>,
}

impl ThemeServiceImpl {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: Arc::new(watch::Sender::new(initial)),
        }
    }

    /// Returns a receiver that is notified on every theme change, used to
    /// re-render the page.
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.theme.subscribe()
    }
}

impl Default for ThemeServiceImpl {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ThemeService for ThemeServiceImpl {
    fn current(&self) -> Theme {
        *self.theme.borrow()
    }

    fn toggle(&self) -> Theme {
        self.theme.send_modify(|theme| *theme = theme.toggled());
        let theme = self.current();
        debug!(%theme, "toggled theme");
        theme
    }
}
