use folio_models::theme::Theme;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ThemeService: Send + Sync + 'static {
    /// Return the theme currently applied to the page.
    fn current(&self) -> Theme;

    /// Switch between dark and light and return the new theme.
    fn toggle(&self) -> Theme;
}

#[cfg(feature = "mock")]
impl MockThemeService {
    pub fn with_current(mut self, result: Theme) -> Self {
        self.expect_current().once().return_const(result);
        self
    }

    pub fn with_toggle(mut self, result: Theme) -> Self {
        self.expect_toggle().once().return_const(result);
        self
    }
}
