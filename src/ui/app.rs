use crate::config::Settings;
use crate::content::{Language, Route, Translation, TranslationTable};
use crate::palette::{RootStyle, ThemeTool};
use crate::services::clipboard::{copy_theme_config, ClipboardSink, SystemClipboard};
use crate::ui::palette_dev::PaletteDevState;
use crate::ui::theme::{ColorMode, Theme};

/// Blocking acknowledgement; any key dismisses it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub is_error: bool,
}

pub struct App {
    pub settings: Settings,
    pub table: TranslationTable,
    pub language: Language,
    pub route: Route,
    pub image_base: String,
    pub tool: ThemeTool<RootStyle>,
    pub dev_state: PaletteDevState,
    pub alert: Option<Alert>,
    pub color_mode: ColorMode,
    clipboard: Box<dyn ClipboardSink>,
}

impl App {
    pub fn new(settings: Settings, table: TranslationTable, color_mode: ColorMode) -> Self {
        let image_base = settings.image_base();
        let language = settings.default_language;
        Self {
            settings,
            table,
            language,
            route: Route::Home,
            image_base,
            tool: ThemeTool::mount(RootStyle::new()),
            dev_state: PaletteDevState::default(),
            alert: None,
            color_mode,
            clipboard: Box::new(SystemClipboard::new()),
        }
    }

    #[cfg(test)]
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardSink>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn text(&self) -> &Translation {
        self.table.get(self.language)
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        tracing::debug!(language = %self.language, "language toggled");
    }

    pub fn navigate(&mut self, path: &str) {
        self.route = Route::resolve(path, &self.settings.site.base_path);
    }

    pub fn palette_enabled(&self) -> bool {
        self.settings.dev.palette_tool
    }

    pub fn open_palette(&mut self) {
        if self.palette_enabled() {
            self.tool.set_open(true);
        }
    }

    pub fn close_palette(&mut self) {
        self.tool.set_open(false);
    }

    /// Theme for the next frame, rebuilt from the current root style
    pub fn theme(&self) -> Theme {
        Theme::from_style(self.tool.surface(), self.color_mode)
    }

    pub fn export_to_clipboard(&mut self) {
        let alert = match copy_theme_config(&self.tool, self.clipboard.as_mut()) {
            Ok(ack) => Alert {
                message: ack.to_string(),
                is_error: false,
            },
            Err(e) => {
                tracing::warn!(error = %e, "theme config export failed");
                Alert {
                    message: e.to_string(),
                    is_error: true,
                }
            }
        };
        self.alert = Some(alert);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::{Result, SiteError};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    pub struct SharedClipboard(pub Rc<RefCell<Option<String>>>);

    impl ClipboardSink for SharedClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            *self.0.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    struct NoClipboard;

    impl ClipboardSink for NoClipboard {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            Err(SiteError::Clipboard("unavailable".to_string()))
        }
    }

    pub fn test_app() -> App {
        let table = TranslationTable::load().unwrap();
        App::new(Settings::default(), table, ColorMode::TrueColor)
            .with_clipboard(Box::new(SharedClipboard::default()))
    }

    #[test]
    fn test_initial_state() {
        let app = test_app();
        assert_eq!(app.language, Language::En);
        assert_eq!(app.route, Route::Home);
        assert!(!app.tool.is_open());
        assert!(app.alert.is_none());
        assert_eq!(app.text().welcome, "Welcome to Baan Rai Nai Fun");
    }

    #[test]
    fn test_toggle_language_twice() {
        let mut app = test_app();
        let before = app.text().clone();
        app.toggle_language();
        assert_eq!(app.language, Language::Th);
        app.toggle_language();
        assert_eq!(app.text(), &before);
    }

    #[test]
    fn test_navigate() {
        let mut app = test_app();
        app.navigate("/baanrainaifun/missing");
        assert_eq!(app.route, Route::NotFound);
        app.navigate("/baanrainaifun/");
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn test_palette_disabled_stays_closed() {
        let mut settings = Settings::default();
        settings.dev.palette_tool = false;
        let mut app = App::new(settings, TranslationTable::load().unwrap(), ColorMode::TrueColor);
        app.open_palette();
        assert!(!app.tool.is_open());
        // Theme still applied on mount
        assert_eq!(app.tool.surface().get("--primary"), Some("#0A400C"));
    }

    #[test]
    fn test_export_shows_ack() {
        let clipboard = SharedClipboard::default();
        let mut app = test_app().with_clipboard(Box::new(clipboard.clone()));
        app.export_to_clipboard();
        assert_eq!(
            app.alert,
            Some(Alert {
                message: "Tailwind color config copied to clipboard!".to_string(),
                is_error: false,
            })
        );
        assert!(clipboard.0.borrow().as_deref().unwrap().contains("\"primary\": \"#0A400C\""));
        app.dismiss_alert();
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_export_failure_shows_error() {
        let mut app = test_app().with_clipboard(Box::new(NoClipboard));
        app.export_to_clipboard();
        let alert = app.alert.unwrap();
        assert!(alert.is_error);
        assert!(alert.message.contains("unavailable"));
    }
}
