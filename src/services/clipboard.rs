use crate::error::{Result, SiteError};
use crate::palette::export::EXPORT_ACK;
use crate::palette::{StyleSurface, ThemeTool};

/// Write-only clipboard target
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard via arboard.
///
/// The handle is opened on first write and kept, since on Linux the
/// contents go away when the last `Clipboard` instance is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| SiteError::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| SiteError::Clipboard("clipboard unavailable".to_string()))
    }

    #[cfg(test)]
    fn is_held(&self) -> bool {
        self.inner.is_some()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.handle()?
            .set_text(text.to_string())
            .map_err(|e| SiteError::Clipboard(e.to_string()))
    }
}

/// Serializes the resolved theme and puts it on the clipboard.
/// Returns the acknowledgement to show the user.
pub fn copy_theme_config<S: StyleSurface>(
    tool: &ThemeTool<S>,
    sink: &mut dyn ClipboardSink,
) -> Result<&'static str> {
    let config = tool.export_config()?;
    sink.write_text(&config)?;
    tracing::info!(bytes = config.len(), "theme config copied to clipboard");
    Ok(EXPORT_ACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{RootStyle, Role};

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
    }

    impl ClipboardSink for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl ClipboardSink for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            Err(SiteError::Clipboard("no display".to_string()))
        }
    }

    #[test]
    fn test_copy_writes_json_and_acknowledges() {
        let mut tool = ThemeTool::mount(RootStyle::new());
        tool.assign_role(Role::Secondary, "cream");
        let mut sink = MemoryClipboard::default();

        let ack = copy_theme_config(&tool, &mut sink).unwrap();
        assert_eq!(ack, "Tailwind color config copied to clipboard!");

        let written: serde_json::Value = serde_json::from_str(sink.contents.as_deref().unwrap()).unwrap();
        assert_eq!(written["secondary"], "#FEFAE0");
        assert_eq!(written["primary"], "#0A400C");
    }

    #[test]
    fn test_system_clipboard_keeps_handle_after_write() {
        let mut clipboard = SystemClipboard::new();
        assert!(!clipboard.is_held());
        // Headless environments have no clipboard; only a successful write is checked
        if clipboard.write_text("{}").is_ok() {
            assert!(clipboard.is_held());
            assert!(clipboard.write_text("{}").is_ok());
            assert!(clipboard.is_held());
        } else {
            assert!(!clipboard.is_held());
        }
    }

    #[test]
    fn test_clipboard_failure_propagates() {
        let tool = ThemeTool::mount(RootStyle::new());
        let err = copy_theme_config(&tool, &mut BrokenClipboard).unwrap_err();
        assert!(matches!(err, SiteError::Clipboard(_)));
    }
}
