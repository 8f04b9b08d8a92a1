use ratatui::{
    backend::TestBackend,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use unicode_width::UnicodeWidthStr;

use super::{app::App, dialogs, landing, not_found, palette_dev};
use crate::content::Route;
use crate::error::{Result, SiteError};

pub fn draw(frame: &mut Frame, app: &mut App) {
    // Rebuilt every frame so palette changes show immediately
    let theme = app.theme();
    let area = frame.area();

    // Check if terminal is too large for ratatui buffer
    if (area.width as u32 * area.height as u32) > 65534 {
        let msg = Paragraph::new("Terminal too large. Please resize smaller.")
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(msg, Rect::new(0, 0, area.width.min(80), 1));
        return;
    }

    // Fill entire screen with background color first
    frame.render_widget(Block::default().style(theme.body()), area);

    match app.route {
        Route::Home => landing::draw(frame, app, area, &theme),
        Route::NotFound => not_found::draw(frame, area, &theme),
    }

    if app.palette_enabled() {
        palette_dev::draw(frame, app, area, &theme);
    }

    if let Some(ref alert) = app.alert {
        dialogs::draw_alert(frame, alert, area, &theme);
    }
}

/// Draws one frame into an in-memory buffer and returns it as plain text
pub fn render_to_string(app: &mut App, width: u16, height: u16) -> Result<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|frame| draw(frame, app))?;

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    if width == 0 {
        return Err(SiteError::Other("render area has zero width".to_string()));
    }

    let mut out = String::new();
    for row in buffer.content.chunks(width) {
        let mut line = String::new();
        let mut skip = 0;
        for cell in row {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = cell.symbol();
            line.push_str(symbol);
            // Wide glyphs occupy trailing placeholder cells
            skip = symbol.width().saturating_sub(1);
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Ok(out)
}
