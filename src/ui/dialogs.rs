use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::{app::Alert, theme::Theme};

const ALERT_MIN_WIDTH: u16 = 30;
const ALERT_MAX_WIDTH: u16 = 60;
const ALERT_HEIGHT: u16 = 6;

/// Centered acknowledgement box drawn over everything else
pub fn draw_alert(frame: &mut Frame, alert: &Alert, area: Rect, theme: &Theme) {
    let wanted = alert.message.width() as u16 + 6;
    let width = wanted.clamp(ALERT_MIN_WIDTH, ALERT_MAX_WIDTH).min(area.width);
    let height = ALERT_HEIGHT.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let dialog_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, dialog_area);

    let (title, accent) = if alert.is_error {
        (" Error ", theme.dev.remove)
    } else {
        (" Color Dev ", theme.dev.selected)
    };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(theme.dev.panel_bg));

    let lines = vec![
        Line::from(Span::styled(alert.message.clone(), Style::default().fg(theme.dev.text))),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(theme.dev.trigger_text)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, dialog_area);
}
