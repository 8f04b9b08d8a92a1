use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Theme;
use crate::content::routes::{NOT_FOUND_CODE, NOT_FOUND_LINK, NOT_FOUND_TITLE};

pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let top_pad = area.height.saturating_sub(5) / 2;
    let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(NOT_FOUND_CODE, theme.heading())));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        NOT_FOUND_TITLE,
        Style::default().fg(theme.page.secondary),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{} (Enter)", NOT_FOUND_LINK),
        Style::default().fg(theme.page.accent).add_modifier(Modifier::UNDERLINED),
    )));

    let page = Paragraph::new(lines).alignment(Alignment::Center).style(theme.body());
    frame.render_widget(page, area);
}
