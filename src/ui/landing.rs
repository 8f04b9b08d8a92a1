//! Landing page: header, hero, three cards, footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{app::App, theme::Theme};
use crate::content::{Section, BRAND_EN, BRAND_TH, COPYRIGHT, LOCATION};

pub fn draw(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(7),     // Hero
            Constraint::Length(11), // Cards
            Constraint::Length(4),  // Footer
        ])
        .split(area);

    draw_header(frame, app, chunks[0], theme);
    draw_hero(frame, app, chunks[1], theme);
    draw_cards(frame, app, chunks[2], theme);
    draw_footer(frame, app, chunks[3], theme);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.page.secondary))
        .style(theme.body());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(inner);

    let brand = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(" ❦ ", Style::default().fg(theme.page.accent)),
            Span::styled(BRAND_EN, theme.heading()),
        ]),
        Line::from(Span::styled(format!("   {}", BRAND_TH), Style::default().fg(theme.page.secondary))),
    ]);
    frame.render_widget(brand, cols[0]);

    let toggle = Paragraph::new(Line::from(Span::styled(
        format!(" ⊕ {} ", app.language.toggle_label()),
        Style::default()
            .fg(theme.page.primary)
            .bg(theme.page.muted)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(toggle, cols[1]);
}

fn draw_hero(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let t = app.text();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(t.welcome.clone(), theme.heading())),
        Line::from(""),
        Line::from(Span::styled(
            t.subtitle.clone(),
            Style::default().fg(theme.page.foreground).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(t.description.clone(), Style::default().fg(theme.page.foreground))),
        Line::from(""),
        Line::from(Span::styled("──── ☕ ────", Style::default().fg(theme.page.accent))),
    ];

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(theme.body());
    frame.render_widget(hero, area);
}

fn draw_cards(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let t = app.text();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(1, 3), Constraint::Ratio(1, 3)])
        .split(area);

    for (section, col) in Section::ALL.into_iter().zip(cols.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.page.secondary))
            .style(theme.body());

        let lines = vec![
            Line::from(Span::styled(
                format!("▣ {}", section.image_url(&app.image_base)),
                Style::default().fg(theme.page.accent),
            )),
            Line::from(Span::styled(
                section.alt_text(),
                Style::default().fg(theme.page.secondary).add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(section.title(t).to_string(), theme.heading())),
            Line::from(""),
            Line::from(Span::styled(
                section.description(t).to_string(),
                Style::default().fg(theme.page.foreground),
            )),
        ];

        let card = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(card, *col);
    }
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.page.secondary))
        .style(Style::default().bg(theme.page.muted).fg(theme.page.muted_fg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let hint = if app.palette_enabled() {
        " l language  c color dev  q quit"
    } else {
        " l language  q quit"
    };
    let brand = Paragraph::new(vec![
        Line::from(Span::styled(format!(" {}", BRAND_EN), theme.heading())),
        Line::from(Span::raw(format!(" {}", BRAND_TH))),
        Line::from(Span::styled(hint, Style::default().add_modifier(Modifier::DIM))),
    ]);
    frame.render_widget(brand, cols[0]);

    // Last row stays free for the "Color Dev" trigger
    let legal = Paragraph::new(vec![
        Line::from(COPYRIGHT),
        Line::from(Span::styled(LOCATION, Style::default().add_modifier(Modifier::DIM))),
    ])
    .alignment(Alignment::Right);
    frame.render_widget(legal, cols[1]);
}
