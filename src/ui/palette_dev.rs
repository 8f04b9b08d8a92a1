//! Color palette developer overlay
//!
//! Floating panel in the bottom-right corner. When closed only the
//! "Color Dev" trigger is drawn.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::{app::App, theme::Theme};
use crate::palette::tool::Swatch;
use crate::palette::{PresetId, Role};

pub const TRIGGER_LABEL: &str = " ◐ Color Dev ";
const PANEL_WIDTH: u16 = 44;
const PANEL_MAX_HEIGHT: u16 = 32;
const SWATCH_COLUMNS: usize = 2;
const DEFAULT_HEX: &str = "#000000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Preset,
    Name,
    Value,
    Role(Role),
    Reset,
    Export,
}

const FOCUS_ORDER: [Focus; 11] = [
    Focus::Preset,
    Focus::Name,
    Focus::Value,
    Focus::Role(Role::Primary),
    Focus::Role(Role::Secondary),
    Focus::Role(Role::Accent),
    Focus::Role(Role::Muted),
    Focus::Role(Role::Background),
    Focus::Role(Role::Foreground),
    Focus::Reset,
    Focus::Export,
];

#[derive(Debug, Clone)]
pub struct PaletteDevState {
    pub focus_index: usize,
    /// Highlighted swatch within the focused role row
    pub swatch_cursor: usize,
    pub name_input: String,
    pub value_input: String,
    pub scroll_offset: usize,
}

impl Default for PaletteDevState {
    fn default() -> Self {
        Self {
            focus_index: 0,
            swatch_cursor: 0,
            name_input: String::new(),
            value_input: DEFAULT_HEX.to_string(),
            scroll_offset: 0,
        }
    }
}

impl PaletteDevState {
    pub fn focus(&self) -> Focus {
        FOCUS_ORDER[self.focus_index % FOCUS_ORDER.len()]
    }

    /// The add button is disabled while the name or value is blank
    pub fn can_add(&self) -> bool {
        !self.name_input.trim().is_empty() && !self.value_input.trim().is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Input
// ═══════════════════════════════════════════════════════════════════════════════

fn move_focus(app: &mut App, delta: isize) {
    let len = FOCUS_ORDER.len() as isize;
    let next = (app.dev_state.focus_index as isize + delta).rem_euclid(len) as usize;
    app.dev_state.focus_index = next;

    // Land on the swatch currently assigned to the role
    if let Focus::Role(role) = app.dev_state.focus() {
        let assigned = app.tool.assignments().get(role).to_string();
        app.dev_state.swatch_cursor = app
            .tool
            .available_colors()
            .iter()
            .position(|s| s.key == assigned)
            .unwrap_or(0);
    }
}

fn submit_custom_color(app: &mut App) {
    let state = &mut app.dev_state;
    if app.tool.add_custom_color(&state.name_input, &state.value_input).is_some() {
        state.name_input.clear();
        state.value_input = DEFAULT_HEX.to_string();
    }
}

/// Handle keyboard input while the overlay is open.
/// Returns true if the key was consumed.
pub fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match code {
        KeyCode::Esc => {
            app.close_palette();
            return true;
        }
        KeyCode::Up | KeyCode::BackTab => {
            move_focus(app, -1);
            return true;
        }
        KeyCode::Down | KeyCode::Tab => {
            move_focus(app, 1);
            return true;
        }
        _ => {}
    }

    match app.dev_state.focus() {
        Focus::Preset => match code {
            KeyCode::Left => app.tool.select_preset(PresetId::Preset1),
            KeyCode::Right => app.tool.select_preset(PresetId::Preset2),
            KeyCode::Char('1') => app.tool.select_preset(PresetId::Preset1),
            KeyCode::Char('2') => app.tool.select_preset(PresetId::Preset2),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let next = match app.tool.preset() {
                    PresetId::Preset1 => PresetId::Preset2,
                    PresetId::Preset2 => PresetId::Preset1,
                };
                app.tool.select_preset(next);
            }
            _ => return false,
        },
        Focus::Name | Focus::Value if code == KeyCode::Enter => submit_custom_color(app),
        focus @ (Focus::Name | Focus::Value) => {
            let input = if focus == Focus::Name {
                &mut app.dev_state.name_input
            } else {
                &mut app.dev_state.value_input
            };
            match code {
                KeyCode::Char(c) => input.push(c),
                KeyCode::Backspace => {
                    input.pop();
                }
                _ => return false,
            }
        }
        Focus::Role(role) => {
            let swatches = app.tool.available_colors();
            let count = swatches.len();
            let cursor = app.dev_state.swatch_cursor.min(count.saturating_sub(1));
            match code {
                KeyCode::Left => app.dev_state.swatch_cursor = cursor.saturating_sub(1),
                KeyCode::Right => app.dev_state.swatch_cursor = (cursor + 1).min(count.saturating_sub(1)),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Some(swatch) = swatches.get(cursor) {
                        app.tool.assign_role(role, &swatch.key);
                    }
                }
                KeyCode::Delete | KeyCode::Char('x') | KeyCode::Char('X') => {
                    if let Some(swatch) = swatches.get(cursor).filter(|s| app.tool.is_custom(&s.key)) {
                        app.tool.remove_custom_color(&swatch.key);
                        let remaining = app.tool.available_colors().len();
                        app.dev_state.swatch_cursor = cursor.min(remaining.saturating_sub(1));
                    }
                }
                _ => return false,
            }
        }
        Focus::Reset => match code {
            KeyCode::Enter | KeyCode::Char(' ') => app.tool.reset_to_defaults(),
            _ => return false,
        },
        Focus::Export => match code {
            KeyCode::Enter | KeyCode::Char(' ') => app.export_to_clipboard(),
            _ => return false,
        },
    }
    true
}

// ═══════════════════════════════════════════════════════════════════════════════
// Drawing
// ═══════════════════════════════════════════════════════════════════════════════

/// Truncate to a display width, appending "…" when cut
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn button<'a>(label: &str, focused: bool, active: bool, theme: &Theme) -> Span<'a> {
    let mut style = Style::default().fg(theme.dev.text);
    if active {
        style = style.fg(theme.dev.trigger_text).bg(theme.dev.selected);
    }
    if focused {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    Span::styled(format!("[ {} ]", label), style)
}

fn section_label<'a>(text: &str, focused: bool, theme: &Theme) -> Line<'a> {
    let marker = if focused { "▸ " } else { "  " };
    Line::from(Span::styled(
        format!("{}{}", marker, text),
        Style::default().fg(theme.dev.text).add_modifier(Modifier::BOLD),
    ))
}

fn input_line<'a>(label: &str, value: &str, focused: bool, placeholder: &str, theme: &Theme) -> Vec<Span<'a>> {
    let (shown, fg) = if value.is_empty() {
        (placeholder.to_string(), theme.dev.text_dim)
    } else {
        (value.to_string(), theme.dev.text)
    };
    let mut spans = vec![
        Span::styled(format!("  {:<5}", label), Style::default().fg(theme.dev.text_dim)),
        Span::styled(format!(" {} ", truncate_to_width(&shown, 20)), Style::default().fg(fg).bg(theme.dev.input_bg)),
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(theme.dev.selected)));
    }
    spans
}

fn swatch_lines<'a>(
    swatches: &[Swatch],
    assigned: &str,
    cursor: Option<usize>,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let cell_width = (PANEL_WIDTH as usize - 6) / SWATCH_COLUMNS;
    swatches
        .chunks(SWATCH_COLUMNS)
        .enumerate()
        .map(|(row, chunk)| {
            let mut spans = vec![Span::raw("  ")];
            for (col, swatch) in chunk.iter().enumerate() {
                let index = row * SWATCH_COLUMNS + col;
                let is_assigned = swatch.key == assigned;
                let is_cursor = cursor == Some(index);

                let mut label_style = Style::default().fg(theme.dev.text);
                if is_assigned {
                    label_style = label_style.fg(theme.dev.selected).add_modifier(Modifier::BOLD);
                }
                if is_cursor {
                    label_style = label_style.bg(theme.dev.cursor_bg).add_modifier(Modifier::UNDERLINED);
                }

                let suffix_width = if swatch.is_custom { 2 } else { 0 };
                let name_width = cell_width.saturating_sub(4 + suffix_width);
                let name = truncate_to_width(&swatch.color.name, name_width);
                let pad = name_width.saturating_sub(name.width());

                spans.push(Span::styled(
                    if is_assigned { "●" } else { " " },
                    Style::default().fg(theme.dev.selected),
                ));
                spans.push(Span::styled("■ ", Style::default().fg(theme.swatch(&swatch.color.value))));
                spans.push(Span::styled(name, label_style));
                if swatch.is_custom {
                    spans.push(Span::styled(" ×", Style::default().fg(theme.dev.remove)));
                }
                spans.push(Span::raw(" ".repeat(pad + 1)));
            }
            Line::from(spans)
        })
        .collect()
}

/// Build panel content. Returns the lines and the line index of the focused row.
fn build_content<'a>(app: &App, theme: &Theme) -> (Vec<Line<'a>>, usize) {
    let state = &app.dev_state;
    let focus = state.focus();
    let mut lines: Vec<Line> = Vec::new();
    let mut focus_line = 0;

    // Preset selector
    if focus == Focus::Preset {
        focus_line = lines.len();
    }
    lines.push(section_label("Color Preset:", focus == Focus::Preset, theme));
    let mut preset_spans = vec![Span::raw("  ")];
    for preset in PresetId::ALL {
        preset_spans.push(button(preset.label(), false, app.tool.preset() == preset, theme));
        preset_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(preset_spans));
    lines.push(Line::from(""));

    // Custom color form
    if matches!(focus, Focus::Name | Focus::Value) {
        focus_line = lines.len();
    }
    lines.push(section_label("Add Custom Color:", matches!(focus, Focus::Name | Focus::Value), theme));
    lines.push(Line::from(input_line("Name", &state.name_input, focus == Focus::Name, "Color name", theme)));
    let mut value_spans = input_line("Hex", &state.value_input, focus == Focus::Value, DEFAULT_HEX, theme);
    value_spans.insert(1, Span::styled("■", Style::default().fg(theme.swatch(&state.value_input))));
    let add_style = if state.can_add() {
        Style::default().fg(theme.dev.trigger_text).bg(theme.dev.selected)
    } else {
        Style::default().fg(theme.dev.text_dim)
    };
    value_spans.push(Span::raw(" "));
    value_spans.push(Span::styled(" + ", add_style));
    lines.push(Line::from(value_spans));
    lines.push(Line::from(""));

    // Role assignments
    let swatches = app.tool.available_colors();
    for (role, assigned) in app.tool.assignments().iter() {
        let focused = focus == Focus::Role(role);
        if focused {
            focus_line = lines.len();
        }
        lines.push(section_label(&format!("{}:", role.label()), focused, theme));
        let cursor = focused.then_some(state.swatch_cursor);
        lines.extend(swatch_lines(&swatches, assigned, cursor, theme));
    }
    lines.push(Line::from(""));

    // Actions
    if matches!(focus, Focus::Reset | Focus::Export) {
        focus_line = lines.len();
    }
    lines.push(Line::from(vec![
        Span::raw("  "),
        button("↺ Reset", focus == Focus::Reset, false, theme),
        Span::raw("  "),
        button("Copy Config", focus == Focus::Export, false, theme),
    ]));

    (lines, focus_line)
}

pub fn panel_area(area: Rect) -> Rect {
    let width = PANEL_WIDTH.min(area.width.saturating_sub(2));
    let height = PANEL_MAX_HEIGHT.min(area.height.saturating_sub(2));
    Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    )
}

fn draw_trigger(frame: &mut Frame, area: Rect, theme: &Theme) {
    let width = (TRIGGER_LABEL.width() as u16).min(area.width);
    if area.height == 0 || width == 0 {
        return;
    }
    let rect = Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + area.height - 1,
        width,
        1,
    );
    let trigger = Paragraph::new(TRIGGER_LABEL).style(
        Style::default()
            .fg(theme.dev.trigger_text)
            .bg(theme.dev.trigger_bg)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(trigger, rect);
}

/// Draw the overlay, or only its trigger when closed
pub fn draw(frame: &mut Frame, app: &mut App, area: Rect, theme: &Theme) {
    if !app.tool.is_open() {
        draw_trigger(frame, area, theme);
        return;
    }

    let panel = panel_area(area);
    if panel.width < 20 || panel.height < 6 {
        return;
    }

    let (lines, focus_line) = build_content(app, theme);
    let total_lines = lines.len();
    // borders + hint line
    let visible_height = panel.height.saturating_sub(3) as usize;
    let max_scroll = total_lines.saturating_sub(visible_height);

    // Keep the focused row (and the line below it) in view
    let state = &mut app.dev_state;
    if focus_line < state.scroll_offset {
        state.scroll_offset = focus_line;
    } else if focus_line + 2 > state.scroll_offset + visible_height {
        state.scroll_offset = (focus_line + 2).saturating_sub(visible_height);
    }
    state.scroll_offset = state.scroll_offset.min(max_scroll);

    frame.render_widget(Clear, panel);

    let block = Block::default()
        .title(" ◐ Color Palette Dev ")
        .title_style(Style::default().fg(theme.dev.text).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dev.panel_border))
        .style(Style::default().bg(theme.dev.panel_bg));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let body = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    let paragraph = Paragraph::new(lines).scroll((state.scroll_offset as u16, 0));
    frame.render_widget(paragraph, body);

    let hint = Paragraph::new(Line::from(Span::styled(
        "↑↓ move ←→ pick ⏎ apply x remove Esc close",
        Style::default().fg(theme.dev.text_dim),
    )));
    frame.render_widget(hint, Rect::new(inner.x, inner.y + body.height, inner.width, 1));

    if total_lines > visible_height {
        let scrollbar_area = Rect::new(
            panel.x + panel.width - 1,
            panel.y + 1,
            1,
            panel.height.saturating_sub(2),
        );
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("^"))
            .end_symbol(Some("v"));
        let mut scrollbar_state = ScrollbarState::new(max_scroll + 1).position(state.scroll_offset);
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}
