use ratatui::style::{Color, Modifier, Style};
use supports_color::Stream;

use crate::palette::color::hex_to_rgb;
use crate::palette::{Role, RootStyle};

/// How resolved hex values reach the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    TrueColor,
    Indexed,
}

impl ColorMode {
    /// Check if terminal supports true color (24-bit RGB)
    pub fn detect() -> Self {
        match supports_color::on(Stream::Stdout) {
            Some(support) if support.has_16m => ColorMode::TrueColor,
            _ => ColorMode::Indexed,
        }
    }

    pub fn color(self, hex: &str) -> Color {
        let Some((r, g, b)) = hex_to_rgb(hex) else {
            return Color::Reset;
        };
        match self {
            ColorMode::TrueColor => Color::Rgb(r, g, b),
            ColorMode::Indexed => Color::Indexed(rgb_to_ansi256(r, g, b)),
        }
    }
}

fn cube_level(v: u8) -> u8 {
    match v {
        0..=47 => 0,
        48..=114 => 1,
        _ => (v - 35) / 40,
    }
}

const CUBE_STEPS: [u8; 6] = [0, 95, 135, 175, 215, 255];

fn dist(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| (x as i32 - y as i32).unsigned_abs();
    d(a.0, b.0).pow(2) + d(a.1, b.1).pow(2) + d(a.2, b.2).pow(2)
}

/// Nearest xterm-256 index (6x6x6 cube or grayscale ramp)
pub fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    let (cr, cg, cb) = (cube_level(r), cube_level(g), cube_level(b));
    let cube_idx = 16 + 36 * cr + 6 * cg + cb;
    let cube_rgb = (
        CUBE_STEPS[cr as usize],
        CUBE_STEPS[cg as usize],
        CUBE_STEPS[cb as usize],
    );

    let avg = ((r as u16 + g as u16 + b as u16) / 3) as u8;
    let gray_level = if avg > 238 { 23 } else { avg.saturating_sub(3) / 10 };
    let gray_value = 8 + 10 * gray_level;
    let gray_idx = 232 + gray_level;

    if dist((r, g, b), (gray_value, gray_value, gray_value)) < dist((r, g, b), cube_rgb) {
        gray_idx
    } else {
        cube_idx
    }
}

/// Page colors resolved from the root style variables
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageColors {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub primary_fg: Color,
    pub secondary: Color,
    pub secondary_fg: Color,
    pub accent: Color,
    pub accent_fg: Color,
    pub muted: Color,
    pub muted_fg: Color,
}

/// Fixed chrome of the developer overlay; not themed
#[derive(Clone, Copy, Debug)]
pub struct DevColors {
    pub trigger_bg: Color,
    pub trigger_text: Color,
    pub panel_bg: Color,
    pub panel_border: Color,
    pub text: Color,
    pub text_dim: Color,
    pub selected: Color,
    pub cursor_bg: Color,
    pub remove: Color,
    pub input_bg: Color,
}

impl Default for DevColors {
    fn default() -> Self {
        Self {
            trigger_bg: Color::Rgb(147, 51, 234),
            trigger_text: Color::White,
            panel_bg: Color::Rgb(255, 255, 255),
            panel_border: Color::Rgb(209, 213, 219),
            text: Color::Rgb(31, 41, 55),
            text_dim: Color::Rgb(107, 114, 128),
            selected: Color::Rgb(59, 130, 246),
            cursor_bg: Color::Rgb(239, 246, 255),
            remove: Color::Rgb(239, 68, 68),
            input_bg: Color::Rgb(243, 244, 246),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub mode: ColorMode,
    pub page: PageColors,
    pub dev: DevColors,
}

impl Theme {
    pub fn from_style(style: &RootStyle, mode: ColorMode) -> Self {
        let var = |name: &str| style.get(name).map(|v| mode.color(v)).unwrap_or(Color::Reset);
        let role = |r: Role| style.role(r).map(|v| mode.color(v)).unwrap_or(Color::Reset);
        let page = PageColors {
            background: role(Role::Background),
            foreground: role(Role::Foreground),
            primary: role(Role::Primary),
            primary_fg: var("--primary-foreground"),
            secondary: role(Role::Secondary),
            secondary_fg: var("--secondary-foreground"),
            accent: role(Role::Accent),
            accent_fg: var("--accent-foreground"),
            muted: role(Role::Muted),
            muted_fg: var("--muted-foreground"),
        };
        Self {
            mode,
            page,
            dev: DevColors::default(),
        }
    }

    /// Swatch color for an arbitrary hex value
    pub fn swatch(&self, hex: &str) -> Color {
        self.mode.color(hex)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.page.primary).add_modifier(Modifier::BOLD)
    }

    pub fn body(&self) -> Style {
        Style::default().fg(self.page.foreground).bg(self.page.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ThemeTool;

    #[test]
    fn test_true_color_mode() {
        assert_eq!(ColorMode::TrueColor.color("#0A400C"), Color::Rgb(10, 64, 12));
        assert_eq!(ColorMode::TrueColor.color("nonsense"), Color::Reset);
    }

    #[test]
    fn test_ansi256_extremes() {
        assert_eq!(rgb_to_ansi256(0, 0, 0), 16);
        assert_eq!(rgb_to_ansi256(255, 255, 255), 231);
        assert_eq!(rgb_to_ansi256(255, 0, 0), 196);
        assert_eq!(rgb_to_ansi256(128, 128, 128), 244);
    }

    #[test]
    fn test_theme_tracks_root_style() {
        let tool = ThemeTool::mount(RootStyle::new());
        let theme = Theme::from_style(tool.surface(), ColorMode::TrueColor);
        assert_eq!(theme.page.primary, Color::Rgb(0x0A, 0x40, 0x0C));
        assert_eq!(theme.page.background, Color::Rgb(0xFE, 0xFA, 0xE0));
        assert_eq!(theme.page.primary_fg, theme.page.background);
        assert_eq!(theme.page.muted_fg, theme.page.foreground);
    }

    #[test]
    fn test_unset_variables_reset() {
        let theme = Theme::from_style(&RootStyle::new(), ColorMode::TrueColor);
        assert_eq!(theme.page.accent, Color::Reset);
    }
}
