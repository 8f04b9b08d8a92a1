use serde::Serialize;
use tracing::warn;

use super::roles::Role;
use super::style::StyleSurface;
use super::tool::ThemeTool;

pub const EXPORT_ACK: &str = "Tailwind color config copied to clipboard!";

/// Role → hex object, serialized in role order
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct ExportedColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
}

impl ExportedColors {
    fn slot(&mut self, role: Role) -> &mut Option<String> {
        match role {
            Role::Primary => &mut self.primary,
            Role::Secondary => &mut self.secondary,
            Role::Accent => &mut self.accent,
            Role::Muted => &mut self.muted,
            Role::Background => &mut self.background,
            Role::Foreground => &mut self.foreground,
        }
    }
}

impl<S: StyleSurface> ThemeTool<S> {
    pub fn exported_colors(&self) -> ExportedColors {
        let mut out = ExportedColors::default();
        for role in Role::ALL {
            match self.resolve(role) {
                Some(c) => *out.slot(role) = Some(c.value),
                None => warn!(role = %role, "unresolved role left out of export"),
            }
        }
        out
    }

    /// Pretty JSON (two-space indent) of the resolved role colors
    pub fn export_config(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.exported_colors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{PresetId, RootStyle};

    #[test]
    fn test_default_export() {
        let tool = ThemeTool::mount(RootStyle::new());
        let json = tool.export_config().unwrap();
        let expected = r##"{
  "primary": "#0A400C",
  "secondary": "#819067",
  "accent": "#B1AB86",
  "muted": "#FEFAE0",
  "background": "#FEFAE0",
  "foreground": "#0A400C"
}"##;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_export_follows_preset_and_customs() {
        let mut tool = ThemeTool::mount(RootStyle::new());
        tool.select_preset(PresetId::Preset2);
        tool.add_custom_color("Sunset Red", "#FF5733");
        tool.assign_role(Role::Accent, "sunsetred");
        let colors = tool.exported_colors();
        assert_eq!(colors.accent.as_deref(), Some("#FF5733"));
        assert_eq!(colors.primary.as_deref(), Some("#328E6E"));
    }

    #[test]
    fn test_unresolved_role_is_omitted() {
        let mut tool = ThemeTool::mount(RootStyle::new());
        tool.assign_role(Role::Muted, "missing");
        let json = tool.export_config().unwrap();
        assert!(!json.contains("\"muted\""));
        assert!(json.contains("\"accent\""));
    }
}
