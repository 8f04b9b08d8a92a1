use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::ColorEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetId {
    #[default]
    Preset1,
    Preset2,
}

// (key, display name, preset1, preset2)
const PRESET_TABLE: [(&str, &str, &str, &str); 4] = [
    ("darkGreen", "Dark Green", "#0A400C", "#328E6E"),
    ("mediumGreen", "Medium Green", "#819067", "#67AE6E"),
    ("lightGreen", "Light Green", "#B1AB86", "#90C67C"),
    ("cream", "Cream", "#FEFAE0", "#E1EEBC"),
];

impl PresetId {
    pub const ALL: [PresetId; 2] = [PresetId::Preset1, PresetId::Preset2];

    pub fn id(self) -> &'static str {
        match self {
            PresetId::Preset1 => "preset1",
            PresetId::Preset2 => "preset2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PresetId::Preset1 => "Preset 1",
            PresetId::Preset2 => "Preset 2",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    /// The four swatches of this preset, in display order
    pub fn colors(self) -> Vec<(&'static str, ColorEntry)> {
        PRESET_TABLE
            .iter()
            .map(|&(key, name, one, two)| {
                let value = match self {
                    PresetId::Preset1 => one,
                    PresetId::Preset2 => two,
                };
                (key, ColorEntry::new(name, value))
            })
            .collect()
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_share_keys() {
        let one: Vec<_> = PresetId::Preset1.colors().into_iter().map(|(k, _)| k).collect();
        let two: Vec<_> = PresetId::Preset2.colors().into_iter().map(|(k, _)| k).collect();
        assert_eq!(one, vec!["darkGreen", "mediumGreen", "lightGreen", "cream"]);
        assert_eq!(one, two);
    }

    #[test]
    fn test_preset_values() {
        let two = PresetId::Preset2.colors();
        assert_eq!(two[2].1, ColorEntry::new("Light Green", "#90C67C"));
        let one = PresetId::Preset1.colors();
        assert_eq!(one[0].1.value, "#0A400C");
    }

    #[test]
    fn test_from_id() {
        assert_eq!(PresetId::from_id("preset2"), Some(PresetId::Preset2));
        assert_eq!(PresetId::from_id("preset3"), None);
    }
}
