use serde::Serialize;

/// A named swatch. `value` is kept as entered; see [`hex_to_rgb`] for parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorEntry {
    pub name: String,
    pub value: String,
}

impl ColorEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Derives the lookup key for a custom color: lowercased, all whitespace removed
pub fn color_key(name: &str) -> String {
    name.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parses `#RRGGBB` or `#RGB` (leading `#` optional)
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 17;
            }
            Some((rgb[0], rgb[1], rgb[2]))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_key_strips_whitespace_and_lowercases() {
        assert_eq!(color_key("Sunset Red"), "sunsetred");
        assert_eq!(color_key("  Deep\tForest  Green "), "deepforestgreen");
        assert_eq!(color_key("OLIVE"), "olive");
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#0A400C"), Some((0x0A, 0x40, 0x0C)));
        assert_eq!(hex_to_rgb("fefae0"), Some((0xFE, 0xFA, 0xE0)));
        assert_eq!(hex_to_rgb("#fff"), Some((255, 255, 255)));
        assert_eq!(hex_to_rgb("#12345"), None);
        assert_eq!(hex_to_rgb("#GGGGGG"), None);
        assert_eq!(hex_to_rgb("#ไทย"), None);
    }
}
