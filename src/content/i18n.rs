//! Bilingual text for the landing page
//!
//! The table ships embedded in the binary and is validated once at startup:
//! both languages must be present and every field must be non-blank.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

const EMBEDDED_TRANSLATIONS: &str = include_str!("translations.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Th,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Th];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Th => "th",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Th,
            Language::Th => Language::En,
        }
    }

    /// Label of the toggle button: names the language you would switch to
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::En => "ไทย",
            Language::Th => "EN",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Language::En),
            "th" => Some(Language::Th),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Display strings for one language
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Translation {
    pub welcome: String,
    pub subtitle: String,
    pub description: String,
    pub our_story: String,
    pub cafe_restaurant: String,
    pub home_stay: String,
    pub our_story_desc: String,
    pub cafe_desc: String,
    pub home_stay_desc: String,
}

impl Translation {
    fn fields(&self) -> [(&'static str, &str); 9] {
        [
            ("welcome", self.welcome.as_str()),
            ("subtitle", self.subtitle.as_str()),
            ("description", self.description.as_str()),
            ("ourStory", self.our_story.as_str()),
            ("cafeRestaurant", self.cafe_restaurant.as_str()),
            ("homeStay", self.home_stay.as_str()),
            ("ourStoryDesc", self.our_story_desc.as_str()),
            ("cafeDesc", self.cafe_desc.as_str()),
            ("homeStayDesc", self.home_stay_desc.as_str()),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct TranslationTable {
    en: Translation,
    th: Translation,
}

impl TranslationTable {
    /// Loads the table compiled into the binary
    pub fn load() -> Result<Self> {
        Self::from_json(EMBEDDED_TRANSLATIONS)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let mut raw: HashMap<Language, Translation> = serde_json::from_str(json)?;

        for lang in Language::ALL {
            let Some(entry) = raw.get(&lang) else {
                return Err(SiteError::MissingLanguage(lang.code().to_string()));
            };
            if let Some((field, _)) = entry.fields().into_iter().find(|(_, v)| v.trim().is_empty()) {
                return Err(SiteError::BlankTranslation {
                    language: lang.code().to_string(),
                    field: field.to_string(),
                });
            }
        }

        let en = raw.remove(&Language::En).ok_or_else(|| SiteError::MissingLanguage("en".into()))?;
        let th = raw.remove(&Language::Th).ok_or_else(|| SiteError::MissingLanguage("th".into()))?;
        tracing::debug!("translation table loaded");
        Ok(Self { en, th })
    }

    pub fn get(&self, lang: Language) -> &Translation {
        match lang {
            Language::En => &self.en,
            Language::Th => &self.th,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_loads() {
        let table = TranslationTable::load().unwrap();
        assert_eq!(table.get(Language::En).welcome, "Welcome to Baan Rai Nai Fun");
        assert_eq!(table.get(Language::Th).home_stay, "โฮมสเตย์");
    }

    #[test]
    fn test_double_toggle_returns_original_text() {
        let table = TranslationTable::load().unwrap();
        for lang in Language::ALL {
            let back = lang.toggled().toggled();
            assert_eq!(back, lang);
            assert_eq!(table.get(back), table.get(lang));
            assert_ne!(table.get(lang.toggled()).welcome, table.get(lang).welcome);
        }
    }

    #[test]
    fn test_toggle_label_names_other_language() {
        assert_eq!(Language::En.toggle_label(), "ไทย");
        assert_eq!(Language::Th.toggle_label(), "EN");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("TH"), Some(Language::Th));
        assert_eq!(Language::from_code(" en "), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_TRANSLATIONS).unwrap();
        value["th"].as_object_mut().unwrap().remove("cafeDesc");
        let result = TranslationTable::from_json(&value.to_string());
        assert!(matches!(result, Err(SiteError::Json(_))));
    }

    #[test]
    fn test_missing_language_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_TRANSLATIONS).unwrap();
        value.as_object_mut().unwrap().remove("th");
        let err = TranslationTable::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, SiteError::MissingLanguage(ref l) if l == "th"));
    }

    #[test]
    fn test_blank_field_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_TRANSLATIONS).unwrap();
        value["en"]["subtitle"] = serde_json::Value::String("   ".into());
        let err = TranslationTable::from_json(&value.to_string()).unwrap_err();
        match err {
            SiteError::BlankTranslation { language, field } => {
                assert_eq!(language, "en");
                assert_eq!(field, "subtitle");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_TRANSLATIONS).unwrap();
        value["th"]["extra"] = serde_json::Value::String("x".into());
        assert!(TranslationTable::from_json(&value.to_string()).is_err());
    }
}
