use super::i18n::Translation;

/// The three informational cards below the hero, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Story,
    Cafe,
    HomeStay,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Story, Section::Cafe, Section::HomeStay];

    pub fn image_file(self) -> &'static str {
        match self {
            Section::Story => "story.jpg",
            Section::Cafe => "cafe.jpg",
            Section::HomeStay => "homestay.jpg",
        }
    }

    /// Alt text stays English in both languages
    pub fn alt_text(self) -> &'static str {
        match self {
            Section::Story => "Our Story",
            Section::Cafe => "Cafe & Restaurant",
            Section::HomeStay => "Home Stay",
        }
    }

    pub fn title(self, t: &Translation) -> &str {
        match self {
            Section::Story => &t.our_story,
            Section::Cafe => &t.cafe_restaurant,
            Section::HomeStay => &t.home_stay,
        }
    }

    pub fn description(self, t: &Translation) -> &str {
        match self {
            Section::Story => &t.our_story_desc,
            Section::Cafe => &t.cafe_desc,
            Section::HomeStay => &t.home_stay_desc,
        }
    }

    pub fn image_url(self, image_base: &str) -> String {
        format!("{}/{}", image_base.trim_end_matches('/'), self.image_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Language, TranslationTable};

    #[test]
    fn test_image_url_joins_base() {
        assert_eq!(Section::Story.image_url("/baanrainaifun"), "/baanrainaifun/story.jpg");
        assert_eq!(Section::Cafe.image_url("/baanrainaifun/"), "/baanrainaifun/cafe.jpg");
        assert_eq!(Section::HomeStay.image_url(""), "/homestay.jpg");
    }

    #[test]
    fn test_section_text_follows_language() {
        let table = TranslationTable::load().unwrap();
        let en = table.get(Language::En);
        let th = table.get(Language::Th);
        assert_eq!(Section::Cafe.title(en), "Cafe & Restaurant");
        assert_eq!(Section::Cafe.title(th), "คาเฟ่ & ร้านอาหาร");
        assert_eq!(Section::HomeStay.description(en), en.home_stay_desc);
    }
}
