//! Static page content: translations, card sections and routes

pub mod i18n;
pub mod routes;
pub mod sections;

pub use i18n::{Language, Translation, TranslationTable};
pub use routes::Route;
pub use sections::Section;

pub const BRAND_EN: &str = "Baan Rai Nai Fun";
pub const BRAND_TH: &str = "บ้านไร่ในฝัน";
pub const COPYRIGHT: &str = "© 2024 Baan Rai Nai Fun. All rights reserved.";
pub const LOCATION: &str = "Chiang Mai, Thailand";
