//! Static HTML export
//!
//! Writes one page per language plus a not-found page. The applied theme is
//! emitted as CSS custom properties on `:root`, so the page picks up whatever
//! the palette tool resolved.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::content::routes::{NOT_FOUND_CODE, NOT_FOUND_LINK, NOT_FOUND_TITLE};
use crate::content::{Language, Section, TranslationTable, BRAND_EN, BRAND_TH, COPYRIGHT, LOCATION};
use crate::error::Result;
use crate::palette::RootStyle;

pub const NOT_FOUND_FILE: &str = "404.html";

/// Output file for a language page
pub fn page_file(lang: Language) -> &'static str {
    match lang {
        Language::En => "index.html",
        Language::Th => "index.th.html",
    }
}

/// Site-relative URL of a language page
pub fn page_href(base_path: &str, lang: Language) -> String {
    let base = base_path.trim_end_matches('/');
    match lang {
        Language::En => format!("{}/", base),
        Language::Th => format!("{}/{}", base, page_file(lang)),
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inputs shared by every exported page
pub struct ExportContext<'a> {
    pub settings: &'a Settings,
    pub table: &'a TranslationTable,
    pub style: &'a RootStyle,
    pub image_base: String,
}

fn root_css(style: &RootStyle) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in style.declarations() {
        let _ = writeln!(css, "  {}: {};", name, value);
    }
    css.push_str("}\n");
    css.push_str(PAGE_CSS);
    css
}

const PAGE_CSS: &str = "body { margin: 0; font-family: Georgia, serif; background: var(--background); color: var(--foreground); }
header, footer { background: var(--muted); color: var(--muted-foreground); padding: 1rem 2rem; display: flex; justify-content: space-between; align-items: center; }
.brand small { display: block; }
.lang { color: var(--primary); border: 1px solid var(--secondary); padding: .25rem .75rem; border-radius: .375rem; text-decoration: none; }
.hero { text-align: center; padding: 5rem 1rem; }
.hero h2 { color: var(--primary); font-size: 3rem; margin: 0 0 1.5rem; }
.divider { color: var(--accent); }
.cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 2rem; padding: 2rem; max-width: 72rem; margin: 0 auto; }
.card { border: 1px solid var(--secondary); border-radius: .75rem; overflow: hidden; background: var(--background); }
.card img { width: 100%; height: 18rem; object-fit: cover; display: block; }
.card h3 { color: var(--primary); }
.card div { padding: 2rem; text-align: center; }
.not-found { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; }
";

fn document(ctx: &ExportContext<'_>, lang: Language, title: &str, body: &str) -> String {
    let mut html = String::new();
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html lang=\"{}\">", lang.code());
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "<meta charset=\"utf-8\">");
    let _ = writeln!(html, "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    let _ = writeln!(html, "<title>{}</title>", escape_html(title));
    let _ = writeln!(
        html,
        "<link rel=\"icon\" href=\"{}favicon.ico\">",
        escape_html(&ctx.settings.site.asset_prefix)
    );
    let _ = writeln!(html, "<style>\n{}</style>", root_css(ctx.style));
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    html.push_str(body);
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");
    html
}

pub fn render_landing(ctx: &ExportContext<'_>, lang: Language) -> String {
    let t = ctx.table.get(lang);
    let base = &ctx.settings.site.base_path;
    let mut body = String::new();

    let _ = writeln!(body, "<header>");
    let _ = writeln!(
        body,
        "<div class=\"brand\"><strong>{}</strong><small>{}</small></div>",
        escape_html(BRAND_EN),
        escape_html(BRAND_TH)
    );
    let _ = writeln!(
        body,
        "<a class=\"lang\" href=\"{}\">{}</a>",
        escape_html(&page_href(base, lang.toggled())),
        escape_html(lang.toggle_label())
    );
    let _ = writeln!(body, "</header>");

    let _ = writeln!(body, "<section class=\"hero\">");
    let _ = writeln!(body, "<h2>{}</h2>", escape_html(&t.welcome));
    let _ = writeln!(body, "<p>{}</p>", escape_html(&t.subtitle));
    let _ = writeln!(body, "<p>{}</p>", escape_html(&t.description));
    let _ = writeln!(body, "<p class=\"divider\">── ☕ ──</p>");
    let _ = writeln!(body, "</section>");

    let _ = writeln!(body, "<section class=\"cards\">");
    for section in Section::ALL {
        let _ = writeln!(body, "<article class=\"card\">");
        let _ = writeln!(
            body,
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(&section.image_url(&ctx.image_base)),
            escape_html(section.alt_text())
        );
        let _ = writeln!(
            body,
            "<div><h3>{}</h3><p>{}</p></div>",
            escape_html(section.title(t)),
            escape_html(section.description(t))
        );
        let _ = writeln!(body, "</article>");
    }
    let _ = writeln!(body, "</section>");

    let _ = writeln!(body, "<footer>");
    let _ = writeln!(
        body,
        "<div class=\"brand\"><strong>{}</strong><small>{}</small></div>",
        escape_html(BRAND_EN),
        escape_html(BRAND_TH)
    );
    let _ = writeln!(
        body,
        "<div><p>{}</p><small>{}</small></div>",
        escape_html(COPYRIGHT),
        escape_html(LOCATION)
    );
    let _ = writeln!(body, "</footer>");

    document(ctx, lang, &t.welcome, &body)
}

pub fn render_not_found(ctx: &ExportContext<'_>) -> String {
    let base = &ctx.settings.site.base_path;
    let mut body = String::new();
    let _ = writeln!(body, "<main class=\"not-found\">");
    let _ = writeln!(body, "<h1>{}</h1>", NOT_FOUND_CODE);
    let _ = writeln!(body, "<p>{}</p>", escape_html(NOT_FOUND_TITLE));
    let _ = writeln!(
        body,
        "<a href=\"{}\">{}</a>",
        escape_html(&page_href(base, Language::En)),
        escape_html(NOT_FOUND_LINK)
    );
    let _ = writeln!(body, "</main>");
    document(ctx, Language::En, NOT_FOUND_TITLE, &body)
}

/// Writes every page under `out_dir`, returning the files written
pub fn export_site(ctx: &ExportContext<'_>, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    for lang in Language::ALL {
        let path = out_dir.join(page_file(lang));
        fs::write(&path, render_landing(ctx, lang))?;
        written.push(path);
    }

    let path = out_dir.join(NOT_FOUND_FILE);
    fs::write(&path, render_not_found(ctx))?;
    written.push(path);

    tracing::info!(out_dir = %out_dir.display(), files = written.len(), "static site exported");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{PresetId, Role, ThemeTool};

    fn with_ctx<F: FnOnce(&ExportContext<'_>)>(style: &RootStyle, f: F) {
        let settings = Settings::default();
        let table = TranslationTable::load().unwrap();
        let ctx = ExportContext {
            settings: &settings,
            table: &table,
            style,
            image_base: settings.image_base_with(None),
        };
        f(&ctx);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Cafe & <Restaurant>"), "Cafe &amp; &lt;Restaurant&gt;");
        assert_eq!(escape_html("guest's \"home\""), "guest&#39;s &quot;home&quot;");
    }

    #[test]
    fn test_page_href() {
        assert_eq!(page_href("/baanrainaifun", Language::En), "/baanrainaifun/");
        assert_eq!(page_href("/baanrainaifun/", Language::Th), "/baanrainaifun/index.th.html");
    }

    #[test]
    fn test_landing_contains_text_images_and_theme() {
        let mut tool = ThemeTool::mount(RootStyle::new());
        tool.select_preset(PresetId::Preset2);
        tool.assign_role(Role::Primary, "lightGreen");

        with_ctx(tool.surface(), |ctx| {
            let html = render_landing(ctx, Language::En);
            assert!(html.contains("<html lang=\"en\">"));
            assert!(html.contains("Welcome to Baan Rai Nai Fun"));
            assert!(html.contains("Cafe &amp; Restaurant"));
            assert!(html.contains("src=\"/baanrainaifun/story.jpg\""));
            assert!(html.contains("src=\"/baanrainaifun/homestay.jpg\""));
            assert!(html.contains("--primary: #90C67C;"));
            assert!(html.contains("--primary-foreground: #E1EEBC;"));
            assert!(html.contains("href=\"/baanrainaifun/index.th.html\">ไทย</a>"));
            assert!(html.contains(COPYRIGHT));
        });
    }

    #[test]
    fn test_thai_page_links_back_to_english() {
        let tool = ThemeTool::mount(RootStyle::new());
        with_ctx(tool.surface(), |ctx| {
            let html = render_landing(ctx, Language::Th);
            assert!(html.contains("<html lang=\"th\">"));
            assert!(html.contains("ยินดีต้อนรับสู่บ้านไร่ในฝัน"));
            assert!(html.contains("href=\"/baanrainaifun/\">EN</a>"));
        });
    }

    #[test]
    fn test_not_found_page() {
        let style = RootStyle::new();
        with_ctx(&style, |ctx| {
            let html = render_not_found(ctx);
            assert!(html.contains("<h1>404</h1>"));
            assert!(html.contains("Page Not Found"));
            assert!(html.contains("<a href=\"/baanrainaifun/\">Go back home</a>"));
        });
    }

    #[test]
    fn test_export_site_writes_all_pages() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let tool = ThemeTool::mount(RootStyle::new());
        with_ctx(tool.surface(), |ctx| {
            let written = export_site(ctx, &out).unwrap();
            assert_eq!(written.len(), 3);
            for name in ["index.html", "index.th.html", "404.html"] {
                assert!(out.join(name).is_file(), "{} should exist", name);
            }
            let index = fs::read_to_string(out.join("index.html")).unwrap();
            assert!(index.contains("--background: #FEFAE0;"));
        });
    }
}
