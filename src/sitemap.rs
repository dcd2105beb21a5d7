//! `sitemap.xml` generation.
//!
//! The sitemap lists the hand-written site pages followed by every generated
//! page. Generated pages get a priority by playbook and a `monthly` change
//! frequency. All entries share one `lastmod`, the date of the run.

use crate::slug::Playbook;
use crate::types::Page;
use chrono::NaiveDate;
use maud::{PreEscaped, html};
use std::fs;
use std::path::Path;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Weekly,
    Monthly,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Site-relative path, e.g. `/pages/pg/PG.html`
    pub url: String,
    pub priority: f32,
    pub changefreq: ChangeFreq,
}

/// Hand-written pages that always appear in the sitemap.
pub const EXISTING_PAGES: &[(&str, f32, ChangeFreq)] = &[
    ("/", 1.0, ChangeFreq::Weekly),
    ("/pages/pg/PG.html", 0.9, ChangeFreq::Weekly),
    ("/pages/pg/sanvi-girls-pg.html", 0.9, ChangeFreq::Weekly),
    ("/pages/pg/krishna-boys-pg.html", 0.9, ChangeFreq::Weekly),
    ("/pages/pg/swami-vivekanand-pg.html", 0.85, ChangeFreq::Weekly),
    ("/pages/pg/balaji-pg.html", 0.85, ChangeFreq::Weekly),
    ("/pages/pg/lakshmi-girls-pg.html", 0.85, ChangeFreq::Weekly),
    ("/pages/blog/blog.html", 0.7, ChangeFreq::Weekly),
    ("/pages/blog/our-facilities.html", 0.7, ChangeFreq::Monthly),
    ("/pages/about/about.html", 0.6, ChangeFreq::Monthly),
    ("/pages/about/gallery.html", 0.5, ChangeFreq::Monthly),
];

pub fn playbook_priority(playbook: Playbook) -> f32 {
    match playbook {
        Playbook::Location | Playbook::Curation => 0.8,
        Playbook::Persona => 0.75,
        Playbook::Comparison | Playbook::Directory => 0.7,
        Playbook::Glossary => 0.6,
    }
}

/// Existing pages first, then one entry per generated page in order.
pub fn sitemap_entries(pages: &[Page]) -> Vec<SitemapEntry> {
    let existing = EXISTING_PAGES
        .iter()
        .map(|&(url, priority, changefreq)| SitemapEntry {
            url: url.to_string(),
            priority,
            changefreq,
        });
    let generated = pages.iter().map(|p| SitemapEntry {
        url: p.url.clone(),
        priority: playbook_priority(p.playbook),
        changefreq: ChangeFreq::Monthly,
    });
    existing.chain(generated).collect()
}

/// Render the sitemap document. Returns the XML and the number of entries.
pub fn build_sitemap(pages: &[Page], base_url: &str, lastmod: NaiveDate) -> (String, usize) {
    let entries = sitemap_entries(pages);
    let lastmod = lastmod.format("%Y-%m-%d").to_string();

    let markup = html! {
        (PreEscaped(XML_DECLARATION))
        urlset xmlns=(SITEMAP_NS) {
            @for entry in &entries {
                url {
                    loc { (base_url) (entry.url) }
                    lastmod { (lastmod) }
                    changefreq { (entry.changefreq.as_str()) }
                    priority { (format_priority(entry.priority)) }
                }
            }
        }
        "\n"
    };
    (markup.into_string(), entries.len())
}

/// Write `sitemap.xml` to `output_path`. Returns the number of URLs.
pub fn generate_sitemap(
    pages: &[Page],
    output_path: &Path,
    base_url: &str,
    lastmod: NaiveDate,
) -> std::io::Result<usize> {
    let (xml, count) = build_sitemap(pages, base_url, lastmod);
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, xml)?;
    tracing::info!(urls = count, path = %output_path.display(), "sitemap written");
    Ok(count)
}

/// `1.0`, `0.8`, `0.85`: at least one and at most two decimals.
fn format_priority(priority: f32) -> String {
    let fixed = format!("{priority:.2}");
    match fixed.strip_suffix('0') {
        Some(short) => short.to_string(),
        None => fixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::page_stub;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn count_is_existing_plus_generated() {
        for n in [0, 1, 7] {
            let pages: Vec<Page> = (0..n)
                .map(|i| page_stub(&format!("p{i}"), Playbook::Persona))
                .collect();
            let (xml, count) = build_sitemap(&pages, "https://example.in", date());
            assert_eq!(count, EXISTING_PAGES.len() + n);
            assert_eq!(xml.matches("<url>").count(), count);
        }
    }

    #[test]
    fn generated_entries_use_playbook_priority() {
        let pages = vec![
            page_stub("g", Playbook::Glossary),
            page_stub("p", Playbook::Persona),
        ];
        let entries = sitemap_entries(&pages);
        let tail = &entries[EXISTING_PAGES.len()..];
        assert_eq!(tail[0].url, "/pages/seo/glossary/g.html");
        assert_eq!(tail[0].priority, 0.6);
        assert_eq!(tail[1].priority, 0.75);
        assert!(tail.iter().all(|e| e.changefreq == ChangeFreq::Monthly));
    }

    #[test]
    fn every_entry_shares_lastmod() {
        let pages = vec![page_stub("a", Playbook::Location)];
        let (xml, count) = build_sitemap(&pages, "https://example.in", date());
        assert_eq!(xml.matches("<lastmod>2026-03-14</lastmod>").count(), count);
    }

    #[test]
    fn loc_is_absolute() {
        let (xml, _) = build_sitemap(&[], "https://example.in", date());
        assert!(xml.contains("<loc>https://example.in/</loc>"));
        assert!(xml.contains("<loc>https://example.in/pages/pg/PG.html</loc>"));
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset"));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn priorities_keep_significant_digits() {
        assert_eq!(format_priority(1.0), "1.0");
        assert_eq!(format_priority(0.8), "0.8");
        assert_eq!(format_priority(0.85), "0.85");
        assert_eq!(format_priority(0.75), "0.75");
    }

    #[test]
    fn loc_is_escaped() {
        let (xml, _) = build_sitemap(&[], "https://example.in/?ref=a&b", date());
        assert!(xml.contains("<loc>https://example.in/?ref=a&amp;b/</loc>"), "{xml}");
        assert!(!xml.contains("a&b"));
    }

    #[test]
    fn entry_carries_all_four_fields() {
        let pages = vec![page_stub("g", Playbook::Glossary)];
        let (xml, _) = build_sitemap(&pages, "https://example.in", date());
        assert!(xml.contains(
            "<url><loc>https://example.in/pages/seo/glossary/g.html</loc>\
             <lastmod>2026-03-14</lastmod><changefreq>monthly</changefreq>\
             <priority>0.6</priority></url>"
        ));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
    }

    #[test]
    fn generate_writes_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sitemap.xml");
        let pages = vec![page_stub("a", Playbook::Curation)];
        let count = generate_sitemap(&pages, &path, "https://example.in", date()).unwrap();
        assert_eq!(count, EXISTING_PAGES.len() + 1);
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("/pages/seo/a.html"));
    }
}
