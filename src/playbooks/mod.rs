//! Page generators, one per playbook.
//!
//! Each submodule exposes a pure `render(record, content, site) -> Page`.
//! The content set is passed along for cross references (colleges, sibling
//! glossary terms, curated locations); ids that don't resolve are dropped
//! from the rendered page.
//!
//! | Playbook     | Source              | URL                                  |
//! |--------------|---------------------|--------------------------------------|
//! | location     | `locations.json`    | `/pages/seo/pg-near-{id}.html`       |
//! | persona      | `personas.json`     | `/pages/seo/{slug}.html`             |
//! | glossary     | `glossary.json`     | `/pages/seo/glossary/{slug}.html`    |
//! | comparison   | `comparisons.json`  | `/pages/seo/{slug}.html`             |
//! | curation     | `curations.json`    | `/pages/seo/{slug}.html`             |

pub mod comparison;
pub mod curation;
pub mod glossary;
pub mod location;
pub mod persona;

use crate::content::{ContentRecord, ContentSet};
use crate::render::SiteContext;
use crate::types::Page;

/// Render one record with the playbook its variant selects.
pub fn render_record(record: ContentRecord<'_>, content: &ContentSet, site: &SiteContext) -> Page {
    match record {
        ContentRecord::Location(loc) => location::render(loc, content, site),
        ContentRecord::Persona(persona) => persona::render(persona, content, site),
        ContentRecord::Glossary(term) => glossary::render(term, content, site),
        ContentRecord::Comparison(cmp) => comparison::render(cmp, content, site),
        ContentRecord::Curation(cur) => curation::render(cur, content, site),
    }
}

/// Render every record, locations first and curations last.
pub fn generate_all(content: &ContentSet, site: &SiteContext) -> Vec<Page> {
    let pages: Vec<Page> = content
        .records()
        .map(|record| render_record(record, content, site))
        .collect();
    tracing::info!(pages = pages.len(), "generated pages");
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::LINKS_PLACEHOLDER;
    use crate::slug::Playbook;
    use crate::test_helpers::*;

    #[test]
    fn one_page_per_record_in_order() {
        let content = fixture_content();
        let pages = generate_all(&content, &test_site());
        assert_eq!(pages.len(), content.record_count());

        let first_persona = pages
            .iter()
            .position(|p| p.playbook == Playbook::Persona)
            .unwrap();
        assert_eq!(first_persona, content.locations.len());
        assert_eq!(pages.last().unwrap().playbook, Playbook::Curation);
    }

    #[test]
    fn every_page_awaits_links() {
        let pages = generate_all(&fixture_content(), &test_site());
        for page in &pages {
            assert_eq!(page.html_content.matches(LINKS_PLACEHOLDER).count(), 1);
            assert!(page.internal_links.is_empty());
        }
    }

    #[test]
    fn fixture_pages_are_unique() {
        let pages = generate_all(&fixture_content(), &test_site());
        let mut slugs: Vec<&str> = pages.iter().map(|p| p.slug.as_str()).collect();
        let mut titles: Vec<&str> = pages.iter().map(|p| p.title.as_str()).collect();
        slugs.sort();
        slugs.dedup();
        titles.sort();
        titles.dedup();
        assert_eq!(slugs.len(), pages.len());
        assert_eq!(titles.len(), pages.len());
    }

    #[test]
    fn urls_and_paths_agree() {
        for page in generate_all(&fixture_content(), &test_site()) {
            assert_eq!(page.url, format!("/pages/seo/{}", page.file_path));
        }
    }
}
