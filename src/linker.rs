//! Internal-link selection across generated pages.
//!
//! Every page is registered first; links are resolved afterwards, once the
//! whole set is known. For a given page every *other* registered page is
//! scored:
//!
//! | Signal                                      | Score |
//! |---------------------------------------------|-------|
//! | same playbook                               | +2    |
//! | same location (when the page has one)       | +3    |
//! | same gender (when the page has one)         | +1    |
//! | same college (when the page has one)        | +2    |
//! | different playbook                          | +1    |
//! | keyword pair where one contains the other   | +1 each |
//!
//! Selection then guarantees a mix: the top 3 siblings (same playbook), the
//! top 3 cross-playbook candidates, and the remaining slots filled in score
//! order. Ties keep registration order.

use crate::content::Gender;
use crate::slug::Playbook;
use crate::types::{LinkRef, Page};
use std::collections::HashSet;

pub const DEFAULT_MAX_LINKS: usize = 8;
const SIBLING_QUOTA: usize = 3;
const CROSS_QUOTA: usize = 3;

/// The linker's own copy of the fields it scores on.
#[derive(Debug, Clone)]
pub struct LinkerEntry {
    pub slug: String,
    pub title: String,
    pub playbook: Playbook,
    pub url: String,
    pub keywords: Vec<String>,
    pub location: Option<String>,
    pub gender: Option<Gender>,
    pub college: Option<String>,
}

impl From<&Page> for LinkerEntry {
    fn from(page: &Page) -> Self {
        Self {
            slug: page.slug.clone(),
            title: page.title.clone(),
            playbook: page.playbook,
            url: page.url.clone(),
            keywords: page.keywords.clone(),
            location: non_empty(page.location.as_deref()),
            gender: page.gender.clone().filter(|g| !g.is_blank()),
            college: non_empty(page.college.as_deref()),
        }
    }
}

/// An empty string in the data counts as unset.
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_owned)
}

impl From<&LinkerEntry> for LinkRef {
    fn from(entry: &LinkerEntry) -> Self {
        Self {
            title: entry.title.clone(),
            url: entry.url.clone(),
            playbook: entry.playbook,
        }
    }
}

/// A hand-written site page, linked from every generated page's footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticLink {
    pub title: &'static str,
    pub url: &'static str,
}

const STATIC_LINKS: &[StaticLink] = &[
    StaticLink { title: "View All PG Listings", url: "/pages/pg/PG.html" },
    StaticLink { title: "About Kangaroo House", url: "/pages/about/about.html" },
    StaticLink { title: "Photo Gallery", url: "/pages/about/gallery.html" },
    StaticLink { title: "Read Our Blog", url: "/pages/blog/blog.html" },
    StaticLink { title: "Sanvi Girls PG", url: "/pages/pg/sanvi-girls-pg.html" },
    StaticLink { title: "Krishna Boys PG", url: "/pages/pg/krishna-boys-pg.html" },
    StaticLink { title: "Swami Vivekanand PG", url: "/pages/pg/swami-vivekanand-pg.html" },
    StaticLink { title: "Balaji PG", url: "/pages/pg/balaji-pg.html" },
    StaticLink { title: "Lakshmi Girls PG", url: "/pages/pg/lakshmi-girls-pg.html" },
];

#[derive(Debug, Default)]
pub struct Linker {
    entries: Vec<LinkerEntry>,
}

impl Linker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, page: &Page) {
        self.entries.push(LinkerEntry::from(page));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranked internal links for the page registered under `slug`.
    ///
    /// Returns an empty list for an unknown slug. Never includes the page
    /// itself.
    pub fn get_links(&self, slug: &str, max_links: usize) -> Vec<LinkRef> {
        let Some(current) = self.entries.iter().find(|e| e.slug == slug) else {
            return Vec::new();
        };

        let mut candidates: Vec<(u32, &LinkerEntry)> = self
            .entries
            .iter()
            .filter(|e| e.slug != slug)
            .map(|e| (score(current, e), e))
            .collect();
        // `sort_by` is stable, so equal scores keep registration order.
        candidates.sort_by(|a, b| b.0.cmp(&a.0));

        let siblings = candidates
            .iter()
            .filter(|(_, c)| c.playbook == current.playbook)
            .take(SIBLING_QUOTA);
        let cross = candidates
            .iter()
            .filter(|(_, c)| c.playbook != current.playbook)
            .take(CROSS_QUOTA);
        let mut chosen: Vec<&LinkerEntry> = siblings.chain(cross).map(|(_, e)| *e).collect();

        let mut used: HashSet<&str> = chosen.iter().map(|e| e.slug.as_str()).collect();
        for &(_, candidate) in &candidates {
            if chosen.len() >= max_links {
                break;
            }
            if used.insert(candidate.slug.as_str()) {
                chosen.push(candidate);
            }
        }

        chosen.truncate(max_links);
        chosen.into_iter().map(LinkRef::from).collect()
    }

    /// Fixed links to the hand-written parts of the site.
    pub fn static_links() -> &'static [StaticLink] {
        STATIC_LINKS
    }
}

fn score(current: &LinkerEntry, candidate: &LinkerEntry) -> u32 {
    let mut score = 0;
    if candidate.playbook == current.playbook {
        score += 2;
    }
    if current.location.is_some() && candidate.location == current.location {
        score += 3;
    }
    if current.gender.is_some() && candidate.gender == current.gender {
        score += 1;
    }
    if current.college.is_some() && candidate.college == current.college {
        score += 2;
    }
    if candidate.playbook != current.playbook {
        score += 1;
    }
    for kw in &candidate.keywords {
        for ck in &current.keywords {
            if kw.contains(ck.as_str()) || ck.contains(kw.as_str()) {
                score += 1;
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::page_stub;

    fn linker_with(pages: &[Page]) -> Linker {
        let mut linker = Linker::new();
        for page in pages {
            linker.register(page);
        }
        linker
    }

    fn mixed_pages() -> Vec<Page> {
        vec![
            page_stub("pg-near-ashok-nagar", Playbook::Location),
            page_stub("pg-near-vasundhara", Playbook::Location),
            page_stub("pg-near-mayur-vihar", Playbook::Location),
            page_stub("pg-for-students", Playbook::Persona),
            page_stub("pg-for-working-women", Playbook::Persona),
            page_stub("paying-guest", Playbook::Glossary),
            page_stub("pg-vs-hostel", Playbook::Comparison),
            page_stub("best-girls-pg", Playbook::Curation),
        ]
    }

    fn slugs(links: &[LinkRef]) -> Vec<String> {
        links
            .iter()
            .map(|l| l.url.trim_start_matches("/pages/seo/").to_string())
            .collect()
    }

    #[test]
    fn unknown_slug_yields_nothing() {
        let linker = linker_with(&mixed_pages());
        assert!(linker.get_links("missing", 8).is_empty());
    }

    #[test]
    fn never_links_to_itself() {
        let pages = mixed_pages();
        let linker = linker_with(&pages);
        for page in &pages {
            let links = linker.get_links(&page.slug, DEFAULT_MAX_LINKS);
            assert!(links.iter().all(|l| l.url != page.url), "{}", page.slug);
        }
    }

    #[test]
    fn fills_to_min_of_max_and_others() {
        let pages = mixed_pages();
        let linker = linker_with(&pages);
        let others = pages.len() - 1;
        for max in [1, 3, 5, 7, 8, 20] {
            for page in &pages {
                let links = linker.get_links(&page.slug, max);
                assert_eq!(links.len(), max.min(others), "{} max={max}", page.slug);
            }
        }
    }

    #[test]
    fn links_are_unique() {
        let pages = mixed_pages();
        let linker = linker_with(&pages);
        let links = linker.get_links("pg-near-ashok-nagar", 8);
        let unique: HashSet<&str> = links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(unique.len(), links.len());
    }

    #[test]
    fn result_is_deterministic() {
        let linker = linker_with(&mixed_pages());
        let first = linker.get_links("pg-for-students", 8);
        let second = linker.get_links("pg-for-students", 8);
        assert_eq!(first, second);
    }

    #[test]
    fn single_playbook_registry_still_fills() {
        let pages: Vec<Page> = (0..12)
            .map(|i| page_stub(&format!("glossary-{i}"), Playbook::Glossary))
            .collect();
        let linker = linker_with(&pages);
        let links = linker.get_links("glossary-0", 8);
        assert_eq!(links.len(), 8);
        assert!(links.iter().all(|l| l.playbook == Playbook::Glossary));
    }

    #[test]
    fn siblings_come_first_then_cross() {
        let linker = linker_with(&mixed_pages());
        let links = linker.get_links("pg-near-ashok-nagar", 8);
        let playbooks: Vec<Playbook> = links.iter().map(|l| l.playbook).collect();
        // Only two siblings exist, so the first two are locations and the
        // next three are the top cross-playbook candidates.
        assert_eq!(&playbooks[..2], &[Playbook::Location, Playbook::Location]);
        assert!(playbooks[2..5].iter().all(|p| *p != Playbook::Location));
    }

    #[test]
    fn location_affinity_outranks_registration_order() {
        let mut pages = mixed_pages();
        // The last-registered curation shares the location.
        pages[0].location = Some("ashok-nagar".into());
        pages[7].location = Some("ashok-nagar".into());
        let linker = linker_with(&pages);
        let links = linker.get_links("pg-near-ashok-nagar", 8);
        assert_eq!(slugs(&links)[2], "best-girls-pg.html");
    }

    #[test]
    fn ties_keep_registration_order() {
        let linker = linker_with(&mixed_pages());
        let links = linker.get_links("pg-near-ashok-nagar", 8);
        // No keywords, locations or genders: all cross candidates tie at 1.
        assert_eq!(
            slugs(&links)[2..5],
            ["pg-for-students.html", "pg-for-working-women.html", "glossary/paying-guest.html"]
        );
    }

    #[test]
    fn keyword_overlap_counts_every_pair() {
        let mut current = page_stub("a", Playbook::Persona);
        current.keywords = vec!["pg".into(), "pg delhi".into()];
        let mut candidate = page_stub("b", Playbook::Persona);
        candidate.keywords = vec!["pg delhi".into()];

        // "pg delhi" contains "pg" and equals "pg delhi": two pairs.
        let s = score(&LinkerEntry::from(&current), &LinkerEntry::from(&candidate));
        assert_eq!(s, 2 + 2);
    }

    #[test]
    fn scoring_signals_add_up() {
        let mut current = page_stub("a", Playbook::Location);
        current.location = Some("ashok-nagar".into());
        current.gender = Some(Gender::Female);
        current.college = Some("mac".into());
        let mut candidate = page_stub("b", Playbook::Curation);
        candidate.location = Some("ashok-nagar".into());
        candidate.gender = Some(Gender::Female);
        candidate.college = Some("mac".into());

        let s = score(&LinkerEntry::from(&current), &LinkerEntry::from(&candidate));
        assert_eq!(s, 3 + 1 + 2 + 1);
    }

    #[test]
    fn empty_attributes_count_as_unset() {
        let mut current = page_stub("a", Playbook::Location);
        current.location = Some(String::new());
        current.gender = Some(Gender::Other(String::new()));
        current.college = Some(String::new());
        let mut candidate = page_stub("b", Playbook::Location);
        candidate.location = Some(String::new());
        candidate.gender = Some(Gender::Other(String::new()));
        candidate.college = Some(String::new());

        let entry = LinkerEntry::from(&current);
        assert!(entry.location.is_none());
        assert!(entry.gender.is_none());
        assert!(entry.college.is_none());
        let s = score(&entry, &LinkerEntry::from(&candidate));
        assert_eq!(s, 2);
    }

    #[test]
    fn unset_attributes_never_match() {
        let current = page_stub("a", Playbook::Location);
        let candidate = page_stub("b", Playbook::Location);
        let s = score(&LinkerEntry::from(&current), &LinkerEntry::from(&candidate));
        assert_eq!(s, 2);
    }

    #[test]
    fn static_links_cover_listing_and_properties() {
        let links = Linker::static_links();
        assert_eq!(links.len(), 9);
        assert!(links.iter().any(|l| l.url == "/pages/pg/PG.html"));
    }
}
