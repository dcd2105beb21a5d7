//! Slug and URL conventions for generated pages.
//!
//! Every generated page lives under `/pages/seo/`. Two playbooks get their own
//! subdirectory, everything else sits flat at the root of the output tree:
//!
//! ```text
//! /pages/seo/pg-near-ashok-nagar.html          # location, persona, comparison, curation
//! /pages/seo/glossary/what-is-a-pg.html        # glossary
//! /pages/seo/directory/sanvi-girls-pg.html     # directory
//! ```
//!
//! [`build_url`] and [`build_file_path`] apply the same partitioning, one for
//! the public URL and one for the path relative to the output root.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// URL prefix shared by every generated page.
pub const SEO_BASE: &str = "/pages/seo";

/// Content-generation strategy a page was produced by.
///
/// `Directory` has no generator of its own; it exists so URLs, file paths and
/// sitemap priorities for directory pages are partitioned consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Playbook {
    Location,
    Persona,
    Glossary,
    Comparison,
    Curation,
    Directory,
}

impl Playbook {
    /// The five playbooks that have a generator, in generation order.
    pub const GENERATED: [Playbook; 5] = [
        Playbook::Location,
        Playbook::Persona,
        Playbook::Glossary,
        Playbook::Comparison,
        Playbook::Curation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Playbook::Location => "location",
            Playbook::Persona => "persona",
            Playbook::Glossary => "glossary",
            Playbook::Comparison => "comparison",
            Playbook::Curation => "curation",
            Playbook::Directory => "directory",
        }
    }

    /// Output subdirectory, if this playbook is not written flat.
    fn subdir(self) -> Option<&'static str> {
        match self {
            Playbook::Glossary => Some("glossary"),
            Playbook::Directory => Some("directory"),
            _ => None,
        }
    }
}

impl fmt::Display for Playbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlaybook(pub String);

impl fmt::Display for UnknownPlaybook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown playbook: {}", self.0)
    }
}

impl std::error::Error for UnknownPlaybook {}

impl FromStr for Playbook {
    type Err = UnknownPlaybook;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "location" => Ok(Playbook::Location),
            "persona" => Ok(Playbook::Persona),
            "glossary" => Ok(Playbook::Glossary),
            "comparison" => Ok(Playbook::Comparison),
            "curation" => Ok(Playbook::Curation),
            "directory" => Ok(Playbook::Directory),
            other => Err(UnknownPlaybook(other.to_string())),
        }
    }
}

/// Convert free text into a URL slug.
///
/// Lowercases, spells `&` as `and`, drops anything outside `[a-z0-9]`,
/// whitespace and `-`, then turns whitespace runs into single dashes and
/// trims dashes from both ends.
///
/// - `"Paying Guest & Co."` → `"paying-guest-and-co"`
/// - `"  PG -- near   Metro "` → `"pg-near-metro"`
/// - `""` → `""`
pub fn to_slug(text: &str) -> String {
    let lowered = text.to_lowercase().replace('&', "and");
    let mut slug = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        let c = if c.is_whitespace() { '-' } else { c };
        let keep = c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-';
        if !keep {
            continue;
        }
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug.trim_matches('-').to_string()
}

/// Public URL of a generated page.
pub fn build_url(playbook: Playbook, slug: &str) -> String {
    match playbook.subdir() {
        Some(dir) => format!("{SEO_BASE}/{dir}/{slug}.html"),
        None => format!("{SEO_BASE}/{slug}.html"),
    }
}

/// Public URL for a raw playbook tag. Unknown tags get the flat form.
pub fn url_for_tag(tag: &str, slug: &str) -> String {
    match tag.parse::<Playbook>() {
        Ok(playbook) => build_url(playbook, slug),
        Err(_) => format!("{SEO_BASE}/{slug}.html"),
    }
}

/// Path of a generated page relative to the output root.
pub fn build_file_path(playbook: Playbook, slug: &str) -> String {
    match playbook.subdir() {
        Some(dir) => format!("{dir}/{slug}.html"),
        None => format!("{slug}.html"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slug_spells_out_ampersand() {
        assert_eq!(to_slug("Paying Guest & Co."), "paying-guest-and-co");
    }

    #[test]
    fn slug_collapses_whitespace_and_dashes() {
        assert_eq!(to_slug("  PG -- near   Metro "), "pg-near-metro");
    }

    #[test]
    fn slug_strips_non_ascii() {
        assert_eq!(to_slug("Rent ₹7,500 / month"), "rent-7500-month");
    }

    #[test]
    fn slug_of_empty_is_empty() {
        assert_eq!(to_slug(""), "");
        assert_eq!(to_slug("!!!"), "");
    }

    #[test]
    fn slug_is_idempotent() {
        let inputs = [
            "Paying Guest & Co.",
            "--Already-a-slug--",
            "PG near Ashok Nagar, Delhi",
            "Tabs\tand\nnewlines",
            "ÉCOLE & Café",
            "",
        ];
        for input in inputs {
            let once = to_slug(input);
            assert_eq!(to_slug(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn glossary_url_has_subdirectory() {
        assert_eq!(
            build_url(Playbook::Glossary, "what-is-a-pg"),
            "/pages/seo/glossary/what-is-a-pg.html"
        );
    }

    #[test]
    fn directory_url_has_subdirectory() {
        assert_eq!(
            build_url(Playbook::Directory, "balaji-pg"),
            "/pages/seo/directory/balaji-pg.html"
        );
    }

    #[test]
    fn flat_playbooks_share_root() {
        for playbook in [
            Playbook::Location,
            Playbook::Persona,
            Playbook::Comparison,
            Playbook::Curation,
        ] {
            assert_eq!(build_url(playbook, "x"), "/pages/seo/x.html");
            assert_eq!(build_file_path(playbook, "x"), "x.html");
        }
    }

    #[test]
    fn unknown_tag_falls_back_to_flat_url() {
        assert_eq!(url_for_tag("landing", "x"), "/pages/seo/x.html");
        assert_eq!(
            url_for_tag("glossary", "x"),
            "/pages/seo/glossary/x.html"
        );
    }

    #[test]
    fn file_path_matches_url_partitioning() {
        assert_eq!(
            build_file_path(Playbook::Glossary, "pg"),
            "glossary/pg.html"
        );
        assert_eq!(
            build_file_path(Playbook::Directory, "pg"),
            "directory/pg.html"
        );
    }

    #[test]
    fn partitioned_urls_are_unique() {
        let slugs = ["a", "b", "what-is-a-pg"];
        let mut urls = HashSet::new();
        for playbook in [Playbook::Location, Playbook::Glossary, Playbook::Directory] {
            for slug in slugs {
                assert!(urls.insert(build_url(playbook, slug)));
            }
        }
    }

    #[test]
    fn playbook_tag_roundtrip() {
        for playbook in Playbook::GENERATED {
            assert_eq!(playbook.as_str().parse::<Playbook>(), Ok(playbook));
        }
        assert!("blog".parse::<Playbook>().is_err());
    }
}
