//! Shared types passed between the generation, linking, validation and
//! output phases.

use crate::content::Gender;
use crate::slug::Playbook;
use serde::Serialize;

/// One generated page.
///
/// Produced by a playbook renderer with `internal_links` empty and the
/// links placeholder still inside `html_content`. The pipeline fills both in
/// once every page is known, and nothing mutates the page after validation.
#[derive(Debug, Clone)]
pub struct Page {
    pub slug: String,
    /// Public URL, e.g. `/pages/seo/glossary/what-is-a-pg.html`
    pub url: String,
    /// Path relative to the output root, e.g. `glossary/what-is-a-pg.html`
    pub file_path: String,
    pub title: String,
    pub meta_description: String,
    pub h1: String,
    pub primary_keyword: Option<String>,
    pub playbook: Playbook,
    pub keywords: Vec<String>,
    /// Location id this page is about, used for link affinity.
    pub location: Option<String>,
    pub gender: Option<Gender>,
    /// College id this page is about. No playbook sets it today.
    pub college: Option<String>,
    pub html_content: String,
    pub internal_links: Vec<LinkRef>,
}

/// An internal link as rendered into the related-pages block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRef {
    pub title: String,
    pub url: String,
    pub playbook: Playbook,
}

/// One row of `generated-pages-manifest.json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub url: String,
    pub playbook: Playbook,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_keyword: Option<String>,
    /// Number of internal links on the page.
    pub internal_links: usize,
}

impl From<&Page> for ManifestEntry {
    fn from(page: &Page) -> Self {
        Self {
            url: page.url.clone(),
            playbook: page.playbook,
            title: page.title.clone(),
            primary_keyword: page.primary_keyword.clone(),
            internal_links: page.internal_links.len(),
        }
    }
}
