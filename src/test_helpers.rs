//! Shared test utilities for the pseo-gen test suite.
//!
//! Provides the fixture data set, a fixed render context, and page builders
//! for linker and validator tests that don't need real rendered HTML.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let content = ContentSet::load(tmp.path()).unwrap();
//!
//! let page = passing_page("pg-near-ashok-nagar", Playbook::Location);
//! assert!(ValidationContext::new().validate_page(&page).valid);
//! ```

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::SiteSettings;
use crate::content::ContentSet;
use crate::render::SiteContext;
use crate::slug::{Playbook, build_file_path, build_url};
use crate::types::{LinkRef, Page};

// =========================================================================
// Fixture setup
// =========================================================================

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/data")
}

/// Copy `fixtures/data/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    for entry in std::fs::read_dir(fixtures_dir()).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

/// The fixture data set, read in place.
pub fn fixture_content() -> ContentSet {
    ContentSet::load(&fixtures_dir())
        .unwrap_or_else(|e| panic!("fixtures/data failed to load: {e}"))
}

/// Default site settings on a fixed date.
pub fn test_site() -> SiteContext {
    SiteContext::new(
        SiteSettings::default(),
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
    )
}

// =========================================================================
// Page builders
// =========================================================================

/// A minimal page: unique title, short body, no links, no scoring attributes.
///
/// Fails the length and link checks; use [`passing_page`] for a page that
/// validates.
pub fn page_stub(slug: &str, playbook: Playbook) -> Page {
    Page {
        slug: slug.to_string(),
        url: build_url(playbook, slug),
        file_path: build_file_path(playbook, slug),
        title: format!("Title for {slug}"),
        meta_description: format!("Description for {slug}"),
        h1: format!("Heading for {slug}"),
        primary_keyword: None,
        playbook,
        keywords: Vec::new(),
        location: None,
        gender: None,
        college: None,
        html_content: "<p>stub</p>".to_string(),
        internal_links: Vec::new(),
    }
}

/// A page that passes every check under the default thresholds.
pub fn passing_page(slug: &str, playbook: Playbook) -> Page {
    let links = (0..3)
        .map(|i| LinkRef {
            title: format!("Related {i}"),
            url: build_url(Playbook::Glossary, &format!("related-{i}")),
            playbook: Playbook::Glossary,
        })
        .collect();
    Page {
        primary_keyword: Some(format!("keyword for {slug}")),
        html_content: "x".repeat(6000),
        internal_links: links,
        ..page_stub(slug, playbook)
    }
}
