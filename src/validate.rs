//! Quality gates for generated pages.
//!
//! Validation is report-only: a failing page is still written. The checks
//! exist to surface thin, duplicate or badly linked pages before they ship.
//!
//! Uniqueness is tracked in a [`ValidationContext`] that lives for one run.
//! Every page's slug, title and primary keyword are recorded as seen even
//! when they are duplicates, so [`ValidationStats`] counts distinct values.

use crate::config::ValidationConfig;
use crate::slug::Playbook;
use crate::types::Page;
use std::collections::HashSet;
use thiserror::Error;

/// One reason a page failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),
    #[error("Duplicate title: {0}")]
    DuplicateTitle(String),
    #[error("Duplicate primary keyword: {0}")]
    DuplicateKeyword(String),
    #[error("Content too short: {length} chars (min {min})")]
    ContentTooShort { length: usize, min: usize },
    #[error("Missing {0}")]
    MissingField(&'static str),
    #[error("Insufficient internal links: {count} (min {min})")]
    InsufficientLinks { count: usize, min: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub slug: String,
}

/// Distinct values seen so far in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationStats {
    pub total_slugs: usize,
    pub total_titles: usize,
    pub total_keywords: usize,
}

#[derive(Debug, Default)]
pub struct ValidationContext {
    thresholds: ValidationConfig,
    seen_slugs: HashSet<String>,
    seen_titles: HashSet<String>,
    seen_keywords: HashSet<String>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: ValidationConfig) -> Self {
        Self {
            thresholds,
            ..Self::default()
        }
    }

    /// Forget every slug, title and keyword seen so far.
    pub fn reset(&mut self) {
        self.seen_slugs.clear();
        self.seen_titles.clear();
        self.seen_keywords.clear();
    }

    fn min_length(&self, playbook: Playbook) -> usize {
        match playbook {
            Playbook::Glossary => self.thresholds.min_glossary_length,
            _ => self.thresholds.min_content_length,
        }
    }

    /// Check one page and record it as seen.
    ///
    /// Checks accumulate; a duplicate slug doesn't hide a short body.
    pub fn validate_page(&mut self, page: &Page) -> ValidationResult {
        let mut errors = Vec::new();

        if !self.seen_slugs.insert(page.slug.clone()) {
            errors.push(ValidationIssue::DuplicateSlug(page.slug.clone()));
        }
        if !self.seen_titles.insert(page.title.clone()) {
            errors.push(ValidationIssue::DuplicateTitle(page.title.clone()));
        }
        if let Some(keyword) = page.primary_keyword.as_deref().filter(|k| !k.is_empty()) {
            if !self.seen_keywords.insert(keyword.to_string()) {
                errors.push(ValidationIssue::DuplicateKeyword(keyword.to_string()));
            }
        }

        // UTF-16 code units, the way a browser measures string length.
        let length = page.html_content.encode_utf16().count();
        let min = self.min_length(page.playbook);
        if length < min {
            errors.push(ValidationIssue::ContentTooShort { length, min });
        }

        let required = [
            (page.title.as_str(), "title"),
            (page.meta_description.as_str(), "meta description"),
            (page.h1.as_str(), "H1"),
            (page.slug.as_str(), "slug"),
        ];
        for (value, field) in required {
            if value.is_empty() {
                errors.push(ValidationIssue::MissingField(field));
            }
        }

        let count = page.internal_links.len();
        let min_links = self.thresholds.min_internal_links;
        if count < min_links {
            errors.push(ValidationIssue::InsufficientLinks {
                count,
                min: min_links,
            });
        }

        ValidationResult {
            valid: errors.is_empty(),
            errors,
            slug: page.slug.clone(),
        }
    }

    pub fn stats(&self) -> ValidationStats {
        ValidationStats {
            total_slugs: self.seen_slugs.len(),
            total_titles: self.seen_titles.len(),
            total_keywords: self.seen_keywords.len(),
        }
    }
}
