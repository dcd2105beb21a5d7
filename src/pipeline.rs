//! End-to-end generation run.
//!
//! ```text
//! 1. Load      pseo/data/*.json      →  ContentSet
//! 2. Generate  ContentSet            →  Vec<Page>       (placeholder in every body)
//! 3. Link      register all, then resolve links per page and splice them in
//! 4. Validate  fresh ValidationContext, report-only
//! 5. Write     pages (parallel), sitemap.xml, manifest   (skipped on dry run)
//! ```
//!
//! Linking needs every page registered before any page asks for links, so
//! generation and linking are two passes over the full page list. Pages are
//! never mutated after validation.

use crate::config::{SiteConfig, ValidationConfig};
use crate::content::{ContentError, ContentSet};
use crate::linker::Linker;
use crate::playbooks;
use crate::render::{LINKS_PLACEHOLDER, SiteContext, internal_links_html};
use crate::sitemap;
use crate::slug::Playbook;
use crate::types::{ManifestEntry, Page};
use crate::validate::{ValidationContext, ValidationResult, ValidationStats};
use chrono::NaiveDate;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Subdirectories of the output root created before any page is written.
const OUTPUT_SUBDIRS: &[&str] = &["glossary", "directory"];

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Stop after validation; write nothing.
    pub dry_run: bool,
    /// Sitemap `lastmod` and the footer year.
    pub today: NaiveDate,
}

/// Outcome of validating every page in a run.
#[derive(Debug, Clone, Default)]
pub struct ValidationSummary {
    pub valid: usize,
    pub invalid: usize,
    /// Failing pages in generation order.
    pub failures: Vec<ValidationResult>,
    pub stats: ValidationStats,
}

/// Where a non-dry run put its output.
#[derive(Debug, Clone)]
pub struct WriteSummary {
    pub pages_written: usize,
    pub output_dir: PathBuf,
    pub sitemap_urls: usize,
    pub sitemap_path: PathBuf,
    pub manifest_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    /// Page count per playbook, in generation order. Playbooks with no
    /// records are omitted.
    pub generated: Vec<(Playbook, usize)>,
    pub validation: ValidationSummary,
    /// `None` on a dry run.
    pub written: Option<WriteSummary>,
}

impl RunReport {
    pub fn total_pages(&self) -> usize {
        self.generated.iter().map(|(_, n)| n).sum()
    }
}

/// Run the whole pipeline against the project at `root`.
pub fn run(
    config: &SiteConfig,
    root: &Path,
    options: RunOptions,
) -> Result<RunReport, PipelineError> {
    let paths = config.paths.resolve(root);
    tracing::info!(data_dir = %paths.data_dir.display(), "loading content");
    let content = ContentSet::load(&paths.data_dir)?;

    let site = SiteContext::new(config.site.clone(), options.today);
    let mut pages = playbooks::generate_all(&content, &site);
    link_pages(&mut pages, config.linking.max_links);
    let validation = validate_pages(&pages, config.validation);

    let generated = count_by_playbook(&pages);
    if options.dry_run {
        tracing::info!("dry run, nothing written");
        return Ok(RunReport {
            generated,
            validation,
            written: None,
        });
    }

    let pages_written = write_pages(&pages, &paths.output_dir)?;
    let sitemap_urls = sitemap::generate_sitemap(
        &pages,
        &paths.sitemap,
        &config.site.base_url,
        options.today,
    )
    .map_err(|source| PipelineError::Write {
        path: paths.sitemap.clone(),
        source,
    })?;
    write_manifest(&pages, &paths.manifest)?;

    Ok(RunReport {
        generated,
        validation,
        written: Some(WriteSummary {
            pages_written,
            output_dir: paths.output_dir,
            sitemap_urls,
            sitemap_path: paths.sitemap,
            manifest_path: paths.manifest,
        }),
    })
}

/// Register every page, then give each one its links and splice the
/// related-pages block into its body.
pub fn link_pages(pages: &mut [Page], max_links: usize) -> Linker {
    let mut linker = Linker::new();
    for page in pages.iter() {
        linker.register(page);
    }
    for page in pages.iter_mut() {
        let links = linker.get_links(&page.slug, max_links);
        page.html_content = page
            .html_content
            .replacen(LINKS_PLACEHOLDER, &internal_links_html(&links), 1);
        page.internal_links = links;
    }
    tracing::info!(pages = linker.len(), max_links, "internal links resolved");
    linker
}

/// Validate every page with a fresh context. Failures are logged, not fatal.
pub fn validate_pages(pages: &[Page], thresholds: ValidationConfig) -> ValidationSummary {
    let mut ctx = ValidationContext::with_thresholds(thresholds);
    let mut summary = ValidationSummary::default();
    for page in pages {
        let result = ctx.validate_page(page);
        if result.valid {
            summary.valid += 1;
        } else {
            let issues: Vec<String> = result.errors.iter().map(ToString::to_string).collect();
            tracing::warn!(slug = %result.slug, "validation: {}", issues.join(", "));
            summary.invalid += 1;
            summary.failures.push(result);
        }
    }
    summary.stats = ctx.stats();
    summary
}

/// Write every page under `output_dir`. Returns the number written.
pub fn write_pages(pages: &[Page], output_dir: &Path) -> Result<usize, PipelineError> {
    create_dir(output_dir)?;
    for sub in OUTPUT_SUBDIRS {
        create_dir(&output_dir.join(sub))?;
    }

    pages.par_iter().try_for_each(|page| {
        let path = output_dir.join(&page.file_path);
        if let Some(parent) = path.parent() {
            create_dir(parent)?;
        }
        fs::write(&path, &page.html_content).map_err(|source| PipelineError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "page written");
        Ok::<(), PipelineError>(())
    })?;

    tracing::info!(pages = pages.len(), dir = %output_dir.display(), "pages written");
    Ok(pages.len())
}

/// Write the JSON manifest: one entry per page, in generation order.
pub fn write_manifest(pages: &[Page], path: &Path) -> Result<(), PipelineError> {
    let entries: Vec<ManifestEntry> = pages.iter().map(ManifestEntry::from).collect();
    let json = serde_json::to_string_pretty(&entries)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir(parent)?;
    }
    fs::write(path, json).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(entries = entries.len(), path = %path.display(), "manifest written");
    Ok(())
}

fn create_dir(dir: &Path) -> Result<(), PipelineError> {
    fs::create_dir_all(dir).map_err(|source| PipelineError::Write {
        path: dir.to_path_buf(),
        source,
    })
}

fn count_by_playbook(pages: &[Page]) -> Vec<(Playbook, usize)> {
    Playbook::GENERATED
        .iter()
        .map(|&playbook| {
            let count = pages.iter().filter(|p| p.playbook == playbook).count();
            (playbook, count)
        })
        .filter(|&(_, count)| count > 0)
        .collect()
}
