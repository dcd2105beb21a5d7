//! # pseo-gen
//!
//! A programmatic-SEO page generator for a PG (paying guest) listing site.
//! Structured JSON content goes in; a few hundred static HTML pages, a
//! sitemap and a manifest come out, each page linked to its most relevant
//! neighbours and checked against a set of quality gates.
//!
//! # Architecture: Two-Phase Pipeline
//!
//! ```text
//! pseo/data/*.json ─► playbooks ─► Vec<Page> ─► linker ─► validate ─► pages/seo/**.html
//!                     (render)      placeholder   splice     report    sitemap.xml
//!                                                                      manifest.json
//! ```
//!
//! Every page must exist before any page can be linked: link selection scores
//! each page against all others. So pages are rendered with a
//! `{{INTERNAL_LINKS}}` placeholder first, then the linker resolves and
//! splices the related-pages block into each body.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Loads the seven fixture files into typed records |
//! | [`catalog`] | The compiled-in table of PG properties pages can recommend |
//! | [`playbooks`] | One renderer per page family: location, persona, glossary, comparison, curation |
//! | [`render`] | Shared Maud components: document shell, breadcrumbs, FAQ blocks, JSON-LD |
//! | [`linker`] | Relevance-scored internal link selection |
//! | [`validate`] | Uniqueness, length, required-field and link-count checks |
//! | [`sitemap`] | `sitemap.xml` for fixed site pages plus every generated page |
//! | [`slug`] | Slugs, URLs and output paths per playbook |
//! | [`pipeline`] | Runs the phases in order and writes the output |
//! | [`config`] | `pseo.toml` loading, merging over stock defaults, validation |
//! | [`types`] | `Page`, `LinkRef` and manifest rows shared between phases |
//! | [`output`] | CLI summary formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over String Templates
//!
//! Pages are built from typed records with [Maud](https://maud.lambda.xyz/).
//! Every interpolated value is escaped, and a malformed tag is a build error.
//!
//! ## Report-Only Validation
//!
//! A page that fails a check is still written. Thin or duplicate pages are
//! surfaced as warnings so content can be fixed without blocking a deploy.
//!
//! ## Deterministic Output
//!
//! Generation order is fixed (locations, personas, glossary, comparisons,
//! curations), link ties break by registration order, and the only clock
//! read is the run date. Two runs over the same data on the same day produce
//! identical files.

pub mod catalog;
pub mod config;
pub mod content;
pub mod linker;
pub mod output;
pub mod pipeline;
pub mod playbooks;
pub mod render;
pub mod sitemap;
pub mod slug;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
