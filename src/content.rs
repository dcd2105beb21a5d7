//! Content fixtures: the structured data every page is generated from.
//!
//! ## Data Directory
//!
//! ```text
//! pseo/data/
//! ├── locations.json      # → location pages
//! ├── personas.json       # → persona pages
//! ├── glossary.json       # → glossary pages (related terms link to each other)
//! ├── comparisons.json    # → comparison pages
//! ├── curations.json      # → curation pages (may reference a location)
//! ├── colleges.json       # lookup for location pages
//! └── amenities.json      # lookup for curation amenity tags
//! ```
//!
//! Each file is a JSON array. All files are read before anything is
//! generated. Only the identity field (`id` or `slug`) is required; a
//! missing prose or list field defaults to empty and renders blank. A file
//! that is missing or not valid JSON fails the load with its name in the
//! error.
//!
//! Cross references between files are ids and are *not* checked here. The
//! renderers drop ids that don't resolve.

use crate::slug::Playbook;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read {file}: {source}")]
    Read {
        file: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid content in {file}: {source}")]
    Parse {
        file: PathBuf,
        source: serde_json::Error,
    },
}

/// Audience a page is written for.
///
/// Matched exactly on `female`, `male` and `all`. Anything else is kept as
/// written in `Other` so an unexpected value still renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Gender {
    Female,
    Male,
    All,
    Other(String),
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        match value.as_str() {
            "female" => Gender::Female,
            "male" => Gender::Male,
            "all" => Gender::All,
            _ => Gender::Other(value),
        }
    }
}

impl Gender {
    /// An empty string in the data, treated as no gender at all.
    pub fn is_blank(&self) -> bool {
        matches!(self, Gender::Other(s) if s.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub avg_rent_range: String,
    #[serde(default)]
    pub nearby_metro: String,
    #[serde(default)]
    pub transport: Vec<String>,
    /// College ids, resolved against `colleges.json`.
    #[serde(default)]
    pub nearby_colleges: Vec<String>,
    /// PG ids, resolved against the property catalog.
    #[serde(default)]
    pub recommended_pgs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Persona {
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Missing renders like any value other than `all` or `female`.
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub pain_points: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FaqEntry {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub a: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlossaryTerm {
    pub id: String,
    pub slug: String,
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub short_definition: String,
    #[serde(default)]
    pub detailed_explanation: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    /// Ids of other glossary terms.
    #[serde(default)]
    pub related_terms: Vec<String>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub name: String,
}

/// Which side of a comparison wins a feature row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    A,
    B,
    #[default]
    #[serde(other)]
    Tie,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub feature: String,
    #[serde(default)]
    pub a: String,
    #[serde(default)]
    pub b: String,
    #[serde(default)]
    pub winner: Winner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comparison {
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    pub entity_a: Entity,
    #[serde(default)]
    pub entity_b: Entity,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub verdict: String,
    #[serde(default)]
    pub best_for_a: String,
    #[serde(default)]
    pub best_for_b: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Curation {
    pub slug: String,
    #[serde(default)]
    pub title: String,
    /// Location id, resolved against `locations.json`.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub ranking_factors: Vec<String>,
    /// PG ids in rank order, resolved against the property catalog.
    #[serde(default)]
    pub pgs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct College {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub programs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Amenity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Every fixture collection, loaded once per run.
#[derive(Debug, Clone, Default)]
pub struct ContentSet {
    pub locations: Vec<Location>,
    pub personas: Vec<Persona>,
    pub glossary: Vec<GlossaryTerm>,
    pub comparisons: Vec<Comparison>,
    pub curations: Vec<Curation>,
    pub colleges: Vec<College>,
    pub amenities: Vec<Amenity>,
}

/// A single record tagged with the playbook that renders it.
#[derive(Debug, Clone, Copy)]
pub enum ContentRecord<'a> {
    Location(&'a Location),
    Persona(&'a Persona),
    Glossary(&'a GlossaryTerm),
    Comparison(&'a Comparison),
    Curation(&'a Curation),
}

impl ContentRecord<'_> {
    pub fn playbook(&self) -> Playbook {
        match self {
            ContentRecord::Location(_) => Playbook::Location,
            ContentRecord::Persona(_) => Playbook::Persona,
            ContentRecord::Glossary(_) => Playbook::Glossary,
            ContentRecord::Comparison(_) => Playbook::Comparison,
            ContentRecord::Curation(_) => Playbook::Curation,
        }
    }
}

impl ContentSet {
    /// Load all seven fixture files from `data_dir`.
    pub fn load(data_dir: &Path) -> Result<Self, ContentError> {
        Ok(Self {
            locations: load_json(data_dir, "locations.json")?,
            personas: load_json(data_dir, "personas.json")?,
            glossary: load_json(data_dir, "glossary.json")?,
            comparisons: load_json(data_dir, "comparisons.json")?,
            curations: load_json(data_dir, "curations.json")?,
            colleges: load_json(data_dir, "colleges.json")?,
            amenities: load_json(data_dir, "amenities.json")?,
        })
    }

    /// All renderable records in generation order: locations, personas,
    /// glossary, comparisons, curations.
    pub fn records(&self) -> impl Iterator<Item = ContentRecord<'_>> {
        let locations = self.locations.iter().map(ContentRecord::Location);
        let personas = self.personas.iter().map(ContentRecord::Persona);
        let glossary = self.glossary.iter().map(ContentRecord::Glossary);
        let comparisons = self.comparisons.iter().map(ContentRecord::Comparison);
        let curations = self.curations.iter().map(ContentRecord::Curation);
        locations
            .chain(personas)
            .chain(glossary)
            .chain(comparisons)
            .chain(curations)
    }

    pub fn record_count(&self) -> usize {
        self.locations.len()
            + self.personas.len()
            + self.glossary.len()
            + self.comparisons.len()
            + self.curations.len()
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn college(&self, id: &str) -> Option<&College> {
        self.colleges.iter().find(|c| c.id == id)
    }

    pub fn glossary_term(&self, id: &str) -> Option<&GlossaryTerm> {
        self.glossary.iter().find(|g| g.id == id)
    }

    /// Amenity by display name, case-insensitive.
    pub fn amenity_named(&self, name: &str) -> Option<&Amenity> {
        self.amenities
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }
}

fn load_json<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Vec<T>, ContentError> {
    let file = dir.join(name);
    let text = fs::read_to_string(&file).map_err(|source| ContentError::Read {
        file: file.clone(),
        source,
    })?;
    let records: Vec<T> =
        serde_json::from_str(&text).map_err(|source| ContentError::Parse { file, source })?;
    tracing::debug!(file = name, records = records.len(), "loaded fixture");
    Ok(records)
}
