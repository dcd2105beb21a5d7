//! Ranked lists: "Top 5 PGs near Ashok Nagar", "Best girls PGs in Delhi", ...

use crate::catalog::{self, Property};
use crate::content::{ContentSet, Curation};
use crate::render::{self, Crumb, Faq, PageShell, SiteContext};
use crate::slug::{Playbook, build_file_path, build_url};
use crate::types::Page;
use maud::{Markup, html};

pub fn render(cur: &Curation, content: &ContentSet, site: &SiteContext) -> Page {
    let slug = cur.slug.clone();
    let url = build_url(Playbook::Curation, &slug);
    let title = site.branded(&cur.title);
    let lower = cur.title.to_lowercase();
    let meta_description = format!(
        "Discover the {lower}. Ranked by {}. Verified listings with photos and reviews.",
        top_factors(cur)
    );

    let crumbs = [
        Crumb::new("Home", "/"),
        Crumb::new("Best PGs", "/pages/pg/PG.html"),
        Crumb::new(cur.title.clone(), url.clone()),
    ];

    let html_content = render::render_document(
        site,
        PageShell {
            title: &title,
            meta_description: &meta_description,
            canonical: &url,
            breadcrumbs: &crumbs,
            article_class: None,
            schema: None,
        },
        article(cur, content, &site.settings.brand),
    );

    Page {
        file_path: build_file_path(Playbook::Curation, &slug),
        slug,
        url,
        title,
        meta_description,
        h1: cur.title.clone(),
        primary_keyword: Some(lower.clone()),
        playbook: Playbook::Curation,
        keywords: vec![lower],
        location: cur.location.clone(),
        gender: None,
        college: None,
        html_content,
        internal_links: Vec::new(),
    }
}

/// First three ranking factors, comma separated.
fn top_factors(cur: &Curation) -> String {
    cur.ranking_factors
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn article(cur: &Curation, content: &ContentSet, brand: &str) -> Markup {
    let location = cur.location.as_deref().and_then(|id| {
        let found = content.location(id);
        if found.is_none() {
            tracing::debug!(curation = %cur.slug, location = %id, "dropping unknown location id");
        }
        found
    });
    // Ranks follow the position in the curation's list, so an unknown id
    // leaves a gap in the numbering.
    let ranked: Vec<(usize, &Property)> = cur
        .pgs
        .iter()
        .enumerate()
        .filter_map(|(i, id)| {
            let found = catalog::property(id);
            if found.is_none() {
                tracing::debug!(curation = %cur.slug, id = %id, "dropping unknown property id");
            }
            found.map(|pg| (i + 1, pg))
        })
        .collect();
    let factors = top_factors(cur);
    let faqs = [
        Faq::new(
            "How were these PGs selected?",
            format!(
                "Each PG was evaluated based on {factors}, and verified through physical \
                 inspections and resident reviews."
            ),
        ),
        Faq::new(
            "Are these PGs verified?",
            format!(
                "Yes, all PGs listed here are operated by {brand} and are physically verified \
                 with documented amenities and transparent pricing."
            ),
        ),
        Faq::new(
            "Can I visit before booking?",
            "Absolutely! We encourage visiting our PGs before making a decision. Schedule a visit \
             through our website or call us directly.",
        ),
    ];

    html! {
        h1 { (cur.title) }
        @if let Some(loc) = location {
            div.meta-bar {
                span.meta-item { "📍 " (loc.name) ", " (loc.city) }
            }
        }

        section.content-section {
            h2 { "How We Ranked These PGs" }
            p {
                "Our rankings are based on real resident feedback, facility inspections, and the \
                 following criteria:"
            }
            ol.ranking-criteria {
                @for (i, factor) in cur.ranking_factors.iter().enumerate() {
                    li { strong { (i + 1) "." } " " (factor) }
                }
            }
        }

        section.content-section {
            h2 { "Top PG Picks" }
            div.curation-listings {
                @for (rank, pg) in &ranked {
                    (curation_card(*rank, pg, content))
                }
            }
        }

        (render::faq_section(&faqs))
    }
}

fn curation_card(rank: usize, pg: &Property, content: &ContentSet) -> Markup {
    html! {
        div.curation-card {
            div.curation-rank { "#" (rank) }
            h3 { a href=(pg.url) { (pg.name) } }
            div.pg-meta {
                span.tag { (pg.gender) }
                " "
                span.price { "From " (pg.price) "/mo" }
            }
            div.amenity-tags {
                @for amenity in pg.amenities {
                    span.amenity-tag
                        title=[content.amenity_named(amenity).and_then(|a| a.description.as_deref())]
                    { (amenity) }
                    " "
                }
            }
            a.btn-sm href=(pg.url) { "View Details →" }
        }
    }
}
