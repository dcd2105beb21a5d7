//! Audience pages: "Best PG for working women", "PG for students", ...

use crate::content::{ContentSet, Gender, Persona};
use crate::render::{self, Crumb, Faq, PageShell, SiteContext, truncate_chars};
use crate::slug::{Playbook, build_file_path, build_url};
use crate::types::Page;
use maud::{Markup, html};

const META_EXCERPT: usize = 130;

pub fn render(persona: &Persona, _content: &ContentSet, site: &SiteContext) -> Page {
    let slug = persona.slug.clone();
    let url = build_url(Playbook::Persona, &slug);
    let title = site.branded(&persona.title);
    let meta_description = format!(
        "{} — {}...",
        persona.title,
        truncate_chars(&persona.description, META_EXCERPT)
    );

    let crumbs = [
        Crumb::new("Home", "/"),
        Crumb::new("PG Listings", "/pages/pg/PG.html"),
        Crumb::new(persona.name.clone(), url.clone()),
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
        article(persona, &site.settings.brand),
    );

    Page {
        file_path: build_file_path(Playbook::Persona, &slug),
        slug,
        url,
        title,
        meta_description,
        h1: persona.title.clone(),
        primary_keyword: persona.keywords.first().cloned(),
        playbook: Playbook::Persona,
        keywords: persona.keywords.clone(),
        location: None,
        gender: persona.gender.clone(),
        college: None,
        html_content,
        internal_links: Vec::new(),
    }
}

/// Badge for the meta bar. Only `all` goes without one; any value other
/// than `female`, including a missing one, is labelled for boys.
fn gender_label(gender: Option<&Gender>) -> Option<&'static str> {
    match gender {
        Some(Gender::All) => None,
        Some(Gender::Female) => Some("Girls Only"),
        _ => Some("Boys Only"),
    }
}

fn article(persona: &Persona, brand: &str) -> Markup {
    let audience = persona.name.to_lowercase();
    let faqs = [
        Faq::new(
            format!("What is the best PG for {audience} in Delhi?"),
            format!(
                "{brand} offers some of the best PG options for {audience} near Ashok Nagar and \
                 Vasundhara Enclave, Delhi. Our PGs include furnished rooms, 4 meals/day, WiFi, and \
                 24/7 security."
            ),
        ),
        Faq::new(
            format!("How much does a PG cost for {audience}?"),
            format!(
                "PG prices for {audience} at {brand} start from ₹7,500/month for sharing rooms and \
                 go up to ₹25,000/month for single AC rooms, all inclusive of meals and services."
            ),
        ),
        Faq::new(
            format!("Is {brand} PG safe for {audience}?"),
            "Absolutely. All our PGs feature 24/7 CCTV surveillance, security guards, fire safety \
             equipment, and verified management. We also have dedicated girls-only PGs with female \
             staff.",
        ),
    ];

    html! {
        h1 { (persona.title) }
        div.meta-bar {
            span.meta-item { "👤 For: " (persona.name) }
            @if let Some(label) = gender_label(persona.gender.as_ref()) {
                span.meta-item { "🏷️ " (label) }
            }
        }

        section.content-section {
            h2 { "Why " (persona.name) " Need the Right PG" }
            p { (persona.description) }
        }

        section.content-section {
            h2 { "Common Challenges for " (persona.name) }
            (render::text_list(Some("icon-list challenge-list"), &persona.pain_points))
        }

        section.content-section {
            h2 { "How " (brand) " Solves These Problems" }
            (render::text_list(Some("icon-list solution-list"), &persona.solutions))
        }

        section.content-section {
            h2 { "Benefits of Choosing " (brand) }
            (render::text_list(Some("icon-list benefit-list"), &persona.benefits))
        }

        (render::faq_section(&faqs))
    }
}
