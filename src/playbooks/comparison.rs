//! Side-by-side pages: "PG vs Hostel", "PG vs Flat", ...

use crate::content::{Comparison, ContentSet, Winner};
use crate::render::{self, Crumb, Faq, PageShell, SiteContext, truncate_chars};
use crate::slug::{Playbook, build_file_path, build_url};
use crate::types::Page;
use maud::{Markup, html};

const META_EXCERPT: usize = 150;

pub fn render(cmp: &Comparison, _content: &ContentSet, site: &SiteContext) -> Page {
    let slug = cmp.slug.clone();
    let url = build_url(Playbook::Comparison, &slug);
    let title = site.branded(&cmp.title);
    let meta_description = format!("{}...", truncate_chars(&cmp.introduction, META_EXCERPT));

    let crumbs = [
        Crumb::new("Home", "/"),
        Crumb::new("Comparisons", "#"),
        Crumb::new(cmp.title.clone(), url.clone()),
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
        article(cmp, &site.settings.brand),
    );

    Page {
        file_path: build_file_path(Playbook::Comparison, &slug),
        slug,
        url,
        title,
        meta_description,
        h1: cmp.title.clone(),
        primary_keyword: cmp.keywords.first().cloned(),
        playbook: Playbook::Comparison,
        keywords: cmp.keywords.clone(),
        location: None,
        gender: None,
        college: None,
        html_content,
        internal_links: Vec::new(),
    }
}

fn winner_class(winner: Winner) -> Option<&'static str> {
    match winner {
        Winner::A => Some("winner-a"),
        Winner::B => Some("winner-b"),
        Winner::Tie => None,
    }
}

fn article(cmp: &Comparison, brand: &str) -> Markup {
    let a = &cmp.entity_a.name;
    let b = &cmp.entity_b.name;
    let faqs = [
        Faq::new(
            format!("Which is better for students — {a} or {b}?"),
            cmp.verdict.clone(),
        ),
        Faq::new(
            format!("Which is cheaper — {a} or {b}?"),
            format!(
                "It depends on what's included. While {b} may have lower base rent, {a} often \
                 includes meals, WiFi, and services, making the total cost comparable or even lower."
            ),
        ),
        Faq::new(
            format!("What does {brand} recommend?"),
            format!(
                "{brand} PGs combine the best of both worlds — the comfort and personal touch of a \
                 home-like PG with professional management and modern amenities."
            ),
        ),
    ];

    html! {
        h1 { (cmp.title) }

        section.content-section {
            p { (cmp.introduction) }
        }

        section.content-section {
            h2 { "Feature Comparison: " (a) " vs " (b) }
            div.comparison-table-wrapper {
                table.comparison-table {
                    thead {
                        tr { th { "Feature" } th { (a) } th { (b) } }
                    }
                    tbody {
                        @for row in &cmp.features {
                            tr class=[winner_class(row.winner)] {
                                td { (row.feature) }
                                td { (row.a) }
                                td { (row.b) }
                            }
                        }
                    }
                }
            }
        }

        section.content-section.verdict-section {
            h2 { "Our Verdict" }
            p { (cmp.verdict) }
            div.verdict-cards {
                div.verdict-card {
                    h3 { "Best For — " (a) }
                    p { (cmp.best_for_a) }
                }
                div.verdict-card {
                    h3 { "Best For — " (b) }
                    p { (cmp.best_for_b) }
                }
            }
        }

        (render::faq_section(&faqs))
    }
}
