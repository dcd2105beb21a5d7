//! "PG near {place}" pages.

use crate::catalog;
use crate::content::{College, ContentSet, Location};
use crate::render::{self, Crumb, Faq, PageShell, SiteContext};
use crate::slug::{Playbook, build_file_path, build_url};
use crate::types::Page;
use maud::{Markup, html};

pub fn render(loc: &Location, content: &ContentSet, site: &SiteContext) -> Page {
    let slug = format!("pg-near-{}", loc.id);
    let url = build_url(Playbook::Location, &slug);
    let title = site.branded(&format!("PG near {}, {}", loc.name, loc.city));
    let meta_description = format!(
        "Find the best PG accommodation near {}, {}. Fully furnished rooms with meals, WiFi, \
         security. Starting ₹7,500/month. Visit {}.",
        loc.name, loc.city, site.settings.brand
    );
    let primary_keyword = format!("PG near {}", loc.name);

    let crumbs = [
        Crumb::new("Home", "/"),
        Crumb::new("PG Listings", "/pages/pg/PG.html"),
        Crumb::new(primary_keyword.clone(), url.clone()),
    ];
    let schema_faqs = [
        Faq::new(
            format!("How much does a PG cost near {}?", loc.name),
            format!("PG rents near {} range from {} per month.", loc.name, loc.avg_rent_range),
        ),
        Faq::new(
            format!("Is {} safe for PG residents?", loc.name),
            format!("Yes, {} is a well-established residential area with good safety.", loc.name),
        ),
        Faq::new(
            format!("How to reach {} by metro?", loc.name),
            format!("Nearest metro: {} on the Blue Line.", loc.nearby_metro),
        ),
    ];

    let html_content = render::render_document(
        site,
        PageShell {
            title: &title,
            meta_description: &meta_description,
            canonical: &url,
            breadcrumbs: &crumbs,
            article_class: None,
            schema: Some(render::faq_schema(&schema_faqs)),
        },
        article(loc, content, &site.settings.brand),
    );

    Page {
        file_path: build_file_path(Playbook::Location, &slug),
        slug,
        url,
        title,
        meta_description,
        h1: format!("Best PG near {}", loc.name),
        keywords: vec![
            primary_keyword.clone(),
            format!("hostel {}", loc.name),
            format!("PG {}", loc.city),
        ],
        primary_keyword: Some(primary_keyword),
        playbook: Playbook::Location,
        location: Some(loc.id.clone()),
        gender: None,
        college: None,
        html_content,
        internal_links: Vec::new(),
    }
}

fn article(loc: &Location, content: &ContentSet, brand: &str) -> Markup {
    let properties = catalog::resolve(&loc.recommended_pgs);
    let colleges: Vec<_> = loc
        .nearby_colleges
        .iter()
        .filter_map(|id| {
            let college = content.college(id);
            if college.is_none() {
                tracing::debug!(location = %loc.id, college = %id, "dropping unknown college id");
            }
            college
        })
        .collect();
    let name = &loc.name;

    let faqs = [
        Faq::new(
            format!("How much does a PG cost near {name}?"),
            format!(
                "PG rents near {name} range from {} per month depending on room type, amenities, \
                 and whether meals are included. {brand} offers all-inclusive packages with meals, \
                 WiFi, and housekeeping.",
                loc.avg_rent_range
            ),
        ),
        Faq::new(
            format!("Is {name} safe for PG residents?"),
            format!(
                "Yes, {name} is a well-established residential area with good police presence and \
                 community safety. All {brand} PGs add extra security with 24/7 CCTV surveillance \
                 and security guards."
            ),
        ),
        Faq::new(
            format!("How to reach {name} by metro?"),
            format!(
                "The nearest metro station is {} on the Blue Line. The area is also well-connected \
                 by DTC buses and auto-rickshaws.",
                loc.nearby_metro
            ),
        ),
        Faq::new(
            format!("Are there girls-only PGs near {name}?"),
            format!(
                "Yes, {brand} operates dedicated girls-only PGs near {name} with female staff, \
                 strict visitor policies, and enhanced security measures. Check Sanvi Girls PG and \
                 Lakshmi Girls PG."
            ),
        ),
    ];

    html! {
        h1 { "Best PG Accommodation near " (name) ", " (loc.city) }
        div.meta-bar {
            span.meta-item { "📍 " (name) ", " (loc.city) }
            span.meta-item { "💰 " (loc.avg_rent_range) }
            span.meta-item { "🏠 " (properties.len()) " PGs Available" }
        }

        section.content-section {
            h2 { "About " (name) }
            p { (loc.description) }
            h3 { "Why Choose " (name) " for PG?" }
            (render::text_list(None, &loc.highlights))
        }

        section.content-section {
            h2 { "Best PGs near " (name) }
            p {
                "Here are the top-rated PG accommodations near " (name)
                ", handpicked based on room quality, meals, safety, and value for money."
            }
            div.pg-listings {
                @for pg in &properties {
                    div.pg-listing-card {
                        h3 { a href=(pg.url) { (pg.name) } }
                        div.pg-meta {
                            span.tag { (pg.gender) }
                            " "
                            span.price { "From " (pg.price) "/mo" }
                        }
                        p {
                            "Fully furnished rooms with 4 meals/day, WiFi, laundry, and 24/7 security near "
                            (name) "."
                        }
                        a.btn-sm href=(pg.url) { "View Details →" }
                    }
                }
            }
        }

        @if !colleges.is_empty() {
            section.content-section {
                h2 { "Colleges & Institutions near " (name) }
                p { "Students attending these institutions frequently choose PGs in the " (name) " area:" }
                ul {
                    @for college in &colleges {
                        li {
                            strong { (college.name) }
                            " — " (college.kind)
                            " (" (program_summary(college)) ")"
                        }
                    }
                }
            }
        }

        section.content-section {
            h2 { "Transport & Connectivity" }
            p { strong { "Nearest Metro:" } " " (loc.nearby_metro) }
            (render::text_list(None, &loc.transport))
        }

        (render::faq_section(&faqs))
    }
}

/// First three programs, comma separated.
fn program_summary(college: &College) -> String {
    college
        .programs
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn ashok_nagar() -> Location {
        serde_json::from_value(serde_json::json!({
            "id": "ashok-nagar",
            "name": "Ashok Nagar",
            "city": "Delhi",
            "description": "A quiet residential pocket in East Delhi.",
            "highlights": ["Close to the Blue Line"],
            "avg_rent_range": "₹7,500 – ₹25,000",
            "nearby_metro": "Ashok Nagar Metro",
            "transport": ["DTC buses on NH-24"],
            "nearby_colleges": ["mac", "no-such-college"],
            "recommended_pgs": ["sanvi-girls-pg", "unknown-id"]
        }))
        .unwrap()
    }

    #[test]
    fn unknown_property_is_silently_omitted() {
        let page = render(&ashok_nagar(), &fixture_content(), &test_site());
        assert!(page.html_content.contains("/pages/pg/sanvi-girls-pg.html"));
        assert!(page.html_content.contains("Sanvi Girls PG"));
        assert_eq!(page.html_content.matches("pg-listing-card").count(), 1);
        assert!(!page.html_content.contains("unknown-id"));
        assert!(page.html_content.contains("1 PGs Available"));
    }

    #[test]
    fn page_identity() {
        let page = render(&ashok_nagar(), &fixture_content(), &test_site());
        assert_eq!(page.slug, "pg-near-ashok-nagar");
        assert_eq!(page.url, "/pages/seo/pg-near-ashok-nagar.html");
        assert_eq!(page.file_path, "pg-near-ashok-nagar.html");
        assert_eq!(page.title, "PG near Ashok Nagar, Delhi | Kangaroo House");
        assert_eq!(page.h1, "Best PG near Ashok Nagar");
        assert_eq!(page.primary_keyword.as_deref(), Some("PG near Ashok Nagar"));
        assert_eq!(
            page.keywords,
            vec!["PG near Ashok Nagar", "hostel Ashok Nagar", "PG Delhi"]
        );
        assert_eq!(page.location.as_deref(), Some("ashok-nagar"));
    }

    #[test]
    fn known_colleges_are_listed() {
        let page = render(&ashok_nagar(), &fixture_content(), &test_site());
        assert!(
            page.html_content
                .contains("<strong>Maharaja Agrasen College</strong> — Undergraduate (B.Com, BBA, BCA)")
        );
        assert!(!page.html_content.contains("no-such-college"));
    }

    #[test]
    fn college_section_skipped_when_none_resolve() {
        let mut loc = ashok_nagar();
        loc.nearby_colleges = vec!["no-such-college".into()];
        let page = render(&loc, &fixture_content(), &test_site());
        assert!(!page.html_content.contains("Colleges &amp; Institutions"));
    }

    #[test]
    fn faq_schema_embedded() {
        let page = render(&ashok_nagar(), &fixture_content(), &test_site());
        assert!(page.html_content.contains(r#""@type":"FAQPage""#));
        assert!(page.html_content.contains("Nearest metro: Ashok Nagar Metro on the Blue Line."));
    }

    #[test]
    fn record_without_metro_renders_blank() {
        let loc: Location = serde_json::from_value(serde_json::json!({
            "id": "laxmi-nagar",
            "name": "Laxmi Nagar",
            "city": "Delhi"
        }))
        .unwrap();
        let page = render(&loc, &fixture_content(), &test_site());
        assert_eq!(page.url, "/pages/seo/pg-near-laxmi-nagar.html");
        assert_eq!(page.location.as_deref(), Some("laxmi-nagar"));
        assert!(page.html_content.contains("<strong>Nearest Metro:</strong> </p>"));
        assert!(page.html_content.contains("The nearest metro station is  on the Blue Line."));
    }
}
