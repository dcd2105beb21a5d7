//! Glossary pages: one definition per term, cross-linked through related terms.

use crate::content::{ContentSet, GlossaryTerm};
use crate::render::{self, Crumb, Faq, PageShell, SiteContext, truncate_chars};
use crate::slug::{Playbook, build_file_path, build_url};
use crate::types::Page;
use maud::{Markup, html};
use serde_json::json;

/// The "what is a paying guest" page doubles as the glossary hub.
pub const GLOSSARY_HUB: &str = "/pages/seo/glossary/what-is-a-paying-guest.html";

const META_LIMIT: usize = 155;

pub fn render(term: &GlossaryTerm, content: &ContentSet, site: &SiteContext) -> Page {
    let slug = term.slug.clone();
    let url = build_url(Playbook::Glossary, &slug);
    let title = site.branded(&format!("{}: Meaning & Complete Guide", term.term));
    let meta_description = truncate_chars(&term.short_definition, META_LIMIT);
    let lower = term.term.to_lowercase();

    let crumbs = [
        Crumb::new("Home", "/"),
        Crumb::new("Glossary", GLOSSARY_HUB),
        Crumb::new(term.term.clone(), url.clone()),
    ];
    let schema = json!({
        "@context": "https://schema.org",
        "@type": "DefinedTerm",
        "name": term.term,
        "description": term.short_definition,
        "inDefinedTermSet": format!("{}{}", site.settings.base_url, GLOSSARY_HUB),
    });

    let html_content = render::render_document(
        site,
        PageShell {
            title: &title,
            meta_description: &meta_description,
            canonical: &url,
            breadcrumbs: &crumbs,
            article_class: Some("glossary-article"),
            schema: Some(schema),
        },
        article(term, content),
    );

    Page {
        file_path: build_file_path(Playbook::Glossary, &slug),
        slug,
        url,
        title,
        meta_description,
        h1: term.term.clone(),
        primary_keyword: Some(format!("what is {lower}")),
        playbook: Playbook::Glossary,
        keywords: vec![lower.clone(), format!("{lower} meaning"), format!("{lower} in PG")],
        location: None,
        gender: None,
        college: None,
        html_content,
        internal_links: Vec::new(),
    }
}

fn article(term: &GlossaryTerm, content: &ContentSet) -> Markup {
    let related: Vec<&GlossaryTerm> = term
        .related_terms
        .iter()
        .filter_map(|id| {
            let found = content.glossary_term(id);
            if found.is_none() {
                tracing::debug!(term = %term.id, related = %id, "dropping unknown glossary id");
            }
            found
        })
        .collect();
    let faqs: Vec<Faq> = term.faq.iter().map(|f| Faq::new(&f.q, &f.a)).collect();

    html! {
        h1 { (term.term) }
        div.glossary-short-def {
            p { strong { "Definition:" } " " (term.short_definition) }
        }

        section.content-section {
            h2 { "Detailed Explanation" }
            p { (term.detailed_explanation) }
        }

        section.content-section {
            h2 { "Key Points to Know" }
            (render::text_list(Some("icon-list"), &term.key_points))
        }

        section.content-section {
            h2 { "Related Terms" }
            div.related-terms-bar {
                @for other in &related {
                    a.related-term-chip href=(build_url(Playbook::Glossary, &other.slug)) { (other.term) }
                }
            }
        }

        (render::faq_section(&faqs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn term(id: &str, slug: &str, name: &str, related: &[&str]) -> GlossaryTerm {
        serde_json::from_value(json!({
            "id": id,
            "slug": slug,
            "term": name,
            "short_definition": "d".repeat(200),
            "detailed_explanation": "A longer explanation.",
            "key_points": ["One", "Two"],
            "related_terms": related,
            "faq": [{ "q": "Is it common?", "a": "Very." }]
        }))
        .unwrap()
    }

    #[test]
    fn identity_and_keywords() {
        let page = render(
            &term("security-deposit", "security-deposit-meaning", "Security Deposit", &[]),
            &fixture_content(),
            &test_site(),
        );
        assert_eq!(page.url, "/pages/seo/glossary/security-deposit-meaning.html");
        assert_eq!(page.file_path, "glossary/security-deposit-meaning.html");
        assert_eq!(
            page.title,
            "Security Deposit: Meaning & Complete Guide | Kangaroo House"
        );
        assert_eq!(page.h1, "Security Deposit");
        assert_eq!(page.primary_keyword.as_deref(), Some("what is security deposit"));
        assert_eq!(
            page.keywords,
            vec![
                "security deposit",
                "security deposit meaning",
                "security deposit in PG"
            ]
        );
        assert_eq!(page.meta_description, "d".repeat(155));
    }

    #[test]
    fn related_terms_resolve_against_the_glossary() {
        let content = fixture_content();
        let deposit = content.glossary_term("security-deposit").unwrap().clone();
        let page = render(
            &term("x", "x-meaning", "X", &["security-deposit", "not-a-term"]),
            &content,
            &test_site(),
        );
        let chip = format!(r#"href="/pages/seo/glossary/{}.html""#, deposit.slug);
        assert!(page.html_content.contains(&chip), "missing {chip}");
        assert!(page.html_content.contains(&format!(">{}</a>", deposit.term)));
        assert_eq!(page.html_content.matches("related-term-chip").count(), 1);
    }

    #[test]
    fn defined_term_schema_points_at_hub() {
        let page = render(&term("x", "x", "X", &[]), &fixture_content(), &test_site());
        assert!(page.html_content.contains(r#""@type":"DefinedTerm""#));
        assert!(page.html_content.contains(
            "https://kangaroohousing.in/pages/seo/glossary/what-is-a-paying-guest.html"
        ));
        assert!(page.html_content.contains(r#"class="seo-article glossary-article""#));
    }

    #[test]
    fn faq_comes_from_the_record() {
        let page = render(&term("x", "x", "X", &[]), &fixture_content(), &test_site());
        assert!(page.html_content.contains("<h3>Is it common?</h3><p>Very.</p>"));
    }
}
