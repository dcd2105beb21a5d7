//! HTML components shared by every playbook.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating;
//! every interpolated value is escaped. Each playbook renders only its
//! article body; [`render_document`] wraps it in the common shell:
//!
//! ```text
//! <head>      analytics (optional), meta description, canonical, stylesheet
//! <header>    site navigation
//! <main>      breadcrumbs
//!   <article> playbook sections
//!             {{INTERNAL_LINKS}}   ← replaced once all pages are linked
//!             call to action
//! JSON-LD     (optional)
//! <footer>    copyright, site links, explore links
//! ```

use crate::config::SiteSettings;
use crate::linker::Linker;
use crate::types::LinkRef;
use chrono::{Datelike, NaiveDate};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde_json::json;

/// Marker left in every generated page until its links are resolved.
pub const LINKS_PLACEHOLDER: &str = "{{INTERNAL_LINKS}}";

/// Run-wide values every page is rendered with.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub settings: SiteSettings,
    /// Copyright year, fixed for the whole run.
    pub year: i32,
}

impl SiteContext {
    pub fn new(settings: SiteSettings, today: NaiveDate) -> Self {
        Self {
            settings,
            year: today.year(),
        }
    }

    /// `"{title} | {brand}"`
    pub fn branded(&self, title: &str) -> String {
        format!("{} | {}", title, self.settings.brand)
    }
}

/// One breadcrumb step. The last step renders as plain text.
#[derive(Debug, Clone)]
pub struct Crumb {
    pub name: String,
    pub url: String,
}

impl Crumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Everything about a page outside its article body.
pub struct PageShell<'a> {
    pub title: &'a str,
    pub meta_description: &'a str,
    /// Site-relative URL; the base URL is prepended.
    pub canonical: &'a str,
    pub breadcrumbs: &'a [Crumb],
    pub article_class: Option<&'a str>,
    pub schema: Option<serde_json::Value>,
}

/// Render a complete document around `article`.
pub fn render_document(site: &SiteContext, shell: PageShell<'_>, article: Markup) -> String {
    let settings = &site.settings;
    let canonical = format!("{}{}", settings.base_url, shell.canonical);
    let article_class = match shell.article_class {
        Some(extra) => format!("seo-article {extra}"),
        None => "seo-article".to_string(),
    };
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (analytics_head(settings))
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(shell.meta_description);
                link rel="canonical" href=(canonical);
                title { (shell.title) }
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800;900&display=swap" rel="stylesheet";
                link rel="stylesheet" href=(settings.stylesheet);
            }
            body {
                @if let Some(gtm) = &settings.gtm_id {
                    noscript {
                        iframe src={ "https://www.googletagmanager.com/ns.html?id=" (gtm) }
                            height="0" width="0" style="display:none;visibility:hidden" {}
                    }
                }
                (site_header(&settings.brand))
                main.seo-container {
                    (breadcrumbs(shell.breadcrumbs))
                    article class=(article_class) {
                        (article)
                        (PreEscaped(LINKS_PLACEHOLDER))
                        (cta_block())
                    }
                }
                @if let Some(schema) = &shell.schema {
                    (json_ld(schema))
                }
                (site_footer(site))
            }
        }
    };
    markup.into_string()
}

/// Tag Manager and gtag snippets, each only when its id is configured.
fn analytics_head(settings: &SiteSettings) -> Markup {
    html! {
        @if let Some(gtm) = &settings.gtm_id {
            script {
                (PreEscaped(format!(
                    "(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':new Date().getTime(),event:'gtm.js'}});\
                     var f=d.getElementsByTagName(s)[0],j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';\
                     j.async=true;j.src='https://www.googletagmanager.com/gtm.js?id='+i+dl;\
                     f.parentNode.insertBefore(j,f);}})(window,document,'script','dataLayer',{});",
                    script_string(gtm)
                )))
            }
        }
        @if let Some(ga) = &settings.ga_id {
            script async src={ "https://www.googletagmanager.com/gtag/js?id=" (ga) } {}
            script {
                (PreEscaped(format!(
                    "window.dataLayer=window.dataLayer||[];function gtag(){{dataLayer.push(arguments);}}\
                     gtag('js',new Date());gtag('config',{});",
                    script_string(ga)
                )))
            }
        }
    }
}

fn site_header(brand: &str) -> Markup {
    html! {
        header.header id="header" {
            div.header-container {
                div.logo {
                    a href="/" {
                        span.logo-icon { "🦘" }
                        span.logo-text { (brand.to_uppercase()) }
                    }
                }
                nav.nav {
                    ul.nav-menu {
                        li { a href="/" { "HOME" } }
                        li { a href="/pages/pg/PG.html" { "PG" } }
                        li { a href="/pages/blog/blog.html" { "BLOG" } }
                        li { a href="/#services" { "SERVICES" } }
                        li { a href="/pages/about/gallery.html" { "GALLERY" } }
                        li { a href="/#reviews" { "REVIEWS" } }
                        li { a href="/#contact" { "CONTACT" } }
                    }
                }
                button.nav-toggle id="navToggle" aria-label="Toggle navigation" {
                    span {} span {} span {}
                }
            }
        }
    }
}

fn site_footer(site: &SiteContext) -> Markup {
    html! {
        footer.seo-footer {
            div.footer-inner {
                p { "© " (site.year) " " (site.settings.brand) ". All rights reserved." }
                nav.footer-links {
                    a href="/" { "Home" }
                    a href="/pages/pg/PG.html" { "PG Listings" }
                    a href="/pages/blog/blog.html" { "Blog" }
                    a href="/pages/about/about.html" { "About Us" }
                }
                nav.footer-explore aria-label="Explore" {
                    @for link in Linker::static_links() {
                        a href=(link.url) { (link.title) }
                    }
                }
            }
        }
        script {
            (PreEscaped(
                "const nt=document.getElementById('navToggle'),nm=document.querySelector('.nav-menu');\
                 if(nt&&nm){nt.addEventListener('click',()=>{nm.classList.toggle('active');nt.classList.toggle('active');});}"
            ))
        }
    }
}

pub fn breadcrumbs(items: &[Crumb]) -> Markup {
    html! {
        nav.breadcrumbs aria-label="breadcrumb" {
            @for (i, item) in items.iter().enumerate() {
                @if i > 0 {
                    " " span.bc-sep { "/" } " "
                }
                @if i + 1 == items.len() {
                    span.bc-current { (item.name) }
                } @else {
                    a href=(item.url) { (item.name) }
                }
            }
        }
    }
}

fn cta_block() -> Markup {
    html! {
        section.cta-block {
            h2 { "Ready to Find Your Perfect PG?" }
            p { "Browse fully furnished PG rooms near Ashok Nagar, Vasundhara Enclave & Maharaja Agrasen College." }
            a.btn-primary href="/pages/pg/PG.html" { "View All PGs →" }
        }
    }
}

/// A `<ul>` of plain text items, with an optional class.
pub fn text_list(class: Option<&str>, items: &[String]) -> Markup {
    html! {
        ul class=[class] {
            @for item in items {
                li { (item) }
            }
        }
    }
}

pub fn faq_section(items: &[Faq]) -> Markup {
    html! {
        section.faq-section {
            h2 { "Frequently Asked Questions" }
            div.faq-list {
                @for item in items {
                    div.faq-item {
                        h3 { (item.question) }
                        p { (item.answer) }
                    }
                }
            }
        }
    }
}

/// schema.org `FAQPage` for the given questions.
pub fn faq_schema(items: &[Faq]) -> serde_json::Value {
    let entities: Vec<serde_json::Value> = items
        .iter()
        .map(|f| {
            json!({
                "@type": "Question",
                "name": f.question,
                "acceptedAnswer": { "@type": "Answer", "text": f.answer },
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": entities,
    })
}

fn json_ld(schema: &serde_json::Value) -> Markup {
    html! {
        script type="application/ld+json" {
            (PreEscaped(script_safe(&schema.to_string())))
        }
    }
}

/// Quote `value` as a JS string literal safe to embed in a `<script>`.
fn script_string(value: &str) -> String {
    script_safe(&serde_json::Value::String(value.to_string()).to_string())
}

/// Keep `</script>` from terminating an inline script early.
fn script_safe(text: &str) -> String {
    text.replace("</", "<\\/")
}

/// The related-pages block spliced in place of [`LINKS_PLACEHOLDER`].
///
/// Renders nothing at all for an empty list.
pub fn internal_links_html(links: &[LinkRef]) -> String {
    if links.is_empty() {
        return String::new();
    }
    html! {
        section.related-pages {
            h2 { "Related Pages You Might Like" }
            div.related-grid {
                @for link in links {
                    a.related-card href=(link.url) {
                        span.related-tag { (link.playbook.as_str()) }
                        span.related-title { (link.title) }
                    }
                }
            }
        }
    }
    .into_string()
}

/// First `max` characters of `text`. Ignores word boundaries.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
