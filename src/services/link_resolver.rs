use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

/// Substrings that mark an internal page as worth scraping, checked in order.
pub const PAGE_KEYWORDS: [&str; 7] = [
    "about",
    "investment",
    "focus",
    "team",
    "criteria",
    "approach",
    "contact",
];

/// Fetch the seed page and pick internal links that look relevant.
/// Any fetch or read failure is non-fatal: the pipeline falls back to
/// scraping only the seed page itself.
pub async fn resolve_internal_pages(
    http: &reqwest::Client,
    seed: &Url,
    max_pages: usize,
) -> Vec<Url> {
    let response = match http.get(seed.clone()).send().await {
        Ok(res) => res,
        Err(e) => {
            log::warn!("Failed to fetch seed page {}: {}", seed, e);
            return vec![];
        }
    };

    match response.text().await {
        Ok(html) => candidate_links(seed, &html, max_pages),
        Err(e) => {
            log::warn!("Failed to read seed page {}: {}", seed, e);
            vec![]
        }
    }
}

/// Same-origin anchors whose raw href contains a keyword, resolved against
/// the seed, deduplicated in first-seen order and capped at `max_pages`.
/// The seed itself is never a candidate.
pub fn candidate_links(seed: &Url, html: &str, max_pages: usize) -> Vec<Url> {
    let a_tag_selector = Selector::parse("a[href]").unwrap();
    let document = Html::parse_document(html);

    let mut seen = HashSet::new();
    let mut links: Vec<Url> = vec![];

    for tag in document.select(&a_tag_selector) {
        if links.len() >= max_pages {
            break;
        }
        let Some(href) = tag.value().attr("href") else {
            continue;
        };
        let Ok(resolved) = seed.join(href) else {
            continue;
        };
        if !same_origin(seed, &resolved) || resolved == *seed {
            continue;
        }

        let href_lower = href.to_lowercase();
        if !PAGE_KEYWORDS
            .iter()
            .any(|keyword| href_lower.contains(keyword))
        {
            continue;
        }

        if seen.insert(resolved.to_string()) {
            links.push(resolved);
        }
    }

    links
}

fn same_origin(seed: &Url, link: &Url) -> bool {
    link.scheme() == seed.scheme() && link.host_str() == seed.host_str()
}

#[cfg(test)]
mod tests {
    use super::candidate_links;
    use url::Url;

    fn seed() -> Url {
        Url::parse("https://example-vc.com/").unwrap()
    }

    #[test]
    fn keeps_keyword_links_and_resolves_relative_hrefs() {
        let html = r#"
            <a href="/about">About us</a>
            <a href="/portfolio">Portfolio</a>
            <a href="https://example-vc.com/team">Team</a>
        "#;
        let links = candidate_links(&seed(), html, 3);

        assert_eq!(
            links,
            vec![
                Url::parse("https://example-vc.com/about").unwrap(),
                Url::parse("https://example-vc.com/team").unwrap(),
            ]
        );
    }

    #[test]
    fn drops_links_from_other_origins() {
        let html = r#"
            <a href="https://twitter.com/example-vc-contact">Twitter</a>
            <a href="http://example-vc.com/contact">Contact</a>
            <a href="/contact">Contact</a>
        "#;
        let links = candidate_links(&seed(), html, 3);

        // The http:// variant fails the scheme+host origin check
        assert_eq!(
            links,
            vec![Url::parse("https://example-vc.com/contact").unwrap()]
        );
    }

    #[test]
    fn deduplicates_in_first_seen_order_and_caps() {
        let html = r#"
            <a href="/team">Team</a>
            <a href="/about">About</a>
            <a href="/team">Team again</a>
            <a href="/contact">Contact</a>
            <a href="/approach">Approach</a>
        "#;
        let links = candidate_links(&seed(), html, 3);

        assert_eq!(
            links,
            vec![
                Url::parse("https://example-vc.com/team").unwrap(),
                Url::parse("https://example-vc.com/about").unwrap(),
                Url::parse("https://example-vc.com/contact").unwrap(),
            ]
        );
    }

    #[test]
    fn never_returns_the_seed_itself() {
        let seed = Url::parse("https://example-vc.com/about").unwrap();
        let html = r#"<a href="/about">Self link</a><a href="/about/team">Team</a>"#;
        let links = candidate_links(&seed, html, 3);

        assert_eq!(
            links,
            vec![Url::parse("https://example-vc.com/about/team").unwrap()]
        );
    }

    #[test]
    fn ignores_anchors_without_keywords() {
        let html = r#"<a href="/blog">Blog</a><a href="/jobs">Jobs</a>"#;
        assert!(candidate_links(&seed(), html, 3).is_empty());
    }
}
