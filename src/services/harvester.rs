use std::collections::HashSet;

use itertools::Itertools;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use crate::domain::Harvest;

/// Chars kept from a single page before the blank-line separator.
const PAGE_CHAR_BUDGET: usize = 3000;
/// Chars kept from the combined buffer across all pages.
const TOTAL_CHAR_BUDGET: usize = 8000;

/// Permissive on purpose: false positives are cheaper than missed contacts.
const EMAIL_PATTERN: &str = r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+";

/// Fetch every URL in order and accumulate page text and email addresses.
/// A page that fails to fetch is skipped, not retried.
pub async fn harvest(http: &reqwest::Client, urls: &[Url]) -> Harvest {
    let mut combined = String::new();
    let mut emails: Vec<String> = vec![];
    let mut seen_emails = HashSet::new();

    for url in urls {
        let Some(html) = fetch_page(http, url).await else {
            continue;
        };
        absorb_page(&html, &mut combined, &mut emails, &mut seen_emails);
    }

    Harvest {
        text: truncate_chars(&combined, TOTAL_CHAR_BUDGET).to_string(),
        emails,
    }
}

async fn fetch_page(http: &reqwest::Client, url: &Url) -> Option<String> {
    match http.get(url.clone()).send().await {
        Ok(res) => match res.text().await {
            Ok(html) => Some(html),
            Err(e) => {
                log::warn!("Failed to read body of {}: {}", url, e);
                None
            }
        },
        Err(e) => {
            log::warn!("Failed to fetch {}: {}", url, e);
            None
        }
    }
}

/// Fold one page into the running buffer and email list. Emails keep
/// first-discovered order so "the" contact address is deterministic.
fn absorb_page(
    html: &str,
    combined: &mut String,
    emails: &mut Vec<String>,
    seen_emails: &mut HashSet<String>,
) {
    let document = Html::parse_document(html);

    let page_text = visible_text(&document);
    combined.push_str(truncate_chars(&page_text, PAGE_CHAR_BUDGET));
    combined.push_str("\n\n");

    let email_regex = Regex::new(EMAIL_PATTERN).unwrap();
    for found in email_regex.find_iter(&page_text) {
        push_unique(emails, seen_emails, found.as_str().to_string());
    }

    let mailto_selector = Selector::parse("a[href^='mailto:']").unwrap();
    for tag in document.select(&mailto_selector) {
        if let Some(email) = tag.value().attr("href").and_then(email_from_mailto) {
            push_unique(emails, seen_emails, email);
        }
    }
}

/// Text nodes trimmed and joined with single spaces.
fn visible_text(document: &Html) -> String {
    document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .join(" ")
}

/// `mailto:foo@bar.com?subject=Hi` -> `foo@bar.com`.
pub fn email_from_mailto(href: &str) -> Option<String> {
    let address = href.strip_prefix("mailto:")?;
    let address = address.split('?').next().unwrap_or(address).trim();
    match address.contains('@') {
        true => Some(address.to_string()),
        false => None,
    }
}

fn push_unique(emails: &mut Vec<String>, seen: &mut HashSet<String>, email: String) {
    if seen.insert(email.clone()) {
        emails.push(email);
    }
}

/// Char-based prefix, never split inside a multi-byte char.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{absorb_page, email_from_mailto, truncate_chars, PAGE_CHAR_BUDGET, TOTAL_CHAR_BUDGET};

    fn absorb(html: &str) -> (String, Vec<String>) {
        let mut combined = String::new();
        let mut emails = vec![];
        let mut seen = HashSet::new();
        absorb_page(html, &mut combined, &mut emails, &mut seen);
        (combined, emails)
    }

    #[test]
    fn extracts_text_with_single_space_separators() {
        let html = "<html><body><h1>Acme  Ventures</h1><p>Seed fund</p></body></html>";
        let (combined, _) = absorb(html);
        assert_eq!(combined, "Acme  Ventures Seed fund\n\n");
    }

    #[test]
    fn finds_emails_in_text_and_mailto_links() {
        let html = r#"
            <p>Reach us at hello@acme.vc for pitches.</p>
            <a href="mailto:partners@acme.vc">Partners</a>
        "#;
        let (_, emails) = absorb(html);
        assert_eq!(emails, vec!["hello@acme.vc", "partners@acme.vc"]);
    }

    #[test]
    fn mailto_query_suffix_is_stripped() {
        assert_eq!(
            email_from_mailto("mailto:foo@bar.com?subject=Hi"),
            Some("foo@bar.com".to_string())
        );
        assert_eq!(email_from_mailto("mailto:not-an-address"), None);
        assert_eq!(email_from_mailto("https://bar.com"), None);
    }

    #[test]
    fn email_extraction_is_idempotent() {
        let html = r#"<p>ping hello@acme.vc</p><a href="mailto:hello@acme.vc">mail</a>"#;
        let (_, first) = absorb(html);
        let (_, second) = absorb(html);
        assert_eq!(first, second);
        assert_eq!(first, vec!["hello@acme.vc"]);
    }

    #[test]
    fn long_pages_contribute_exactly_the_page_budget() {
        let body = "x".repeat(PAGE_CHAR_BUDGET + 500);
        let html = format!("<p>{}</p>", body);
        let (combined, _) = absorb(&html);
        assert_eq!(combined.len(), PAGE_CHAR_BUDGET + 2);
        assert!(combined.ends_with("\n\n"));
    }

    #[test]
    fn combined_buffer_is_capped_at_the_total_budget() {
        let html = format!("<p>{}</p>", "y".repeat(PAGE_CHAR_BUDGET));
        let mut combined = String::new();
        let mut emails = vec![];
        let mut seen = HashSet::new();
        for _ in 0..3 {
            absorb_page(&html, &mut combined, &mut emails, &mut seen);
        }
        assert!(combined.len() > TOTAL_CHAR_BUDGET);
        assert_eq!(truncate_chars(&combined, TOTAL_CHAR_BUDGET).len(), TOTAL_CHAR_BUDGET);
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let text = "é".repeat(10);
        assert_eq!(truncate_chars(&text, 4), "éééé");
        assert_eq!(truncate_chars("short", 100), "short");
    }
}
