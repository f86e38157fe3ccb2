use regex::Regex;

use crate::domain::{FundReport, NOT_FOUND};

/// Best-effort labeled-field extraction from the model's free-text bullets.
/// A field that never matches comes back as the "Not found" sentinel; the
/// contact email is taken from the harvest, never from the model output.
pub fn parse_fund_report(website: &str, output: &str, emails: &[String]) -> FundReport {
    let lines: Vec<&str> = output.lines().collect();

    FundReport {
        website: website.to_string(),
        about: field_value(&lines, &["about the fund", "about"]),
        ticket_size: field_value(&lines, &["ticket size"]),
        stage: field_value(&lines, &["investment stage", "stage"]),
        geography: field_value(&lines, &["geography"]),
        sectors: field_value(&lines, &["preferred sectors", "sectors"]),
        contact_email: emails
            .first()
            .cloned()
            .unwrap_or_else(|| NOT_FOUND.to_string()),
    }
}

/// Two passes per line: a capture anchored on the bold `**Label**:` markup,
/// then a plain prefix match taking whatever follows the last colon.
fn field_value(lines: &[&str], labels: &[&str]) -> String {
    let bold_label = Regex::new(r"^\s*[-*\u{2022}]?\s*\*\*([^*]+)\*\*\s*:?\s*(.*)$").unwrap();

    for line in lines {
        if let Some(caps) = bold_label.captures(line) {
            let label = caps[1].trim().to_lowercase();
            if labels.iter().any(|known| label.contains(known)) {
                let value = caps[2].trim();
                if !value.is_empty() {
                    return value.to_string();
                }
            }
            continue;
        }

        let stripped = line.trim_start_matches(|c: char| {
            c.is_whitespace() || c == '-' || c == '*' || c == '\u{2022}'
        });
        let lower = stripped.to_lowercase();
        if labels.iter().any(|known| lower.starts_with(known)) {
            if let Some(colon) = stripped.rfind(':') {
                let value = stripped[colon + 1..].trim();
                if !value.is_empty() {
                    return value.to_string();
                }
            }
        }
    }

    NOT_FOUND.to_string()
}
