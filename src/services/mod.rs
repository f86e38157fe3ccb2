pub mod field_parser;
pub mod harvester;
pub mod link_resolver;
pub mod openai_client;
pub mod prompt;

pub use field_parser::*;
pub use harvester::*;
pub use link_resolver::*;
pub use openai_client::*;
pub use prompt::*;

use anyhow::Context;
use url::Url;

use crate::domain::FundReport;

pub const MAX_INTERNAL_PAGES: usize = 3;

/// Full pipeline for one seed URL:
/// resolve internal pages -> harvest text/emails -> prompt -> model -> parse.
///
/// Scrape failures degrade silently inside the resolver/harvester; a bad
/// seed URL or a failed model call is an error for this seed only.
pub async fn investigate_fund(
    http: &reqwest::Client,
    openai: &OpenaiClient,
    seed_url: &str,
) -> anyhow::Result<FundReport> {
    let seed = Url::parse(seed_url).with_context(|| format!("Invalid seed url: {}", seed_url))?;

    let mut pages = vec![seed.clone()];
    pages.extend(resolve_internal_pages(http, &seed, MAX_INTERNAL_PAGES).await);
    log::info!("Scraping {} pages for {}", pages.len(), seed_url);

    let harvest = harvest(http, &pages).await;
    log::info!(
        "Harvested {} chars and {} emails from {}",
        harvest.text.chars().count(),
        harvest.emails.len(),
        seed_url
    );

    let prompt = build_extraction_prompt(&harvest.text);
    let output = openai.extract_fund_info(&prompt).await?;

    Ok(parse_fund_report(seed_url, &output, &harvest.emails))
}
