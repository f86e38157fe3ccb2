use actix_web::{get, web, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::{
    domain::FundReport,
    services::{investigate_fund, OpenaiClient},
};

#[derive(Deserialize)]
pub struct SeedUrlsQuery {
    pub urls: String,
}

/// Outcome for one seed URL: a report, or an error message scoped to it.
pub struct SiteOutcome {
    pub url: String,
    pub report: Option<FundReport>,
    pub error: String,
}

#[derive(Template)]
#[template(path = "results.html")]
struct ResultsTemplate {
    urls: String,
    outcomes: Vec<SiteOutcome>,
}

#[get("/extract")]
async fn extract(
    http_client: web::Data<reqwest::Client>,
    openai_client: web::Data<OpenaiClient>,
    query: web::Query<SeedUrlsQuery>,
) -> HttpResponse {
    let outcomes = run_pipeline(&http_client, &openai_client, &query.urls).await;

    HttpResponse::Ok().body(
        ResultsTemplate {
            urls: query.urls.clone(),
            outcomes,
        }
        .render()
        .unwrap(),
    )
}

/// Each seed runs to completion before the next starts; a failed seed is
/// reported in place and never aborts the remaining ones.
pub async fn run_pipeline(
    http_client: &reqwest::Client,
    openai_client: &OpenaiClient,
    urls: &str,
) -> Vec<SiteOutcome> {
    let mut outcomes = vec![];

    for seed in seed_urls(urls) {
        match investigate_fund(http_client, openai_client, &seed).await {
            Ok(report) => outcomes.push(SiteOutcome {
                url: seed,
                report: Some(report),
                error: String::new(),
            }),
            Err(e) => {
                log::error!("Extraction failed for {}: {:#}", seed, e);
                outcomes.push(SiteOutcome {
                    url: seed,
                    report: None,
                    error: format!("{:#}", e),
                });
            }
        }
    }

    outcomes
}

/// Comma-separated input, trimmed, empties dropped.
pub fn seed_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|seed| !seed.is_empty())
        .map(str::to_string)
        .collect()
}
