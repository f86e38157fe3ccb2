use actix_web::{get, web, HttpResponse};
use itertools::Itertools;

use crate::{domain::FundReport, services::OpenaiClient};

use super::extract_route::{run_pipeline, SeedUrlsQuery, SiteOutcome};

/// Column order is a compatibility contract with downstream spreadsheets,
/// do not reorder.
pub const CSV_HEADER: &str =
    "Website,About the Fund,Ticket Size,Stage,Geography,Sectors,Contact Email";

#[get("/export")]
async fn export(
    http_client: web::Data<reqwest::Client>,
    openai_client: web::Data<OpenaiClient>,
    query: web::Query<SeedUrlsQuery>,
) -> HttpResponse {
    let outcomes = run_pipeline(&http_client, &openai_client, &query.urls).await;

    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"vc_funds.csv\"",
        ))
        .body(render_csv(&outcomes))
}

/// One row per seed URL. A seed that failed outright still gets a row,
/// with every content field set to the sentinel.
pub fn render_csv(outcomes: &[SiteOutcome]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for outcome in outcomes {
        let report = outcome
            .report
            .clone()
            .unwrap_or_else(|| FundReport::empty(&outcome.url));

        let row = [
            &report.website,
            &report.about,
            &report.ticket_size,
            &report.stage,
            &report.geography,
            &report.sectors,
            &report.contact_email,
        ]
        .iter()
        .map(|field| csv_field(field.as_str()))
        .join(",");

        csv.push_str(&row);
        csv.push('\n');
    }

    csv
}

fn csv_field(value: &str) -> String {
    match value.contains(',') || value.contains('"') || value.contains('\n') {
        true => format!("\"{}\"", value.replace('"', "\"\"")),
        false => value.to_string(),
    }
}
