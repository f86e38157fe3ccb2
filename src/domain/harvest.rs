/// Scraped payload for one seed URL: concatenated page text plus every
/// email address found along the way, deduplicated in discovery order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Harvest {
    pub text: String,
    pub emails: Vec<String>,
}
