/// Fallback value for any field the parser could not locate.
pub const NOT_FOUND: &str = "Not found";

/// The per-site structured record produced by one pipeline run.
/// Built once after field parsing, never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FundReport {
    pub website: String,
    pub about: String,
    pub ticket_size: String,
    pub stage: String,
    pub geography: String,
    pub sectors: String,
    pub contact_email: String,
}

impl FundReport {
    /// Report for a seed that produced no usable output, every field sentinel.
    pub fn empty(website: &str) -> Self {
        FundReport {
            website: website.to_string(),
            about: NOT_FOUND.to_string(),
            ticket_size: NOT_FOUND.to_string(),
            stage: NOT_FOUND.to_string(),
            geography: NOT_FOUND.to_string(),
            sectors: NOT_FOUND.to_string(),
            contact_email: NOT_FOUND.to_string(),
        }
    }
}
