/// Fixed five-field instruction with the harvested text appended verbatim.
/// The bold labels here are what the field parser anchors on, keep them in
/// sync with `field_parser`.
pub fn build_extraction_prompt(scraped_text: &str) -> String {
    format!(
        r#"You are an assistant that extracts startup-relevant VC info from website text.

From the following text, extract:
- A short 2-3 sentence description **about the fund**
- Typical **ticket size**
- **Investment stage** (e.g., Seed, Series A)
- **Geography** (e.g., US, Europe, Global)
- Preferred **sectors** (e.g., SaaS, Fintech)

Format the answer in clean bullet points.

VC Website Text:
{}"#,
        scraped_text
    )
}

#[cfg(test)]
mod tests {
    use super::build_extraction_prompt;

    #[test]
    fn embeds_the_harvested_text_verbatim_at_the_end() {
        let text = "Acme Ventures backs pre-seed founders.\n\nWe invest $100K-$500K.";
        let prompt = build_extraction_prompt(text);

        assert!(prompt.ends_with(text));
        assert!(prompt.starts_with("You are an assistant"));
    }

    #[test]
    fn asks_for_every_parsed_label() {
        let prompt = build_extraction_prompt("");
        for label in [
            "**about the fund**",
            "**ticket size**",
            "**Investment stage**",
            "**Geography**",
            "**sectors**",
        ] {
            assert!(prompt.contains(label), "missing label {}", label);
        }
    }
}
