//! Best-effort split of a tuned profile into the two headings the prompt asks for.
//!
//! The model is only instructed to use the headings; nothing guarantees it
//! does. Parsing never fails a request: callers always keep the raw text and
//! treat `None` as "display as-is".

use serde::Serialize;

use crate::tuner::prompts::{HEADLINE_SUGGESTIONS_HEADING, NEW_SUMMARY_HEADING};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSections {
    pub new_summary: String,
    pub headlines: Vec<String>,
}

impl ProfileSections {
    /// Returns `None` unless both headings are present, in order.
    pub fn parse(text: &str) -> Option<Self> {
        let lines: Vec<&str> = text.lines().collect();

        let summary_at = lines.iter().position(|l| is_heading(l, NEW_SUMMARY_HEADING))?;
        let headlines_at = summary_at
            + 1
            + lines[summary_at + 1..]
                .iter()
                .position(|l| is_heading(l, HEADLINE_SUGGESTIONS_HEADING))?;

        let new_summary = lines[summary_at + 1..headlines_at]
            .join("\n")
            .trim()
            .to_string();

        // List items only, up to the next heading; closing chatter is not a headline.
        let headlines = lines[headlines_at + 1..]
            .iter()
            .map(|l| l.trim())
            .take_while(|l| !l.starts_with('#'))
            .filter_map(strip_list_marker)
            .filter(|l| !l.is_empty())
            .map(|l| trim_quotes(l).to_string())
            .collect();

        Some(Self {
            new_summary,
            headlines,
        })
    }
}

/// Matches `### New Summary:`, `## new summary`, `**New Summary:**` and the like.
fn is_heading(line: &str, heading: &str) -> bool {
    heading_title(line).eq_ignore_ascii_case(heading_title(heading))
}

fn heading_title(line: &str) -> &str {
    line.trim()
        .trim_start_matches('#')
        .trim_matches('*')
        .trim()
        .trim_end_matches(':')
        .trim_end_matches('*')
        .trim_end_matches(':')
        .trim()
}

/// Strips a `1.`, `2)`, `-`, `*` or `•` prefix. `None` when the line is not a list item.
fn strip_list_marker(line: &str) -> Option<&str> {
    if let Some(rest) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix("• "))
    {
        return Some(rest.trim_start());
    }

    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = &line[digits..];
    rest.strip_prefix('.')
        .or_else(|| rest.strip_prefix(')'))
        .map(str::trim_start)
}

fn trim_quotes(line: &str) -> &str {
    line.strip_prefix('"')
        .and_then(|l| l.strip_suffix('"'))
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "### New Summary:\n\
        I am a project manager who delivers.\n\
        \n\
        I lead Agile teams.\n\
        \n\
        ### Headline Suggestions:\n\
        1. Senior PM | Agile\n\
        2. \"Stakeholder Whisperer\"\n\
        3) Retail Delivery Lead\n";

    #[test]
    fn test_parses_well_formed_response() {
        let sections = ProfileSections::parse(WELL_FORMED).unwrap();
        assert_eq!(
            sections.new_summary,
            "I am a project manager who delivers.\n\nI lead Agile teams."
        );
        assert_eq!(
            sections.headlines,
            vec![
                "Senior PM | Agile".to_string(),
                "Stakeholder Whisperer".to_string(),
                "Retail Delivery Lead".to_string(),
            ]
        );
    }

    #[test]
    fn test_headings_matched_loosely() {
        let text = "Sure! Here you go.\n**New Summary:**\nBody\n## headline suggestions\n- One\n* Two";
        let sections = ProfileSections::parse(text).unwrap();
        assert_eq!(sections.new_summary, "Body");
        assert_eq!(sections.headlines, vec!["One", "Two"]);
    }

    #[test]
    fn test_missing_headline_heading_yields_none() {
        assert!(ProfileSections::parse("### New Summary:\nJust a summary").is_none());
    }

    #[test]
    fn test_missing_summary_heading_yields_none() {
        assert!(ProfileSections::parse("### Headline Suggestions:\n1. A").is_none());
    }

    #[test]
    fn test_out_of_order_headings_yield_none() {
        let text = "### Headline Suggestions:\n1. A\n### New Summary:\nBody";
        assert!(ProfileSections::parse(text).is_none());
    }

    #[test]
    fn test_error_text_does_not_parse() {
        assert!(ProfileSections::parse("An error occurred: timed out").is_none());
    }

    #[test]
    fn test_trailing_sentence_is_not_a_headline() {
        let text = "### New Summary:\nBody\n### Headline Suggestions:\n\
            1. **PM** | Agile\n2. B\n3. C\n\nLet me know if you want tweaks!";
        let sections = ProfileSections::parse(text).unwrap();
        assert_eq!(sections.headlines, vec!["**PM** | Agile", "B", "C"]);
    }

    #[test]
    fn test_headlines_stop_at_next_heading() {
        let text = "### New Summary:\nBody\n### Headline Suggestions:\n- A\n- B\n### Notes\n- not a headline";
        let sections = ProfileSections::parse(text).unwrap();
        assert_eq!(sections.headlines, vec!["A", "B"]);
    }

    #[test]
    fn test_list_marker_detection() {
        assert_eq!(strip_list_marker("2024 roadmap owner"), None);
        assert_eq!(strip_list_marker("Plain sentence."), None);
        assert_eq!(strip_list_marker("10. Ten"), Some("Ten"));
        assert_eq!(strip_list_marker("3) Three"), Some("Three"));
        assert_eq!(strip_list_marker("- Dash"), Some("Dash"));
    }
}
