//! Rendering of retrieved passages into the prompt's context block

use crate::RetrievedPassage;

/// Separator between rendered passages: two blank lines
pub const PASSAGE_SEPARATOR: &str = "\n\n\n";

/// Render one passage as its three labelled lines
pub fn format_passage(passage: &RetrievedPassage) -> String {
    format!(
        "Page Content: {}\nPage Number: {}\nFile Location: {}",
        passage.content, passage.page_label, passage.source_path
    )
}

/// Build the context block from passages, keeping their order.
///
/// An empty slice renders as an empty string.
pub fn format_context(passages: &[RetrievedPassage]) -> String {
    passages
        .iter()
        .map(format_passage)
        .collect::<Vec<_>>()
        .join(PASSAGE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passage(content: &str, page: &str) -> RetrievedPassage {
        RetrievedPassage::new(content, page, "docs/manual.pdf")
    }

    #[test]
    fn test_empty_passages_render_empty() {
        assert_eq!(format_context(&[]), "");
    }

    #[test]
    fn test_single_passage_has_no_separator() {
        let context = format_context(&[passage("Paris is the capital of France", "12")]);
        assert_eq!(
            context,
            "Page Content: Paris is the capital of France\nPage Number: 12\nFile Location: docs/manual.pdf"
        );
        assert!(!context.contains(PASSAGE_SEPARATOR));
    }

    #[test]
    fn test_label_count_matches_passage_count() {
        let passages: Vec<_> = (1..=5)
            .map(|i| passage(&format!("chunk {}", i), &i.to_string()))
            .collect();

        let context = format_context(&passages);

        assert_eq!(context.matches("Page Content:").count(), 5);
        assert_eq!(context.matches(PASSAGE_SEPARATOR).count(), 4);
    }

    #[test]
    fn test_order_is_preserved() {
        let passages = vec![passage("third", "3"), passage("first", "1"), passage("second", "2")];

        let context = format_context(&passages);

        let third = context.find("third").unwrap();
        let first = context.find("first").unwrap();
        let second = context.find("second").unwrap();
        assert!(third < first && first < second);
    }

    #[test]
    fn test_content_is_not_rewritten() {
        let raw = "  line one\nline {two}  ";
        let context = format_context(&[passage(raw, "iv")]);
        assert!(context.starts_with(&format!("Page Content: {}\n", raw)));
        assert!(context.contains("Page Number: iv"));
    }
}
