use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#+\s*").unwrap());
static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

/// Flattens the markdown conventions Gemini tends to emit into plain text:
/// leading heading markers on any line, `**bold**` and `*italic*` spans.
/// Anything else passes through untouched.
pub fn strip_markdown(text: &str) -> String {
    let text = HEADING_RE.replace_all(text, "");
    let text = BOLD_RE.replace_all(&text, "$1");
    let text = ITALIC_RE.replace_all(&text, "$1");
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_heading_markers_at_line_starts() {
        let input = "## Emotional Journey\nThe user started off anxious.\n### Shifts\nCalmer later.";
        let expected = "Emotional Journey\nThe user started off anxious.\nShifts\nCalmer later.";
        assert_eq!(strip_markdown(input), expected);
    }

    #[test]
    fn keeps_hashes_inside_lines() {
        let input = "Ticket #42 is unrelated to issue #7.";
        assert_eq!(strip_markdown(input), input);
    }

    #[test]
    fn unwraps_bold_spans() {
        assert_eq!(
            strip_markdown("The tone is **mostly positive** overall."),
            "The tone is mostly positive overall."
        );
    }

    #[test]
    fn unwraps_italic_spans() {
        assert_eq!(
            strip_markdown("A *gentle* shift toward optimism."),
            "A gentle shift toward optimism."
        );
    }

    #[test]
    fn handles_mixed_emphasis() {
        assert_eq!(
            strip_markdown("**Summary**: the user felt *heard*."),
            "Summary: the user felt heard."
        );
    }

    #[test]
    fn stripping_is_idempotent() {
        let input = "# Overview\n**Sentiment**: *Mixed*\n- point one\n- point two";
        let once = strip_markdown(input);
        let twice = strip_markdown(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn other_formatting_passes_through() {
        let input = "1. First\n2. Second\n> a quote\n`code`";
        assert_eq!(strip_markdown(input), input);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(strip_markdown(""), "");
    }
}
