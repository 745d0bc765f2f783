use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use regex_lite::Regex;

/// One slide-marked section of a deck file, in document order.
pub struct SlideSection {
    /// Explicit identifier from a leading `<!-- slide: NAME -->` comment.
    pub id: Option<String>,
    /// Markdown body with the identifier comment stripped.
    pub body: String,
}

/// Built-in deck shown when SlidePad starts without a file argument.
pub const WELCOME_DECK: &str = "\
<!-- slide: welcome -->
# SlidePad

A minimalist Markdown slide-deck presenter.

Open a deck with Ctrl+O. Slides are sections separated
by `---` lines.

---

<!-- slide: keys -->
# Keyboard

- Right, Space, Page Down, Down: next slide
- Left, Backspace, Page Up, Up: previous slide
- Home: first slide, End: last slide
- Ctrl+G: go to a slide by number

---

<!-- slide: deep-links -->
# Deep links

The address bar at the bottom mirrors the current
position. Start SlidePad with `deck.md#2` to jump
straight to the third slide.
";

/// Split a Markdown source into slide sections at top-level thematic
/// breaks. A line of dashes under a paragraph is a setext heading, not a
/// break; the Markdown parser, not a line scan, decides which is which.
/// Whitespace-only sections (e.g. around a trailing rule) are dropped.
pub fn parse_deck(source: &str) -> Vec<SlideSection> {
    let mut breaks = Vec::new();
    for (event, range) in Parser::new(source).into_offset_iter() {
        if matches!(event, Event::Rule) {
            breaks.push(range);
        }
    }

    let mut sections = Vec::new();
    let mut start = 0;
    for range in breaks {
        push_section(&mut sections, &source[start..range.start]);
        start = range.end;
    }
    push_section(&mut sections, &source[start..]);
    sections
}

fn push_section(sections: &mut Vec<SlideSection>, raw: &str) {
    // The marker must lead the section; a comment elsewhere is content.
    let marker =
        Regex::new(r"^\s*<!--\s*slide:\s*([A-Za-z0-9._-]+)\s*-->[ \t]*\r?\n?").expect("marker regex");

    let (id, body) = match marker.captures(raw) {
        Some(caps) => {
            let matched_len = caps.get(0).map(|m| m.end()).unwrap_or(0);
            (Some(caps[1].to_string()), &raw[matched_len..])
        }
        None => (None, raw),
    };

    let body = body.trim();
    if body.is_empty() && id.is_none() {
        return;
    }
    sections.push(SlideSection {
        id,
        body: body.to_string(),
    });
}

/// Render one section's Markdown to plain text for the slide display.
/// Headings and paragraphs become blocks separated by blank lines, list
/// items become bullet lines. Raw HTML (including comments) is dropped.
pub fn render_plain(markdown: &str) -> String {
    let mut out = String::new();
    let mut list_depth: usize = 0;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { .. })
            | Event::Start(Tag::Paragraph)
            | Event::Start(Tag::CodeBlock(_))
            | Event::Start(Tag::BlockQuote(_)) => ensure_gap(&mut out),
            Event::Start(Tag::List(_)) => {
                if list_depth == 0 {
                    ensure_gap(&mut out);
                }
                list_depth += 1;
            }
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
            }
            Event::Start(Tag::Item) => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                for _ in 1..list_depth {
                    out.push_str("  ");
                }
                out.push_str("\u{2022} ");
            }
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Heading(_)) => out.push('\n'),
            Event::End(TagEnd::Item) => {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            _ => {}
        }
    }

    out.trim().to_string()
}

fn ensure_gap(out: &mut String) {
    if out.is_empty() || out.ends_with("\n\n") {
        return;
    }
    if out.ends_with('\n') {
        out.push('\n');
    } else {
        out.push_str("\n\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_thematic_breaks() {
        let deck = "first\n\n---\n\nsecond\n\n---\n\nthird\n";
        let sections = parse_deck(deck);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].body, "first");
        assert_eq!(sections[2].body, "third");
    }

    #[test]
    fn test_marker_extracted_and_stripped() {
        let deck = "<!-- slide: intro -->\n# Hello\n\n---\n\nno marker here\n";
        let sections = parse_deck(deck);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].id.as_deref(), Some("intro"));
        assert_eq!(sections[0].body, "# Hello");
        assert_eq!(sections[1].id, None);
    }

    #[test]
    fn test_marker_not_at_section_start_is_content() {
        let deck = "some text\n\n<!-- slide: late -->\n";
        let sections = parse_deck(deck);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, None);
    }

    #[test]
    fn test_empty_sections_dropped() {
        let deck = "only slide\n\n---\n\n   \n";
        let sections = parse_deck(deck);
        assert_eq!(sections.len(), 1);
        assert!(parse_deck("").is_empty());
        assert!(parse_deck("  \n\n  ").is_empty());
    }

    #[test]
    fn test_marker_only_section_kept() {
        let deck = "body\n\n---\n\n<!-- slide: blank -->\n";
        let sections = parse_deck(deck);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].id.as_deref(), Some("blank"));
        assert_eq!(sections[1].body, "");
    }

    #[test]
    fn test_setext_heading_is_not_a_break() {
        let deck = "Title\n---\n\nstill the same slide\n";
        let sections = parse_deck(deck);
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_document_order_preserved() {
        let deck = "<!-- slide: a -->\nA\n\n---\n<!-- slide: b -->\nB\n\n---\n<!-- slide: c -->\nC\n";
        let ids: Vec<_> = parse_deck(deck)
            .into_iter()
            .map(|s| s.id.unwrap())
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_render_plain_blocks_and_bullets() {
        let rendered = render_plain("# Title\n\nHello *world*\n\n- one\n- two\n");
        assert_eq!(rendered, "Title\n\nHello world\n\n\u{2022} one\n\u{2022} two");
    }

    #[test]
    fn test_render_plain_nested_list_indents() {
        let rendered = render_plain("- outer\n  - inner\n");
        assert_eq!(rendered, "\u{2022} outer\n  \u{2022} inner");
    }

    #[test]
    fn test_render_plain_drops_html_comments() {
        let rendered = render_plain("<!-- hidden -->\n\ntext\n");
        assert_eq!(rendered, "text");
    }

    #[test]
    fn test_welcome_deck_parses() {
        let sections = parse_deck(WELCOME_DECK);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].id.as_deref(), Some("welcome"));
        assert_eq!(sections[2].id.as_deref(), Some("deep-links"));
    }
}
