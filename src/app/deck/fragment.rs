/// Where the address fragment lives, supplied by the binding layer.
///
/// The write path runs on every successful `show_slide`; the read path runs
/// exactly once, when the registrar is built. Out-of-band edits of the store
/// after startup are not observed.
pub trait FragmentStore {
    fn read(&self) -> Option<String>;

    /// Store the decimal string of the active slide's position.
    fn write(&mut self, fragment: &str);
}

/// Parse a fragment into a zero-based slide position.
///
/// Strictly decimal digits: empty, signed, non-numeric and overflowing
/// input all fall back to `None` rather than being coerced.
pub fn parse_fragment(raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    // `str::parse` tolerates a leading `+`; digits only is stricter.
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<usize>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::deck::testing::TestFragment;

    #[test]
    fn test_parse_valid_positions() {
        assert_eq!(parse_fragment("0"), Some(0));
        assert_eq!(parse_fragment("2"), Some(2));
        assert_eq!(parse_fragment(" 7 "), Some(7));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_fragment(""), None);
        assert_eq!(parse_fragment("   "), None);
        assert_eq!(parse_fragment("abc"), None);
        assert_eq!(parse_fragment("2b"), None);
        assert_eq!(parse_fragment("-1"), None);
        assert_eq!(parse_fragment("+3"), None);
        assert_eq!(parse_fragment("99999999999999999999999999"), None);
    }

    #[test]
    fn test_store_write_then_read() {
        let mut store = TestFragment::default();
        assert_eq!(store.read(), None);
        store.write("4");
        assert_eq!(store.read().as_deref(), Some("4"));
        assert_eq!(store.writes, 1);
    }
}
