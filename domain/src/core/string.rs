//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Used for log previews of topics and question text. `max_len` is a byte
/// budget; the cut always lands on a character boundary.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3).min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_topic_untouched() {
        assert_eq!(truncate("osmosis", 10), "osmosis");
    }

    #[test]
    fn test_long_topic_cut_with_ellipsis() {
        assert_eq!(truncate("facilitated diffusion", 10), "facilit...");
    }

    #[test]
    fn test_multibyte_boundary() {
        // "é" is 2 bytes; a cut inside it must back off to the previous boundary
        assert_eq!(truncate("ééééé", 8), "éé...");
    }
}
