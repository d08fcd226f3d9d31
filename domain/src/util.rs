//! Shared utility functions.

/// Prefix of `s` of at most `max_bytes`, cut on a UTF-8 character boundary.
///
/// Used to keep upstream response bodies short in diagnostics.
pub fn preview(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_body_unchanged() {
        assert_eq!(preview("{\"error\":1}", 200), "{\"error\":1}");
    }

    #[test]
    fn preview_cuts_ascii() {
        assert_eq!(preview("Service Unavailable", 7), "Service");
    }

    #[test]
    fn preview_backs_off_devanagari_boundary() {
        // each Devanagari letter here is 3 bytes
        let s = "ज्वर";
        assert_eq!(preview(s, 4), "ज");
        assert_eq!(preview(s, 0), "");
    }
}
