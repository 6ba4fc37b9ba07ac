//! Keeps response bodies from flooding debug and error logs.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 512;

/// Largest char boundary not greater than `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a response body for logging.
///
/// Bodies within the limit are returned as-is; longer ones are cut on a char
/// boundary and suffixed with the total size.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [{} bytes total]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        let s = r#"{"modules":[]}"#;
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn long_body_truncated_with_size() {
        let s = "x".repeat(TRUNCATE_LIMIT + 10);
        let out = truncate_for_log(&s);
        assert!(out.ends_with(&format!("[{} bytes total]", TRUNCATE_LIMIT + 10)));
    }

    #[test]
    fn multibyte_boundary_respected() {
        // 3-byte chars: the limit falls inside one of them.
        let s = "模".repeat(TRUNCATE_LIMIT);
        let out = truncate_for_log(&s);
        assert!(out.starts_with('模'));
        assert!(out.contains("bytes total"));
    }
}
