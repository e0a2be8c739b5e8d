use std::fmt;

/// blake3 digest used as a cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    #[must_use]
    pub fn of(content: &str) -> Self {
        Self(*blake3::hash(content.as_bytes()).as_bytes())
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First 16 hex chars are plenty for log lines.
        let hex = blake3::Hash::from(self.0).to_hex();
        f.write_str(&hex.as_str()[..16])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_content_equal_hash() {
        assert_eq!(ContentHash::of("M1 2"), ContentHash::of("M1 2"));
        assert_ne!(ContentHash::of("M1 2"), ContentHash::of("M1 3"));
    }

    #[test]
    fn display_is_short_hex() {
        let s = ContentHash::of("m 0,0 z").to_string();
        assert_eq!(s.len(), 16);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
