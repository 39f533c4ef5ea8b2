//! Library-wide defaults.
//!
//! Per-request configuration travels in `GalleryObjectSearchOptions`; the
//! values here are the compile-time defaults those options start from.

/// Title given to a synthesized virtual root album that aggregates multiple
/// viewable top-level albums.
pub const VIRTUAL_ALBUM_TITLE: &str = "Virtual album";

/// Sentinel id carried by synthesized albums. Virtual albums are never
/// persisted, so they never receive a store-assigned id.
pub const VIRTUAL_ALBUM_ID: i32 = 0;

/// Default for `GalleryObjectSearchOptions::case_sensitive_text_match`.
/// The stores this core historically ran against collate case-insensitively.
pub fn case_sensitive_text_match() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(VIRTUAL_ALBUM_TITLE, "Virtual album");
        assert_eq!(VIRTUAL_ALBUM_ID, 0);
        assert!(!case_sensitive_text_match());
    }
}
