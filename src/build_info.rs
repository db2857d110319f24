//! Compile-time build information for the startup banner.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Banner line: package version, build date and commit.
pub fn version_line() -> String {
    format!(
        "evolution v{} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_build_commit_format() {
        // Should be 7 chars or "unknown"
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_version_line_mentions_build() {
        let line = version_line();
        assert!(line.starts_with("evolution v"));
        assert!(line.contains(BUILD_DATE));
        assert!(line.contains(BUILD_COMMIT));
    }
}
