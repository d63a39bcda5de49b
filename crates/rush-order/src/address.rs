//! Rush delivery address eligibility.
//!
//! Call sites depend on [`AddressMatcher`] only, so a stricter matcher can be
//! swapped in without touching the controller.

use crate::config::RushOrderConfig;

/// Decides whether an address is eligible for rush delivery.
pub trait AddressMatcher: Send + Sync {
    /// Returns `true` if `address` supports rush delivery.
    fn matches(&self, address: &str) -> bool;
}

/// Accepts an address when its lower-cased form ends with a supported
/// locality.
///
/// Matching is a raw suffix test with no word boundary, so `"xyzHN"` matches
/// the `"hn"` locality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixMatcher {
    localities: Vec<String>,
}

impl SuffixMatcher {
    /// Create a matcher over `localities`, lower-casing each entry.
    #[must_use]
    pub fn new(localities: Vec<String>) -> Self {
        Self {
            localities: localities.into_iter().map(|l| l.to_lowercase()).collect(),
        }
    }

    /// Create a matcher from configuration.
    #[must_use]
    pub fn from_config(config: &RushOrderConfig) -> Self {
        Self::new(config.supported_localities.clone())
    }

    /// The localities this matcher accepts.
    #[must_use]
    pub fn localities(&self) -> &[String] {
        &self.localities
    }
}

impl Default for SuffixMatcher {
    fn default() -> Self {
        Self::from_config(&RushOrderConfig::default())
    }
}

impl AddressMatcher for SuffixMatcher {
    fn matches(&self, address: &str) -> bool {
        if address.trim().is_empty() {
            return false;
        }
        let lower = address.to_lowercase();
        self.localities
            .iter()
            .any(|locality| lower.ends_with(locality.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_case_insensitive_suffix() {
        let matcher = SuffixMatcher::default();
        assert!(matcher.matches("123 Le Loi, Hanoi"));
        assert!(matcher.matches("1 Dai Co Viet, HA NOI"));
        assert!(matcher.matches("District 1, HCM"));
        assert!(matcher.matches("Quận 1, Hồ Chí Minh"));
        assert!(matcher.matches("Hoàn Kiếm, Hà Nội"));
    }

    #[test]
    fn test_rejects_blank() {
        let matcher = SuffixMatcher::default();
        assert!(!matcher.matches(""));
        assert!(!matcher.matches("   "));
        assert!(!matcher.matches("\t\n"));
    }

    #[test]
    fn test_rejects_unsupported_locality() {
        let matcher = SuffixMatcher::default();
        assert!(!matcher.matches("Da Nang"));
        assert!(!matcher.matches("Hanoi, Vietnam"));
    }

    #[test]
    fn test_suffix_without_word_boundary_matches() {
        let matcher = SuffixMatcher::default();
        assert!(matcher.matches("xyzHN"));
        assert!(matcher.matches("Ward 5, thehcm"));
    }

    #[test]
    fn test_garbled_localities_still_accepted() {
        let matcher = SuffixMatcher::default();
        assert!(matcher.matches("Cau Giay, Haf Noij"));
        assert!(matcher.matches("Q3, Hof Chis Minh"));
    }

    #[test]
    fn test_upper_case_localities_match() {
        let matcher = SuffixMatcher::new(vec!["HCM".to_string()]);
        assert!(matcher.matches("Q1, HCM"));
        assert!(matcher.matches("q1, hcm"));
        assert_eq!(matcher.localities(), ["hcm".to_string()]);

        let config = RushOrderConfig {
            supported_localities: vec!["HN".to_string()],
        };
        assert!(SuffixMatcher::from_config(&config).matches("Ba Dinh, HN"));
    }

    #[test]
    fn test_leading_space_locality_needs_word_boundary() {
        let matcher = SuffixMatcher::new(vec![" hn".to_string()]);
        assert!(matcher.matches("Ba Dinh, HN"));
        assert!(!matcher.matches("xyzHN"));
    }

    #[test]
    fn test_custom_localities() {
        let matcher = SuffixMatcher::from_config(&RushOrderConfig::with_localities(["Hue"]));
        assert!(matcher.matches("Le Loi, HUE"));
        assert!(!matcher.matches("Le Loi, Hanoi"));
        assert_eq!(matcher.localities(), ["hue".to_string()]);
    }
}
