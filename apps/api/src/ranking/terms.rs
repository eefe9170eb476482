//! Term extraction — derives prioritized search queries from resume and preference text.
//!
//! Pure and deterministic: a fixed pattern table of role titles and skill
//! phrases, followed by a few trigger-based heuristics. No I/O.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Default number of terms returned by [`extract_terms`].
pub const DEFAULT_TERM_LIMIT: usize = 8;

/// Ordered domain patterns. Matches are collected in table order, then match order.
static TERM_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Seniority-qualified design roles
        r"(?i)\b(?:senior|lead|principal|staff)\s+(?:ux|ui|ux/ui|product|interaction|visual)\s+designer\b",
        // Design roles
        r"(?i)\b(?:ux|ui|ux/ui|product|interaction|visual|service)\s+designer\b",
        // Research and strategy roles
        r"(?i)\b(?:ux|user\s+experience)\s+(?:researcher|architect|strategist|writer)\b",
        // Design leadership
        r"(?i)\bdesign\s+(?:manager|director|lead)\b",
        // Adjacent product roles
        r"(?i)\b(?:product|program|project)\s+manager\b",
        // Engineering roles
        r"(?i)\b(?:front[- ]?end|full[- ]stack|back[- ]?end|software)\s+(?:engineer|developer)\b",
        // Skill phrases
        r"(?i)\b(?:user|usability)\s+research\b",
        r"(?i)\binteraction\s+design\b",
        r"(?i)\binformation\s+architecture\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid term pattern"))
    .collect()
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

const SENIORITY_TRIGGERS: &[&str] = &["senior", "10+", "lead"];
const SENIOR_ROLES: &[&str] = &[
    "Senior UX Designer",
    "Lead UX Designer",
    "Principal Product Designer",
];

const DESIGN_SYSTEM_TRIGGERS: &[&str] = &["design system"];
const DESIGN_SYSTEM_ROLES: &[&str] = &["Design Systems Designer", "Design Systems Lead"];

const ENTERPRISE_TRIGGERS: &[&str] = &["enterprise", "b2b"];
const ENTERPRISE_ROLES: &[&str] = &["Enterprise UX Designer", "B2B Product Designer"];

const REMOTE_TRIGGER: &str = "remote";
const REMOTE_EXPANSIONS: usize = 2;

/// Entries this short or shorter are dropped.
const MIN_TERM_CHARS: usize = 3;

/// Extracts up to `limit` search terms from resume and preference text.
///
/// Returns an empty list when nothing matches; the caller supplies a fallback.
pub fn extract_terms(resume_text: &str, preferences: &str, limit: usize) -> Vec<String> {
    let combined = format!("{resume_text} {preferences}");
    let combined_lower = combined.to_lowercase();
    let preferences_lower = preferences.to_lowercase();

    let mut terms: Vec<String> = TERM_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.find_iter(&combined))
        .map(|m| title_case(&WHITESPACE.replace_all(m.as_str().trim(), " ")))
        .collect();

    if contains_any(&combined_lower, SENIORITY_TRIGGERS) {
        terms.extend(SENIOR_ROLES.iter().map(|s| s.to_string()));
    }

    if preferences_lower.contains(REMOTE_TRIGGER) && terms.len() >= REMOTE_EXPANSIONS {
        let remote: Vec<String> = terms
            .iter()
            .take(REMOTE_EXPANSIONS)
            .map(|t| format!("Remote {t}"))
            .collect();
        terms.extend(remote);
    }

    if contains_any(&combined_lower, DESIGN_SYSTEM_TRIGGERS) {
        terms.extend(DESIGN_SYSTEM_ROLES.iter().map(|s| s.to_string()));
    }

    if contains_any(&combined_lower, ENTERPRISE_TRIGGERS) {
        terms.extend(ENTERPRISE_ROLES.iter().map(|s| s.to_string()));
    }

    let mut seen: HashSet<String> = HashSet::new();
    terms
        .into_iter()
        .filter(|t| t.chars().count() >= MIN_TERM_CHARS)
        .filter(|t| seen.insert(t.to_lowercase()))
        .take(limit)
        .collect()
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest,
/// so "ux/ui designer" becomes "Ux/Ui Designer".
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for c in text.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_senior_ux_designer_with_remote_preference() {
        let terms = extract_terms(
            "Senior UX Designer with a decade of product work",
            "Remote work preferred",
            DEFAULT_TERM_LIMIT,
        );
        assert!(terms.contains(&"Senior Ux Designer".to_string()), "{terms:?}");
        assert!(terms.iter().any(|t| t.starts_with("Remote ")), "{terms:?}");
    }

    #[test]
    fn test_no_pattern_and_no_trigger_is_empty() {
        let terms = extract_terms("I enjoy gardening and baking bread", "Weekends off", 8);
        assert!(terms.is_empty(), "{terms:?}");
    }

    #[test]
    fn test_pattern_order_then_match_order() {
        let terms = extract_terms("Product Manager, then UX Designer", "", 8);
        assert_eq!(terms, vec!["Ux Designer", "Product Manager"]);
    }

    #[test]
    fn test_whitespace_is_normalized() {
        let terms = extract_terms("interaction\n\t designer", "", 8);
        assert_eq!(terms, vec!["Interaction Designer"]);
    }

    #[test]
    fn test_seniority_trigger_appends_senior_roles() {
        let terms = extract_terms("UX Designer with 10+ years", "", 8);
        assert_eq!(
            terms,
            vec![
                "Ux Designer",
                "Senior UX Designer",
                "Lead UX Designer",
                "Principal Product Designer",
            ]
        );
    }

    #[test]
    fn test_remote_expands_first_two_terms() {
        let terms = extract_terms("UX Designer and Product Manager", "remote", 8);
        assert_eq!(
            terms,
            vec![
                "Ux Designer",
                "Product Manager",
                "Remote Ux Designer",
                "Remote Product Manager",
            ]
        );
    }

    #[test]
    fn test_remote_is_noop_with_fewer_than_two_terms() {
        let terms = extract_terms("UX Designer with 10 years", "Remote preferred", 8);
        assert_eq!(terms, vec!["Ux Designer"]);
    }

    #[test]
    fn test_remote_in_resume_only_does_not_trigger() {
        let terms = extract_terms("UX Designer and Product Manager, fully remote", "", 8);
        assert!(!terms.iter().any(|t| t.starts_with("Remote ")), "{terms:?}");
    }

    #[test]
    fn test_design_system_and_enterprise_triggers() {
        let terms = extract_terms("Built a design system", "B2B SaaS", 8);
        assert_eq!(
            terms,
            vec![
                "Design Systems Designer",
                "Design Systems Lead",
                "Enterprise UX Designer",
                "B2B Product Designer",
            ]
        );
    }

    #[test]
    fn test_case_insensitive_dedup_keeps_first_spelling() {
        let terms = extract_terms("Senior UX Designer", "", 8);
        let senior: Vec<&String> = terms
            .iter()
            .filter(|t| t.eq_ignore_ascii_case("senior ux designer"))
            .collect();
        assert_eq!(senior, vec!["Senior Ux Designer"]);
    }

    #[test]
    fn test_limit_and_uniqueness_hold_across_inputs() {
        let inputs = [
            ("Senior UX Designer, lead product designer, UX researcher", "remote, enterprise"),
            ("design system work for B2B clients; 10+ years; Design Manager", "Remote"),
            ("Frontend Engineer and full-stack developer", "remote only"),
            ("", ""),
        ];
        for limit in [0, 1, 3, 8, 20] {
            for (resume, prefs) in inputs {
                let terms = extract_terms(resume, prefs, limit);
                assert!(terms.len() <= limit, "{terms:?} exceeds {limit}");
                let unique: HashSet<String> = terms.iter().map(|t| t.to_lowercase()).collect();
                assert_eq!(unique.len(), terms.len(), "duplicates in {terms:?}");
            }
        }
    }

    #[test]
    fn test_title_case_capitalizes_each_alphabetic_run() {
        assert_eq!(title_case("ux/ui designer"), "Ux/Ui Designer");
        assert_eq!(title_case("SENIOR product DESIGNER"), "Senior Product Designer");
        assert_eq!(title_case("front-end engineer"), "Front-End Engineer");
    }
}
