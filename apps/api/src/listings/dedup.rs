use std::collections::HashSet;

use crate::listings::Listing;

/// Identity used for deduplication: `job_id` when non-empty, else the apply link.
/// Returns `None` when both are empty; such listings never collide with anything.
pub fn listing_identity(listing: &Listing) -> Option<&str> {
    [listing.job_id(), listing.apply_link()]
        .into_iter()
        .find(|key| !key.is_empty())
}

/// Removes listings whose identity was already seen, preserving first-seen order.
pub fn dedup_listings(listings: Vec<Listing>) -> Vec<Listing> {
    let mut seen: HashSet<String> = HashSet::new();

    listings
        .into_iter()
        .filter(|listing| match listing_identity(listing) {
            Some(key) => seen.insert(key.to_string()),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(job_id: &str, apply_link: &str, title: &str) -> Listing {
        Listing {
            job_id: Some(job_id.to_string()),
            job_apply_link: Some(apply_link.to_string()),
            job_title: Some(title.to_string()),
            ..Listing::default()
        }
    }

    #[test]
    fn test_identical_job_id_keeps_first() {
        let out = dedup_listings(vec![
            listing("j1", "https://a", "First"),
            listing("j1", "https://b", "Second"),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title(), "First");
    }

    #[test]
    fn test_empty_job_id_falls_back_to_apply_link() {
        let out = dedup_listings(vec![
            listing("", "https://a", "A"),
            listing("", "https://b", "B"),
            listing("", "https://a", "A again"),
        ]);
        let titles: Vec<&str> = out.iter().map(|l| l.title()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_listings_without_identity_are_all_kept() {
        let out = dedup_listings(vec![
            listing("", "", "Anonymous 1"),
            listing("", "", "Anonymous 2"),
            Listing::default(),
        ]);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_order_is_first_seen() {
        let out = dedup_listings(vec![
            listing("c", "", "C"),
            listing("a", "", "A"),
            listing("c", "", "C dup"),
            listing("b", "", "B"),
        ]);
        let ids: Vec<&str> = out.iter().map(|l| l.job_id()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_identity_prefers_job_id() {
        let l = listing("j9", "https://x", "T");
        assert_eq!(listing_identity(&l), Some("j9"));
        assert_eq!(listing_identity(&Listing::default()), None);
    }
}
