use pubcrawl_models::Pub;
use std::collections::{BTreeSet, HashSet};

/// Every regular and guest beer across `pubs`, exact case-sensitive names
pub fn unique_beers(pubs: &[Pub]) -> HashSet<String> {
    pubs.iter().flat_map(|p| p.beers()).cloned().collect()
}

/// `unique_beers`, in lexical order
pub fn sorted_unique_beers(pubs: &[Pub]) -> Vec<String> {
    let beers: BTreeSet<&String> = pubs.iter().flat_map(|p| p.beers()).collect();
    beers.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::pub_with_beers;

    #[test]
    fn test_unique_beers_empty() {
        assert!(unique_beers(&[]).is_empty());
        assert!(sorted_unique_beers(&[]).is_empty());
    }

    #[test]
    fn test_overlapping_regular_and_guest_collapse() {
        let pubs = vec![pub_with_beers("1", Some(&["A", "B"]), Some(&["B", "C"]))];
        assert_eq!(sorted_unique_beers(&pubs), vec!["A", "B", "C"]);
        assert_eq!(unique_beers(&pubs).len(), 3);
    }

    #[test]
    fn test_absent_lists_contribute_nothing() {
        let pubs = vec![
            pub_with_beers("1", None, None),
            pub_with_beers("2", None, Some(&["Spitfire"])),
            pub_with_beers("3", Some(&[]), None),
        ];
        assert_eq!(sorted_unique_beers(&pubs), vec!["Spitfire"]);
    }

    #[test]
    fn test_union_across_pubs() {
        let pubs = vec![
            pub_with_beers("1", Some(&["London Pride", "Abbot Ale"]), None),
            pub_with_beers("2", Some(&["Spitfire"]), Some(&["London Pride"])),
        ];
        assert_eq!(
            sorted_unique_beers(&pubs),
            vec!["Abbot Ale", "London Pride", "Spitfire"]
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let pubs = vec![pub_with_beers("1", Some(&["spitfire", "Spitfire", "Spitfire "]), None)];
        // Uppercase sorts before lowercase
        assert_eq!(
            sorted_unique_beers(&pubs),
            vec!["Spitfire", "Spitfire ", "spitfire"]
        );
    }
}
