//! Contact directory filtering.

use crate::domain::entities::ContactGroup;

/// Filters grouped contacts by a substring query.
///
/// Names match case-insensitively; numbers match on the raw query. Groups
/// keep only their matching members and empty groups are dropped entirely.
/// An empty query returns every group unchanged.
#[must_use]
pub fn filter_directory(groups: &[ContactGroup], query: &str) -> Vec<ContactGroup> {
    let needle = query.to_lowercase();

    groups
        .iter()
        .map(|group| ContactGroup {
            title: group.title.clone(),
            contacts: group
                .contacts
                .iter()
                .filter(|contact| {
                    contact.name().to_lowercase().contains(&needle)
                        || contact.number().contains(query)
                })
                .cloned()
                .collect(),
        })
        .filter(|group| !group.contacts.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::sample_directory;
    use test_case::test_case;

    #[test]
    fn test_empty_query_returns_all_groups() {
        let groups = sample_directory();
        let filtered = filter_directory(&groups, "");
        assert_eq!(filtered, groups);
    }

    #[test]
    fn test_number_search_returns_single_contact() {
        let filtered = filter_directory(&sample_directory(), "555-1234");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Family");
        assert_eq!(filtered[0].contacts.len(), 1);
        assert_eq!(filtered[0].contacts[0].name(), "Usama");
    }

    #[test_case("usman"; "lowercase")]
    #[test_case("USMAN"; "uppercase")]
    #[test_case("UsMaN"; "mixed case")]
    fn test_name_search_is_case_insensitive(query: &str) {
        let filtered = filter_directory(&sample_directory(), query);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Friends");
        assert_eq!(filtered[0].contacts.len(), 1);
        assert_eq!(filtered[0].contacts[0].name(), "Usman");
    }

    #[test]
    fn test_partial_match_spans_groups() {
        // "555-12" hits 555-1234 (Family) and 555-1235 (Work) but no Friends.
        let filtered = filter_directory(&sample_directory(), "555-12");

        let titles: Vec<&str> = filtered.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Family", "Work"]);
    }

    #[test]
    fn test_every_returned_contact_matches() {
        let query = "a";
        let filtered = filter_directory(&sample_directory(), query);

        for group in &filtered {
            assert!(!group.contacts.is_empty());
            for contact in &group.contacts {
                assert!(
                    contact.name().to_lowercase().contains(query)
                        || contact.number().contains(query)
                );
            }
        }
    }

    #[test]
    fn test_no_match_returns_nothing() {
        assert!(filter_directory(&sample_directory(), "zzz").is_empty());
    }
}
