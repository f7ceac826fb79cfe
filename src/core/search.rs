//! Contact list search
//!
//! Plain substring containment, recomputed on every query change. The name
//! is compared case-insensitively; the tax identifier is compared as stored.

use crate::core::contact::Contact;

/// Whether `contact` matches the query.
///
/// `query_lowercase` must be `query.to_lowercase()`; callers that filter
/// many contacts compute it once.
pub fn matches(contact: &Contact, query: &str, query_lowercase: &str) -> bool {
    contact.name.to_lowercase().contains(query_lowercase) || contact.tax_id.contains(query)
}

/// Returns the contacts matching `query`, in their original order.
///
/// An empty query returns every contact.
pub fn filter_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    filter_contacts_with(contacts, query, &query.to_lowercase())
}

/// [`filter_contacts`] with a lowercase query the caller already holds.
pub fn filter_contacts_with<'a>(
    contacts: &'a [Contact],
    query: &str,
    query_lowercase: &str,
) -> Vec<&'a Contact> {
    if query.is_empty() {
        return contacts.iter().collect();
    }
    contacts
        .iter()
        .filter(|c| matches(c, query, query_lowercase))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_helpers::{create_test_contact, sample_contacts};
    use proptest::prelude::*;

    fn names<'a>(contacts: &[&'a Contact]) -> Vec<&'a str> {
        contacts.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let contacts = sample_contacts();
        let result = filter_contacts(&contacts, "");
        assert_eq!(result.len(), contacts.len());
        assert!(result.iter().zip(&contacts).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let contacts = sample_contacts();
        assert_eq!(
            names(&filter_contacts(&contacts, "SILV")),
            ["Ana Silva", "Carlos Silveira"]
        );
        assert_eq!(names(&filter_contacts(&contacts, "bruno")), ["Bruno Costa"]);
    }

    #[test]
    fn test_tax_id_match() {
        let contacts = sample_contacts();
        assert_eq!(names(&filter_contacts(&contacts, "987.654")), ["Bruno Costa"]);
        assert_eq!(names(&filter_contacts(&contacts, "-01")), ["Ana Silva"]);
    }

    #[test]
    fn test_raw_digits_do_not_match_masked_tax_id() {
        // Substring containment on the stored mask, not on the digit stream
        let contacts = sample_contacts();
        assert!(filter_contacts(&contacts, "123456").is_empty());
    }

    #[test]
    fn test_cached_lowercase_query_matches_uncached() {
        let contacts = sample_contacts();
        let cached = filter_contacts_with(&contacts, "Silv", "silv");
        assert_eq!(names(&cached), names(&filter_contacts(&contacts, "Silv")));
        assert_eq!(filter_contacts_with(&contacts, "", "").len(), contacts.len());
    }

    #[test]
    fn test_no_match() {
        let contacts = sample_contacts();
        assert!(filter_contacts(&contacts, "zzz").is_empty());
    }

    #[test]
    fn test_phone_is_not_searched() {
        let contacts = vec![create_test_contact("Ana", "111.111.111-11")];
        assert!(filter_contacts(&contacts, "99999").is_empty());
    }

    proptest! {
        #[test]
        fn prop_filter_is_sound_and_stable(
            names in proptest::collection::vec("[a-zA-Z ]{0,8}", 0..12),
            query in "[a-zA-Z0-9.]{0,3}",
        ) {
            let contacts: Vec<Contact> = names
                .iter()
                .enumerate()
                .map(|(i, n)| create_test_contact(n, &crate::core::mask::format_tax_id(&format!("{i:011}"))))
                .collect();
            let result = filter_contacts(&contacts, &query);
            let lower = query.to_lowercase();

            for c in &result {
                prop_assert!(c.name.to_lowercase().contains(&lower) || c.tax_id.contains(&query));
            }
            // Result is exactly the order-preserving subsequence of matches
            let expected: Vec<_> = contacts.iter().filter(|c| matches(c, &query, &lower)).map(|c| c.id).collect();
            let got: Vec<_> = result.iter().map(|c| c.id).collect();
            prop_assert_eq!(got, expected);
        }
    }
}
