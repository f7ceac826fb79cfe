//! Shared fixtures for core unit tests

use crate::core::contact::{Contact, ContactId};
use chrono::{TimeZone, Utc};

pub fn create_test_contact(name: &str, tax_id: &str) -> Contact {
    Contact {
        id: ContactId::generate(),
        name: name.to_string(),
        tax_id: tax_id.to_string(),
        phone: "(11) 99999-8888".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 3, 14, 12, 30, 0).unwrap(),
    }
}

/// Three contacts, newest first, the way the registry stores them
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        create_test_contact("Ana Silva", "123.456.789-01"),
        create_test_contact("Bruno Costa", "987.654.321-00"),
        create_test_contact("Carlos Silveira", "111.222.333-44"),
    ]
}
