use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a stored contact.
///
/// Random 128-bit UUID v4, generated once at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(Uuid);

impl ContactId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single registry entry.
///
/// `tax_id` and `phone` are stored already masked; masking happens while
/// the user types, not here. Serialized with the field names the stored
/// `contacts.json` has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    #[serde(rename = "cpf")]
    pub tax_id: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Upper-cased first character of the name, for the list avatar.
    pub fn initial(&self) -> String {
        self.name
            .trim_start()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// In-progress form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub tax_id: String,
    pub phone: String,
}

impl ContactDraft {
    /// All three fields carry something. The name counts only if something
    /// survives [`sanitize_name`](crate::validators::sanitize_name), so the
    /// gate agrees with what would be stored.
    pub fn is_filled(&self) -> bool {
        !self.tax_id.is_empty()
            && !self.phone.is_empty()
            && !crate::validators::sanitize_name(&self.name).is_empty()
    }

    /// Builds a contact from this draft, stamping a fresh id and timestamp.
    ///
    /// Returns `None` when the draft is not filled.
    pub fn to_contact(&self) -> Option<Contact> {
        let name = crate::validators::sanitize_name(&self.name);
        if name.is_empty() || self.tax_id.is_empty() || self.phone.is_empty() {
            return None;
        }
        Some(Contact {
            id: ContactId::generate(),
            name,
            tax_id: self.tax_id.clone(),
            phone: self.phone.clone(),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = ContactId::generate();
        let b = ContactId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_json_field_names() {
        let contact = crate::core::test_helpers::create_test_contact("Ana Silva", "123.456.789-01");
        let json = serde_json::to_value(&contact).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["cpf", "createdAt", "id", "name", "phone"]);
        assert_eq!(obj["cpf"], "123.456.789-01");
        // RFC 3339 timestamp survives a reload
        let back: Contact = serde_json::from_value(json).unwrap();
        assert_eq!(back, contact);
    }

    #[test]
    fn test_loads_stored_record() {
        let json = r#"{
            "id": "7f1d3c2e-9b8a-4c6d-8e2f-1a2b3c4d5e6f",
            "name": "Ana Silva",
            "cpf": "123.456.789-01",
            "phone": "(11) 99999-8888",
            "createdAt": "2025-03-14T12:30:00.000Z"
        }"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.tax_id, "123.456.789-01");
        assert_eq!(contact.created_at.to_rfc3339(), "2025-03-14T12:30:00+00:00");
    }

    #[test]
    fn test_initial() {
        let mut contact = crate::core::test_helpers::create_test_contact("ana", "1");
        assert_eq!(contact.initial(), "A");
        contact.name = "  émile".to_string();
        assert_eq!(contact.initial(), "É");
        contact.name = String::new();
        assert_eq!(contact.initial(), "");
    }

    #[test]
    fn test_draft_requires_all_fields() {
        let mut draft = ContactDraft {
            name: "Ana".to_string(),
            tax_id: "123".to_string(),
            phone: String::new(),
        };
        assert!(!draft.is_filled());
        assert!(draft.to_contact().is_none());

        draft.phone = "(11".to_string();
        assert!(draft.is_filled());

        draft.name = "   ".to_string();
        assert!(!draft.is_filled());
    }

    #[test]
    fn test_control_only_name_is_not_filled() {
        let draft = ContactDraft {
            name: "\u{7}\t\u{1b}".to_string(),
            tax_id: "123.456.789-01".to_string(),
            phone: "(11) 99999-8888".to_string(),
        };
        assert!(!draft.is_filled());
        assert!(draft.to_contact().is_none());
    }

    #[test]
    fn test_draft_to_contact_trims_name() {
        let draft = ContactDraft {
            name: "  Ana Silva ".to_string(),
            tax_id: "123.456.789-01".to_string(),
            phone: "(11) 99999-8888".to_string(),
        };
        let contact = draft.to_contact().unwrap();
        assert_eq!(contact.name, "Ana Silva");
        assert_eq!(contact.tax_id, draft.tax_id);
        assert_eq!(contact.phone, draft.phone);
    }
}
