//! Registry session state and its transitions
//!
//! [`Session`] holds everything the registry knows: the stored contacts,
//! the configured endpoint, the form being filled in, the search query and
//! any pending confirmation. [`Session::apply`] is the only way to change
//! it. Side effects (disk writes, the endpoint POST) are not performed here;
//! they are returned as [`Effect`]s for the caller to run, so every
//! transition can be tested without a UI or a runtime.

use crate::config::AppConfig;
use crate::core::contact::{Contact, ContactDraft, ContactId};
use crate::core::error::{Error, ErrorTranslation};
use crate::core::mask::{format_phone, format_tax_id};
use crate::core::remote::{Endpoint, Submission};
use crate::core::search;

/// Something that happened in the UI
#[derive(Debug, Clone)]
pub enum Event {
    NameChanged(String),
    TaxIdChanged(String),
    PhoneChanged(String),
    SearchChanged(String),
    Submit,
    SubmissionFinished(Result<(), SyncWarning>),
    DeleteRequested(ContactId),
    DeleteCancelled,
    DeleteConfirmed,
    SettingsOpened,
    SettingsUrlChanged(String),
    SettingsCancelled,
    SettingsSaved,
    WarningDismissed,
}

/// Work the caller must perform after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write the contact list
    PersistContacts { revision: u64, contacts: Vec<Contact> },
    /// Write the endpoint configuration
    PersistConfig { revision: u64, config: AppConfig },
    /// Post a copy of a new contact; report back with `SubmissionFinished`
    SubmitRemote {
        endpoint: Endpoint,
        submission: Submission,
    },
}

/// Shown when a contact was stored locally but the endpoint POST failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncWarning {
    pub translation: ErrorTranslation,
    pub detail: String,
}

impl From<&Error> for SyncWarning {
    fn from(err: &Error) -> Self {
        Self {
            translation: err.sync_translation(),
            detail: err.to_string(),
        }
    }
}

/// Settings panel contents while it is open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsDraft {
    pub url: String,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct Session {
    pub contacts: Vec<Contact>,
    pub endpoint: Option<Endpoint>,
    pub draft: ContactDraft,
    pub search: String,
    pub search_lowercase: String,
    pub pending_delete: Option<ContactId>,
    pub settings: Option<SettingsDraft>,
    pub warning: Option<SyncWarning>,
    /// A remote submission is in flight
    pub submitting: bool,
    contacts_revision: u64,
    config_revision: u64,
}

impl Session {
    pub fn new(contacts: Vec<Contact>, endpoint: Option<Endpoint>) -> Self {
        Self {
            contacts,
            endpoint,
            ..Self::default()
        }
    }

    /// Applies `event` and returns the side effects it requires.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::NameChanged(s) => self.draft.name = s,
            Event::TaxIdChanged(s) => self.draft.tax_id = format_tax_id(&s),
            Event::PhoneChanged(s) => self.draft.phone = format_phone(&s),
            Event::SearchChanged(s) => {
                self.search_lowercase = s.to_lowercase();
                self.search = s;
            }
            Event::Submit => return self.handle_submit(),
            Event::SubmissionFinished(outcome) => self.handle_submission_finished(outcome),
            Event::DeleteRequested(id) => {
                if self.contacts.iter().any(|c| c.id == id) {
                    self.pending_delete = Some(id);
                }
            }
            Event::DeleteCancelled => self.pending_delete = None,
            Event::DeleteConfirmed => return self.handle_delete_confirmed(),
            Event::SettingsOpened => {
                self.settings = Some(SettingsDraft {
                    url: self
                        .endpoint
                        .as_ref()
                        .map(ToString::to_string)
                        .unwrap_or_default(),
                    error: None,
                });
            }
            Event::SettingsUrlChanged(url) => {
                if let Some(settings) = &mut self.settings {
                    settings.url = url;
                    settings.error = None;
                }
            }
            Event::SettingsCancelled => self.settings = None,
            Event::SettingsSaved => return self.handle_settings_saved(),
            Event::WarningDismissed => self.warning = None,
        }
        Vec::new()
    }

    /// Submit is possible: every field filled and nothing in flight
    pub fn can_submit(&self) -> bool {
        self.draft.is_filled() && !self.submitting
    }

    /// Contacts matching the current search, newest first
    pub fn visible_contacts(&self) -> Vec<&Contact> {
        search::filter_contacts_with(&self.contacts, &self.search, &self.search_lowercase)
    }

    /// The contact awaiting delete confirmation, if any
    pub fn pending_delete_contact(&self) -> Option<&Contact> {
        let id = self.pending_delete?;
        self.contacts.iter().find(|c| c.id == id)
    }

    /// An endpoint is configured
    pub fn is_online(&self) -> bool {
        self.endpoint.is_some()
    }

    pub fn record_count_label(&self) -> String {
        match self.contacts.len() {
            1 => "1 record".to_string(),
            n => format!("{n} records"),
        }
    }

    fn handle_submit(&mut self) -> Vec<Effect> {
        if self.submitting {
            return Vec::new();
        }
        let Some(mut contact) = self.draft.to_contact() else {
            return Vec::new();
        };
        while self.contacts.iter().any(|c| c.id == contact.id) {
            contact.id = ContactId::generate();
        }

        let submission = Submission::from(&contact);
        tracing::info!(id = %contact.id, "Contact registered");
        self.contacts.insert(0, contact);

        let mut effects = vec![self.persist_contacts()];
        if let Some(endpoint) = &self.endpoint {
            // Draft stays until the outcome is known so a failure leaves it visible
            self.submitting = true;
            effects.push(Effect::SubmitRemote {
                endpoint: endpoint.clone(),
                submission,
            });
        } else {
            self.draft = ContactDraft::default();
        }
        effects
    }

    fn handle_submission_finished(&mut self, outcome: Result<(), SyncWarning>) {
        let was_submitting = std::mem::replace(&mut self.submitting, false);
        match outcome {
            Ok(()) if was_submitting => self.draft = ContactDraft::default(),
            Ok(()) => {}
            Err(warning) => {
                tracing::warn!(detail = %warning.detail, "Remote sync failed, contact kept locally");
                self.warning = Some(warning);
            }
        }
    }

    fn handle_delete_confirmed(&mut self) -> Vec<Effect> {
        let Some(id) = self.pending_delete.take() else {
            return Vec::new();
        };
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        if self.contacts.len() == before {
            tracing::error!(%id, "Delete confirmed for unknown contact. UI state desync.");
            return Vec::new();
        }
        tracing::info!(%id, "Contact deleted");
        vec![self.persist_contacts()]
    }

    fn handle_settings_saved(&mut self) -> Vec<Effect> {
        let Some(settings) = &mut self.settings else {
            return Vec::new();
        };
        match crate::validators::validate_endpoint(&settings.url) {
            Ok(endpoint) => {
                self.settings = None;
                match &endpoint {
                    Some(e) => tracing::info!(endpoint = %e, "Endpoint configured"),
                    None => tracing::info!("Endpoint cleared"),
                }
                self.endpoint = endpoint;
                self.config_revision += 1;
                vec![Effect::PersistConfig {
                    revision: self.config_revision,
                    config: AppConfig::from_endpoint(self.endpoint.as_ref()),
                }]
            }
            Err(msg) => {
                settings.error = Some(msg);
                Vec::new()
            }
        }
    }

    fn persist_contacts(&mut self) -> Effect {
        self.contacts_revision += 1;
        Effect::PersistContacts {
            revision: self.contacts_revision,
            contacts: self.contacts.clone(),
        }
    }
}
