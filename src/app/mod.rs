//! GUI application state and event handling
//!
//! [`State`] owns the registry [`Session`] and the stores it persists to.
//! UI messages are translated into session events; the effects a
//! transition returns are turned into iced tasks here.

pub mod ui_components;
pub mod view;

use contactbook::config::{self, AppConfig};
use contactbook::core::remote::RemoteSubmitter;
use contactbook::core::session::{Effect, Event, Session, SyncWarning};
use contactbook::core::store::{self, JsonBlob};
use contactbook::{Contact, ContactId};
use iced::{Element, Task};
use std::path::PathBuf;

/// Everything loaded from disk before the window opens
#[derive(Debug, Clone)]
pub struct Boot {
    pub data_dir: PathBuf,
    pub contacts: Vec<Contact>,
    pub config: AppConfig,
}

pub struct State {
    pub session: Session,
    pub theme: crate::theme::AppTheme,
    /// Last write failure per file, cleared by that file's next successful write
    contacts_save_error: Option<String>,
    config_save_error: Option<String>,
    contacts_store: JsonBlob<Vec<Contact>>,
    config_store: JsonBlob<AppConfig>,
    remote: RemoteSubmitter,
}

/// Which blob a finished write belonged to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blob {
    Contacts,
    Config,
}

impl Blob {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Contacts => store::CONTACTS_FILE,
            Self::Config => config::CONFIG_FILE,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // Form
    NameChanged(String),
    TaxIdChanged(String),
    PhoneChanged(String),
    SubmitClicked,
    SubmissionFinished(Result<(), SyncWarning>),
    // List
    SearchChanged(String),
    DeleteRequested(ContactId),
    CancelDelete,
    ConfirmDelete,
    // Settings
    OpenSettings,
    SettingsUrlChanged(String),
    CancelSettings,
    SaveSettings,
    // Warnings
    DismissWarning,
    // Persistence
    Saved(Blob, Result<bool, String>),
    EventOccurred(iced::Event),
}

impl State {
    pub fn new(boot: Boot) -> (Self, Task<Message>) {
        let endpoint = boot.config.endpoint();
        let theme = crate::theme::AppTheme::brand();
        tracing::info!(
            contacts = boot.contacts.len(),
            theme = %theme.name,
            online = endpoint.is_some(),
            data_dir = %boot.data_dir.display(),
            "Starting registry"
        );
        (
            Self {
                session: Session::new(boot.contacts, endpoint),
                theme,
                contacts_save_error: None,
                config_save_error: None,
                contacts_store: store::contacts_blob(&boot.data_dir),
                config_store: config::config_blob(&boot.data_dir),
                remote: RemoteSubmitter::new(),
            },
            Task::none(),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let event = match message {
            Message::NameChanged(s) => Event::NameChanged(s),
            Message::TaxIdChanged(s) => Event::TaxIdChanged(s),
            Message::PhoneChanged(s) => Event::PhoneChanged(s),
            Message::SubmitClicked => Event::Submit,
            Message::SubmissionFinished(outcome) => Event::SubmissionFinished(outcome),
            Message::SearchChanged(s) => Event::SearchChanged(s),
            Message::DeleteRequested(id) => Event::DeleteRequested(id),
            Message::CancelDelete => Event::DeleteCancelled,
            Message::ConfirmDelete => Event::DeleteConfirmed,
            Message::OpenSettings => Event::SettingsOpened,
            Message::SettingsUrlChanged(s) => Event::SettingsUrlChanged(s),
            Message::CancelSettings => Event::SettingsCancelled,
            Message::SaveSettings => Event::SettingsSaved,
            Message::DismissWarning => Event::WarningDismissed,
            Message::Saved(blob, result) => {
                self.handle_saved(blob, result);
                return Task::none();
            }
            Message::EventOccurred(event) => return self.handle_event(&event),
        };
        self.dispatch(event)
    }

    /// Applies a session event and schedules the effects it returns
    fn dispatch(&mut self, event: Event) -> Task<Message> {
        let effects = self.session.apply(event);
        Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
    }

    fn run_effect(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::PersistContacts { revision, contacts } => {
                let store = self.contacts_store.clone();
                Task::perform(
                    async move {
                        store
                            .save(revision, &contacts)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |result| Message::Saved(Blob::Contacts, result),
                )
            }
            Effect::PersistConfig { revision, config } => {
                let store = self.config_store.clone();
                Task::perform(
                    async move {
                        config::save_config(&store, revision, &config)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |result| Message::Saved(Blob::Config, result),
                )
            }
            Effect::SubmitRemote {
                endpoint,
                submission,
            } => {
                let remote = self.remote.clone();
                Task::perform(
                    async move {
                        remote
                            .submit(&endpoint, &submission)
                            .await
                            .map_err(|e| SyncWarning::from(&e))
                    },
                    Message::SubmissionFinished,
                )
            }
        }
    }

    fn handle_saved(&mut self, blob: Blob, result: Result<bool, String>) {
        let slot = match blob {
            Blob::Contacts => &mut self.contacts_save_error,
            Blob::Config => &mut self.config_save_error,
        };
        match result {
            Ok(true) => {
                tracing::debug!(?blob, "Saved");
                *slot = None;
            }
            Ok(false) => tracing::debug!(?blob, "Write superseded by a newer revision"),
            Err(e) => {
                tracing::error!(?blob, "Failed to save: {e}");
                *slot = Some(e);
            }
        }
    }

    /// Outstanding write failures, contacts first
    pub fn save_errors(&self) -> impl Iterator<Item = (Blob, &str)> {
        [
            (Blob::Contacts, &self.contacts_save_error),
            (Blob::Config, &self.config_save_error),
        ]
        .into_iter()
        .filter_map(|(blob, err)| err.as_deref().map(|e| (blob, e)))
    }

    fn handle_event(&mut self, event: &iced::Event) -> Task<Message> {
        use iced::keyboard::{self, key::Named};

        if let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event
            && let keyboard::Key::Named(Named::Escape) = key.as_ref()
        {
            let session = &self.session;
            let message = if session.warning.is_some() {
                Message::DismissWarning
            } else if session.pending_delete.is_some() {
                Message::CancelDelete
            } else if session.settings.is_some() {
                Message::CancelSettings
            } else if !session.search.is_empty() {
                Message::SearchChanged(String::new())
            } else {
                return Task::none();
            };
            return Task::done(message);
        }
        Task::none()
    }

    pub fn subscription(&self) -> iced::Subscription<Message> {
        iced::event::listen().map(Message::EventOccurred)
    }
}
