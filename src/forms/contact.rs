use crate::config;

use super::cooldown::Cooldown;
use super::models::{ContactField, ContactFormData, FieldErrors, Notice};
use super::validation::validate_contact;

pub const CONSENT_ERROR: &str = "Please accept the data processing terms before sending your message";
pub const CONTACT_SUCCESS: &str = "Thank you for your message! We'll get back to you soon.";
pub const CONTACT_FAILURE: &str = "Sorry, your message could not be sent. Please try again later.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactState {
    pub form: ContactFormData,
    pub errors: FieldErrors<ContactField>,
    pub consent: bool,
    pub consent_error: Option<String>,
    pub submitting: bool,
    pub cooldown: Cooldown,
    pub notice: Option<Notice>,
}

pub enum ContactAction {
    Edit(ContactField, String),
    SetConsent(bool),
    Rejected {
        errors: FieldErrors<ContactField>,
        consent_error: Option<String>,
    },
    Started,
    Succeeded,
    Failed,
    Tick,
    DismissNotice,
}

#[derive(Debug, PartialEq)]
pub enum ContactRejection {
    /// A submission is in flight or the cooldown is running.
    Busy,
    Invalid {
        errors: FieldErrors<ContactField>,
        consent_error: Option<String>,
    },
}

impl ContactState {
    /// Inputs are read-only while the cooldown runs.
    pub fn is_locked(&self) -> bool {
        self.cooldown.is_counting()
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.is_locked()
    }

    /// Returns the record to post, or why nothing may be posted. Field
    /// validation and consent are checked independently so both problems
    /// surface together.
    pub fn prepare_submission(&self) -> Result<ContactFormData, ContactRejection> {
        if !self.can_submit() {
            return Err(ContactRejection::Busy);
        }
        let validated = validate_contact(&self.form);
        let consent_error = (!self.consent).then(|| CONSENT_ERROR.to_string());
        match (validated, consent_error) {
            (Ok(record), None) => Ok(record),
            (Ok(_), consent_error) => Err(ContactRejection::Invalid {
                errors: FieldErrors::default(),
                consent_error,
            }),
            (Err(errors), consent_error) => Err(ContactRejection::Invalid { errors, consent_error }),
        }
    }

    pub fn apply(&mut self, action: ContactAction) {
        match action {
            ContactAction::Edit(field, value) => {
                if self.is_locked() {
                    return;
                }
                self.form.set(field, value);
                self.errors.clear(field);
            }
            ContactAction::SetConsent(checked) => {
                if self.is_locked() {
                    return;
                }
                self.consent = checked;
                if checked {
                    self.consent_error = None;
                }
            }
            ContactAction::Rejected { errors, consent_error } => {
                self.errors = errors;
                self.consent_error = consent_error;
            }
            ContactAction::Started => {
                self.submitting = true;
                self.errors = FieldErrors::default();
                self.consent_error = None;
            }
            ContactAction::Succeeded => {
                self.submitting = false;
                self.form = ContactFormData::default();
                self.consent = false;
                self.cooldown = Cooldown::start(config::CONTACT_COOLDOWN_SECS);
                self.notice = Some(Notice::success(CONTACT_SUCCESS));
            }
            ContactAction::Failed => {
                self.submitting = false;
                self.notice = Some(Notice::failure(CONTACT_FAILURE));
            }
            ContactAction::Tick => {
                self.cooldown = self.cooldown.tick();
            }
            ContactAction::DismissNotice => {
                self.notice = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::forms::models::NoticeKind;
    use crate::forms::validation::{EMAIL_ERROR, NAME_ERROR};
    use crate::forms::webhook::testing::RecordingTransport;
    use crate::forms::webhook::{FormKind, WebhookClient};

    fn filled() -> ContactState {
        let mut state = ContactState::default();
        state.apply(ContactAction::Edit(ContactField::Name, "Grace Hopper".into()));
        state.apply(ContactAction::Edit(ContactField::Email, "grace@example.com".into()));
        state.apply(ContactAction::Edit(ContactField::Message, "Please inspect our rooftop.".into()));
        state
    }

    /// Drives one submit press the way the page does.
    fn press_submit(state: &mut ContactState, client: &WebhookClient<RecordingTransport>) {
        match state.prepare_submission() {
            Ok(record) => {
                state.apply(ContactAction::Started);
                match block_on(client.submit(FormKind::Contact, &record)) {
                    Ok(()) => state.apply(ContactAction::Succeeded),
                    Err(_) => state.apply(ContactAction::Failed),
                }
            }
            Err(ContactRejection::Busy) => {}
            Err(ContactRejection::Invalid { errors, consent_error }) => {
                state.apply(ContactAction::Rejected { errors, consent_error })
            }
        }
    }

    #[test]
    fn successful_submission_resets_and_starts_cooldown() {
        let client = WebhookClient::with_transport("https://hooks.test", RecordingTransport::answering(200));
        let mut state = filled();
        state.apply(ContactAction::SetConsent(true));

        press_submit(&mut state, &client);

        let requests = client.transport_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0]["type"], "contact");
        assert_eq!(requests[0]["name"], "Grace Hopper");
        assert_eq!(state.form, ContactFormData::default());
        assert_eq!(state.cooldown.remaining(), 30);
        assert!(!state.submitting);
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Success));
    }

    #[test]
    fn missing_consent_sends_nothing() {
        let client = WebhookClient::with_transport("https://hooks.test", RecordingTransport::answering(200));
        let mut state = filled();
        press_submit(&mut state, &client);
        assert!(client.transport_requests().is_empty());
        assert_eq!(state.consent_error.as_deref(), Some(CONSENT_ERROR));
        assert!(state.errors.is_empty());

        let mut state = ContactState::default();
        press_submit(&mut state, &client);
        assert!(client.transport_requests().is_empty());
        assert_eq!(state.consent_error.as_deref(), Some(CONSENT_ERROR));
        assert_eq!(state.errors.get(ContactField::Name), Some(NAME_ERROR));
        assert_eq!(state.errors.get(ContactField::Email), Some(EMAIL_ERROR));
    }

    #[test]
    fn cooldown_locks_form_for_thirty_ticks() {
        let client = WebhookClient::with_transport("https://hooks.test", RecordingTransport::answering(200));
        let mut state = filled();
        state.apply(ContactAction::SetConsent(true));
        press_submit(&mut state, &client);

        for _ in 0..29 {
            state.apply(ContactAction::Tick);
            assert!(state.is_locked());
            assert!(!state.can_submit());
        }
        state.apply(ContactAction::Edit(ContactField::Name, "Ignored".into()));
        state.apply(ContactAction::SetConsent(true));
        assert_eq!(state.form.name, "");
        assert!(!state.consent);

        // Pressing submit while locked never reaches the webhook.
        press_submit(&mut state, &client);
        assert_eq!(client.transport_requests().len(), 1);

        state.apply(ContactAction::Tick);
        assert!(!state.is_locked());
        assert!(state.can_submit());
        state.apply(ContactAction::Edit(ContactField::Name, "Grace".into()));
        assert_eq!(state.form.name, "Grace");
    }

    #[test]
    fn failure_keeps_the_draft() {
        let client = WebhookClient::with_transport("https://hooks.test", RecordingTransport::answering(500));
        let mut state = filled();
        state.apply(ContactAction::SetConsent(true));
        let before = state.form.clone();

        press_submit(&mut state, &client);

        assert_eq!(state.form, before);
        assert!(state.consent);
        assert!(!state.submitting);
        assert_eq!(state.cooldown, Cooldown::Idle);
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Failure));

        let client = WebhookClient::with_transport("https://hooks.test", RecordingTransport::unreachable());
        state.apply(ContactAction::DismissNotice);
        press_submit(&mut state, &client);
        assert_eq!(state.form, before);
        assert_eq!(state.notice.as_ref().map(|n| n.message.as_str()), Some(CONTACT_FAILURE));
    }

    #[test]
    fn editing_clears_only_that_field() {
        let mut state = ContactState::default();
        state.apply(ContactAction::SetConsent(true));
        let Err(ContactRejection::Invalid { errors, consent_error }) = state.prepare_submission() else {
            panic!("empty form accepted");
        };
        assert!(consent_error.is_none());
        state.apply(ContactAction::Rejected { errors, consent_error });
        assert_eq!(state.errors.len(), 3);

        state.apply(ContactAction::Edit(ContactField::Email, "x".into()));
        assert!(!state.errors.contains(ContactField::Email));
        assert!(state.errors.contains(ContactField::Name));
        assert!(state.errors.contains(ContactField::Message));
    }

    #[test]
    fn ticking_consent_clears_consent_error() {
        let mut state = filled();
        state.apply(ContactAction::Rejected {
            errors: FieldErrors::default(),
            consent_error: Some(CONSENT_ERROR.to_string()),
        });
        state.apply(ContactAction::SetConsent(false));
        assert!(state.consent_error.is_some());
        state.apply(ContactAction::SetConsent(true));
        assert!(state.consent_error.is_none());
    }

    #[test]
    fn in_flight_submission_blocks_another() {
        let mut state = filled();
        state.apply(ContactAction::SetConsent(true));
        state.apply(ContactAction::Started);
        assert_eq!(state.prepare_submission(), Err(ContactRejection::Busy));
    }
}
