use super::models::{FieldErrors, NewsletterField, NewsletterFormData, Notice};
use super::validation::validate_newsletter;
use crate::config;

pub const NEWSLETTER_SUCCESS: &str = "Thank you for subscribing to our newsletter!";
pub const NEWSLETTER_FAILURE: &str = "Sorry, we could not subscribe you right now. Please try again later.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionVisibility {
    #[default]
    Visible,
    /// Subscribed; the section goes away once `remaining_ms` runs out.
    HidingSoon { remaining_ms: u32 },
    Hidden,
}

impl SectionVisibility {
    pub fn is_hiding_soon(&self) -> bool {
        matches!(self, SectionVisibility::HidingSoon { .. })
    }

    fn elapse(self, ms: u32) -> Self {
        match self {
            SectionVisibility::HidingSoon { remaining_ms } if remaining_ms > ms => {
                SectionVisibility::HidingSoon { remaining_ms: remaining_ms - ms }
            }
            SectionVisibility::HidingSoon { .. } => SectionVisibility::Hidden,
            other => other,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewsletterState {
    pub form: NewsletterFormData,
    pub errors: FieldErrors<NewsletterField>,
    pub submitting: bool,
    pub notice: Option<Notice>,
    pub visibility: SectionVisibility,
}

pub enum NewsletterAction {
    EditEmail(String),
    Rejected(FieldErrors<NewsletterField>),
    Started,
    Succeeded,
    Failed,
    /// Time passed on the hide countdown.
    Elapsed(u32),
    DismissNotice,
}

impl NewsletterState {
    pub fn is_shown(&self) -> bool {
        self.visibility != SectionVisibility::Hidden
    }

    /// `None` while a request is already in flight.
    pub fn prepare_submission(&self) -> Option<Result<NewsletterFormData, FieldErrors<NewsletterField>>> {
        (!self.submitting).then(|| validate_newsletter(&self.form))
    }

    pub fn apply(&mut self, action: NewsletterAction) {
        match action {
            NewsletterAction::EditEmail(email) => {
                self.form.email = email;
                self.errors.clear(NewsletterField::Email);
            }
            NewsletterAction::Rejected(errors) => self.errors = errors,
            NewsletterAction::Started => {
                self.submitting = true;
                self.errors = FieldErrors::default();
            }
            NewsletterAction::Succeeded => {
                self.submitting = false;
                self.form = NewsletterFormData::default();
                self.notice = Some(Notice::success(NEWSLETTER_SUCCESS));
                if self.visibility == SectionVisibility::Visible {
                    self.visibility = SectionVisibility::HidingSoon {
                        remaining_ms: config::NEWSLETTER_HIDE_DELAY_MS,
                    };
                }
            }
            NewsletterAction::Failed => {
                self.submitting = false;
                self.notice = Some(Notice::failure(NEWSLETTER_FAILURE));
            }
            NewsletterAction::Elapsed(ms) => self.visibility = self.visibility.elapse(ms),
            NewsletterAction::DismissNotice => self.notice = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::models::NoticeKind;
    use crate::forms::validation::EMAIL_ERROR;

    #[test]
    fn invalid_email_is_rejected_inline() {
        let mut state = NewsletterState::default();
        state.apply(NewsletterAction::EditEmail("not-an-email".into()));
        let Some(Err(errors)) = state.prepare_submission() else {
            panic!("invalid email accepted");
        };
        state.apply(NewsletterAction::Rejected(errors));
        assert_eq!(state.errors.get(NewsletterField::Email), Some(EMAIL_ERROR));

        state.apply(NewsletterAction::EditEmail("a@b.com".into()));
        assert!(state.errors.is_empty());
        assert_eq!(state.prepare_submission(), Some(Ok(NewsletterFormData { email: "a@b.com".into() })));
    }

    #[test]
    fn success_schedules_hiding_for_good() {
        let mut state = NewsletterState::default();
        state.apply(NewsletterAction::EditEmail("a@b.com".into()));
        state.apply(NewsletterAction::Started);
        assert_eq!(state.prepare_submission(), None);
        state.apply(NewsletterAction::Succeeded);

        assert!(state.is_shown());
        assert!(state.visibility.is_hiding_soon());
        assert_eq!(state.form.email, "");
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Success));

        state.apply(NewsletterAction::Elapsed(config::NEWSLETTER_HIDE_DELAY_MS));
        assert!(!state.is_shown());
        state.apply(NewsletterAction::Succeeded);
        assert_eq!(state.visibility, SectionVisibility::Hidden);
    }

    #[test]
    fn section_hides_exactly_at_two_seconds() {
        let mut state = NewsletterState::default();
        state.apply(NewsletterAction::Started);
        state.apply(NewsletterAction::Succeeded);

        state.apply(NewsletterAction::Elapsed(1_000));
        state.apply(NewsletterAction::Elapsed(999));
        assert!(state.is_shown());
        assert_eq!(state.visibility, SectionVisibility::HidingSoon { remaining_ms: 1 });

        state.apply(NewsletterAction::Elapsed(1));
        assert!(!state.is_shown());
        assert_eq!(state.visibility, SectionVisibility::Hidden);
    }

    #[test]
    fn elapsed_time_only_counts_after_success() {
        let mut state = NewsletterState::default();
        state.apply(NewsletterAction::Elapsed(10_000));
        assert_eq!(state.visibility, SectionVisibility::Visible);
    }

    #[test]
    fn failure_keeps_email() {
        let mut state = NewsletterState::default();
        state.apply(NewsletterAction::EditEmail("a@b.com".into()));
        state.apply(NewsletterAction::Started);
        state.apply(NewsletterAction::Failed);
        assert_eq!(state.form.email, "a@b.com");
        assert!(!state.submitting);
        assert_eq!(state.visibility, SectionVisibility::Visible);
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Failure));
    }
}
