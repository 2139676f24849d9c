use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::{debug, error, info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::nav::Nav;
use crate::components::notification::NoticePopup;
use crate::config;
use crate::forms::contact::{ContactAction, ContactRejection, ContactState};
use crate::forms::newsletter::{NewsletterAction, NewsletterState};
use crate::forms::webhook::{FormKind, SubmitError, WebhookClient};
use crate::pages::{
    ai::AiSection,
    contact::ContactSection,
    drone::DroneSection,
    footer::Footer,
    hero::Hero,
    newsletter::NewsletterSection,
    services::{ItServices, ServicesOverview},
};
use crate::reveal::intro::IntroAnimation;
use crate::reveal::section::FadeInSection;

/// All mutable UI state of the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub intro_done: bool,
    pub menu_open: bool,
    pub contact: ContactState,
    pub newsletter: NewsletterState,
}

pub enum PageAction {
    IntroFinished,
    ToggleMenu,
    NavLinkActivated,
    Contact(ContactAction),
    Newsletter(NewsletterAction),
}

impl PageState {
    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::IntroFinished => self.intro_done = true,
            PageAction::ToggleMenu => self.menu_open = !self.menu_open,
            PageAction::NavLinkActivated => self.menu_open = false,
            PageAction::Contact(action) => self.contact.apply(action),
            PageAction::Newsletter(action) => self.newsletter.apply(action),
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

fn settle<T>(form: FormKind, outcome: Result<(), SubmitError>, ok: T, failed: T) -> T {
    match outcome {
        Ok(()) => {
            info!("{:?} submission accepted", form);
            ok
        }
        Err(e) => {
            error!("{:?} submission failed: {}", form, e);
            failed
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let state = use_reducer(PageState::default);

    // Cooldown ticker lives only while the countdown runs.
    {
        let state = state.clone();
        let counting = state.contact.cooldown.is_counting();
        use_effect_with_deps(
            move |counting| {
                let interval = counting.then(|| {
                    Interval::new(1_000, move || {
                        state.dispatch(PageAction::Contact(ContactAction::Tick));
                    })
                });
                move || drop(interval)
            },
            counting,
        );
    }

    {
        let state = state.clone();
        let hiding = state.newsletter.visibility.is_hiding_soon();
        use_effect_with_deps(
            move |hiding| {
                let timeout = hiding.then(|| {
                    Timeout::new(config::NEWSLETTER_HIDE_DELAY_MS, move || {
                        info!("Hiding newsletter section");
                        state.dispatch(PageAction::Newsletter(NewsletterAction::Elapsed(
                            config::NEWSLETTER_HIDE_DELAY_MS,
                        )));
                    })
                });
                move || drop(timeout)
            },
            hiding,
        );
    }

    let on_contact_submit = {
        let state = state.clone();
        Callback::from(move |_: ()| match state.contact.prepare_submission() {
            Ok(record) => {
                state.dispatch(PageAction::Contact(ContactAction::Started));
                let state = state.clone();
                spawn_local(async move {
                    let outcome = WebhookClient::new().submit(FormKind::Contact, &record).await;
                    let action = settle(FormKind::Contact, outcome, ContactAction::Succeeded, ContactAction::Failed);
                    state.dispatch(PageAction::Contact(action));
                });
            }
            Err(ContactRejection::Busy) => debug!("Contact form busy, ignoring submit"),
            Err(ContactRejection::Invalid { errors, consent_error }) => {
                warn!("Contact form rejected: {} field error(s), consent missing: {}", errors.len(), consent_error.is_some());
                state.dispatch(PageAction::Contact(ContactAction::Rejected { errors, consent_error }));
            }
        })
    };

    let on_newsletter_submit = {
        let state = state.clone();
        Callback::from(move |_: ()| match state.newsletter.prepare_submission() {
            Some(Ok(record)) => {
                state.dispatch(PageAction::Newsletter(NewsletterAction::Started));
                let state = state.clone();
                spawn_local(async move {
                    let outcome = WebhookClient::new().submit(FormKind::Newsletter, &record).await;
                    let action = settle(FormKind::Newsletter, outcome, NewsletterAction::Succeeded, NewsletterAction::Failed);
                    state.dispatch(PageAction::Newsletter(action));
                });
            }
            Some(Err(errors)) => {
                warn!("Newsletter form rejected");
                state.dispatch(PageAction::Newsletter(NewsletterAction::Rejected(errors)));
            }
            None => debug!("Newsletter submission already in flight"),
        })
    };

    let on_contact_action = {
        let state = state.clone();
        Callback::from(move |action: ContactAction| state.dispatch(PageAction::Contact(action)))
    };
    let on_newsletter_action = {
        let state = state.clone();
        Callback::from(move |action: NewsletterAction| state.dispatch(PageAction::Newsletter(action)))
    };
    let on_intro_complete = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(PageAction::IntroFinished))
    };
    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(PageAction::ToggleMenu))
    };
    let on_link = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(PageAction::NavLinkActivated))
    };

    if !state.intro_done {
        return html! { <IntroAnimation on_complete={on_intro_complete} /> };
    }

    let popup = if let Some(notice) = state.contact.notice.clone() {
        let state = state.clone();
        let on_close = Callback::from(move |_: ()| state.dispatch(PageAction::Contact(ContactAction::DismissNotice)));
        html! { <NoticePopup {notice} {on_close} /> }
    } else if let Some(notice) = state.newsletter.notice.clone() {
        let state = state.clone();
        let on_close = Callback::from(move |_: ()| state.dispatch(PageAction::Newsletter(NewsletterAction::DismissNotice)));
        html! { <NoticePopup {notice} {on_close} /> }
    } else {
        html! {}
    };

    html! {
        <div class="page fade-in-page">
            <Nav
                menu_open={state.menu_open}
                show_newsletter={state.newsletter.is_shown()}
                {on_toggle}
                {on_link}
            />
            <FadeInSection>
                <Hero />
            </FadeInSection>
            <FadeInSection delay_ms={200}>
                <ServicesOverview />
            </FadeInSection>
            <FadeInSection delay_ms={200}>
                <ItServices />
            </FadeInSection>
            <FadeInSection delay_ms={200} duration_ms={1_200}>
                <AiSection />
            </FadeInSection>
            <FadeInSection delay_ms={200}>
                <DroneSection />
            </FadeInSection>
            if state.newsletter.is_shown() {
                <FadeInSection delay_ms={100}>
                    <NewsletterSection
                        state={state.newsletter.clone()}
                        on_action={on_newsletter_action}
                        on_submit={on_newsletter_submit}
                    />
                </FadeInSection>
            }
            <FadeInSection delay_ms={100}>
                <ContactSection
                    state={state.contact.clone()}
                    on_action={on_contact_action}
                    on_submit={on_contact_submit}
                />
            </FadeInSection>
            <Footer />
            { popup }
        </div>
    }
}
