use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::forms::contact::{ContactAction, ContactState};
use crate::forms::models::ContactField;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub state: ContactState,
    pub on_action: Callback<ContactAction>,
    pub on_submit: Callback<()>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let ContactSectionProps { state, on_action, on_submit } = props;
    let locked = state.is_locked();

    let onsubmit = {
        let on_submit = on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_input = |field: ContactField| {
        on_action.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactAction::Edit(field, input.value())
        })
    };

    let on_message = on_action.reform(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        ContactAction::Edit(ContactField::Message, input.value())
    });

    let on_consent = on_action.reform(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        ContactAction::SetConsent(input.checked())
    });

    let field_class = |field: ContactField| {
        classes!(
            "form-input",
            state.errors.contains(field).then(|| "has-error"),
            locked.then(|| "locked")
        )
    };

    let field_error = |field: ContactField| -> Html {
        match state.errors.get(field) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    };

    let button_label = if state.submitting {
        html! { <span class="pending"><span class="spinner"></span>{"Sending..."}</span> }
    } else if locked {
        html! {
            <span class="pending">
                <span class="spinner"></span>
                {format!("Please wait {}s", state.cooldown.remaining())}
            </span>
        }
    } else {
        html! { {"Send Message"} }
    };

    html! {
        <section id="contact" class="section">
            <div class="container">
                <h2 class="section-title">{"Get in Touch"}</h2>
                <div class="grid two">
                    <div class="contact-info">
                        <h3>{"Contact Information"}</h3>
                        <p>{"Ready to elevate your business? Reach out to us for a consultation."}</p>
                        <div class="contact-line">
                            {"✉ "}
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                        </div>
                        <div class="contact-line">
                            {"☎ "}
                            <a href={format!("tel:{}", config::CONTACT_PHONE.replace(' ', ""))}>{config::CONTACT_PHONE}</a>
                        </div>
                        <div class="contact-line">{"⌖ "}{config::CONTACT_ADDRESS}</div>
                        <iframe
                            class="contact-map"
                            title="Skyline Bulls location"
                            src={config::MAP_EMBED_URL}
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                        ></iframe>
                    </div>
                    <form class="contact-form" {onsubmit} novalidate={true}>
                        <div>
                            <input
                                type="text"
                                name="name"
                                placeholder="Your Name"
                                value={state.form.name.clone()}
                                oninput={on_input(ContactField::Name)}
                                class={field_class(ContactField::Name)}
                                disabled={locked}
                            />
                            { field_error(ContactField::Name) }
                        </div>
                        <div>
                            <input
                                type="email"
                                name="email"
                                placeholder="Your Email"
                                value={state.form.email.clone()}
                                oninput={on_input(ContactField::Email)}
                                class={field_class(ContactField::Email)}
                                disabled={locked}
                            />
                            { field_error(ContactField::Email) }
                        </div>
                        <div>
                            <div class="optional-wrap">
                                <input
                                    type="tel"
                                    name="phone"
                                    placeholder="Your Phone (optional)"
                                    value={state.form.phone.clone()}
                                    oninput={on_input(ContactField::Phone)}
                                    class={field_class(ContactField::Phone)}
                                    disabled={locked}
                                />
                                <span class="optional-hint">{"Optional"}</span>
                            </div>
                            { field_error(ContactField::Phone) }
                        </div>
                        <div>
                            <textarea
                                name="message"
                                rows="4"
                                placeholder="Your Message"
                                value={state.form.message.clone()}
                                oninput={on_message}
                                class={field_class(ContactField::Message)}
                                disabled={locked}
                            />
                            { field_error(ContactField::Message) }
                        </div>
                        <div class="consent">
                            <input
                                type="checkbox"
                                id="consent"
                                checked={state.consent}
                                onchange={on_consent}
                                disabled={locked}
                            />
                            <label for="consent">
                                {"I accept that my data will be processed for the purpose of responding to my inquiry, marketing updates, and other communications in accordance with the US and EU data protection laws."}
                            </label>
                        </div>
                        if let Some(message) = &state.consent_error {
                            <p class="field-error">{message}</p>
                        }
                        <button
                            type="submit"
                            class={classes!("btn-primary", locked.then(|| "locked"))}
                            disabled={!state.can_submit()}
                        >
                            { button_label }
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
