use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::forms::models::NewsletterField;
use crate::forms::newsletter::{NewsletterAction, NewsletterState};

#[derive(Properties, PartialEq)]
pub struct NewsletterSectionProps {
    pub state: NewsletterState,
    pub on_action: Callback<NewsletterAction>,
    pub on_submit: Callback<()>,
}

#[function_component(NewsletterSection)]
pub fn newsletter_section(props: &NewsletterSectionProps) -> Html {
    let NewsletterSectionProps { state, on_action, on_submit } = props;

    let onsubmit = {
        let on_submit = on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let oninput = on_action.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        NewsletterAction::EditEmail(input.value())
    });

    let error = state.errors.get(NewsletterField::Email);

    html! {
        <section id="newsletter" class="section newsletter-section">
            <div class="container">
                <h2 class="section-title">{"Stay Updated"}</h2>
                <p class="section-lead">
                    {"Subscribe to our newsletter for the latest updates in technology and drone innovations."}
                </p>
                <form class="newsletter-form" {onsubmit} novalidate={true}>
                    <div>
                        <input
                            type="email"
                            placeholder="Enter your email"
                            value={state.form.email.clone()}
                            {oninput}
                            class={classes!("form-input", error.is_some().then(|| "has-error"))}
                        />
                        if let Some(message) = error {
                            <p class="field-error">{message}</p>
                        }
                    </div>
                    <button type="submit" class="btn-primary" disabled={state.submitting}>
                        if state.submitting {
                            <span class="pending"><span class="spinner"></span>{"Subscribing..."}</span>
                        } else {
                            {"Subscribe"}
                        }
                    </button>
                </form>
            </div>
        </section>
    }
}
