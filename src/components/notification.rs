use yew::prelude::*;

use crate::forms::models::{Notice, NoticeKind};

#[derive(Properties, PartialEq)]
pub struct NoticePopupProps {
    pub notice: Notice,
    pub on_close: Callback<()>,
}

/// Modal shown once a submission settles. Closes on the button or a click on
/// the backdrop.
#[function_component(NoticePopup)]
pub fn notice_popup(props: &NoticePopupProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let (icon, title, class) = match props.notice.kind {
        NoticeKind::Success => ("✓", "Success!", "notice-success"),
        NoticeKind::Failure => ("!", "Something went wrong", "notice-failure"),
    };

    html! {
        <div class="notice-overlay">
            <style>
                {r#"
                    .notice-overlay {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 50;
                        padding: 0 1rem;
                    }
                    .notice-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                        backdrop-filter: blur(4px);
                    }
                    .notice-card {
                        position: relative;
                        width: 100%;
                        max-width: 28rem;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: linear-gradient(to bottom, rgba(255, 255, 255, 0.1), rgba(255, 255, 255, 0.05));
                        backdrop-filter: blur(12px);
                        text-align: center;
                    }
                    .notice-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.5);
                        cursor: pointer;
                        font-size: 1.25rem;
                    }
                    .notice-icon {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .notice-success .notice-icon { color: #22c55e; }
                    .notice-failure .notice-icon { color: #ef4444; }
                    .notice-card p { color: rgba(255, 255, 255, 0.7); }
                "#}
            </style>
            <div class="notice-backdrop" onclick={close.clone()}></div>
            <div class={classes!("notice-card", class)}>
                <button class="notice-close" onclick={close}>{"✕"}</button>
                <div class="notice-icon">{icon}</div>
                <h3>{title}</h3>
                <p>{&props.notice.message}</p>
            </div>
        </div>
    }
}
