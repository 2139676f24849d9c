use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::logo::Logo;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#ai-services", "AI & Automation"),
    ("#drone-services", "Drones"),
    ("#contact", "Contact"),
];

const SCROLLED_AFTER_PX: f64 = 50.0;

fn is_scrolled_past(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER_PX
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub show_newsletter: bool,
    pub on_toggle: Callback<()>,
    pub on_link: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu_open, show_newsletter, on_toggle, on_link } = props;
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = window.as_ref().map(|window| {
                let window_clone = window.clone();
                let callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(is_scrolled_past(scroll_y));
                }) as Box<dyn FnMut()>);
                if let Err(e) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                    warn!("Could not watch scrolling for the nav: {:?}", e);
                }
                callback
            });

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    if let Err(e) = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                        warn!("Could not remove the nav scroll listener: {:?}", e);
                    }
                }
            }
        }, ());
    }

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    // Anchors keep their default jump; we only fold the menu away.
    let close_menu = {
        let on_link = on_link.clone();
        Callback::from(move |_: MouseEvent| on_link.emit(()))
    };

    let links = |class: &'static str| -> Html {
        html! {
            <>
                { for NAV_LINKS.iter().map(|(href, label)| html! {
                    <a href={*href} class={class} onclick={close_menu.clone()}>{*label}</a>
                }) }
                if *show_newsletter {
                    <a href="#newsletter" class="btn-primary" onclick={close_menu.clone()}>{"Newsletter"}</a>
                }
            </>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={close_menu.clone()}>
                    <Logo />
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>

                <div class="nav-right">
                    { links("nav-link") }
                </div>
            </div>
            if *menu_open {
                <div class="nav-mobile">
                    { links("nav-link mobile") }
                </div>
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_style_starts_after_fifty_pixels() {
        assert!(!is_scrolled_past(0.0));
        assert!(!is_scrolled_past(50.0));
        assert!(is_scrolled_past(50.5));
    }
}
