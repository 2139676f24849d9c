use yew::prelude::*;

#[function_component(Logo)]
pub fn logo() -> Html {
    html! {
        <span class="logo">
            <img src="/logo.png" alt="Skyline Bulls Logo" class="logo-image" />
            <span class="logo-text">{"Skyline Bulls"}</span>
        </span>
    }
}
