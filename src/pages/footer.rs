use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::logo::Logo;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();
    html! {
        <footer class="footer">
            <div class="container footer-content">
                <Logo />
                <div class="footer-text">
                    {format!("© {} Skyline Bulls. All rights reserved. | Made with ❤️ by Denis Dobra", year)}
                </div>
            </div>
        </footer>
    }
}
