use yew::prelude::*;
use log::{info, Level};

mod config;
mod forms {
    pub mod models;
    pub mod validation;
    pub mod cooldown;
    pub mod webhook;
    pub mod contact;
    pub mod newsletter;
}
mod reveal {
    pub mod intro;
    pub mod section;
}
mod components {
    pub mod logo;
    pub mod nav;
    pub mod notification;
    pub mod code_block;
}
mod pages {
    pub mod home;
    pub mod hero;
    pub mod services;
    pub mod ai;
    pub mod drone;
    pub mod newsletter;
    pub mod contact;
    pub mod footer;
}

use pages::home::Home;


#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Skyline Bulls site");
    yew::Renderer::<App>::new().render();
}
