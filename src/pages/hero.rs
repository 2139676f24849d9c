use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="section hero">
            <div class="container">
                <h1 class="hero-title">
                    {"Elevate Your Business with"}
                    <span class="gradient-text">{"Advanced Technology"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Skyline Bulls Technology delivers cutting-edge IT solutions and innovative drone services to transform your business operations."}
                </p>
                <div class="hero-cta-group">
                    <a href="#contact" class="btn-primary">{"Get Started ›"}</a>
                    <a href="#services" class="btn-outline">{"Our Services"}</a>
                </div>
            </div>
        </section>
    }
}
