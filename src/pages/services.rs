use yew::prelude::*;

use crate::components::code_block::CodeBlock;

pub struct ServiceCard {
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

const CODE_SAMPLE: &str = r#"<div class="flex min-h-screen bg-gradient-to-r from-slate-900 to-slate-800">
  <div class="container mx-auto px-4 py-12">
    <h1 class="text-4xl font-bold text-white mb-8">
      Welcome to Skyline Bulls
    </h1>
    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
      <div class="bg-white/10 backdrop-blur-sm rounded-lg p-6">
        <h2 class="text-2xl text-white mb-4">Enterprise Solutions</h2>
        <p class="text-gray-300">Building the future of technology.</p>
      </div>
    </div>
  </div>
</div>"#;

const IT_TAGS: &[&str] = &["Web Development", "Software Development", "Content Management", "DevOps"];

pub const IT_SERVICES: &[ServiceCard] = &[
    ServiceCard {
        icon: "🌐",
        name: "Web Development",
        description: "Custom web applications and responsive websites built with modern frameworks",
        features: &["React & Next.js", "Vue & Nuxt.js", "API Development", "UI/UX Design"],
    },
    ServiceCard {
        icon: "🖥️",
        name: "Software Development",
        description: "Custom software solutions for your business needs",
        features: &["Enterprise Software", "Mobile Apps", "Desktop Applications", "System Integration"],
    },
    ServiceCard {
        icon: "🗄️",
        name: "Infrastructure",
        description: "Robust and scalable infrastructure solutions",
        features: &["Server Management", "Load Balancing", "Monitoring", "Disaster Recovery"],
    },
    ServiceCard {
        icon: "🔗",
        name: "Network Solutions",
        description: "Comprehensive networking and connectivity solutions",
        features: &["Network Design", "VPN Setup", "WiFi Solutions", "Network Security"],
    },
    ServiceCard {
        icon: "💾",
        name: "Cloud Solutions",
        description: "Scalable cloud infrastructure and migration services",
        features: &["Cloud Migration", "DevOps", "Serverless Architecture", "Performance Optimization"],
    },
    ServiceCard {
        icon: "🛡️",
        name: "Cybersecurity",
        description: "Advanced security solutions to protect your digital assets",
        features: &["Penetration Testing", "Security Audits", "Incident Response", "Security Training"],
    },
];

#[function_component(ServicesOverview)]
pub fn services_overview() -> Html {
    html! {
        <section id="services" class="section">
            <div class="container">
                <h2 class="section-title">{"Our Services"}</h2>
                <div class="grid two">
                    <div class="overview-card">
                        <div class="overview-icon">{"</>"}</div>
                        <h3>{"IT Solutions"}</h3>
                        <p>{"Comprehensive IT services including software development, cloud solutions, and cybersecurity to keep your business ahead of the curve."}</p>
                        <a href="#it-services" class="learn-more">{"Learn More ›"}</a>
                    </div>
                    <div class="overview-card">
                        <div class="overview-icon">{"✈"}</div>
                        <h3>{"Drone Services"}</h3>
                        <p>{"Professional drone solutions for aerial photography, surveying, and inspection services with cutting-edge equipment."}</p>
                        <a href="#drone-services" class="learn-more">{"Learn More ›"}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(ItServices)]
pub fn it_services() -> Html {
    html! {
        <section id="it-services" class="section">
            <div class="container">
                <div class="it-intro">
                    <div class="it-intro-text">
                        <h2 class="section-title">{"IT Services"}</h2>
                        <p class="section-lead">
                            {"Enterprise-grade solutions built with cutting-edge technology to drive your business forward"}
                        </p>
                        <div class="tag-list">
                            { for IT_TAGS.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                        </div>
                    </div>
                    <div class="it-intro-code">
                        <CodeBlock code={CODE_SAMPLE} />
                    </div>
                </div>
                <div class="grid three">
                    { for IT_SERVICES.iter().map(|service| html! {
                        <div class="service-card">
                            <div class="service-icon">{service.icon}</div>
                            <h3>{service.name}</h3>
                            <p>{service.description}</p>
                            <div class="feature-grid">
                                { for service.features.iter().map(|feature| html! {
                                    <div class="feature">{"› "}{*feature}</div>
                                }) }
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
