use yew::prelude::*;

use super::services::ServiceCard;

const DRONE_SERVICES: &[ServiceCard] = &[
    ServiceCard {
        icon: "📷",
        name: "Aerial Photography",
        description: "High-quality aerial photos and videos for real estate and events",
        features: &["4K Video", "Real Estate Tours", "Event Coverage", "Marketing Material"],
    },
    ServiceCard {
        icon: "🗺️",
        name: "Mapping & Surveying",
        description: "Precise aerial mapping and 3D modeling services",
        features: &["Topographic Mapping", "3D Modeling", "Volume Calculations", "Site Planning"],
    },
    ServiceCard {
        icon: "🏢",
        name: "Infrastructure Inspection",
        description: "Detailed inspection of buildings, bridges, and industrial facilities",
        features: &["Thermal Imaging", "Structural Analysis", "Safety Inspections", "Maintenance Planning"],
    },
];

#[function_component(DroneSection)]
pub fn drone_section() -> Html {
    html! {
        <section id="drone-services" class="section drone-section">
            <div class="container">
                <div class="section-header centered">
                    <h2 class="section-title">{"Drone Services"}</h2>
                    <p class="section-lead">
                        {"Professional aerial solutions leveraging cutting-edge drone technology to provide unique perspectives and valuable insights"}
                    </p>
                </div>
                <div class="grid three">
                    { for DRONE_SERVICES.iter().map(|service| html! {
                        <div class="service-card drone-card">
                            <div class="drone-glow"></div>
                            <div class="service-icon">{service.icon}</div>
                            <h3>{service.name}</h3>
                            <p>{service.description}</p>
                            <ul class="feature-list">
                                { for service.features.iter().map(|feature| html! { <li>{"› "}{*feature}</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
