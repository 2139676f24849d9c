use yew::prelude::*;

struct AiService {
    icon: &'static str,
    name: &'static str,
    description: &'static str,
    integrations: &'static [&'static str],
    features: &'static [&'static str],
}

const AI_SERVICES: &[AiService] = &[
    AiService {
        icon: "🤖",
        name: "AI Chatbots & Virtual Assistants",
        description: "Deploy intelligent chatbots and virtual assistants to automate customer support and engagement.",
        integrations: &["OpenAI", "Dialogflow", "Microsoft Bot", "Rasa"],
        features: &[
            "24/7 Customer Support",
            "Multi-Channel Integration",
            "Natural Language Understanding",
            "Custom Workflows",
            "Analytics & Reporting",
        ],
    },
    AiService {
        icon: "🧠",
        name: "Machine Learning Solutions",
        description: "Advanced ML models for predictive analytics and decision making",
        integrations: &["TensorFlow", "PyTorch", "Scikit-learn", "AWS SageMaker"],
        features: &["Predictive Analytics", "Pattern Recognition", "Data Mining", "Model Training"],
    },
    AiService {
        icon: "🔄",
        name: "Workflow Automation",
        description: "End-to-end automation solutions for business processes",
        integrations: &["Zapier", "Make", "Power Automate", "n8n"],
        features: &["Process Automation", "Custom Workflows", "Integration Hub", "Error Handling", "AI-Powered Agents"],
    },
    AiService {
        icon: "🌿",
        name: "LLM Integration",
        description: "Seamless integration of Large Language Models into your systems",
        integrations: &["GPT-4", "Claude", "PaLM", "Llama"],
        features: &["API Integration", "Custom Training", "Prompt Engineering", "Response Optimization", "Human-in-the-Loop"],
    },
];

#[function_component(AiSection)]
pub fn ai_section() -> Html {
    html! {
        <section id="ai-services" class="section ai-section">
            <div class="container">
                <div class="section-header centered">
                    <h2 class="section-title">
                        {"AI & Automation"}
                        <span class="accent block">{"All in One Place"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Explore AI and automation solutions from industry leaders to create powerful, reliable systems that transform your business operations."}
                    </p>
                </div>
                <div class="grid four">
                    { for AI_SERVICES.iter().map(|service| html! {
                        <div class="ai-card">
                            <div class="ai-card-body">
                                <div class="service-icon">{service.icon}</div>
                                <h3>{service.name}</h3>
                                <p>{service.description}</p>
                                <h4>{"Integrations"}</h4>
                                <div class="tag-list small">
                                    { for service.integrations.iter().map(|name| html! { <span class="tag">{*name}</span> }) }
                                </div>
                                <h4>{"Features"}</h4>
                                <ul class="feature-list">
                                    { for service.features.iter().map(|feature| html! { <li>{"✦ "}{*feature}</li> }) }
                                </ul>
                            </div>
                            <div class="ai-card-footer">
                                <a href="#contact" class="btn-soft">{"Learn More ⚡"}</a>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="centered">
                    <a href="#contact" class="btn-primary">{"Get Started with AI ›"}</a>
                </div>
            </div>
        </section>
    }
}
