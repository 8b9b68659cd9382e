use yew::prelude::*;

const STEPS: &[(&str, &str)] = &[
    (
        "Kickoff and data access",
        "We map your journey, export customer data from POS, and collect access to Google, email and messaging tools.",
    ),
    (
        "Build and configure",
        "CRM setup, cleanup and import, VIP and inactive segments, thank-you, win-back, birthday, and review flows.",
    ),
    (
        "Test, launch and handover",
        "We test triggers, refine templates, train your team briefly, and deliver a one-page owner playbook.",
    ),
];

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="process" class="section process-section">
            <div class="container">
                <p class="eyebrow center">{"HOW WE WORK"}</p>
                <h2 class="section-title center">{"From first call to running revenue system."}</h2>
                <p class="section-sub center">
                    {"A focused two-week delivery that builds repeat-customer momentum without adding complexity."}
                </p>
                <div class="process-timeline">
                    { for STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                        <div class="process-step">
                            <div class="process-circle">{i + 1}</div>
                            <div class="process-body">
                                <div class="process-title">{*title}</div>
                                <div class="process-text">{*text}</div>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="process-cta-row">
                    <a href="#contact" class="btn-primary">{"Map my Revenue Booster"}</a>
                </div>
            </div>
        </section>
    }
}
