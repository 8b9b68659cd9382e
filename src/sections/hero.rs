use yew::prelude::*;

use crate::config;

const HERO_CHIPS: &[&str] = &[
    "More repeat customers",
    "Automated follow-ups",
    "More 5-star reviews",
    "Referral momentum",
];

// (position class, label, value) for the pills orbiting the core badge.
const ORBIT_PILLS: &[(&str, &str, &str)] = &[
    ("orbit-pill-one", "More repeat customers", "Thank-you + reactivation live"),
    ("orbit-pill-two", "Google reviews on autopilot", "Requests tied to real visits"),
    ("orbit-pill-three", "Win-back campaigns", "Runs without extra work"),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="hero" class="section hero-section">
            <div class="container hero-inner">
                <div class="hero-text">
                    <p class="eyebrow">{"REVENUE BOOSTER SYSTEM"}</p>
                    <h1 class="hero-title">{"Turn one-time buyers into regulars."}</h1>
                    <p class="hero-sub">
                        {"A simple, done-for-you two-week setup that brings customers back, builds reviews, and grows monthly revenue using the tools you already have."}
                    </p>

                    <div class="hero-chips">
                        { for HERO_CHIPS.iter().map(|chip| html! {
                            <span class="chip chip-ghost">{*chip}</span>
                        }) }
                    </div>

                    <div class="hero-cta-row">
                        <a href="#contact" class="btn-primary">{config::CTA_LABEL}</a>
                        <a href="#benefits" class="btn-ghost">{"See the wins"}</a>
                    </div>
                    <p class="hero-footnote">
                        {"We do not replace your POS. We make its customer data work harder for you."}
                    </p>
                </div>
                <div class="hero-visual">
                    <div class="hero-orbit">
                        <div class="orbit-core">
                            <span class="orbit-core-title">{"2-Week Revenue Booster"}</span>
                            <span class="orbit-core-sub">{"Repeat customers · Reviews · Win-back"}</span>
                        </div>
                        <div class="orbit-ring orbit-ring-one" />
                        <div class="orbit-ring orbit-ring-two" />
                        { for ORBIT_PILLS.iter().map(|(position, label, value)| html! {
                            <div class={classes!("orbit-pill", *position)}>
                                <span class="pill-label">{*label}</span>
                                <span class="pill-value">{*value}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
