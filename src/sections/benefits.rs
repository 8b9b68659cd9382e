use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Readiness {
    Live,
    Soon,
}

struct Campaign {
    name: &'static str,
    readiness: Readiness,
}

const CAMPAIGNS: &[Campaign] = &[
    Campaign { name: "Thank-you after purchase", readiness: Readiness::Live },
    Campaign { name: "We miss you at 30 days", readiness: Readiness::Live },
    Campaign { name: "Birthday and anniversary", readiness: Readiness::Soon },
];

const SIGNALS: &[(&str, &str)] = &[
    ("planning-badge-green", "VIP segment ready"),
    ("planning-badge-amber", "Inactive list growing slowly"),
    ("planning-badge-muted", "Next seasonal promo draft"),
];

#[derive(Properties, PartialEq)]
struct BenefitProps {
    icon: &'static str,
    heading: &'static str,
    summary: &'static str,
    #[prop_or_default]
    wide: bool,
    #[prop_or_default]
    children: Children,
}

#[function_component(BenefitBlock)]
fn benefit_block(props: &BenefitProps) -> Html {
    html! {
        <div class={classes!("benefit-block", props.wide.then(|| "wide"))}>
            <div class="benefit-icon">{props.icon}</div>
            <div class="benefit-heading">{props.heading}</div>
            <div class="benefit-mini">{props.summary}</div>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(Benefits)]
pub fn benefits() -> Html {
    html! {
        <section id="benefits" class="section big-three-section">
            <div class="container">
                <h2 class="section-title center">{"Three wins owners feel right away."}</h2>
                <p class="section-sub center">
                    {"A tight, revenue-first system that makes follow-up effortless and repeat visits predictable."}
                </p>
                <div class="big-three-layout">
                    <div class="big-three-row">
                        <BenefitBlock
                            icon="🧲"
                            heading="More repeat customers"
                            summary="We organize your list, segment it, and set up thank-you and reactivation flows."
                        >
                            <div class="benefit-bar-chart">
                                <div class="bar-labels">
                                    <span>{"New"}</span>
                                    <span>{"Returning"}</span>
                                </div>
                                <div class="bar-row">
                                    <div class="bar bar-new" />
                                    <div class="bar bar-returning" />
                                </div>
                                <span class="benefit-tag">{"Typical repeat lift: 10 to 25 percent"}</span>
                            </div>
                        </BenefitBlock>

                        <BenefitBlock
                            icon="🌐"
                            heading="A review engine that runs itself"
                            summary="Automatic Google review requests tied to real visits and simple incentives."
                        >
                            <div class="benefit-google-card">
                                <div class="google-name-row">
                                    <span class="google-name">{"Your Place · Calgary"}</span>
                                    <span class="google-status">{"Open ⋅ Closes 9pm"}</span>
                                </div>
                                <div class="google-rating-row">
                                    <span class="google-stars">{"★★★★☆"}</span>
                                    <span class="google-rating">{"4.8"}</span>
                                    <span class="google-count">{"132 reviews"}</span>
                                </div>
                                <div class="google-pill">{"32 new reviews this month"}</div>
                            </div>
                        </BenefitBlock>
                    </div>

                    <div class="big-three-row big-three-row-bottom">
                        <BenefitBlock
                            icon="⚡"
                            heading="Promotions that stay consistent and easy"
                            summary="Birthday, anniversary, seasonal and new-product messages ready to run without extra effort."
                            wide={true}
                        >
                            <div class="planning-board">
                                <div class="planning-column">
                                    <div class="planning-title">{"Campaigns"}</div>
                                    { for CAMPAIGNS.iter().map(|campaign| {
                                        let state = match campaign.readiness {
                                            Readiness::Live => "planning-item-ok",
                                            Readiness::Soon => "planning-item-soon",
                                        };
                                        html! {
                                            <div class={classes!("planning-item", state)}>{campaign.name}</div>
                                        }
                                    }) }
                                </div>
                                <div class="planning-column">
                                    <div class="planning-title">{"Signals"}</div>
                                    { for SIGNALS.iter().map(|(tone, text)| html! {
                                        <div class={classes!("planning-badge", *tone)}>{*text}</div>
                                    }) }
                                </div>
                            </div>
                            <div class="benefit-footnote">
                                {"The owner does not need to learn software. We set it up and hand over a simple playbook."}
                            </div>
                        </BenefitBlock>
                    </div>
                </div>
            </div>
        </section>
    }
}
