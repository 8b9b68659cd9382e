use yew::prelude::*;

struct Moment {
    when: &'static str,
    what: &'static str,
}

const BEFORE: &[Moment] = &[
    Moment { when: "Late evening", what: "Hoping last week's customers remember you." },
    Moment { when: "Next day", what: "No structured thank-you or return invite." },
    Moment { when: "Monthly", what: "Promotions feel random and inconsistent." },
];

const AFTER: &[Moment] = &[
    Moment { when: "Same day", what: "Thank-you flow runs automatically after purchase." },
    Moment { when: "30 to 90 days", what: "Win-back messages bring quiet customers back." },
    Moment { when: "Always-on", what: "Review and referral prompts build your presence." },
];

fn moments(items: &[Moment]) -> Html {
    items
        .iter()
        .map(|m| html! {
            <div class="calm-item">
                <span class="calm-time">{m.when}</span>
                <span class="calm-text-item">{m.what}</span>
            </div>
        })
        .collect()
}

#[function_component(Calm)]
pub fn calm() -> Html {
    html! {
        <section id="calm" class="section calm-section">
            <div class="container calm-inner">
                <div class="calm-text">
                    <p class="eyebrow">{"DAY-TO-DAY REALITY"}</p>
                    <h2 class="section-title">{"Stop relying on memory to sell."}</h2>
                    <p class="section-sub">
                        {"The Revenue Booster System turns follow-up into a calm rhythm your team can run without constant owner effort."}
                    </p>
                </div>
                <div class="calm-visual">
                    <div class="calm-before-after">
                        <div class="calm-column calm-before">
                            <div class="calm-label">{"Before"}</div>
                            { moments(BEFORE) }
                        </div>
                        <div class="calm-column calm-after">
                            <div class="calm-label">{"After"}</div>
                            { moments(AFTER) }
                            <div class="calm-saved">
                                <span class="calm-saved-pill">{"You get predictable follow-up."}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
