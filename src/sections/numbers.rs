use yew::prelude::*;

const WEEKDAYS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

/// Segment, what it is ready for, and whether the chip is muted.
const SEGMENTS: &[(&str, &str, bool)] = &[
    ("VIP regulars", "ready", false),
    ("New customers", "welcome flow", false),
    ("Inactive 60 days", "win-back", true),
];

#[function_component(Numbers)]
pub fn numbers() -> Html {
    html! {
        <section id="numbers" class="section numbers-section">
            <div class="container numbers-inner">
                <div class="numbers-text">
                    <p class="eyebrow">{"CLEAR REVENUE SIGNALS"}</p>
                    <h2 class="section-title">{"Know what brings customers back."}</h2>
                    <p class="section-sub">
                        {"One simple daily view: repeat momentum, review growth, and the next best action for revenue."}
                    </p>
                    <ul class="numbers-list">
                        <li>{"Repeat customer trend without digging through reports."}</li>
                        <li>{"Which segments are ready for the next offer."}</li>
                        <li>{"Review requests that convert into visible social proof."}</li>
                    </ul>
                </div>
                <div class="numbers-visual">
                    <div class="numbers-dashboard">
                        <div class="dash-header">
                            <span>{"Today · Revenue Booster"}</span>
                            <span class="dash-date">{"Wed · 7:42 pm"}</span>
                        </div>
                        <div class="dash-main">
                            <div class="dash-today">
                                <span class="dash-label">{"Repeat-driven revenue today"}</span>
                                <span class="dash-value">{"CA$ 4,260"}</span>
                                <span class="dash-delta">{"Stronger than last Wednesday"}</span>
                            </div>
                            <div class="dash-chart">
                                <div class="dash-chart-bars">
                                    { for (1..=WEEKDAYS.len()).map(|n| html! {
                                        <div class={format!("dash-bar dash-bar-{}", n)} />
                                    }) }
                                </div>
                                <div class="dash-chart-labels">
                                    { for WEEKDAYS.iter().map(|day| html! { <span>{*day}</span> }) }
                                </div>
                            </div>
                        </div>
                        <div class="dash-bottom">
                            <div class="dash-products">
                                <div class="dash-products-title">{"Segments to activate"}</div>
                                { for SEGMENTS.iter().map(|(name, chip, muted)| html! {
                                    <div class="dash-product-row">
                                        <span>{*name}</span>
                                        <span class={classes!("dash-chip", muted.then(|| "dash-chip-muted"))}>{*chip}</span>
                                    </div>
                                }) }
                            </div>
                            <div class="dash-next">
                                <div class="dash-next-label">{"Suggested focus"}</div>
                                <div class="dash-next-main">
                                    {"Send a gentle win-back offer to the 60-day group."}
                                </div>
                                <div class="dash-next-sub">{"Based on recent visit patterns."}</div>
                            </div>
                        </div>
                    </div>
                    <div class="numbers-stat-row">
                        <div class="numbers-stat">
                            <span class="numbers-stat-value">{"2 to 4 hrs/week"}</span>
                            <span class="numbers-stat-label">{"Owner marketing time saved"}</span>
                        </div>
                        <div class="numbers-stat">
                            <span class="numbers-stat-value">{"More predictable months"}</span>
                            <span class="numbers-stat-label">{"Less dependency on walk-ins"}</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
