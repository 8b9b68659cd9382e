use yew::prelude::*;

const TOOLS: &[&str] = &["POS", "Online orders", "Email", "SMS", "Google Business"];

struct SegmentRow {
    group: &'static str,
    size: u32,
    last_seen: &'static str,
    goal: &'static str,
}

const SEGMENT_ROWS: &[SegmentRow] = &[
    SegmentRow { group: "VIP regulars", size: 48, last_seen: "This week", goal: "Loyalty" },
    SegmentRow { group: "New customers", size: 120, last_seen: "Recent", goal: "Second visit" },
    SegmentRow { group: "Inactive", size: 86, last_seen: "60 days", goal: "Win-back" },
];

const CAMPAIGN_TRIGGERS: &[(&str, &str)] = &[
    ("After purchase", "Thank-you message with a soft return invite"),
    ("30 to 90 days idle", "We miss you offer tailored to your shop"),
    ("Birthdays", "A simple celebration promo that feels personal"),
];

struct Routine {
    cadence: &'static str,
    tasks: &'static [&'static str],
    done: bool,
}

const ROUTINES: &[Routine] = &[
    Routine { cadence: "Weekly", tasks: &["Review segments", "Approve next promo"], done: true },
    Routine { cadence: "Monthly", tasks: &["Light campaign refresh", "Insights recap"], done: false },
];

#[function_component(SystemFlow)]
pub fn system_flow() -> Html {
    html! {
        <section id="system" class="section system-section">
            <div class="container">
                <p class="eyebrow center">{"HOW IT ALL CONNECTS"}</p>
                <h2 class="section-title center">
                    {"We do not add another app. We connect what you already use."}
                </h2>
                <p class="section-sub center system-sub">
                    {"POS → Customer list → Smart segments → Automated follow-ups → Reviews and referrals → Repeat revenue."}
                </p>
                <div class="system-flow">
                    <div class="system-node system-node-tools">
                        <div class="system-node-title">{"Tools"}</div>
                        <div class="system-node-row">
                            { for TOOLS.iter().map(|tool| html! { <span class="system-pill">{*tool}</span> }) }
                        </div>
                    </div>
                    <div class="system-arrow">{"clean customer data"}</div>
                    <div class="system-node system-node-data">
                        <div class="system-node-title">{"Segments"}</div>
                        <div class="system-table">
                            <div class="system-table-header">
                                <span>{"Group"}</span>
                                <span>{"Size"}</span>
                                <span>{"Last seen"}</span>
                                <span>{"Goal"}</span>
                            </div>
                            { for SEGMENT_ROWS.iter().map(|row| html! {
                                <div class="system-table-row">
                                    <span>{row.group}</span>
                                    <span>{row.size}</span>
                                    <span>{row.last_seen}</span>
                                    <span>{row.goal}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="system-arrow">{"automated follow-up"}</div>
                    <div class="system-node system-node-auto">
                        <div class="system-node-title">{"Campaigns"}</div>
                        <div class="system-timeline">
                            { for CAMPAIGN_TRIGGERS.iter().map(|(trigger, message)| html! {
                                <div class="system-timeline-item">
                                    <span class="system-dot" />
                                    <div class="system-timeline-text">
                                        <div>{*trigger}</div>
                                        <div class="system-timeline-sub">{*message}</div>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="system-arrow">{"calm rhythm"}</div>
                    <div class="system-node system-node-routines">
                        <div class="system-node-title">{"Owner rhythm"}</div>
                        <div class="system-routines">
                            { for ROUTINES.iter().map(|routine| html! {
                                <div class="routine-group">
                                    <div class="routine-label">{routine.cadence}</div>
                                    { for routine.tasks.iter().map(|task| html! {
                                        <div class={classes!("routine-pill", routine.done.then(|| "routine-pill-done"))}>
                                            {*task}
                                        </div>
                                    }) }
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
