use web_sys::SubmitEvent;
use yew::prelude::*;

use crate::config;

/// Lead-capture field: `(id, label, input type, placeholder)`.
type Field = (&'static str, &'static str, &'static str, &'static str);

const NAME: Field = ("name", "Your name", "text", "Jane Doe");
const BUSINESS: Field = ("business", "Business name", "text", "Neighbourhood Café");
const EMAIL: Field = ("email", "Email", "email", "you@example.com");
const PHONE: Field = ("phone", "Phone number", "text", "(587) 718-5627");
const BUSINESS_TYPE: Field = ("business-type", "What kind of business?", "text", "Café, bakery, salon, shop...");

fn input((id, label, kind, placeholder): Field) -> Html {
    html! {
        <>
            <label for={id}>{label}</label>
            <input id={id} name={id} type={kind} placeholder={placeholder} />
        </>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    // Inert: swallow the browser submission and do nothing else.
    let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <section id="contact" class="section final-cta-section">
            <div class="container final-cta-inner">
                <div class="final-cta-text">
                    <p class="eyebrow">{"GET STARTED"}</p>
                    <h2 class="section-title">{"Book your Revenue Booster Call."}</h2>
                    <p class="section-sub">
                        {"We'll review your customer follow-up gaps and show exactly what we would set up in two weeks to increase repeat customers, reviews, and monthly revenue."}
                    </p>
                    <div class="pricing-mini">
                        <div class="pricing-pill">
                            <span class="pricing-label">{"Two-week setup"}</span>
                            <span class="pricing-value">{"CA$ 1,999"}</span>
                        </div>
                        <div class="pricing-pill pricing-pill-muted">
                            <span class="pricing-label">{"Optional monthly support"}</span>
                            <span class="pricing-value">{"CA$ 199"}</span>
                        </div>
                    </div>
                </div>
                <form class="final-cta-form" onsubmit={onsubmit} aria-label={config::CTA_LABEL}>
                    <div class="form-row">{ input(NAME) }</div>
                    <div class="form-row">{ input(BUSINESS) }</div>
                    <div class="form-row form-row-inline">
                        <div>{ input(EMAIL) }</div>
                        <div>{ input(PHONE) }</div>
                    </div>
                    <div class="form-row">{ input(BUSINESS_TYPE) }</div>
                    <div class="form-row">
                        <label for="headache">{"Biggest headache right now"}</label>
                        <textarea
                            id="headache"
                            name="headache"
                            rows="4"
                            placeholder="For example: customers do not return, not enough reviews, promotions feel random..."
                        />
                    </div>
                    <button type="submit" class="btn-primary btn-full">{"Book my Revenue Booster Call"}</button>
                    <div class="form-footnote">
                        <span>{format!("Prefer to call? {}", config::CONTACT_PHONE)}</span>
                        <span>{"Typical response: within 1 business day."}</span>
                    </div>
                </form>
            </div>
        </section>
    }
}
