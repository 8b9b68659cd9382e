use yew::prelude::*;

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

impl Testimonial {
    fn initial(&self) -> String {
        self.name.chars().take(1).collect()
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah",
        role: "Café owner",
        quote: "We stopped guessing. Customers now get a thank-you and a reason to return, and we can feel the difference each week.",
    },
    Testimonial {
        name: "Michael",
        role: "Salon owner",
        quote: "The review requests are finally consistent. Our Google presence started climbing without us chasing people.",
    },
    Testimonial {
        name: "Ayesha",
        role: "Boutique owner",
        quote: "They worked with our POS and made the follow-up simple. I did not have to learn a new system to get results.",
    },
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="owners" class="section testimonials-section">
            <div class="container">
                <p class="eyebrow center">{"OWNERS LIKE YOU"}</p>
                <h2 class="section-title center">{"“We finally have repeat revenue on autopilot.”"}</h2>
                <p class="section-sub center">
                    {"Short, honest comments from the kind of Calgary businesses we're built for."}
                </p>
                <div class="testimonials-row">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <figure class="testimonial">
                            <div class="testimonial-avatar">{t.initial()}</div>
                            <blockquote>{format!("“{}”", t.quote)}</blockquote>
                            <figcaption>{format!("{} · {}", t.name, t.role)}</figcaption>
                        </figure>
                    }) }
                </div>
            </div>
        </section>
    }
}
