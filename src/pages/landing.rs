use yew::prelude::*;

use crate::sections::{
    benefits::Benefits, calm::Calm, contact::Contact, hero::Hero, numbers::Numbers,
    process::Process, system_flow::SystemFlow, testimonials::Testimonials,
};

/// Anchor ids of the page sections, top to bottom.
pub const SECTION_IDS: [&str; 8] = [
    "hero", "benefits", "numbers", "calm", "system", "process", "owners", "contact",
];

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main class="app-main">
            <Hero />
            <Benefits />
            <Numbers />
            <Calm />
            <SystemFlow />
            <Process />
            <Testimonials />
            <Contact />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::header::NAV_LINKS;
    use crate::sections::testimonials::TESTIMONIALS;
    use pretty_assertions::assert_eq;

    async fn render() -> String {
        yew::ServerRenderer::<Landing>::new()
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn sections_render_in_order() {
        let html = render().await;

        let positions: Vec<usize> = SECTION_IDS
            .iter()
            .map(|id| {
                html.find(&format!(r#"id="{}""#, id))
                    .unwrap_or_else(|| panic!("missing section {id}"))
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[tokio::test]
    async fn every_nav_link_has_a_target() {
        let html = render().await;
        for (href, _) in NAV_LINKS {
            let id = href.trim_start_matches('#');
            assert!(SECTION_IDS.contains(&id), "{href}");
            assert!(html.contains(&format!(r#"id="{}""#, id)));
        }
    }

    #[tokio::test]
    async fn lead_form_has_every_field() {
        let html = render().await;
        for field in ["name", "business", "email", "phone", "business-type", "headache"] {
            assert!(html.contains(&format!(r#"name="{}""#, field)), "{field}");
        }
        assert!(html.contains(r#"type="submit""#));
    }

    #[tokio::test]
    async fn testimonials_show_initials() {
        let html = render().await;
        for t in TESTIMONIALS {
            assert!(html.contains(t.role));
        }
        assert!(html.contains(r#"<div class="testimonial-avatar">S</div>"#));
    }

    #[tokio::test]
    async fn process_steps_are_numbered() {
        let html = render().await;
        for n in 1..=3 {
            assert!(html.contains(&format!(r#"<div class="process-circle">{}</div>"#, n)));
        }
    }
}
