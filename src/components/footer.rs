use chrono::Datelike;
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <div class="footer-left">
                    <div class="footer-brand">{"The LBE"}</div>
                    <div class="footer-text">
                        {"LBE Inc. · Local Business Enablement · Calgary, Alberta"}
                    </div>
                </div>
                <div class="footer-right">
                    <a href="#hero">{"Back to top"}</a>
                    <a href="#contact">{"Contact"}</a>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {} LBE Inc. All rights reserved.", year)}
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn shows_current_year_and_contact() {
        let html = yew::ServerRenderer::<Footer>::new()
            .hydratable(false)
            .render()
            .await;
        let year = chrono::Local::now().year();

        assert!(html.contains(&format!("© {} LBE Inc.", year)));
        assert!(html.contains("mailto:info@elnarm.ca"));
        assert!(html.contains(r##"href="#hero""##));
    }
}
