use yew::prelude::*;
use log::{debug, info};

mod browser;
mod config;
mod styles;
mod theme;
mod components {
    pub mod footer;
    pub mod header;
}
mod pages {
    pub mod landing;
}
mod sections {
    pub mod benefits;
    pub mod calm;
    pub mod contact;
    pub mod hero;
    pub mod numbers;
    pub mod process;
    pub mod system_flow;
    pub mod testimonials;
}

use browser::{DocumentRoot, LocalStorage, MediaColorScheme};
use components::{footer::Footer, header::Header};
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    let theme = use_state(|| {
        let initial = theme::resolve_initial(&LocalStorage, &MediaColorScheme);
        info!("Resolved initial theme: {}", initial);
        initial
    });

    // Mirror every theme change onto <html data-theme> and localStorage.
    use_effect_with_deps(
        move |theme| {
            theme::apply(*theme, &DocumentRoot, &LocalStorage);
            debug!("Applied theme {}", theme);
            || ()
        },
        *theme,
    );

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| theme.set(theme.toggled()))
    };

    html! {
        <div class="app-shell">
            <style>{styles::SITE_CSS}</style>
            <Header theme={*theme} on_toggle_theme={toggle_theme} />
            <Landing />
            <Footer />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
