use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::browser;
use crate::config;
use crate::theme::Theme;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#benefits", "Benefits"),
    ("#numbers", "Numbers"),
    ("#system", "System"),
    ("#process", "Process"),
    ("#owners", "Owners"),
];

/// Mobile navigation overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    Open,
    #[default]
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavEvent {
    Toggle,
    Close,
    /// Viewport width in logical px after a window resize.
    Resized(f64),
}

impl NavState {
    pub fn next(self, event: NavEvent) -> NavState {
        match event {
            NavEvent::Toggle => match self {
                NavState::Open => NavState::Closed,
                NavState::Closed => NavState::Open,
            },
            NavEvent::Close => NavState::Closed,
            NavEvent::Resized(width) if width >= config::DESKTOP_BREAKPOINT_PX => NavState::Closed,
            NavEvent::Resized(_) => self,
        }
    }

    pub fn is_open(self) -> bool {
        self == NavState::Open
    }
}

impl Reducible for NavState {
    type Action = NavEvent;

    fn reduce(self: Rc<Self>, action: NavEvent) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            self // unchanged, no re-render
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { theme, on_toggle_theme } = props;
    let nav = use_reducer(NavState::default);

    // Close the overlay whenever the viewport reaches desktop width.
    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let on_resize = Closure::<dyn Fn()>::new(move || {
                        if let Some(width) = browser::viewport_width() {
                            dispatcher.dispatch(NavEvent::Resized(width));
                        }
                    });
                    match window
                        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                    {
                        Ok(()) => Box::new(move || {
                            let _ = window.remove_event_listener_with_callback(
                                "resize",
                                on_resize.as_ref().unchecked_ref(),
                            );
                        }),
                        Err(_) => Box::new(|| ()),
                    }
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    let toggle_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| {
            debug!("mobile menu toggled");
            dispatcher.dispatch(NavEvent::Toggle);
        })
    };

    // No prevent_default: the anchor still has to scroll to its section.
    let close_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavEvent::Close))
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let open = nav.is_open();

    html! {
        <header class="site-header">
            <div class="container header-inner">
                <a href="#hero" class="brand" onclick={close_menu.clone()}>
                    <img
                        src={format!("/logo-{}-short.jpg", theme)}
                        alt="The LBE"
                        class="brand-logo brand-logo-short"
                    />
                    <img
                        src={format!("/logo-{}-long.jpg", theme)}
                        alt="The LBE"
                        class="brand-logo brand-logo-long"
                    />
                </a>

                <nav class="nav-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} onclick={close_menu.clone()}>{*label}</a>
                    }) }
                </nav>

                <div class="header-actions">
                    <button
                        type="button"
                        class="mobile-menu-toggle"
                        onclick={toggle_menu}
                        aria-label="Toggle menu"
                        aria-expanded={if open { "true" } else { "false" }}
                    >
                        <span class="mobile-menu-icon">
                            <svg viewBox="0 0 24 24" aria-hidden="true" class="menu-svg">
                                <path
                                    d="M4 7h16M4 12h16M4 17h16"
                                    stroke-width="1.6"
                                    stroke-linecap="round"
                                    fill="none"
                                />
                            </svg>
                        </span>
                    </button>

                    <button
                        type="button"
                        class="theme-toggle"
                        onclick={toggle_theme}
                        aria-label="Toggle dark / light mode"
                    >
                        <ThemeIcon theme={*theme} />
                    </button>

                    <a href="#contact" class="btn-primary header-cta">{config::CTA_LABEL}</a>
                </div>
            </div>

            <MobileNav open={open} on_close={close_menu} />
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileNavProps {
    pub open: bool,
    /// Fired by every overlay link, including the CTA.
    pub on_close: Callback<MouseEvent>,
}

/// Overlay panel shown below the header on narrow viewports. Renders
/// nothing while closed.
#[function_component(MobileNav)]
pub fn mobile_nav(props: &MobileNavProps) -> Html {
    let MobileNavProps { open, on_close } = props;

    if !*open {
        return html! {};
    }

    html! {
        <div class="mobile-nav-wrap">
            <div class="container mobile-nav-panel">
                { for NAV_LINKS.iter().map(|(href, label)| html! {
                    <a href={*href} onclick={on_close.clone()}>{*label}</a>
                }) }
                <a href="#contact" onclick={on_close.clone()} class="btn-primary mobile-nav-cta">
                    {config::CTA_LABEL}
                </a>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ThemeIconProps {
    theme: Theme,
}

/// Moon while light (the toggle leads to dark), sun while dark.
#[function_component(ThemeIcon)]
fn theme_icon(props: &ThemeIconProps) -> Html {
    match props.theme {
        Theme::Light => html! {
            <span class="theme-icon theme-icon-moon">
                <svg viewBox="0 0 24 24" aria-hidden="true" class="theme-svg">
                    <path d="M21 12.79A9 9 0 0 1 11.21 3 7 7 0 1 0 21 12.79z" />
                </svg>
            </span>
        },
        Theme::Dark => html! {
            <span class="theme-icon theme-icon-sun">
                <svg viewBox="0 0 24 24" aria-hidden="true" class="theme-svg">
                    <circle cx="12" cy="12" r="4" />
                    <path
                        d="M12 2v2M12 20v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M2 12h2M20 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42"
                        stroke-width="1.5"
                        stroke-linecap="round"
                        fill="none"
                    />
                </svg>
            </span>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_closed() {
        assert_eq!(NavState::default(), NavState::Closed);
    }

    #[test]
    fn toggle_flips_both_ways() {
        let open = NavState::Closed.next(NavEvent::Toggle);
        assert_eq!(open, NavState::Open);
        assert_eq!(open.next(NavEvent::Toggle), NavState::Closed);
    }

    #[test]
    fn resize_closes_only_at_breakpoint() {
        assert_eq!(NavState::Open.next(NavEvent::Resized(767.0)), NavState::Open);
        assert_eq!(NavState::Open.next(NavEvent::Resized(767.9)), NavState::Open);
        assert_eq!(NavState::Open.next(NavEvent::Resized(768.0)), NavState::Closed);
        assert_eq!(NavState::Open.next(NavEvent::Resized(1440.0)), NavState::Closed);
        assert_eq!(NavState::Closed.next(NavEvent::Resized(320.0)), NavState::Closed);
    }

    #[test]
    fn close_is_idempotent() {
        assert_eq!(NavState::Open.next(NavEvent::Close), NavState::Closed);
        assert_eq!(NavState::Closed.next(NavEvent::Close), NavState::Closed);
    }

    #[test]
    fn reducer_keeps_same_state_on_noop() {
        let closed = Rc::new(NavState::Closed);
        let after = Rc::clone(&closed).reduce(NavEvent::Close);
        assert!(Rc::ptr_eq(&closed, &after));

        let open = Rc::clone(&closed).reduce(NavEvent::Toggle);
        assert_eq!(*open, NavState::Open);
        assert!(!Rc::ptr_eq(&closed, &open));
    }

    async fn render(theme: Theme) -> String {
        yew::ServerRenderer::<Header>::with_props(move || HeaderProps {
            theme,
            on_toggle_theme: Callback::from(|_| ()),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn renders_closed_with_light_assets() {
        let html = render(Theme::Light).await;

        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains("mobile-nav-panel"));
        assert!(html.contains("/logo-light-short.jpg"));
        assert!(html.contains("/logo-light-long.jpg"));
        assert!(html.contains("theme-icon-moon"));
        for (href, label) in NAV_LINKS {
            assert!(html.contains(&format!(r##"href="{}""##, href)), "{href}");
            assert!(html.contains(label));
        }
    }

    async fn render_mobile_nav(open: bool) -> String {
        yew::ServerRenderer::<MobileNav>::with_props(move || MobileNavProps {
            open,
            on_close: Callback::from(|_| ()),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn open_overlay_lists_every_link_and_the_cta() {
        let html = render_mobile_nav(true).await;

        assert!(html.contains("mobile-nav-panel"));
        for (href, label) in NAV_LINKS {
            assert!(html.contains(&format!(r##"href="{}""##, href)), "{href}");
            assert!(html.contains(label));
        }
        assert!(html.contains(r##"href="#contact""##));
        assert!(html.contains("mobile-nav-cta"));
        assert!(html.contains(config::CTA_LABEL));
        // Five nav links plus the CTA.
        assert_eq!(html.matches("<a ").count(), NAV_LINKS.len() + 1);
    }

    #[tokio::test]
    async fn closed_overlay_renders_nothing() {
        let html = render_mobile_nav(false).await;

        assert!(!html.contains("mobile-nav"));
        assert!(!html.contains("<a "));
    }

    #[tokio::test]
    async fn renders_dark_assets() {
        let html = render(Theme::Dark).await;

        assert!(html.contains("/logo-dark-long.jpg"));
        assert!(html.contains("theme-icon-sun"));
        assert!(!html.contains("theme-icon-moon"));
    }
}
