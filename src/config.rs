use log::Level;

pub const THEME_STORAGE_KEY: &str = "thelbe-theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Viewport width (logical px) at and above which the layout is desktop
/// and the mobile overlay must be closed.
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

pub const CONTACT_PHONE: &str = "+1 (587) 718-5627";
pub const CONTACT_EMAIL: &str = "info@elnarm.ca";
pub const CTA_LABEL: &str = "Book a Revenue Booster Call";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
