use log::Level;

pub const SITE_NAME: &str = "Ibn Rajab Academy";
pub const SITE_TAGLINE: &str = "Classical Knowledge. Modern Experience.";

pub const COMMUNITY_URL: &str = "https://skool.com/ibn-rajab-academy-5287";
pub const CONTACT_EMAIL: &str = "info@ibnrajabacademy.com";

pub const LOGO_SRC: &str = "/logo.jpeg";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose subscription logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
