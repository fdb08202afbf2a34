//! Application constants

/// `localStorage` key holding the session token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Pause between a successful registration and the redirect to the login screen
pub const REGISTER_REDIRECT_DELAY_MS: u32 = 2000;

pub const CURRENCY_LABEL: &str = "Rp";
