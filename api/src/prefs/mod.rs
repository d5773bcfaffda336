//! User-facing settings, read from the environment.

pub mod user_prefs;
