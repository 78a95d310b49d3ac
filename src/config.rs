use log::Level;
use web_sys::UrlSearchParams;

use crate::error::window;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Meaning of a `motion` query value; anything unrecognised is ignored.
pub fn parse_motion_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "1" | "true" => Some(true),
        "off" | "0" | "false" => Some(false),
        _ => None,
    }
}

/// Forced animation setting from the page URL (`?motion=on|off`), if any.
pub fn motion_override() -> Option<bool> {
    let search = window().ok()?.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    parse_motion_flag(&params.get("motion")?)
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .ok()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_flag_accepts_both_spellings() {
        assert_eq!(parse_motion_flag("off"), Some(false));
        assert_eq!(parse_motion_flag("0"), Some(false));
        assert_eq!(parse_motion_flag("on"), Some(true));
        assert_eq!(parse_motion_flag("True"), Some(true));
    }

    #[test]
    fn unknown_flag_is_ignored() {
        assert_eq!(parse_motion_flag(""), None);
        assert_eq!(parse_motion_flag("sometimes"), None);
        assert_eq!(parse_motion_flag("of f"), None);
    }
}
