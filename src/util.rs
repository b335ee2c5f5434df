use regex::Regex;
use std::sync::OnceLock;

static INIT_ONCE: std::sync::Once = std::sync::Once::new();
pub fn init_tracing_once() {
    INIT_ONCE.call_once(|| {
        let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

fn profile_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:https?://(?:[a-z0-9-]+\.)*reddit\.com)?/?(?:(?:u|user)/)?([A-Za-z0-9_-]+)/?(?:[?#].*)?$")
            .expect("static regex")
    })
}

/// Accepts a bare username, `u/name`, `/user/name/` or a full profile URL and
/// returns the username. `None` when no username can be found.
pub fn normalize_username(input: &str) -> Option<String> {
    let s = input.trim();
    profile_re()
        .captures(s)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// First `max` characters of `s`, with `...` appended when anything was cut.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}
