use log::Level;

/// How long the simulated reset service pretends the request takes.
pub const SIMULATED_RESET_DELAY_MS: u32 = 1_500;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetServiceKind {
    Simulated,
    Http,
}

/// Picked at build time with `RESET_SERVICE=http`. Anything else keeps the simulated service.
pub fn reset_service_kind() -> ResetServiceKind {
    parse_reset_service_kind(option_env!("RESET_SERVICE"))
}

fn parse_reset_service_kind(raw: Option<&str>) -> ResetServiceKind {
    match raw.map(|s| s.trim().to_ascii_lowercase()) {
        Some(kind) if kind == "http" => ResetServiceKind::Http,
        _ => ResetServiceKind::Simulated,
    }
}

pub fn log_level() -> Level {
    parse_log_level(option_env!("LOG_LEVEL"), default_log_level())
}

#[cfg(debug_assertions)]
fn default_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
fn default_log_level() -> Level {
    Level::Info
}

fn parse_log_level(raw: Option<&str>, fallback: Level) -> Level {
    raw.and_then(|s| s.trim().parse::<Level>().ok())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_service_defaults_to_simulated() {
        assert_eq!(parse_reset_service_kind(None), ResetServiceKind::Simulated);
        assert_eq!(parse_reset_service_kind(Some("")), ResetServiceKind::Simulated);
        assert_eq!(parse_reset_service_kind(Some("mock")), ResetServiceKind::Simulated);
    }

    #[test]
    fn reset_service_http_is_case_insensitive() {
        assert_eq!(parse_reset_service_kind(Some("http")), ResetServiceKind::Http);
        assert_eq!(parse_reset_service_kind(Some(" HTTP ")), ResetServiceKind::Http);
    }

    #[test]
    fn log_level_parses_known_names() {
        assert_eq!(parse_log_level(Some("warn"), Level::Info), Level::Warn);
        assert_eq!(parse_log_level(Some("TRACE"), Level::Info), Level::Trace);
    }

    #[test]
    fn log_level_falls_back_on_garbage() {
        assert_eq!(parse_log_level(Some("loud"), Level::Info), Level::Info);
        assert_eq!(parse_log_level(None, Level::Debug), Level::Debug);
    }
}
