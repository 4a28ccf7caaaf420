//! Duration strings from configuration

use std::time::Duration;

/// Parse a duration string such as `"5s"` or `"250ms"`.
///
/// Missing, malformed or zero values yield `fallback`; malformed values are
/// logged at `warn`.
pub fn parse_duration_or(value: Option<&str>, fallback: Duration) -> Duration {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return fallback;
    };
    match humantime::parse_duration(raw) {
        Ok(parsed) if !parsed.is_zero() => parsed,
        Ok(_) => fallback,
        Err(e) => {
            tracing::warn!(value = raw, fallback = ?fallback, error = %e, "invalid duration, using fallback");
            fallback
        }
    }
}
