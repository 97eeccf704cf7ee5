//! Compact elapsed-time rendering for timer output.

use std::time::Duration;

const UNITS: [(&str, u128); 6] = [
    ("y", 365 * 24 * 60 * 60 * 1000),
    ("d", 24 * 60 * 60 * 1000),
    ("h", 60 * 60 * 1000),
    ("m", 60 * 1000),
    ("s", 1000),
    ("ms", 1),
];

/// Renders the nonzero components largest first, e.g. `1h 2m 3s 4ms`.
/// Sub-millisecond durations render as `0ms`.
#[must_use]
pub fn human_duration(duration: Duration) -> String {
    let mut remaining = duration.as_millis();
    let mut parts = Vec::new();

    for (suffix, size) in UNITS {
        let count = remaining / size;
        remaining %= size;
        if count > 0 {
            parts.push(format!("{count}{suffix}"));
        }
    }

    if parts.is_empty() {
        return "0ms".to_string();
    }
    parts.join(" ")
}
