//! Display text for synthesized durations and distances.

/// Render whole minutes the way the upstream service does, e.g. `"1 hour 5 mins"`.
pub(crate) fn duration_text(minutes: u64) -> String {
    let hours = minutes.div_euclid(60);
    let rest = minutes.rem_euclid(60);
    match (hours, rest) {
        (0, m) => minutes_text(m),
        (h, 0) => hours_text(h),
        (h, m) => format!("{} {}", hours_text(h), minutes_text(m)),
    }
}

fn minutes_text(minutes: u64) -> String {
    if minutes == 1 {
        "1 min".to_owned()
    } else {
        format!("{minutes} mins")
    }
}

fn hours_text(hours: u64) -> String {
    if hours == 1 {
        "1 hour".to_owned()
    } else {
        format!("{hours} hours")
    }
}

/// Render a distance as metres below one kilometre and tenths of a kilometre above.
pub(crate) fn distance_text(metres: u64) -> String {
    if metres < 1000 {
        return format!("{metres} m");
    }
    let tenths = metres.saturating_add(50).div_euclid(100);
    format!("{}.{} km", tenths.div_euclid(10), tenths.rem_euclid(10))
}
