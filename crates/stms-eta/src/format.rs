//! Human-readable strings for dashboards and API payloads.

/// `"<minutes> min"`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{minutes} min")
}

/// Whole metres below 1 km (`"850 m"`), otherwise kilometres to one decimal
/// (`"5.2 km"`).  The cut-off is applied after rounding to whole metres.
pub fn format_distance_km(distance_km: f64) -> String {
    let metres = (distance_km * 1_000.0).round();
    if metres < 1_000.0 {
        format!("{metres:.0} m")
    } else {
        format!("{distance_km:.1} km")
    }
}

/// Seconds below a minute, whole minutes (rounded up) below an hour, then
/// `"<h> h <mm> min"`.
pub fn format_duration_secs(secs: u64) -> String {
    if secs < 60 {
        return format!("{secs} s");
    }
    let minutes = secs.div_ceil(60);
    if minutes < 60 {
        format!("{minutes} min")
    } else {
        format!("{} h {:02} min", minutes / 60, minutes % 60)
    }
}
