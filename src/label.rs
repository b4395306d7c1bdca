use crate::{CalendarConfig, CalendarDay, DateRange, LabelStyle};

/// Text for the "When?" field.
///
/// Empty until a start is picked, then `"12 of Mar."` while the end is
/// pending, then `"12 to 15 of Mar."`. The month is always the start's.
pub fn derive_label(range: &DateRange, style: &LabelStyle) -> String {
    match (range.start(), range.end()) {
        (None, _) => String::new(),
        (Some(start), None) => format!("{} of {}.", start.day(), style.month.render(start.month())),
        (Some(start), Some(end)) => format!(
            "{} to {} of {}.",
            start.day(),
            end.day(),
            style.month.render(start.month())
        ),
    }
}

/// Header line of the trip screen, e.g. `"Florianópolis - from 12 to 15 Mar."`.
///
/// The destination is cut to `limits.destination_display_len` characters.
pub fn trip_summary(destination: &str, starts_at: CalendarDay, ends_at: CalendarDay, cfg: &CalendarConfig) -> String {
    let max = cfg.limits.destination_display_len;
    let shown: String = destination.chars().take(max).collect();
    format!(
        "{shown} - from {} to {} {}.",
        starts_at.day(),
        ends_at.day(),
        cfg.label.month.render(starts_at.month())
    )
}
