use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render a backend timestamp as `YYYY-MM-DD HH:MM`.
///
/// Values that match no known layout are shown unchanged.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }
    for layout in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, layout) {
            return parsed.format(DISPLAY_FORMAT).to_string();
        }
    }
    raw.to_owned()
}

#[must_use]
pub fn format_optional(raw: Option<&str>) -> String {
    raw.map_or_else(|| "-".to_owned(), format_timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_layouts_are_normalized() {
        assert_eq!(format_timestamp("2024-03-01T09:15:00Z"), "2024-03-01 09:15");
        assert_eq!(format_timestamp("2024-03-01 09:15:42"), "2024-03-01 09:15");
        assert_eq!(format_timestamp("11:00"), "11:00");
        assert_eq!(format_optional(None), "-");
    }
}
