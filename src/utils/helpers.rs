/// Human-readable name for a weekday index (0=Sunday..6=Saturday)
///
/// Indices outside the range come back as "unknown"; validation of
/// user-supplied weekdays happens before any write, not here.
pub fn weekday_name(weekday: i32) -> &'static str {
    match weekday {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_cover_the_week() {
        assert_eq!(weekday_name(0), "Sunday");
        assert_eq!(weekday_name(6), "Saturday");
        assert_eq!(weekday_name(7), "unknown");
        assert_eq!(weekday_name(-1), "unknown");
    }
}
