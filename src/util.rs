/// Format a whole number of seconds as a zero-padded "MM:SS" readout.
///
/// Durations of an hour or more keep accumulating minutes; the timer deals
/// in focus/break phases that are minutes long, not hours.
pub fn format_mm_ss(secs: u32) -> String {
    let m = secs / 60;
    let s = secs % 60;
    format!("{:02}:{:02}", m, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_mm_ss(0), "00:00");
    }

    #[test]
    fn test_format_classic_pomodoro() {
        assert_eq!(format_mm_ss(25 * 60), "25:00");
        assert_eq!(format_mm_ss(5 * 60), "05:00");
    }

    #[test]
    fn test_format_seconds_padding() {
        assert_eq!(format_mm_ss(61), "01:01");
        assert_eq!(format_mm_ss(9), "00:09");
        assert_eq!(format_mm_ss(599), "09:59");
    }

    #[test]
    fn test_format_over_an_hour_keeps_minutes() {
        assert_eq!(format_mm_ss(60 * 60), "60:00");
        assert_eq!(format_mm_ss(90 * 60 + 5), "90:05");
    }
}
