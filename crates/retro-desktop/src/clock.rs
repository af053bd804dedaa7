//! Taskbar clock and post date formatting

/// Clock refresh period
pub const CLOCK_REFRESH_MS: i32 = 60_000;

/// Local wall-clock time broken into fields.
///
/// `month` is 1-based, `hour` is 0..=23.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timestamp {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl Timestamp {
    /// Taskbar label, `h:mm AM|PM`
    pub fn clock_label(&self) -> String {
        format_clock(self.hour, self.minute)
    }

    /// Editor date label, `YYYY-MM-DD`
    pub fn date_label(&self) -> String {
        format!("{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Format a 24-hour time as `h:mm AM|PM`; hour 0 renders as 12
pub fn format_clock(hour: u32, minute: u32) -> String {
    let suffix = if hour % 24 >= 12 { "PM" } else { "AM" };
    let h = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", h, minute, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(format_clock(0, 0), "12:00 AM");
        assert_eq!(format_clock(12, 0), "12:00 PM");
    }

    #[test]
    fn test_afternoon_padding() {
        assert_eq!(format_clock(13, 5), "1:05 PM");
        assert_eq!(format_clock(23, 59), "11:59 PM");
        assert_eq!(format_clock(9, 30), "9:30 AM");
    }

    #[test]
    fn test_date_label() {
        let at = Timestamp {
            year: 2026,
            month: 1,
            day: 9,
            hour: 0,
            minute: 0,
        };
        assert_eq!(at.date_label(), "2026-01-09");
        assert_eq!(at.clock_label(), "12:00 AM");
    }
}
