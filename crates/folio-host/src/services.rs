//! Host service traits and the desktop implementation.

use folio_types::error::Result;

// ---------------------------------------------------------------------------
// Clock service
// ---------------------------------------------------------------------------

/// A simple wall-clock timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

/// Abstraction over wall-clock time.
///
/// The `date` command and log-entry timestamps both go through this, so
/// tests can pin time to a fixed value.
pub trait Clock {
    /// Current wall-clock time.
    fn now(&self) -> Result<Timestamp>;
}

/// Default clock backed by `std::time::SystemTime`.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<Timestamp> {
        use std::time::SystemTime as StdTime;
        let dur = StdTime::now()
            .duration_since(StdTime::UNIX_EPOCH)
            .unwrap_or_default();
        let secs = dur.as_secs();

        // Simple UTC breakdown (no TZ handling -- fine for a simulated shell).
        let days = secs / 86400;
        let time_of_day = secs % 86400;
        let hour = (time_of_day / 3600) as u8;
        let minute = ((time_of_day % 3600) / 60) as u8;
        let second = (time_of_day % 60) as u8;

        let (year, month, day) = days_to_ymd(days);

        Ok(Timestamp {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }
}

// ---------------------------------------------------------------------------
// Side-effect capabilities
// ---------------------------------------------------------------------------

/// External actions a command can trigger in the hosting environment.
///
/// Fire-and-forget from the terminal's point of view: the executor never
/// surfaces a failure here as a log entry.
pub trait HostActions {
    /// Open an external URL (a new browser tab, conceptually).
    fn open_url(&mut self, url: &str) -> Result<()>;

    /// Start a file download.
    fn download(&mut self, filename: &str) -> Result<()>;
}

/// Desktop host: there is no browser tab to open, so actions are logged.
pub struct DesktopHost;

impl HostActions for DesktopHost {
    fn open_url(&mut self, url: &str) -> Result<()> {
        log::info!("open external link: {url}");
        Ok(())
    }

    fn download(&mut self, filename: &str) -> Result<()> {
        log::info!("download requested: {filename}");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Date helper
// ---------------------------------------------------------------------------

/// Convert days since Unix epoch to (year, month, day).
pub(crate) fn days_to_ymd(mut days: u64) -> (u16, u8, u8) {
    let mut year = 1970u16;
    loop {
        let year_days = if is_leap(year) { 366 } else { 365 };
        if days < year_days {
            break;
        }
        days -= year_days;
        year += 1;
    }
    let leap = is_leap(year);
    let month_days: [u64; 12] = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut month = 0u8;
    for (i, &md) in month_days.iter().enumerate() {
        if days < md {
            month = (i + 1) as u8;
            break;
        }
        days -= md;
    }
    if month == 0 {
        month = 12;
    }
    (year, month, (days + 1) as u8)
}

pub(crate) fn is_leap(y: u16) -> bool {
    (y.is_multiple_of(4) && !y.is_multiple_of(100)) || y.is_multiple_of(400)
}

// ---------------------------------------------------------------------------
// In-module tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock clock pinned to a fixed time.
    struct FixedClock(Timestamp);

    impl Clock for FixedClock {
        fn now(&self) -> Result<Timestamp> {
            Ok(self.0)
        }
    }

    /// Mock host recording every invocation.
    struct RecordingHost {
        urls: Vec<String>,
        downloads: Vec<String>,
    }

    impl HostActions for RecordingHost {
        fn open_url(&mut self, url: &str) -> Result<()> {
            self.urls.push(url.to_string());
            Ok(())
        }

        fn download(&mut self, filename: &str) -> Result<()> {
            self.downloads.push(filename.to_string());
            Ok(())
        }
    }

    #[test]
    fn timestamp_display_zero_padding() {
        let t = Timestamp {
            year: 2026,
            month: 1,
            day: 5,
            hour: 9,
            minute: 3,
            second: 7,
        };
        assert_eq!(t.to_string(), "2026-01-05 09:03:07");
    }

    #[test]
    fn timestamp_default_is_epoch_zeroes() {
        let t = Timestamp::default();
        assert_eq!(t.year, 0);
        assert_eq!(t.to_string(), "0000-00-00 00:00:00");
    }

    #[test]
    fn fixed_clock_returns_pinned_time() {
        let clock = FixedClock(Timestamp {
            year: 2026,
            month: 2,
            day: 13,
            hour: 14,
            minute: 30,
            second: 45,
        });
        let t = clock.now().unwrap();
        assert_eq!(t.year, 2026);
        assert_eq!(t.second, 45);
    }

    #[test]
    fn system_clock_plausible_date() {
        let t = SystemClock.now().unwrap();
        assert!(t.year >= 2024);
        assert!((1..=12).contains(&t.month));
        assert!((1..=31).contains(&t.day));
    }

    #[test]
    fn recording_host_captures_invocations() {
        let mut host = RecordingHost {
            urls: Vec::new(),
            downloads: Vec::new(),
        };
        host.open_url("https://github.com").unwrap();
        host.download("resume.pdf").unwrap();
        assert_eq!(host.urls, vec!["https://github.com"]);
        assert_eq!(host.downloads, vec!["resume.pdf"]);
    }

    #[test]
    fn desktop_host_actions_succeed() {
        let mut host = DesktopHost;
        assert!(host.open_url("https://linkedin.com").is_ok());
        assert!(host.download("resume.pdf").is_ok());
    }

    // ---- Date helper tests ----

    #[test]
    fn days_to_ymd_zero() {
        assert_eq!(days_to_ymd(0), (1970, 1, 1));
    }

    #[test]
    fn days_to_ymd_first_of_february() {
        assert_eq!(days_to_ymd(31), (1970, 2, 1));
    }

    #[test]
    fn days_to_ymd_leap_year_feb_29() {
        // 2024-02-29 is day 19782.
        assert_eq!(days_to_ymd(19782), (2024, 2, 29));
    }

    #[test]
    fn days_to_ymd_december_31() {
        // 1970-12-31 is day 364.
        assert_eq!(days_to_ymd(364), (1970, 12, 31));
    }

    #[test]
    fn is_leap_rules() {
        assert!(is_leap(2024));
        assert!(!is_leap(2023));
        assert!(!is_leap(1900));
        assert!(is_leap(2000));
    }
}
