// Window navigation - turns request flags into the next time range
use crate::domain::time_range::TimeRange;
use chrono::Duration;

/// Navigation flags carried by a browse request. `next`/`prev` jump a full
/// window; the hour/day flags shift both bounds by a fixed offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavCommands {
    pub next: bool,
    pub prev: bool,
    pub next_hour: bool,
    pub prev_hour: bool,
    pub next_day: bool,
    pub prev_day: bool,
}

impl NavCommands {
    /// Compute the new window. `next` wins over `prev` when both are set;
    /// the shift flags then apply independently, each adding its offset.
    /// Pure arithmetic, never fails.
    pub fn apply(&self, range: TimeRange) -> TimeRange {
        let mut tr = if self.next {
            range.next()
        } else if self.prev {
            range.previous()
        } else {
            range
        };

        if self.next_hour {
            tr = tr.shift(Duration::hours(1));
        }
        if self.next_day {
            tr = tr.shift(Duration::days(1));
        }
        if self.prev_hour {
            tr = tr.shift(-Duration::hours(1));
        }
        if self.prev_day {
            tr = tr.shift(-Duration::days(1));
        }

        tr
    }
}
