use chrono::{NaiveDate, NaiveTime};

/// One work shift as entered during a session. Lives only long enough to be
/// rendered into a VEVENT block; never re-parsed afterwards.
#[derive(Debug, Clone)]
pub struct WorkShift {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// Break within the shift; not checked against the work range.
    pub pause: Option<(NaiveTime, NaiveTime)>,
}

impl WorkShift {
    pub fn new(
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        pause: Option<(NaiveTime, NaiveTime)>,
    ) -> Self {
        Self {
            date,
            start,
            end,
            pause,
        }
    }

    /// SUMMARY field, with the local work times as entered.
    pub fn summary(&self) -> String {
        format!(
            "Arbeit {}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }

    /// DESCRIPTION field: empty without a break, otherwise the local break
    /// times as entered.
    pub fn description(&self) -> String {
        match self.pause {
            Some((ps, pe)) => format!("Pause: {}-{}", ps.format("%H:%M"), pe.format("%H:%M")),
            None => String::new(),
        }
    }

    /// Deterministic UID so importing software can spot an identical shift
    /// entered twice. Near-duplicates get distinct UIDs.
    pub fn uid(&self) -> String {
        format!(
            "{}-{}-{}@local",
            self.date.format("%Y%m%d"),
            self.start.format("%H%M"),
            self.end.format("%H%M")
        )
    }
}
