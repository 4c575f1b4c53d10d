use chrono::{DateTime, Utc};

/// Time left until a fixed target instant, split the way the invite displays
/// it. Once the target has passed this just freezes at all-zeros rather than
/// counting into the negatives.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Remaining {
	pub days: i64,
	pub hours: u8,
	pub minutes: u8,
	pub seconds: u8,
}

impl Remaining {
	#[must_use]
	pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
		// Always recompute from the two instants instead of decrementing a stored
		// counter, so a late or coalesced tick can't accumulate drift
		let secs = (target - now).num_seconds().max(0);

		Self {
			days: secs / 86_400,
			hours: ((secs / 3_600) % 24) as u8,
			minutes: ((secs / 60) % 60) as u8,
			seconds: (secs % 60) as u8,
		}
	}

	/// There's no separate "expired" state; anyone who cares has to ask
	#[must_use]
	pub fn is_elapsed(&self) -> bool {
		self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
	}

	#[must_use]
	pub fn hours_display(&self) -> String {
		format!("{:02}", self.hours)
	}

	#[must_use]
	pub fn minutes_display(&self) -> String {
		format!("{:02}", self.minutes)
	}

	#[must_use]
	pub fn seconds_display(&self) -> String {
		format!("{:02}", self.seconds)
	}
}

#[cfg(test)]
fn utc(s: &str) -> DateTime<Utc> {
	DateTime::parse_from_rfc3339(s).unwrap().to_utc()
}

#[cfg(test)]
#[test]
fn decomposes_just_under_a_day_exactly() {
	// 23h 59m 30s out: not a full day yet, so the days slot stays 0 and the
	// clock fields carry all of it
	let remaining = Remaining::until(utc("2026-02-14T09:00:00Z"), utc("2026-02-13T09:00:30Z"));

	assert_eq!(remaining.days, 0);
	assert_eq!(remaining.hours_display(), "23");
	assert_eq!(remaining.minutes_display(), "59");
	assert_eq!(remaining.seconds_display(), "30");
	assert!(!remaining.is_elapsed());
}

#[cfg(test)]
#[test]
fn days_only_roll_over_at_a_full_day() {
	let target = utc("2026-02-14T09:00:00Z");

	// either side of the 24h mark
	let remaining = Remaining::until(target, utc("2026-02-13T09:00:00Z"));
	assert_eq!(
		(remaining.days, remaining.hours, remaining.minutes, remaining.seconds),
		(1, 0, 0, 0)
	);

	let remaining = Remaining::until(target, utc("2026-02-13T08:59:59Z"));
	assert_eq!(
		(remaining.days, remaining.hours, remaining.minutes, remaining.seconds),
		(1, 0, 0, 1)
	);
}

#[cfg(test)]
#[test]
fn clock_fields_stay_in_range() {
	let target = utc("2026-02-14T09:00:00Z");

	// one second shy of a full day should max out every clock field
	let remaining = Remaining::until(target, utc("2026-02-13T09:00:01Z"));
	assert_eq!(
		(remaining.days, remaining.hours, remaining.minutes, remaining.seconds),
		(0, 23, 59, 59)
	);

	// and a whole number of days should zero them all
	let remaining = Remaining::until(target, utc("2026-02-04T09:00:00Z"));
	assert_eq!(
		(remaining.days, remaining.hours, remaining.minutes, remaining.seconds),
		(10, 0, 0, 0)
	);
}

#[cfg(test)]
#[test]
fn clamps_to_zero_once_past() {
	let target = utc("2026-02-14T09:00:00Z");
	let zero = Remaining { days: 0, hours: 0, minutes: 0, seconds: 0 };

	// exactly at the target counts as elapsed, same as well after it
	for now in ["2026-02-14T09:00:00Z", "2026-02-14T09:00:01Z", "2027-01-01T00:00:00Z"] {
		let remaining = Remaining::until(target, utc(now));
		assert_eq!(remaining, zero);
		assert!(remaining.is_elapsed());
		assert_eq!(remaining.hours_display(), "00");
		assert_eq!(remaining.minutes_display(), "00");
		assert_eq!(remaining.seconds_display(), "00");
	}
}
