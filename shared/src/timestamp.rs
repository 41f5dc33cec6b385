//! Loose parsing of digit-delimited timestamps such as `2019-05-21T19:30:15.500Z`.
//!
//! The parser performs no validation. Every maximal run of non-digit characters is a separator, the first seven
//! fields are taken as year, month, day, hour, minute, second and milliseconds, and out-of-range values roll over the
//! same way the browser's `Date.UTC` constructor rolls them over. Input that leaves a field without a value produces
//! an invalid date (`None`) rather than an error.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// The number of digit groups a complete timestamp string carries.
pub const TIMESTAMP_FIELD_COUNT: usize = 7;

const MILLIS_PER_SECOND: i64 = 1000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Largest time value magnitude a browser date can hold (100,000,000 days on either side of the epoch).
pub const MAX_TIME_VALUE_MILLIS: i64 = 100_000_000 * MILLIS_PER_DAY;

// ASCII only; other Unicode digits are separators too.
static NON_DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new("[^0-9]+").unwrap());

/// The seven numeric components of a timestamp string.
///
/// `None` marks a component that is not a number, either because the input ran out of digit groups or because the
/// group doesn't fit in an `i64`. The month is stored 0-based.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TimestampFields {
	pub year: Option<i64>,
	pub month_index: Option<i64>,
	pub day: Option<i64>,
	pub hour: Option<i64>,
	pub minute: Option<i64>,
	pub second: Option<i64>,
	pub millisecond: Option<i64>,
}

impl TimestampFields {
	/// Splits a timestamp string into its components.
	///
	/// A leading or trailing separator produces an empty field, which counts as zero. Groups past the seventh are
	/// ignored.
	pub fn split(s: &str) -> Self {
		let mut groups = NON_DIGIT_RUN.split(s).map(field_value);
		let mut next = || groups.next().flatten();

		let year = next();
		let month_index = next().map(|month| month - 1);
		let day = next();
		let hour = next();
		let minute = next();
		let second = next();
		let millisecond = next();

		Self {
			year,
			month_index,
			day,
			hour,
			minute,
			second,
			millisecond,
		}
	}

	/// Milliseconds since the Unix epoch for these components interpreted in UTC, or `None` for an invalid date.
	pub fn epoch_millis(&self) -> Option<i64> {
		let year = self.year?;
		let year = if (0..=99).contains(&year) { 1900 + year } else { year };
		let day_number = day_from_year_month(year, self.month_index?)?.checked_add(self.day?.checked_sub(1)?)?;

		let time = self
			.hour?
			.checked_mul(MILLIS_PER_HOUR)?
			.checked_add(self.minute?.checked_mul(MILLIS_PER_MINUTE)?)?
			.checked_add(self.second?.checked_mul(MILLIS_PER_SECOND)?)?
			.checked_add(self.millisecond?)?;

		let millis = day_number.checked_mul(MILLIS_PER_DAY)?.checked_add(time)?;
		if millis.checked_abs()? > MAX_TIME_VALUE_MILLIS {
			return None;
		}
		Some(millis)
	}

	/// The UTC date-time for these components, or `None` for an invalid date.
	pub fn to_utc(&self) -> Option<DateTime<Utc>> {
		DateTime::from_timestamp_millis(self.epoch_millis()?)
	}
}

/// Parses a digit-delimited timestamp string as a UTC date-time.
///
/// The second group is a 1-based month. Returns `None` where the browser would construct an invalid date, most
/// commonly because fewer than seven digit groups were present.
pub fn parse_iso_string(s: &str) -> Option<DateTime<Utc>> {
	TimestampFields::split(s).to_utc()
}

fn field_value(group: &str) -> Option<i64> {
	if group.is_empty() {
		Some(0)
	} else {
		group.parse().ok()
	}
}

/// Days from the epoch to the first day of the given month, with out-of-range months carried into the year.
///
/// Counts in 400-year eras of 146,097 days over a calendar starting in March, so the result covers every year a
/// browser time value can reach.
fn day_from_year_month(year: i64, month_index: i64) -> Option<i64> {
	let year = year.checked_add(month_index.div_euclid(12))?;
	let month = month_index.rem_euclid(12) + 1;
	let year = if month <= 2 { year.checked_sub(1)? } else { year };

	let era = year.div_euclid(400);
	let year_of_era = year.rem_euclid(400);
	let day_of_year = (153 * ((month + 9) % 12) + 2) / 5;
	let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

	// 719,468 days separate 0000-03-01 from 1970-01-01.
	era.checked_mul(146_097)?.checked_add(day_of_era - 719_468)
}
