// SPDX-License-Identifier: MIT
// Copyright (c) 2025 the rowcast authors

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const SECONDS_PER_DAY: i64 = 86_400;

/// A date and time value with nanosecond precision, always interpreted in
/// UTC.
///
/// Internally stored as whole seconds since Unix epoch (1970-01-01T00:00:00Z)
/// plus a subsecond nanosecond component. Negative seconds represent instants
/// before 1970.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
	seconds: i64,
	nanos: u32,
}

impl Default for DateTime {
	fn default() -> Self {
		Self {
			seconds: 0,
			nanos: 0,
		} // 1970-01-01T00:00:00Z
	}
}

// Calendar utilities
impl DateTime {
	/// Check if a year is a leap year
	#[inline]
	fn is_leap_year(year: i32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	/// Get the number of days in a month
	#[inline]
	fn days_in_month(year: i32, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Self::is_leap_year(year) {
					29
				} else {
					28
				}
			}
			_ => 0,
		}
	}

	/// Convert year/month/day to days since Unix epoch
	fn ymd_to_days_since_epoch(year: i32, month: u32, day: u32) -> Option<i64> {
		// Validate input
		if month < 1 || month > 12 || day < 1 || day > Self::days_in_month(year, month) {
			return None;
		}

		// Algorithm based on Howard Hinnant's date algorithms
		// Convert month from [1,12] to [0,11] where Mar=0
		let (y, m) = if month <= 2 {
			(year - 1, month as i32 + 9) // Jan->10, Feb->11
		} else {
			(year, month as i32 - 3) // Mar->0, Apr->1, ..., Dec->9
		};

		let era = if y >= 0 {
			y
		} else {
			y - 399
		} / 400;
		let yoe = y - era * 400; // [0, 399]
		let doy = (153 * m + 2) / 5 + day as i32 - 1; // [0, 365]
		let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
		let days = era as i64 * 146097 + doe as i64 - 719468;

		Some(days)
	}

	/// Convert days since Unix epoch to year/month/day
	fn days_since_epoch_to_ymd(days: i64) -> (i32, u32, u32) {
		// Adjust to the algorithm's epoch
		let days_since_ce = days + 719468;

		let era = if days_since_ce >= 0 {
			days_since_ce
		} else {
			days_since_ce - 146096
		} / 146097;
		let doe = days_since_ce - era * 146097; // [0, 146096]
		let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // [0, 399]
		let y = yoe + era * 400;
		let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
		let mp = (5 * doy + 2) / 153; // [0, 11]
		let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
		let m = if mp < 10 {
			mp + 3
		} else {
			mp - 9
		}; // [1, 12]
		let year = if m <= 2 {
			y + 1
		} else {
			y
		};

		(year as i32, m as u32, d as u32)
	}
}

impl DateTime {
	pub fn new(seconds: i64, nanos: u32) -> Option<Self> {
		if nanos >= NANOS_PER_SECOND {
			return None;
		}
		Some(Self {
			seconds,
			nanos,
		})
	}

	pub fn from_timestamp(seconds: i64) -> Self {
		Self {
			seconds,
			nanos: 0,
		}
	}

	pub fn from_timestamp_millis(millis: i64) -> Self {
		Self {
			seconds: millis.div_euclid(1000),
			nanos: millis.rem_euclid(1000) as u32 * 1_000_000,
		}
	}

	pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
		if hour > 23 || minute > 59 || second > 59 {
			return None;
		}
		let days = Self::ymd_to_days_since_epoch(year, month, day)?;
		let seconds = days * SECONDS_PER_DAY + hour as i64 * 3600 + minute as i64 * 60 + second as i64;
		Some(Self {
			seconds,
			nanos: 0,
		})
	}

	pub fn with_nanos(self, nanos: u32) -> Option<Self> {
		Self::new(self.seconds, nanos)
	}

	/// Whole seconds since Unix epoch
	pub fn timestamp(&self) -> i64 {
		self.seconds
	}

	/// Subsecond component in nanoseconds
	pub fn subsec_nanos(&self) -> u32 {
		self.nanos
	}

	fn parts(&self) -> (i32, u32, u32, u32, u32, u32) {
		let days = self.seconds.div_euclid(SECONDS_PER_DAY);
		let secs_of_day = self.seconds.rem_euclid(SECONDS_PER_DAY);
		let (year, month, day) = Self::days_since_epoch_to_ymd(days);
		let hour = (secs_of_day / 3600) as u32;
		let minute = (secs_of_day % 3600 / 60) as u32;
		let second = (secs_of_day % 60) as u32;
		(year, month, day, hour, minute, second)
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (year, month, day, hour, minute, second) = self.parts();
		if year < 0 {
			write!(f, "-{:04}-{:02}-{:02}T{:02}:{:02}:{:02}", -year, month, day, hour, minute, second)?;
		} else {
			write!(f, "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}", year, month, day, hour, minute, second)?;
		}
		if self.nanos != 0 {
			let fraction = format!("{:09}", self.nanos);
			write!(f, ".{}", fraction.trim_end_matches('0'))?;
		}
		f.write_str("Z")
	}
}

/// Error returned when a datetime literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDateTimeError;

impl Display for ParseDateTimeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("invalid datetime literal")
	}
}

impl std::error::Error for ParseDateTimeError {}

impl FromStr for DateTime {
	type Err = ParseDateTimeError;

	/// Accepts ISO 8601 forms: `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` and
	/// `YYYY-MM-DDTHH:MM:SS`, with optional fractional seconds up to
	/// nanosecond precision and an optional trailing `Z`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		let s = s.strip_suffix('Z').or_else(|| s.strip_suffix('z')).unwrap_or(s);

		let (date_part, time_part) = match s.find(['T', ' ']) {
			Some(at) => (&s[..at], Some(&s[at + 1..])),
			None => (s, None),
		};

		let mut date_fields = date_part.split('-');
		let year = parse_field::<i32>(date_fields.next())?;
		let month = parse_field::<u32>(date_fields.next())?;
		let day = parse_field::<u32>(date_fields.next())?;
		if date_fields.next().is_some() {
			return Err(ParseDateTimeError);
		}

		let (hour, minute, second, nanos) = match time_part {
			None => (0, 0, 0, 0),
			Some(time) => {
				let (hms, fraction) = match time.split_once('.') {
					Some((hms, fraction)) => (hms, Some(fraction)),
					None => (time, None),
				};
				let mut time_fields = hms.split(':');
				let hour = parse_field::<u32>(time_fields.next())?;
				let minute = parse_field::<u32>(time_fields.next())?;
				let second = parse_field::<u32>(time_fields.next())?;
				if time_fields.next().is_some() {
					return Err(ParseDateTimeError);
				}
				(hour, minute, second, parse_fraction(fraction)?)
			}
		};

		DateTime::from_ymd_hms(year, month, day, hour, minute, second)
			.and_then(|dt| dt.with_nanos(nanos))
			.ok_or(ParseDateTimeError)
	}
}

fn parse_field<T: FromStr>(field: Option<&str>) -> Result<T, ParseDateTimeError> {
	field.ok_or(ParseDateTimeError)?.parse().map_err(|_| ParseDateTimeError)
}

fn parse_fraction(fraction: Option<&str>) -> Result<u32, ParseDateTimeError> {
	let Some(fraction) = fraction else {
		return Ok(0);
	};
	if fraction.is_empty() || fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
		return Err(ParseDateTimeError);
	}
	let digits: u32 = fraction.parse().map_err(|_| ParseDateTimeError)?;
	Ok(digits * 10u32.pow(9 - fraction.len() as u32))
}

// Serde implementation for ISO 8601 format
impl Serialize for DateTime {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

struct DateTimeVisitor;

impl<'de> Visitor<'de> for DateTimeVisitor {
	type Value = DateTime;

	fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
		formatter.write_str("a datetime in ISO 8601 format (YYYY-MM-DDTHH:MM:SSZ)")
	}

	fn visit_str<E>(self, value: &str) -> Result<DateTime, E>
	where
		E: de::Error,
	{
		value.parse().map_err(|_| E::custom(format!("invalid datetime: {}", value)))
	}
}

impl<'de> Deserialize<'de> for DateTime {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(DateTimeVisitor)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_display_epoch() {
		assert_eq!(DateTime::from_timestamp(0).to_string(), "1970-01-01T00:00:00Z");
	}

	#[test]
	fn test_display_standard() {
		let dt = DateTime::from_ymd_hms(2024, 3, 15, 13, 45, 30).unwrap();
		assert_eq!(dt.to_string(), "2024-03-15T13:45:30Z");
	}

	#[test]
	fn test_display_fraction_trimmed() {
		let dt = DateTime::from_timestamp(0).with_nanos(500_000_000).unwrap();
		assert_eq!(dt.to_string(), "1970-01-01T00:00:00.5Z");

		let dt = DateTime::from_timestamp(0).with_nanos(123_456_789).unwrap();
		assert_eq!(dt.to_string(), "1970-01-01T00:00:00.123456789Z");
	}

	#[test]
	fn test_display_before_epoch() {
		assert_eq!(DateTime::from_timestamp(-1).to_string(), "1969-12-31T23:59:59Z");
	}

	#[test]
	fn test_from_timestamp_millis() {
		let dt = DateTime::from_timestamp_millis(1_500);
		assert_eq!(dt.timestamp(), 1);
		assert_eq!(dt.subsec_nanos(), 500_000_000);

		let dt = DateTime::from_timestamp_millis(-500);
		assert_eq!(dt.timestamp(), -1);
		assert_eq!(dt.subsec_nanos(), 500_000_000);
	}

	#[test]
	fn test_parse_date_only() {
		let dt: DateTime = "2024-03-15".parse().unwrap();
		assert_eq!(dt, DateTime::from_ymd_hms(2024, 3, 15, 0, 0, 0).unwrap());
	}

	#[test]
	fn test_parse_space_separator() {
		let dt: DateTime = "2024-03-15 13:45:30".parse().unwrap();
		assert_eq!(dt.to_string(), "2024-03-15T13:45:30Z");
	}

	#[test]
	fn test_parse_t_separator_with_zone() {
		let dt: DateTime = "2024-03-15T13:45:30Z".parse().unwrap();
		assert_eq!(dt.to_string(), "2024-03-15T13:45:30Z");
	}

	#[test]
	fn test_parse_fraction() {
		let dt: DateTime = "2024-03-15T13:45:30.25Z".parse().unwrap();
		assert_eq!(dt.subsec_nanos(), 250_000_000);
	}

	#[test]
	fn test_parse_leap_day() {
		assert!("2024-02-29".parse::<DateTime>().is_ok());
		assert!("2023-02-29".parse::<DateTime>().is_err());
	}

	#[test]
	fn test_parse_invalid() {
		assert!("not a datetime".parse::<DateTime>().is_err());
		assert!("2024-13-01".parse::<DateTime>().is_err());
		assert!("2024-01-32".parse::<DateTime>().is_err());
		assert!("2024-01-01T25:00:00".parse::<DateTime>().is_err());
		assert!("2024-01-01T00:00".parse::<DateTime>().is_err());
		assert!("".parse::<DateTime>().is_err());
	}

	#[test]
	fn test_display_parse_roundtrip() {
		let dt = DateTime::from_ymd_hms(1999, 12, 31, 23, 59, 59).unwrap().with_nanos(1_000).unwrap();
		let parsed: DateTime = dt.to_string().parse().unwrap();
		assert_eq!(parsed, dt);
	}
}
