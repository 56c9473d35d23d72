//! Copy for the event itself, shared between the banner and the form

use chrono::{Datelike, NaiveDate};

pub const EVENT_NAME: &str = "Grad-Dinner";
pub const EVENT_YEAR: i32 = 2024;
const EVENT_MONTH: u32 = 6;
const EVENT_DAY: u32 = 1;

pub const VENUE: &str = "Pantaloon Building, KIIT Road";
pub const HOURS: &str = "4PM till midnight";
pub const BLURB: &str = "Experience lightning talks, meeting of new people, and savor delectable \
	food and drinks. An evening crafted for everyone awaits.";

pub const ILLUSTRATION_SRC: &str = "illust.png";
pub const PAYMENT_QR_SRC: &str = "/qr.png";
pub const PAYMENT_ACCOUNT_NAME: &str = "Mr. Dominic Asamoah Ampofo";

#[must_use]
pub fn event_date() -> Option<NaiveDate> {
	NaiveDate::from_ymd_opt(EVENT_YEAR, EVENT_MONTH, EVENT_DAY)
}

fn ordinal_suffix(day: u32) -> &'static str {
	match (day % 10, day % 100) {
		(_, 11..=13) => "th",
		(1, _) => "st",
		(2, _) => "nd",
		(3, _) => "rd",
		_ => "th"
	}
}

/// e.g. `Sat. June 1st, 2024`
#[must_use]
pub fn date_string() -> String {
	event_date().map_or_else(
		|| "Date to be announced".into(),
		|date| format!(
			"{}. {} {}{}, {}",
			date.format("%a"),
			date.format("%B"),
			date.day(),
			ordinal_suffix(date.day()),
			date.year()
		)
	)
}

/// The line along the bottom of the banner
#[must_use]
pub fn footer_line() -> String {
	format!("{} | {VENUE} | {HOURS}", date_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn footer_matches_event() {
		assert_eq!(
			footer_line(),
			"Sat. June 1st, 2024 | Pantaloon Building, KIIT Road | 4PM till midnight"
		);
	}

	#[test]
	fn ordinals() {
		assert_eq!(ordinal_suffix(1), "st");
		assert_eq!(ordinal_suffix(2), "nd");
		assert_eq!(ordinal_suffix(3), "rd");
		assert_eq!(ordinal_suffix(4), "th");
		assert_eq!(ordinal_suffix(11), "th");
		assert_eq!(ordinal_suffix(12), "th");
		assert_eq!(ordinal_suffix(21), "st");
		assert_eq!(ordinal_suffix(23), "rd");
	}
}
