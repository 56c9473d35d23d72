use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One person covered by the order. Serialized with exactly these keys, since that's what the
/// backend expects inside `personDetails`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AttendeeDetail {
	pub name: String,
	pub email: String,
	pub phone: String
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttendeeField {
	Name,
	Email,
	Phone
}

impl AttendeeDetail {
	pub fn set(&mut self, field: AttendeeField, value: String) {
		match field {
			AttendeeField::Name => self.name = value,
			AttendeeField::Email => self.email = value,
			AttendeeField::Phone => self.phone = value,
		}
	}

	#[must_use]
	pub fn get(&self, field: AttendeeField) -> &str {
		match field {
			AttendeeField::Name => &self.name,
			AttendeeField::Email => &self.email,
			AttendeeField::Phone => &self.phone,
		}
	}
}

/// What happens to already-typed details when the number of attendees changes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizePolicy {
	// every change throws away what was entered and starts over with blank records
	#[default]
	DiscardAll,
	// records whose index still exists keep their data
	PreserveExisting
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CountError {
	#[error("'{0}' is not a number of people")]
	NotANumber(String),
	#[error("At least one person has to attend")]
	TooFew,
	#[error("At most {max} people can be booked at once")]
	TooMany { max: usize }
}

/// Parses the free-text "Number of Persons" input. Anything that isn't a whole number between
/// 1 and `max` (inclusive) is rejected.
pub fn parse_attendee_count(input: &str, max: usize) -> Result<usize, CountError> {
	let trimmed = input.trim();

	// A negative number is a perfectly fine number, it's just too small
	if trimmed.strip_prefix('-')
		.is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
	{
		return Err(CountError::TooFew);
	}

	let count = trimmed.parse::<usize>()
		.map_err(|_| CountError::NotANumber(input.to_string()))?;

	check_count(count, max)
}

pub(crate) fn check_count(count: usize, max: usize) -> Result<usize, CountError> {
	match count {
		0 => Err(CountError::TooFew),
		c if c > max => Err(CountError::TooMany { max }),
		c => Ok(c)
	}
}

/// The ordered list of attendees. Its length is the attendee count; there's no separate
/// counter that could drift away from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
	attendees: Vec<AttendeeDetail>
}

impl Default for Roster {
	fn default() -> Self {
		Self { attendees: vec![AttendeeDetail::default()] }
	}
}

impl Roster {
	#[must_use]
	pub fn len(&self) -> usize {
		self.attendees.len()
	}

	// Never true, but clippy wants it next to `len`
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.attendees.is_empty()
	}

	#[must_use]
	pub fn attendees(&self) -> &[AttendeeDetail] {
		&self.attendees
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&AttendeeDetail> {
		self.attendees.get(index)
	}

	pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut AttendeeDetail> {
		self.attendees.get_mut(index)
	}

	/// Callers have to have checked that `count` is at least 1
	pub(crate) fn resize(&mut self, count: usize, policy: ResizePolicy) {
		match policy {
			ResizePolicy::DiscardAll => self.attendees = vec![AttendeeDetail::default(); count],
			ResizePolicy::PreserveExisting => self.attendees.resize_with(count, AttendeeDetail::default),
		}
	}
}
