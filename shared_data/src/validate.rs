use std::sync::LazyLock;

use regex::Regex;

use crate::{order::OrderForm, roster::AttendeeDetail};

// `\w` here would be unicode-aware, and we only want to allow ascii word characters
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*@([A-Za-z0-9_-]+\.)+[a-zA-Z]{2,7}$")
		.expect("email pattern is valid")
);
// Indian mobile numbers: optional +91/91/0 prefix, then 10 digits starting with 7, 8 or 9
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"^(\+91[-\s]?)?0?(91)?[789][0-9]{9}$")
		.expect("phone pattern is valid")
);

pub const MISSING_SCREENSHOT: &str = "Transaction screenshot is required.";

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
	EMAIL_REGEX.is_match(email)
}

#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
	PHONE_REGEX.is_match(phone)
}

/// Every reason an order can't be submitted yet, in the order they should be shown
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, String> {
		self.0.iter()
	}
}

impl<'a> IntoIterator for &'a ValidationErrors {
	type Item = &'a String;
	type IntoIter = std::slice::Iter<'a, String>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Checks the whole form without touching it. Doesn't stop at the first problem; everything
/// wrong gets reported, person by person, with the screenshot check last.
#[must_use]
pub fn validate<A>(form: &OrderForm<A>) -> ValidationErrors {
	validate_parts(form.roster().attendees(), form.payment_proof().is_some())
}

pub(crate) fn validate_parts(attendees: &[AttendeeDetail], has_proof: bool) -> ValidationErrors {
	let mut errors = Vec::new();

	for (idx, person) in attendees.iter().enumerate() {
		let num = idx + 1;

		// No trimming, on purpose: a name of just spaces counts as a name
		if person.name.is_empty() {
			errors.push(format!("Name of Person {num} is required."));
		}

		if person.email.is_empty() {
			errors.push(format!("Email Address of Person {num} is required."));
		} else if !is_valid_email(&person.email) {
			errors.push(format!("Email Address of Person {num} is invalid."));
		}

		if person.phone.is_empty() {
			errors.push(format!("Phone Number of Person {num} is required."));
		} else if !is_valid_phone(&person.phone) {
			errors.push(format!("Phone Number of Person {num} is invalid."));
		}
	}

	if !has_proof {
		errors.push(MISSING_SCREENSHOT.to_string());
	}

	ValidationErrors(errors)
}
