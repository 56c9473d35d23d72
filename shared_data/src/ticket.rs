use std::{fmt, str::FromStr};

use rand::Rng;
use thiserror::Error;

use crate::event::EVENT_YEAR;

const REFERENCE_PREFIX: &str = "GRADPARTY";
// References are NNN, so anything above this can't be displayed
pub const MAX_REFERENCE_SERIAL: u16 = 999;

/// The two kinds of ticket on sale. Each one has a fixed price, which can't be edited
/// independently of the kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TicketSelection {
	#[default]
	LonelyAtTheTop,
	BestieAndI
}

impl TicketSelection {
	/// Every variant, in the order they're shown on the page
	pub const ALL: [Self; 2] = [Self::LonelyAtTheTop, Self::BestieAndI];

	#[must_use]
	pub const fn unit_price(self) -> u32 {
		match self {
			Self::LonelyAtTheTop => 50,
			Self::BestieAndI => 80
		}
	}

	/// This is both what we show to the user and what we send to the backend as `ticketType`
	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::LonelyAtTheTop => "Lonely at the top",
			Self::BestieAndI => "Bestie and I"
		}
	}
}

impl fmt::Display for TicketSelection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("'{0}' is not a ticket type we sell")]
pub struct UnknownTicketType(pub String);

impl FromStr for TicketSelection {
	type Err = UnknownTicketType;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter()
			.find(|sel| sel.label() == s)
			.ok_or_else(|| UnknownTicketType(s.to_string()))
	}
}

/// Formats a price the way it's shown on the page, e.g. `₹50`
#[must_use]
pub fn display_price(amount: u32) -> String {
	format!("₹{amount}")
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReferenceError {
	#[error("ticket serial {0} doesn't fit in three digits")]
	SerialOutOfRange(u16)
}

/// The human-readable reference shown at the top of the form, like `GRADPARTY-042/24`. It's
/// made up once when the form is opened; it is not issued by the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketReference {
	serial: u16
}

impl TicketReference {
	/// Pulls the serial from whatever rng is handed in, so tests can pass a seeded one
	pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
		Self { serial: rng.gen_range(0..=MAX_REFERENCE_SERIAL) }
	}

	pub fn from_serial(serial: u16) -> Result<Self, ReferenceError> {
		if serial > MAX_REFERENCE_SERIAL {
			return Err(ReferenceError::SerialOutOfRange(serial));
		}

		Ok(Self { serial })
	}

	#[must_use]
	pub fn serial(&self) -> u16 {
		self.serial
	}
}

impl fmt::Display for TicketReference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{REFERENCE_PREFIX}-{:03}/{:02}", self.serial, EVENT_YEAR % 100)
	}
}
