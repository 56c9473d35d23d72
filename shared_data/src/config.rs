use crate::roster::ResizePolicy;

pub const DEFAULT_SUBMIT_URL: &str = "https://booking-back-end.vercel.app/submit/";
pub const DEFAULT_MAX_ATTENDEES: usize = 20;

/// Knobs for the ticket form. The browser bundle has no environment to read at runtime, so
/// overrides are baked in when it's built (see [`FormConfig::from_build_env`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormConfig {
	pub submit_url: String,
	pub max_attendees: usize,
	pub resize_policy: ResizePolicy
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			submit_url: DEFAULT_SUBMIT_URL.into(),
			max_attendees: DEFAULT_MAX_ATTENDEES,
			resize_policy: ResizePolicy::default()
		}
	}
}

impl FormConfig {
	/// Reads `TICKET_SUBMIT_URL`, `TICKET_MAX_ATTENDEES` and `TICKET_RESIZE_POLICY` as they were
	/// set at compile time
	#[must_use]
	pub fn from_build_env() -> Self {
		Self::from_env_values(
			option_env!("TICKET_SUBMIT_URL"),
			option_env!("TICKET_MAX_ATTENDEES"),
			option_env!("TICKET_RESIZE_POLICY")
		)
	}

	/// Anything unset, empty, or unparseable falls back to its default
	#[must_use]
	pub fn from_env_values(
		submit_url: Option<&str>,
		max_attendees: Option<&str>,
		resize_policy: Option<&str>
	) -> Self {
		let defaults = Self::default();

		let submit_url = submit_url
			.map(str::trim)
			.filter(|url| !url.is_empty())
			.map_or(defaults.submit_url, str::to_string);

		let max_attendees = max_attendees
			.and_then(|max| max.trim().parse::<usize>().ok())
			.filter(|&max| max >= 1)
			.unwrap_or(defaults.max_attendees);

		let resize_policy = match resize_policy.map(|p| p.trim().to_ascii_lowercase()).as_deref() {
			Some("preserve") => ResizePolicy::PreserveExisting,
			Some("discard") => ResizePolicy::DiscardAll,
			_ => defaults.resize_policy
		};

		Self { submit_url, max_attendees, resize_policy }
	}
}
