use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
	config::FormConfig,
	roster::{check_count, parse_attendee_count, AttendeeField, CountError, Roster},
	ticket::{TicketReference, TicketSelection},
	validate::{validate, ValidationErrors, MISSING_SCREENSHOT}
};

// Names of the multipart fields the backend reads
pub const FIELD_TICKET_NUMBER: &str = "ticketNumber";
pub const FIELD_TICKET_TYPE: &str = "ticketType";
pub const FIELD_AMOUNT: &str = "amount";
pub const FIELD_TOTAL: &str = "total";
pub const FIELD_SCREENSHOT: &str = "transactionScreenshot";
pub const FIELD_PERSON_DETAILS: &str = "personDetails";

const FAILURE_PREFIX: &str = "Failed to submit data: ";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
	#[error("There's no person {} on this order (it has {count})", .index + 1)]
	NoSuchAttendee { index: usize, count: usize },
	#[error(transparent)]
	Count(#[from] CountError)
}

/// Where the form is in the process of being sent off
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
	#[default]
	Idle,
	// tried to submit, but it didn't pass validation. Still editable.
	Invalid(ValidationErrors),
	// the request is out; nothing else can be submitted until it comes back
	Submitting,
	// show the confirmation
	Submitted,
	Failed(String)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
	#[error("A submission is already in progress")]
	InFlight,
	#[error("The form has {} problem(s) to fix", .0.len())]
	Invalid(ValidationErrors),
	#[error("Couldn't encode the order: {0}")]
	Encode(String)
}

/// How the POST turned out, as far as the form cares
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
	Response { status: u16, body: String },
	// the request never got a response at all
	Transport(String)
}

/// Everything that gets sent to the backend, already stringified the way the multipart body
/// wants it. The screenshot is borrowed from the form.
#[derive(Debug, PartialEq, Eq)]
pub struct SubmissionPayload<'a, A> {
	pub ticket_number: String,
	pub ticket_type: &'static str,
	pub amount: String,
	pub total: String,
	pub person_details: String,
	pub transaction_screenshot: &'a A
}

impl<A> SubmissionPayload<'_, A> {
	/// The plain-text fields, as (name, value), in the order they're appended to the body
	#[must_use]
	pub fn text_fields(&self) -> [(&'static str, &str); 5] {
		[
			(FIELD_TICKET_NUMBER, &self.ticket_number),
			(FIELD_TICKET_TYPE, self.ticket_type),
			(FIELD_AMOUNT, &self.amount),
			(FIELD_TOTAL, &self.total),
			(FIELD_PERSON_DETAILS, &self.person_details),
		]
	}
}

/// All the state behind the ticket purchase form. `A` is whatever the payment screenshot is
/// (a browser `File` on the page).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderForm<A> {
	config: FormConfig,
	reference: TicketReference,
	selection: TicketSelection,
	roster: Roster,
	payment_proof: Option<A>,
	show_payment_qr: bool,
	count_error: Option<CountError>,
	phase: SubmitPhase
}

impl<A> OrderForm<A> {
	pub fn new<R: Rng + ?Sized>(config: FormConfig, rng: &mut R) -> Self {
		let reference = TicketReference::generate(rng);
		debug!(%reference, "Opened a new order form");

		Self {
			config,
			reference,
			selection: TicketSelection::default(),
			roster: Roster::default(),
			payment_proof: None,
			show_payment_qr: false,
			count_error: None,
			phase: SubmitPhase::Idle
		}
	}

	#[must_use]
	pub fn config(&self) -> &FormConfig {
		&self.config
	}

	#[must_use]
	pub fn reference(&self) -> &TicketReference {
		&self.reference
	}

	#[must_use]
	pub fn selection(&self) -> TicketSelection {
		self.selection
	}

	#[must_use]
	pub fn roster(&self) -> &Roster {
		&self.roster
	}

	#[must_use]
	pub fn attendee_count(&self) -> usize {
		self.roster.len()
	}

	#[must_use]
	pub fn payment_proof(&self) -> Option<&A> {
		self.payment_proof.as_ref()
	}

	#[must_use]
	pub fn show_payment_qr(&self) -> bool {
		self.show_payment_qr
	}

	#[must_use]
	pub fn count_error(&self) -> Option<&CountError> {
		self.count_error.as_ref()
	}

	#[must_use]
	pub fn phase(&self) -> &SubmitPhase {
		&self.phase
	}

	#[must_use]
	pub fn unit_price(&self) -> u32 {
		self.selection.unit_price()
	}

	#[must_use]
	pub fn total_price(&self) -> u32 {
		// attendee_count is capped by max_attendees, so this can't realistically saturate
		let count = u32::try_from(self.attendee_count()).unwrap_or(u32::MAX);
		self.unit_price().saturating_mul(count)
	}

	#[must_use]
	pub fn is_submitting(&self) -> bool {
		self.phase == SubmitPhase::Submitting
	}

	/// Messages to show under the form: validation problems, or why the last submission failed
	#[must_use]
	pub fn errors(&self) -> &[String] {
		match &self.phase {
			SubmitPhase::Invalid(errors) => &errors.0,
			SubmitPhase::Failed(msg) => std::slice::from_ref(msg),
			SubmitPhase::Idle | SubmitPhase::Submitting | SubmitPhase::Submitted => &[]
		}
	}

	pub fn select_ticket(&mut self, selection: TicketSelection) {
		debug!(from = %self.selection, to = %selection, "Changed ticket type");
		self.selection = selection;
	}

	/// For the raw text in the "Number of Persons" box. If it's not usable, the roster stays as
	/// it was and the problem is kept around to show next to the input.
	pub fn set_attendee_count_input(&mut self, input: &str) -> Result<(), FormError> {
		let parsed = parse_attendee_count(input, self.config.max_attendees);
		self.apply_count(parsed)
	}

	pub fn set_attendee_count(&mut self, count: usize) -> Result<(), FormError> {
		let checked = check_count(count, self.config.max_attendees);
		self.apply_count(checked)
	}

	fn apply_count(&mut self, count: Result<usize, CountError>) -> Result<(), FormError> {
		match count {
			Ok(count) => {
				debug!(count, policy = ?self.config.resize_policy, "Resizing roster");
				self.roster.resize(count, self.config.resize_policy);
				self.count_error = None;
				Ok(())
			},
			Err(err) => {
				warn!("Rejected attendee count: {err}");
				self.count_error = Some(err.clone());
				Err(err.into())
			}
		}
	}

	pub fn set_attendee_field(
		&mut self,
		index: usize,
		field: AttendeeField,
		value: String
	) -> Result<(), FormError> {
		let count = self.roster.len();
		let person = self.roster.get_mut(index)
			.ok_or(FormError::NoSuchAttendee { index, count })?;

		person.set(field, value);
		Ok(())
	}

	/// Choosing nothing in the file picker doesn't clear what was already attached
	pub fn attach_payment_proof(&mut self, proof: Option<A>) {
		if let Some(proof) = proof {
			debug!("Attached payment proof");
			self.payment_proof = Some(proof);
		}
	}

	pub fn toggle_payment_qr(&mut self) {
		self.show_payment_qr = !self.show_payment_qr;
	}

	/// Validates and, if everything's fine, moves to `Submitting` and hands back what needs to be
	/// sent. Exactly one of these can be out at a time.
	pub fn begin_submit(&mut self) -> Result<SubmissionPayload<'_, A>, SubmitRejection> {
		if self.is_submitting() {
			warn!(reference = %self.reference, "Ignoring submit while a submission is in flight");
			return Err(SubmitRejection::InFlight);
		}

		let errors = validate(self);
		if !errors.is_empty() {
			debug!(count = errors.len(), "Order failed validation");
			self.phase = SubmitPhase::Invalid(errors.clone());
			return Err(SubmitRejection::Invalid(errors));
		}

		let person_details = match serde_json::to_string(self.roster.attendees()) {
			Ok(json) => json,
			Err(err) => {
				let msg = format!("{FAILURE_PREFIX}{err}");
				self.phase = SubmitPhase::Failed(msg);
				return Err(SubmitRejection::Encode(err.to_string()));
			}
		};

		let Some(transaction_screenshot) = self.payment_proof.as_ref() else {
			// validation already covers this
			let errors = ValidationErrors(vec![MISSING_SCREENSHOT.into()]);
			self.phase = SubmitPhase::Invalid(errors.clone());
			return Err(SubmitRejection::Invalid(errors));
		};

		self.phase = SubmitPhase::Submitting;
		debug!(reference = %self.reference, total = self.total_price(), "Submitting order");

		Ok(SubmissionPayload {
			ticket_number: self.reference.to_string(),
			ticket_type: self.selection.label(),
			amount: self.selection.unit_price().to_string(),
			total: self.total_price().to_string(),
			person_details,
			transaction_screenshot
		})
	}

	/// Records how the request went. Whatever was entered stays as it is either way.
	pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
		if !self.is_submitting() {
			warn!(?outcome, phase = ?self.phase, "Got a submission result without a submission in flight");
			return;
		}

		self.phase = match outcome {
			SubmitOutcome::Response { status, .. } if (200..300).contains(&status) => {
				debug!(status, reference = %self.reference, "Order submitted");
				SubmitPhase::Submitted
			},
			SubmitOutcome::Response { status, body } => {
				warn!(status, "Submission rejected: {body}");
				SubmitPhase::Failed(format!("{FAILURE_PREFIX}{body}"))
			},
			SubmitOutcome::Transport(msg) => {
				warn!("Submission couldn't be sent: {msg}");
				SubmitPhase::Failed(format!("{FAILURE_PREFIX}{msg}"))
			}
		};
	}

	/// Closing the confirmation just goes back to the form; it doesn't clear anything
	pub fn dismiss_confirmation(&mut self) {
		if self.phase == SubmitPhase::Submitted {
			self.phase = SubmitPhase::Idle;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::roster::{AttendeeDetail, ResizePolicy};
	use rand::{rngs::StdRng, SeedableRng};

	// Stand-in for a browser File
	#[derive(Clone, Debug, PartialEq, Eq)]
	struct Screenshot(&'static str);

	fn form() -> OrderForm<Screenshot> {
		// so the transition logs show up when a test fails
		_ = tracing_subscriber::fmt().with_test_writer().try_init();
		OrderForm::new(FormConfig::default(), &mut StdRng::seed_from_u64(2024))
	}

	fn fill(form: &mut OrderForm<Screenshot>, index: usize, name: &str, email: &str, phone: &str) {
		form.set_attendee_field(index, AttendeeField::Name, name.into()).unwrap();
		form.set_attendee_field(index, AttendeeField::Email, email.into()).unwrap();
		form.set_attendee_field(index, AttendeeField::Phone, phone.into()).unwrap();
	}

	fn ready_form() -> OrderForm<Screenshot> {
		let mut form = form();
		fill(&mut form, 0, "Asha", "asha@example.com", "9876543210");
		form.attach_payment_proof(Some(Screenshot("paid.png")));
		form
	}

	#[test]
	fn fresh_form() {
		let form = form();
		assert_eq!(form.attendee_count(), 1);
		assert_eq!(form.roster().attendees(), &[AttendeeDetail::default()]);
		assert_eq!(form.selection(), TicketSelection::LonelyAtTheTop);
		assert_eq!(form.total_price(), 50);
		assert_eq!(form.phase(), &SubmitPhase::Idle);
		assert!(form.errors().is_empty());
		assert!(!form.show_payment_qr());
	}

	#[test]
	fn same_seed_same_reference() {
		assert_eq!(form().reference(), form().reference());
	}

	#[test]
	fn total_follows_selection_and_count() {
		let mut form = form();

		for (selection, count) in [
			(TicketSelection::BestieAndI, 3),
			(TicketSelection::LonelyAtTheTop, 3),
			(TicketSelection::LonelyAtTheTop, 7),
			(TicketSelection::BestieAndI, 1),
		] {
			form.select_ticket(selection);
			form.set_attendee_count(count).unwrap();
			assert_eq!(form.unit_price(), selection.unit_price());
			assert_eq!(form.total_price(), selection.unit_price() * count as u32);
		}
	}

	#[test]
	fn selection_leaves_attendees_and_proof_alone() {
		let mut form = ready_form();
		let roster = form.roster().clone();

		form.select_ticket(TicketSelection::BestieAndI);
		form.select_ticket(TicketSelection::LonelyAtTheTop);
		form.select_ticket(TicketSelection::BestieAndI);

		assert_eq!(form.roster(), &roster);
		assert_eq!(form.payment_proof(), Some(&Screenshot("paid.png")));
	}

	#[test]
	fn roster_length_matches_count() {
		for policy in [ResizePolicy::DiscardAll, ResizePolicy::PreserveExisting] {
			let config = FormConfig { resize_policy: policy, ..FormConfig::default() };
			let mut form: OrderForm<Screenshot> = OrderForm::new(config, &mut StdRng::seed_from_u64(1));

			for input in ["3", "1", "abc", "12", "0", "-2", "20", "21", "4"] {
				_ = form.set_attendee_count_input(input);
				assert_eq!(form.roster().len(), form.attendee_count());
			}

			assert_eq!(form.attendee_count(), 4);
		}
	}

	#[test]
	fn bad_count_input_keeps_roster() {
		let mut form = ready_form();
		let roster = form.roster().clone();

		assert_eq!(
			form.set_attendee_count_input("lots"),
			Err(FormError::Count(CountError::NotANumber("lots".into())))
		);
		assert_eq!(form.roster(), &roster);
		assert_eq!(form.count_error(), Some(&CountError::NotANumber("lots".into())));

		assert_eq!(form.set_attendee_count(0), Err(FormError::Count(CountError::TooFew)));
		assert_eq!(form.roster(), &roster);

		form.set_attendee_count_input("2").unwrap();
		assert_eq!(form.count_error(), None);
		assert_eq!(form.attendee_count(), 2);
	}

	#[test]
	fn discard_policy_clears_entries_on_resize() {
		let mut form = ready_form();
		form.set_attendee_count(1).unwrap();
		assert_eq!(form.roster().attendees(), &[AttendeeDetail::default()]);
		// the screenshot isn't part of the roster
		assert!(form.payment_proof().is_some());
	}

	#[test]
	fn field_edits_touch_one_record() {
		let mut form = form();
		form.set_attendee_count(3).unwrap();
		form.set_attendee_field(1, AttendeeField::Phone, "9876543210".into()).unwrap();

		let attendees = form.roster().attendees();
		assert_eq!(attendees[1].phone, "9876543210");
		assert!(attendees[1].name.is_empty());
		assert_eq!(attendees[0], AttendeeDetail::default());
		assert_eq!(attendees[2], AttendeeDetail::default());

		assert_eq!(
			form.set_attendee_field(3, AttendeeField::Name, "Nobody".into()),
			Err(FormError::NoSuchAttendee { index: 3, count: 3 })
		);
	}

	#[test]
	fn empty_file_pick_keeps_attachment() {
		let mut form = form();
		form.attach_payment_proof(Some(Screenshot("one.png")));
		form.attach_payment_proof(None);
		assert_eq!(form.payment_proof(), Some(&Screenshot("one.png")));
		form.attach_payment_proof(Some(Screenshot("two.png")));
		assert_eq!(form.payment_proof(), Some(&Screenshot("two.png")));
	}

	#[test]
	fn qr_toggles() {
		let mut form = form();
		form.toggle_payment_qr();
		assert!(form.show_payment_qr());
		form.toggle_payment_qr();
		assert!(!form.show_payment_qr());
	}

	#[test]
	fn validation_is_repeatable() {
		let mut form = form();
		form.set_attendee_count(2).unwrap();
		fill(&mut form, 1, "", "bad", "123");

		let first = validate(&form);
		let second = validate(&form);
		assert_eq!(first, second);
		assert_eq!(form.phase(), &SubmitPhase::Idle);
	}

	#[test]
	fn valid_single_order_payload() {
		let mut form = ready_form();
		let reference = form.reference().to_string();
		assert!(validate(&form).is_empty());

		let payload = form.begin_submit().unwrap();
		assert_eq!(payload.ticket_number, reference);
		assert_eq!(payload.ticket_type, "Lonely at the top");
		assert_eq!(payload.amount, "50");
		assert_eq!(payload.total, "50");
		assert_eq!(
			payload.person_details,
			r#"[{"name":"Asha","email":"asha@example.com","phone":"9876543210"}]"#
		);
		assert_eq!(payload.transaction_screenshot, &Screenshot("paid.png"));

		let names = payload.text_fields().map(|(name, _)| name);
		assert_eq!(names, ["ticketNumber", "ticketType", "amount", "total", "personDetails"]);

		assert!(form.is_submitting());
	}

	#[test]
	fn person_details_round_trip_through_json() {
		let mut form = ready_form();
		form.select_ticket(TicketSelection::BestieAndI);
		form.set_attendee_count(2).unwrap();
		fill(&mut form, 0, "Asha", "asha@example.com", "9876543210");
		fill(&mut form, 1, "Ravi", "ravi@example.com", "+91 8123456789");

		let payload = form.begin_submit().unwrap();
		assert_eq!(payload.amount, "80");
		assert_eq!(payload.total, "160");

		let decoded: Vec<AttendeeDetail> = serde_json::from_str(&payload.person_details).unwrap();
		assert_eq!(decoded.len(), 2);
		assert_eq!(decoded[1].phone, "+91 8123456789");
	}

	#[test]
	fn invalid_submit_never_goes_out() {
		let mut form = form();
		form.set_attendee_count(2).unwrap();
		fill(&mut form, 0, "Asha", "asha@example.com", "9876543210");
		fill(&mut form, 1, "Ravi", "", "9876543210");
		form.attach_payment_proof(Some(Screenshot("paid.png")));

		let expected = ValidationErrors(vec!["Email Address of Person 2 is required.".into()]);
		assert_eq!(form.begin_submit(), Err(SubmitRejection::Invalid(expected.clone())));
		assert_eq!(form.phase(), &SubmitPhase::Invalid(expected));
		assert_eq!(form.errors(), ["Email Address of Person 2 is required."]);
	}

	#[test]
	fn missing_screenshot_is_only_error() {
		let mut form = form();
		fill(&mut form, 0, "Asha", "asha@example.com", "9876543210");

		assert!(form.begin_submit().is_err());
		assert_eq!(form.errors(), ["Transaction screenshot is required."]);
	}

	#[test]
	fn no_double_submit() {
		let mut form = ready_form();
		assert!(form.begin_submit().is_ok());
		assert_eq!(form.begin_submit(), Err(SubmitRejection::InFlight));
		assert!(form.is_submitting());
	}

	#[test]
	fn success_then_dismiss_keeps_fields() {
		let mut form = ready_form();
		let before = form.roster().clone();
		assert!(form.begin_submit().is_ok());

		form.finish_submit(SubmitOutcome::Response { status: 200, body: "ok".into() });
		assert_eq!(form.phase(), &SubmitPhase::Submitted);

		form.dismiss_confirmation();
		assert_eq!(form.phase(), &SubmitPhase::Idle);
		assert_eq!(form.roster(), &before);
		assert!(form.payment_proof().is_some());
		assert!(form.errors().is_empty());
	}

	#[test]
	fn failed_response_surfaces_body() {
		let mut form = ready_form();
		assert!(form.begin_submit().is_ok());

		form.finish_submit(SubmitOutcome::Response { status: 500, body: "database is down".into() });
		assert_eq!(form.errors(), ["Failed to submit data: database is down"]);
		assert!(!form.is_submitting());
		assert_eq!(form.roster().attendees()[0].name, "Asha");

		// and it can be tried again by hand
		assert!(form.begin_submit().is_ok());
		form.finish_submit(SubmitOutcome::Transport("NetworkError when attempting to fetch resource.".into()));
		assert_eq!(
			form.errors(),
			["Failed to submit data: NetworkError when attempting to fetch resource."]
		);
	}

	#[test]
	fn stray_results_are_ignored() {
		let mut form = ready_form();
		form.finish_submit(SubmitOutcome::Response { status: 200, body: String::new() });
		assert_eq!(form.phase(), &SubmitPhase::Idle);

		form.dismiss_confirmation();
		assert_eq!(form.phase(), &SubmitPhase::Idle);
	}
}
