use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FormData, HtmlInputElement, HtmlSelectElement};
use gloo_net::http::Request;
use gloo_console::log;
use shared_data::{
	display_price,
	event,
	AttendeeField,
	FormConfig,
	OrderForm,
	SubmissionPayload,
	SubmitOutcome,
	SubmitPhase,
	TicketSelection,
	FIELD_SCREENSHOT
};
use std::rc::Rc;
use crate::style::SharedStyle;

#[derive(Debug)]
pub enum FormMsg {
	Ticket(TicketSelection),
	Count(String),
	Field(usize, AttendeeField, String),
	Attach(Option<File>),
	ToggleQr,
	// carries what to call once the request comes back
	Submit(Callback<SubmitOutcome>),
	Finished(SubmitOutcome),
	Dismiss
}

// OrderForm lives in shared_data, so it needs a local wrapper to be Reducible
#[derive(Clone)]
pub struct TicketFormState(OrderForm<File>);

impl Reducible for TicketFormState {
	type Action = FormMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut form = self.0.clone();

		match action {
			FormMsg::Ticket(selection) => form.select_ticket(selection),
			// the error is stored on the form and shown next to the input
			FormMsg::Count(input) => if let Err(err) = form.set_attendee_count_input(&input) {
				log!(format!("Not changing the number of people: {err}"));
			},
			FormMsg::Field(index, field, value) => if let Err(err) = form.set_attendee_field(index, field, value) {
				log!(format!("Couldn't update {field:?}: {err}"));
			},
			FormMsg::Attach(file) => form.attach_payment_proof(file),
			FormMsg::ToggleQr => form.toggle_payment_qr(),
			FormMsg::Submit(on_done) => {
				let url = form.config().submit_url.clone();
				match form.begin_submit() {
					Ok(payload) => send_order(url, &payload, on_done),
					Err(err) => log!(format!("Not submitting: {err}")),
				}
			},
			FormMsg::Finished(outcome) => form.finish_submit(outcome),
			FormMsg::Dismiss => form.dismiss_confirmation(),
		}

		Self(form).into()
	}
}

// Builds the multipart body right away (the payload borrows the form) and then sends it off in
// the background. `on_done` is only ever called from inside the spawned future, never while
// the reducer is still running.
fn send_order(url: String, payload: &SubmissionPayload<'_, File>, on_done: Callback<SubmitOutcome>) {
	let body = order_body(payload);

	wasm_bindgen_futures::spawn_local(async move {
		let outcome = match body {
			Ok(body) => post_order(&url, body).await,
			Err(err) => {
				log!(&err);
				SubmitOutcome::Transport(err)
			}
		};

		on_done.emit(outcome);
	});
}

fn order_body(payload: &SubmissionPayload<'_, File>) -> Result<FormData, String> {
	let form = FormData::new()
		.map_err(|err| format!("Couldn't create new FormData: {err:?}"))?;

	for (name, value) in payload.text_fields() {
		form.append_with_str(name, value)
			.map_err(|err| format!("Couldn't append {name} to form: {err:?}"))?;
	}

	let screenshot = payload.transaction_screenshot;
	form.append_with_blob_and_filename(FIELD_SCREENSHOT, screenshot, &screenshot.name())
		.map_err(|err| format!("Couldn't append screenshot to form: {err:?}"))?;

	Ok(form)
}

async fn post_order(url: &str, body: FormData) -> SubmitOutcome {
	let request = match Request::post(url).body(body) {
		Ok(rq) => rq,
		Err(err) => return SubmitOutcome::Transport(format!("Couldn't create request: {err}")),
	};

	match request.send().await {
		Err(err) => SubmitOutcome::Transport(err.to_string()),
		Ok(res) => {
			let status = res.status();
			match res.text().await {
				Ok(body) => SubmitOutcome::Response { status, body },
				// If it went through we don't really care what it said
				Err(_) if res.ok() => SubmitOutcome::Response { status, body: String::new() },
				Err(err) => SubmitOutcome::Transport(format!("Request returned {status}, couldn't get text: {err:?}")),
			}
		}
	}
}

fn attendee_input(
	form: &UseReducerHandle<TicketFormState>,
	index: usize,
	field: AttendeeField
) -> Callback<InputEvent> {
	let form = form.clone();
	Callback::from(move |e: InputEvent| if let Some(input) = e.target()
		.and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
			form.dispatch(FormMsg::Field(index, field, input.value()));
		}
	)
}

#[function_component(TicketForm)]
pub fn ticket_form() -> Html {
	let form = use_reducer(|| TicketFormState(
		OrderForm::new(FormConfig::from_build_env(), &mut rand::thread_rng())
	));
	let order = &form.0;

	let ticket_form = form.clone();
	let ticket_change = Callback::from(move |e: Event| {
		let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) else {
			log!("Ticket type change didn't come from a select");
			return;
		};

		match select.value().parse::<TicketSelection>() {
			Ok(selection) => ticket_form.dispatch(FormMsg::Ticket(selection)),
			Err(err) => log!(format!("{err}")),
		}
	});

	let count_form = form.clone();
	let count_change = Callback::from(move |e: Event| if let Some(input) = e.target()
		.and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
			count_form.dispatch(FormMsg::Count(input.value()));
		}
	);

	let file_form = form.clone();
	let file_change = Callback::from(move |e: Event| {
		let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
			log!("Screenshot change didn't come from an input");
			return;
		};

		let file = input.files().and_then(|files| files.item(0));
		file_form.dispatch(FormMsg::Attach(file));
	});

	let qr_form = form.clone();
	let toggle_qr = Callback::from(move |_: MouseEvent| qr_form.dispatch(FormMsg::ToggleQr));

	let finisher = form.dispatcher();
	let submit_form = form.clone();
	let on_submit = Callback::from(move |e: SubmitEvent| {
		e.prevent_default();

		let finisher = finisher.clone();
		let on_done = Callback::from(move |outcome: SubmitOutcome| finisher.dispatch(FormMsg::Finished(outcome)));
		submit_form.dispatch(FormMsg::Submit(on_done));
	});

	let dismiss_form = form.clone();
	let dismiss = Callback::from(move |_: MouseEvent| dismiss_form.dispatch(FormMsg::Dismiss));

	let confirmation = if *order.phase() == SubmitPhase::Submitted {
		html! {
			<div id="confirmation-backdrop">
				<div id="confirmation">
					<h2>{ "You just joined the Dinner List" }</h2>
					<p>{ "Congratulations. See you there!" }</p>
					<button onclick={ dismiss }>{ "Close" }</button>
				</div>
			</div>
		}
	} else {
		html! {}
	};

	let price_cards = TicketSelection::ALL.into_iter().map(|selection| html! {
		<div class="price-card">
			<h2>{ selection.label() }</h2>
			<p>{ display_price(selection.unit_price()) }</p>
		</div>
	}).collect::<Html>();

	let attendees = order.roster().attendees().iter().enumerate().map(|(idx, person)| {
		let num = idx + 1;
		html! {
			<div class="attendee" key={ idx }>
				<div>
					<label>{ format!("Name of Person {num}") }</label>
					<input
						type="text"
						value={ person.name.clone() }
						oninput={ attendee_input(&form, idx, AttendeeField::Name) }
					/>
				</div>
				<div>
					<label>{ format!("Email Address of Person {num}") }</label>
					<input
						type="email"
						value={ person.email.clone() }
						oninput={ attendee_input(&form, idx, AttendeeField::Email) }
					/>
				</div>
				<div>
					<label>{ format!("Phone Number of Person {num}") }</label>
					<input
						type="tel"
						value={ person.phone.clone() }
						oninput={ attendee_input(&form, idx, AttendeeField::Phone) }
					/>
				</div>
			</div>
		}
	}).collect::<Html>();

	let payment_qr = if order.show_payment_qr() {
		html! {
			<div id="payment-qr">
				<p>{ "Scan To make Payment" }</p>
				<p><strong>{ format!("Account Name: {}", event::PAYMENT_ACCOUNT_NAME) }</strong></p>
				<img src={ event::PAYMENT_QR_SRC } alt="QR Code" width="250" height="250" />
			</div>
		}
	} else {
		html! {}
	};

	let errors = order.errors();
	let error_html = if errors.is_empty() {
		html! {}
	} else {
		html! {
			<div id="form-errors">
				{ errors.iter().map(|err| html! { <p>{ err }</p> }).collect::<Html>() }
			</div>
		}
	};

	let submitting = order.is_submitting();

	html! {
		<>
			<SharedStyle />
			<style>{ shared_data::FORM_STYLE }</style>
			<div id="ticket-page">
				{ confirmation }
				<h1>{ "Buy Ticket" }</h1>
				<div id="price-cards">{ price_cards }</div>
				<form id="ticket-form" onsubmit={ on_submit }>
					<div>
						<label>{ "Ticket Number" }</label>
						<input type="text" value={ order.reference().to_string() } readonly=true />
					</div>
					<div>
						<label>{ "Ticket Type" }</label>
						<select onchange={ ticket_change }>
							{
								TicketSelection::ALL.into_iter().map(|selection| html! {
									<option
										value={ selection.label() }
										selected={ selection == order.selection() }
									>{ selection.label() }</option>
								}).collect::<Html>()
							}
						</select>
					</div>
					<div>
						<label>{ "Amount" }</label>
						<input type="text" value={ display_price(order.unit_price()) } readonly=true />
					</div>
					<div>
						<label>{ "Number of Persons" }</label>
						<input
							type="number"
							min="1"
							max={ order.config().max_attendees.to_string() }
							value={ order.attendee_count().to_string() }
							onchange={ count_change }
						/>
						{
							match order.count_error() {
								Some(err) => html! { <p class="count-error">{ err.to_string() }</p> },
								None => html! {}
							}
						}
					</div>
					{ attendees }
					<div>
						<label>{ "Total Amount" }</label>
						<input type="text" value={ display_price(order.total_price()) } readonly=true />
					</div>
					<div>
						<button type="button" onclick={ toggle_qr }>{ "View QR Code" }</button>
						{ payment_qr }
					</div>
					<div>
						<label>{ "Upload Transaction Screenshot" }</label>
						<input
							type="file"
							accept="image/png, image/jpeg, image/jpg"
							onchange={ file_change }
						/>
					</div>
					{ error_html }
					<button type="submit" disabled={ submitting }>{
						if submitting { "Submitting..." } else { "Submit" }
					}</button>
				</form>
			</div>
		</>
	}
}
