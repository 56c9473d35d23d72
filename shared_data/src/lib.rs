pub mod config;
pub mod event;
mod order;
mod roster;
mod ticket;
mod validate;

pub use config::FormConfig;
pub use order::{
	FormError,
	OrderForm,
	SubmissionPayload,
	SubmitOutcome,
	SubmitPhase,
	SubmitRejection,
	FIELD_AMOUNT,
	FIELD_PERSON_DETAILS,
	FIELD_SCREENSHOT,
	FIELD_TICKET_NUMBER,
	FIELD_TICKET_TYPE,
	FIELD_TOTAL
};
pub use roster::{parse_attendee_count, AttendeeDetail, AttendeeField, CountError, ResizePolicy, Roster};
pub use ticket::{display_price, ReferenceError, TicketReference, TicketSelection, UnknownTicketType};
pub use validate::{is_valid_email, is_valid_phone, validate, ValidationErrors, MISSING_SCREENSHOT};

pub static BASE_STYLE: &str = r#"
* {
	--brand-primary: #1e1b4b;
	--brand-accent: #facc15;
	--button: #ec4899;
	--button-hover: #db2777;
	--footer-background: #1d4ed8;
	--muted-text: #374151;
	--border-color: #d1d5db;
	--readonly-background: #f3f4f6;
	--error-text: #ef4444;
	font-family: Arial, sans-serif;
	box-sizing: border-box;
}
body {
	margin: 0;
}
button, .button-link {
	background-color: var(--button);
	color: white;
	border: none;
	border-radius: 8px;
	padding: 8px 24px;
	font-weight: 600;
	text-decoration: none;
	transition: background-color 0.3s;
	cursor: pointer;
}
button:hover, .button-link:hover {
	background-color: var(--button-hover);
}
button:disabled {
	opacity: 0.6;
	cursor: wait;
}
"#;

pub static BANNER_STYLE: &str = r"
#banner {
	position: relative;
	display: flex;
	flex-direction: column;
	justify-content: space-between;
	height: 100vh;
	overflow: hidden;
	color: white;
	background-color: var(--brand-primary);
}
#banner-content {
	display: flex;
	flex-wrap: wrap;
	align-items: center;
	max-width: 1100px;
	margin: 0 auto;
	padding: 48px 16px;
}
#banner-text {
	flex: 1;
	min-width: 280px;
}
#banner-text h1 {
	font-size: 3.5rem;
	margin-bottom: 16px;
}
#banner-text p {
	font-size: 1.25rem;
	margin-bottom: 24px;
}
.highlight {
	color: var(--brand-accent);
}
#banner-image {
	flex: 1;
	display: flex;
	justify-content: center;
	margin-top: 32px;
}
#banner-image img {
	width: 320px;
	height: 320px;
	object-fit: cover;
}
#banner-footer {
	position: absolute;
	bottom: 0;
	width: 100%;
	padding: 16px 0;
	text-align: center;
	font-weight: 600;
	font-size: 1.15rem;
	background-color: var(--footer-background);
}
";

pub static FORM_STYLE: &str = r"
#ticket-page {
	min-height: 100vh;
	padding: 32px;
	background-color: white;
	color: black;
}
#ticket-page > h1 {
	text-align: center;
	margin-bottom: 32px;
}
#price-cards {
	display: flex;
	justify-content: center;
	gap: 16px;
	margin-bottom: 32px;
}
.price-card {
	min-width: 160px;
	padding: 4px 8px;
	border-radius: 2px;
	color: white;
	background-color: var(--button);
}
.price-card h2, .price-card p {
	margin: 2px 0;
	font-size: 1rem;
	color: white;
}
#ticket-form {
	max-width: 32rem;
	margin: 0 auto;
	display: flex;
	flex-direction: column;
	gap: 16px;
}
#ticket-form label {
	display: block;
	font-size: 0.875rem;
	font-weight: 500;
	color: var(--muted-text);
}
#ticket-form input, #ticket-form select {
	width: 100%;
	margin-top: 4px;
	padding: 8px 12px;
	border: 1px solid var(--border-color);
	border-radius: 6px;
}
#ticket-form input[readonly] {
	background-color: var(--readonly-background);
}
.attendee {
	display: flex;
	flex-direction: column;
	gap: 8px;
}
.count-error, #form-errors p {
	font-size: 0.875rem;
	color: var(--error-text);
	margin: 2px 0;
}
#ticket-form button {
	width: 100%;
}
#payment-qr {
	margin-top: 16px;
	padding: 16px;
	border: 1px solid var(--border-color);
	border-radius: 8px;
	text-align: center;
}
#payment-qr img {
	display: block;
	margin: 8px auto 0 auto;
}
#confirmation-backdrop {
	position: fixed;
	inset: 0;
	display: flex;
	align-items: center;
	justify-content: center;
	background-color: rgba(0, 0, 0, 0.5);
}
#confirmation {
	padding: 24px;
	border-radius: 8px;
	text-align: center;
	background-color: white;
	box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
}
";
