use yew::prelude::*;
use yew_router::components::Link;
use shared_data::event;
use crate::{style::SharedStyle, Route};

#[function_component(EventBanner)]
pub fn event_banner() -> Html {
	html! {
		<>
			<SharedStyle />
			<style>{ shared_data::BANNER_STYLE }</style>
			<div id="banner">
				<div id="banner-content">
					<div id="banner-text">
						<h1>
							{ "Join the " }
							<span class="highlight">{ event::EVENT_NAME }</span>
							{ " of the year" }
						</h1>
						<p>{ event::BLURB }</p>
						<Link<Route> to={ Route::BuyTicket } classes="button-link">
							{ "Book a Seat" }
						</Link<Route>>
					</div>
					<div id="banner-image">
						<img src={ event::ILLUSTRATION_SRC } alt="Event Illustration" />
					</div>
				</div>
				<div id="banner-footer">
					<p>{ event::footer_line() }</p>
				</div>
			</div>
		</>
	}
}
