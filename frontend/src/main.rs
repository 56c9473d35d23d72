use yew_router::prelude::*;
use yew::prelude::*;
use banner::EventBanner;
use ticket_form::TicketForm;

mod banner;
mod style;
mod ticket_form;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
	// Anything we don't know about just gets the landing page
	#[not_found]
	#[at("/")]
	Home,
	#[at("/buy-ticket")]
	BuyTicket
}

fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <EventBanner /> },
		Route::BuyTicket => html! { <TicketForm /> }
	}
}

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! {
		<BrowserRouter>
			<Switch<Route> render={switch} />
		</BrowserRouter>
	}
}

fn main() {
	yew::Renderer::<Frontend>::new().render();
}
