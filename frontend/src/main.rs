use yew_router::prelude::*;
use yew::prelude::*;
use invite::InvitePage;

mod countdown;
mod gate;
mod invite;
mod style;

#[derive(Clone, Routable, PartialEq)]
enum Route {
	// It's a single-page invite, so every path lands on it
	#[not_found]
	#[at("/")]
	Home
}

fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <InvitePage /> }
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
