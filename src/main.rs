use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod controller;
mod error;
mod scroll_lock;
mod starfield;
mod styles;
mod subscriptions;
mod components {
    pub mod card_picker;
    pub mod floating_cta;
    pub mod legal_modal;
    pub mod nav;
    pub mod starfield;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;
use styles::GlobalStyles;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyles />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
