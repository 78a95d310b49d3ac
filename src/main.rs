use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod error;
mod lifecycle;
mod perf;
mod scroll {
    pub mod progress;
    pub mod smooth;
    pub mod trigger;
    pub mod tween;
}
mod motion {
    pub mod engine;
    pub mod entrance;
    pub mod player;
    pub mod timeline;
}
mod components {
    pub mod back_to_top;
    pub mod carousel;
    pub mod confetti;
    pub mod lazy_section;
    pub mod typewriter;
}
mod sections {
    pub mod case_studies;
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod services;
    pub mod team;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use motion::engine::Motion;
use pages::{landing::Landing, not_found::NotFound};

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
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // Chosen once; every section reads it from context.
    let motion = use_memo(|_| Motion::detect(), ());

    html! {
        <ContextProvider<Motion> context={(*motion).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Motion>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
