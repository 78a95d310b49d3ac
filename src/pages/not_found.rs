use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        background: #0a0a0a;
                        color: #fff;
                        text-align: center;
                    }
                    .not-found h1 {
                        font-size: 4rem;
                        color: #FF6B35;
                    }
                    .not-found a {
                        color: #fff;
                        font-weight: 700;
                    }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
        </div>
    }
}
