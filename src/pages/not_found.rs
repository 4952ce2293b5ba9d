use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="section container" style="padding-top: 8rem; text-align: center;">
            <h1>{"Page not found"}</h1>
            <p class="muted">{"The page you were looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="button button-hero">{"Back to home"}</Link<Route>>
        </section>
    }
}
